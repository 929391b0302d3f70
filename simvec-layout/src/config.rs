//! Build-time layout configuration.
//!
//! The storage layout used to be a matter of nested toolchain conditionals;
//! here the whole surface is explicit. Cargo features select the
//! configuration, [`LayoutConfig::HOST`] and [`BuildEnv::HOST`] capture the
//! selection and the host's capabilities as data, and checking one against
//! the other is a pure function, so the resolution rules can be audited
//! and tested for environments other than the one compiling this crate.
//!
//! The configuration is fixed at build time and never runtime-mutable: code
//! generated against one unit width cannot be mixed with storage sized for
//! another.

use crate::{size, QUAD_BITS, QUAD_SHIFT, WORD_BITS, WORD_SHIFT};
use core::fmt;
use serde::{Deserialize, Serialize};

/// Native storage unit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitWidth {
    /// 32-bit words
    W32,
    /// 64-bit quads
    W64,
}

impl UnitWidth {
    /// Unit width from a raw bit count, as supplied by build tooling.
    pub const fn from_bits(bits: u32) -> Result<Self, ConfigError> {
        match bits {
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(ConfigError::UnsupportedUnitWidth(other)),
        }
    }

    /// Bits in the native unit
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => WORD_BITS,
            Self::W64 => QUAD_BITS,
        }
    }

    /// Bytes in the native unit
    #[inline]
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }

    /// log2 of the unit width: shift from a bit index to a unit index
    #[inline]
    pub const fn shift(self) -> u32 {
        match self {
            Self::W32 => WORD_SHIFT,
            Self::W64 => QUAD_SHIFT,
        }
    }

    /// Mask that extracts a bit offset within the unit
    #[inline]
    pub const fn low_mask(self) -> u32 {
        self.bits() - 1
    }

    /// Units needed to hold `bits` bits
    #[inline]
    pub const fn units_for(self, bits: usize) -> usize {
        size::units_for(bits, self.bits())
    }
}

impl fmt::Display for UnitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// Capabilities of a build environment, as data.
///
/// [`BuildEnv::HOST`] describes the environment compiling this crate; other
/// values describe targets a code generator wants to emit for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Pointer width of the target
    pub pointer_bits: u32,
    /// Whether the target has a thread-local storage declarator
    pub has_thread_local: bool,
    /// Whether the enclosing build defines the fixed-width aliases itself
    pub supplies_fixed_width_types: bool,
}

impl BuildEnv {
    /// The environment compiling this crate.
    pub const HOST: Self = Self {
        pointer_bits: usize::BITS,
        has_thread_local: cfg!(feature = "std"),
        supplies_fixed_width_types: cfg!(feature = "external-types"),
    };
}

/// Build-time layout configuration, assembled from cargo features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Native storage unit backing generated signal storage
    pub unit: UnitWidth,
    /// Storage built on these primitives must be declared thread-local
    pub threadsafe: bool,
    /// The enclosing build supplies its own fixed-width aliases
    pub external_types: bool,
}

impl LayoutConfig {
    /// The configuration this crate was compiled with.
    pub const HOST: Self = Self {
        unit: if cfg!(feature = "unit-64") {
            UnitWidth::W64
        } else {
            UnitWidth::W32
        },
        threadsafe: cfg!(feature = "threadsafe"),
        external_types: cfg!(feature = "external-types"),
    };

    /// Build a configuration from raw parts, as supplied by build tooling.
    pub const fn from_parts(
        unit_bits: u32,
        threadsafe: bool,
        external_types: bool,
    ) -> Result<Self, ConfigError> {
        let unit = match UnitWidth::from_bits(unit_bits) {
            Ok(unit) => unit,
            Err(e) => return Err(e),
        };
        Ok(Self {
            unit,
            threadsafe,
            external_types,
        })
    }

    /// Check this configuration against a build environment.
    ///
    /// `HOST` against [`BuildEnv::HOST`] always passes; the same rules are
    /// enforced at compile time by `const` asserts and `compile_error!`.
    /// Every failure is fatal to the build being checked.
    #[cfg(feature = "std")]
    pub fn check(&self, env: &BuildEnv) -> Result<(), crate::error::LayoutError> {
        use crate::error::LayoutError;

        if env.pointer_bits < WORD_BITS {
            return Err(LayoutError::UnsupportedPlatform {
                pointer_bits: env.pointer_bits,
            });
        }
        if self.threadsafe && !env.has_thread_local {
            return Err(LayoutError::UnsupportedThreadingModel);
        }
        if env.supplies_fixed_width_types && !self.external_types {
            return Err(LayoutError::RedefinitionConflict);
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::HOST
    }
}

impl fmt::Display for LayoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LayoutConfig {{ unit: {}, threadsafe: {}, external_types: {} }}",
            self.unit, self.threadsafe, self.external_types,
        )
    }
}

/// Resolve the host layout, once, at startup of any tool that needs it.
///
/// Validates [`LayoutConfig::HOST`] against [`BuildEnv::HOST`] and logs the
/// resolved layout.
#[cfg(feature = "std")]
pub fn resolve() -> Result<LayoutConfig, crate::error::LayoutError> {
    let config = LayoutConfig::HOST;
    config.check(&BuildEnv::HOST)?;
    tracing::debug!(
        unit_bits = config.unit.bits(),
        threadsafe = config.threadsafe,
        external_types = config.external_types,
        "resolved storage layout"
    );
    Ok(config)
}

/// Configuration description errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Native unit width must be 32 or 64 bits
    UnsupportedUnitWidth(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedUnitWidth(bits) => {
                write!(f, "native unit width must be 32 or 64 bits, got {}", bits)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_width_accessors() {
        assert_eq!(UnitWidth::W32.bits(), 32);
        assert_eq!(UnitWidth::W32.bytes(), 4);
        assert_eq!(UnitWidth::W32.shift(), 5);
        assert_eq!(UnitWidth::W32.low_mask(), 31);

        assert_eq!(UnitWidth::W64.bits(), 64);
        assert_eq!(UnitWidth::W64.bytes(), 8);
        assert_eq!(UnitWidth::W64.shift(), 6);
        assert_eq!(UnitWidth::W64.low_mask(), 63);
    }

    #[test]
    fn test_unit_width_sizing_dispatch() {
        assert_eq!(UnitWidth::W32.units_for(70), 3);
        assert_eq!(UnitWidth::W64.units_for(70), 2);
        assert_eq!(UnitWidth::W32.units_for(64), 2);
        assert_eq!(UnitWidth::W64.units_for(64), 1);
    }

    #[test]
    fn test_unit_width_from_bits() {
        assert_eq!(UnitWidth::from_bits(32), Ok(UnitWidth::W32));
        assert_eq!(UnitWidth::from_bits(64), Ok(UnitWidth::W64));
        assert_eq!(
            UnitWidth::from_bits(16),
            Err(ConfigError::UnsupportedUnitWidth(16))
        );
        assert_eq!(
            UnitWidth::from_bits(0),
            Err(ConfigError::UnsupportedUnitWidth(0))
        );
    }

    #[test]
    fn test_config_from_parts() {
        let config = LayoutConfig::from_parts(64, true, false).unwrap();
        assert_eq!(config.unit, UnitWidth::W64);
        assert!(config.threadsafe);
        assert!(!config.external_types);

        assert_eq!(
            LayoutConfig::from_parts(48, false, false),
            Err(ConfigError::UnsupportedUnitWidth(48))
        );
    }

    #[test]
    fn test_host_config_matches_features() {
        let host = LayoutConfig::HOST;
        assert_eq!(host.unit == UnitWidth::W64, cfg!(feature = "unit-64"));
        assert_eq!(host.threadsafe, cfg!(feature = "threadsafe"));
        assert_eq!(host.external_types, cfg!(feature = "external-types"));
        assert_eq!(LayoutConfig::default(), host);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_host_config_checks_against_host_env() {
        assert!(LayoutConfig::HOST.check(&BuildEnv::HOST).is_ok());
        assert_eq!(resolve().unwrap(), LayoutConfig::HOST);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_check_rejects_narrow_pointers() {
        use crate::error::LayoutError;

        let env = BuildEnv {
            pointer_bits: 16,
            ..BuildEnv::HOST
        };
        assert_eq!(
            LayoutConfig::HOST.check(&env),
            Err(LayoutError::UnsupportedPlatform { pointer_bits: 16 })
        );
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_check_rejects_threadsafe_without_thread_local() {
        use crate::error::LayoutError;

        let config = LayoutConfig {
            threadsafe: true,
            ..LayoutConfig::HOST
        };
        let env = BuildEnv {
            has_thread_local: false,
            ..BuildEnv::HOST
        };
        assert_eq!(config.check(&env), Err(LayoutError::UnsupportedThreadingModel));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_check_requires_the_override_when_types_are_supplied() {
        use crate::error::LayoutError;

        let env = BuildEnv {
            supplies_fixed_width_types: true,
            ..BuildEnv::HOST
        };
        let config = LayoutConfig {
            external_types: false,
            ..LayoutConfig::HOST
        };
        assert_eq!(config.check(&env), Err(LayoutError::RedefinitionConflict));

        let suppressed = LayoutConfig {
            external_types: true,
            ..config
        };
        assert!(suppressed.check(&env).is_ok());
    }

    #[test]
    fn test_display_summarizes_the_layout() {
        let config = LayoutConfig::from_parts(32, false, false).unwrap();
        assert_eq!(
            config.to_string(),
            "LayoutConfig { unit: 32-bit, threadsafe: false, external_types: false }"
        );
    }
}
