//! Build-time error taxonomy.
//!
//! Every failure here is fatal to the build being resolved; the layout
//! primitives themselves are total over their documented domains and have
//! no recoverable runtime errors. For the host build the same conditions
//! are enforced by `const` asserts and `compile_error!`; this enum exists
//! so the resolution rules can be exercised as data for other environments
//! (see [`LayoutConfig::check`](crate::LayoutConfig::check)).

use crate::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Word indexing needs at least 32-bit pointers.
    #[error("Unsupported platform: {pointer_bits}-bit pointers (need 32 or more)")]
    UnsupportedPlatform { pointer_bits: u32 },

    #[error("Thread-local storage requested, but the build environment has no thread-local declarator")]
    UnsupportedThreadingModel,

    #[error("Fixed-width aliases are already supplied by the enclosing build; enable the `external-types` override")]
    RedefinitionConflict,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
