//! # simvec-layout
//!
//! Word-layout primitives for wide simulation signal values.
//!
//! Generated simulation code packs each logical signal, whatever its bit
//! width, into an array of fixed-width storage units. This crate defines the
//! layout rules that code is generated against:
//!
//! - Canonical storage types (`Byte`, `Short`, `Word`, `Quad` and the signed
//!   `SWord`/`SQuad`)
//! - Storage sizing: how many bytes, words or quads a bit width occupies
//! - Top-unit masking: clearing the dead bits above the logical width
//! - Bit addressing: locating a logical bit inside unit-packed storage
//!
//! Everything on the hot path is a pure `#[inline] const fn` over integer
//! inputs. Nothing here allocates or carries state, so every operation is
//! safe to call concurrently without synchronization.
//!
//! The build-time configuration surface (native unit width, thread-safety,
//! externally supplied aliases) lives in [`config`]; it is fixed per build,
//! since code generated against one unit width cannot be mixed with storage
//! sized for another.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod addr;
pub mod config;
#[cfg(feature = "std")]
pub mod error;
pub mod mask;
pub mod size;
#[cfg(not(feature = "external-types"))]
pub mod types;

pub use addr::{bit_in_quad, bit_in_word, locate_quad, locate_word, quad_of, word_of, BitAddr};
#[cfg(feature = "std")]
pub use config::resolve;
pub use config::{BuildEnv, ConfigError, LayoutConfig, UnitWidth};
#[cfg(feature = "std")]
pub use error::LayoutError;
pub use mask::{clean_quad, clean_word, quad_mask, word_mask};
pub use size::{bytes_for, quads_for, units_for, words_for};
#[cfg(not(feature = "external-types"))]
pub use types::{Byte, Quad, SQuad, SWord, Short, Word};

#[cfg(all(feature = "threadsafe", not(feature = "std")))]
compile_error!(
    "feature `threadsafe` requires `std`: there is no thread-local declarator without the standard library"
);

/// Bits in a byte
pub const BYTE_BITS: u32 = 8;

/// Bits in a short
pub const SHORT_BITS: u32 = 16;

/// Bits in a word, the 32-bit storage unit
pub const WORD_BITS: u32 = 32;

/// Bits in a quad, the 64-bit storage unit
pub const QUAD_BITS: u32 = 64;

/// log2(WORD_BITS): shift from a bit index to a word index
pub const WORD_SHIFT: u32 = 5;

/// log2(QUAD_BITS): shift from a bit index to a quad index
pub const QUAD_SHIFT: u32 = 6;

/// Mask that extracts a bit offset within a word
pub const WORD_LOW_MASK: u32 = WORD_BITS - 1;

/// Mask that extracts a bit offset within a quad
pub const QUAD_LOW_MASK: u32 = QUAD_BITS - 1;

// Unit widths must be powers of two: bit addressing is shift/mask, and the
// offset masks above are only valid under that assumption.
const _: () = assert!(WORD_BITS.is_power_of_two() && (1u32 << WORD_SHIFT) == WORD_BITS);
const _: () = assert!(QUAD_BITS.is_power_of_two() && (1u32 << QUAD_SHIFT) == QUAD_BITS);

// Unit counts and bit indices are `usize`; a sub-32-bit host cannot address
// the storage this layout describes.
const _: () = assert!(usize::BITS >= 32);
