//! Storage sizing for wide values.
//!
//! A `bits`-wide value occupies `ceil(bits / unit)` storage units. The
//! helpers here are integer-only and overflow-free for any `usize` width;
//! widths of 2^24 bits and beyond appear in wide memory and bus models.

use crate::{BYTE_BITS, QUAD_BITS, WORD_BITS};

/// Units of `unit_bits` needed to hold `bits` bits.
///
/// `unit_bits` is one of 8, 32 or 64. A width that is an exact multiple of
/// the unit occupies exactly `bits / unit_bits` units, never one more.
#[inline]
pub const fn units_for(bits: usize, unit_bits: u32) -> usize {
    debug_assert!(unit_bits == BYTE_BITS || unit_bits == WORD_BITS || unit_bits == QUAD_BITS);
    let unit = unit_bits as usize;
    bits / unit + (bits % unit != 0) as usize
}

/// Bytes needed to hold `bits` bits (a 1-bit value still takes 1 byte).
#[inline]
pub const fn bytes_for(bits: usize) -> usize {
    units_for(bits, BYTE_BITS)
}

/// Words needed to hold `bits` bits (a 1-bit value still takes 1 word).
#[inline]
pub const fn words_for(bits: usize) -> usize {
    units_for(bits, WORD_BITS)
}

/// Quads needed to hold `bits` bits.
#[inline]
pub const fn quads_for(bits: usize) -> usize {
    units_for(bits, QUAD_BITS)
}
