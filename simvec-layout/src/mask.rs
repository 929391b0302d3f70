//! Top-unit masking.
//!
//! When a value's width is not a multiple of its storage-unit width, the
//! most-significant unit carries dead bits above the logical width.
//! Operations that can set them (shifts, negation, subtraction borrows) must
//! clear them afterwards so the dead bits always read as zero.
//!
//! [`word_mask`] and [`quad_mask`] return the pattern with 1s over the live
//! bits of that top unit, or zero: the sentinel meaning the width fills its
//! units exactly and no masking is required. The zero sentinel never means
//! "clear the whole unit": a full top unit has nothing to clear. Callers
//! that do not want to make that distinction themselves go through
//! [`clean_word`] / [`clean_quad`], which fold it in.

use crate::{QUAD_LOW_MASK, WORD_LOW_MASK};

/// Mask with 1s over the live bits of the most-significant word of a
/// `bits`-wide value, or 0 if the width fills whole words (no masking
/// required).
#[inline]
pub const fn word_mask(bits: usize) -> u32 {
    // Shifting a u32 by 32 is not defined; the sentinel branch keeps the
    // shift in 1..=31.
    let live = bits & WORD_LOW_MASK as usize;
    if live != 0 {
        (1u32 << live) - 1
    } else {
        0
    }
}

/// Mask with 1s over the live bits of the most-significant quad of a
/// `bits`-wide value, or 0 if the width fills whole quads (no masking
/// required).
#[inline]
pub const fn quad_mask(bits: usize) -> u64 {
    let live = bits & QUAD_LOW_MASK as usize;
    if live != 0 {
        (1u64 << live) - 1
    } else {
        0
    }
}

/// Clear the dead bits in the most-significant word of a `bits`-wide value.
///
/// Identity when the width fills whole words. Idempotent.
#[inline]
pub const fn clean_word(word: u32, bits: usize) -> u32 {
    match word_mask(bits) {
        0 => word,
        m => word & m,
    }
}

/// Clear the dead bits in the most-significant quad of a `bits`-wide value.
///
/// Identity when the width fills whole quads. Idempotent.
#[inline]
pub const fn clean_quad(quad: u64, bits: usize) -> u64 {
    match quad_mask(bits) {
        0 => quad,
        m => quad & m,
    }
}
