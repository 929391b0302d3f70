//! Canonical fixed-width storage types.
//!
//! Generated code names its storage through these aliases so that a signal
//! declaration reads the same on every target. Rust guarantees the width and
//! two's-complement signedness of `u8`..`u64` and `i32`/`i64` everywhere, so
//! the table is a compile-time binding with no runtime behavior; the audits
//! below pin the assumptions the layout rules depend on.
//!
//! A build that already supplies its own aliases enables the
//! `external-types` feature, which omits this module entirely. The layout
//! primitives are defined over the primitive types directly and keep working
//! either way.

use core::mem::size_of;

/// 8-bit unsigned storage type
pub type Byte = u8;

/// 16-bit unsigned storage type
pub type Short = u16;

/// 32-bit unsigned word, the canonical storage unit
pub type Word = u32;

/// 64-bit unsigned quad, the wide storage unit
pub type Quad = u64;

/// 32-bit signed counterpart of [`Word`]
pub type SWord = i32;

/// 64-bit signed counterpart of [`Quad`]
pub type SQuad = i64;

const _: () = assert!(Byte::BITS == 8 && size_of::<Byte>() == 1);
const _: () = assert!(Short::BITS == 16 && size_of::<Short>() == 2);
const _: () = assert!(Word::BITS == 32 && size_of::<Word>() == 4);
const _: () = assert!(Quad::BITS == 64 && size_of::<Quad>() == 8);
const _: () = assert!(SWord::BITS == 32 && SWord::MIN < 0);
const _: () = assert!(SQuad::BITS == 64 && SQuad::MIN < 0);
