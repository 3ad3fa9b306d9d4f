//! Source-independent conversions from raw bytes to decoded values.
//!
//! Every width is represented by a zero-size marker type implementing
//! [`Primitive`]. The marker fixes the number of bytes consumed through its
//! associated `From` array, and the Rust type produced through `Into`:
//!
//! | Marker | Bytes | Produces |
//! |--------|-------|----------|
//! | [`U8`](integer::U8) / [`I8`](integer::I8) | 1 | `u8` / `i8` |
//! | [`U16`](integer::U16) / [`I16`](integer::I16) | 2 | `u16` / `i16` |
//! | [`U24`](integer::U24) / [`I24`](integer::I24) | 3 | `u32` / `i32` |
//! | [`U32`](integer::U32) / [`I32`](integer::I32) | 4 | `u32` / `i32` |
//! | [`F32`](float::F32) | 4 | `f32` |
//! | [`F64`](float::F64) | 8 | `f64` |
//!
//! Bytes are always most significant first. Values are assembled with shifts
//! and masks, never by reinterpreting memory, so the result does not depend on
//! the byte order of the host.
//!
//! All bit patterns are accepted. There is no failure at this layer; a value
//! can only be missing because its bytes could not be read, which is the
//! concern of [`crate::avec`].

pub mod float;
pub mod integer;
pub mod tag;

/// A fixed-width value decoded from big-endian bytes.
pub trait Primitive {
    /// The bytes storing this value.
    type From;
    /// The Rust type this value decodes to.
    type Into;

    /// Convert the bytes of this value to the corresponding Rust type.
    fn decode(r: Self::From) -> Self::Into;
}

/// Reassemble big-endian bytes into the low bits of a `u64`.
///
/// The first byte lands in the most significant occupied position; bits above
/// `8 * N` are zero.
pub(crate) fn be_bits<const N: usize>(r: [u8; N]) -> u64 {
    debug_assert!(N <= 8);
    r.iter().fold(0, |acc, b| (acc << 8) | u64::from(*b))
}
