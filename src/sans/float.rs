//! IEEE-754 binary32 and binary64 widths.
//!
//! The assembled bit pattern is split into its sign, exponent and mantissa
//! fields and put back together as the float's bit representation. This is a
//! reinterpretation, not a numeric conversion: NaN payloads, signed zeros,
//! subnormals and both infinities come through unchanged.

use tartan_bitfield::bitfield;

use super::{Primitive, be_bits};

bitfield! {
    struct Binary32(u32) {
        [0..23] mantissa: u32,
        [23..31] exponent: u32,
        [31] sign,
    }
}

bitfield! {
    struct Binary64(u64) {
        [0..52] mantissa: u64,
        [52..63] exponent: u64,
        [63] sign,
    }
}

/// IEEE-754 single precision float.
///
/// Decoding reinterprets the bits; the fields are carried over unchanged, never
/// converted numerically.
#[derive(Debug)]
pub struct F32;

impl Primitive for F32 {
    type From = [u8; 4];
    type Into = f32;

    fn decode(r: Self::From) -> Self::Into {
        let layout = Binary32(be_bits(r) as u32);

        let bits = (u32::from(layout.sign()) << 31) | (layout.exponent() << 23) | layout.mantissa();

        f32::from_bits(bits)
    }
}

/// IEEE-754 double precision float.
///
/// Decoding reinterprets the bits, as for [`F32`].
#[derive(Debug)]
pub struct F64;

impl Primitive for F64 {
    type From = [u8; 8];
    type Into = f64;

    fn decode(r: Self::From) -> Self::Into {
        let layout = Binary64(be_bits(r));

        let bits = (u64::from(layout.sign()) << 63) | (layout.exponent() << 52) | layout.mantissa();

        f64::from_bits(bits)
    }
}
