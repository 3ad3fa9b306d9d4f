//! Integer widths.

use super::{Primitive, be_bits};

macro_rules! integer {
    ($t:ident, $n:literal, $into:ident, $bits:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug)]
        pub struct $t;

        impl Primitive for $t {
            type From = [u8; $n];
            type Into = $into;

            fn decode(r: Self::From) -> Self::Into {
                // Narrowing keeps exactly the `8 * $n` assembled bits; the
                // signed types then take them as two's complement.
                be_bits(r) as $bits as $into
            }
        }
    };
}

integer!(U8, 1, u8, u8, /** Unsigned 8-bit integer. */);
integer!(U16, 2, u16, u16, /** Unsigned 16-bit integer. */);
integer!(U32, 4, u32, u32, /** Unsigned 32-bit integer. */);

integer!(I8, 1, i8, u8, /** Signed 8-bit integer. */);
integer!(I16, 2, i16, u16, /** Signed 16-bit integer. */);
integer!(I32, 4, i32, u32, /** Signed 32-bit integer. */);

const LOW_24: u32 = 0x00FF_FFFF;
const SIGN_24: u32 = 0x0080_0000;
const HIGH_BYTE: u32 = 0xFF00_0000;

/// Unsigned 24-bit integer, widened into a `u32` with a zero top byte.
#[derive(Debug)]
pub struct U24;

impl Primitive for U24 {
    type From = [u8; 3];
    type Into = u32;

    fn decode(r: Self::From) -> Self::Into {
        be_bits(r) as u32 & LOW_24
    }
}

/// Signed 24-bit integer, sign-extended into an `i32`.
#[derive(Debug)]
pub struct I24;

impl Primitive for I24 {
    type From = [u8; 3];
    type Into = i32;

    fn decode(r: Self::From) -> Self::Into {
        let low = be_bits(r) as u32 & LOW_24;

        // The top byte replicates bit 23.
        let high = if low & SIGN_24 != 0 { HIGH_BYTE } else { 0 };

        (high | low) as i32
    }
}
