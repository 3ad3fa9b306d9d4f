//! Decoding from sequential byte sources.
//!
//! A [`Source`] hands out bytes on request. The [`Decode`] extension trait,
//! implemented for every source, reads one value per call:
//!
//! ```
//! use bacnet_primitives::avec::Decode;
//!
//! let mut source: &[u8] = &[0x21, 0x80, 0x00, 0x00];
//!
//! let tag = source.read_tag()?;
//! let value = source.read_i24()?;
//!
//! assert_eq!(tag.tag_number, 2);
//! assert_eq!(value, -8_388_608);
//! # Ok::<(), bacnet_primitives::avec::Error>(())
//! ```
//!
//! Each decode issues a single read for exactly the bytes its width requires.
//! If fewer come back, the call fails with [`Error::IncompleteInput`] and the
//! source is left wherever that read moved it. Nothing is retried or rolled
//! back, and no state is kept between calls.

use log::trace;
use thiserror::Error;

use crate::sans::{
    Primitive,
    float::{F32, F64},
    integer::{I8, I16, I24, I32, U8, U16, U24, U32},
    tag::Tag,
};

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::Reader;

/// Errors occurring while decoding from a source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The source could not supply every byte of the value.
    #[error("Expected {expected} bytes, but the source supplied {found}.")]
    IncompleteInput { expected: usize, found: usize },
}

/// A sequential source of bytes.
pub trait Source {
    /// Read up to `buf.len()` bytes into the front of `buf`, advancing past
    /// them.
    ///
    /// Returns the number of bytes read. Fewer than requested indicates a
    /// short read, and zero that the source is exhausted. A source should
    /// return every byte it has available, up to the request, in a single
    /// call: decoders never call twice for one value.
    fn read(&mut self, buf: &mut [u8]) -> usize;
}

impl<S: Source + ?Sized> Source for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }
}

/// Decode primitives from a source.
///
/// Implemented for every [`Source`].
pub trait Decode: Source {
    /// Decode an unsigned 8-bit integer.
    fn read_u8(&mut self) -> Result<u8, Error> {
        decode::<U8, 1>(self)
    }
    /// Decode a signed 8-bit integer.
    fn read_i8(&mut self) -> Result<i8, Error> {
        decode::<I8, 1>(self)
    }
    /// Decode an unsigned 16-bit integer.
    fn read_u16(&mut self) -> Result<u16, Error> {
        decode::<U16, 2>(self)
    }
    /// Decode a signed 16-bit integer.
    fn read_i16(&mut self) -> Result<i16, Error> {
        decode::<I16, 2>(self)
    }
    /// Decode an unsigned 24-bit integer into the low three bytes of a `u32`.
    fn read_u24(&mut self) -> Result<u32, Error> {
        decode::<U24, 3>(self)
    }
    /// Decode a signed 24-bit integer, sign-extended into an `i32`.
    fn read_i24(&mut self) -> Result<i32, Error> {
        decode::<I24, 3>(self)
    }
    /// Decode an unsigned 32-bit integer.
    fn read_u32(&mut self) -> Result<u32, Error> {
        decode::<U32, 4>(self)
    }
    /// Decode a signed 32-bit integer.
    fn read_i32(&mut self) -> Result<i32, Error> {
        decode::<I32, 4>(self)
    }

    /// Decode an IEEE-754 single precision float.
    fn read_f32(&mut self) -> Result<f32, Error> {
        decode::<F32, 4>(self)
    }
    /// Decode an IEEE-754 double precision float.
    fn read_f64(&mut self) -> Result<f64, Error> {
        decode::<F64, 8>(self)
    }

    /// Decode the fields of a tag byte.
    fn read_tag(&mut self) -> Result<Tag, Error> {
        self.read_u8().map(Tag::from)
    }
}

impl<S: Source + ?Sized> Decode for S {}

fn decode<T: Primitive<From = [u8; N]>, const N: usize>(
    r: &mut (impl Source + ?Sized),
) -> Result<T::Into, Error> {
    Ok(T::decode(take(r)?))
}

/// Take an exact number of bytes from a source with a single read.
fn take<const N: usize>(r: &mut (impl Source + ?Sized)) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    let found = r.read(&mut buf);

    if found != N {
        trace!("short read: expected {} bytes, found {}", N, found);
        Err(Error::IncompleteInput { expected: N, found })?;
    }

    Ok(buf)
}
