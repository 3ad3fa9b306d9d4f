//! Reader-based source implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::Read;

use log::debug;

use super::Source;

extern crate std;

/// A source reading from a [`Read`] implementation.
///
/// Each decode issues exactly one [`Read::read`] call. An error from the
/// reader counts as zero bytes read, and so surfaces as
/// [`IncompleteInput`](super::Error::IncompleteInput); the error itself is
/// logged at debug level.
///
/// Opening and closing the underlying reader is left to the caller.
///
/// _Requires Cargo feature `std`._
#[derive(Debug)]
pub struct Reader<R>(R);

impl<R: Read> Reader<R> {
    /// Wrap a reader.
    pub fn new(r: R) -> Self {
        Self(r)
    }

    /// Borrow the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.0
    }

    /// Mutably borrow the wrapped reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.0
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Read> Source for Reader<R> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        match Read::read(&mut self.0, buf) {
            Ok(n) => n,
            Err(err) => {
                debug!("reader failed after requesting {} bytes: {err}", buf.len());
                0
            }
        }
    }
}
