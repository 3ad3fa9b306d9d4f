#![no_std]

//! Decoding of the fixed-width primitives carried by BACnet application tags.
//!
//! Values are read big-endian from a sequential byte source: unsigned and
//! signed integers of one to four bytes (including the 24-bit widths, widened
//! into 32-bit containers), IEEE-754 single and double precision floats, and
//! the packed tag byte that heads each tag-length-value encoding.
//!
//! Most users should begin with the [`Decode`](avec::Decode) extension trait
//! in the [`avec`] module, which is available on every [`Source`](avec::Source).
//! Applications that already hold the bytes of a value can convert them
//! directly with the types in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable [`avec::Reader`], the adapter for `std::io::Read` sources
//!   (default).

pub mod avec;
pub mod sans;
