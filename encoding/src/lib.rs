//! DICOM encoding primitives of the data set codec.
//!
//! This crate provides the [`ByteCursor`] over which data sets are
//! decoded and encoded, the [transfer syntax specifier] which
//! governs the wire layout, and text and compression helpers.
//!
//! All APIs work on in-memory buffers.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod cursor;
pub mod deflate;
pub mod text;
pub mod transfer_syntax;

pub use byteordered::Endianness;
pub use cursor::{BufferOverrun, ByteCursor};
pub use transfer_syntax::{TransferSyntax, UnsupportedSyntax};
