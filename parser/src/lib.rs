#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This crate reads and writes DICOM data sets
//! in any of the supported transfer syntaxes.
//!
//! - [`decode`] turns bytes into a [`DataSet`](dcmcodec_core::DataSet),
//!   either strictly or skipping malformed elements.
//! - [`encode`] turns a data set back into bytes,
//!   and calculates group lengths.
//! - [`meta`] adds the DICOM Part 10 file framing:
//!   the preamble and the file meta group.
//!
//! # Example
//!
//! ```
//! use dcmcodec_core::{DataSet, Tag, Value, VR};
//! use dcmcodec_encoding::transfer_syntax::EXPLICIT_VR_LITTLE_ENDIAN;
//!
//! let mut dataset = DataSet::new();
//! dataset.put(Tag(0x0010, 0x0010), Value::str(VR::PN, "Doe^John")?);
//! dataset.put(Tag(0x0028, 0x0010), Value::us(512));
//!
//! let bytes = dcmcodec_parser::encode(&dataset, &EXPLICIT_VR_LITTLE_ENDIAN)?;
//! let decoded = dcmcodec_parser::decode(&bytes, &EXPLICIT_VR_LITTLE_ENDIAN)?;
//! assert_eq!(decoded, dataset);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decode;
pub mod encode;
pub mod meta;

pub use decode::{decode, decode_lenient, DecodeOptions, Decoder, Step};
pub use encode::{encode, group_length, EncodeOptions, Encoder, SequenceLength};
pub use meta::{
    open_file, read_file, save_file, write_file, FileDataSet, ReadOptions, WriteMetaOptions,
};
