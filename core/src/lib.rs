#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of the DICOM data set codec,
//! containing the data structures shared by the encoding and parsing crates.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types of DICOM element headers,
//!   including DICOM tags, value representations and lengths.
//! - [`value`] holds the definition of a single element value,
//!   whose payload type always matches its value representation.
//! - [`dataset`] contains the ordered, tag-keyed collection of values.
//! - [`dictionary`] describes the common behavior of DICOM data dictionaries,
//!   which translate tags to attribute information.
//! - [`uid`] validates and generates unique identifiers.

pub mod dataset;
pub mod dictionary;
pub mod header;
pub mod uid;
pub mod value;

pub use dataset::DataSet;
pub use dictionary::{DataDictionary, DictionaryEntry, UnknownTagError};
pub use header::{DataElementHeader, Length, SequenceItemHeader, StringPolicy, Tag, VR};
pub use uid::{InvalidUidError, Uid};
pub use value::{Sequence, TypeMismatch, Value, ValueData, ValueType};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;
