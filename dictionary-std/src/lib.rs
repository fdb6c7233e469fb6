//! This crate implements the standard DICOM data dictionary and constants
//! used by the data set codec.
//!
//! ## Run-time dictionaries
//!
//! - [`data_element`]: information about commonly used DICOM attributes,
//!   used by default when decoding implicit VR data sets.
//!   Group length and private creator tags are resolved generically.
//!   [`ExtendedDataDictionary`] layers entries registered at run time,
//!   such as private attributes, on top of it.
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{ExtendedDataDictionary, StandardDataDictionary, StandardDataDictionaryRegistry};
