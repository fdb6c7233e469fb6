//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! A [`Value`] pairs a value representation with exactly one payload,
//! held in the closed sum type [`ValueData`].
//! Multiple values of the same element are kept as separate entries
//! of a [`DataSet`](crate::dataset::DataSet).

use crate::dataset::DataSet;
use crate::header::{Tag, VR};
use crate::uid::{InvalidUidError, Uid};
use chrono::{NaiveDate, NaiveTime};
use smallvec::SmallVec;
use snafu::{ensure, OptionExt, Snafu};
use std::fmt;

pub mod fragments;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// The items of a sequence value.
pub type Sequence = C<DataSet>;

/// The kind of payload held by a value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// No payload.
    Empty,
    /// Text.
    Str,
    /// A unique identifier.
    Uid,
    /// An attribute tag.
    Tag,
    /// An unsigned 16-bit integer.
    U16,
    /// A signed 16-bit integer.
    I16,
    /// An unsigned 32-bit integer.
    U32,
    /// A signed 32-bit integer.
    I32,
    /// A single precision floating point number.
    F32,
    /// A double precision floating point number.
    F64,
    /// A sequence of bytes.
    Bytes,
    /// A sequence of 16-bit words.
    Words,
    /// A sequence of nested data sets.
    Sequence,
}

/// Error raised when a value is requested as a type it does not hold.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("requested {:?} value, but {} value holds {:?}", requested, vr, got))]
pub struct TypeMismatch {
    /// The value representation of the value.
    pub vr: VR,
    /// The requested payload type.
    pub requested: ValueType,
    /// The payload type actually held.
    pub got: ValueType,
}

/// Error raised when a value could not be converted
/// into the requested type.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum ConvertValueError {
    /// The value representation cannot be converted to the requested type.
    #[snafu(display("cannot convert {} value to {}", vr, target))]
    Unsupported { vr: VR, target: &'static str },
    /// The textual content could not be parsed.
    #[snafu(display("could not parse {:?} as {}", text, target))]
    Parse { text: String, target: &'static str },
}

/// The payload of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueData {
    /// An empty value, valid for any value representation.
    Empty,
    /// Text, for all string representations except UI.
    Str(String),
    /// A unique identifier (UI).
    Uid(Uid),
    /// An attribute tag (AT).
    Tag(Tag),
    /// US
    U16(u16),
    /// SS
    I16(i16),
    /// UL
    U32(u32),
    /// SL
    I32(i32),
    /// FL
    F32(f32),
    /// FD
    F64(f64),
    /// OB and UN
    Bytes(Vec<u8>),
    /// OW
    Words(Vec<u16>),
    /// SQ
    Sequence(Sequence),
}

impl ValueData {
    /// The kind of payload held.
    pub fn value_type(&self) -> ValueType {
        match self {
            ValueData::Empty => ValueType::Empty,
            ValueData::Str(_) => ValueType::Str,
            ValueData::Uid(_) => ValueType::Uid,
            ValueData::Tag(_) => ValueType::Tag,
            ValueData::U16(_) => ValueType::U16,
            ValueData::I16(_) => ValueType::I16,
            ValueData::U32(_) => ValueType::U32,
            ValueData::I32(_) => ValueType::I32,
            ValueData::F32(_) => ValueType::F32,
            ValueData::F64(_) => ValueType::F64,
            ValueData::Bytes(_) => ValueType::Bytes,
            ValueData::Words(_) => ValueType::Words,
            ValueData::Sequence(_) => ValueType::Sequence,
        }
    }
}

/// A single value of a data element:
/// a value representation and a payload of the matching type.
///
/// The payload type is checked against the VR on construction,
/// so a value of VR `US` always holds either a `u16` or nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    vr: VR,
    data: ValueData,
}

macro_rules! scalar_constructor {
    ($(#[$meta:meta])* $name: ident, $vr: ident, $t: ty, $variant: ident) => {
        $(#[$meta])*
        #[inline]
        pub fn $name(value: $t) -> Self {
            Value {
                vr: VR::$vr,
                data: ValueData::$variant(value),
            }
        }
    };
}

macro_rules! accessor {
    ($(#[$meta:meta])* $name: ident, $t: ty, $variant: ident) => {
        $(#[$meta])*
        pub fn $name(&self) -> Result<$t, TypeMismatch> {
            match &self.data {
                ValueData::$variant(v) => Ok(*v),
                _ => Err(self.mismatch(ValueType::$variant)),
            }
        }
    };
}

impl Value {
    /// Create a value from its parts,
    /// failing if the payload does not fit the value representation.
    pub fn new(vr: VR, data: ValueData) -> Result<Self, TypeMismatch> {
        let got = data.value_type();
        ensure!(
            got == ValueType::Empty || got == vr.value_type(),
            TypeMismatchSnafu {
                vr,
                requested: vr.value_type(),
                got,
            }
        );
        Ok(Value { vr, data })
    }

    /// Create an empty value of the given representation.
    #[inline]
    pub fn empty(vr: VR) -> Self {
        Value {
            vr,
            data: ValueData::Empty,
        }
    }

    /// Create a textual value.
    ///
    /// Fails if `vr` is not a string representation.
    /// UIDs are created with [`Value::uid`] instead.
    pub fn str(vr: VR, text: impl Into<String>) -> Result<Self, TypeMismatch> {
        Value::new(vr, ValueData::Str(text.into()))
    }

    /// Create a UI value, validating the given text as a UID.
    pub fn uid(text: &str) -> Result<Self, InvalidUidError> {
        Uid::new(text).map(Value::from)
    }

    scalar_constructor!(
        /// Create an AT value.
        at, AT, Tag, Tag
    );
    scalar_constructor!(
        /// Create a US value.
        us, US, u16, U16
    );
    scalar_constructor!(
        /// Create an SS value.
        ss, SS, i16, I16
    );
    scalar_constructor!(
        /// Create a UL value.
        ul, UL, u32, U32
    );
    scalar_constructor!(
        /// Create an SL value.
        sl, SL, i32, I32
    );
    scalar_constructor!(
        /// Create an FL value.
        fl, FL, f32, F32
    );
    scalar_constructor!(
        /// Create an FD value.
        fd, FD, f64, F64
    );
    scalar_constructor!(
        /// Create an OB value.
        ob, OB, Vec<u8>, Bytes
    );
    scalar_constructor!(
        /// Create a UN value.
        un, UN, Vec<u8>, Bytes
    );
    scalar_constructor!(
        /// Create an OW value.
        ow, OW, Vec<u16>, Words
    );

    /// Create a sequence value out of the given items.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = DataSet>,
    {
        Value {
            vr: VR::SQ,
            data: ValueData::Sequence(items.into_iter().collect()),
        }
    }

    /// The value representation of this value.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// The payload of this value.
    #[inline]
    pub fn data(&self) -> &ValueData {
        &self.data
    }

    /// Move the payload out of this value.
    #[inline]
    pub fn into_data(self) -> ValueData {
        self.data
    }

    /// Whether the value holds no content:
    /// no payload at all, an empty string or UID,
    /// an empty byte or word vector, or a sequence without items.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            ValueData::Empty => true,
            ValueData::Str(s) => s.is_empty(),
            ValueData::Uid(uid) => uid.is_empty(),
            ValueData::Bytes(b) => b.is_empty(),
            ValueData::Words(w) => w.is_empty(),
            ValueData::Sequence(items) => items.is_empty(),
            ValueData::Tag(_)
            | ValueData::U16(_)
            | ValueData::I16(_)
            | ValueData::U32(_)
            | ValueData::I32(_)
            | ValueData::F32(_)
            | ValueData::F64(_) => false,
        }
    }

    fn mismatch(&self, requested: ValueType) -> TypeMismatch {
        TypeMismatch {
            vr: self.vr,
            requested,
            got: self.data.value_type(),
        }
    }

    /// Get the text of a string value.
    pub fn as_str(&self) -> Result<&str, TypeMismatch> {
        match &self.data {
            ValueData::Str(s) => Ok(s),
            _ => Err(self.mismatch(ValueType::Str)),
        }
    }

    /// Get the UID of a UI value.
    pub fn as_uid(&self) -> Result<&Uid, TypeMismatch> {
        match &self.data {
            ValueData::Uid(uid) => Ok(uid),
            _ => Err(self.mismatch(ValueType::Uid)),
        }
    }

    accessor!(
        /// Get the tag of an AT value.
        as_tag, Tag, Tag
    );
    accessor!(
        /// Get the number of a US value.
        as_u16, u16, U16
    );
    accessor!(
        /// Get the number of an SS value.
        as_i16, i16, I16
    );
    accessor!(
        /// Get the number of a UL value.
        as_u32, u32, U32
    );
    accessor!(
        /// Get the number of an SL value.
        as_i32, i32, I32
    );
    accessor!(
        /// Get the number of an FL value.
        as_f32, f32, F32
    );
    accessor!(
        /// Get the number of an FD value.
        as_f64, f64, F64
    );

    /// Get the bytes of an OB or UN value.
    pub fn as_bytes(&self) -> Result<&[u8], TypeMismatch> {
        match &self.data {
            ValueData::Bytes(b) => Ok(b),
            _ => Err(self.mismatch(ValueType::Bytes)),
        }
    }

    /// Get the words of an OW value.
    pub fn as_words(&self) -> Result<&[u16], TypeMismatch> {
        match &self.data {
            ValueData::Words(w) => Ok(w),
            _ => Err(self.mismatch(ValueType::Words)),
        }
    }

    /// Get the items of a sequence value.
    pub fn as_sequence(&self) -> Result<&[DataSet], TypeMismatch> {
        match &self.data {
            ValueData::Sequence(items) => Ok(items),
            _ => Err(self.mismatch(ValueType::Sequence)),
        }
    }

    /// Convert the value into an integer.
    ///
    /// Integer representations are widened as is,
    /// while IS values are parsed from their text.
    pub fn to_int(&self) -> Result<i64, ConvertValueError> {
        match &self.data {
            ValueData::U16(v) => Ok(i64::from(*v)),
            ValueData::I16(v) => Ok(i64::from(*v)),
            ValueData::U32(v) => Ok(i64::from(*v)),
            ValueData::I32(v) => Ok(i64::from(*v)),
            ValueData::Str(s) if self.vr == VR::IS => {
                let text = s.trim();
                text.parse().ok().context(ParseSnafu {
                    text,
                    target: "integer",
                })
            }
            _ => UnsupportedSnafu {
                vr: self.vr,
                target: "integer",
            }
            .fail(),
        }
    }

    /// Convert the value into a double precision floating point number.
    ///
    /// DS values are parsed from their text.
    pub fn to_float(&self) -> Result<f64, ConvertValueError> {
        match &self.data {
            ValueData::F32(v) => Ok(f64::from(*v)),
            ValueData::F64(v) => Ok(*v),
            ValueData::Str(s) if self.vr == VR::DS || self.vr == VR::IS => {
                let text = s.trim();
                text.parse().ok().context(ParseSnafu {
                    text,
                    target: "number",
                })
            }
            _ => self.to_int().map(|v| v as f64).map_err(|_| ConvertValueError::Unsupported {
                vr: self.vr,
                target: "number",
            }),
        }
    }

    /// Convert a DA value (`YYYYMMDD`) into a calendar date.
    pub fn to_date(&self) -> Result<NaiveDate, ConvertValueError> {
        match &self.data {
            ValueData::Str(s) if self.vr == VR::DA => {
                let text = s.trim();
                NaiveDate::parse_from_str(text, "%Y%m%d")
                    .ok()
                    .context(ParseSnafu {
                        text,
                        target: "date",
                    })
            }
            _ => UnsupportedSnafu {
                vr: self.vr,
                target: "date",
            }
            .fail(),
        }
    }

    /// Convert a TM value (`HH[MM[SS[.FFFFFF]]]`) into a time of day.
    pub fn to_time(&self) -> Result<NaiveTime, ConvertValueError> {
        match &self.data {
            ValueData::Str(s) if self.vr == VR::TM => {
                let text = s.trim();
                parse_time(text).context(ParseSnafu {
                    text,
                    target: "time",
                })
            }
            _ => UnsupportedSnafu {
                vr: self.vr,
                target: "time",
            }
            .fail(),
        }
    }
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    if !whole.bytes().all(|b| b.is_ascii_digit()) || whole.len() % 2 != 0 {
        return None;
    }
    let field = |i: usize| -> Option<u32> {
        whole.get(i..i + 2).map_or(Some(0), |f| f.parse().ok())
    };
    let (hour, minute, second) = match whole.len() {
        2 | 4 | 6 => (field(0)?, field(2)?, field(4)?),
        _ => return None,
    };
    let micro = match fraction {
        Some(f) if f.is_empty() || f.len() > 6 || whole.len() != 6 => return None,
        Some(f) => {
            let digits: u32 = f.parse().ok()?;
            digits * 10u32.pow(6 - f.len() as u32)
        }
        None => 0,
    };
    NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
}

impl From<Uid> for Value {
    fn from(uid: Uid) -> Self {
        Value {
            vr: VR::UI,
            data: ValueData::Uid(uid),
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Value::at(tag)
    }
}

/// Maximum number of bytes or words shown when displaying binary values.
const DISPLAY_BINARY_LIMIT: usize = 16;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data {
            ValueData::Empty => Ok(()),
            ValueData::Str(s) => f.write_str(s),
            ValueData::Uid(uid) => f.write_str(uid),
            ValueData::Tag(tag) => write!(f, "{}", tag),
            ValueData::U16(v) => write!(f, "{}", v),
            ValueData::I16(v) => write!(f, "{}", v),
            ValueData::U32(v) => write!(f, "{}", v),
            ValueData::I32(v) => write!(f, "{}", v),
            ValueData::F32(v) => write!(f, "{}", v),
            ValueData::F64(v) => write!(f, "{}", v),
            ValueData::Bytes(bytes) => {
                for (i, b) in bytes.iter().take(DISPLAY_BINARY_LIMIT).enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                if bytes.len() > DISPLAY_BINARY_LIMIT {
                    f.write_str(" ...")?;
                }
                write!(f, " ({} bytes)", bytes.len())
            }
            ValueData::Words(words) => {
                for (i, w) in words.iter().take(DISPLAY_BINARY_LIMIT).enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:04X}", w)?;
                }
                if words.len() > DISPLAY_BINARY_LIMIT {
                    f.write_str(" ...")?;
                }
                write!(f, " ({} words)", words.len())
            }
            ValueData::Sequence(items) => match items.len() {
                1 => f.write_str("(1 item)"),
                n => write!(f, "({} items)", n),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_checks_payload_type() {
        assert!(Value::new(VR::US, ValueData::U16(5)).is_ok());
        assert!(Value::new(VR::US, ValueData::Empty).is_ok());
        assert_eq!(
            Value::new(VR::US, ValueData::U32(5)),
            Err(TypeMismatch {
                vr: VR::US,
                requested: ValueType::U16,
                got: ValueType::U32,
            })
        );
        assert!(Value::str(VR::LO, "Doe^John").is_ok());
        assert!(Value::str(VR::UI, "1.2.3").is_err());
        assert!(Value::str(VR::OB, "x").is_err());
        assert!(Value::new(VR::UN, ValueData::Bytes(vec![1, 2])).is_ok());
    }

    #[test]
    fn accessors_reject_other_types() {
        let v = Value::us(0x1234);
        assert_eq!(v.as_u16(), Ok(0x1234));
        assert!(v.as_i16().is_err());
        assert!(v.as_str().is_err());

        let v = Value::empty(VR::US);
        assert_eq!(
            v.as_u16(),
            Err(TypeMismatch {
                vr: VR::US,
                requested: ValueType::U16,
                got: ValueType::Empty,
            })
        );

        let v = Value::uid("1.2.840.10008.1.2").unwrap();
        assert_eq!(v.vr(), VR::UI);
        assert_eq!(v.as_uid().unwrap().as_str(), "1.2.840.10008.1.2");
        assert!(v.as_str().is_err());
    }

    #[test]
    fn emptiness_per_payload() {
        assert!(Value::empty(VR::FD).is_empty());
        assert!(Value::str(VR::SH, "").unwrap().is_empty());
        assert!(Value::ob(vec![]).is_empty());
        assert!(Value::sequence(vec![]).is_empty());
        assert!(!Value::us(0).is_empty());
        assert!(!Value::sequence(vec![DataSet::new()]).is_empty());
    }

    #[test]
    fn numeric_conversions() {
        assert_eq!(Value::str(VR::IS, " 42 ").unwrap().to_int(), Ok(42));
        assert_eq!(Value::sl(-7).to_int(), Ok(-7));
        assert_eq!(Value::str(VR::DS, "1.5").unwrap().to_float(), Ok(1.5));
        assert_eq!(Value::us(3).to_float(), Ok(3.0));
        assert!(Value::str(VR::IS, "abc").unwrap().to_int().is_err());
        assert!(Value::ob(vec![1]).to_int().is_err());
    }

    #[test]
    fn date_time_conversions() {
        let date = Value::str(VR::DA, "20240229").unwrap().to_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(Value::str(VR::DA, "20230229").unwrap().to_date().is_err());

        let time = Value::str(VR::TM, "101530.25").unwrap().to_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_micro_opt(10, 15, 30, 250_000).unwrap());
        let time = Value::str(VR::TM, "0930").unwrap().to_time().unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert!(Value::str(VR::TM, "25").unwrap().to_time().is_err());
        assert!(Value::str(VR::LO, "1200").unwrap().to_time().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Value::str(VR::PN, "Doe^John").unwrap().to_string(), "Doe^John");
        assert_eq!(Value::at(Tag(0x0010, 0x0020)).to_string(), "(0010,0020)");
        assert_eq!(Value::ob(vec![1, 0xAB]).to_string(), "01 AB (2 bytes)");
        assert_eq!(Value::ow(vec![0x1234]).to_string(), "1234 (1 words)");
        assert_eq!(Value::sequence(vec![DataSet::new()]).to_string(), "(1 item)");
        let long = Value::ob(vec![0; 20]).to_string();
        assert!(long.ends_with("... (20 bytes)"));
    }
}
