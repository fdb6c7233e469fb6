//! This module contains primitive types for DICOM element headers:
//! attribute tags, value representations and value lengths,
//! as well as the headers of sequence items and their delimiters.

use crate::value::ValueType;
use snafu::Snafu;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {} in sequence item header", tag))]
    UnexpectedTag { tag: Tag },
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are ordered numerically,
/// first by group number and then by element number,
/// which is also the order in which elements appear in a data set.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Item (FFFE,E000), which frames one item of a sequence
    /// or one fragment of encapsulated pixel data.
    pub const ITEM: Tag = Tag(0xFFFE, 0xE000);
    /// Item Delimitation Item (FFFE,E00D).
    pub const ITEM_DELIMITER: Tag = Tag(0xFFFE, 0xE00D);
    /// Sequence Delimitation Item (FFFE,E0DD).
    pub const SEQUENCE_DELIMITER: Tag = Tag(0xFFFE, 0xE0DD);
    /// Data Set Trailing Padding (FFFC,FFFC).
    pub const DATA_SET_PADDING: Tag = Tag(0xFFFC, 0xFFFC);
    /// Pixel Data (7FE0,0010).
    pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
    /// Bits Allocated (0028,0100).
    pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);

    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }

    /// Whether this tag belongs to a private group (odd group number).
    #[inline]
    pub fn is_private(self) -> bool {
        self.0 & 1 == 1
    }

    /// Whether this is the group length tag of its group (gggg,0000).
    #[inline]
    pub fn is_group_length(self) -> bool {
        self.1 == 0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<Tag> for u32 {
    #[inline]
    fn from(tag: Tag) -> u32 {
        (u32::from(tag.0) << 16) | u32::from(tag.1)
    }
}

/// How a string value representation treats the backslash character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum StringPolicy {
    /// The backslash separates multiple values.
    Tokenizable,
    /// The whole content is a single value,
    /// even if it contains a backslash.
    Atomic,
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Time
    TM,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            US => "US",
            UT => "UT",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }

    /// The full name of this value representation.
    pub fn name(self) -> &'static str {
        use VR::*;
        match self {
            AE => "Application Entity",
            AS => "Age String",
            AT => "Attribute Tag",
            CS => "Code String",
            DA => "Date",
            DS => "Decimal String",
            DT => "Date Time",
            FL => "Floating Point Single",
            FD => "Floating Point Double",
            IS => "Integer String",
            LO => "Long String",
            LT => "Long Text",
            OB => "Other Byte String",
            OW => "Other Word String",
            PN => "Person Name",
            SH => "Short String",
            SL => "Signed Long",
            SQ => "Sequence of Items",
            SS => "Signed Short",
            ST => "Short Text",
            TM => "Time",
            UI => "Unique Identifier",
            UL => "Unsigned Long",
            UN => "Unknown",
            US => "Unsigned Short",
            UT => "Unlimited Text",
        }
    }

    /// Whether the explicit VR header of this representation
    /// has two reserved bytes followed by a 4-byte length,
    /// instead of a 2-byte length.
    pub fn has_extended_length(self) -> bool {
        matches!(self, VR::OB | VR::OW | VR::SQ | VR::UN | VR::UT)
    }

    /// How the backslash is treated in values of this representation,
    /// or `None` if this is not a string representation.
    pub fn string_policy(self) -> Option<StringPolicy> {
        use VR::*;
        match self {
            AE | DA | DS | DT | IS | LO | PN | SH | TM | UI => Some(StringPolicy::Tokenizable),
            AS | CS | LT | ST | UT => Some(StringPolicy::Atomic),
            _ => None,
        }
    }

    /// The payload type held by values of this representation.
    pub fn value_type(self) -> ValueType {
        use VR::*;
        match self {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UT => ValueType::Str,
            UI => ValueType::Uid,
            AT => ValueType::Tag,
            US => ValueType::U16,
            SS => ValueType::I16,
            UL => ValueType::U32,
            SL => ValueType::I32,
            FL => ValueType::F32,
            FD => ValueType::F64,
            OB | UN => ValueType::Bytes,
            OW => ValueType::Words,
            SQ => ValueType::Sequence,
        }
    }

    /// The fixed width in bytes of a single value of this representation,
    /// or `None` if values are of variable length.
    pub fn fixed_width(self) -> Option<u32> {
        use VR::*;
        match self {
            US | SS => Some(2),
            AT | UL | SL | FL => Some(4),
            FD => Some(8),
            _ => None,
        }
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "TM" => Ok(TM),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "US" => Ok(US),
            "UT" => Ok(UT),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which would have to be determined
/// with a traversal based on the content's encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(pub u32);

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(0xFFFF_FFFF);

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == 0xFFFF_FFFF
    }

    /// Fetch the concrete length value, if available.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            0xFFFF_FFFF => None,
            v => Some(v),
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => f.debug_tuple("Length").field(&len).finish(),
            None => f.write_str("Length(Undefined)"),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.get() {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("U/L"),
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Whether the value of this element is to be read as a sequence of items:
    /// either an SQ element, or a UN element of undefined length.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        self.vr == VR::SQ || (self.vr == VR::UN && self.len.is_undefined())
    }
}

/// Data type for describing a sequence item data element.
/// If the element represents an item, it will also contain
/// the specified length.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be 0xFFFFFFFF if undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, a sequence item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader, SequenceItemHeaderError> {
        match tag.into() {
            Tag::ITEM => Ok(SequenceItemHeader::Item { len }),
            Tag::ITEM_DELIMITER => Ok(SequenceItemHeader::ItemDelimiter),
            Tag::SEQUENCE_DELIMITER => Ok(SequenceItemHeader::SequenceDelimiter),
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_display_and_order() {
        assert_eq!(Tag(0x0028, 0x0010).to_string(), "(0028,0010)");
        assert_eq!(format!("{:?}", Tag(0x7FE0, 0x0010)), "Tag(0x7FE0, 0x0010)");
        assert!(Tag(0x0008, 0xFFFF) < Tag(0x0009, 0x0000));
        assert!(Tag(0x0010, 0x0010) < Tag(0x0010, 0x0020));
        assert_eq!(u32::from(Tag(0x0028, 0x0100)), 0x0028_0100);
        assert_eq!(Tag::from((0xFFFE, 0xE000)), Tag::ITEM);
        assert!(Tag(0x0009, 0x0010).is_private());
        assert!(Tag(0x0008, 0x0000).is_group_length());
    }

    #[test]
    fn vr_binary_round_trip() {
        assert_eq!(VR::from_binary(*b"UI"), Some(VR::UI));
        assert_eq!(VR::from_binary(*b"ZZ"), None);
        assert_eq!(VR::from_binary([0xFF, 0x00]), None);
        assert_eq!(VR::PN.to_bytes(), *b"PN");
        assert_eq!("SQ".parse::<VR>(), Ok(VR::SQ));
        assert_eq!(VR::UT.name(), "Unlimited Text");
    }

    #[test]
    fn vr_properties() {
        for vr in [VR::OB, VR::OW, VR::SQ, VR::UN, VR::UT] {
            assert!(vr.has_extended_length(), "{} should use a 4-byte length", vr);
        }
        for vr in [VR::US, VR::LO, VR::UI, VR::AT, VR::FD] {
            assert!(!vr.has_extended_length(), "{} should use a 2-byte length", vr);
        }

        assert_eq!(VR::LO.string_policy(), Some(StringPolicy::Tokenizable));
        assert_eq!(VR::UI.string_policy(), Some(StringPolicy::Tokenizable));
        assert_eq!(VR::CS.string_policy(), Some(StringPolicy::Atomic));
        assert_eq!(VR::UT.string_policy(), Some(StringPolicy::Atomic));
        assert_eq!(VR::OB.string_policy(), None);

        assert_eq!(VR::FD.fixed_width(), Some(8));
        assert_eq!(VR::AT.fixed_width(), Some(4));
        assert_eq!(VR::OW.fixed_width(), None);
        assert_eq!(VR::UN.value_type(), ValueType::Bytes);
    }

    #[test]
    fn length_undefined() {
        assert!(Length::UNDEFINED.is_undefined());
        assert_eq!(Length::UNDEFINED.get(), None);
        assert_eq!(Length(12).get(), Some(12));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
        assert_eq!(Length(8).to_string(), "8");
    }

    #[test]
    fn sequence_item_header() {
        assert_eq!(
            SequenceItemHeader::new(Tag::ITEM, Length(10)),
            Ok(SequenceItemHeader::Item { len: Length(10) })
        );
        assert_eq!(
            SequenceItemHeader::new(Tag::SEQUENCE_DELIMITER, Length(0)),
            Ok(SequenceItemHeader::SequenceDelimiter)
        );
        assert!(matches!(
            SequenceItemHeader::new(Tag(0x0008, 0x0005), Length(0)),
            Err(SequenceItemHeaderError::UnexpectedTag { .. })
        ));
    }

    #[test]
    fn header_sequence_detection() {
        let sq = DataElementHeader::new((0x0008, 0x1140), VR::SQ, Length(0));
        let un = DataElementHeader::new((0x0009, 0x1001), VR::UN, Length::UNDEFINED);
        let ob = DataElementHeader::new(Tag::PIXEL_DATA, VR::OB, Length::UNDEFINED);
        assert!(sq.is_sequence());
        assert!(un.is_sequence());
        assert!(!ob.is_sequence());
    }
}
