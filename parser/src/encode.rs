//! Encoding of DICOM data sets into bytes.
//!
//! The [`Encoder`] walks a data set one element at a time,
//! where an element is a run of values sharing the same tag,
//! and writes each one with the header layout of the transfer syntax.

use dcmcodec_core::dataset::Group;
use dcmcodec_core::header::{Length, Tag, VR};
use dcmcodec_core::value::ValueData;
use dcmcodec_core::{DataSet, Value};
use dcmcodec_encoding::cursor::ByteCursor;
use dcmcodec_encoding::deflate::{self, DeflateError};
use dcmcodec_encoding::text::{DefaultCharacterSetCodec, TextCodec};
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::fmt;

/// The reason why an element cannot be encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingIssue {
    /// Values of the same element have different value representations.
    MixedVr {
        /// the representation of the first value
        first: VR,
        /// the first representation which differs
        other: VR,
    },
    /// The representation only admits a single value per element.
    MultipleValues {
        /// the value representation
        vr: VR,
        /// the number of values found
        count: usize,
    },
    /// Pixel data fragments in a transfer syntax without encapsulation.
    NotEncapsulated,
    /// The value does not fit in the length field.
    ValueTooLong {
        /// the value length in bytes
        len: usize,
        /// the maximum length allowed
        max: u32,
    },
}

impl fmt::Display for EncodingIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodingIssue::MixedVr { first, other } => {
                write!(f, "values of mixed representations {} and {}", first, other)
            }
            EncodingIssue::MultipleValues { vr, count } => {
                write!(f, "{} values of representation {}, at most one allowed", count, vr)
            }
            EncodingIssue::NotEncapsulated => {
                f.write_str("multiple fragments require an encapsulated transfer syntax")
            }
            EncodingIssue::ValueTooLong { len, max } => {
                write!(f, "value length {} exceeds the maximum of {}", len, max)
            }
        }
    }
}

/// An error which may occur while encoding a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Cannot encode element {}: {}", tag, issue))]
    InvalidEncoding { tag: Tag, issue: EncodingIssue },
    #[snafu(display("Could not deflate data set"))]
    Deflate { source: DeflateError },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// How the length of non-empty sequences and their items is written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceLength {
    /// Items are encoded ahead of time so that
    /// sequences and items carry their exact byte length.
    #[default]
    Explicit,
    /// Sequences and items are written with undefined length
    /// and closed with delimiters.
    Undefined,
}

/// The set of options for encoding data sets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct EncodeOptions {
    /// The length strategy for sequences.
    pub sequence_length: SequenceLength,
}

impl EncodeOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the length strategy for sequences.
    pub fn sequence_length(mut self, sequence_length: SequenceLength) -> Self {
        self.sequence_length = sequence_length;
        self
    }
}

/// A data set encoder bound to a transfer syntax.
#[derive(Debug, Clone)]
pub struct Encoder {
    ts: TransferSyntax,
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with the default options.
    pub fn new(ts: &TransferSyntax) -> Self {
        Encoder {
            ts: *ts,
            options: EncodeOptions::default(),
        }
    }

    /// Replace the encoding options.
    pub fn with_options(mut self, options: EncodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The transfer syntax of this encoder.
    pub fn transfer_syntax(&self) -> &TransferSyntax {
        &self.ts
    }

    /// Encode the whole data set into a new byte vector.
    ///
    /// The output is compressed if the transfer syntax is deflated.
    pub fn encode(&self, dataset: &DataSet) -> Result<Vec<u8>> {
        let mut cursor = ByteCursor::new(self.ts.endianness());
        self.encode_into(dataset, &mut cursor)?;
        if self.ts.is_deflated() {
            return deflate::deflate(cursor.as_bytes()).context(DeflateSnafu);
        }
        Ok(cursor.into_inner())
    }

    /// Append the encoded data set to the cursor,
    /// returning the number of bytes written.
    ///
    /// No compression is applied here, even for deflated transfer syntaxes.
    pub fn encode_into(&self, dataset: &DataSet, cursor: &mut ByteCursor) -> Result<usize> {
        cursor.set_endianness(self.ts.endianness());
        let mut written = 0;
        for (tag, values) in dataset.groups() {
            written += self.encode_element(tag, values, cursor)?;
        }
        Ok(written)
    }

    /// Append one element, made of all the values of `tag`,
    /// returning the number of bytes written.
    pub fn encode_element(
        &self,
        tag: Tag,
        values: Group<'_>,
        cursor: &mut ByteCursor,
    ) -> Result<usize> {
        let start = cursor.len();
        let vr = match values.first() {
            Some(value) => value.vr(),
            None => return Ok(0),
        };
        if let Some(other) = values.values().map(Value::vr).find(|other| *other != vr) {
            return InvalidEncodingSnafu {
                tag,
                issue: EncodingIssue::MixedVr { first: vr, other },
            }
            .fail();
        }

        use VR::*;
        match vr {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UT => {
                let tokens: Vec<&str> = values
                    .values()
                    .map(|v| match v.data() {
                        ValueData::Str(s) => s.as_str(),
                        _ => "",
                    })
                    .collect();
                self.write_text(cursor, tag, vr, &tokens.join("\\"), b' ')?;
            }
            UI => {
                let tokens: Vec<&str> = values
                    .values()
                    .filter_map(|v| match v.data() {
                        ValueData::Uid(uid) if !uid.is_empty() => Some(uid.as_str()),
                        _ => None,
                    })
                    .collect();
                self.write_text(cursor, tag, vr, &tokens.join("\\"), b'\0')?;
            }
            AT => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_tag, |d| match d {
                ValueData::Tag(n) => Some(*n),
                _ => None,
            })?,
            US => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_u16, |d| match d {
                ValueData::U16(n) => Some(*n),
                _ => None,
            })?,
            SS => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_i16, |d| match d {
                ValueData::I16(n) => Some(*n),
                _ => None,
            })?,
            UL => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_u32, |d| match d {
                ValueData::U32(n) => Some(*n),
                _ => None,
            })?,
            SL => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_i32, |d| match d {
                ValueData::I32(n) => Some(*n),
                _ => None,
            })?,
            FL => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_f32, |d| match d {
                ValueData::F32(n) => Some(*n),
                _ => None,
            })?,
            FD => self.write_numbers(cursor, tag, vr, values, ByteCursor::write_f64, |d| match d {
                ValueData::F64(n) => Some(*n),
                _ => None,
            })?,
            OB if tag == Tag::PIXEL_DATA && values.len() > 1 => {
                ensure!(
                    self.ts.is_encapsulated(),
                    InvalidEncodingSnafu {
                        tag,
                        issue: EncodingIssue::NotEncapsulated,
                    }
                );
                self.write_fragments(cursor, tag, values)?;
            }
            OB | UN => {
                let bytes = single(tag, vr, values)?.map(bytes_of).unwrap_or_default();
                let len = self.value_length(tag, vr, bytes.len() + bytes.len() % 2)?;
                self.write_header(cursor, tag, vr, len);
                write_padded(cursor, bytes);
            }
            OW => {
                let words: &[u16] = match single(tag, vr, values)?.map(Value::data) {
                    Some(ValueData::Words(words)) => words.as_slice(),
                    _ => &[],
                };
                let len = self.value_length(tag, vr, words.len() * 2)?;
                self.write_header(cursor, tag, vr, len);
                cursor.write_words(words);
            }
            SQ => {
                let items: &[DataSet] = match single(tag, vr, values)?.map(Value::data) {
                    Some(ValueData::Sequence(items)) => items.as_slice(),
                    _ => &[],
                };
                self.write_sequence(cursor, tag, items)?;
            }
        }

        let written = cursor.len() - start;
        tracing::trace!("Encoded {} {} in {} bytes", tag, vr, written);
        Ok(written)
    }

    /// Write every value of a fixed-width numeric element,
    /// skipping empty values.
    fn write_numbers<T, W, F>(
        &self,
        cursor: &mut ByteCursor,
        tag: Tag,
        vr: VR,
        values: Group<'_>,
        mut write: W,
        number: F,
    ) -> Result<()>
    where
        W: FnMut(&mut ByteCursor, T),
        F: Fn(&ValueData) -> Option<T>,
    {
        let numbers: Vec<T> = values.values().filter_map(|v| number(v.data())).collect();
        let width = vr.fixed_width().unwrap_or_default() as usize;
        let len = self.value_length(tag, vr, numbers.len() * width)?;
        self.write_header(cursor, tag, vr, len);
        for n in numbers {
            write(cursor, n);
        }
        Ok(())
    }

    /// Check that a value of `len` bytes fits in the length field.
    fn value_length(&self, tag: Tag, vr: VR, len: usize) -> Result<Length> {
        let max = if self.ts.is_explicit_vr() && !vr.has_extended_length() {
            u32::from(u16::MAX)
        } else {
            // the maximum value stands for an undefined length
            u32::MAX - 1
        };
        match u32::try_from(len) {
            Ok(len) if len <= max => Ok(Length(len)),
            _ => InvalidEncodingSnafu {
                tag,
                issue: EncodingIssue::ValueTooLong { len, max },
            }
            .fail(),
        }
    }

    fn write_header(&self, cursor: &mut ByteCursor, tag: Tag, vr: VR, len: Length) {
        cursor.write_tag(tag);
        if self.ts.is_explicit_vr() {
            cursor.write_vr(vr);
            if vr.has_extended_length() {
                // reserved
                cursor.write_u16(0);
                cursor.write_u32(len.0);
            } else {
                // bounds checked in `value_length`
                cursor.write_u16(len.0 as u16);
            }
        } else {
            cursor.write_u32(len.0);
        }
    }

    fn write_text(
        &self,
        cursor: &mut ByteCursor,
        tag: Tag,
        vr: VR,
        text: &str,
        padding: u8,
    ) -> Result<()> {
        let mut bytes = DefaultCharacterSetCodec.encode(text);
        if bytes.len() % 2 == 1 {
            bytes.push(padding);
        }
        let len = self.value_length(tag, vr, bytes.len())?;
        self.write_header(cursor, tag, vr, len);
        cursor.write_bytes(&bytes);
        Ok(())
    }

    /// Write encapsulated pixel data:
    /// an empty basic offset table followed by one item per value.
    fn write_fragments(&self, cursor: &mut ByteCursor, tag: Tag, values: Group<'_>) -> Result<()> {
        let fragments: Vec<&[u8]> = values.values().map(bytes_of).collect();
        let mut lengths = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            lengths.push(self.value_length(tag, VR::OB, fragment.len() + fragment.len() % 2)?);
        }

        self.write_header(cursor, tag, VR::OB, Length::UNDEFINED);
        cursor.write_tag(Tag::ITEM);
        cursor.write_u32(0);
        for (fragment, len) in fragments.into_iter().zip(lengths) {
            cursor.write_tag(Tag::ITEM);
            cursor.write_u32(len.0);
            write_padded(cursor, fragment);
        }
        cursor.write_tag(Tag::SEQUENCE_DELIMITER);
        cursor.write_u32(0);
        Ok(())
    }

    fn write_sequence(&self, cursor: &mut ByteCursor, tag: Tag, items: &[DataSet]) -> Result<()> {
        if items.is_empty() {
            self.write_header(cursor, tag, VR::SQ, Length(0));
            return Ok(());
        }

        match self.options.sequence_length {
            SequenceLength::Undefined => {
                self.write_header(cursor, tag, VR::SQ, Length::UNDEFINED);
                for item in items {
                    cursor.write_tag(Tag::ITEM);
                    cursor.write_u32(Length::UNDEFINED.0);
                    self.encode_into(item, cursor)?;
                    cursor.write_tag(Tag::ITEM_DELIMITER);
                    cursor.write_u32(0);
                }
                cursor.write_tag(Tag::SEQUENCE_DELIMITER);
                cursor.write_u32(0);
            }
            SequenceLength::Explicit => {
                let mut body = ByteCursor::new(self.ts.endianness());
                for item in items {
                    let mut scratch = ByteCursor::new(self.ts.endianness());
                    self.encode_into(item, &mut scratch)?;
                    let len = self.value_length(tag, VR::SQ, scratch.len())?;
                    body.write_tag(Tag::ITEM);
                    body.write_u32(len.0);
                    body.write_bytes(scratch.as_bytes());
                }
                let len = self.value_length(tag, VR::SQ, body.len())?;
                self.write_header(cursor, tag, VR::SQ, len);
                cursor.write_bytes(body.as_bytes());
            }
        }
        Ok(())
    }
}

/// The only value of an element which admits a single value.
fn single<'a>(tag: Tag, vr: VR, values: Group<'a>) -> Result<Option<&'a Value>> {
    ensure!(
        values.len() <= 1,
        InvalidEncodingSnafu {
            tag,
            issue: EncodingIssue::MultipleValues {
                vr,
                count: values.len(),
            },
        }
    );
    Ok(values.first())
}

fn bytes_of(value: &Value) -> &[u8] {
    match value.data() {
        ValueData::Bytes(bytes) => bytes.as_slice(),
        _ => &[],
    }
}

/// Write the bytes, followed by a zero byte if their length is odd.
fn write_padded(cursor: &mut ByteCursor, bytes: &[u8]) {
    cursor.write_bytes(bytes);
    if bytes.len() % 2 == 1 {
        cursor.write_u8(0);
    }
}

/// Encode a whole data set in the given transfer syntax.
pub fn encode(dataset: &DataSet, ts: &TransferSyntax) -> Result<Vec<u8>> {
    Encoder::new(ts).encode(dataset)
}

/// Calculate the value of the group length element (gggg,0000)
/// for the given group: the number of bytes taken by
/// all other elements of the group once encoded.
pub fn group_length(dataset: &DataSet, group: u16, ts: &TransferSyntax) -> Result<u32> {
    let encoder = Encoder::new(ts);
    let mut cursor = ByteCursor::new(ts.endianness());
    for (tag, values) in dataset
        .groups()
        .filter(|(tag, _)| tag.group() == group && tag.element() != 0)
    {
        encoder.encode_element(tag, values, &mut cursor)?;
    }
    u32::try_from(cursor.len())
        .ok()
        .context(InvalidEncodingSnafu {
            tag: Tag(group, 0x0000),
            issue: EncodingIssue::ValueTooLong {
                len: cursor.len(),
                max: u32::MAX,
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_core::Uid;
    use dcmcodec_encoding::transfer_syntax::{
        EXPLICIT_VR_BIG_ENDIAN, EXPLICIT_VR_LITTLE_ENDIAN, IMPLICIT_VR_LITTLE_ENDIAN,
        JPEG_BASELINE,
    };
    use pretty_assertions::assert_eq;

    const ROWS: Tag = Tag(0x0028, 0x0010);
    const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
    const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
    const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);

    #[test]
    fn us_in_both_byte_orders() {
        let ds: DataSet = vec![(ROWS, Value::us(0x1234))].into_iter().collect();

        let le = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(le, vec![0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x34, 0x12]);

        let be = encode(&ds, &EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(be, vec![0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x12, 0x34]);

        let implicit = encode(&ds, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(
            implicit,
            vec![0x28, 0x00, 0x10, 0x00, 0x02, 0x00, 0x00, 0x00, 0x34, 0x12]
        );
    }

    #[test]
    fn uid_padded_with_null() {
        let ds: DataSet = vec![(SOP_CLASS_UID, Value::uid("1.2.840.10008.1.1").unwrap())]
            .into_iter()
            .collect();
        let bytes = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(&bytes[..8], &[0x08, 0x00, 0x16, 0x00, b'U', b'I', 18, 0x00]);
        assert_eq!(&bytes[8..], b"1.2.840.10008.1.1\0");
    }

    #[test]
    fn empty_uids_are_not_joined() {
        let ds: DataSet = vec![
            (SOP_CLASS_UID, Value::from(Uid::new("").unwrap())),
            (SOP_CLASS_UID, Value::uid("1.2").unwrap()),
        ]
        .into_iter()
        .collect();
        let bytes = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(&bytes[6..], b"\x04\x001.2\0");
    }

    #[test]
    fn strings_joined_and_padded_with_space() {
        let ds: DataSet = vec![
            (PATIENT_NAME, Value::str(VR::PN, "A").unwrap()),
            (PATIENT_NAME, Value::str(VR::PN, "B").unwrap()),
            (PATIENT_NAME, Value::str(VR::PN, "C").unwrap()),
        ]
        .into_iter()
        .collect();
        let bytes = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(&bytes[6..], b"\x06\x00A\\B\\C ");
    }

    #[test]
    fn empty_numbers_are_elided() {
        let ds: DataSet = vec![
            (ROWS, Value::us(10)),
            (ROWS, Value::empty(VR::US)),
            (ROWS, Value::us(20)),
        ]
        .into_iter()
        .collect();
        let bytes = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        assert_eq!(&bytes[6..], &[0x04, 0x00, 0x0A, 0x00, 0x14, 0x00]);
    }

    #[test]
    fn mixed_vr_is_rejected() {
        let ds: DataSet = vec![(ROWS, Value::us(10)), (ROWS, Value::ul(20))]
            .into_iter()
            .collect();
        let err = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding {
                issue: EncodingIssue::MixedVr {
                    first: VR::US,
                    other: VR::UL
                },
                ..
            }
        ));
    }

    #[test]
    fn fragments_need_encapsulation() {
        let ds: DataSet = vec![
            (Tag::PIXEL_DATA, Value::ob(vec![1, 2])),
            (Tag::PIXEL_DATA, Value::ob(vec![3])),
        ]
        .into_iter()
        .collect();
        let err = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding {
                issue: EncodingIssue::NotEncapsulated,
                ..
            }
        ));

        let bytes = encode(&ds, &JPEG_BASELINE).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
            0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0x03, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn fragments_only_under_pixel_data() {
        let private = Tag(0x0009, 0x1010);
        let ds: DataSet = vec![
            (private, Value::ob(vec![1, 2])),
            (private, Value::ob(vec![3, 4])),
        ]
        .into_iter()
        .collect();
        let err = encode(&ds, &JPEG_BASELINE).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding {
                tag,
                issue: EncodingIssue::MultipleValues { vr: VR::OB, count: 2 },
            } if tag == private
        ));
    }

    #[test]
    fn short_length_overflow() {
        let long = "A".repeat(0x1_0000);
        let ds: DataSet = vec![(PATIENT_NAME, Value::str(VR::PN, long).unwrap())]
            .into_iter()
            .collect();
        assert!(matches!(
            encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN),
            Err(Error::InvalidEncoding {
                issue: EncodingIssue::ValueTooLong { .. },
                ..
            })
        ));
        // no limit under implicit VR
        assert!(encode(&ds, &IMPLICIT_VR_LITTLE_ENDIAN).is_ok());
    }

    #[test]
    fn sequence_strategies() {
        let item: DataSet = vec![(ROWS, Value::us(1))].into_iter().collect();
        let ds: DataSet = vec![(REFERENCED_SERIES_SEQUENCE, Value::sequence(vec![item]))]
            .into_iter()
            .collect();

        let explicit = encode(&ds, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0x12, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0x00, 0xE0, 0x0A, 0x00, 0x00, 0x00,
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x01, 0x00,
        ];
        assert_eq!(explicit, expected);

        let undefined = Encoder::new(&EXPLICIT_VR_LITTLE_ENDIAN)
            .with_options(EncodeOptions::new().sequence_length(SequenceLength::Undefined))
            .encode(&ds)
            .unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x08, 0x00, 0x15, 0x11, b'S', b'Q', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFE, 0xFF, 0x00, 0xE0, 0xFF, 0xFF, 0xFF, 0xFF,
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x01, 0x00,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(undefined, expected);
    }

    #[test]
    fn group_length_excludes_element_zero() {
        let ds: DataSet = vec![
            (Tag(0x0028, 0x0000), Value::ul(0)),
            (ROWS, Value::us(512)),
            (Tag(0x0028, 0x0011), Value::us(512)),
            (PATIENT_NAME, Value::str(VR::PN, "Doe").unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            group_length(&ds, 0x0028, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(),
            20
        );
        assert_eq!(
            group_length(&ds, 0x0028, &IMPLICIT_VR_LITTLE_ENDIAN).unwrap(),
            20
        );
        assert_eq!(
            group_length(&ds, 0x0010, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(),
            12
        );
        assert_eq!(group_length(&ds, 0x0020, &EXPLICIT_VR_LITTLE_ENDIAN).unwrap(), 0);
    }
}
