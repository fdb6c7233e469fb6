//! Decoding of DICOM data sets from an in-memory byte cursor.
//!
//! The [`Decoder`] reads one data element at a time,
//! descending into sequence items and encapsulated pixel data fragments.
//! Each step yields a [`Step`] telling the caller whether to keep going
//! or whether an item delimiter ended the current item.
//!
//! Two entry points are provided:
//! [`Decoder::decode`] stops at the first error,
//! while [`Decoder::decode_lenient`] discards elements which fail to decode
//! and resumes scanning one byte past the start of the failed element.

use dcmcodec_core::dictionary::{DataDictionary, UnknownTagError};
use dcmcodec_core::header::{DataElementHeader, Length, SequenceItemHeader, StringPolicy, Tag, VR};
use dcmcodec_core::uid::{InvalidUidError, Uid};
use dcmcodec_core::value::{Sequence, TypeMismatch, Value};
use dcmcodec_core::DataSet;
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_encoding::cursor::{BufferOverrun, ByteCursor};
use dcmcodec_encoding::deflate::{self, DeflateError};
use dcmcodec_encoding::transfer_syntax::TransferSyntax;
use dcmcodec_encoding::Endianness;
use snafu::{ensure, OptionExt, ResultExt, Snafu};
use std::fmt;

/// A structural problem found in a data element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Malformation {
    /// A non-sequence value with an odd byte length.
    OddLength {
        /// the declared length
        len: u32,
    },
    /// A numeric value whose length is not a multiple of the value width.
    UnalignedLength {
        /// the declared length
        len: u32,
        /// the width of a single value
        width: u32,
    },
    /// An undefined length where only a defined length is allowed.
    UndefinedLength,
    /// The items of a sequence went past the sequence's declared length.
    SequenceOverrun,
    /// Sequences nested deeper than the configured limit.
    TooDeep {
        /// the maximum nesting depth
        max: usize,
    },
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Malformation::OddLength { len } => write!(f, "odd value length {}", len),
            Malformation::UnalignedLength { len, width } => write!(
                f,
                "value length {} is not a multiple of {} bytes",
                len, width
            ),
            Malformation::UndefinedLength => f.write_str("undefined length is not allowed here"),
            Malformation::SequenceOverrun => {
                f.write_str("sequence items exceed the declared sequence length")
            }
            Malformation::TooDeep { max } => {
                write!(f, "sequences nested deeper than {} levels", max)
            }
        }
    }
}

/// An error which may occur while decoding a data set.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The data ended before the element did.
    #[snafu(display("Unexpected end of data"), context(false))]
    ReadBeyondBuffer { source: BufferOverrun },
    #[snafu(display("Malformed element {}: {}", tag, issue))]
    MalformedElement { tag: Tag, issue: Malformation },
    #[snafu(display("Unknown value representation {:?} in element {}", String::from_utf8_lossy(code), tag))]
    UnknownVr { tag: Tag, code: [u8; 2] },
    #[snafu(display("Could not resolve the value representation of an implicit VR element"), context(false))]
    UnknownTag { source: UnknownTagError },
    #[snafu(display("Invalid UID in element {}", tag))]
    InvalidUid { tag: Tag, source: InvalidUidError },
    #[snafu(display("Value of element {} does not fit its value representation", tag))]
    InvalidValue { tag: Tag, source: TypeMismatch },
    #[snafu(display("Unexpected tag {} where {} was expected", tag, expected))]
    UnexpectedTag { tag: Tag, expected: &'static str },
    #[snafu(display("Could not inflate deflated data set"))]
    Inflate { source: DeflateError },
}

impl Error {
    /// Whether the lenient decoder may discard the failed element
    /// and resume scanning after it.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::ReadBeyondBuffer { .. }
            | Error::UnknownVr { .. }
            | Error::UnknownTag { .. }
            | Error::InvalidUid { .. }
            | Error::InvalidValue { .. }
            | Error::UnexpectedTag { .. } => true,
            Error::MalformedElement { issue, .. } => {
                !matches!(issue, Malformation::TooDeep { .. })
            }
            Error::Inflate { .. } => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The set of options for decoding data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct DecodeOptions {
    /// The maximum nesting depth of sequences.
    pub max_depth: usize,
    /// The maximum number of elements the lenient decoder may skip
    /// before giving up.
    pub max_resync: usize,
    /// Whether tags missing from the dictionary are read as UN
    /// in implicit VR data sets, instead of failing.
    pub unknown_tag_as_un: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: 64,
            max_resync: 1024,
            unknown_tag_as_un: false,
        }
    }
}

impl DecodeOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the maximum sequence nesting depth.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Override the maximum number of skipped elements in lenient decoding.
    pub fn max_resync(mut self, max_resync: usize) -> Self {
        self.max_resync = max_resync;
        self
    }

    /// Read elements of unknown tags as UN in implicit VR data sets.
    pub fn unknown_tag_as_un(mut self, unknown_tag_as_un: bool) -> Self {
        self.unknown_tag_as_un = unknown_tag_as_un;
        self
    }
}

/// The outcome of decoding a single element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An element was decoded, more may follow.
    Continue,
    /// An item delimiter was read: the enclosing item ends here.
    Terminated,
}

/// A data set decoder bound to a transfer syntax and a data dictionary.
///
/// The dictionary is only consulted for implicit VR transfer syntaxes.
#[derive(Debug, Clone)]
pub struct Decoder<D = StandardDataDictionary> {
    ts: TransferSyntax,
    dict: D,
    options: DecodeOptions,
}

impl Decoder {
    /// Create a decoder using the standard data dictionary.
    pub fn new(ts: &TransferSyntax) -> Self {
        Decoder::with_dictionary(ts, StandardDataDictionary)
    }
}

impl<D> Decoder<D>
where
    D: DataDictionary,
{
    /// Create a decoder using the given data dictionary.
    pub fn with_dictionary(ts: &TransferSyntax, dict: D) -> Self {
        Decoder {
            ts: *ts,
            dict,
            options: DecodeOptions::default(),
        }
    }

    /// Replace the decoding options.
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    /// The transfer syntax of this decoder.
    pub fn transfer_syntax(&self) -> &TransferSyntax {
        &self.ts
    }

    /// Decode all remaining bytes of the cursor into a data set,
    /// failing on the first error.
    ///
    /// A stray item delimiter at the top level ends decoding early.
    pub fn decode(&self, cursor: &mut ByteCursor) -> Result<DataSet> {
        cursor.set_endianness(self.ts.endianness());
        if self.ts.is_deflated() {
            let mut inflated = self.inflate(cursor)?;
            return self.decode_strict(&mut inflated);
        }
        self.decode_strict(cursor)
    }

    /// Decode all remaining bytes of the cursor into a data set,
    /// skipping elements which cannot be decoded.
    ///
    /// After a recoverable error, the failed element is discarded
    /// and scanning resumes one byte past where that element started.
    /// This is repeated at most [`DecodeOptions::max_resync`] times,
    /// after which the error is returned.
    pub fn decode_lenient(&self, cursor: &mut ByteCursor) -> Result<DataSet> {
        cursor.set_endianness(self.ts.endianness());
        if self.ts.is_deflated() {
            let mut inflated = self.inflate(cursor)?;
            return self.decode_resync(&mut inflated);
        }
        self.decode_resync(cursor)
    }

    /// Decode a single element at the top level into `dataset`.
    ///
    /// Values are only added to the data set
    /// once the whole element was decoded successfully.
    pub fn decode_element(&self, cursor: &mut ByteCursor, dataset: &mut DataSet) -> Result<Step> {
        cursor.set_endianness(self.ts.endianness());
        self.decode_element_at(cursor, dataset, 0)
    }

    fn inflate(&self, cursor: &mut ByteCursor) -> Result<ByteCursor> {
        let bytes = deflate::inflate(cursor.remaining_bytes()).context(InflateSnafu)?;
        let consumed = cursor.remaining();
        cursor.advance(consumed)?;
        Ok(ByteCursor::from_bytes(bytes, Endianness::Little))
    }

    fn decode_strict(&self, cursor: &mut ByteCursor) -> Result<DataSet> {
        let mut dataset = DataSet::new();
        if self.decode_until_end(cursor, &mut dataset, 0)? == Step::Terminated {
            tracing::warn!(
                "Item delimiter at top level, ignoring the remaining {} bytes",
                cursor.remaining()
            );
        }
        Ok(dataset)
    }

    fn decode_resync(&self, cursor: &mut ByteCursor) -> Result<DataSet> {
        let mut dataset = DataSet::new();
        let mut resyncs = 0;
        while !cursor.is_exhausted() {
            let start = cursor.position();
            match self.decode_element_at(cursor, &mut dataset, 0) {
                Ok(Step::Continue) => {}
                Ok(Step::Terminated) => {
                    tracing::warn!(
                        "Item delimiter at top level, ignoring the remaining {} bytes",
                        cursor.remaining()
                    );
                    break;
                }
                Err(e) if e.is_recoverable() && resyncs < self.options.max_resync => {
                    resyncs += 1;
                    tracing::warn!("Skipping element at position {}: {}", start, e);
                    cursor.seek(start + 1)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(dataset)
    }

    /// Decode elements until the cursor is exhausted
    /// or an item delimiter is found.
    fn decode_until_end(
        &self,
        cursor: &mut ByteCursor,
        dataset: &mut DataSet,
        depth: usize,
    ) -> Result<Step> {
        while !cursor.is_exhausted() {
            if self.decode_element_at(cursor, dataset, depth)? == Step::Terminated {
                return Ok(Step::Terminated);
            }
        }
        Ok(Step::Continue)
    }

    fn decode_element_at(
        &self,
        cursor: &mut ByteCursor,
        dataset: &mut DataSet,
        depth: usize,
    ) -> Result<Step> {
        let tag = cursor.read_tag()?;
        match tag {
            Tag::ITEM_DELIMITER => {
                // conventionally zero
                cursor.read_u32()?;
                return Ok(Step::Terminated);
            }
            Tag::ITEM | Tag::SEQUENCE_DELIMITER => {
                return UnexpectedTagSnafu {
                    tag,
                    expected: "a data element",
                }
                .fail();
            }
            _ => {}
        }

        let mut header = self.read_header(cursor, tag, dataset)?;
        tracing::trace!("{} {} {}", header.tag, header.vr, header.len);

        if header.is_sequence() {
            header.vr = VR::SQ;
        } else if let Some(len) = header.len.get() {
            ensure!(
                len % 2 == 0,
                MalformedElementSnafu {
                    tag,
                    issue: Malformation::OddLength { len },
                }
            );
        }

        if tag == Tag::DATA_SET_PADDING {
            let len = header.len.get().context(MalformedElementSnafu {
                tag,
                issue: Malformation::UndefinedLength,
            })?;
            cursor.advance(len as usize)?;
            return Ok(Step::Continue);
        }

        for value in self.read_values(cursor, header, depth)? {
            dataset.put(tag, value);
        }
        Ok(Step::Continue)
    }

    fn read_header(
        &self,
        cursor: &mut ByteCursor,
        tag: Tag,
        dataset: &DataSet,
    ) -> Result<DataElementHeader> {
        if self.ts.is_explicit_vr() {
            let code = cursor.read_vr_code()?;
            let vr = VR::from_binary(code).context(UnknownVrSnafu { tag, code })?;
            let len = if vr.has_extended_length() {
                // reserved
                cursor.read_u16()?;
                cursor.read_u32()?
            } else {
                u32::from(cursor.read_u16()?)
            };
            Ok(DataElementHeader::new(tag, vr, Length(len)))
        } else {
            let vr = self.implicit_vr(tag, dataset)?;
            let len = cursor.read_u32()?;
            Ok(DataElementHeader::new(tag, vr, Length(len)))
        }
    }

    fn implicit_vr(&self, tag: Tag, dataset: &DataSet) -> Result<VR> {
        if tag == Tag::PIXEL_DATA {
            let bits_allocated = dataset
                .get_first(Tag::BITS_ALLOCATED)
                .and_then(|v| v.as_u16().ok());
            match bits_allocated {
                Some(8) => return Ok(VR::OB),
                Some(16) => return Ok(VR::OW),
                _ => {}
            }
        }
        match self.dict.lookup_vr(tag) {
            Ok(vr) => Ok(vr),
            Err(_) if self.options.unknown_tag_as_un => Ok(VR::UN),
            Err(e) => Err(e.into()),
        }
    }

    fn read_values(
        &self,
        cursor: &mut ByteCursor,
        header: DataElementHeader,
        depth: usize,
    ) -> Result<Vec<Value>> {
        let DataElementHeader { tag, vr, len } = header;
        if vr == VR::SQ {
            let items = self.decode_sequence(cursor, header, depth)?;
            return Ok(vec![Value::sequence(items)]);
        }

        let len = match len.get() {
            Some(len) => len,
            None if vr == VR::OB => return self.read_fragments(cursor, tag),
            None => {
                return MalformedElementSnafu {
                    tag,
                    issue: Malformation::UndefinedLength,
                }
                .fail()
            }
        };

        use VR::*;
        match vr {
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UT => {
                read_strings(cursor, tag, vr, len)
            }
            UI => read_uids(cursor, tag, len),
            AT => read_numbers(cursor, tag, vr, len, |c| c.read_tag().map(Value::at)),
            US => read_numbers(cursor, tag, vr, len, |c| c.read_u16().map(Value::us)),
            SS => read_numbers(cursor, tag, vr, len, |c| c.read_i16().map(Value::ss)),
            UL => read_numbers(cursor, tag, vr, len, |c| c.read_u32().map(Value::ul)),
            SL => read_numbers(cursor, tag, vr, len, |c| c.read_i32().map(Value::sl)),
            FL => read_numbers(cursor, tag, vr, len, |c| c.read_f32().map(Value::fl)),
            FD => read_numbers(cursor, tag, vr, len, |c| c.read_f64().map(Value::fd)),
            OB => Ok(vec![Value::ob(cursor.read_bytes(len as usize)?)]),
            UN => Ok(vec![Value::un(cursor.read_bytes(len as usize)?)]),
            OW => Ok(vec![Value::ow(cursor.read_words(len as usize / 2)?)]),
            SQ => Ok(vec![Value::sequence(
                self.decode_sequence(cursor, header, depth)?,
            )]),
        }
    }

    /// Read the fragments of encapsulated pixel data,
    /// after the header of undefined length.
    fn read_fragments(&self, cursor: &mut ByteCursor, tag: Tag) -> Result<Vec<Value>> {
        ensure!(
            tag == Tag::PIXEL_DATA && self.ts.is_encapsulated(),
            MalformedElementSnafu {
                tag,
                issue: Malformation::UndefinedLength,
            }
        );

        // basic offset table, not interpreted
        let item = cursor.read_tag()?;
        ensure!(
            item == Tag::ITEM,
            UnexpectedTagSnafu {
                tag: item,
                expected: "the basic offset table",
            }
        );
        let len = cursor.read_u32()?;
        cursor.advance(len as usize)?;

        let mut fragments = Vec::new();
        loop {
            let item = cursor.read_tag()?;
            let len = cursor.read_u32()?;
            match item {
                Tag::ITEM => fragments.push(Value::ob(cursor.read_bytes(len as usize)?)),
                Tag::SEQUENCE_DELIMITER => break,
                _ => {
                    return UnexpectedTagSnafu {
                        tag: item,
                        expected: "a pixel data fragment",
                    }
                    .fail()
                }
            }
        }
        Ok(fragments)
    }

    fn decode_sequence(
        &self,
        cursor: &mut ByteCursor,
        header: DataElementHeader,
        depth: usize,
    ) -> Result<Sequence> {
        let tag = header.tag;
        ensure!(
            depth < self.options.max_depth,
            MalformedElementSnafu {
                tag,
                issue: Malformation::TooDeep {
                    max: self.options.max_depth,
                },
            }
        );

        let mut items = Sequence::new();
        let mut remaining = header.len.get();
        while remaining != Some(0) {
            let start = cursor.position();
            let item_tag = cursor.read_tag()?;
            let item_len = Length(cursor.read_u32()?);

            match SequenceItemHeader::new(item_tag, item_len) {
                Ok(SequenceItemHeader::Item { len }) => {
                    let mut item = DataSet::new();
                    match len.get() {
                        Some(len) => {
                            let mut bounded = cursor.take_cursor(len as usize)?;
                            let step = self.decode_until_end(&mut bounded, &mut item, depth + 1)?;
                            ensure!(
                                step == Step::Continue || bounded.is_exhausted(),
                                UnexpectedTagSnafu {
                                    tag: Tag::ITEM_DELIMITER,
                                    expected: "the end of a defined-length item",
                                }
                            );
                        }
                        None => {
                            self.decode_until_end(cursor, &mut item, depth + 1)?;
                        }
                    }
                    items.push(item);
                }
                Ok(SequenceItemHeader::SequenceDelimiter) => {
                    if item_len != Length(0) {
                        tracing::warn!(
                            "Sequence delimiter of {} has non-zero length {}",
                            tag,
                            item_len
                        );
                    }
                    break;
                }
                Ok(SequenceItemHeader::ItemDelimiter) | Err(_) => {
                    return UnexpectedTagSnafu {
                        tag: item_tag,
                        expected: "a sequence item",
                    }
                    .fail();
                }
            }

            if let Some(left) = remaining {
                let consumed = u32::try_from(cursor.position() - start).ok();
                remaining = Some(consumed.and_then(|c| left.checked_sub(c)).context(
                    MalformedElementSnafu {
                        tag,
                        issue: Malformation::SequenceOverrun,
                    },
                )?);
            }
        }
        Ok(items)
    }
}

/// Read text values, splitting them on the backslash
/// unless the representation forbids it.
fn read_strings(cursor: &mut ByteCursor, tag: Tag, vr: VR, len: u32) -> Result<Vec<Value>> {
    let text = cursor.read_str(len as usize)?;
    let text = trim_padding(&text);
    let tokens: Vec<&str> = match vr.string_policy() {
        Some(StringPolicy::Tokenizable) => text.split('\\').collect(),
        Some(StringPolicy::Atomic) | None => vec![text],
    };
    tokens
        .into_iter()
        .map(|token| Value::str(vr, token).context(InvalidValueSnafu { tag }))
        .collect()
}

fn read_uids(cursor: &mut ByteCursor, tag: Tag, len: u32) -> Result<Vec<Value>> {
    let text = cursor.read_str(len as usize)?;
    trim_padding(&text)
        .split('\\')
        .map(|token| {
            Uid::new(token)
                .map(Value::from)
                .context(InvalidUidSnafu { tag })
        })
        .collect()
}

fn trim_padding(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ' ' || c == '\0')
}

/// Read as many fixed-width values as fit in `len` bytes.
///
/// A zero length yields a single empty value.
fn read_numbers<F>(
    cursor: &mut ByteCursor,
    tag: Tag,
    vr: VR,
    len: u32,
    mut read: F,
) -> Result<Vec<Value>>
where
    F: FnMut(&mut ByteCursor) -> Result<Value, BufferOverrun>,
{
    if len == 0 {
        return Ok(vec![Value::empty(vr)]);
    }
    // only reached for fixed-width representations
    let width = vr.fixed_width().unwrap_or(1);
    ensure!(
        len % width == 0,
        MalformedElementSnafu {
            tag,
            issue: Malformation::UnalignedLength { len, width },
        }
    );
    if cursor.remaining() < len as usize {
        return Err(BufferOverrun {
            position: cursor.position(),
            requested: len as usize,
            available: cursor.remaining(),
        }
        .into());
    }
    (0..len / width)
        .map(|_| read(cursor).map_err(Error::from))
        .collect()
}

/// Decode a whole data set from bytes in the given transfer syntax,
/// using the standard data dictionary.
pub fn decode(bytes: &[u8], ts: &TransferSyntax) -> Result<DataSet> {
    let mut cursor = ByteCursor::from_bytes(bytes, ts.endianness());
    Decoder::new(ts).decode(&mut cursor)
}

/// Decode a whole data set from bytes in the given transfer syntax,
/// skipping malformed elements.
pub fn decode_lenient(bytes: &[u8], ts: &TransferSyntax) -> Result<DataSet> {
    let mut cursor = ByteCursor::from_bytes(bytes, ts.endianness());
    Decoder::new(ts).decode_lenient(&mut cursor)
}
