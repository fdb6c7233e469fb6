//! DICOM Part 10 file framing:
//! the 128-byte preamble, the `DICM` prefix and the file meta group.
//!
//! The file meta group (0002,xxxx) is always written
//! in Explicit VR Little Endian, and names the transfer syntax
//! of the data set which follows it.

use crate::decode::{self, DecodeOptions, Decoder};
use crate::encode::{self, Encoder};
use dcmcodec_core::header::{Tag, VR};
use dcmcodec_core::uid::InvalidUidError;
use dcmcodec_core::value::TypeMismatch;
use dcmcodec_core::{DataSet, Value};
use dcmcodec_dictionary_std::tags;
use dcmcodec_encoding::cursor::ByteCursor;
use dcmcodec_encoding::transfer_syntax::{
    TransferSyntax, UnsupportedSyntax, EXPLICIT_VR_LITTLE_ENDIAN,
};
use dcmcodec_encoding::Endianness;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The length of the file preamble, in bytes.
pub const PREAMBLE_LENGTH: usize = 128;

/// The magic code following the preamble.
pub const DICM_MAGIC_CODE: [u8; 4] = *b"DICM";

/// The implementation class UID written by default.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.137038125948464847900039011591283709926";

/// The implementation version name written by default.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMCODEC_010";

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Missing preamble or DICM prefix"))]
    MissingPrefix { backtrace: Backtrace },
    #[snafu(display("Missing meta element {}", tag))]
    MissingElement { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Invalid value in element {}", tag))]
    InvalidElement { tag: Tag, source: TypeMismatch },
    #[snafu(display("Invalid implementation class UID"))]
    InvalidImplementationUid { source: InvalidUidError },
    #[snafu(display("Could not decode file meta group"))]
    DecodeMeta { source: decode::Error },
    #[snafu(display("Could not decode data set"))]
    DecodeDataSet { source: decode::Error },
    #[snafu(display("Could not encode"))]
    Encode { source: encode::Error },
    #[snafu(display("Unsupported transfer syntax in file meta group"))]
    UnsupportedTransferSyntax { source: UnsupportedSyntax },
    #[snafu(display("Could not read file {}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },
    #[snafu(display("Could not write file {}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The set of options for reading DICOM files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ReadOptions {
    /// Options for decoding the meta group and the data set.
    pub decode: DecodeOptions,
    /// Whether the data set after the meta group is decoded leniently.
    pub lenient: bool,
}

impl ReadOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the decoding options.
    pub fn decode_options(mut self, decode: DecodeOptions) -> Self {
        self.decode = decode;
        self
    }

    /// Skip malformed elements of the data set instead of failing.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

/// The set of options for writing DICOM files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct WriteMetaOptions {
    /// The implementation class UID (0002,0012).
    pub implementation_class_uid: String,
    /// The implementation version name (0002,0013).
    pub implementation_version_name: String,
}

impl Default for WriteMetaOptions {
    fn default() -> Self {
        WriteMetaOptions {
            implementation_class_uid: IMPLEMENTATION_CLASS_UID.to_string(),
            implementation_version_name: IMPLEMENTATION_VERSION_NAME.to_string(),
        }
    }
}

impl WriteMetaOptions {
    /// Create the default set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the implementation class UID.
    pub fn implementation_class_uid(mut self, uid: impl Into<String>) -> Self {
        self.implementation_class_uid = uid.into();
        self
    }

    /// Override the implementation version name.
    pub fn implementation_version_name(mut self, name: impl Into<String>) -> Self {
        self.implementation_version_name = name.into();
        self
    }
}

/// The contents of a DICOM file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDataSet {
    /// The file meta group.
    pub meta: DataSet,
    /// The main data set.
    pub dataset: DataSet,
    /// The transfer syntax of the main data set.
    pub transfer_syntax: &'static TransferSyntax,
}

impl FileDataSet {
    /// Discard the meta group, keeping only the main data set.
    pub fn into_dataset(self) -> DataSet {
        self.dataset
    }
}

/// Read a DICOM file from memory, starting at the preamble.
pub fn read_file(bytes: &[u8], options: ReadOptions) -> Result<FileDataSet> {
    ensure!(
        bytes.len() >= PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()
            && bytes[PREAMBLE_LENGTH..PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()] == DICM_MAGIC_CODE,
        MissingPrefixSnafu
    );
    let mut cursor = ByteCursor::from_bytes(
        &bytes[PREAMBLE_LENGTH + DICM_MAGIC_CODE.len()..],
        Endianness::Little,
    );

    let meta_decoder =
        Decoder::new(&EXPLICIT_VR_LITTLE_ENDIAN).with_options(options.decode);
    let mut meta = DataSet::new();
    loop {
        let group = match cursor.remaining_bytes() {
            [lo, hi, ..] => u16::from_le_bytes([*lo, *hi]),
            _ => break,
        };
        if group != 0x0002 {
            break;
        }
        meta_decoder
            .decode_element(&mut cursor, &mut meta)
            .context(DecodeMetaSnafu)?;
    }

    let uid = meta
        .get_first(tags::TRANSFER_SYNTAX_UID)
        .context(MissingElementSnafu {
            tag: tags::TRANSFER_SYNTAX_UID,
        })?
        .as_uid()
        .context(InvalidElementSnafu {
            tag: tags::TRANSFER_SYNTAX_UID,
        })?;
    let transfer_syntax =
        TransferSyntax::from_uid(uid).context(UnsupportedTransferSyntaxSnafu)?;
    tracing::debug!("File transfer syntax: {}", transfer_syntax);

    let decoder = Decoder::new(transfer_syntax).with_options(options.decode);
    let dataset = if options.lenient {
        decoder.decode_lenient(&mut cursor)
    } else {
        decoder.decode(&mut cursor)
    }
    .context(DecodeDataSetSnafu)?;

    Ok(FileDataSet {
        meta,
        dataset,
        transfer_syntax,
    })
}

/// Build the file meta group for the given data set,
/// without the group length element.
fn build_meta(
    dataset: &DataSet,
    ts: &TransferSyntax,
    options: &WriteMetaOptions,
) -> Result<DataSet> {
    let mut meta = DataSet::new();
    meta.put(tags::FILE_META_INFORMATION_VERSION, Value::ob(vec![0x00, 0x01]));
    for (from, to) in [
        (tags::SOP_CLASS_UID, tags::MEDIA_STORAGE_SOP_CLASS_UID),
        (tags::SOP_INSTANCE_UID, tags::MEDIA_STORAGE_SOP_INSTANCE_UID),
    ] {
        let uid = dataset
            .get_first(from)
            .context(MissingElementSnafu { tag: from })?
            .as_uid()
            .context(InvalidElementSnafu { tag: from })?;
        meta.put(to, Value::from(uid.clone()));
    }
    meta.put(
        tags::TRANSFER_SYNTAX_UID,
        Value::uid(ts.uid()).context(InvalidImplementationUidSnafu)?,
    );
    meta.put(
        tags::IMPLEMENTATION_CLASS_UID,
        Value::uid(&options.implementation_class_uid).context(InvalidImplementationUidSnafu)?,
    );
    meta.put(
        tags::IMPLEMENTATION_VERSION_NAME,
        Value::str(VR::SH, options.implementation_version_name.as_str()).context(
            InvalidElementSnafu {
                tag: tags::IMPLEMENTATION_VERSION_NAME,
            },
        )?,
    );
    Ok(meta)
}

/// Write a DICOM file into memory:
/// the preamble, the file meta group and the encoded data set.
///
/// The media storage SOP class and instance UIDs
/// are taken from the data set.
/// Meta group elements already in the data set are not written.
pub fn write_file(
    dataset: &DataSet,
    ts: &TransferSyntax,
    options: &WriteMetaOptions,
) -> Result<Vec<u8>> {
    let meta = build_meta(dataset, ts, options)?;
    let meta_length = encode::group_length(&meta, 0x0002, &EXPLICIT_VR_LITTLE_ENDIAN)
        .context(EncodeSnafu)?;

    let mut out = ByteCursor::new(Endianness::Little);
    out.write_bytes(&[0; PREAMBLE_LENGTH]);
    out.write_bytes(&DICM_MAGIC_CODE);

    let mut meta = meta;
    meta.put(tags::FILE_META_INFORMATION_GROUP_LENGTH, Value::ul(meta_length));
    Encoder::new(&EXPLICIT_VR_LITTLE_ENDIAN)
        .encode_into(&meta, &mut out)
        .context(EncodeSnafu)?;

    let encoder = Encoder::new(ts);
    let body = if dataset.iter().any(|(tag, _)| tag.group() == 0x0002) {
        tracing::warn!("Ignoring file meta group elements in the data set");
        let dataset: DataSet = dataset
            .iter()
            .filter(|(tag, _)| tag.group() != 0x0002)
            .map(|(tag, value)| (tag, value.clone()))
            .collect();
        encoder.encode(&dataset)
    } else {
        encoder.encode(dataset)
    }
    .context(EncodeSnafu)?;
    out.write_bytes(&body);

    Ok(out.into_inner())
}

/// Read and decode a DICOM file from the file system.
pub fn open_file(path: impl AsRef<Path>, options: ReadOptions) -> Result<FileDataSet> {
    let path = path.as_ref();
    let bytes = fs::read(path).context(ReadFileSnafu { path })?;
    read_file(&bytes, options)
}

/// Encode a data set and save it as a DICOM file.
pub fn save_file(
    path: impl AsRef<Path>,
    dataset: &DataSet,
    ts: &TransferSyntax,
    options: &WriteMetaOptions,
) -> Result<()> {
    let path = path.as_ref();
    let bytes = write_file(dataset, ts, options)?;
    fs::write(path, bytes).context(WriteFileSnafu { path })
}
