//! Module containing the DICOM transfer syntax data structure
//! and the registry of all transfer syntaxes known to the codec.
//!
//! A transfer syntax determines the byte order of the data set,
//! whether value representations are written explicitly,
//! and whether pixel data is encapsulated or the whole data set deflated.

use byteordered::Endianness;
use lazy_static::lazy_static;
use snafu::{OptionExt, Snafu};
use std::collections::HashMap;
use std::fmt;

/// Error raised when a transfer syntax UID is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Unsupported transfer syntax {:?}", uid))]
pub struct UnsupportedSyntax {
    /// The unrecognized UID.
    pub uid: String,
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: &'static str,
    /// The name of the transfer syntax.
    name: &'static str,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// Whether pixel data is stored as a sequence of compressed fragments.
    encapsulated: bool,
    /// Whether the whole data set is compressed with DEFLATE.
    deflated: bool,
}

const fn native(
    uid: &'static str,
    name: &'static str,
    byte_order: Endianness,
    explicit_vr: bool,
) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        byte_order,
        explicit_vr,
        encapsulated: false,
        deflated: false,
    }
}

const fn encapsulated(uid: &'static str, name: &'static str) -> TransferSyntax {
    TransferSyntax {
        uid,
        name,
        byte_order: Endianness::Little,
        explicit_vr: true,
        encapsulated: true,
        deflated: false,
    }
}

/// **Implicit VR Little Endian**: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = native(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
);

/// **Explicit VR Little Endian**
pub const EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = native(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
);

/// **Explicit VR Big Endian** (retired)
pub const EXPLICIT_VR_BIG_ENDIAN: TransferSyntax = native(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
);

/// **Deflated Explicit VR Little Endian**
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: TransferSyntax = TransferSyntax {
    uid: "1.2.840.10008.1.2.1.99",
    name: "Deflated Explicit VR Little Endian",
    byte_order: Endianness::Little,
    explicit_vr: true,
    encapsulated: false,
    deflated: true,
};

/// **JPEG Baseline (Process 1)**
pub const JPEG_BASELINE: TransferSyntax =
    encapsulated("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");

/// **JPEG Extended (Process 2 & 4)**
pub const JPEG_EXTENDED: TransferSyntax =
    encapsulated("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4)");

/// **JPEG Lossless, Non-Hierarchical (Process 14)**
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: TransferSyntax = encapsulated(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// **JPEG Lossless, Non-Hierarchical, First-Order Prediction
/// (Process 14 [Selection Value 1])**
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: TransferSyntax = encapsulated(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);

/// **JPEG-LS Lossless Image Compression**
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: TransferSyntax = encapsulated(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
);

/// **JPEG-LS Lossy (Near-Lossless) Image Compression**
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: TransferSyntax = encapsulated(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
);

/// **JPEG 2000 Image Compression (Lossless Only)**
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: TransferSyntax = encapsulated(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// **JPEG 2000 Image Compression**
pub const JPEG_2000_IMAGE_COMPRESSION: TransferSyntax =
    encapsulated("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression");

/// **RLE Lossless**
pub const RLE_LOSSLESS: TransferSyntax = encapsulated("1.2.840.10008.1.2.5", "RLE Lossless");

impl TransferSyntax {
    /// Obtain the transfer syntax identified by the given UID.
    ///
    /// Trailing null characters and spaces in `uid` are ignored.
    pub fn from_uid(uid: &str) -> Result<&'static TransferSyntax, UnsupportedSyntax> {
        get_registry().get(uid).context(UnsupportedSyntaxSnafu { uid })
    }

    /// Obtain this transfer syntax' unique identifier.
    pub const fn uid(&self) -> &'static str {
        self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub const fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether the value representation of each element
    /// is written on the wire.
    pub const fn is_explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// Whether data is written in big endian.
    pub fn is_big_endian(&self) -> bool {
        self.byte_order == Endianness::Big
    }

    /// Whether pixel data is encapsulated in fragments.
    pub const fn is_encapsulated(&self) -> bool {
        self.encapsulated
    }

    /// Whether the data set is compressed with DEFLATE.
    pub const fn is_deflated(&self) -> bool {
        self.deflated
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> = self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a transfer syntax by its UID.
    pub fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        let uid = uid.trim_end_matches(|c: char| c == '\0' || c == ' ');
        self.m.get(uid)
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = TransferSyntaxRegistry {
        m: initialize_registry(),
    };
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

fn initialize_registry() -> HashMap<&'static str, TransferSyntax> {
    [
        IMPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_LITTLE_ENDIAN,
        EXPLICIT_VR_BIG_ENDIAN,
        DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
        JPEG_BASELINE,
        JPEG_EXTENDED,
        JPEG_LOSSLESS_NON_HIERARCHICAL,
        JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
        JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
        JPEG_LS_LOSSY_IMAGE_COMPRESSION,
        JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
        JPEG_2000_IMAGE_COMPRESSION,
        RLE_LOSSLESS,
    ]
    .iter()
    .map(|ts| (ts.uid(), *ts))
    .collect()
}
