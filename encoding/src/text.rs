//! This module contains reusable components for encoding and decoding text
//! in DICOM data structures.
//!
//! Only the default character repertoire is supported at the moment.
//! Its bytes are mapped one to one onto ISO 8859-1 characters,
//! which keeps the original bytes of every string value
//! through a decode and encode cycle.

use encoding::all::ISO_8859_1;
use encoding::{DecoderTrap, EncoderTrap, Encoding};

/// A holder of encoding and decoding mechanisms for text in DICOM content.
pub trait TextCodec {
    /// Obtain the defined term (unique name) of the text encoding,
    /// which may be used as the value of a
    /// Specific Character Set (0008, 0005) element to refer to this codec.
    fn name(&self) -> &'static str;

    /// Decode the given byte buffer as a single string.
    fn decode(&self, text: &[u8]) -> String;

    /// Encode a text value into a byte vector.
    /// Characters which cannot be represented are replaced.
    fn encode(&self, text: &str) -> Vec<u8>;
}

/// Data type representing the default character set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultCharacterSetCodec;

impl TextCodec for DefaultCharacterSetCodec {
    fn name(&self) -> &'static str {
        "ISO_IR 6"
    }

    fn decode(&self, text: &[u8]) -> String {
        ISO_8859_1
            .decode(text, DecoderTrap::Replace)
            .unwrap_or_else(|_| String::from_utf8_lossy(text).into_owned())
    }

    fn encode(&self, text: &str) -> Vec<u8> {
        ISO_8859_1
            .encode(text, EncoderTrap::Replace)
            .unwrap_or_else(|_| text.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let codec = DefaultCharacterSetCodec;
        assert_eq!(codec.decode(b"Doe^John"), "Doe^John");
        assert_eq!(codec.encode("ORIGINAL\\PRIMARY"), b"ORIGINAL\\PRIMARY");
    }

    #[test]
    fn high_bytes_survive() {
        let codec = DefaultCharacterSetCodec;
        let bytes = [b'M', 0xFC, b'l', b'l', b'e', b'r'];
        let text = codec.decode(&bytes);
        assert_eq!(text, "M\u{fc}ller");
        assert_eq!(codec.encode(&text), bytes);
    }

    #[test]
    fn unrepresentable_characters_are_replaced() {
        let codec = DefaultCharacterSetCodec;
        assert_eq!(codec.encode("a\u{3b1}b"), b"a?b");
    }
}
