//! Raw DEFLATE compression of whole data sets,
//! as used by the Deflated Explicit VR Little Endian transfer syntax.

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;
use snafu::{ResultExt, Snafu};
use std::io::{Read, Write};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum DeflateError {
    /// The compressed stream could not be inflated.
    #[snafu(display("Could not inflate data set"))]
    Inflate { source: std::io::Error },
    /// The data set could not be compressed.
    #[snafu(display("Could not deflate data set"))]
    Deflate { source: std::io::Error },
}

/// Decompress a raw DEFLATE stream.
pub fn inflate(bytes: &[u8]) -> Result<Vec<u8>, DeflateError> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    DeflateDecoder::new(bytes)
        .read_to_end(&mut out)
        .context(InflateSnafu)?;
    Ok(out)
}

/// Compress bytes into a raw DEFLATE stream.
pub fn deflate(bytes: &[u8]) -> Result<Vec<u8>, DeflateError> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).context(DeflateSnafu)?;
    encoder.finish().context(DeflateSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compresses_and_restores() {
        let data: Vec<u8> = b"ORIGINAL\\PRIMARY\\AXIAL ".repeat(40);
        let packed = deflate(&data).unwrap();
        assert!(packed.len() < data.len());
        assert_eq!(inflate(&packed).unwrap(), data);
    }

    #[test]
    fn garbage_fails_to_inflate() {
        assert!(matches!(
            inflate(&[0xFF, 0xFF, 0xFF, 0xFF]),
            Err(DeflateError::Inflate { .. })
        ));
    }
}
