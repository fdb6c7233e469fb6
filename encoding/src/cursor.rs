//! A growable byte buffer with a read cursor.
//!
//! Writes always append at the end of the buffer,
//! while reads consume bytes from the current position.
//! Multi-byte numbers are converted from and to
//! the cursor's declared byte order.

use crate::text::{DefaultCharacterSetCodec, TextCodec};
use byteordered::{ByteOrdered, Endianness};
use dcmcodec_core::header::{Tag, VR};
use snafu::{OptionExt, Snafu};
use std::io;

/// Error raised when an operation needs more bytes than the buffer holds.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display(
    "cannot access {} bytes at position {}, only {} remain",
    requested,
    position,
    available
))]
pub struct BufferOverrun {
    /// The position of the cursor when the operation was attempted.
    pub position: usize,
    /// The number of bytes requested.
    pub requested: usize,
    /// The number of bytes remaining after the cursor.
    pub available: usize,
}

/// Type alias for a result from cursor operations.
pub type Result<T, E = BufferOverrun> = std::result::Result<T, E>;

/// A byte buffer with a read/write cursor and an external byte order.
///
/// The cursor position never exceeds the buffer length.
/// A read which cannot be fully satisfied fails with [`BufferOverrun`]
/// and leaves the position unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCursor {
    data: Vec<u8>,
    position: usize,
    endianness: Endianness,
}

macro_rules! scalar_io {
    ($(($read: ident, $write: ident, $t: ty, $size: expr)),* $(,)?) => {
        $(
            #[doc = concat!("Read one `", stringify!($t), "` in the cursor's byte order.")]
            pub fn $read(&mut self) -> Result<$t> {
                self.read_with($size, |r| r.$read())
            }

            #[doc = concat!("Append one `", stringify!($t), "` in the cursor's byte order.")]
            pub fn $write(&mut self, value: $t) {
                self.write_with(|w| w.$write(value))
            }
        )*
    };
}

impl ByteCursor {
    /// Create an empty cursor with the given byte order.
    pub fn new(endianness: Endianness) -> Self {
        ByteCursor {
            data: Vec::new(),
            position: 0,
            endianness,
        }
    }

    /// Create a cursor positioned at the start of the given bytes.
    pub fn from_bytes(data: impl Into<Vec<u8>>, endianness: Endianness) -> Self {
        ByteCursor {
            data: data.into(),
            position: 0,
            endianness,
        }
    }

    /// The byte order of multi-byte values in this buffer.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Change the byte order used by subsequent reads and writes.
    #[inline]
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// The current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The total number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no bytes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of bytes after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Whether all bytes have been read.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.data.len()
    }

    /// All bytes of the buffer, regardless of the cursor.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The bytes after the cursor.
    #[inline]
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.data[self.position..]
    }

    /// Retrieve the underlying bytes.
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Discard all bytes and move the cursor back to the start.
    pub fn clear(&mut self) {
        self.data.clear();
        self.position = 0;
    }

    fn overrun(&self, requested: usize) -> BufferOverrun {
        BufferOverrun {
            position: self.position,
            requested,
            available: self.remaining(),
        }
    }

    /// The end position of a read of `n` bytes, if within bounds.
    fn end_of(&self, n: usize) -> Result<usize> {
        self.position
            .checked_add(n)
            .filter(|end| *end <= self.data.len())
            .with_context(|| BufferOverrunSnafu {
                position: self.position,
                requested: n,
                available: self.remaining(),
            })
    }

    /// Move the cursor forward by `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.position = self.end_of(n)?;
        Ok(())
    }

    /// Move the cursor to an absolute position.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(BufferOverrun {
                position: self.position,
                requested: position - self.position,
                available: self.remaining(),
            });
        }
        self.position = position;
        Ok(())
    }

    fn read_with<T, F>(&mut self, n: usize, f: F) -> Result<T>
    where
        F: FnOnce(&mut ByteOrdered<&[u8], Endianness>) -> io::Result<T>,
    {
        let end = self.end_of(n)?;
        let mut reader = ByteOrdered::runtime(&self.data[self.position..end], self.endianness);
        let value = f(&mut reader).map_err(|_| self.overrun(n))?;
        self.position = end;
        Ok(value)
    }

    fn write_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut ByteOrdered<&mut Vec<u8>, Endianness>) -> io::Result<()>,
    {
        let mut writer = ByteOrdered::runtime(&mut self.data, self.endianness);
        // writing into a vector cannot fail
        let _ = f(&mut writer);
    }

    scalar_io![
        (read_u8, write_u8, u8, 1),
        (read_i8, write_i8, i8, 1),
        (read_u16, write_u16, u16, 2),
        (read_i16, write_i16, i16, 2),
        (read_u32, write_u32, u32, 4),
        (read_i32, write_i32, i32, 4),
        (read_u64, write_u64, u64, 8),
        (read_i64, write_i64, i64, 8),
        (read_f32, write_f32, f32, 4),
        (read_f64, write_f64, f64, 8),
    ];

    /// Read an attribute tag: the group number followed by the element number.
    pub fn read_tag(&mut self) -> Result<Tag> {
        self.read_with(4, |r| {
            let group = r.read_u16()?;
            let element = r.read_u16()?;
            Ok(Tag(group, element))
        })
    }

    /// Append an attribute tag: the group number followed by the element number.
    pub fn write_tag(&mut self, tag: Tag) {
        self.write_u16(tag.group());
        self.write_u16(tag.element());
    }

    /// Read the two characters of a value representation code,
    /// without interpreting them.
    pub fn read_vr_code(&mut self) -> Result<[u8; 2]> {
        let end = self.end_of(2)?;
        let code = [self.data[self.position], self.data[self.position + 1]];
        self.position = end;
        Ok(code)
    }

    /// Append the two characters of a value representation code.
    pub fn write_vr(&mut self, vr: VR) {
        self.data.extend_from_slice(&vr.to_bytes());
    }

    /// Read `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let end = self.end_of(n)?;
        let bytes = self.data[self.position..end].to_vec();
        self.position = end;
        Ok(bytes)
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Read `n` 16-bit words in the cursor's byte order.
    pub fn read_words(&mut self, n: usize) -> Result<Vec<u16>> {
        let size = n.checked_mul(2).with_context(|| BufferOverrunSnafu {
            position: self.position,
            requested: usize::MAX,
            available: self.remaining(),
        })?;
        self.read_with(size, |r| {
            let mut words = vec![0u16; n];
            r.read_u16_into(&mut words)?;
            Ok(words)
        })
    }

    /// Append 16-bit words in the cursor's byte order.
    pub fn write_words(&mut self, words: &[u16]) {
        self.data.reserve(words.len() * 2);
        self.write_with(|w| {
            for word in words {
                w.write_u16(*word)?;
            }
            Ok(())
        })
    }

    /// Read `n` bytes of text in the default character repertoire.
    pub fn read_str(&mut self, n: usize) -> Result<String> {
        let end = self.end_of(n)?;
        let text = DefaultCharacterSetCodec.decode(&self.data[self.position..end]);
        self.position = end;
        Ok(text)
    }

    /// Append text in the default character repertoire,
    /// returning the number of bytes written.
    pub fn write_str(&mut self, text: &str) -> usize {
        let bytes = DefaultCharacterSetCodec.encode(text);
        self.data.extend_from_slice(&bytes);
        bytes.len()
    }

    /// Read the next `n` bytes into a new, independent cursor
    /// with the same byte order.
    pub fn take_cursor(&mut self, n: usize) -> Result<ByteCursor> {
        let bytes = self.read_bytes(n)?;
        Ok(ByteCursor::from_bytes(bytes, self.endianness))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Endianness::Little, [0x34, 0x12])]
    #[case(Endianness::Big, [0x12, 0x34])]
    fn u16_byte_order(#[case] endianness: Endianness, #[case] bytes: [u8; 2]) {
        let mut cursor = ByteCursor::new(endianness);
        cursor.write_u16(0x1234);
        assert_eq!(cursor.as_bytes(), &bytes);
        assert_eq!(cursor.read_u16(), Ok(0x1234));
        assert!(cursor.is_exhausted());
    }

    #[rstest]
    #[case(Endianness::Little)]
    #[case(Endianness::Big)]
    fn scalars_and_vectors(#[case] endianness: Endianness) {
        let mut cursor = ByteCursor::new(endianness);
        cursor.write_i8(-2);
        cursor.write_i16(-300);
        cursor.write_u32(0xDEAD_BEEF);
        cursor.write_i32(-70_000);
        cursor.write_u64(1 << 40);
        cursor.write_f32(1.5);
        cursor.write_f64(-0.25);
        cursor.write_words(&[1, 0xFF00, 3]);
        cursor.write_tag(Tag(0x0028, 0x0010));

        assert_eq!(cursor.read_i8(), Ok(-2));
        assert_eq!(cursor.read_i16(), Ok(-300));
        assert_eq!(cursor.read_u32(), Ok(0xDEAD_BEEF));
        assert_eq!(cursor.read_i32(), Ok(-70_000));
        assert_eq!(cursor.read_u64(), Ok(1 << 40));
        assert_eq!(cursor.read_f32(), Ok(1.5));
        assert_eq!(cursor.read_f64(), Ok(-0.25));
        assert_eq!(cursor.read_words(3), Ok(vec![1, 0xFF00, 3]));
        assert_eq!(cursor.read_tag(), Ok(Tag(0x0028, 0x0010)));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn tag_byte_layout() {
        let mut le = ByteCursor::new(Endianness::Little);
        le.write_tag(Tag(0x7FE0, 0x0010));
        assert_eq!(le.as_bytes(), &[0xE0, 0x7F, 0x10, 0x00]);

        let mut be = ByteCursor::new(Endianness::Big);
        be.write_tag(Tag(0x7FE0, 0x0010));
        assert_eq!(be.as_bytes(), &[0x7F, 0xE0, 0x00, 0x10]);
    }

    #[test]
    fn failed_read_does_not_advance() {
        let mut cursor = ByteCursor::from_bytes(vec![1, 2, 3, 4, 5, 6], Endianness::Little);
        cursor.advance(4).unwrap();
        assert_eq!(
            cursor.read_u32(),
            Err(BufferOverrun {
                position: 4,
                requested: 4,
                available: 2,
            })
        );
        assert_eq!(cursor.position(), 4);
        assert!(cursor.read_bytes(3).is_err());
        assert!(cursor.read_words(2).is_err());
        assert!(cursor.read_tag().is_err());
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.read_u16(), Ok(0x0605));
    }

    #[test]
    fn advance_and_seek_are_bounded() {
        let mut cursor = ByteCursor::from_bytes(vec![0; 4], Endianness::Little);
        assert!(cursor.advance(5).is_err());
        assert_eq!(cursor.position(), 0);
        assert!(cursor.advance(usize::MAX).is_err());
        cursor.advance(4).unwrap();
        assert!(cursor.is_exhausted());
        assert!(cursor.advance(1).is_err());
        cursor.seek(1).unwrap();
        assert_eq!(cursor.remaining(), 3);
        assert!(cursor.seek(5).is_err());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn strings_and_vr_codes() {
        let mut cursor = ByteCursor::new(Endianness::Big);
        cursor.write_vr(VR::PN);
        assert_eq!(cursor.write_str("Doe^John"), 8);
        assert_eq!(cursor.read_vr_code(), Ok(*b"PN"));
        assert_eq!(cursor.read_str(8).as_deref(), Ok("Doe^John"));
    }

    #[test]
    fn take_cursor_and_clear() {
        let mut cursor = ByteCursor::from_bytes(vec![1, 0, 2, 0, 3, 0], Endianness::Little);
        cursor.advance(2).unwrap();
        let mut sub = cursor.take_cursor(2).unwrap();
        assert_eq!(sub.read_u16(), Ok(2));
        assert!(sub.is_exhausted());
        assert_eq!(cursor.position(), 4);
        assert!(cursor.take_cursor(4).is_err());

        cursor.clear();
        assert!(cursor.is_empty());
        assert_eq!(cursor.position(), 0);
    }
}
