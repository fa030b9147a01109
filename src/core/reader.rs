//! # Packet Reader
//!
//! Sequential decoding cursor over an inbound packet payload.
//!
//! A [`PacketReader`] borrows the payload bytes and keeps its own read
//! position. Every read consumes bytes from the current position and advances
//! it; `seek` and `skip` reposition it explicitly. Multi-byte integers are
//! little-endian.
//!
//! ## Usage
//! ```rust
//! use packet_reader::{InPacket, PacketReader, Point};
//!
//! let payload = [0x6F, 0x00, 0xDE, 0x00, 0x02, 0x00, b'h', b'i'];
//! let mut packet = PacketReader::new(&payload);
//!
//! assert_eq!(packet.read_point()?, Point::new(111, 222));
//! assert_eq!(packet.read_string()?, "hi");
//! assert_eq!(packet.available(), 0);
//! # Ok::<(), packet_reader::PacketError>(())
//! ```

use crate::config::ReaderConfig;
use crate::core::point::Point;
use crate::core::text::TextEncoding;
use crate::error::{PacketError, Result};
use bytes::Bytes;
use tracing::{debug, trace};

/// Width of the string length prefix
const STRING_PREFIX_LEN: usize = 2;

/// Decoding contract exposed to message parsers.
///
/// Every operation either succeeds and moves the position by exactly the
/// number of bytes it consumed, or fails and leaves the position untouched.
pub trait InPacket {
    /// Read one byte as a signed 8-bit integer.
    fn read_byte(&mut self) -> Result<i8>;

    /// Read a little-endian signed 16-bit integer.
    fn read_short(&mut self) -> Result<i16>;

    /// Read a little-endian signed 32-bit integer.
    fn read_int(&mut self) -> Result<i32>;

    /// Read a little-endian signed 64-bit integer.
    fn read_long(&mut self) -> Result<i64>;

    /// Read a coordinate pair: `x` then `y`, each a little-endian `i16`.
    fn read_point(&mut self) -> Result<Point>;

    /// Read a string framed by an unsigned 16-bit little-endian length prefix.
    fn read_string(&mut self) -> Result<String>;

    /// Copy the next `count` bytes out of the packet.
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>>;

    /// Advance the position by `count` bytes without decoding them.
    fn skip(&mut self, count: usize) -> Result<()>;

    /// Move to the absolute offset `position`.
    fn seek(&mut self, position: usize) -> Result<()>;

    /// Bytes left between the position and the end of the packet.
    fn available(&self) -> usize;

    /// Current read offset.
    fn position(&self) -> usize;
}

/// [`InPacket`] implementation over a borrowed byte slice.
#[derive(Debug)]
pub struct PacketReader<'a> {
    source: &'a [u8],
    position: usize,
    encoding: TextEncoding,
}

impl<'a> PacketReader<'a> {
    /// Bind a reader at position 0 using the default text encoding.
    pub fn new(source: &'a [u8]) -> Self {
        Self::with_encoding(source, TextEncoding::default())
    }

    /// Bind a reader that decodes strings with `encoding`.
    pub fn with_encoding(source: &'a [u8], encoding: TextEncoding) -> Self {
        Self {
            source,
            position: 0,
            encoding,
        }
    }

    /// Bind a reader using the settings in `config`.
    pub fn with_config(source: &'a [u8], config: &ReaderConfig) -> Self {
        Self::with_encoding(source, config.text_encoding)
    }

    /// Text encoding used by `read_string`.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Borrow the next `len` bytes without moving the position.
    fn peek(&self, len: usize) -> Result<&'a [u8]> {
        let available = self.available();
        if len > available {
            debug!(
                needed = len,
                available,
                position = self.position,
                "packet underflow"
            );
            return Err(PacketError::Underflow {
                needed: len,
                available,
                position: self.position,
            });
        }
        Ok(&self.source[self.position..self.position + len])
    }

    /// Borrow the next `len` bytes and move past them.
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(len)?;
        self.position += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}

impl<'a> InPacket for PacketReader<'a> {
    fn read_byte(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.take_array()?))
    }

    fn read_short(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.take_array()?))
    }

    fn read_int(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }

    fn read_long(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    fn read_point(&mut self) -> Result<Point> {
        // Check the full width first so a short buffer cannot consume `x` alone
        self.peek(4)?;
        let x = self.read_short()?;
        let y = self.read_short()?;
        Ok(Point::new(x, y))
    }

    fn read_string(&mut self) -> Result<String> {
        let prefix = self.peek(STRING_PREFIX_LEN)?;
        let len = usize::from(u16::from_le_bytes([prefix[0], prefix[1]]));

        // Prefix and body are validated together; nothing moves on failure
        let frame = self.peek(STRING_PREFIX_LEN + len)?;
        self.position += frame.len();
        Ok(self.encoding.decode(&frame[STRING_PREFIX_LEN..]))
    }

    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        Ok(self.take(count)?.to_vec())
    }

    fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.available() {
            debug!(count, position = self.position, "skip past end of packet");
            return Err(PacketError::InvalidSkip {
                count,
                position: self.position,
                length: self.source.len(),
            });
        }
        self.position += count;
        Ok(())
    }

    fn seek(&mut self, position: usize) -> Result<()> {
        if position > self.source.len() {
            debug!(seek_to = position, length = self.source.len(), "seek outside packet");
            return Err(PacketError::InvalidSeek {
                target: position,
                length: self.source.len(),
            });
        }
        trace!(from = self.position, to = position, "seek");
        self.position = position;
        Ok(())
    }

    fn available(&self) -> usize {
        self.source.len() - self.position
    }

    fn position(&self) -> usize {
        self.position
    }
}

impl<'a> From<&'a [u8]> for PacketReader<'a> {
    fn from(source: &'a [u8]) -> Self {
        PacketReader::new(source)
    }
}

impl<'a> From<&'a Vec<u8>> for PacketReader<'a> {
    fn from(source: &'a Vec<u8>) -> Self {
        PacketReader::new(source)
    }
}

impl<'a> From<&'a Bytes> for PacketReader<'a> {
    fn from(source: &'a Bytes) -> Self {
        PacketReader::new(source)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use bytes::{BufMut, BytesMut};

    #[test]
    fn test_reads_advance_by_width() {
        let mut buf = BytesMut::new();
        buf.put_i8(-5);
        buf.put_i16_le(-12_345);
        buf.put_i32_le(1_234_567_890);
        buf.put_i64_le(i64::MIN);
        let buf = buf.freeze();

        let mut packet = PacketReader::from(&buf);
        assert_eq!(packet.read_byte().unwrap(), -5);
        assert_eq!(packet.position(), 1);
        assert_eq!(packet.read_short().unwrap(), -12_345);
        assert_eq!(packet.position(), 3);
        assert_eq!(packet.read_int().unwrap(), 1_234_567_890);
        assert_eq!(packet.position(), 7);
        assert_eq!(packet.read_long().unwrap(), i64::MIN);
        assert_eq!(packet.position(), 15);
        assert_eq!(packet.available(), 0);
    }

    #[test]
    fn test_read_point_sign_extends() {
        let bytes = [0xFF, 0xFF, 0x00, 0x80];
        let mut packet = PacketReader::new(&bytes);
        assert_eq!(packet.read_point().unwrap(), Point::new(-1, i16::MIN));
    }

    #[test]
    fn test_read_point_underflow_keeps_position() {
        let bytes = [0x01, 0x00, 0x02];
        let mut packet = PacketReader::new(&bytes);
        let err = packet.read_point().unwrap_err();
        assert!(matches!(
            err,
            PacketError::Underflow {
                needed: 4,
                available: 3,
                position: 0
            }
        ));
        assert_eq!(packet.position(), 0);
    }

    #[test]
    fn test_read_string_truncated_body_keeps_position() {
        // Prefix claims 5 bytes, only 3 follow
        let bytes = [0x05, 0x00, b'a', b'b', b'c'];
        let mut packet = PacketReader::new(&bytes);
        let err = packet.read_string().unwrap_err();
        assert!(matches!(err, PacketError::Underflow { needed: 7, .. }));
        assert_eq!(packet.position(), 0);
    }

    #[test]
    fn test_read_string_empty() {
        let bytes = [0x00, 0x00];
        let mut packet = PacketReader::new(&bytes);
        assert_eq!(packet.read_string().unwrap(), "");
        assert_eq!(packet.position(), 2);
    }

    #[test]
    fn test_read_string_uses_reader_encoding() {
        let bytes = [0x02, 0x00, b'o', 0xE9];
        let mut ascii = PacketReader::new(&bytes);
        assert_eq!(ascii.read_string().unwrap(), "o\u{FFFD}");

        let config = ReaderConfig {
            text_encoding: TextEncoding::Latin1,
        };
        let mut latin1 = PacketReader::with_config(&bytes, &config);
        assert_eq!(latin1.encoding(), TextEncoding::Latin1);
        assert_eq!(latin1.read_string().unwrap(), "oé");
    }

    #[test]
    fn test_read_bytes_zero() {
        let bytes = [1u8, 2, 3];
        let mut packet = PacketReader::new(&bytes);
        assert!(packet.read_bytes(0).unwrap().is_empty());
        assert_eq!(packet.position(), 0);
    }

    #[test]
    fn test_skip_to_end_and_past() {
        let bytes = [0u8; 4];
        let mut packet = PacketReader::new(&bytes);
        packet.skip(4).unwrap();
        assert_eq!(packet.available(), 0);

        packet.seek(1).unwrap();
        let err = packet.skip(usize::MAX).unwrap_err();
        assert!(matches!(
            err,
            PacketError::InvalidSkip {
                position: 1,
                length: 4,
                ..
            }
        ));
        assert_eq!(packet.position(), 1);
    }

    #[test]
    fn test_seek_bounds() {
        let bytes = [0u8; 6];
        let mut packet = PacketReader::new(&bytes);
        packet.seek(6).unwrap();
        assert_eq!(packet.available(), 0);

        packet.seek(2).unwrap();
        assert!(matches!(
            packet.seek(7),
            Err(PacketError::InvalidSeek {
                target: 7,
                length: 6
            })
        ));
        assert_eq!(packet.position(), 2);
    }

    #[test]
    fn test_empty_source() {
        let mut packet = PacketReader::new(&[]);
        assert_eq!(packet.available(), 0);
        assert!(packet.read_byte().unwrap_err().is_underflow());
        packet.seek(0).unwrap();
        packet.skip(0).unwrap();
        assert_eq!(packet.position(), 0);
    }
}
