//! # Cursor Buffers
//!
//! [`WireReader`] and [`WireWriter`] carry the caller's cursor while composing or
//! taking apart a message field by field.
//!
//! A reader only advances when a read succeeds, so a failed read leaves it positioned
//! at the start of the offending field.
//!
//! ## Usage
//! ```rust
//! use tobcomm::core::buffer::{WireReader, WireWriter};
//!
//! let mut writer = WireWriter::new();
//! writer.write_string("player").unwrap();
//! writer.write_u32(42);
//! let bytes = writer.freeze();
//!
//! let mut reader = WireReader::new(&bytes);
//! assert_eq!(reader.read_string().unwrap(), "player");
//! assert_eq!(reader.read_u32().unwrap(), 42);
//! assert!(reader.is_empty());
//! ```

use crate::core::integer::read_u32_be;
use crate::core::string::{decode_string, put_string};
use crate::error::{ProtocolError, Result};
use crate::utils::checksum::crc32;
use bytes::{BufMut, Bytes, BytesMut};

/// Read cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Start reading at the beginning of `buf`
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current cursor offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read a length-prefixed string
    pub fn read_string(&mut self) -> Result<String> {
        let (s, next) = decode_string(self.buf, self.pos)?;
        self.pos = next;
        Ok(s)
    }

    /// Read a big-endian `u32`
    pub fn read_u32(&mut self) -> Result<u32> {
        let (v, next) = read_u32_be(self.buf, self.pos)?;
        self.pos = next;
        Ok(v)
    }

    /// Borrow the next `n` raw bytes
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < n {
            return Err(ProtocolError::TruncatedBuffer {
                needed: n,
                available,
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }
}

/// Growable write buffer
#[derive(Debug, Clone, Default)]
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size the buffer, e.g. from summed `encoded_size` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Append a length-prefixed string; nothing is written on error
    pub fn write_string(&mut self, s: &str) -> Result<&mut Self> {
        put_string(&mut self.buf, s)?;
        Ok(self)
    }

    /// Append a big-endian `u32`
    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.buf.put_u32(value);
        self
    }

    /// Append raw bytes
    pub fn write_bytes(&mut self, data: &[u8]) -> &mut Self {
        self.buf.put_slice(data);
        self
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// CRC-32 of everything written so far
    pub fn checksum(&self) -> u32 {
        crc32(&self.buf)
    }

    /// Finish writing and hand out the bytes
    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}
