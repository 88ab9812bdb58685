//! # Length-Prefixed Strings
//!
//! ```text
//! [Length(2, big-endian) = N] [Payload(N bytes, UTF-8)]
//! ```
//!
//! The prefix is the byte length of the payload, never the character count, so a
//! payload can be at most 65535 bytes. Encoding refuses longer strings instead of
//! truncating them, and decoding refuses buffers that end before the declared payload.

use crate::config::{MAX_STRING_BYTES, SANCTIFIED_CHARS, STRING_LENGTH_PREFIX_SIZE};
use crate::error::{ProtocolError, Result};
use bytes::BufMut;

/// Number of bytes `s` occupies on the wire, computed without allocating
#[inline]
pub fn encoded_size(s: &str) -> usize {
    STRING_LENGTH_PREFIX_SIZE + s.len()
}

/// Reject payloads that do not fit the 2-byte prefix (or a tighter `max`)
#[inline]
pub(crate) fn check_payload_len(len: usize, max: usize) -> Result<u16> {
    if len > max {
        return Err(ProtocolError::Encoding { len, max });
    }
    u16::try_from(len).map_err(|_| ProtocolError::Encoding {
        len,
        max: MAX_STRING_BYTES,
    })
}

/// Encode `s` as a length-prefixed string
///
/// # Errors
/// Returns `ProtocolError::Encoding` if the UTF-8 payload exceeds 65535 bytes.
pub fn encode_string(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_size(s));
    put_string(&mut out, s)?;
    Ok(out)
}

/// Append `s` as a length-prefixed string to `dst`
///
/// Nothing is written when the payload is too long.
pub fn put_string<B: BufMut>(dst: &mut B, s: &str) -> Result<()> {
    put_string_limited(dst, s, MAX_STRING_BYTES)
}

pub(crate) fn put_string_limited<B: BufMut>(dst: &mut B, s: &str, max: usize) -> Result<()> {
    let len = check_payload_len(s.len(), max)?;
    dst.put_u16(len);
    dst.put_slice(s.as_bytes());
    Ok(())
}

/// Read the 2-byte length prefix at `cursor`
pub(crate) fn peek_prefix(buf: &[u8], cursor: usize) -> Result<usize> {
    let available = buf.len().saturating_sub(cursor);
    if available < STRING_LENGTH_PREFIX_SIZE {
        return Err(ProtocolError::TruncatedBuffer {
            needed: STRING_LENGTH_PREFIX_SIZE,
            available,
        });
    }
    Ok(usize::from(u16::from_be_bytes([buf[cursor], buf[cursor + 1]])))
}

/// Decode a length-prefixed string starting at `cursor`
///
/// Returns the string and the cursor position just past it (`cursor + 2 + N`).
///
/// # Errors
/// - `ProtocolError::TruncatedBuffer` if fewer than `2 + N` bytes remain after `cursor`
/// - `ProtocolError::InvalidUtf8` if the payload is not valid UTF-8
pub fn decode_string(buf: &[u8], cursor: usize) -> Result<(String, usize)> {
    let len = peek_prefix(buf, cursor)?;
    let available = buf.len().saturating_sub(cursor);
    let needed = STRING_LENGTH_PREFIX_SIZE + len;
    if available < needed {
        return Err(ProtocolError::TruncatedBuffer { needed, available });
    }

    let start = cursor + STRING_LENGTH_PREFIX_SIZE;
    let payload = &buf[start..start + len];
    let s = std::str::from_utf8(payload)
        .map_err(|e| ProtocolError::InvalidUtf8(e.to_string()))?
        .to_owned();

    Ok((s, start + len))
}

/// True if every character of `s` is in [`SANCTIFIED_CHARS`]
pub fn is_sanctified(s: &str) -> bool {
    s.chars().all(|c| SANCTIFIED_CHARS.contains(c))
}
