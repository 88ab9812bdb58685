//! # Fixed-Width Integers
//!
//! Unsigned 32-bit integers travel as exactly four big-endian bytes.

use crate::config::UINT32_SIZE;
use crate::error::{ProtocolError, Result};
use tracing::warn;

/// Decode exactly four big-endian bytes into a `u32`
///
/// # Errors
/// Returns `ProtocolError::InvalidLength` for any input that is not 4 bytes long.
pub fn decode_u32_be(bytes: &[u8]) -> Result<u32> {
    let raw: [u8; UINT32_SIZE] = bytes.try_into().map_err(|_| {
        warn!(len = bytes.len(), "Rejected fixed-width integer of wrong length");
        ProtocolError::InvalidLength {
            expected: UINT32_SIZE,
            actual: bytes.len(),
        }
    })?;
    Ok(u32::from_be_bytes(raw))
}

/// Encode a `u32` as four big-endian bytes
#[inline]
pub fn encode_u32_be(value: u32) -> [u8; UINT32_SIZE] {
    value.to_be_bytes()
}

/// Read a big-endian `u32` at `cursor`, returning it and the advanced cursor
///
/// # Errors
/// Returns `ProtocolError::TruncatedBuffer` if fewer than 4 bytes remain.
pub fn read_u32_be(buf: &[u8], cursor: usize) -> Result<(u32, usize)> {
    let available = buf.len().saturating_sub(cursor);
    if available < UINT32_SIZE {
        return Err(ProtocolError::TruncatedBuffer {
            needed: UINT32_SIZE,
            available,
        });
    }
    let end = cursor + UINT32_SIZE;
    Ok((decode_u32_be(&buf[cursor..end])?, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode_u32_be(&[0x00, 0x00, 0x01, 0x00]).ok(), Some(256));
        assert_eq!(decode_u32_be(&[0x12, 0x34, 0x56, 0x78]).ok(), Some(0x1234_5678));
        assert_eq!(decode_u32_be(&[0xFF; 4]).ok(), Some(u32::MAX));
    }

    #[test]
    fn test_high_bit_stays_unsigned() {
        assert_eq!(decode_u32_be(&[0x80, 0, 0, 0]).ok(), Some(2_147_483_648));
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        for len in [0usize, 1, 3, 5, 8] {
            let bytes = vec![1u8; len];
            match decode_u32_be(&bytes) {
                Err(ProtocolError::InvalidLength { expected, actual }) => {
                    assert_eq!(expected, 4);
                    assert_eq!(actual, len);
                }
                other => panic!("unexpected result for {len} bytes: {other:?}"),
            }
        }
    }

    #[test]
    fn test_encode_is_dual() {
        for v in [0u32, 1, 256, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(decode_u32_be(&encode_u32_be(v)).ok(), Some(v));
        }
        assert_eq!(encode_u32_be(256), [0, 0, 1, 0]);
    }

    #[test]
    fn test_read_at_cursor() {
        let buf = [9, 0, 0, 0, 7, 1];
        let (v, cursor) = read_u32_be(&buf, 1).expect("read");
        assert_eq!(v, 7);
        assert_eq!(cursor, 5);

        assert!(matches!(
            read_u32_be(&buf, 3),
            Err(ProtocolError::TruncatedBuffer { needed: 4, available: 3 })
        ));
    }
}
