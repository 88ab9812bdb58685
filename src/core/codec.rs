//! # Stream Framing
//!
//! [`StringCodec`] frames a byte stream of length-prefixed strings for use with
//! `tokio_util::codec::{FramedRead, FramedWrite}`.
//!
//! The decoder waits until a whole frame is buffered and reserves the missing
//! capacity up front. A declared length above the configured limit is rejected as
//! soon as the prefix arrives, before any payload is buffered.

use crate::config::{WireConfig, MAX_STRING_BYTES, STRING_LENGTH_PREFIX_SIZE};
use crate::core::string::{decode_string, peek_prefix, put_string_limited};
use crate::error::{ProtocolError, Result};
use bytes::{Buf, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

/// Codec for streams of TobComm length-prefixed strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringCodec {
    max_len: usize,
}

impl StringCodec {
    /// Codec accepting the full 65535-byte wire range
    pub fn new() -> Self {
        Self {
            max_len: MAX_STRING_BYTES,
        }
    }

    /// Codec limited to `config.max_string_bytes`
    ///
    /// The limit must lie in `1..=65535`; anything else is a `ConfigError`.
    pub fn from_config(config: &WireConfig) -> Result<Self> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(ProtocolError::ConfigError(errors.join("; ")));
        }
        Ok(Self {
            max_len: config.max_string_bytes,
        })
    }

    /// Largest payload this codec accepts
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for StringCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for StringCodec {
    type Item = String;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        if src.len() < STRING_LENGTH_PREFIX_SIZE {
            return Ok(None);
        }

        let len = peek_prefix(&src[..], 0)?;
        if len > self.max_len {
            warn!(len, max = self.max_len, "Rejected oversized string frame");
            return Err(ProtocolError::OversizedString {
                len,
                max: self.max_len,
            });
        }

        let frame_len = STRING_LENGTH_PREFIX_SIZE + len;
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        let (s, consumed) = decode_string(&src[..], 0)?;
        src.advance(consumed);
        trace!(len, "Decoded string frame");
        Ok(Some(s))
    }
}

impl Encoder<&str> for StringCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: &str, dst: &mut BytesMut) -> Result<()> {
        dst.reserve(STRING_LENGTH_PREFIX_SIZE + item.len().min(self.max_len));
        put_string_limited(dst, item, self.max_len)
    }
}

impl Encoder<String> for StringCodec {
    type Error = ProtocolError;

    fn encode(&mut self, item: String, dst: &mut BytesMut) -> Result<()> {
        Encoder::<&str>::encode(self, item.as_str(), dst)
    }
}
