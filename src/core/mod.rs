//! # Core Wire Components
//!
//! Byte-exact encoding and decoding of the TobComm primitive types.
//!
//! ## Components
//! - **String**: length-prefixed UTF-8 strings
//! - **Integer**: fixed-width big-endian `u32`
//! - **Buffer**: reader/writer pair carrying a cursor across fields
//! - **Codec**: Tokio codec for framing strings over byte streams
//!
//! ## Wire Format
//! ```text
//! EncodedString ::= [Length(2, BE) = N] [Payload(N)]
//! FixedUint32   ::= [Value(4, BE)]
//! ```
//!
//! ## Limits
//! - String payloads are at most 65535 bytes; longer input is rejected, never truncated
//! - Declared lengths are checked against the bytes actually present before reading

pub mod buffer;
pub mod codec;
pub mod integer;
pub mod string;
