//! # TobComm
//!
//! Byte-exact wire primitives for the TobComm protocol.
//!
//! This crate provides the building blocks higher protocol layers compose into
//! messages: length-prefixed strings, fixed-width big-endian integers, and the
//! CRC-32 and SHA-256 primitives applied to the resulting bytes.
//!
//! ## Modules
//! - [`core`]: string and integer codecs, cursor buffers, stream framing
//! - [`utils`]: CRC-32, SHA-256, hex rendering, logging setup
//! - [`config`]: protocol constants and runtime configuration
//! - [`error`]: [`ProtocolError`] and the crate [`Result`] alias
//!
//! ## Example
//! ```rust
//! use tobcomm::{crc32, decode_string, encode_string, encoded_size};
//!
//! let bytes = encode_string("TobComm").unwrap();
//! assert_eq!(bytes.len(), encoded_size("TobComm"));
//!
//! let (s, cursor) = decode_string(&bytes, 0).unwrap();
//! assert_eq!(s, "TobComm");
//! assert_eq!(cursor, bytes.len());
//!
//! let _checksum = crc32(&bytes);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::TobCommConfig;
pub use crate::core::buffer::{WireReader, WireWriter};
pub use crate::core::codec::StringCodec;
pub use crate::core::integer::{decode_u32_be, encode_u32_be, read_u32_be};
pub use crate::core::string::{decode_string, encode_string, encoded_size, is_sanctified, put_string};
pub use crate::error::{ProtocolError, Result};
pub use crate::utils::checksum::{crc32, crc32_str, ChecksumInput, Crc32};
pub use crate::utils::hash::{
    bytes_to_hex, bytes_to_hex_padded, render_hex, sha256, sha256_bytes, sha256_hex, HexPadding,
};
