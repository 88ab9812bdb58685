//! # Error Types
//!
//! Error handling for the TobComm wire primitives.
//!
//! Every fallible operation in this crate returns [`Result`], whose error side is
//! [`ProtocolError`]. All failures are deterministic functions of the input and are
//! surfaced to the caller; nothing is retried or masked internally.
//!
//! ## Error Categories
//! - **Encoding Errors**: payloads too large for the 2-byte length prefix
//! - **Decoding Errors**: truncated buffers, wrong integer widths, invalid UTF-8
//! - **Configuration Errors**: invalid settings, unreadable config files, logging init
//! - **I/O Errors**: surfaced from streams framed with [`crate::core::codec::StringCodec`]
//!
//! ## Example Usage
//! ```rust
//! use tobcomm::error::{ProtocolError, Result};
//! use tobcomm::core::integer::decode_u32_be;
//!
//! fn read_id(raw: &[u8]) -> Result<u32> {
//!     decode_u32_be(raw)
//! }
//!
//! assert_eq!(read_id(&[0, 0, 1, 0]).ok(), Some(256));
//! assert!(matches!(
//!     read_id(&[1, 2, 3]),
//!     Err(ProtocolError::InvalidLength { expected: 4, actual: 3 })
//! ));
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
pub mod constants {
    /// Configuration errors
    pub const ERR_CONFIG_OPEN: &str = "Config file not found";
    pub const ERR_CONFIG_READ: &str = "Failed to read config file";
    pub const ERR_CONFIG_PARSE: &str = "Malformed TobComm config";
    pub const ERR_CONFIG_SERIALIZE: &str = "Failed to serialize config";
    pub const ERR_CONFIG_WRITE: &str = "Failed to write config file";
    pub const ERR_CONFIG_INVALID: &str = "Invalid TobComm configuration";

    /// Logging errors
    pub const ERR_LOGGING_INIT: &str = "Failed to initialize logging";
}

// ProtocolError is the primary error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("String payload of {len} bytes exceeds the {max}-byte limit")]
    Encoding { len: usize, max: usize },

    #[error("Truncated buffer: needed {needed} bytes, {available} available")]
    TruncatedBuffer { needed: usize, available: usize },

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid UTF-8 payload: {0}")]
    InvalidUtf8(String),

    #[error("Declared string length {len} exceeds the {max}-byte limit")]
    OversizedString { len: usize, max: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
