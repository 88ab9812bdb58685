//! # Utility Modules
//!
//! Integrity primitives applied to wire bytes, plus logging setup.
//!
//! ## Components
//! - **Checksum**: table-driven CRC-32 (zlib/PNG compatible)
//! - **Hash**: SHA-256 digests and hex rendering
//! - **Logging**: `tracing` subscriber configuration

pub mod checksum;
pub mod hash;
pub mod logging;

pub use checksum::{crc32, crc32_str, ChecksumInput, Crc32};
pub use hash::{bytes_to_hex, bytes_to_hex_padded, sha256, sha256_hex, HexPadding};
