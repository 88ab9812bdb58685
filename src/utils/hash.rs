//! # Hashing and Hex Rendering
//!
//! SHA-256 digests of strings and byte slices, and lowercase hex rendering with an
//! explicit width.
//!
//! Hex output never depends on buffer-allocation side effects: the caller chooses
//! how many bytes are rendered and whether shorter input is zero-padded.
//!
//! ## Usage
//! ```rust
//! use tobcomm::utils::hash::{bytes_to_hex, bytes_to_hex_padded, sha256_hex};
//!
//! assert_eq!(
//!     sha256_hex(""),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef], 2), "dead");
//! assert_eq!(bytes_to_hex_padded(&[0xab], 3), "ab0000");
//! ```

use crate::config::{HashConfig, DEFAULT_HEX_WIDTH};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Size of a SHA-256 digest in bytes
pub const DIGEST_SIZE: usize = 32;

/// A SHA-256 digest
pub type Sha256Digest = [u8; DIGEST_SIZE];

/// How hex output is sized when the input is shorter than the width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HexPadding {
    /// Render only the bytes present
    #[default]
    None,
    /// Right-pad with zero bytes up to the full width
    ZeroPad,
}

impl HexPadding {
    /// Parse the identifier used in config files and environment variables
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => Some(HexPadding::None),
            "zero-pad" | "zero_pad" | "zeropad" => Some(HexPadding::ZeroPad),
            _ => None,
        }
    }
}

/// SHA-256 of the UTF-8 bytes of a string
pub fn sha256(s: &str) -> Sha256Digest {
    sha256_bytes(s.as_bytes())
}

/// SHA-256 of a byte slice
pub fn sha256_bytes(data: &[u8]) -> Sha256Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Lowercase hex SHA-256 of a string
pub fn sha256_hex(s: &str) -> String {
    hex::encode(sha256(s))
}

/// Render at most `max_len` leading bytes as lowercase hex
///
/// Output length is `2 * min(data.len(), max_len)`; nothing is padded.
pub fn bytes_to_hex(data: &[u8], max_len: usize) -> String {
    hex::encode(&data[..data.len().min(max_len)])
}

/// Render exactly `width` bytes as lowercase hex
///
/// Longer input is truncated; shorter input is followed by `00` pairs, so the output
/// is always `2 * width` characters.
pub fn bytes_to_hex_padded(data: &[u8], width: usize) -> String {
    let mut out = bytes_to_hex(data, width);
    let missing = width.saturating_sub(data.len());
    out.extend(std::iter::repeat("00").take(missing));
    out
}

/// [`bytes_to_hex`] with the default 32-byte width
pub fn to_hex(data: &[u8]) -> String {
    bytes_to_hex(data, DEFAULT_HEX_WIDTH)
}

/// Render hex according to configured width and padding
pub fn render_hex(data: &[u8], config: &HashConfig) -> String {
    match config.hex_padding {
        HexPadding::None => bytes_to_hex(data, config.hex_width),
        HexPadding::ZeroPad => bytes_to_hex_padded(data, config.hex_width),
    }
}
