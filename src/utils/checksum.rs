//! # CRC-32 Checksum
//!
//! Standard reflected CRC-32 (polynomial `0xEDB88320`, init and final XOR
//! `0xFFFFFFFF`), bit-compatible with zlib and PNG.
//!
//! The 256-entry lookup table is built on first use and shared read-only afterwards,
//! so any number of threads can checksum concurrently without locking.
//!
//! ## Usage
//! ```rust
//! use tobcomm::utils::checksum::{crc32, Crc32};
//!
//! assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
//!
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234").update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Reflected CRC-32 polynomial
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

const CRC32_INIT: u32 = 0xFFFF_FFFF;

/// Lookup table, built once per process
static CRC_TABLE: Lazy<[u32; 256]> = Lazy::new(build_table);

fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    for (n, slot) in table.iter_mut().enumerate() {
        let mut c = n as u32;
        for _ in 0..8 {
            c = if c & 1 == 1 {
                CRC32_POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
        }
        *slot = c;
    }
    table
}

#[inline]
fn fold(state: u32, byte: u8) -> u32 {
    (state >> 8) ^ CRC_TABLE[((state ^ u32::from(byte)) & 0xFF) as usize]
}

/// Which byte representation of a string is fed into the checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumInput {
    /// UTF-8 bytes of the string
    #[default]
    Utf8,
    /// Low byte of each UTF-16 code unit, as the legacy client computed it
    Utf16Legacy,
}

impl ChecksumInput {
    /// Parse the identifier used in config files and environment variables
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Some(ChecksumInput::Utf8),
            "utf16-legacy" | "utf16_legacy" | "legacy" => Some(ChecksumInput::Utf16Legacy),
            _ => None,
        }
    }

    /// Get human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ChecksumInput::Utf8 => "utf8",
            ChecksumInput::Utf16Legacy => "utf16-legacy",
        }
    }
}

/// Compute the CRC-32 of a byte sequence
///
/// The empty input yields `0`.
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = Crc32::new();
    hasher.update(data);
    hasher.finalize()
}

/// Compute the CRC-32 of a string using the given byte representation
pub fn crc32_str(s: &str, input: ChecksumInput) -> u32 {
    match input {
        ChecksumInput::Utf8 => crc32(s.as_bytes()),
        ChecksumInput::Utf16Legacy => {
            // Only the low 8 bits of each code unit reach the table index
            let state = s
                .encode_utf16()
                .fold(CRC32_INIT, |state, unit| fold(state, unit as u8));
            state ^ CRC32_INIT
        }
    }
}

/// Incremental CRC-32 hasher
///
/// Feeding a sequence in any number of chunks gives the same result as a single
/// [`crc32`] call over the concatenation.
#[derive(Debug, Clone, Copy)]
pub struct Crc32 {
    state: u32,
}

impl Crc32 {
    /// Create a hasher in its initial state
    pub fn new() -> Self {
        Self { state: CRC32_INIT }
    }

    /// Feed more bytes into the checksum
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.state = data.iter().fold(self.state, |state, &b| fold(state, b));
        self
    }

    /// Current checksum value; the hasher can keep accepting input afterwards
    pub fn finalize(&self) -> u32 {
        self.state ^ CRC32_INIT
    }

    /// Return to the initial state
    pub fn reset(&mut self) {
        self.state = CRC32_INIT;
    }
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}
