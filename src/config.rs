//! # Configuration Management
//!
//! Protocol constants and the runtime configuration of the codec.
//!
//! The wire layout itself is fixed (see the constants below). What can be configured
//! is policy around it: a tighter string limit for stream framing, which byte
//! representation text checksums use, how hex digests are rendered, and logging.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()` / `from_toml()`
//! - Environment variables via `from_env()`
//! - Direct instantiation with defaults

use crate::error::{constants, ProtocolError, Result};
use crate::utils::checksum::{crc32_str, ChecksumInput};
use crate::utils::hash::HexPadding;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, Level};

/// Size of the big-endian length prefix in front of every encoded string
pub const STRING_LENGTH_PREFIX_SIZE: usize = 2;

/// Largest payload a 2-byte length prefix can describe
pub const MAX_STRING_BYTES: usize = u16::MAX as usize;

/// Width of a fixed-size wire integer
pub const UINT32_SIZE: usize = 4;

/// Default number of bytes rendered by hex helpers (64 hex chars)
pub const DEFAULT_HEX_WIDTH: usize = 32;

/// Upper bound accepted for a configured hex width
pub const MAX_HEX_WIDTH: usize = 4096;

/// Characters the protocol documents as always safe to transmit
pub const SANCTIFIED_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct TobCommConfig {
    /// Wire-level policy
    #[serde(default)]
    pub wire: WireConfig,

    /// Digest rendering
    #[serde(default)]
    pub hashing: HashConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TobCommConfig {
    /// Load configuration from a TOML file
    ///
    /// Errors name the offending path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            let context = if e.kind() == std::io::ErrorKind::NotFound {
                constants::ERR_CONFIG_OPEN
            } else {
                constants::ERR_CONFIG_READ
            };
            ProtocolError::ConfigError(format!("{context} '{}': {e}", path.display()))
        })?;

        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "Loaded TobComm config");
        Ok(config)
    }

    /// Load configuration from a TOML string; omitted sections and keys keep defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_PARSE))
        })
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults. Set but unparseable values are errors.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TOBCOMM_MAX_STRING_BYTES") {
            config.wire.max_string_bytes = val.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!("Invalid TOBCOMM_MAX_STRING_BYTES '{val}': {e}"))
            })?;
        }

        if let Ok(val) = std::env::var("TOBCOMM_CHECKSUM_INPUT") {
            config.wire.checksum_input = ChecksumInput::from_name(&val).ok_or_else(|| {
                ProtocolError::ConfigError(format!("Invalid TOBCOMM_CHECKSUM_INPUT '{val}'"))
            })?;
        }

        if let Ok(val) = std::env::var("TOBCOMM_HEX_WIDTH") {
            config.hashing.hex_width = val.parse::<usize>().map_err(|e| {
                ProtocolError::ConfigError(format!("Invalid TOBCOMM_HEX_WIDTH '{val}': {e}"))
            })?;
        }

        if let Ok(val) = std::env::var("TOBCOMM_HEX_PADDING") {
            config.hashing.hex_padding = HexPadding::from_name(&val).ok_or_else(|| {
                ProtocolError::ConfigError(format!("Invalid TOBCOMM_HEX_PADDING '{val}'"))
            })?;
        }

        if let Ok(val) = std::env::var("TOBCOMM_LOG_LEVEL") {
            config.logging.log_level = val.parse::<Level>().map_err(|_| {
                ProtocolError::ConfigError(format!("Invalid TOBCOMM_LOG_LEVEL '{val}'"))
            })?;
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Generate example configuration file content
    pub fn example_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|_| String::from("# Failed to generate example config"))
    }

    /// Write the configuration as TOML, refusing to persist an invalid one
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate_strict()?;

        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(|e| {
            ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_CONFIG_SERIALIZE))
        })?;

        std::fs::write(path, content).map_err(|e| {
            ProtocolError::ConfigError(format!(
                "{} '{}': {e}",
                constants::ERR_CONFIG_WRITE,
                path.display()
            ))
        })
    }

    /// Validate the configuration
    ///
    /// Returns a list of validation errors. Empty list means configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        errors.extend(self.wire.validate());
        errors.extend(self.hashing.validate());
        errors.extend(self.logging.validate());
        errors
    }

    /// Fail with every validation problem listed in one `ConfigError`
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            return Ok(());
        }
        Err(ProtocolError::ConfigError(format!(
            "{} ({} problem{}):\n  - {}",
            constants::ERR_CONFIG_INVALID,
            errors.len(),
            if errors.len() == 1 { "" } else { "s" },
            errors.join("\n  - ")
        )))
    }
}

/// Wire-level policy
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WireConfig {
    /// Largest string payload accepted by stream framing (at most 65535)
    pub max_string_bytes: usize,

    /// Byte representation used when checksumming text
    pub checksum_input: ChecksumInput,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self {
            max_string_bytes: MAX_STRING_BYTES,
            checksum_input: ChecksumInput::Utf8,
        }
    }
}

impl WireConfig {
    /// CRC-32 of `s` using the configured byte representation
    pub fn checksum_str(&self, s: &str) -> u32 {
        crc32_str(s, self.checksum_input)
    }

    /// Validate wire configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.max_string_bytes == 0 {
            errors.push("Max string bytes must be greater than 0".to_string());
        } else if self.max_string_bytes > MAX_STRING_BYTES {
            errors.push(format!(
                "Max string bytes too large: {} (a 2-byte prefix allows at most {MAX_STRING_BYTES})",
                self.max_string_bytes
            ));
        }

        errors
    }
}

/// Digest rendering configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct HashConfig {
    /// Number of bytes rendered as hex
    pub hex_width: usize,

    /// Whether shorter input is zero-padded to `hex_width`
    pub hex_padding: HexPadding,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            hex_width: DEFAULT_HEX_WIDTH,
            hex_padding: HexPadding::None,
        }
    }
}

impl HashConfig {
    /// Validate hashing configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.hex_width == 0 {
            errors.push("Hex width must be greater than 0".to_string());
        } else if self.hex_width > MAX_HEX_WIDTH {
            errors.push(format!(
                "Hex width too large: {} (maximum: {MAX_HEX_WIDTH})",
                self.hex_width
            ));
        }

        errors
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Application name for logs
    pub app_name: String,

    /// Log level
    #[serde(with = "log_level_serde")]
    pub log_level: Level,

    /// Whether to log to console
    pub log_to_console: bool,

    /// Whether to use JSON formatting for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            app_name: String::from("tobcomm"),
            log_level: Level::INFO,
            log_to_console: true,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Validate logging configuration
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.app_name.is_empty() {
            errors.push("Application name cannot be empty".to_string());
        } else if self.app_name.len() > 64 {
            errors.push(format!(
                "Application name too long: {} characters (maximum: 64)",
                self.app_name.len()
            ));
        }

        errors
    }
}

/// `log_level` is written as a lowercase name and read back case-insensitively
mod log_level_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::Level;

    pub fn serialize<S>(level: &Level, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&level.as_str().to_ascii_lowercase())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Level, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.trim().parse::<Level>().map_err(|_| {
            serde::de::Error::custom(format!(
                "invalid log_level '{raw}' (expected trace, debug, info, warn or error)"
            ))
        })
    }
}
