//! # Logging Setup
//!
//! Installs a global `tracing` subscriber from [`LoggingConfig`].
//!
//! The library itself only emits events; binaries and tests that want to see them
//! call [`init_logging`] once at startup. `RUST_LOG` takes precedence over the
//! configured level when set.

use crate::config::LoggingConfig;
use crate::error::{constants, ProtocolError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber described by `config`
///
/// Returns `ConfigError` if a global subscriber is already installed.
/// With `log_to_console` disabled nothing is installed and `Ok(())` is returned.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if !config.log_to_console {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()));

    let subscriber = tracing_subscriber::registry().with(filter);

    let result = if config.json_format {
        subscriber.with(fmt::layer().json()).try_init()
    } else {
        subscriber.with(fmt::layer()).try_init()
    };

    result.map_err(|e| ProtocolError::ConfigError(format!("{}: {e}", constants::ERR_LOGGING_INIT)))?;

    tracing::info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_console_is_noop() {
        let config = LoggingConfig {
            log_to_console: false,
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config).is_ok());
    }
}
