//! Logging setup for the CLI
//!
//! Structured logging goes to stderr through `tracing`, keeping stdout
//! clean for the diagnostic renderer and the docs confirmation line.

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Default configuration with environment overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.merge_with_env();
        config
    }

    /// Apply environment overrides. `RUST_LOG` takes precedence.
    pub fn merge_with_env(&mut self) {
        if let Ok(rust_log) = std::env::var("RUST_LOG") {
            self.level = rust_log;
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_new(&config.level)
        .map_err(|err| Error::config(format!("invalid log filter '{}': {}", config.level, err)))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::other(format!("Failed to initialize logging: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(LoggingConfig::default().level, "warn");
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LoggingConfig {
            level: "not=a=filter".to_string(),
        };
        assert!(init_logging(config).is_err());
    }
}
