//! Front-end configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::SortOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when neither `--config` nor `REWIND_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "rewind.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show the move list latest-first when the game starts.
    descending: bool,

    /// File receiving tracing output.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descending: false,
            log_file: PathBuf::from("rewind.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(descending = config.descending, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Forces the descending move-list order on.
    pub fn with_descending(mut self, descending: bool) -> Self {
        self.descending |= descending;
        self
    }

    /// Move-list order for new games.
    pub fn initial_order(&self) -> SortOrder {
        if self.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.initial_order(), SortOrder::Ascending);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml("descending = true").unwrap();
        assert!(*config.descending());
        assert_eq!(config.log_file(), &PathBuf::from("rewind.log"));
        assert_eq!(config.initial_order(), SortOrder::Descending);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = Config::from_toml("descending = \"yes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_flag_only_turns_descending_on() {
        let config = Config::default().with_descending(true);
        assert!(*config.descending());
        let config = config.with_descending(false);
        assert!(*config.descending());
    }
}
