//! Error types for configuration loading.
//!
//! Invariants:
//! - Dotenv errors never include raw `.env` line contents.
//! - `ConfigFileError` converts into `ConfigError` for unified handling.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("{var} must be between {min} and {max} (got {value})")]
    OutOfRange {
        var: String,
        value: u64,
        min: u64,
        max: u64,
    },

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            ConfigFileError::Parse { path, .. } => ConfigError::ConfigFileParse { path },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = ConfigError::OutOfRange {
            var: "IIOT_UI_TICK_MS".to_string(),
            value: 1,
            min: 16,
            max: 5000,
        };
        assert_eq!(
            err.to_string(),
            "IIOT_UI_TICK_MS must be between 16 and 5000 (got 1)"
        );
    }

    #[test]
    fn test_file_parse_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConfigError = ConfigFileError::Parse {
            path: PathBuf::from("/tmp/config.json"),
            source,
        }
        .into();
        assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    }
}
