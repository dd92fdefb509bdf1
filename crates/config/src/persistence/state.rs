//! State types and serialization for configuration persistence.
//!
//! Responsibilities:
//! - Define `PersistedState` (UI preferences) and `FileSettings` (runtime
//!   overrides read by the loader).
//! - Define the on-disk `ConfigFile` layout and its read errors.
//!
//! Invariants:
//! - Every field defaults when missing, so older files keep loading.
//! - Group expand/collapse state is deliberately absent: it always starts
//!   from the navigation tree's default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ColorTheme;

/// UI preferences that persist across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Selected color theme.
    pub selected_theme: ColorTheme,
    /// Whether the desktop sidebar was collapsed.
    pub sidebar_collapsed: bool,
    /// Path of the page open at exit.
    pub last_route: Option<String>,
}

/// Optional runtime overrides stored in the config file.
///
/// Environment variables take precedence over these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_tick_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_breakpoint: Option<u16>,
}

/// On-disk layout of `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ConfigFile {
    #[serde(default)]
    pub settings: FileSettings,
    #[serde(default)]
    pub state: Option<PersistedState>,
}

/// Errors that can occur when reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_fields_default() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedState::default());
        assert_eq!(state.selected_theme, ColorTheme::Neon);
    }

    #[test]
    fn test_read_config_file_with_settings_only() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"settings": {{"scan_duration_ms": 500}}}}"#).unwrap();
        let parsed = read_config_file(file.path()).unwrap();
        assert_eq!(parsed.settings.scan_duration_ms, Some(500));
        assert!(parsed.state.is_none());
    }

    #[test]
    fn test_read_config_file_parse_error_names_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = read_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_settings_skip_unset_fields() {
        let json = serde_json::to_value(FileSettings {
            ui_tick_ms: Some(100),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"ui_tick_ms": 100}));
    }
}
