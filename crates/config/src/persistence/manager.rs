//! Reading and writing `config.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::create_corrupt_backup;
use super::path::resolve_config_path;
use super::state::{ConfigFile, PersistedState, read_config_file};

/// Manages loading and saving user configuration to disk.
pub struct ConfigManager {
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl ConfigManager {
    /// Creates a manager for `IIOT_CONFIG_PATH` or the platform default path.
    ///
    /// # Errors
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self> {
        Self::new_with_path(resolve_config_path()?)
    }

    /// Creates a manager for a specific config file path.
    ///
    /// A missing file yields defaults. An unreadable or unparsable file is
    /// backed up with a `.corrupt.<timestamp>` extension and defaults are used.
    pub fn new_with_path(config_path: PathBuf) -> Result<Self> {
        let config_file = if config_path.exists() {
            match read_config_file(&config_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::warn!(error = %e, "Config file unreadable, using defaults");
                    Self::backup_corrupt(&config_path);
                    ConfigFile::default()
                }
            }
        } else {
            ConfigFile::default()
        };

        Ok(Self {
            config_path,
            config_file,
        })
    }

    fn backup_corrupt(path: &Path) {
        match create_corrupt_backup(path) {
            Ok(backup) => {
                tracing::warn!(backup = %backup.display(), "Backed up corrupt config file");
            }
            Err(e) => {
                tracing::error!(error = %e, path = %path.display(), "Failed to back up corrupt config file");
            }
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Persisted UI state, or defaults if none was saved.
    pub fn load(&self) -> PersistedState {
        self.config_file.state.clone().unwrap_or_default()
    }

    /// Save UI state, preserving the file's settings section.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save(&mut self, state: &PersistedState) -> Result<()> {
        self.config_file.state = Some(state.clone());
        self.atomic_save()
    }

    fn atomic_save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(&self.config_file)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;
        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to rename temporary config file")?;

        tracing::debug!(path = %self.config_path.display(), "Config saved atomically");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorTheme;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new_with_path(dir.path().join("config.json")).unwrap();
        assert_eq!(manager.load(), PersistedState::default());
    }

    #[test]
    fn test_save_then_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        let state = PersistedState {
            selected_theme: ColorTheme::Dark,
            sidebar_collapsed: true,
            last_route: Some("/alarms".to_string()),
        };
        manager.save(&state).unwrap();

        let reloaded = ConfigManager::new_with_path(path).unwrap();
        assert_eq!(reloaded.load(), state);
    }

    #[test]
    fn test_save_preserves_settings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"settings": {"gateway_name": "Plant-7"}}"#).unwrap();

        let mut manager = ConfigManager::new_with_path(path.clone()).unwrap();
        manager.save(&PersistedState::default()).unwrap();

        let reread = read_config_file(&path).unwrap();
        assert_eq!(reread.settings.gateway_name.as_deref(), Some("Plant-7"));
        assert!(reread.state.is_some());
    }

    #[test]
    fn test_corrupt_file_is_backed_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ broken").unwrap();

        let manager = ConfigManager::new_with_path(path.clone()).unwrap();
        assert_eq!(manager.load(), PersistedState::default());
        assert!(!path.exists());

        let backups: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".corrupt."))
            .collect();
        assert_eq!(backups.len(), 1);
    }
}
