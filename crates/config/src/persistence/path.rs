//! Path helpers for the configuration file location.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::ENV_CONFIG_PATH;
use crate::loader::env_var_or_none;

/// Returns the default path to the configuration file:
/// - Linux: `~/.config/iiot-gateway/config.json`
/// - macOS: `~/Library/Application Support/iiot-gateway/config.json`
/// - Windows: `%AppData%\iiot-gateway\config\config.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "iiot-gateway")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// `IIOT_CONFIG_PATH` if set, otherwise the platform default.
pub(crate) fn resolve_config_path() -> Result<PathBuf, anyhow::Error> {
    match env_var_or_none(ENV_CONFIG_PATH) {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_config_path(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", "iiot-gateway")
            .unwrap()
            .config_dir()
            .join("config.json");
        assert_eq!(default_config_path().unwrap(), expected);
    }

    #[test]
    #[serial]
    fn test_env_override_wins() {
        temp_env::with_var(ENV_CONFIG_PATH, Some("/tmp/iiot/custom.json"), || {
            assert_eq!(
                resolve_config_path().unwrap(),
                PathBuf::from("/tmp/iiot/custom.json")
            );
        });
    }

    #[test]
    #[serial]
    fn test_blank_env_override_is_ignored() {
        temp_env::with_var(ENV_CONFIG_PATH, Some("   "), || {
            assert_eq!(resolve_config_path().unwrap(), default_config_path().unwrap());
        });
    }
}
