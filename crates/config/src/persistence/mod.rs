//! Configuration persistence for user preferences.
//!
//! Responsibilities:
//! - Resolve the configuration file path.
//! - Read and write persisted UI state (`PersistedState`).
//! - Back up corrupt config files before overwriting them.
//!
//! Does NOT handle:
//! - Loading environment variables or merging settings (see `loader`).
//!
//! Invariants:
//! - Writes are atomic (temp file + rename).
//! - Saving state preserves the file's `settings` section.
//! - A corrupt file never blocks startup; it is renamed aside and defaults are used.

use std::path::{Path, PathBuf};

mod manager;
mod path;
mod state;

pub use manager::ConfigManager;
pub use state::{ConfigFileError, FileSettings, PersistedState};

pub(crate) use path::resolve_config_path;
pub(crate) use state::read_config_file;

/// Rename a corrupt config file to `<name>.corrupt.<unix-seconds>`.
///
/// Returns the backup path.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let backup_path = path.with_extension(format!("corrupt.{timestamp}"));
    std::fs::rename(path, &backup_path)?;
    Ok(backup_path)
}
