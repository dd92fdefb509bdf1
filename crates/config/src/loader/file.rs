//! Applying the config file's `settings` section to the loader.

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::persistence::{read_config_file, resolve_config_path};

/// Fill loader fields from the config file.
///
/// A missing file is not an error. Values already set on the loader are
/// overwritten, so callers apply the file before the environment.
pub(super) fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let path = match loader.config_path() {
        Some(path) => path.to_path_buf(),
        None => resolve_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, skipping file settings");
        return Ok(());
    }

    let settings = read_config_file(&path)?.settings;
    if settings.gateway_name.is_some() {
        loader.set_gateway_name(settings.gateway_name);
    }
    if settings.connect_delay_ms.is_some() {
        loader.set_connect_delay_ms(settings.connect_delay_ms);
    }
    if settings.scan_duration_ms.is_some() {
        loader.set_scan_duration_ms(settings.scan_duration_ms);
    }
    if settings.ui_tick_ms.is_some() {
        loader.set_ui_tick_ms(settings.ui_tick_ms);
    }
    if settings.mobile_breakpoint.is_some() {
        loader.set_mobile_breakpoint(settings.mobile_breakpoint);
    }
    Ok(())
}
