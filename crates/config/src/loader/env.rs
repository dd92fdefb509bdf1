//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparsable numbers return `ConfigError::InvalidValue`; range checks
//!   are left to `ConfigLoader::build`.

use std::str::FromStr;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONNECT_DELAY_MS, ENV_GATEWAY_NAME, ENV_MOBILE_BREAKPOINT, ENV_SCAN_DURATION_MS,
    ENV_UI_TICK_MS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub(super) fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(name) = env_var_or_none(ENV_GATEWAY_NAME) {
        loader.set_gateway_name(Some(name));
    }
    if let Some(ms) = parse_env(ENV_CONNECT_DELAY_MS, "must be a number of milliseconds")? {
        loader.set_connect_delay_ms(Some(ms));
    }
    if let Some(ms) = parse_env(ENV_SCAN_DURATION_MS, "must be a number of milliseconds")? {
        loader.set_scan_duration_ms(Some(ms));
    }
    if let Some(ms) = parse_env(ENV_UI_TICK_MS, "must be a number of milliseconds")? {
        loader.set_ui_tick_ms(Some(ms));
    }
    if let Some(cols) = parse_env(ENV_MOBILE_BREAKPOINT, "must be a column count")? {
        loader.set_mobile_breakpoint(Some(cols));
    }
    Ok(())
}
