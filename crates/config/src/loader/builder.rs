//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Collect optional settings from each layer.
//! - Validate ranges and produce the final `Config`.
//!
//! Does NOT handle:
//! - Parsing environment variables (see env.rs).
//! - Reading the config file (see file.rs).

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    ENV_CONNECT_DELAY_MS, ENV_GATEWAY_NAME, ENV_MOBILE_BREAKPOINT, ENV_SCAN_DURATION_MS,
    ENV_UI_TICK_MS, MAX_CONNECT_DELAY_MS, MAX_MOBILE_BREAKPOINT, MAX_SCAN_DURATION_MS,
    MAX_UI_TICK_MS, MIN_MOBILE_BREAKPOINT, MIN_UI_TICK_MS,
};
use crate::types::Config;

/// Configuration loader that builds config from the file and environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    gateway_name: Option<String>,
    connect_delay_ms: Option<u64>,
    scan_duration_ms: Option<u64>,
    ui_tick_ms: Option<u64>,
    mobile_breakpoint: Option<u16>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from `.env` if present.
    ///
    /// Skipped when `DOTENV_DISABLED` is "true" or "1". A missing `.env`
    /// file is not an error.
    ///
    /// # Errors
    /// `DotenvParse` on invalid syntax, `DotenvIo` on read failures.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub(super) fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Read the `settings` section of the config file.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_gateway_name(mut self, name: String) -> Self {
        self.gateway_name = Some(name);
        self
    }

    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay_ms = Some(delay.as_millis() as u64);
        self
    }

    pub fn with_scan_duration(mut self, duration: Duration) -> Self {
        self.scan_duration_ms = Some(duration.as_millis() as u64);
        self
    }

    pub fn with_ui_tick(mut self, tick: Duration) -> Self {
        self.ui_tick_ms = Some(tick.as_millis() as u64);
        self
    }

    pub fn with_mobile_breakpoint(mut self, columns: u16) -> Self {
        self.mobile_breakpoint = Some(columns);
        self
    }

    pub(super) fn set_gateway_name(&mut self, name: Option<String>) {
        self.gateway_name = name;
    }

    pub(super) fn set_connect_delay_ms(&mut self, ms: Option<u64>) {
        self.connect_delay_ms = ms;
    }

    pub(super) fn set_scan_duration_ms(&mut self, ms: Option<u64>) {
        self.scan_duration_ms = ms;
    }

    pub(super) fn set_ui_tick_ms(&mut self, ms: Option<u64>) {
        self.ui_tick_ms = ms;
    }

    pub(super) fn set_mobile_breakpoint(&mut self, columns: Option<u16>) {
        self.mobile_breakpoint = columns;
    }

    /// Validate the collected settings and build the final `Config`.
    ///
    /// # Errors
    /// `InvalidValue` for a blank gateway name, `OutOfRange` for timers or
    /// breakpoints outside their bounds.
    pub fn build(self) -> Result<Config, ConfigError> {
        let defaults = Config::default();

        let gateway_name = match self.gateway_name {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: ENV_GATEWAY_NAME.to_string(),
                    message: "must not be blank".to_string(),
                });
            }
            Some(name) => name.trim().to_string(),
            None => defaults.gateway_name,
        };

        let connect_delay = match self.connect_delay_ms {
            Some(ms) => Duration::from_millis(check_range(
                ENV_CONNECT_DELAY_MS,
                ms,
                0,
                MAX_CONNECT_DELAY_MS,
            )?),
            None => defaults.connect_delay,
        };

        let scan_duration = match self.scan_duration_ms {
            Some(ms) => Duration::from_millis(check_range(
                ENV_SCAN_DURATION_MS,
                ms,
                0,
                MAX_SCAN_DURATION_MS,
            )?),
            None => defaults.scan_duration,
        };

        let ui_tick = match self.ui_tick_ms {
            Some(ms) => Duration::from_millis(check_range(
                ENV_UI_TICK_MS,
                ms,
                MIN_UI_TICK_MS,
                MAX_UI_TICK_MS,
            )?),
            None => defaults.ui_tick,
        };

        let mobile_breakpoint = match self.mobile_breakpoint {
            Some(cols) => check_range(
                ENV_MOBILE_BREAKPOINT,
                u64::from(cols),
                u64::from(MIN_MOBILE_BREAKPOINT),
                u64::from(MAX_MOBILE_BREAKPOINT),
            )
            .map(|_| cols)?,
            None => defaults.mobile_breakpoint,
        };

        Ok(Config {
            gateway_name,
            connect_delay,
            scan_duration,
            ui_tick,
            mobile_breakpoint,
        })
    }
}

fn check_range(var: &str, value: u64, min: u64, max: u64) -> Result<u64, ConfigError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            var: var.to_string(),
            value,
            min,
            max,
        })
    }
}
