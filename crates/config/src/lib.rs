//! Configuration management for the IIoT gateway console.
//!
//! This crate provides the runtime settings (timers, breakpoints, gateway
//! name) loaded from defaults, the config file, `.env` and environment
//! variables, plus the UI state persisted between runs.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigManager, PersistedState};
pub use types::{ColorTheme, Config, Theme};
