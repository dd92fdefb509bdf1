//! Configuration loading and persistence for the console.
//!
//! Responsibilities:
//! - Load `Config` with file, environment and CLI overrides.
//! - Open the `ConfigManager` for the chosen config file.
//! - Save persisted state on exit.
//!
//! Does NOT handle:
//! - Terminal state management (see `runtime::terminal`).
//! - Timers (see `runtime::side_effects`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` runs before anything else is read.
//! - `ConfigManager` is shared as `Arc<Mutex<_>>` between the loop and
//!   auto-save tasks.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use gateway_client::Route;
use gateway_config::{Config, ConfigLoader, ConfigManager};
use tokio::sync::Mutex;

use crate::app::App;
use crate::cli::Cli;

/// Build the runtime configuration from every source.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new().load_dotenv()?;
    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader.from_file()?.from_env()?;

    if let Some(name) = &cli.gateway {
        loader = loader.with_gateway_name(name.clone());
    }
    if let Some(ms) = cli.connect_delay_ms {
        loader = loader.with_connect_delay(Duration::from_millis(ms));
    }
    if let Some(ms) = cli.scan_duration_ms {
        loader = loader.with_scan_duration(Duration::from_millis(ms));
    }

    loader.build().context("Invalid configuration")
}

/// Open the config manager for `--config-path` or the default location.
pub fn open_config_manager(cli: &Cli) -> Result<ConfigManager> {
    match &cli.config_path {
        Some(path) => ConfigManager::new_with_path(path.clone()),
        None => ConfigManager::new(),
    }
}

/// Startup route from `--route`, if given.
pub fn startup_route(cli: &Cli) -> Option<Route> {
    cli.route.as_deref().map(Route::from_path)
}

/// Persist UI state before exiting. Failures are logged, not fatal.
pub async fn save_and_quit(app: &App, config_manager: &Arc<Mutex<ConfigManager>>) {
    let state = app.get_persisted_state();
    let mut manager = config_manager.lock().await;
    if let Err(e) = manager.save(&state) {
        tracing::error!(error = %e, "Failed to save config");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["gateway-tui"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let path_arg = path.to_string_lossy().to_string();
        temp_env::with_vars(
            [
                ("DOTENV_DISABLED", Some("1")),
                ("IIOT_GATEWAY_NAME", Some("Gateway-002")),
                ("IIOT_SCAN_DURATION_MS", None),
            ],
            || {
                let config = load_config(&cli(&[
                    "--config-path",
                    &path_arg,
                    "--gateway",
                    "Gateway-003",
                    "--scan-duration-ms",
                    "250",
                ]))
                .unwrap();
                assert_eq!(config.gateway_name, "Gateway-003");
                assert_eq!(config.scan_duration, Duration::from_millis(250));
            },
        );
    }

    #[test]
    fn test_startup_route_parses_unknown_paths() {
        assert_eq!(startup_route(&cli(&["--route", "/alarms"])), Some(Route::Alarms));
        assert!(startup_route(&cli(&["--route", "/nowhere"])).is_some_and(|r| r.is_not_found()));
        assert_eq!(startup_route(&cli(&[])), None);
    }

    #[tokio::test]
    async fn test_save_and_quit_writes_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let manager = Arc::new(Mutex::new(ConfigManager::new_with_path(path.clone()).unwrap()));
        let app = App::new(&Config::default(), Default::default(), Some(Route::Alarms));

        save_and_quit(&app, &manager).await;

        let reopened = ConfigManager::new_with_path(path).unwrap();
        assert_eq!(reopened.load().last_route.as_deref(), Some("/alarms"));
    }
}
