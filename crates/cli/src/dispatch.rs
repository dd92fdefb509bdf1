//! Command dispatch logic for the CLI.
//!
//! Responsibilities:
//! - Route parsed CLI commands to their handlers.
//! - Load configuration for the commands that need it.
//!
//! Non-responsibilities:
//! - Does not parse arguments (see `args` module).
//! - Does not format output (see `formatters` module).

use std::time::Duration;

use anyhow::Result;
use gateway_client::ScanConfig;
use gateway_config::{Config, ConfigLoader};
use tokio_util::sync::CancellationToken;

use crate::args::{Cli, Commands};
use crate::commands::{self, Output};

/// Build the configuration: config file, then environment, then flags.
///
/// `.env` has already been loaded by `main` before argument parsing.
pub fn load_config(cli: &Cli, scan_duration: Option<Duration>) -> Result<Config> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config_path
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    let mut loader = loader.from_file()?.from_env()?;
    if let Some(duration) = scan_duration {
        loader = loader.with_scan_duration(duration);
    }
    Ok(loader.build()?)
}

/// Dispatch a parsed command to its handler.
pub async fn run_command(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    let out = Output {
        format: cli.output,
        file: cli.output_file.as_ref(),
    };

    match &cli.command {
        Commands::Devices { search, status } => commands::records::run_devices(search, *status, &out),
        Commands::Alarms {
            search,
            ack,
            severity,
        } => commands::records::run_alarms(search, *ack, *severity, &out),
        Commands::Data { search, quality } => commands::records::run_data(search, *quality, &out),
        Commands::Protocols { search, enabled } => {
            commands::records::run_protocols(search, *enabled, &out)
        }
        Commands::Users { search, status } => commands::records::run_users(search, *status, &out),
        Commands::Nav {
            path,
            mobile,
            toggles,
            collapsed,
        } => commands::nav::run(path, *mobile, toggles, *collapsed, &out),
        Commands::Discover {
            start_ip,
            end_ip,
            timeout_ms,
            protocols,
            scan_duration_ms,
        } => {
            let config = load_config(&cli, scan_duration_ms.map(Duration::from_millis))?;
            let scan = ScanConfig {
                start_ip: start_ip.clone(),
                end_ip: end_ip.clone(),
                timeout_ms: *timeout_ms,
                protocols: protocols.clone(),
            };
            commands::discover::run(scan, config.scan_duration, &out, cancel).await
        }
        Commands::Schema => commands::schema::run(&out),
    }
}
