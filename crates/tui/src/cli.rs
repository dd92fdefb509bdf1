//! Command-line argument parsing for gateway-tui.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `gateway_config`).

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for gateway-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --gateway, --scan-duration-ms)
/// 2. Environment variables (e.g., IIOT_GATEWAY_NAME)
/// 3. The `settings` section of config.json
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "gateway-tui",
    about = "Terminal console for an industrial IoT gateway",
    version,
    after_help = "Examples:\n  gateway-tui\n  gateway-tui --route /alarms\n  gateway-tui --config-path /etc/iiot/config.json --fresh\n  gateway-tui --log-dir /var/log/gateway-tui\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Start with fresh state, ignoring any persisted state
    #[arg(long)]
    pub fresh: bool,

    /// Page to open at startup (overrides the last visited page)
    #[arg(long)]
    pub route: Option<String>,

    /// Gateway name shown in the header
    #[arg(long)]
    pub gateway: Option<String>,

    /// Delay before the connection indicator reports online, in milliseconds
    #[arg(long)]
    pub connect_delay_ms: Option<u64>,

    /// Duration of a discovery scan, in milliseconds
    #[arg(long)]
    pub scan_duration_ms: Option<u64>,
}
