//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse categorical filter flags through the library's `FromStr` impls,
//!   so the CLI accepts exactly the spellings the console shows.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `dispatch::load_config`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gateway_client::{
    AccountStatusFilter, AckFilter, EnabledFilter, LinkStatusFilter, QualityFilter,
    SeverityFilter, models::Protocol,
};

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gateway-cli")]
#[command(about = "IIoT Gateway CLI - Query the gateway console from scripts", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gateway-cli devices --search PLC\n  gateway-cli alarms --ack unacknowledged --output json\n  gateway-cli nav --path /devices/discovery\n  gateway-cli discover --start-ip 10.0.0.1 --end-ip 10.0.0.50 --protocol mqtt\n  gateway-cli schema\n"
)]
pub struct Cli {
    /// Output format (table, json, csv)
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Output file path (saves results to file instead of stdout)
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via IIOT_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "IIOT_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List registered devices
    Devices {
        /// Case-insensitive text matched against name, type and protocol
        #[arg(short, long, default_value = "")]
        search: String,

        /// Link status: all, online, warning, offline
        #[arg(long, default_value = "all")]
        status: LinkStatusFilter,
    },

    /// List alarms and events
    Alarms {
        /// Case-insensitive text matched against device and message
        #[arg(short, long, default_value = "")]
        search: String,

        /// Acknowledgement: all, unacknowledged, acknowledged
        #[arg(long, default_value = "all")]
        ack: AckFilter,

        /// Severity: all, critical, high, medium, low, info
        #[arg(long, default_value = "all")]
        severity: SeverityFilter,
    },

    /// List live data points
    Data {
        /// Case-insensitive text matched against name and device
        #[arg(short, long, default_value = "")]
        search: String,

        /// Data quality: all, good, warning, error
        #[arg(long, default_value = "all")]
        quality: QualityFilter,
    },

    /// List protocol templates
    Protocols {
        /// Case-insensitive text matched against name and protocol
        #[arg(short, long, default_value = "")]
        search: String,

        /// Template state: all, enabled, disabled
        #[arg(long, default_value = "all")]
        enabled: EnabledFilter,
    },

    /// List users
    Users {
        /// Case-insensitive text matched against name and email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Account status: all, active, inactive
        #[arg(long, default_value = "all")]
        status: AccountStatusFilter,
    },

    /// Print the navigation tree as it would be shown for a page
    Nav {
        /// Current page path; its link is marked active
        #[arg(short, long, default_value = "/dashboard")]
        path: String,

        /// Use the mobile drawer tree instead of the desktop sidebar
        #[arg(long)]
        mobile: bool,

        /// Toggle a group's expansion (repeatable)
        #[arg(long = "toggle", value_name = "GROUP")]
        toggles: Vec<String>,

        /// Show the sidebar collapsed (top-level entries only)
        #[arg(long, conflicts_with = "mobile")]
        collapsed: bool,
    },

    /// Run the simulated discovery scan and list the devices found
    Discover {
        /// First address of the scan range
        #[arg(long, default_value = "192.168.1.1")]
        start_ip: String,

        /// Last address of the scan range
        #[arg(long, default_value = "192.168.1.255")]
        end_ip: String,

        /// Per-device timeout in milliseconds
        #[arg(long, default_value_t = 5000)]
        timeout_ms: u64,

        /// Protocols to probe (repeatable)
        #[arg(long = "protocol", value_name = "PROTOCOL")]
        protocols: Vec<Protocol>,

        /// Override the configured scan duration in milliseconds
        #[arg(long)]
        scan_duration_ms: Option<u64>,
    },

    /// List the declared backend tables and enum types
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::ValueFilter;
    use gateway_client::models::{AlarmSeverity, LinkStatus};

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["gateway-cli", "devices"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Table);
        match cli.command {
            Commands::Devices { search, status } => {
                assert!(search.is_empty());
                assert_eq!(status, LinkStatusFilter::All);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_categorical_flags_accept_key_or_label() {
        let cli = Cli::try_parse_from([
            "gateway-cli",
            "alarms",
            "--ack",
            "Unacknowledged",
            "--severity",
            "critical",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        match cli.command {
            Commands::Alarms { ack, severity, .. } => {
                assert_eq!(ack, AckFilter::Unacknowledged);
                assert_eq!(severity, ValueFilter::Only(AlarmSeverity::Critical));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["gateway-cli", "devices", "--status", "Offline"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Devices { status: ValueFilter::Only(LinkStatus::Offline), .. }
        ));
    }

    #[test]
    fn test_invalid_filter_value_rejected() {
        let result = Cli::try_parse_from(["gateway-cli", "protocols", "--enabled", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_protocols_repeatable() {
        let cli = Cli::try_parse_from([
            "gateway-cli",
            "discover",
            "--protocol",
            "mqtt",
            "--protocol",
            "Modbus TCP",
        ])
        .unwrap();
        match cli.command {
            Commands::Discover { protocols, timeout_ms, .. } => {
                assert_eq!(protocols, vec![Protocol::Mqtt, Protocol::ModbusTcp]);
                assert_eq!(timeout_ms, 5000);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_collapsed_conflicts_with_mobile() {
        let result = Cli::try_parse_from(["gateway-cli", "nav", "--mobile", "--collapsed"]);
        assert!(result.is_err());
    }
}
