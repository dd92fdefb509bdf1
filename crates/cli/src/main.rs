//! gateway-cli: command-line access to the IIoT gateway console's data.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run list, navigation, discovery and schema commands through the shared
//!   domain library.
//! - Format results as table, JSON or CSV.
//!
//! Does NOT handle:
//! - Filtering, navigation or scan logic (see `crates/client`).
//! - Interactive use (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Logs go to stderr; stdout carries only command output.
//! - Ctrl+C exits with code 130.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{install_ctrl_c_handler, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use gateway_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cancel = install_ctrl_c_handler();

    let exit_code = match run_command(cli, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
