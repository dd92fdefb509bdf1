//! Shared test utilities for gateway-cli integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here is hermetic: no `.env`, no host `IIOT_*`
//!   variables, and a config path that does not exist.

use assert_cmd::Command;

/// Returns a hermetic `gateway-cli` command for integration testing.
pub fn gateway_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gateway-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env(
        "IIOT_CONFIG_PATH",
        std::env::temp_dir().join("gateway-cli-tests-missing").join("config.json"),
    );

    cmd.env_remove("IIOT_GATEWAY_NAME")
        .env_remove("IIOT_CONNECT_DELAY_MS")
        .env_remove("IIOT_SCAN_DURATION_MS")
        .env_remove("IIOT_UI_TICK_MS")
        .env_remove("IIOT_MOBILE_BREAKPOINT")
        .env_remove("RUST_LOG");

    cmd
}

/// Run `args` with `--output json` and parse stdout.
#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = gateway_cmd()
        .args(args)
        .args(["--output", "json"])
        .output()
        .expect("failed to run gateway-cli");
    assert!(
        output.status.success(),
        "gateway-cli {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout was not JSON")
}
