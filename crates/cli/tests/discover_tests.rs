//! Integration tests for `gateway-cli discover` and `gateway-cli schema`.

mod common;

use common::{gateway_cmd, run_json};
use predicates::prelude::*;

#[test]
fn test_scan_keeps_three_devices_regardless_of_range() {
    let report = run_json(&[
        "discover",
        "--scan-duration-ms",
        "10",
        "--start-ip",
        "10.0.0.1",
        "--end-ip",
        "10.0.0.9",
        "--protocol",
        "snmp",
    ]);
    assert_eq!(report["devices"].as_array().unwrap().len(), 3);
    assert_eq!(report["config"]["start_ip"], "10.0.0.1");
    assert_eq!(report["config"]["protocols"], serde_json::json!(["snmp"]));
    assert_eq!(report["duration_ms"], 10);
}

#[test]
fn test_scan_duration_from_environment() {
    gateway_cmd()
        .env("IIOT_SCAN_DURATION_MS", "5")
        .args(["discover", "--output", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("IP,PROTOCOL,TYPE,SELECTED\n"))
        .stdout(predicate::str::contains("192.168.1.50,MQTT,Sensor,no"));
}

#[test]
fn test_invalid_scan_duration_is_config_error() {
    gateway_cmd()
        .env("IIOT_SCAN_DURATION_MS", "soon")
        .arg("discover")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("IIOT_SCAN_DURATION_MS"));
}

#[test]
fn test_scan_duration_out_of_range() {
    gateway_cmd()
        .args(["discover", "--scan-duration-ms", "700000"])
        .assert()
        .code(3);
}

#[test]
fn test_schema_lists_tables_and_enums() {
    let schema = run_json(&["schema"]);
    assert_eq!(schema["tables"].as_array().unwrap().len(), 7);
    assert_eq!(schema["tables"][6]["name"], "oee_metrics");
    assert_eq!(schema["enums"][0]["name"], "gateway_status");
}

#[test]
fn test_schema_table_output() {
    gateway_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("protocol_drivers"))
        .stdout(predicate::str::contains("sync_status"));
}
