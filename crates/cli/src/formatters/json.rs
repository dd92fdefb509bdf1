//! JSON formatter implementation.
//!
//! Records serialize with their serde wire keys (`modbus_tcp`, `critical`),
//! not the display labels used by the table formatter.

use anyhow::Result;
use gateway_client::models::{Alarm, DataPoint, Device, ProtocolTemplate, User};
use serde::Serialize;

use super::{Formatter, NavRowOutput, ScanReport, SchemaOutput};

/// JSON formatter.
pub struct JsonFormatter;

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut output = serde_json::to_string_pretty(value)?;
    output.push('\n');
    Ok(output)
}

impl Formatter for JsonFormatter {
    fn format_devices(&self, devices: &[&Device]) -> Result<String> {
        pretty(devices)
    }

    fn format_alarms(&self, alarms: &[&Alarm]) -> Result<String> {
        pretty(alarms)
    }

    fn format_data_points(&self, points: &[&DataPoint]) -> Result<String> {
        pretty(points)
    }

    fn format_protocols(&self, templates: &[&ProtocolTemplate]) -> Result<String> {
        pretty(templates)
    }

    fn format_users(&self, users: &[&User]) -> Result<String> {
        pretty(users)
    }

    fn format_nav(&self, rows: &[NavRowOutput]) -> Result<String> {
        pretty(rows)
    }

    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        pretty(report)
    }

    fn format_schema(&self, schema: &SchemaOutput) -> Result<String> {
        pretty(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::fixtures;

    #[test]
    fn test_alarms_use_wire_keys() {
        let alarms = fixtures::alarms();
        let refs: Vec<&Alarm> = alarms.iter().take(1).collect();
        let output = JsonFormatter.format_alarms(&refs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["severity"], "critical");
        assert_eq!(value[0]["acknowledged"], false);
    }

    #[test]
    fn test_empty_list_is_valid_json() {
        let output = JsonFormatter.format_devices(&[]).unwrap();
        assert_eq!(output, "[]\n");
    }
}
