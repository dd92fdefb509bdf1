//! CSV formatter implementation.
//!
//! Responsibilities:
//! - Write records as RFC 4180 CSV through the `csv` crate (quoting and
//!   escaping included).
//!
//! Invariants:
//! - The header row is always written, even for an empty result set.
//! - Cells use the same display text as the table formatter.

use anyhow::{Result, anyhow};
use gateway_client::models::{Alarm, DataPoint, Device, ProtocolTemplate, User};

use super::common::Tabular;
use super::{Formatter, NavRowOutput, ScanReport, SchemaOutput};

/// CSV formatter.
pub struct CsvFormatter;

fn render<T: Tabular>(items: &[T]) -> Result<String> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record(T::HEADERS)?;
    for item in items {
        writer.write_record(item.row())?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV output: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}

impl Formatter for CsvFormatter {
    fn format_devices(&self, devices: &[&Device]) -> Result<String> {
        render(devices)
    }

    fn format_alarms(&self, alarms: &[&Alarm]) -> Result<String> {
        render(alarms)
    }

    fn format_data_points(&self, points: &[&DataPoint]) -> Result<String> {
        render(points)
    }

    fn format_protocols(&self, templates: &[&ProtocolTemplate]) -> Result<String> {
        render(templates)
    }

    fn format_users(&self, users: &[&User]) -> Result<String> {
        render(users)
    }

    fn format_nav(&self, rows: &[NavRowOutput]) -> Result<String> {
        render(rows)
    }

    /// Only the discovered devices; the scan settings have no row shape.
    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        render(&report.devices)
    }

    /// Tables first, then enum types, separated by a blank line.
    fn format_schema(&self, schema: &SchemaOutput) -> Result<String> {
        let mut out = render(&schema.tables)?;
        out.push('\n');
        out.push_str(&render(&schema.enums)?);
        Ok(out)
    }
}
