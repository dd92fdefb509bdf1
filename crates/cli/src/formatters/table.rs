//! Table formatter implementation.
//!
//! Responsibilities:
//! - Print records as space-aligned columns with an underlined header.
//!
//! Invariants:
//! - Column width is the widest cell (in chars) of that column.
//! - Trailing whitespace is trimmed from every line.

use anyhow::Result;
use gateway_client::models::{Alarm, DataPoint, Device, ProtocolTemplate, User};

use super::common::Tabular;
use super::{Formatter, NavRowOutput, ScanReport, SchemaOutput};

/// Table formatter.
pub struct TableFormatter;

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!("{:<width$}  ", cell.as_ref(), width = *width));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

fn render<T: Tabular>(items: &[T], noun: &str) -> String {
    if items.is_empty() {
        return format!("No {noun} found.\n");
    }

    let rows: Vec<Vec<String>> = items.iter().map(Tabular::row).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let underline: Vec<String> = T::HEADERS.iter().map(|h| "=".repeat(h.len())).collect();
    let mut out = String::new();
    push_line(&mut out, T::HEADERS, &widths);
    push_line(&mut out, &underline, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

impl Formatter for TableFormatter {
    fn format_devices(&self, devices: &[&Device]) -> Result<String> {
        Ok(render(devices, "devices"))
    }

    fn format_alarms(&self, alarms: &[&Alarm]) -> Result<String> {
        Ok(render(alarms, "alarms"))
    }

    fn format_data_points(&self, points: &[&DataPoint]) -> Result<String> {
        Ok(render(points, "data points"))
    }

    fn format_protocols(&self, templates: &[&ProtocolTemplate]) -> Result<String> {
        Ok(render(templates, "protocol templates"))
    }

    fn format_users(&self, users: &[&User]) -> Result<String> {
        Ok(render(users, "users"))
    }

    fn format_nav(&self, rows: &[NavRowOutput]) -> Result<String> {
        Ok(render(rows, "navigation entries"))
    }

    fn format_scan(&self, report: &ScanReport) -> Result<String> {
        let config = &report.config;
        let protocols = if config.protocols.is_empty() {
            "any".to_string()
        } else {
            config
                .protocols
                .iter()
                .map(|p| p.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let mut out = format!(
            "Scanned {} - {} (timeout {} ms, protocols: {}) in {} ms\n\n",
            config.start_ip, config.end_ip, config.timeout_ms, protocols, report.duration_ms
        );
        out.push_str(&render(&report.devices, "devices"));
        Ok(out)
    }

    fn format_schema(&self, schema: &SchemaOutput) -> Result<String> {
        let mut out = render(&schema.tables, "tables");
        out.push('\n');
        out.push_str(&render(&schema.enums, "enum types"));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway_client::fixtures;

    #[test]
    fn test_devices_table_aligned() {
        let devices = fixtures::devices();
        let refs: Vec<&Device> = devices.iter().collect();
        let output = TableFormatter.format_devices(&refs).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2 + devices.len());
        assert!(lines[0].starts_with("NAME"));
        assert!(lines[1].starts_with("===="));
        assert!(lines[2].starts_with("PLC-001"));
        let status_col = lines[0].find("STATUS").unwrap();
        assert_eq!(&lines[6][status_col..status_col + 7], "Offline");
    }

    #[test]
    fn test_empty_table_message() {
        let output = TableFormatter.format_users(&[]).unwrap();
        assert_eq!(output, "No users found.\n");
    }
}
