//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the output formats: Table, JSON and CSV.
//! - Implement the `Formatter` trait for every record set the CLI prints.
//! - Write formatted output to stdout or atomically to a file.
//!
//! Does NOT handle:
//! - Filtering (see `gateway_client::filter`).
//! - Terminal UI rendering (see `crates/tui`).
//!
//! Invariants:
//! - Formatters return strings; only `output_result` prints.
//! - Empty result sets: JSON prints `[]`, CSV prints the header row only,
//!   Table prints `No <things> found.`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use gateway_client::models::{Alarm, DataPoint, Device, DiscoveredDevice, ProtocolTemplate, User};
use gateway_client::{NavRow, NavRowKind, ScanConfig};
use serde::Serialize;

mod common;
mod csv;
mod json;
mod table;

pub use self::csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Output format selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// One row of a flattened navigation tree, owned for printing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavRowOutput {
    pub name: String,
    pub kind: &'static str,
    pub depth: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
    pub active: bool,
    pub footer: bool,
}

impl From<&NavRow<'_>> for NavRowOutput {
    fn from(row: &NavRow<'_>) -> Self {
        let (kind, path, expanded) = match row.kind {
            NavRowKind::Link { path, .. } => ("link", Some(path.to_string()), None),
            NavRowKind::Group { expanded } => ("group", None, Some(expanded)),
        };
        Self {
            name: row.name.to_string(),
            kind,
            depth: row.depth,
            path,
            expanded,
            active: row.is_active(),
            footer: row.footer,
        }
    }
}

/// Result of a completed discovery scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub config: ScanConfig,
    pub duration_ms: u64,
    pub devices: Vec<DiscoveredDevice>,
}

/// A declared backend table.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTable {
    pub name: &'static str,
    pub columns: Vec<&'static str>,
}

/// A declared backend enum type.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaEnum {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaOutput {
    pub tables: Vec<SchemaTable>,
    pub enums: Vec<SchemaEnum>,
}

/// Formatter trait for the CLI's record sets.
pub trait Formatter {
    fn format_devices(&self, devices: &[&Device]) -> Result<String>;

    fn format_alarms(&self, alarms: &[&Alarm]) -> Result<String>;

    fn format_data_points(&self, points: &[&DataPoint]) -> Result<String>;

    fn format_protocols(&self, templates: &[&ProtocolTemplate]) -> Result<String>;

    fn format_users(&self, users: &[&User]) -> Result<String>;

    fn format_nav(&self, rows: &[NavRowOutput]) -> Result<String>;

    fn format_scan(&self, report: &ScanReport) -> Result<String>;

    fn format_schema(&self, schema: &SchemaOutput) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

/// Print `output`, or write it to `output_file` when one is given.
pub fn output_result(output: &str, format: OutputFormat, output_file: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!("Results written to {} ({:?} format)", path.display(), format);
    } else {
        print!("{}", output);
    }
    Ok(())
}

/// Write to a temp file next to `path`, then rename over it.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    use std::io::Write;

    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir)
        .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(())
}
