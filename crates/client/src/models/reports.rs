use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    pub enum ReportFormat: "report format" {
        Pdf => ("PDF", "PDF"),
        Excel => ("Excel", "Excel"),
        Csv => ("CSV", "CSV"),
    }
}

labeled_enum! {
    pub enum ReportFrequency: "frequency" {
        Daily => ("daily", "Daily"),
        Weekly => ("weekly", "Weekly"),
        Monthly => ("monthly", "Monthly"),
    }
}

/// A previously generated report available for download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u32,
    pub name: String,
    pub report_type: String,
    pub date: String,
    pub size: String,
    pub format: ReportFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTemplate {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub frequency: ReportFrequency,
}
