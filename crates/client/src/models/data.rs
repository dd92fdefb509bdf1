//! Live data point readings.

use serde::{Deserialize, Serialize};

use crate::macros::labeled_enum;

labeled_enum! {
    /// Signal quality reported with a reading.
    pub enum DataQuality: "quality" {
        Good => ("good", "Good"),
        Warning => ("warning", "Warning"),
        Error => ("error", "Error"),
    }
}

labeled_enum! {
    /// Direction of the most recent change.
    pub enum Trend: "trend" {
        Up => ("up", "Up"),
        Stable => ("stable", "Stable"),
        Down => ("down", "Down"),
    }
}

impl Trend {
    /// Single-glyph marker for table cells.
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Stable => "→",
            Trend::Down => "↓",
        }
    }
}

/// A single tag reading collected from a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: u32,
    pub name: String,
    pub device: String,
    pub value: String,
    pub timestamp: String,
    pub quality: DataQuality,
    pub trend: Trend,
}
