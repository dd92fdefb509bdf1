//! Records shown on the dashboard and in the header.

use serde::{Deserialize, Serialize};

use crate::schema::{AlarmSeverity, GatewayStatus};

/// Summary tile with a headline value and the change since the last period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricTile {
    pub name: String,
    pub value: String,
    pub change: String,
}

impl MetricTile {
    /// Whether the change is a decrease (rendered in the alert color).
    pub fn is_decrease(&self) -> bool {
        self.change.starts_with('-')
    }
}

/// Health row for one gateway in the status grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayNode {
    pub name: String,
    pub status: GatewayStatus,
    pub devices: u32,
    pub uptime: String,
    pub latency: String,
}

/// Condensed alarm used by the dashboard's recent-alarms panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAlarm {
    pub id: u32,
    pub device: String,
    pub message: String,
    pub severity: AlarmSeverity,
    pub time: String,
}

/// Entry in the header's gateway selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayChoice {
    pub name: String,
    pub status: GatewayStatus,
    pub current: bool,
}
