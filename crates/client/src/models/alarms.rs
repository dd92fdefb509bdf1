use serde::{Deserialize, Serialize};

use crate::schema::AlarmSeverity;

/// An alarm raised against a device or gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: u32,
    pub severity: AlarmSeverity,
    pub device: String,
    pub message: String,
    pub value: String,
    pub threshold: String,
    pub time: String,
    pub acknowledged: bool,
}

impl Alarm {
    /// Mark the alarm acknowledged. Returns `false` if it already was.
    pub fn acknowledge(&mut self) -> bool {
        !std::mem::replace(&mut self.acknowledged, true)
    }
}
