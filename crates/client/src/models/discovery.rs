use serde::{Deserialize, Serialize};

use super::devices::{DeviceType, Protocol};

/// A device found by a discovery scan, pending selection for registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredDevice {
    pub id: u32,
    pub ip: String,
    pub protocol: Protocol,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub selected: bool,
}
