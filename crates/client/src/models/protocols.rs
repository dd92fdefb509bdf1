use serde::{Deserialize, Serialize};

use super::devices::Protocol;

/// A reusable protocol configuration applied to a set of devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolTemplate {
    pub id: u32,
    pub name: String,
    pub protocol: Protocol,
    pub devices: u32,
    pub enabled: bool,
    pub description: String,
}
