//! Read-only system settings shown on the settings page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayIdentity {
    pub name: String,
    pub id: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub ip_address: String,
    pub subnet_mask: String,
    pub default_gateway: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCollection {
    pub polling_rate_ms: u32,
    pub buffer_size_mb: u32,
    pub retention_days: u32,
    pub compression: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub firmware_version: String,
    pub uptime: String,
    pub last_backup: String,
    pub database_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub gateway: GatewayIdentity,
    pub network: NetworkSettings,
    pub data_collection: DataCollection,
    pub system: SystemInfo,
}
