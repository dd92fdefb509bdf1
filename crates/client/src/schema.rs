//! Declared persistence schema for the gateway backend.
//!
//! Responsibilities:
//! - Describe the relational shape of the backend tables (rows, inserts, updates).
//! - Define the status/protocol/severity enums shared with the console models.
//!
//! Does NOT handle:
//! - Reading or writing any database. Nothing in this workspace queries these
//!   tables; they are the contract for a backend that is not implemented here.
//!
//! Invariants:
//! - Every row is keyed by a UUID and carries RFC 3339 timestamps.
//! - Insert types make the generated columns (`id`, timestamps) optional.
//! - Update types make every column optional and omit absent ones when serialized.
//!   Nullable columns are `Option<Option<T>>`: absent is `None`, an explicit
//!   JSON `null` is `Some(None)`, in both directions.
//! - Enum wire keys match the backend enum labels exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use uuid::Uuid;

use crate::macros::labeled_enum;

labeled_enum! {
    /// Reachability of a gateway node.
    pub enum GatewayStatus: "gateway status" {
        Online => ("online", "Online"),
        Offline => ("offline", "Offline"),
        Warning => ("warning", "Warning"),
        Connecting => ("connecting", "Connecting"),
    }
}

labeled_enum! {
    /// Lifecycle status of a device record in the backend.
    pub enum DeviceStatus: "device status" {
        Discovered => ("discovered", "Discovered"),
        Verified => ("verified", "Verified"),
        Unreachable => ("unreachable", "Unreachable"),
        Offline => ("offline", "Offline"),
        Online => ("online", "Online"),
    }
}

labeled_enum! {
    /// Protocol driver families known to the backend.
    pub enum ProtocolType: "protocol type" {
        ModbusTcp => ("modbus_tcp", "Modbus TCP"),
        ModbusRtu => ("modbus_rtu", "Modbus RTU"),
        Opcua => ("opcua", "OPC UA"),
        Mqtt => ("mqtt", "MQTT"),
        Bacnet => ("bacnet", "BACnet"),
        Dnp3 => ("dnp3", "DNP3"),
        Iec61850 => ("iec61850", "IEC 61850"),
        Iec104 => ("iec104", "IEC 104"),
    }
}

labeled_enum! {
    /// Alarm severity tiers, most severe first.
    pub enum AlarmSeverity: "severity" {
        Critical => ("critical", "Critical"),
        High => ("high", "High"),
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
        Info => ("info", "Info"),
    }
}

labeled_enum! {
    /// Replication state of a record pushed to an upstream system.
    pub enum SyncStatus: "sync status" {
        Pending => ("pending", "Pending"),
        Synced => ("synced", "Synced"),
        Failed => ("failed", "Failed"),
    }
}

/// Tables declared by the backend schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Gateways,
    Devices,
    ProtocolDrivers,
    DeviceTags,
    Alarms,
    Dashboards,
    OeeMetrics,
}

impl Table {
    pub const ALL: &'static [Table] = &[
        Table::Gateways,
        Table::Devices,
        Table::ProtocolDrivers,
        Table::DeviceTags,
        Table::Alarms,
        Table::Dashboards,
        Table::OeeMetrics,
    ];

    /// SQL table name.
    pub fn name(self) -> &'static str {
        match self {
            Table::Gateways => "gateways",
            Table::Devices => "devices",
            Table::ProtocolDrivers => "protocol_drivers",
            Table::DeviceTags => "device_tags",
            Table::Alarms => "alarms",
            Table::Dashboards => "dashboards",
            Table::OeeMetrics => "oee_metrics",
        }
    }

    /// Column names in declaration order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Gateways => &[
                "id",
                "name",
                "description",
                "ip_address",
                "port",
                "status",
                "firmware_version",
                "last_seen",
                "created_at",
                "updated_at",
            ],
            Table::Devices => &[
                "id",
                "gateway_id",
                "name",
                "vendor",
                "model",
                "protocol_type",
                "endpoint",
                "status",
                "metadata",
                "created_at",
                "updated_at",
            ],
            Table::ProtocolDrivers => &[
                "id",
                "name",
                "version",
                "protocol_type",
                "vendor",
                "description",
                "installation_status",
                "created_at",
            ],
            Table::DeviceTags => &[
                "id",
                "device_id",
                "tag_name",
                "tag_address",
                "data_type",
                "unit",
                "scaling_factor",
                "metadata",
                "created_at",
            ],
            Table::Alarms => &[
                "id",
                "device_id",
                "alarm_rule_id",
                "alarm_type",
                "severity",
                "message",
                "triggered_at",
                "acknowledged_at",
                "resolved_at",
            ],
            Table::Dashboards => &[
                "id",
                "name",
                "layout_config",
                "is_default",
                "created_at",
                "updated_at",
            ],
            Table::OeeMetrics => &[
                "id",
                "gateway_id",
                "availability",
                "performance",
                "quality",
                "oee_score",
                "calculated_at",
            ],
        }
    }
}

/// Enum types declared by the backend, by their SQL name.
pub const ENUM_TYPES: &[(&str, &[&str])] = &[
    ("gateway_status", &["online", "offline", "warning", "connecting"]),
    (
        "device_status",
        &["discovered", "verified", "unreachable", "offline", "online"],
    ),
    (
        "protocol_type",
        &[
            "modbus_tcp",
            "modbus_rtu",
            "opcua",
            "mqtt",
            "bacnet",
            "dnp3",
            "iec61850",
            "iec104",
        ],
    ),
    ("alarm_severity", &["critical", "high", "medium", "low", "info"]),
    ("sync_status", &["pending", "synced", "failed"]),
];

// =============================================================================
// gateways
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub port: Option<u16>,
    pub status: GatewayStatus,
    pub firmware_version: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub port: Option<u16>,
    pub status: GatewayStatus,
    pub firmware_version: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub ip_address: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub port: Option<Option<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GatewayStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub firmware_version: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub last_seen: Option<Option<DateTime<Utc>>>,
}

// =============================================================================
// devices
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRow {
    pub id: Uuid,
    pub gateway_id: Option<Uuid>,
    pub name: String,
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub protocol_type: ProtocolType,
    pub endpoint: Option<String>,
    pub status: DeviceStatus,
    #[serde(default)]
    pub metadata: Json,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub gateway_id: Option<Uuid>,
    pub name: String,
    pub vendor: Option<String>,
    pub model: Option<String>,
    pub protocol_type: ProtocolType,
    pub endpoint: Option<String>,
    pub status: DeviceStatus,
    #[serde(default)]
    pub metadata: Json,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub gateway_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub vendor: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub model: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub endpoint: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
}

// =============================================================================
// protocol_drivers
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolDriverRow {
    pub id: Uuid,
    pub name: String,
    pub version: String,
    pub protocol_type: ProtocolType,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub installation_status: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolDriverInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub version: String,
    pub protocol_type: ProtocolType,
    pub vendor: Option<String>,
    pub description: Option<String>,
    pub installation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolDriverUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_type: Option<ProtocolType>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub vendor: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub installation_status: Option<Option<String>>,
}

// =============================================================================
// device_tags
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTagRow {
    pub id: Uuid,
    pub device_id: Option<Uuid>,
    pub tag_name: String,
    pub tag_address: String,
    pub data_type: Option<String>,
    pub unit: Option<String>,
    pub scaling_factor: Option<f64>,
    #[serde(default)]
    pub metadata: Json,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceTagInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub device_id: Option<Uuid>,
    pub tag_name: String,
    pub tag_address: String,
    pub data_type: Option<String>,
    pub unit: Option<String>,
    pub scaling_factor: Option<f64>,
    #[serde(default)]
    pub metadata: Json,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceTagUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub device_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_address: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub data_type: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub unit: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub scaling_factor: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
}

// =============================================================================
// alarms
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmRow {
    pub id: Uuid,
    pub device_id: Option<Uuid>,
    pub alarm_rule_id: Option<Uuid>,
    pub alarm_type: String,
    pub severity: AlarmSeverity,
    pub message: String,
    pub triggered_at: DateTime<Utc>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl AlarmRow {
    /// An alarm is acknowledged once `acknowledged_at` is set.
    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub device_id: Option<Uuid>,
    pub alarm_rule_id: Option<Uuid>,
    pub alarm_type: String,
    pub severity: AlarmSeverity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_at: Option<DateTime<Utc>>,
    pub acknowledged_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlarmUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub device_id: Option<Option<Uuid>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub alarm_rule_id: Option<Option<Uuid>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alarm_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<AlarmSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub acknowledged_at: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub resolved_at: Option<Option<DateTime<Utc>>>,
}

// =============================================================================
// dashboards
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRow {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub layout_config: Json,
    pub is_default: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default)]
    pub layout_config: Json,
    pub is_default: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_config: Option<Json>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub is_default: Option<Option<bool>>,
}

// =============================================================================
// oee_metrics
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeMetricRow {
    pub id: Uuid,
    pub gateway_id: Option<Uuid>,
    pub availability: Option<f64>,
    pub performance: Option<f64>,
    pub quality: Option<f64>,
    pub oee_score: Option<f64>,
    pub calculated_at: DateTime<Utc>,
}

impl OeeMetricRow {
    /// OEE is the product of its three factors; `None` while any factor is missing.
    pub fn computed_score(&self) -> Option<f64> {
        Some(self.availability? * self.performance? * self.quality?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OeeMetricInsert {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub gateway_id: Option<Uuid>,
    pub availability: Option<f64>,
    pub performance: Option<f64>,
    pub quality: Option<f64>,
    pub oee_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OeeMetricUpdate {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub gateway_id: Option<Option<Uuid>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub availability: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub performance: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub quality: Option<Option<f64>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub oee_score: Option<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_device_row() {
        let json = r#"{
            "id": "6f1c1d52-3b0e-4c39-9a7e-0c0e7f5b1a10",
            "gateway_id": null,
            "name": "PLC-001",
            "vendor": "Siemens",
            "model": "S7-1200",
            "protocol_type": "modbus_tcp",
            "endpoint": "192.168.1.10:502",
            "status": "verified",
            "metadata": {"rack": 0, "slot": 1},
            "created_at": "2024-05-01T08:00:00Z",
            "updated_at": "2024-05-01T08:00:00Z"
        }"#;
        let row: DeviceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.name, "PLC-001");
        assert_eq!(row.protocol_type, ProtocolType::ModbusTcp);
        assert_eq!(row.status, DeviceStatus::Verified);
        assert_eq!(row.gateway_id, None);
        assert_eq!(row.metadata["slot"], 1);
    }

    #[test]
    fn test_alarm_row_acknowledged() {
        let json = r#"{
            "id": "0b8b6a53-7f52-4a5e-8d0a-3c0f3f8a5e01",
            "device_id": null,
            "alarm_rule_id": null,
            "alarm_type": "threshold",
            "severity": "critical",
            "message": "High temperature detected",
            "triggered_at": "2024-05-01T08:00:00Z",
            "acknowledged_at": "2024-05-01T08:05:00Z",
            "resolved_at": null
        }"#;
        let row: AlarmRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.severity, AlarmSeverity::Critical);
        assert!(row.is_acknowledged());
    }

    #[test]
    fn test_insert_omits_generated_columns() {
        let insert = GatewayInsert {
            id: None,
            name: "Gateway-001".to_string(),
            description: None,
            ip_address: Some("192.168.1.100".to_string()),
            port: Some(502),
            status: GatewayStatus::Connecting,
            firmware_version: None,
            last_seen: None,
            created_at: None,
            updated_at: None,
        };
        let value = serde_json::to_value(&insert).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["status"], "connecting");
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = AlarmUpdate {
            acknowledged_at: Some(None),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object["acknowledged_at"].is_null());
    }

    #[test]
    fn test_update_keeps_null_apart_from_absent() {
        let update: AlarmUpdate =
            serde_json::from_str(r#"{"acknowledged_at": null, "resolved_at": "2024-05-01T09:00:00Z"}"#)
                .unwrap();
        assert_eq!(update.acknowledged_at, Some(None));
        assert!(matches!(update.resolved_at, Some(Some(_))));
        assert_eq!(update.device_id, None);

        let cleared = GatewayUpdate {
            firmware_version: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_string(&cleared).unwrap();
        assert_eq!(json, r#"{"firmware_version":null}"#);
        let back: GatewayUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cleared);
    }

    #[test]
    fn test_oee_score_requires_all_factors() {
        let mut row = OeeMetricRow {
            id: Uuid::nil(),
            gateway_id: None,
            availability: Some(0.9),
            performance: Some(0.95),
            quality: None,
            oee_score: None,
            calculated_at: Utc::now(),
        };
        assert_eq!(row.computed_score(), None);
        row.quality = Some(1.0);
        let score = row.computed_score().unwrap();
        assert!((score - 0.855).abs() < 1e-9);
    }

    #[test]
    fn test_enum_types_match_rust_enums() {
        let lookup = |name: &str| {
            ENUM_TYPES
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, values)| values.to_vec())
                .unwrap()
        };
        let protocols: Vec<&str> = ProtocolType::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(lookup("protocol_type"), protocols);
        let severities: Vec<&str> = AlarmSeverity::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(lookup("alarm_severity"), severities);
        let statuses: Vec<&str> = GatewayStatus::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(lookup("gateway_status"), statuses);
    }

    #[test]
    fn test_table_names_are_unique() {
        let mut names: Vec<&str> = Table::ALL.iter().map(|t| t.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Table::ALL.len());
        assert_eq!(Table::Alarms.columns()[0], "id");
    }

    #[test]
    fn test_protocol_type_parses_label_and_key() {
        assert_eq!("opcua".parse::<ProtocolType>().unwrap(), ProtocolType::Opcua);
        assert_eq!("OPC UA".parse::<ProtocolType>().unwrap(), ProtocolType::Opcua);
        assert!("profinet".parse::<ProtocolType>().is_err());
    }
}
