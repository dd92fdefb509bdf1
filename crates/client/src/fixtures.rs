//! In-memory mock data backing every console page.
//!
//! Responsibilities:
//! - Provide the record sets each page starts from.
//!
//! Invariants:
//! - Every function returns a freshly owned collection; callers mutate their
//!   copy (acknowledge, select) without affecting any other page.
//! - Record ids are unique within each collection.

use crate::models::{
    AccountStatus, Alarm, AlarmSeverity, DataCollection, DataPoint, DataQuality, Device,
    DeviceType, DiscoveredDevice, GatewayChoice, GatewayIdentity, GatewayNode, GatewayStatus,
    Integration, IntegrationKind, IntegrationMetric, LinkStatus, MetricTile, NetworkSettings,
    Notification, Protocol, ProtocolTemplate, RecentAlarm, Report, ReportFormat, ReportFrequency,
    ReportTemplate, RoleSummary, SystemInfo, SystemSettings, Trend, User, UserRole,
};

#[allow(clippy::too_many_arguments)]
fn device(
    id: u32,
    name: &str,
    device_type: DeviceType,
    protocol: Protocol,
    ip: &str,
    status: LinkStatus,
    gateway: &str,
    last_seen: &str,
) -> Device {
    Device {
        id,
        name: name.to_string(),
        device_type,
        protocol,
        ip: ip.to_string(),
        status,
        gateway: gateway.to_string(),
        last_seen: last_seen.to_string(),
    }
}

pub fn devices() -> Vec<Device> {
    use DeviceType::*;
    use LinkStatus::*;
    vec![
        device(1, "PLC-001", Plc, Protocol::ModbusTcp, "192.168.1.10", Online, "Gateway-001", "2 min ago"),
        device(2, "Sensor-045", Sensor, Protocol::Mqtt, "192.168.1.45", Online, "Gateway-001", "1 min ago"),
        device(3, "HMI-002", Hmi, Protocol::OpcUa, "192.168.1.20", Online, "Gateway-002", "5 min ago"),
        device(4, "Meter-078", Meter, Protocol::Bacnet, "192.168.1.78", Warning, "Gateway-002", "15 min ago"),
        device(5, "Controller-003", Controller, Protocol::ModbusRtu, "192.168.1.30", Offline, "Gateway-003", "2 hours ago"),
    ]
}

fn alarm(
    id: u32,
    severity: AlarmSeverity,
    device: &str,
    message: &str,
    (value, threshold): (&str, &str),
    time: &str,
    acknowledged: bool,
) -> Alarm {
    Alarm {
        id,
        severity,
        device: device.to_string(),
        message: message.to_string(),
        value: value.to_string(),
        threshold: threshold.to_string(),
        time: time.to_string(),
        acknowledged,
    }
}

pub fn alarms() -> Vec<Alarm> {
    use AlarmSeverity::*;
    vec![
        alarm(1, Critical, "PLC-001", "High temperature detected", ("95°F", "85°F"), "2 min ago", false),
        alarm(2, High, "Sensor-045", "Communication timeout", ("-", "5s"), "15 min ago", false),
        alarm(3, Medium, "Gateway-003", "Buffer at 85%", ("85%", "80%"), "1 hour ago", true),
        alarm(4, Low, "HMI-002", "Low disk space warning", ("12%", "15%"), "2 hours ago", true),
        alarm(5, Critical, "Controller-003", "Connection lost", ("-", "-"), "3 hours ago", false),
    ]
}

/// The three newest alarms, condensed for the dashboard.
pub fn recent_alarms() -> Vec<RecentAlarm> {
    alarms()
        .into_iter()
        .take(3)
        .map(|a| RecentAlarm {
            id: a.id,
            device: a.device,
            message: a.message,
            severity: a.severity,
            time: a.time,
        })
        .collect()
}

fn data_point(
    id: u32,
    name: &str,
    device: &str,
    value: &str,
    timestamp: &str,
    quality: DataQuality,
    trend: Trend,
) -> DataPoint {
    DataPoint {
        id,
        name: name.to_string(),
        device: device.to_string(),
        value: value.to_string(),
        timestamp: timestamp.to_string(),
        quality,
        trend,
    }
}

pub fn data_points() -> Vec<DataPoint> {
    use DataQuality::*;
    vec![
        data_point(1, "Temperature Sensor 1", "PLC-001", "75.2°F", "2 sec ago", Good, Trend::Up),
        data_point(2, "Pressure Gauge A", "Sensor-045", "120 PSI", "1 sec ago", Good, Trend::Stable),
        data_point(3, "Motor Speed", "HMI-002", "1450 RPM", "3 sec ago", Good, Trend::Down),
        data_point(4, "Flow Rate", "Meter-078", "45.8 L/min", "5 sec ago", Warning, Trend::Stable),
        data_point(5, "Vibration Level", "Controller-003", "2.3 mm/s", "10 min ago", Error, Trend::Up),
    ]
}

pub fn protocol_templates() -> Vec<ProtocolTemplate> {
    let template = |id, name: &str, protocol, devices, enabled, description: &str| ProtocolTemplate {
        id,
        name: name.to_string(),
        protocol,
        devices,
        enabled,
        description: description.to_string(),
    };
    vec![
        template(1, "Modbus TCP Standard", Protocol::ModbusTcp, 15, true, "Standard Modbus TCP configuration"),
        template(2, "OPC UA Server", Protocol::OpcUa, 8, true, "OPC UA server connection"),
        template(3, "MQTT Broker", Protocol::Mqtt, 22, true, "MQTT broker for IoT devices"),
        template(4, "BACnet IP", Protocol::Bacnet, 5, false, "BACnet IP for HVAC systems"),
        template(5, "SNMP v3", Protocol::Snmp, 12, true, "SNMP v3 for network devices"),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id, name: &str, email: &str, role, status, last_login: &str| User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_login: last_login.to_string(),
    };
    vec![
        user(1, "John Smith", "john.smith@company.com", UserRole::Admin, AccountStatus::Active, "2 hours ago"),
        user(2, "Sarah Johnson", "sarah.j@company.com", UserRole::Operator, AccountStatus::Active, "1 day ago"),
        user(3, "Mike Chen", "mike.chen@company.com", UserRole::Viewer, AccountStatus::Active, "3 hours ago"),
        user(4, "Emma Davis", "emma.d@company.com", UserRole::Operator, AccountStatus::Inactive, "15 days ago"),
    ]
}

pub fn roles() -> Vec<RoleSummary> {
    let role = |role, permissions: &str, users| RoleSummary {
        role,
        permissions: permissions.to_string(),
        users,
    };
    vec![
        role(UserRole::Admin, "Full system access", 1),
        role(UserRole::Operator, "Manage devices and data", 2),
        role(UserRole::Viewer, "Read-only access", 1),
    ]
}

pub fn integrations() -> Vec<Integration> {
    let integration = |id, name: &str, kind, status, description: &str, metric| Integration {
        id,
        name: name.to_string(),
        kind,
        status,
        description: description.to_string(),
        metric,
    };
    vec![
        integration(
            1,
            "REST API",
            IntegrationKind::Api,
            AccountStatus::Active,
            "RESTful API for data access",
            IntegrationMetric::Requests("12.5K/day".to_string()),
        ),
        integration(
            2,
            "Webhook - Alert System",
            IntegrationKind::Webhook,
            AccountStatus::Active,
            "Sends alarms to monitoring system",
            IntegrationMetric::Events("145".to_string()),
        ),
        integration(
            3,
            "Cloud Storage",
            IntegrationKind::Cloud,
            AccountStatus::Active,
            "AWS S3 data export",
            IntegrationMetric::Synced("2.1 GB".to_string()),
        ),
        integration(
            4,
            "Database Export",
            IntegrationKind::Database,
            AccountStatus::Inactive,
            "PostgreSQL data replication",
            IntegrationMetric::Records("0".to_string()),
        ),
    ]
}

pub fn recent_reports() -> Vec<Report> {
    let report = |id, name: &str, report_type: &str, date: &str, size: &str, format| Report {
        id,
        name: name.to_string(),
        report_type: report_type.to_string(),
        date: date.to_string(),
        size: size.to_string(),
        format,
    };
    vec![
        report(1, "Daily Operations Report", "Operational", "Today, 6:00 AM", "2.4 MB", ReportFormat::Pdf),
        report(2, "Weekly Performance Summary", "Performance", "Yesterday", "1.8 MB", ReportFormat::Excel),
        report(3, "Device Health Analysis", "Diagnostic", "2 days ago", "3.2 MB", ReportFormat::Pdf),
        report(4, "Alarm History Report", "Alarms", "3 days ago", "1.1 MB", ReportFormat::Csv),
    ]
}

pub fn report_templates() -> Vec<ReportTemplate> {
    let template = |id, name: &str, description: &str, frequency| ReportTemplate {
        id,
        name: name.to_string(),
        description: description.to_string(),
        frequency,
    };
    vec![
        template(1, "System Overview", "Comprehensive system status and metrics", ReportFrequency::Daily),
        template(2, "Device Performance", "Device uptime and performance metrics", ReportFrequency::Weekly),
        template(3, "Alarm Analysis", "Alarm trends and statistics", ReportFrequency::Monthly),
        template(4, "Compliance Report", "Regulatory compliance documentation", ReportFrequency::Monthly),
    ]
}

pub fn metric_tiles() -> Vec<MetricTile> {
    [
        ("Active Gateways", "12", "+2"),
        ("Connected Devices", "148", "+15"),
        ("Data Points/sec", "2,450", "+120"),
        ("Active Alarms", "3", "-2"),
    ]
    .into_iter()
    .map(|(name, value, change)| MetricTile {
        name: name.to_string(),
        value: value.to_string(),
        change: change.to_string(),
    })
    .collect()
}

pub fn gateway_nodes() -> Vec<GatewayNode> {
    use GatewayStatus::*;
    [
        ("Gateway-001", Online, 25, "99.9%", "12ms"),
        ("Gateway-002", Online, 18, "99.7%", "18ms"),
        ("Gateway-003", Warning, 12, "98.5%", "45ms"),
        ("Gateway-004", Offline, 0, "0%", "-"),
    ]
    .into_iter()
    .map(|(name, status, devices, uptime, latency)| GatewayNode {
        name: name.to_string(),
        status,
        devices,
        uptime: uptime.to_string(),
        latency: latency.to_string(),
    })
    .collect()
}

pub fn notifications() -> Vec<Notification> {
    [
        (1, "Device discovered: PLC-001", "2 min ago", true),
        (2, "High temperature alarm triggered", "15 min ago", true),
        (3, "Firmware update available", "1 hour ago", false),
    ]
    .into_iter()
    .map(|(id, message, time, unread)| Notification {
        id,
        message: message.to_string(),
        time: time.to_string(),
        unread,
    })
    .collect()
}

/// Devices a discovery scan "finds". Present before any scan runs.
pub fn discovered_devices() -> Vec<DiscoveredDevice> {
    [
        (1, "192.168.1.15", Protocol::ModbusTcp, DeviceType::Plc),
        (2, "192.168.1.25", Protocol::OpcUa, DeviceType::Hmi),
        (3, "192.168.1.50", Protocol::Mqtt, DeviceType::Sensor),
    ]
    .into_iter()
    .map(|(id, ip, protocol, device_type)| DiscoveredDevice {
        id,
        ip: ip.to_string(),
        protocol,
        device_type,
        selected: false,
    })
    .collect()
}

/// Entries of the header's gateway selector; exactly one is current.
pub fn gateways() -> Vec<GatewayChoice> {
    [
        ("Gateway-001", GatewayStatus::Online, true),
        ("Gateway-002", GatewayStatus::Online, false),
        ("Gateway-003", GatewayStatus::Offline, false),
    ]
    .into_iter()
    .map(|(name, status, current)| GatewayChoice {
        name: name.to_string(),
        status,
        current,
    })
    .collect()
}

/// Add-device form gateway options as `(key, label)`.
pub const GATEWAY_OPTIONS: &[(&str, &str)] = &[
    ("gateway-001", "Gateway-001"),
    ("gateway-002", "Gateway-002"),
    ("gateway-003", "Gateway-003"),
];

pub fn system_settings() -> SystemSettings {
    SystemSettings {
        gateway: GatewayIdentity {
            name: "Gateway-001".to_string(),
            id: "GW-001-ABC123".to_string(),
            location: None,
        },
        network: NetworkSettings {
            ip_address: "192.168.1.100".to_string(),
            subnet_mask: "255.255.255.0".to_string(),
            default_gateway: "192.168.1.1".to_string(),
        },
        data_collection: DataCollection {
            polling_rate_ms: 1000,
            buffer_size_mb: 100,
            retention_days: 30,
            compression: true,
        },
        system: SystemInfo {
            firmware_version: "v2.5.1".to_string(),
            uptime: "15 days, 4 hours".to_string(),
            last_backup: "2 hours ago".to_string(),
            database_size: "2.4 GB".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_unique_ids(ids: impl IntoIterator<Item = u32>) {
        let ids: Vec<u32> = ids.into_iter().collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        assert_unique_ids(devices().iter().map(|d| d.id));
        assert_unique_ids(alarms().iter().map(|a| a.id));
        assert_unique_ids(data_points().iter().map(|d| d.id));
        assert_unique_ids(protocol_templates().iter().map(|p| p.id));
        assert_unique_ids(users().iter().map(|u| u.id));
        assert_unique_ids(integrations().iter().map(|i| i.id));
        assert_unique_ids(notifications().iter().map(|n| n.id));
        assert_unique_ids(discovered_devices().iter().map(|d| d.id));
    }

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(devices().len(), 5);
        assert_eq!(alarms().len(), 5);
        assert_eq!(recent_alarms().len(), 3);
        assert_eq!(data_points().len(), 5);
        assert_eq!(protocol_templates().len(), 5);
        assert_eq!(users().len(), 4);
        assert_eq!(roles().len(), 3);
        assert_eq!(recent_reports().len(), 4);
        assert_eq!(report_templates().len(), 4);
        assert_eq!(metric_tiles().len(), 4);
        assert_eq!(gateway_nodes().len(), 4);
        assert_eq!(discovered_devices().len(), 3);
    }

    #[test]
    fn test_each_call_returns_independent_copy() {
        let mut first = alarms();
        first[0].acknowledge();
        assert!(!alarms()[0].acknowledged);
    }

    #[test]
    fn test_unread_notifications() {
        let unread = notifications().iter().filter(|n| n.unread).count();
        assert_eq!(unread, 2);
    }

    #[test]
    fn test_exactly_one_current_gateway() {
        let current: Vec<_> = gateways().into_iter().filter(|g| g.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].name, "Gateway-001");
    }

    #[test]
    fn test_role_user_counts_match_users() {
        let users = users();
        for summary in roles() {
            let holders = users.iter().filter(|u| u.role == summary.role).count() as u32;
            assert_eq!(holders, summary.users, "{}", summary.role);
        }
    }
}
