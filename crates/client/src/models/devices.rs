//! Field devices and the protocols they speak.

use serde::{Deserialize, Serialize};

use super::common::LinkStatus;
use crate::macros::labeled_enum;

labeled_enum! {
    /// Hardware category of a field device.
    pub enum DeviceType: "device type" {
        Plc => ("PLC", "PLC"),
        Sensor => ("Sensor", "Sensor"),
        Hmi => ("HMI", "HMI"),
        Controller => ("Controller", "Controller"),
        Meter => ("Meter", "Meter"),
        Actuator => ("Actuator", "Actuator"),
    }
}

labeled_enum! {
    /// Protocols offered by the console. The key is the add-device form value.
    pub enum Protocol: "protocol" {
        ModbusTcp => ("modbus_tcp", "Modbus TCP"),
        ModbusRtu => ("modbus_rtu", "Modbus RTU"),
        OpcUa => ("opcua", "OPC UA"),
        Mqtt => ("mqtt", "MQTT"),
        Bacnet => ("bacnet", "BACnet"),
        Snmp => ("snmp", "SNMP"),
    }
}

/// A device registered with one of the gateways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub protocol: Protocol,
    pub ip: String,
    pub status: LinkStatus,
    pub gateway: String,
    pub last_seen: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_device() {
        let json = r#"{
            "id": 1,
            "name": "PLC-001",
            "type": "PLC",
            "protocol": "modbus_tcp",
            "ip": "192.168.1.10",
            "status": "online",
            "gateway": "Gateway-001",
            "last_seen": "2 min ago"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_type, DeviceType::Plc);
        assert_eq!(device.protocol, Protocol::ModbusTcp);
        assert_eq!(device.status, LinkStatus::Online);
    }

    #[test]
    fn test_protocol_label_and_key() {
        assert_eq!(Protocol::OpcUa.label(), "OPC UA");
        assert_eq!(Protocol::OpcUa.as_str(), "opcua");
        assert_eq!("Modbus RTU".parse::<Protocol>().unwrap(), Protocol::ModbusRtu);
    }
}
