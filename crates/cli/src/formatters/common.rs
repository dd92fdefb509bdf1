//! Column layout shared by the table and CSV formatters.

use gateway_client::models::{Alarm, DataPoint, Device, DiscoveredDevice, ProtocolTemplate, User};

use super::{NavRowOutput, SchemaEnum, SchemaTable};

/// A record that prints as one row under fixed headers.
pub(super) trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

impl<T: Tabular> Tabular for &T {
    const HEADERS: &'static [&'static str] = T::HEADERS;

    fn row(&self) -> Vec<String> {
        (**self).row()
    }
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

impl Tabular for Device {
    const HEADERS: &'static [&'static str] =
        &["NAME", "TYPE", "PROTOCOL", "IP", "STATUS", "GATEWAY", "LAST SEEN"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.device_type.label().to_string(),
            self.protocol.label().to_string(),
            self.ip.clone(),
            self.status.label().to_string(),
            self.gateway.clone(),
            self.last_seen.clone(),
        ]
    }
}

impl Tabular for Alarm {
    const HEADERS: &'static [&'static str] =
        &["SEVERITY", "DEVICE", "MESSAGE", "VALUE", "THRESHOLD", "TIME", "ACKNOWLEDGED"];

    fn row(&self) -> Vec<String> {
        vec![
            self.severity.label().to_string(),
            self.device.clone(),
            self.message.clone(),
            self.value.clone(),
            self.threshold.clone(),
            self.time.clone(),
            yes_no(self.acknowledged),
        ]
    }
}

impl Tabular for DataPoint {
    const HEADERS: &'static [&'static str] =
        &["NAME", "DEVICE", "VALUE", "TIMESTAMP", "QUALITY", "TREND"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.device.clone(),
            self.value.clone(),
            self.timestamp.clone(),
            self.quality.label().to_string(),
            self.trend.label().to_string(),
        ]
    }
}

impl Tabular for ProtocolTemplate {
    const HEADERS: &'static [&'static str] =
        &["NAME", "PROTOCOL", "DEVICES", "ENABLED", "DESCRIPTION"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.protocol.label().to_string(),
            self.devices.to_string(),
            yes_no(self.enabled),
            self.description.clone(),
        ]
    }
}

impl Tabular for User {
    const HEADERS: &'static [&'static str] = &["NAME", "EMAIL", "ROLE", "STATUS", "LAST LOGIN"];

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.label().to_string(),
            self.status.label().to_string(),
            self.last_login.clone(),
        ]
    }
}

impl Tabular for DiscoveredDevice {
    const HEADERS: &'static [&'static str] = &["IP", "PROTOCOL", "TYPE", "SELECTED"];

    fn row(&self) -> Vec<String> {
        vec![
            self.ip.clone(),
            self.protocol.label().to_string(),
            self.device_type.label().to_string(),
            yes_no(self.selected),
        ]
    }
}

impl Tabular for NavRowOutput {
    const HEADERS: &'static [&'static str] = &["ENTRY", "PATH", "STATE"];

    fn row(&self) -> Vec<String> {
        let indent = "  ".repeat(usize::from(self.depth));
        let name = match self.expanded {
            Some(true) => format!("{indent}▾ {}", self.name),
            Some(false) => format!("{indent}▸ {}", self.name),
            None => format!("{indent}{}", self.name),
        };
        let mut state = Vec::new();
        if self.active {
            state.push("active");
        }
        if self.footer {
            state.push("footer");
        }
        vec![
            name,
            self.path.clone().unwrap_or_else(|| "-".to_string()),
            state.join(", "),
        ]
    }
}

impl Tabular for SchemaTable {
    const HEADERS: &'static [&'static str] = &["TABLE", "COLUMNS"];

    fn row(&self) -> Vec<String> {
        vec![self.name.to_string(), self.columns.join(", ")]
    }
}

impl Tabular for SchemaEnum {
    const HEADERS: &'static [&'static str] = &["ENUM", "VALUES"];

    fn row(&self) -> Vec<String> {
        vec![self.name.to_string(), self.values.join(", ")]
    }
}
