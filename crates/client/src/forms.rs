//! The add-device form.
//!
//! Responsibilities:
//! - Hold field values, focus and select-option cycling.
//! - Check required fields on submit.
//!
//! Does NOT handle:
//! - Persisting the device. A valid submission produces a [`DeviceDraft`]
//!   that the caller logs before returning to the device list.
//!
//! Invariants:
//! - Validation checks presence only; formats (IP, port range) are not checked.
//! - Numeric fields accept digits only.

use serde::Serialize;

use crate::error::FormError;
use crate::fixtures::GATEWAY_OPTIONS;
use crate::models::{DeviceType, Protocol};

/// Fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    DeviceType,
    Description,
    Protocol,
    Gateway,
    IpAddress,
    Port,
    PollingInterval,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::Name,
        FormField::DeviceType,
        FormField::Description,
        FormField::Protocol,
        FormField::Gateway,
        FormField::IpAddress,
        FormField::Port,
        FormField::PollingInterval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Device Name",
            FormField::DeviceType => "Device Type",
            FormField::Description => "Description",
            FormField::Protocol => "Protocol",
            FormField::Gateway => "Gateway",
            FormField::IpAddress => "IP Address",
            FormField::Port => "Port",
            FormField::PollingInterval => "Polling Interval (ms)",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Description)
    }

    /// Select fields cycle through fixed options instead of taking text.
    pub fn is_select(self) -> bool {
        matches!(
            self,
            FormField::DeviceType | FormField::Protocol | FormField::Gateway
        )
    }

    fn is_numeric(self) -> bool {
        matches!(self, FormField::Port | FormField::PollingInterval)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "e.g., PLC-001",
            FormField::Description => "Optional device description",
            FormField::IpAddress => "192.168.1.10",
            FormField::Port => "502",
            FormField::PollingInterval => "1000",
            _ => "",
        }
    }
}

/// A submitted, presence-checked device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceDraft {
    pub name: String,
    pub device_type: DeviceType,
    pub protocol: Protocol,
    pub gateway: String,
    pub ip_address: String,
    pub port: String,
    pub polling_interval_ms: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDeviceForm {
    name: String,
    device_type: DeviceType,
    description: String,
    protocol: Protocol,
    gateway: usize,
    ip_address: String,
    port: String,
    polling_interval: String,
    focus: usize,
}

impl Default for AddDeviceForm {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle<T: Copy + PartialEq>(options: &[T], current: T, forward: bool) -> T {
    let len = options.len();
    let pos = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    options[next]
}

impl AddDeviceForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            device_type: DeviceType::Plc,
            description: String::new(),
            protocol: Protocol::ModbusTcp,
            gateway: 0,
            ip_address: String::new(),
            port: "502".to_string(),
            polling_interval: "1000".to_string(),
            focus: 0,
        }
    }

    pub fn focused(&self) -> FormField {
        FormField::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Display value of a field.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::DeviceType => self.device_type.label(),
            FormField::Description => &self.description,
            FormField::Protocol => self.protocol.label(),
            FormField::Gateway => GATEWAY_OPTIONS[self.gateway].1,
            FormField::IpAddress => &self.ip_address,
            FormField::Port => &self.port,
            FormField::PollingInterval => &self.polling_interval,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::IpAddress => Some(&mut self.ip_address),
            FormField::Port => Some(&mut self.port),
            FormField::PollingInterval => Some(&mut self.polling_interval),
            _ => None,
        }
    }

    /// Type into the focused text field. Ignored on selects, and for
    /// non-digits on numeric fields.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused();
        if field.is_numeric() && !c.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused();
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    /// Move the focused select to its next (or previous) option.
    pub fn cycle_option(&mut self, forward: bool) {
        match self.focused() {
            FormField::DeviceType => {
                self.device_type = cycle(DeviceType::ALL, self.device_type, forward);
            }
            FormField::Protocol => {
                self.protocol = cycle(Protocol::ALL, self.protocol, forward);
            }
            FormField::Gateway => {
                let len = GATEWAY_OPTIONS.len();
                self.gateway = if forward {
                    (self.gateway + 1) % len
                } else {
                    (self.gateway + len - 1) % len
                };
            }
            _ => {}
        }
    }

    /// Move focus to `field`.
    pub fn focus_field(&mut self, field: FormField) {
        if let Some(pos) = FormField::ALL.iter().position(|f| *f == field) {
            self.focus = pos;
        }
    }

    /// First required field that is empty, in form order. Whitespace counts
    /// as a value.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .find(|f| self.value(*f).is_empty())
    }

    /// Check required fields, first missing field wins.
    pub fn validate(&self) -> Result<DeviceDraft, FormError> {
        if let Some(field) = self.first_missing() {
            return Err(FormError::MissingField(field.label()));
        }
        let description = self.description.trim();
        Ok(DeviceDraft {
            name: self.name.clone(),
            device_type: self.device_type,
            protocol: self.protocol,
            gateway: GATEWAY_OPTIONS[self.gateway].0.to_string(),
            ip_address: self.ip_address.clone(),
            port: self.port.clone(),
            polling_interval_ms: self.polling_interval.clone(),
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}
