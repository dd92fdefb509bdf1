//! Testing utilities for gateway-client tests.
//!
//! Proptest strategies producing arbitrary records and queries. Available
//! when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use gateway_client::testing::{arb_devices, arb_query};
//!
//! proptest! {
//!     #[test]
//!     fn filtering_never_grows(devices in arb_devices(), query in arb_query()) {
//!         // ...
//!     }
//! }
//! ```

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

use crate::filter::Categorical;
use crate::models::{
    AccountStatus, Alarm, AlarmSeverity, Device, DeviceType, LinkStatus, Protocol, User, UserRole,
};

/// Any value of a categorical enum.
pub fn arb_categorical<V: Categorical>() -> impl Strategy<Value = V> {
    select(V::ALL)
}

/// Short names drawn from a small alphabet so queries hit often.
fn arb_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 -]{0,12}"
}

/// Queries biased towards substrings that appear in generated records.
pub fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[A-Za-z0-9-]{1,3}",
        select(vec!["PLC", "plc", "Sensor", "modbus", "OPC", "-0", "timeout"])
            .prop_map(str::to_string),
    ]
}

pub fn arb_device() -> impl Strategy<Value = Device> {
    (
        any::<u32>(),
        arb_text(),
        arb_categorical::<DeviceType>(),
        arb_categorical::<Protocol>(),
        arb_categorical::<LinkStatus>(),
    )
        .prop_map(|(id, name, device_type, protocol, status)| Device {
            id,
            name,
            device_type,
            protocol,
            ip: "192.168.1.1".to_string(),
            status,
            gateway: "Gateway-001".to_string(),
            last_seen: "1 min ago".to_string(),
        })
}

pub fn arb_devices() -> impl Strategy<Value = Vec<Device>> {
    vec(arb_device(), 0..20)
}

pub fn arb_alarm() -> impl Strategy<Value = Alarm> {
    (
        any::<u32>(),
        arb_categorical::<AlarmSeverity>(),
        arb_text(),
        arb_text(),
        any::<bool>(),
    )
        .prop_map(|(id, severity, device, message, acknowledged)| Alarm {
            id,
            severity,
            device,
            message,
            value: "-".to_string(),
            threshold: "-".to_string(),
            time: "now".to_string(),
            acknowledged,
        })
}

pub fn arb_alarms() -> impl Strategy<Value = Vec<Alarm>> {
    vec(arb_alarm(), 0..20)
}

pub fn arb_users() -> impl Strategy<Value = Vec<User>> {
    vec(
        (
            any::<u32>(),
            arb_text(),
            "[a-z.]{1,8}@[a-z]{1,6}\\.com",
            arb_categorical::<UserRole>(),
            arb_categorical::<AccountStatus>(),
        )
            .prop_map(|(id, name, email, role, status)| User {
                id,
                name,
                email,
                role,
                status,
                last_login: "never".to_string(),
            }),
        0..12,
    )
}
