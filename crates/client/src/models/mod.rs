//! Data models for the gateway console.
//!
//! Every record is flat and owned; cross-record references (`gateway`,
//! `device`) are display strings with no enforced relationship.

mod alarms;
mod common;
mod dashboards;
mod data;
mod devices;
mod discovery;
mod integrations;
mod notifications;
mod protocols;
mod reports;
mod settings;
mod users;

pub use alarms::Alarm;
pub use common::{AccountStatus, LinkStatus};
pub use dashboards::{GatewayChoice, GatewayNode, MetricTile, RecentAlarm};
pub use data::{DataPoint, DataQuality, Trend};
pub use devices::{Device, DeviceType, Protocol};
pub use discovery::DiscoveredDevice;
pub use integrations::{Integration, IntegrationKind, IntegrationMetric};
pub use notifications::Notification;
pub use protocols::ProtocolTemplate;
pub use reports::{Report, ReportFormat, ReportFrequency, ReportTemplate};
pub use settings::{DataCollection, GatewayIdentity, NetworkSettings, SystemInfo, SystemSettings};
pub use users::{RoleSummary, User, UserRole};

pub use crate::schema::{AlarmSeverity, GatewayStatus};
