//! Outbound integrations (APIs, webhooks, cloud sync, database export).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::common::AccountStatus;
use crate::macros::labeled_enum;

labeled_enum! {
    pub enum IntegrationKind: "integration kind" {
        Api => ("api", "API"),
        Webhook => ("webhook", "Webhook"),
        Cloud => ("cloud", "Cloud"),
        Database => ("database", "Database"),
    }
}

/// The single throughput figure each integration card shows.
///
/// Which figure applies depends on the kind of integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "metric", content = "value", rename_all = "snake_case")]
pub enum IntegrationMetric {
    Requests(String),
    Events(String),
    Synced(String),
    Records(String),
}

impl fmt::Display for IntegrationMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrationMetric::Requests(v) => write!(f, "Requests: {v}"),
            IntegrationMetric::Events(v) => write!(f, "Events: {v}"),
            IntegrationMetric::Synced(v) => write!(f, "Synced: {v}"),
            IntegrationMetric::Records(v) => write!(f, "Records: {v}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub id: u32,
    pub name: String,
    pub kind: IntegrationKind,
    pub status: AccountStatus,
    pub description: String,
    pub metric: IntegrationMetric,
}
