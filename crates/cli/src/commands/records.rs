//! List commands: devices, alarms, data points, protocol templates, users.
//!
//! Responsibilities:
//! - Apply the same query and category filtering the console pages use.
//!
//! Invariants:
//! - Output keeps fixture order; filtering never reorders.

use anyhow::Result;
use gateway_client::{
    AccountStatusFilter, AckFilter, EnabledFilter, FilterCategory, FilterState, LinkStatusFilter,
    Predicate, QualityFilter, SeverityFilter, fixtures,
};
use gateway_client::models::Alarm;
use tracing::info;

use super::Output;

fn filter_state<C: FilterCategory>(search: &str, category: C) -> FilterState<C> {
    let mut state = FilterState::new();
    state.set_query(search);
    state.set_category(category);
    state
}

pub fn run_devices(search: &str, status: LinkStatusFilter, out: &Output<'_>) -> Result<()> {
    let devices = fixtures::devices();
    let kept = filter_state(search, status).apply(&devices);
    info!(query = search, matched = kept.len(), "Listing devices");
    out.emit(&out.formatter().format_devices(&kept)?)
}

pub fn run_alarms(
    search: &str,
    ack: AckFilter,
    severity: SeverityFilter,
    out: &Output<'_>,
) -> Result<()> {
    let alarms = fixtures::alarms();
    let extra: [&dyn Predicate<Alarm>; 1] = [&severity];
    let kept: Vec<_> = filter_state(search, ack)
        .indices_with(&alarms, &extra)
        .into_iter()
        .map(|i| &alarms[i])
        .collect();
    info!(query = search, matched = kept.len(), "Listing alarms");
    out.emit(&out.formatter().format_alarms(&kept)?)
}

pub fn run_data(search: &str, quality: QualityFilter, out: &Output<'_>) -> Result<()> {
    let points = fixtures::data_points();
    let kept = filter_state(search, quality).apply(&points);
    info!(query = search, matched = kept.len(), "Listing data points");
    out.emit(&out.formatter().format_data_points(&kept)?)
}

pub fn run_protocols(search: &str, enabled: EnabledFilter, out: &Output<'_>) -> Result<()> {
    let templates = fixtures::protocol_templates();
    let kept = filter_state(search, enabled).apply(&templates);
    info!(query = search, matched = kept.len(), "Listing protocol templates");
    out.emit(&out.formatter().format_protocols(&kept)?)
}

pub fn run_users(search: &str, status: AccountStatusFilter, out: &Output<'_>) -> Result<()> {
    let users = fixtures::users();
    let kept = filter_state(search, status).apply(&users);
    info!(query = search, matched = kept.len(), "Listing users");
    out.emit(&out.formatter().format_users(&kept)?)
}
