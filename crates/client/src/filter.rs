//! Filter/search engine shared by every list page.
//!
//! Responsibilities:
//! - Match records against a case-insensitive substring query over each
//!   record type's designated text fields.
//! - Apply categorical predicates (status, severity, acknowledgement).
//! - Hold the per-page query/category state and produce filtered views.
//!
//! Does NOT handle:
//! - Ranking, fuzzy matching, pagination or memoization. Views are recomputed
//!   on every change.
//!
//! Invariants:
//! - A filtered view is an order-preserving subsequence of its input.
//! - The empty query matches every record.
//! - A record is kept iff the query matches at least one designated field AND
//!   every categorical predicate holds.
//! - `All` categories never exclude anything.

use std::fmt::Debug;
use std::str::FromStr;

use tracing::debug;

use crate::error::GatewayError;
use crate::models::{
    AccountStatus, Alarm, AlarmSeverity, DataPoint, DataQuality, Device, LinkStatus,
    ProtocolTemplate, User,
};

/// Closed enum with a stable key, a display label and a declaration order.
pub trait Categorical: Copy + Eq + Debug + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str;
}

/// Parse a categorical value from its key or label, case-insensitively.
pub fn parse_categorical<V: Categorical>(s: &str, kind: &'static str) -> Result<V, GatewayError> {
    let needle = s.trim();
    V::ALL
        .iter()
        .copied()
        .find(|v| v.as_str().eq_ignore_ascii_case(needle) || v.label().eq_ignore_ascii_case(needle))
        .ok_or_else(|| {
            let expected: Vec<&str> = V::ALL.iter().map(|v| v.as_str()).collect();
            GatewayError::invalid_value(kind, needle, &expected)
        })
}

/// Records that take part in free-text search.
pub trait Searchable {
    /// The text fields the query is matched against.
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Device {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.device_type.label(), self.protocol.label()]
    }
}

impl Searchable for Alarm {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.device.as_str(), self.message.as_str()]
    }
}

impl Searchable for DataPoint {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.device.as_str()]
    }
}

impl Searchable for ProtocolTemplate {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.protocol.label()]
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// A categorical filter over records of type `T`.
pub trait Predicate<T> {
    fn matches(&self, record: &T) -> bool;
}

/// A page's category selector: cycles through its options and shows a label.
pub trait FilterCategory: Copy + Default + PartialEq + Debug {
    /// The next option, wrapping back to the first.
    fn next(self) -> Self;

    fn label(self) -> &'static str;
}

/// Check whether `query` occurs in any of the record's search fields,
/// ignoring case. The empty query always matches.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    record
        .search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Indices (in original order) of the records kept by `query` and `predicates`.
pub fn filter_indices<T: Searchable>(
    records: &[T],
    query: &str,
    predicates: &[&dyn Predicate<T>],
) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            matches_query(*record, query) && predicates.iter().all(|p| p.matches(record))
        })
        .map(|(i, _)| i)
        .collect()
}

/// Borrowed records kept by `query` and `predicates`, in original order.
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    query: &str,
    predicates: &[&dyn Predicate<T>],
) -> Vec<&'a T> {
    filter_indices(records, query, predicates)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Count records satisfying `pred`. Used for the summary tiles, which always
/// count the unfiltered list.
pub fn count_where<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}

// =============================================================================
// Categories
// =============================================================================

/// Acknowledgement tab on the alarms page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AckFilter {
    #[default]
    All,
    Unacknowledged,
    Acknowledged,
}

impl AckFilter {
    pub const ALL: [AckFilter; 3] = [
        AckFilter::All,
        AckFilter::Unacknowledged,
        AckFilter::Acknowledged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AckFilter::All => "all",
            AckFilter::Unacknowledged => "unacknowledged",
            AckFilter::Acknowledged => "acknowledged",
        }
    }
}

impl FilterCategory for AckFilter {
    fn next(self) -> Self {
        match self {
            AckFilter::All => AckFilter::Unacknowledged,
            AckFilter::Unacknowledged => AckFilter::Acknowledged,
            AckFilter::Acknowledged => AckFilter::All,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AckFilter::All => "All",
            AckFilter::Unacknowledged => "Unacknowledged",
            AckFilter::Acknowledged => "Acknowledged",
        }
    }
}

impl Predicate<Alarm> for AckFilter {
    fn matches(&self, alarm: &Alarm) -> bool {
        match self {
            AckFilter::All => true,
            AckFilter::Unacknowledged => !alarm.acknowledged,
            AckFilter::Acknowledged => alarm.acknowledged,
        }
    }
}

impl FromStr for AckFilter {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        AckFilter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                GatewayError::invalid_value(
                    "acknowledgement filter",
                    needle,
                    &AckFilter::ALL.map(AckFilter::as_str),
                )
            })
    }
}

/// Enabled/disabled selector for protocol templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnabledFilter {
    #[default]
    All,
    Enabled,
    Disabled,
}

impl EnabledFilter {
    pub const ALL: [EnabledFilter; 3] = [
        EnabledFilter::All,
        EnabledFilter::Enabled,
        EnabledFilter::Disabled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnabledFilter::All => "all",
            EnabledFilter::Enabled => "enabled",
            EnabledFilter::Disabled => "disabled",
        }
    }
}

impl FilterCategory for EnabledFilter {
    fn next(self) -> Self {
        match self {
            EnabledFilter::All => EnabledFilter::Enabled,
            EnabledFilter::Enabled => EnabledFilter::Disabled,
            EnabledFilter::Disabled => EnabledFilter::All,
        }
    }

    fn label(self) -> &'static str {
        match self {
            EnabledFilter::All => "All",
            EnabledFilter::Enabled => "Enabled",
            EnabledFilter::Disabled => "Disabled",
        }
    }
}

impl Predicate<ProtocolTemplate> for EnabledFilter {
    fn matches(&self, template: &ProtocolTemplate) -> bool {
        match self {
            EnabledFilter::All => true,
            EnabledFilter::Enabled => template.enabled,
            EnabledFilter::Disabled => !template.enabled,
        }
    }
}

impl FromStr for EnabledFilter {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        EnabledFilter::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                GatewayError::invalid_value(
                    "enabled filter",
                    needle,
                    &EnabledFilter::ALL.map(EnabledFilter::as_str),
                )
            })
    }
}

/// "All" or exactly one value of a categorical field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFilter<V> {
    All,
    Only(V),
}

impl<V> Default for ValueFilter<V> {
    fn default() -> Self {
        ValueFilter::All
    }
}

impl<V: Categorical> ValueFilter<V> {
    /// Whether `value` passes the filter.
    pub fn accepts(&self, value: V) -> bool {
        match self {
            ValueFilter::All => true,
            ValueFilter::Only(wanted) => *wanted == value,
        }
    }
}

impl<V: Categorical> FilterCategory for ValueFilter<V> {
    /// `All` → first value → … → last value → `All`.
    fn next(self) -> Self {
        match self {
            ValueFilter::All => V::ALL.first().copied().map_or(ValueFilter::All, ValueFilter::Only),
            ValueFilter::Only(current) => V::ALL
                .iter()
                .position(|v| *v == current)
                .and_then(|i| V::ALL.get(i + 1))
                .copied()
                .map_or(ValueFilter::All, ValueFilter::Only),
        }
    }

    fn label(self) -> &'static str {
        match self {
            ValueFilter::All => "All",
            ValueFilter::Only(v) => v.label(),
        }
    }
}

impl<V: Categorical> FromStr for ValueFilter<V> {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ValueFilter::All);
        }
        parse_categorical(s, "filter value").map(ValueFilter::Only)
    }
}

pub type SeverityFilter = ValueFilter<AlarmSeverity>;
pub type LinkStatusFilter = ValueFilter<LinkStatus>;
pub type QualityFilter = ValueFilter<DataQuality>;
pub type AccountStatusFilter = ValueFilter<AccountStatus>;

impl Predicate<Alarm> for SeverityFilter {
    fn matches(&self, alarm: &Alarm) -> bool {
        self.accepts(alarm.severity)
    }
}

impl Predicate<Device> for LinkStatusFilter {
    fn matches(&self, device: &Device) -> bool {
        self.accepts(device.status)
    }
}

impl Predicate<DataPoint> for QualityFilter {
    fn matches(&self, point: &DataPoint) -> bool {
        self.accepts(point.quality)
    }
}

impl Predicate<User> for AccountStatusFilter {
    fn matches(&self, user: &User) -> bool {
        self.accepts(user.status)
    }
}

// =============================================================================
// Page state
// =============================================================================

/// Query text plus one category selector, owned by a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState<C> {
    query: String,
    category: C,
}

impl<C: FilterCategory> FilterState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> C {
        self.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_category(&mut self, category: C) {
        self.category = category;
    }

    pub fn cycle_category(&mut self) -> C {
        self.category = self.category.next();
        self.category
    }

    /// Whether either the query or the category narrows the view.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != C::default()
    }

    /// Indices of the kept records, with any extra predicates applied on top
    /// of the category.
    pub fn indices_with<T>(&self, records: &[T], extra: &[&dyn Predicate<T>]) -> Vec<usize>
    where
        T: Searchable,
        C: Predicate<T>,
    {
        let mut predicates: Vec<&dyn Predicate<T>> = Vec::with_capacity(extra.len() + 1);
        predicates.push(&self.category);
        predicates.extend_from_slice(extra);
        let indices = filter_indices(records, &self.query, &predicates);
        debug!(
            query = %self.query,
            category = self.category.label(),
            matched = indices.len(),
            total = records.len(),
            "Recomputed filtered view"
        );
        indices
    }

    pub fn indices<T>(&self, records: &[T]) -> Vec<usize>
    where
        T: Searchable,
        C: Predicate<T>,
    {
        self.indices_with(records, &[])
    }

    pub fn apply<'a, T>(&self, records: &'a [T]) -> Vec<&'a T>
    where
        T: Searchable,
        C: Predicate<T>,
    {
        self.indices(records).into_iter().map(|i| &records[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_query_plc_matches_single_device() {
        let devices = fixtures::devices();
        let kept = filter_records(&devices, "PLC", &[]);
        let names: Vec<&str> = kept.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["PLC-001"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let devices = fixtures::devices();
        assert_eq!(filter_indices(&devices, "plc", &[]), vec![0]);
        assert_eq!(filter_indices(&devices, "mOdBuS", &[]), vec![0, 4]);
    }

    #[test]
    fn test_device_query_matches_protocol_label() {
        let devices = fixtures::devices();
        let kept = filter_records(&devices, "opc ua", &[]);
        let names: Vec<&str> = kept.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["HMI-002"]);
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let alarms = fixtures::alarms();
        assert_eq!(filter_indices(&alarms, "", &[]), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let users = fixtures::users();
        assert!(filter_indices(&users, "nobody@nowhere", &[]).is_empty());
    }

    #[test]
    fn test_unacknowledged_alarms() {
        let alarms = fixtures::alarms();
        let kept = filter_records(&alarms, "", &[&AckFilter::Unacknowledged]);
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|a| !a.acknowledged));
        let ids: Vec<u32> = kept.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_query_and_category_combine_with_and() {
        let alarms = fixtures::alarms();
        let kept = filter_indices(&alarms, "connection", &[&AckFilter::Unacknowledged]);
        assert_eq!(kept, vec![4]);
        let kept = filter_indices(&alarms, "connection", &[&AckFilter::Acknowledged]);
        assert!(kept.is_empty());
    }

    #[test]
    fn test_alarm_query_ignores_non_designated_fields() {
        let alarms = fixtures::alarms();
        // "95°F" is a value, not a designated search field.
        assert!(filter_indices(&alarms, "95°F", &[]).is_empty());
    }

    #[test]
    fn test_severity_filter() {
        let alarms = fixtures::alarms();
        let critical = SeverityFilter::Only(AlarmSeverity::Critical);
        assert_eq!(filter_indices(&alarms, "", &[&critical]), vec![0, 4]);
        let both: [&dyn Predicate<Alarm>; 2] = [&critical, &AckFilter::Acknowledged];
        assert!(filter_indices(&alarms, "", &both).is_empty());
    }

    #[test]
    fn test_user_search_matches_email() {
        let users = fixtures::users();
        let kept = filter_records(&users, "sarah.j@", &[]);
        let names: Vec<&str> = kept.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Johnson"]);
    }

    #[test]
    fn test_value_filter_cycles_through_all_values() {
        let mut filter = LinkStatusFilter::default();
        let mut seen = vec![filter.label()];
        for _ in 0..LinkStatus::ALL.len() {
            filter = filter.next();
            seen.push(filter.label());
        }
        assert_eq!(seen, vec!["All", "Online", "Warning", "Offline"]);
        assert_eq!(filter.next(), LinkStatusFilter::All);
    }

    #[test]
    fn test_ack_filter_cycle_wraps() {
        assert_eq!(AckFilter::All.next().next().next(), AckFilter::All);
    }

    #[test]
    fn test_filters_parse_from_cli_values() {
        assert_eq!("unacknowledged".parse::<AckFilter>().unwrap(), AckFilter::Unacknowledged);
        assert_eq!("all".parse::<QualityFilter>().unwrap(), QualityFilter::All);
        assert_eq!(
            "warning".parse::<QualityFilter>().unwrap(),
            QualityFilter::Only(DataQuality::Warning)
        );
        assert_eq!("disabled".parse::<EnabledFilter>().unwrap(), EnabledFilter::Disabled);
        assert!("sometimes".parse::<AckFilter>().is_err());
    }

    #[test]
    fn test_filter_state_editing() {
        let mut state: FilterState<QualityFilter> = FilterState::new();
        assert!(!state.is_active());
        for c in "motor".chars() {
            state.push_char(c);
        }
        assert_eq!(state.query(), "motor");
        assert!(state.is_active());
        state.pop_char();
        assert_eq!(state.query(), "moto");
        state.clear_query();
        assert_eq!(state.query(), "");
        assert_eq!(state.cycle_category(), QualityFilter::Only(DataQuality::Good));
        assert!(state.is_active());
    }

    #[test]
    fn test_filter_state_apply() {
        let points = fixtures::data_points();
        let mut state: FilterState<QualityFilter> = FilterState::new();
        state.set_category(QualityFilter::Only(DataQuality::Good));
        state.set_query("s");
        let kept = state.apply(&points);
        let names: Vec<&str> = kept.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Temperature Sensor 1", "Pressure Gauge A", "Motor Speed"]);
    }

    #[test]
    fn test_enabled_filter() {
        let templates = fixtures::protocol_templates();
        assert_eq!(filter_indices(&templates, "", &[&EnabledFilter::Disabled]), vec![3]);
    }

    #[test]
    fn test_count_where_uses_full_list() {
        let devices = fixtures::devices();
        assert_eq!(count_where(&devices, |d| d.status == LinkStatus::Online), 3);
        assert_eq!(count_where(&devices, |d| d.status == LinkStatus::Warning), 1);
        assert_eq!(count_where(&devices, |d| d.status == LinkStatus::Offline), 1);
    }
}
