//! Domain library for the IIoT gateway console.
//!
//! This crate holds everything the console shows that is not rendering:
//! the mock record sets, the filter/search engine shared by the list pages,
//! the navigation trees and their state, the simulated connection and
//! discovery timers, the add-device form, and the declared backend schema.

mod macros;

pub mod error;
pub mod filter;
pub mod fixtures;
pub mod forms;
pub mod models;
pub mod navigation;
pub mod schema;
pub mod status;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use error::{FormError, GatewayError, NavError, Result, ScanError};
pub use filter::{
    AccountStatusFilter, AckFilter, Categorical, EnabledFilter, FilterCategory, FilterState,
    LinkStatusFilter, Predicate, QualityFilter, Searchable, SeverityFilter, ValueFilter,
    count_where, filter_indices, filter_records, matches_query,
};
pub use forms::{AddDeviceForm, DeviceDraft, FormField};
pub use navigation::{
    ExpandState, NavEntry, NavIcon, NavLink, NavRow, NavRowKind, NavTree, Route, SidebarState,
    visible_rows,
};
pub use status::{
    ConnectionMonitor, ConnectionStatus, DiscoveryScan, ProbeOutcome, ScanConfig, ScanOutcome,
    ScanPhase, probe_connection, run_scan,
};
