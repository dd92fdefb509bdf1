use std::fmt;

use serde::{Serialize, Serializer};

/// A page of the console, resolved from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Dashboard,
    Devices,
    AddDevice,
    Discovery,
    Alarms,
    Data,
    Protocols,
    Reports,
    Integrations,
    Users,
    Settings,
    /// Any path without a page. Keeps the path that was requested.
    NotFound(String),
}

/// Quick links offered on the not-found page as `(label, path)`.
///
/// `/monitoring` has no page either; following it lands on not-found again.
pub const NOT_FOUND_LINKS: &[(&str, &str)] = &[
    ("Dashboard", "/dashboard"),
    ("Devices", "/devices"),
    ("Monitoring", "/monitoring"),
    ("Alarms", "/alarms"),
    ("Settings", "/settings"),
];

impl Route {
    /// Every routable page, in sidebar order.
    pub const PAGES: &'static [Route] = &[
        Route::Dashboard,
        Route::Devices,
        Route::AddDevice,
        Route::Discovery,
        Route::Protocols,
        Route::Data,
        Route::Alarms,
        Route::Reports,
        Route::Integrations,
        Route::Users,
        Route::Settings,
    ];

    /// Resolve a path. `/` is the dashboard; a single trailing slash is ignored.
    pub fn from_path(path: &str) -> Route {
        let normalized = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        match normalized {
            "/" | "/dashboard" => Route::Dashboard,
            "/devices" => Route::Devices,
            "/devices/add" => Route::AddDevice,
            "/devices/discovery" => Route::Discovery,
            "/alarms" => Route::Alarms,
            "/data" => Route::Data,
            "/protocols" => Route::Protocols,
            "/reports" => Route::Reports,
            "/integrations" => Route::Integrations,
            "/users" => Route::Users,
            "/settings" => Route::Settings,
            other => Route::NotFound(other.to_string()),
        }
    }

    /// Canonical path; for not-found, the path that was requested.
    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Devices => "/devices",
            Route::AddDevice => "/devices/add",
            Route::Discovery => "/devices/discovery",
            Route::Alarms => "/alarms",
            Route::Data => "/data",
            Route::Protocols => "/protocols",
            Route::Reports => "/reports",
            Route::Integrations => "/integrations",
            Route::Users => "/users",
            Route::Settings => "/settings",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Devices => "Devices",
            Route::AddDevice => "Add New Device",
            Route::Discovery => "Device Discovery",
            Route::Alarms => "Alarms & Events",
            Route::Data => "Data Management",
            Route::Protocols => "Protocol Configuration",
            Route::Reports => "Reports & Analytics",
            Route::Integrations => "Integrations",
            Route::Users => "Users & Roles",
            Route::Settings => "System Settings",
            Route::NotFound(_) => "Page Not Found",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}
