//! Status enums shared across several record types.

use crate::macros::labeled_enum;

labeled_enum! {
    /// Reachability shown on device rows.
    pub enum LinkStatus: "status" {
        Online => ("online", "Online"),
        Warning => ("warning", "Warning"),
        Offline => ("offline", "Offline"),
    }
}

labeled_enum! {
    /// Whether a user account or integration is enabled.
    pub enum AccountStatus: "account status" {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
    }
}

impl AccountStatus {
    pub fn is_active(self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}
