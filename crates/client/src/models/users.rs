//! User accounts and role summaries.

use serde::{Deserialize, Serialize};

use super::common::AccountStatus;
use crate::macros::labeled_enum;

labeled_enum! {
    pub enum UserRole: "role" {
        Admin => ("Admin", "Admin"),
        Operator => ("Operator", "Operator"),
        Viewer => ("Viewer", "Viewer"),
    }
}

/// A console user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub last_login: String,
}

/// Permission summary for a role, with the number of users holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub role: UserRole,
    pub permissions: String,
    pub users: u32,
}
