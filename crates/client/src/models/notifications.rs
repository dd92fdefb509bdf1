use serde::{Deserialize, Serialize};

/// Header notification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub time: String,
    pub unread: bool,
}
