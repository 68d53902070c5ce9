//! Domain records stored one per line, plus the raw event draft.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Timestamp};

/// Registered user. Identified by name; names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, also used as the participation key.
    pub name: String,
    /// City of residence.
    pub city: String,
    /// Contact e-mail, not validated.
    pub email: String,
}

/// Scheduled event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name, also used as the participation key.
    pub name: String,
    /// Free-form address.
    pub address: String,
    /// Category from the closed set.
    pub category: Category,
    /// Start time.
    pub date_time: Timestamp,
    /// Free-form description.
    pub description: String,
}

/// Association of one event name with one user name.
///
/// Neither side is checked against the user or event stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participation {
    /// Name of the event.
    pub event_name: String,
    /// Name of the participating user.
    pub user_name: String,
}

/// Unvalidated event input as typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    /// Event name.
    pub name: String,
    /// Free-form address.
    pub address: String,
    /// Category label, validated on add.
    pub category: String,
    /// `dd/MM/yyyy HH:mm` string, validated on add.
    pub date_time: String,
    /// Free-form description.
    pub description: String,
}

impl Participation {
    /// Builds a participation from an event name and a user name.
    pub fn new(event_name: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            user_name: user_name.into(),
        }
    }
}
