//! Shared primitive types: the event category set and timestamps.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wall-clock timestamp with minute precision, no timezone.
pub type Timestamp = NaiveDateTime;

/// `chrono` pattern for the `dd/MM/yyyy HH:mm` on-disk date format.
pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Closed set of categories an event may be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// "Festas".
    Festas,
    /// "Eventos esportivos".
    EventosEsportivos,
    /// "Shows".
    Shows,
    /// "Casamentos".
    Casamentos,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Festas,
        Category::EventosEsportivos,
        Category::Shows,
        Category::Casamentos,
    ];

    /// Stored label for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Festas => "Festas",
            Category::EventosEsportivos => "Eventos esportivos",
            Category::Shows => "Shows",
            Category::Casamentos => "Casamentos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label that is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Exact, case-sensitive match against the stored labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Parses a `dd/MM/yyyy HH:mm` string.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
}

/// Formats a timestamp as `dd/MM/yyyy HH:mm`.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.format(DATE_FORMAT).to_string()
}
