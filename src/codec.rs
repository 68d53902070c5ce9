//! Semicolon-delimited line codec for stored records.

use thiserror::Error;

use crate::{
    record::{Event, Participation, User},
    types::{Category, UnknownCategory, format_timestamp, parse_timestamp},
};

/// Field separator on disk.
pub const FIELD_SEPARATOR: char = ';';

/// Reasons a stored line cannot be turned back into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Line split into the wrong number of fields.
    #[error("{kind} line has {found} fields, expected {expected}")]
    FieldCount {
        /// Record kind being decoded.
        kind: &'static str,
        /// Fields required by the kind.
        expected: usize,
        /// Fields present on the line.
        found: usize,
    },
    /// Timestamp field is not `dd/MM/yyyy HH:mm`.
    #[error("invalid timestamp {raw:?}: {source}")]
    Timestamp {
        /// Field as stored.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Category field is outside the closed set.
    #[error(transparent)]
    Category(#[from] UnknownCategory),
}

/// A record that maps to exactly one line of its backing file.
///
/// Fields are not escaped: a value containing [`FIELD_SEPARATOR`] or a line
/// break produces a line that will not decode.
pub trait Record: Sized {
    /// Short name used in logs and errors.
    const KIND: &'static str;
    /// Number of fields on a well-formed line.
    const FIELDS: usize;

    /// Serializes the record, without a trailing newline.
    fn encode(&self) -> String;

    /// Parses one line, without its trailing newline.
    fn decode(line: &str) -> Result<Self, CodecError>;
}

fn split_fields<R: Record>(line: &str) -> Result<Vec<&str>, CodecError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != R::FIELDS {
        return Err(CodecError::FieldCount {
            kind: R::KIND,
            expected: R::FIELDS,
            found: fields.len(),
        });
    }
    Ok(fields)
}

impl Record for User {
    const KIND: &'static str = "user";
    const FIELDS: usize = 3;

    fn encode(&self) -> String {
        [self.name.as_str(), self.city.as_str(), self.email.as_str()].join(";")
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let f = split_fields::<Self>(line)?;
        Ok(User {
            name: f[0].to_string(),
            city: f[1].to_string(),
            email: f[2].to_string(),
        })
    }
}

impl Record for Event {
    const KIND: &'static str = "event";
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        [
            self.name.as_str(),
            self.address.as_str(),
            self.category.as_str(),
            format_timestamp(&self.date_time).as_str(),
            self.description.as_str(),
        ]
        .join(";")
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let f = split_fields::<Self>(line)?;
        let category: Category = f[2].parse()?;
        let date_time = parse_timestamp(f[3]).map_err(|source| CodecError::Timestamp {
            raw: f[3].to_string(),
            source,
        })?;
        Ok(Event {
            name: f[0].to_string(),
            address: f[1].to_string(),
            category,
            date_time,
            description: f[4].to_string(),
        })
    }
}

impl Record for Participation {
    const KIND: &'static str = "participation";
    const FIELDS: usize = 2;

    fn encode(&self) -> String {
        [self.event_name.as_str(), self.user_name.as_str()].join(";")
    }

    fn decode(line: &str) -> Result<Self, CodecError> {
        let f = split_fields::<Self>(line)?;
        Ok(Participation::new(f[0], f[1]))
    }
}
