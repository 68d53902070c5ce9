//! Facade over the user, event and participation stores.

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    config::{CancelMode, RegistryConfig},
    core::{
        query::{self, ParticipantIndex},
        store::{RecordStore, StoreError},
    },
    record::{Event, EventDraft, Participation, User},
    types::{Category, DATE_FORMAT, Timestamp, parse_timestamp},
};

/// Rejected input or failed persistence.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Category label is not in [`Category::ALL`].
    #[error("invalid category {0:?}")]
    InvalidCategory(String),
    /// Date is not `dd/MM/yyyy HH:mm`.
    #[error("invalid date {raw:?}, expected dd/MM/yyyy HH:mm: {source}")]
    InvalidDate {
        /// Input as typed.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// Backing file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Owns the three stores. All mutations go through `&mut self`.
#[derive(Debug)]
pub struct Registry {
    users: RecordStore<User>,
    events: RecordStore<Event>,
    participations: RecordStore<Participation>,
    cancel_mode: CancelMode,
}

impl Registry {
    /// Loads all three files named by `config`.
    pub fn open(config: &RegistryConfig) -> RegistryResult<Self> {
        let registry = Self {
            users: RecordStore::open(config.users_path())?,
            events: RecordStore::open(config.events_path())?,
            participations: RecordStore::open(config.participations_path())?,
            cancel_mode: config.cancel_mode,
        };
        info!(
            users = registry.users.len(),
            events = registry.events.len(),
            participations = registry.participations.len(),
            "registry opened"
        );
        Ok(registry)
    }

    /// Appends a user. Names are not checked for uniqueness.
    pub fn register_user(
        &mut self,
        name: impl Into<String>,
        city: impl Into<String>,
        email: impl Into<String>,
    ) -> RegistryResult<&User> {
        let user = User {
            name: name.into(),
            city: city.into(),
            email: email.into(),
        };
        let user = self.users.append(user)?;
        info!(name = %user.name, "user registered");
        Ok(user)
    }

    /// Registered users in file order.
    pub fn users(&self) -> &[User] {
        self.users.records()
    }

    /// Validates `draft` and appends the event.
    ///
    /// An unknown category or a malformed date rejects the whole draft and
    /// nothing is written.
    pub fn add_event(&mut self, draft: EventDraft) -> RegistryResult<&Event> {
        let category = draft.category.parse::<Category>().map_err(|_| {
            warn!(category = %draft.category, "event rejected: unknown category");
            RegistryError::InvalidCategory(draft.category.clone())
        })?;
        let date_time = parse_timestamp(&draft.date_time).map_err(|source| {
            warn!(date = %draft.date_time, format = DATE_FORMAT, "event rejected: bad date");
            RegistryError::InvalidDate {
                raw: draft.date_time.clone(),
                source,
            }
        })?;

        let event = Event {
            name: draft.name,
            address: draft.address,
            category,
            date_time,
            description: draft.description,
        };
        let event = self.events.append(event)?;
        info!(name = %event.name, category = %event.category, "event added");
        Ok(event)
    }

    /// Every event in insertion order.
    pub fn all_events(&self) -> &[Event] {
        self.events.records()
    }

    /// Events after `now`, soonest first.
    pub fn upcoming_events(&self, now: Timestamp) -> Vec<&Event> {
        query::upcoming_events(self.events.records(), now)
    }

    /// Events before `now`, most recent first.
    pub fn past_events(&self, now: Timestamp) -> Vec<&Event> {
        query::past_events(self.events.records(), now)
    }

    /// Categories accepted by [`Registry::add_event`].
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    /// Records that `user_name` takes part in `event_name`.
    ///
    /// Neither name is checked against the stores.
    pub fn participate(
        &mut self,
        event_name: impl Into<String>,
        user_name: impl Into<String>,
    ) -> RegistryResult<&Participation> {
        let p = self
            .participations
            .append(Participation::new(event_name, user_name))?;
        info!(event = %p.event_name, user = %p.user_name, "participation recorded");
        Ok(p)
    }

    /// Removes participations and rewrites the file. Returns the removed count.
    ///
    /// Which records match depends on the configured [`CancelMode`].
    pub fn cancel_participation(
        &mut self,
        event_name: &str,
        user_name: &str,
    ) -> RegistryResult<usize> {
        let mode = self.cancel_mode;
        let removed = self.participations.retain(|p| match mode {
            CancelMode::AnyField => p.event_name != event_name && p.user_name != user_name,
            CancelMode::ExactPair => !(p.event_name == event_name && p.user_name == user_name),
        })?;
        info!(event = event_name, user = user_name, removed, ?mode, "participation cancelled");
        Ok(removed)
    }

    /// Stored participations in file order.
    pub fn participations(&self) -> &[Participation] {
        self.participations.records()
    }

    /// Event name to distinct participant names.
    pub fn participations_by_event(&self) -> ParticipantIndex {
        query::participations_by_event(self.participations.records())
    }

    /// Active cancellation filter.
    pub fn cancel_mode(&self) -> CancelMode {
        self.cancel_mode
    }
}
