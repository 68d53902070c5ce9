//! Event registration backed by flat semicolon-delimited files.
//!
//! Users, events and participations each live in their own file, one record
//! per line. A [`registry::Registry`] loads all three on open and appends or
//! rewrites lines as records change.
//!
//! # Examples
//!
//! ```
//! use agenda::{
//!     config::RegistryConfig,
//!     record::EventDraft,
//!     registry::Registry,
//!     types::parse_timestamp,
//! };
//!
//! let dir = tempfile::tempdir().expect("tempdir");
//! let mut registry = Registry::open(&RegistryConfig::in_dir(dir.path())).expect("open");
//!
//! registry.register_user("Ana", "Recife", "ana@example.com").expect("register");
//! registry.add_event(EventDraft {
//!     name: "Show A".to_string(),
//!     address: "Rua X".to_string(),
//!     category: "Shows".to_string(),
//!     date_time: "01/01/2030 20:00".to_string(),
//!     description: "desc".to_string(),
//! }).expect("add event");
//! registry.participate("Show A", "Ana").expect("participate");
//!
//! let now = parse_timestamp("01/01/2025 00:00").expect("now");
//! assert_eq!(registry.upcoming_events(now).len(), 1);
//! assert!(registry.participations_by_event()["Show A"].contains("Ana"));
//! ```
#![warn(missing_docs)]

/// Line codec shared by every stored record kind.
pub mod codec;
/// Registry configuration.
pub mod config;
/// Flat-file stores and derived views.
pub mod core;
/// Subscriber setup for `tracing`.
pub mod logging;
/// User, event and participation records.
pub mod record;
/// Facade over the three stores.
pub mod registry;
/// Interactive menu loop.
pub mod shell;
/// Shared primitive types and the category set.
pub mod types;
