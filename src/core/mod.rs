//! Flat-file record stores and the read-only views derived from them.

/// Event time filters and participation aggregation.
pub mod query;
/// Line-per-record file store.
pub mod store;
