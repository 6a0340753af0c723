//! Error types for index construction and queries.

use crate::model::EntityKind;
use std::num::ParseIntError;
use thiserror::Error;

/// Faults found while building the index. Any of these aborts the load.
#[derive(Debug, Error, PartialEq)]
pub enum IndexError {
    /// A record has no `_id` field.
    #[error("{kind} record at position {position} has no _id")]
    MissingId { kind: EntityKind, position: usize },

    /// A record's `_id` has the wrong dynamic type for its kind.
    #[error("{kind} record at position {position} has a {found} _id, expected {expected}")]
    InvalidId {
        kind: EntityKind,
        position: usize,
        found: &'static str,
        expected: &'static str,
    },
}

/// Errors returned by query operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No record matched. Callers report "No results found" instead of failing.
    #[error("not found")]
    NotFound,

    /// A non-numeric value was given for a numeric identifier.
    #[error("invalid _id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Multi-term query with differing term and value counts.
    #[error("{terms} terms do not match {values} values")]
    TermCountMismatch { terms: usize, values: usize },

    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

impl SearchError {
    /// Returns `true` for the "zero matches" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchError::NotFound)
    }
}
