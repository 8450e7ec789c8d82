//! Operation outcomes
//!
//! Catalog operations never fail with an error: every condition the caller
//! may need to react to is one of these result kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result kind of a catalog operation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Operation applied and, for mutations, persisted
    Ok,
    /// No record with the requested title
    NotFound,
    /// Title absent, or every copy is out (not distinguished)
    Unavailable,
    /// Restore requested with an empty undo stack
    EmptyHistory,
    /// Mutation applied in memory but the snapshot could not be written
    StorageUnwritable,
    /// Snapshot present but could not be read at open
    StorageUnreadable,
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok)
    }

    /// Returns the snake_case name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::NotFound => "not_found",
            Outcome::Unavailable => "unavailable",
            Outcome::EmptyHistory => "empty_history",
            Outcome::StorageUnwritable => "storage_unwritable",
            Outcome::StorageUnreadable => "storage_unreadable",
        }
    }

    /// Human-readable description
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Ok => "done",
            Outcome::NotFound => "book not found",
            Outcome::Unavailable => "book not available",
            Outcome::EmptyHistory => "no deleted books to restore",
            Outcome::StorageUnwritable => "snapshot could not be written",
            Outcome::StorageUnreadable => "snapshot could not be read",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
