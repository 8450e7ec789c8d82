//! Read-side report types returned by the engine

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// Counters over the current catalog state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Live records in the primary index
    pub total_records: usize,
    /// Live records with `is_available` set
    pub available_records: usize,
    /// Entries on the undo stack
    pub deleted_count: usize,
    /// Titles waiting in the search queue
    pub pending_search_count: usize,
}

/// One processed entry of the pending-search queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub found: bool,
}

/// Where the initial catalog content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    /// Read from the snapshot file
    Snapshot,
    /// No snapshot, default records seeded
    Seeded,
    /// No snapshot, seeding disabled
    Empty,
    /// Snapshot present but unreadable, started empty
    Unreadable,
}

/// Result of loading the snapshot at open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub source: LoadSource,
    pub outcome: Outcome,
    /// Records placed in the primary index
    pub loaded: usize,
    /// Snapshot lines skipped as malformed
    pub skipped: usize,
}
