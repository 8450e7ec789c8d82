//! Observable events for shelfdb
//!
//! Every log line the engine emits carries one of these as its `event`
//! field, so logs can be filtered on a stable name rather than message text.

use std::fmt;

/// Observable events in shelfdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Engine open begins
    BootStart,
    /// Engine closed after the final flush
    ShutdownComplete,

    // Snapshot
    /// Snapshot file loaded into the primary index
    SnapshotLoaded,
    /// No snapshot found, default records seeded
    SnapshotSeeded,
    /// Snapshot present but could not be read
    SnapshotUnreadable,
    /// A malformed record line was skipped during load
    SnapshotRecordSkipped,
    /// Snapshot rewritten after a mutation
    SnapshotSaved,
    /// Snapshot rewrite failed
    SnapshotSaveFailed,

    // Catalog mutations
    /// Record appended
    RecordAdded,
    /// One copy borrowed
    RecordBorrowed,
    /// One copy returned
    RecordReturned,
    /// Record removed and pushed on the undo stack
    RecordDeleted,
    /// Record re-added from the undo stack
    RecordRestored,

    // Search
    /// Pending-search queue processed
    SearchQueueDrained,
}

impl Event {
    /// Returns the stable event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::SnapshotLoaded => "SNAPSHOT_LOADED",
            Event::SnapshotSeeded => "SNAPSHOT_SEEDED",
            Event::SnapshotUnreadable => "SNAPSHOT_UNREADABLE",
            Event::SnapshotRecordSkipped => "SNAPSHOT_RECORD_SKIPPED",
            Event::SnapshotSaved => "SNAPSHOT_SAVED",
            Event::SnapshotSaveFailed => "SNAPSHOT_SAVE_FAILED",
            Event::RecordAdded => "RECORD_ADDED",
            Event::RecordBorrowed => "RECORD_BORROWED",
            Event::RecordReturned => "RECORD_RETURNED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordRestored => "RECORD_RESTORED",
            Event::SearchQueueDrained => "SEARCH_QUEUE_DRAINED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
