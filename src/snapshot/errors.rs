//! Snapshot error types
//!
//! Error codes:
//! - SHELF_SNAPSHOT_NOT_FOUND (no snapshot file yet, not a failure at open)
//! - SHELF_SNAPSHOT_UNREADABLE
//! - SHELF_SNAPSHOT_WRITE_FAILED

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot store errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read snapshot {}: {reason}", .path.display())]
    Unreadable {
        path: PathBuf,
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Failed to write snapshot {}: {reason}", .path.display())]
    WriteFailed {
        path: PathBuf,
        reason: String,
        #[source]
        source: io::Error,
    },
}

impl SnapshotError {
    /// Create an unreadable error from an I/O failure
    pub fn read_failed(path: impl Into<PathBuf>, reason: impl Into<String>, source: io::Error) -> Self {
        SnapshotError::Unreadable {
            path: path.into(),
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Create an unreadable error for content that cannot be parsed
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        SnapshotError::Unreadable {
            path: path.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a write failed error
    pub fn write_failed(path: impl Into<PathBuf>, reason: impl Into<String>, source: io::Error) -> Self {
        SnapshotError::WriteFailed {
            path: path.into(),
            reason: reason.into(),
            source,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::NotFound(_) => "SHELF_SNAPSHOT_NOT_FOUND",
            SnapshotError::Unreadable { .. } => "SHELF_SNAPSHOT_UNREADABLE",
            SnapshotError::WriteFailed { .. } => "SHELF_SNAPSHOT_WRITE_FAILED",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SnapshotError::NotFound(_))
    }
}
