//! Snapshot Store for shelfdb
//!
//! The snapshot is a flat, line-oriented file holding the full primary index.
//! It is the only persisted state: the title tree, the undo stack and the
//! search queue live in memory and start empty on every open.
//!
//! # Design Principles
//!
//! - Full rewrite on every mutation (no append, no in-place update)
//! - Atomic replace via temp file + fsync + rename
//! - Malformed record lines are skipped on load, never fatal
//! - File handles are scoped to a single load or save call

mod errors;
mod format;
mod reader;
mod writer;

pub use errors::{SnapshotError, SnapshotResult};
pub use format::{decode_record, encode_record, FIELD_COUNT, FIELD_DELIMITER};
pub use reader::{LoadedSnapshot, SnapshotReader};
pub use writer::SnapshotWriter;
