//! Catalog subsystem for shelfdb
//!
//! The engine keeps several views of the same records consistent:
//!
//! - Record arena: owns every `Book`, addressed by `RecordId`
//! - Primary index: live records in insertion order (authoritative)
//! - Title tree: insert-only BST for sorted traversal and tree search
//! - Undo stack: deleted records, most recent first
//! - Search queue: titles passed to `search_by_title`, oldest first
//! - Snapshot: the primary index on disk, rewritten after every mutation
//!
//! # Invariants
//!
//! - `available_copies` and `is_available` change together
//! - Mutations reach the snapshot before the call returns
//! - Title tree nodes are never removed in stale mode

mod arena;
mod book;
mod engine;
mod outcome;
mod report;
pub mod search;
mod search_queue;
pub mod sort;
mod undo;

pub use arena::{RecordArena, RecordId};
pub use book::Book;
pub use engine::{CatalogEngine, DEFAULT_BOOKS};
pub use outcome::Outcome;
pub use report::{CatalogStats, LoadReport, LoadSource, SearchResult};
pub use search_queue::SearchQueue;
pub use undo::UndoStack;
