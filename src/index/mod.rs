//! Index subsystem for shelfdb
//!
//! Both indexes store `RecordId`s into the catalog's record arena.
//!
//! # Design Principles
//!
//! - Primary index: authoritative, insertion-ordered, rebuilt from the snapshot on open
//! - Title tree: secondary, ordered by title, insert-only, in-memory only
//!
//! # Invariants
//!
//! - Every live record appears exactly once in the primary index
//! - The title tree is updated after the primary index, never before
//! - Title tree nodes are never removed individually

mod primary;
mod title_tree;

pub use primary::PrimaryIndex;
pub use title_tree::TitleTree;
