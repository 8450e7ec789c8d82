//! Primary index
//!
//! The authoritative, insertion-ordered list of live records. Every mutation
//! lands here first; listing, linear/binary search, sorting and the snapshot
//! all read from it.

use crate::catalog::{Book, RecordArena, RecordId};

/// Insertion-ordered sequence of live record handles.
///
/// Duplicate titles are allowed. Lookups resolve to the first match in
/// insertion order.
#[derive(Debug, Default)]
pub struct PrimaryIndex {
    ids: Vec<RecordId>,
}

impl PrimaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handle at the end.
    pub fn push(&mut self, id: RecordId) {
        self.ids.push(id);
    }

    /// Position of the first record satisfying `pred`.
    pub fn position<F>(&self, arena: &RecordArena, mut pred: F) -> Option<usize>
    where
        F: FnMut(&Book) -> bool,
    {
        self.ids.iter().position(|id| pred(arena.get(*id)))
    }

    /// First record whose title matches exactly.
    pub fn find_title(&self, arena: &RecordArena, title: &str) -> Option<RecordId> {
        self.position(arena, |b| b.title == title)
            .map(|pos| self.ids[pos])
    }

    /// Removes and returns the handle at `pos`, preserving order.
    pub fn remove(&mut self, pos: usize) -> RecordId {
        self.ids.remove(pos)
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Resolves every handle to an owned copy, in order.
    pub fn snapshot(&self, arena: &RecordArena) -> Vec<Book> {
        self.ids.iter().map(|id| arena.get(*id).clone()).collect()
    }
}
