//! Record arena
//!
//! Owns every `Book` created during the process lifetime. Indexes, the undo
//! stack and the title tree hold `RecordId`s into it, so a change made through
//! one view is visible through all of them.
//!
//! The arena is append-only. Deleted records stay allocated because the
//! insert-only title tree and the undo stack can still point at them.

use super::book::Book;

/// Stable handle to a record in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    /// Returns the arena slot this handle points at
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only storage for records.
#[derive(Debug, Default)]
pub struct RecordArena {
    slots: Vec<Book>,
}

impl RecordArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record and returns its handle.
    pub fn insert(&mut self, book: Book) -> RecordId {
        let id = RecordId(self.slots.len());
        self.slots.push(book);
        id
    }

    /// Handles are only minted by `insert`, so lookups cannot miss.
    pub fn get(&self, id: RecordId) -> &Book {
        &self.slots[id.index()]
    }

    pub fn get_mut(&mut self, id: RecordId) -> &mut Book {
        &mut self.slots[id.index()]
    }

    /// Number of records ever stored, live or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
