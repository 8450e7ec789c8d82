//! Undo stack of deleted records

use super::arena::RecordId;

/// LIFO history of deletions.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<RecordId>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: RecordId) {
        self.entries.push(id);
    }

    /// Most recent deletion, if any
    pub fn pop(&mut self) -> Option<RecordId> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Book, RecordArena};

    #[test]
    fn test_lifo_order() {
        let mut arena = RecordArena::new();
        let a = arena.insert(Book::new("A", "", "", "", 0, 1));
        let b = arena.insert(Book::new("B", "", "", "", 0, 1));

        let mut stack = UndoStack::new();
        stack.push(a);
        stack.push(b);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some(b));
        assert_eq!(stack.pop(), Some(a));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
