//! Pending-search queue

use std::collections::VecDeque;

/// FIFO buffer of titles awaiting batch processing.
#[derive(Debug, Default)]
pub struct SearchQueue {
    pending: VecDeque<String>,
}

impl SearchQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, title: impl Into<String>) {
        self.pending.push_back(title.into());
    }

    /// Removes every queued title, oldest first.
    pub fn take_all(&mut self) -> Vec<String> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
