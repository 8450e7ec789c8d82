//! Book record
//!
//! A `Book` carries immutable identity fields plus two availability counters.
//! `available_copies` and `is_available` are only ever changed together,
//! through [`Book::checkout`] and [`Book::check_in`].

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub category: String,
    pub year: i32,
    pub total_copies: i32,
    pub available_copies: i32,
    pub is_available: bool,
}

impl Book {
    /// Creates a book with every copy on the shelf.
    ///
    /// No validation happens here: negative years or copy counts are kept
    /// as given, and the book starts out available either way.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        category: impl Into<String>,
        year: i32,
        copies: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            category: category.into(),
            year,
            total_copies: copies,
            available_copies: copies,
            is_available: true,
        }
    }

    /// Takes one copy off the shelf.
    ///
    /// Returns `false` and leaves the record untouched when no copy is left.
    pub fn checkout(&mut self) -> bool {
        if self.available_copies <= 0 {
            return false;
        }
        self.available_copies -= 1;
        if self.available_copies == 0 {
            self.is_available = false;
        }
        true
    }

    /// Puts one copy back. There is no ceiling against `total_copies`.
    pub fn check_in(&mut self) {
        self.available_copies += 1;
        self.is_available = true;
    }

    /// A fresh copy of this record's identity with full availability.
    pub fn reissued(&self) -> Self {
        Self::new(
            self.title.clone(),
            self.author.clone(),
            self.isbn.clone(),
            self.category.clone(),
            self.year,
            self.total_copies,
        )
    }
}
