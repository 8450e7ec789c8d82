//! Catalog engine
//!
//! Orchestrates the record arena, the primary index, the title tree, the
//! undo stack, the pending-search queue and the snapshot store.
//!
//! # Mutation order
//!
//! 1. Primary index (and the arena record) mutated
//! 2. Title tree updated (insert only)
//! 3. Snapshot rewritten in full
//! 4. Outcome returned
//!
//! A mutating call returns only after the snapshot rename completed, so the
//! caller observes durable state immediately.

use tracing::{debug, error, info, warn};

use super::arena::{RecordArena, RecordId};
use super::book::Book;
use super::outcome::Outcome;
use super::report::{CatalogStats, LoadReport, LoadSource, SearchResult};
use super::search;
use super::search_queue::SearchQueue;
use super::sort;
use super::undo::UndoStack;
use crate::config::CatalogConfig;
use crate::index::{PrimaryIndex, TitleTree};
use crate::observability::Event;
use crate::snapshot::{SnapshotReader, SnapshotWriter};

/// Records seeded when no snapshot exists:
/// (title, author, isbn, category, year, copies)
pub const DEFAULT_BOOKS: [(&str, &str, &str, &str, i32, i32); 3] = [
    ("C++ Programming", "Ahmed Ali", "111111", "Programming", 2023, 5),
    ("Data Structures", "Sarah Mohamed", "222222", "Programming", 2022, 3),
    ("Mathematics", "Dr. Sami", "333333", "Science", 2021, 2),
];

/// The catalog engine.
///
/// Single-writer: every mutating call takes `&mut self`. Share across
/// threads only behind a `Mutex`.
pub struct CatalogEngine {
    config: CatalogConfig,
    arena: RecordArena,
    primary: PrimaryIndex,
    titles: TitleTree,
    undo: UndoStack,
    searches: SearchQueue,
    load_report: LoadReport,
    /// Set while an unreadable snapshot has not been overwritten yet
    preserve_unreadable: bool,
}

impl CatalogEngine {
    /// Opens the catalog described by `config`.
    ///
    /// Never fails. The load result is available from [`load_report`].
    ///
    /// [`load_report`]: CatalogEngine::load_report
    pub fn open(config: CatalogConfig) -> Self {
        info!(
            event = %Event::BootStart,
            data_file = %config.data_file.display(),
            "opening catalog"
        );

        let mut engine = Self {
            config,
            arena: RecordArena::new(),
            primary: PrimaryIndex::new(),
            titles: TitleTree::new(),
            undo: UndoStack::new(),
            searches: SearchQueue::new(),
            load_report: LoadReport {
                source: LoadSource::Empty,
                outcome: Outcome::Ok,
                loaded: 0,
                skipped: 0,
            },
            preserve_unreadable: false,
        };
        engine.load_report = engine.load();
        engine
    }

    /// Flushes the snapshot one last time and releases the engine.
    ///
    /// If the snapshot was unreadable at open and nothing has been mutated
    /// since, the file is left as it is.
    pub fn close(self) -> Outcome {
        let outcome = if self.preserve_unreadable {
            Outcome::Ok
        } else {
            self.flush()
        };
        info!(
            event = %Event::ShutdownComplete,
            records = self.primary.len(),
            outcome = outcome.as_str(),
            "catalog closed"
        );
        outcome
    }

    fn load(&mut self) -> LoadReport {
        let path = self.config.data_file.clone();
        match SnapshotReader::load(&path) {
            Ok(loaded) => {
                let count = loaded.books.len();
                for book in loaded.books {
                    self.insert_record(book);
                }
                info!(
                    event = %Event::SnapshotLoaded,
                    loaded = count,
                    declared = loaded.declared,
                    "loaded books from snapshot"
                );
                LoadReport {
                    source: LoadSource::Snapshot,
                    outcome: Outcome::Ok,
                    loaded: count,
                    skipped: loaded.skipped,
                }
            }
            Err(e) if e.is_not_found() => {
                if !self.config.seed_defaults {
                    info!(event = %Event::SnapshotSeeded, seeded = 0, "no snapshot found, starting empty");
                    return LoadReport {
                        source: LoadSource::Empty,
                        outcome: Outcome::Ok,
                        loaded: 0,
                        skipped: 0,
                    };
                }
                for (title, author, isbn, category, year, copies) in DEFAULT_BOOKS {
                    self.insert_record(Book::new(title, author, isbn, category, year, copies));
                }
                info!(
                    event = %Event::SnapshotSeeded,
                    seeded = DEFAULT_BOOKS.len(),
                    "no snapshot found, using default data"
                );
                LoadReport {
                    source: LoadSource::Seeded,
                    outcome: Outcome::Ok,
                    loaded: DEFAULT_BOOKS.len(),
                    skipped: 0,
                }
            }
            Err(e) => {
                warn!(
                    event = %Event::SnapshotUnreadable,
                    code = e.code(),
                    error = %e,
                    "snapshot unreadable, starting empty"
                );
                self.preserve_unreadable = true;
                LoadReport {
                    source: LoadSource::Unreadable,
                    outcome: Outcome::StorageUnreadable,
                    loaded: 0,
                    skipped: 0,
                }
            }
        }
    }

    /// Appends to the arena, the primary index and the title tree.
    fn insert_record(&mut self, book: Book) -> RecordId {
        let title = book.title.clone();
        let id = self.arena.insert(book);
        self.primary.push(id);
        self.titles.insert(title, id);
        id
    }

    /// Rewrites the snapshot from the primary index.
    fn flush(&self) -> Outcome {
        let books = self.primary.snapshot(&self.arena);
        match SnapshotWriter::save(&self.config.data_file, &books) {
            Ok(bytes) => {
                debug!(
                    event = %Event::SnapshotSaved,
                    records = books.len(),
                    bytes,
                    "snapshot saved"
                );
                Outcome::Ok
            }
            Err(e) => {
                error!(
                    event = %Event::SnapshotSaveFailed,
                    code = e.code(),
                    error = %e,
                    "snapshot save failed"
                );
                Outcome::StorageUnwritable
            }
        }
    }

    fn mutated(&mut self) -> Outcome {
        self.preserve_unreadable = false;
        self.flush()
    }

    fn rebuild_title_tree(&mut self) {
        self.titles.clear();
        for id in self.primary.ids() {
            self.titles.insert(self.arena.get(*id).title.clone(), *id);
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adds a new record with every copy available.
    ///
    /// No validation: negative year or copies are stored as given.
    pub fn add(
        &mut self,
        title: &str,
        author: &str,
        isbn: &str,
        category: &str,
        year: i32,
        copies: i32,
    ) -> Outcome {
        self.add_book(Book::new(title, author, isbn, category, year, copies))
    }

    fn add_book(&mut self, book: Book) -> Outcome {
        let id = self.insert_record(book);
        info!(
            event = %Event::RecordAdded,
            title = %self.arena.get(id).title,
            record_id = id.index(),
            "book added"
        );
        self.mutated()
    }

    /// Borrows one copy of the first record with this title that still has
    /// a copy available.
    ///
    /// Returns `Unavailable` whether the title is absent or fully borrowed.
    pub fn borrow(&mut self, title: &str) -> Outcome {
        self.borrow_record(title).0
    }

    /// Like [`borrow`], also returning the record that lost a copy.
    ///
    /// [`borrow`]: CatalogEngine::borrow
    pub fn borrow_record(&mut self, title: &str) -> (Outcome, Option<&Book>) {
        let Some(pos) = self
            .primary
            .position(&self.arena, |b| b.title == title && b.available_copies > 0)
        else {
            debug!(title, "borrow refused, no available copy");
            return (Outcome::Unavailable, None);
        };

        let id = self.primary.ids()[pos];
        let book = self.arena.get_mut(id);
        book.checkout();
        info!(
            event = %Event::RecordBorrowed,
            title,
            available = book.available_copies,
            "book borrowed"
        );
        let outcome = self.mutated();
        (outcome, Some(self.arena.get(id)))
    }

    /// Returns one copy to the first record with this title.
    ///
    /// The available count is not capped at the total.
    pub fn return_book(&mut self, title: &str) -> Outcome {
        self.return_record(title).0
    }

    /// Like [`return_book`], also returning the record that gained a copy.
    ///
    /// [`return_book`]: CatalogEngine::return_book
    pub fn return_record(&mut self, title: &str) -> (Outcome, Option<&Book>) {
        let Some(id) = self.primary.find_title(&self.arena, title) else {
            return (Outcome::NotFound, None);
        };

        let book = self.arena.get_mut(id);
        book.check_in();
        info!(
            event = %Event::RecordReturned,
            title,
            available = book.available_copies,
            "book returned"
        );
        let outcome = self.mutated();
        (outcome, Some(self.arena.get(id)))
    }

    /// Removes the first record with this title and pushes it on the undo
    /// stack.
    ///
    /// With `stale_title_index` set, the title tree keeps its node for the
    /// removed record.
    pub fn delete(&mut self, title: &str) -> Outcome {
        let Some(pos) = self.primary.position(&self.arena, |b| b.title == title) else {
            return Outcome::NotFound;
        };

        let id = self.primary.remove(pos);
        self.undo.push(id);
        if !self.config.stale_title_index {
            self.rebuild_title_tree();
        }
        info!(
            event = %Event::RecordDeleted,
            title,
            record_id = id.index(),
            undo_depth = self.undo.len(),
            "book deleted"
        );
        self.mutated()
    }

    /// Re-adds the most recently deleted record as a new record with full
    /// availability. Borrow state from before the delete is not kept.
    pub fn restore(&mut self) -> Outcome {
        let Some(id) = self.undo.pop() else {
            return Outcome::EmptyHistory;
        };

        let book = self.arena.get(id).reissued();
        info!(
            event = %Event::RecordRestored,
            title = %book.title,
            "book restored"
        );
        self.add_book(book)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Queues the title for batch processing, then looks it up in the title
    /// tree.
    ///
    /// In stale mode this can report titles that have since been deleted.
    pub fn search_by_title(&mut self, title: &str) -> bool {
        self.searches.enqueue(title);
        self.titles.contains(title)
    }

    /// Scans the primary index.
    pub fn linear_search(&self, title: &str) -> bool {
        search::linear_search(self.live_titles(), title)
    }

    /// Sorts a copy of the live titles, then binary-searches it.
    pub fn binary_search(&self, title: &str) -> bool {
        let mut titles: Vec<&str> = self.live_titles().collect();
        titles.sort_unstable();
        search::binary_search(&titles, title)
    }

    /// Processes every queued title, oldest first, with the same tree lookup
    /// as [`search_by_title`]. Processed titles are not queued again.
    ///
    /// [`search_by_title`]: CatalogEngine::search_by_title
    pub fn drain_search_queue(&mut self) -> Vec<SearchResult> {
        let batch = self.searches.take_all();
        let results: Vec<SearchResult> = batch
            .into_iter()
            .map(|title| {
                let found = self.titles.contains(&title);
                SearchResult { title, found }
            })
            .collect();
        info!(
            event = %Event::SearchQueueDrained,
            processed = results.len(),
            found = results.iter().filter(|r| r.found).count(),
            "search queue processed"
        );
        results
    }

    // ------------------------------------------------------------------
    // Read-side projections
    // ------------------------------------------------------------------

    /// Copy of the live records sorted by title with bubble sort.
    pub fn bubble_sort(&self) -> Vec<Book> {
        let mut books = self.primary.snapshot(&self.arena);
        sort::bubble_sort_by(&mut books, |a, b| a.title < b.title);
        books
    }

    /// Copy of the live records sorted by title with selection sort.
    pub fn selection_sort(&self) -> Vec<Book> {
        let mut books = self.primary.snapshot(&self.arena);
        sort::selection_sort_by(&mut books, |a, b| a.title < b.title);
        books
    }

    /// Live records in insertion order.
    pub fn list_all(&self) -> Vec<Book> {
        self.primary.snapshot(&self.arena)
    }

    /// Title-tree traversal. Includes deleted records in stale mode.
    pub fn list_sorted(&self) -> Vec<Book> {
        self.titles
            .in_order()
            .into_iter()
            .map(|id| self.arena.get(id).clone())
            .collect()
    }

    /// First live record with this title.
    pub fn get(&self, title: &str) -> Option<&Book> {
        self.primary
            .find_title(&self.arena, title)
            .map(|id| self.arena.get(id))
    }

    pub fn statistics(&self) -> CatalogStats {
        let available_records = self
            .primary
            .ids()
            .iter()
            .filter(|id| self.arena.get(**id).is_available)
            .count();
        CatalogStats {
            total_records: self.primary.len(),
            available_records,
            deleted_count: self.undo.len(),
            pending_search_count: self.searches.len(),
        }
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn live_titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.primary
            .ids()
            .iter()
            .map(|id| self.arena.get(*id).title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_empty(dir: &TempDir) -> CatalogEngine {
        let mut config = CatalogConfig::with_data_file(dir.path().join("library_data.txt"));
        config.seed_defaults = false;
        CatalogEngine::open(config)
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_add_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        assert_eq!(engine.add("A", "X", "1", "Fiction", 2000, 2), Outcome::Ok);
        assert_eq!(engine.list_all().len(), 1);
        assert!(dir.path().join("library_data.txt").exists());
    }

    #[test]
    fn test_borrow_prefers_first_with_copies() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "first", "1", "x", 2000, 1);
        let _ = engine.add("A", "second", "2", "x", 2000, 1);

        assert_eq!(engine.borrow("A"), Outcome::Ok);
        assert_eq!(engine.borrow("A"), Outcome::Ok);
        let books = engine.list_all();
        assert_eq!(books[0].available_copies, 0);
        assert_eq!(books[1].available_copies, 0);
        assert_eq!(engine.borrow("A"), Outcome::Unavailable);
    }

    #[test]
    fn test_borrow_record_reports_changed_record() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "first", "1", "x", 2000, 0);
        let _ = engine.add("A", "second", "2", "x", 2000, 2);

        let (outcome, book) = engine.borrow_record("A");
        assert_eq!(outcome, Outcome::Ok);
        let book = book.unwrap();
        assert_eq!(book.author, "second");
        assert_eq!(book.available_copies, 1);

        let (outcome, book) = engine.return_record("A");
        assert_eq!(outcome, Outcome::Ok);
        assert_eq!(book.map(|b| b.author.as_str()), Some("first"));
        assert!(engine.return_record("B").1.is_none());
    }

    #[test]
    fn test_borrow_missing_title_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        assert_eq!(engine.borrow("Nope"), Outcome::Unavailable);
    }

    #[test]
    fn test_return_targets_first_match_even_if_full() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "first", "1", "x", 2000, 1);
        let _ = engine.add("A", "second", "2", "x", 2000, 1);
        assert_eq!(engine.return_book("A"), Outcome::Ok);
        let books = engine.list_all();
        assert_eq!(books[0].available_copies, 2);
        assert_eq!(books[1].available_copies, 1);
        assert_eq!(engine.return_book("B"), Outcome::NotFound);
    }

    #[test]
    fn test_delete_on_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        assert_eq!(engine.delete("A"), Outcome::NotFound);
        assert_eq!(engine.restore(), Outcome::EmptyHistory);
    }

    #[test]
    fn test_restore_is_lifo() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "", "", "", 0, 1);
        let _ = engine.add("B", "", "", "", 0, 1);
        let _ = engine.delete("A");
        let _ = engine.delete("B");
        assert_eq!(engine.statistics().deleted_count, 2);

        assert_eq!(engine.restore(), Outcome::Ok);
        assert_eq!(titles(&engine.list_all()), vec!["B"]);
        assert_eq!(engine.restore(), Outcome::Ok);
        assert_eq!(titles(&engine.list_all()), vec!["B", "A"]);
        assert_eq!(engine.restore(), Outcome::EmptyHistory);
    }

    #[test]
    fn test_borrow_visible_in_sorted_listing() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "", "", "", 0, 2);
        let _ = engine.borrow("A");
        assert_eq!(engine.list_sorted()[0].available_copies, 1);
    }

    #[test]
    fn test_search_by_title_enqueues() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "", "", "", 0, 1);
        assert!(engine.search_by_title("A"));
        assert!(!engine.search_by_title("B"));
        assert_eq!(engine.statistics().pending_search_count, 2);
    }

    #[test]
    fn test_drain_processes_fifo_and_empties_queue() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "", "", "", 0, 1);
        engine.search_by_title("B");
        engine.search_by_title("A");

        let results = engine.drain_search_queue();
        assert_eq!(
            results,
            vec![
                SearchResult { title: "B".into(), found: false },
                SearchResult { title: "A".into(), found: true },
            ]
        );
        assert_eq!(engine.statistics().pending_search_count, 0);
        assert!(engine.drain_search_queue().is_empty());
    }

    #[test]
    fn test_statistics_counts_available_flag() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "", "", "", 0, 1);
        let _ = engine.add("B", "", "", "", 0, 1);
        let _ = engine.borrow("A");
        let stats = engine.statistics();
        assert_eq!(stats.total_records, 2);
        assert_eq!(stats.available_records, 1);
    }

    #[test]
    fn test_get_returns_first_live_match() {
        let dir = TempDir::new().unwrap();
        let mut engine = open_empty(&dir);
        let _ = engine.add("A", "first", "", "", 0, 1);
        let _ = engine.add("A", "second", "", "", 0, 1);
        assert_eq!(engine.get("A").map(|b| b.author.as_str()), Some("first"));
        let _ = engine.delete("A");
        assert_eq!(engine.get("A").map(|b| b.author.as_str()), Some("second"));
        assert!(engine.get("Z").is_none());
    }

    #[test]
    fn test_derived_title_index_drops_deleted() {
        let dir = TempDir::new().unwrap();
        let mut config = CatalogConfig::with_data_file(dir.path().join("library_data.txt"));
        config.stale_title_index = false;
        let mut engine = CatalogEngine::open(config);

        assert_eq!(engine.delete("Mathematics"), Outcome::Ok);
        assert!(!engine.search_by_title("Mathematics"));
        assert_eq!(
            titles(&engine.list_sorted()),
            vec!["C++ Programming", "Data Structures"]
        );
    }

    #[test]
    fn test_close_flushes_seeded_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.txt");
        let engine = CatalogEngine::open(CatalogConfig::with_data_file(&path));
        assert!(!path.exists());
        assert_eq!(engine.close(), Outcome::Ok);
        assert!(path.exists());
    }
}
