//! Snapshot reader
//!
//! Reads the count line, then exactly that many record lines. Lines that do
//! not decode are skipped and counted; they are not errors. Lines after the
//! declared count are ignored.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use super::errors::{SnapshotError, SnapshotResult};
use super::format::{decode_count, decode_record};
use crate::catalog::Book;
use crate::observability::Event;

/// Records recovered from a snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSnapshot {
    /// Decoded records, in file order
    pub books: Vec<Book>,
    /// Record count declared on the first line
    pub declared: usize,
    /// Declared lines that were missing or malformed
    pub skipped: usize,
}

/// Loads snapshot files.
pub struct SnapshotReader;

impl SnapshotReader {
    /// Loads every record from `path`.
    ///
    /// # Errors
    ///
    /// - `SnapshotError::NotFound` if the file does not exist
    /// - `SnapshotError::Unreadable` if it cannot be opened or read, or the
    ///   count line is missing or not a number
    pub fn load(path: &Path) -> SnapshotResult<LoadedSnapshot> {
        // The handle lives only for the duration of this call.
        let file = File::open(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                SnapshotError::NotFound(path.to_path_buf())
            } else {
                SnapshotError::read_failed(path, "failed to open snapshot", e)
            }
        })?;

        let mut lines = BufReader::new(file).lines();

        let count_line = match lines.next() {
            Some(line) => line.map_err(|e| SnapshotError::read_failed(path, "failed to read count line", e))?,
            None => return Err(SnapshotError::malformed(path, "missing record count line")),
        };
        let declared = decode_count(&count_line).ok_or_else(|| {
            SnapshotError::malformed(path, format!("invalid record count line: {:?}", count_line))
        })?;

        let mut books = Vec::with_capacity(declared);
        let mut skipped = 0;

        for line_no in 0..declared {
            let line = match lines.next() {
                Some(line) => line.map_err(|e| {
                    SnapshotError::read_failed(path, format!("failed to read record {}", line_no + 1), e)
                })?,
                None => String::new(),
            };

            match decode_record(&line) {
                Some(book) => books.push(book),
                None => {
                    skipped += 1;
                    debug!(
                        event = %Event::SnapshotRecordSkipped,
                        line = line_no + 2,
                        "skipping malformed snapshot line"
                    );
                }
            }
        }

        Ok(LoadedSnapshot {
            books,
            declared,
            skipped,
        })
    }
}
