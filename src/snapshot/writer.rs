//! Snapshot writer
//!
//! Every save rewrites the whole file: the records go to `<file>.tmp`, the
//! temp file is fsynced, then renamed over the target. A reader therefore
//! sees either the previous snapshot or the new one, never a partial write.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::errors::{SnapshotError, SnapshotResult};
use super::format::{encode_count, encode_record};
use crate::catalog::Book;

/// Writes snapshot files.
pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Replaces the snapshot at `path` with `books`.
    ///
    /// Creates the parent directory if needed. Returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::WriteFailed` if any step fails. The temp file
    /// is removed on failure and the previous snapshot is left untouched.
    pub fn save(path: &Path, books: &[Book]) -> SnapshotResult<u64> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    SnapshotError::write_failed(path, format!("failed to create directory {}", parent.display()), e)
                })?;
            }
        }

        let tmp_path = temp_path(path);
        let result = Self::write_temp(&tmp_path, books).and_then(|bytes| {
            fs::rename(&tmp_path, path)
                .map_err(|e| SnapshotError::write_failed(path, "failed to replace snapshot", e))?;
            Ok(bytes)
        });

        if result.is_err() {
            cleanup_temp(&tmp_path);
        }
        result
    }

    fn write_temp(tmp_path: &Path, books: &[Book]) -> SnapshotResult<u64> {
        let file = File::create(tmp_path)
            .map_err(|e| SnapshotError::write_failed(tmp_path, "failed to create temp file", e))?;
        let mut writer = BufWriter::new(file);
        let mut bytes = 0u64;

        let mut write_line = |line: String| -> SnapshotResult<()> {
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| SnapshotError::write_failed(tmp_path, "failed to write record", e))?;
            bytes += line.len() as u64 + 1;
            Ok(())
        };

        write_line(encode_count(books.len()))?;
        for book in books {
            write_line(encode_record(book))?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| SnapshotError::write_failed(tmp_path, "failed to flush snapshot", e.into_error()))?;

        // fsync is mandatory before the rename
        file.sync_all()
            .map_err(|e| SnapshotError::write_failed(tmp_path, "fsync failed", e))?;

        Ok(bytes)
    }
}

/// `<path>.tmp`, next to the target so the rename stays on one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

fn cleanup_temp(path: &Path) {
    if path.exists() {
        // Best effort, we're already on an error path
        let _ = fs::remove_file(path);
    }
}
