//! Snapshot line format
//!
//! ```text
//! <record_count>
//! <title>|<author>|<isbn>|<category>|<year>|<totalCopies>|<availableCopies>|<isAvailable:0|1>
//! ```
//!
//! No header, no version tag, no checksum. The delimiter is not escaped: a
//! field containing `|` or a newline produces a line that fails to decode on
//! the next load.

use crate::catalog::Book;

/// Field separator inside a record line
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a record line
pub const FIELD_COUNT: usize = 8;

/// Encodes one record as a single line (without the trailing newline).
pub fn encode_record(book: &Book) -> String {
    format!(
        "{title}{d}{author}{d}{isbn}{d}{category}{d}{year}{d}{total}{d}{available}{d}{flag}",
        d = FIELD_DELIMITER,
        title = book.title,
        author = book.author,
        isbn = book.isbn,
        category = book.category,
        year = book.year,
        total = book.total_copies,
        available = book.available_copies,
        flag = if book.is_available { 1 } else { 0 },
    )
}

/// Decodes one record line.
///
/// Returns `None` when the line does not have exactly eight fields or a
/// numeric field does not parse. Only the literal `1` marks a record as
/// available.
pub fn decode_record(line: &str) -> Option<Book> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        return None;
    }

    let year = parse_int(parts[4])?;
    let total_copies = parse_int(parts[5])?;
    let available_copies = parse_int(parts[6])?;

    let mut book = Book::new(parts[0], parts[1], parts[2], parts[3], year, total_copies);
    book.available_copies = available_copies;
    book.is_available = parts[7] == "1";
    Some(book)
}

/// Encodes the count line.
pub fn encode_count(count: usize) -> String {
    count.to_string()
}

/// Decodes the count line.
pub fn decode_count(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

fn parse_int(field: &str) -> Option<i32> {
    field.trim().parse().ok()
}
