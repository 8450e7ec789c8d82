//! Request model for the JSON request loop
//!
//! One request per line: `{"op": "<name>", ...arguments}`.

use serde::Deserialize;

/// A single catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Add {
        title: String,
        author: String,
        isbn: String,
        category: String,
        year: i32,
        copies: i32,
    },
    Borrow {
        title: String,
    },
    Return {
        title: String,
    },
    Delete {
        title: String,
    },
    Restore,
    Search {
        title: String,
    },
    LinearSearch {
        title: String,
    },
    BinarySearch {
        title: String,
    },
    BubbleSort,
    SelectionSort,
    List,
    ListSorted,
    DrainQueue,
    Stats,
    LoadReport,
}
