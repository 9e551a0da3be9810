//! Error types for the item source and the application shell.
//!
//! The grid core itself never fails. Errors only come from the edges:
//! reading the item list, loading configuration, and driving the terminal.
//! Each layer defines its own `thiserror` enum and converts upward via `From`.

use super::identifiers::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading the item list from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified items file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// No input source: no path given and stdin is a terminal.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The input is not a JSON array of items.
    ///
    /// `line` and `column` come from `serde_json` and point at the first
    /// offending byte.
    #[error("Invalid item JSON at line {line}, column {column}: {message}")]
    InvalidJson {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// Parser error message.
        message: String,
    },

    /// Two items share the same identifier.
    ///
    /// Identity comparison is how the grid detects reordering, so duplicate
    /// ids would make invalidation ambiguous.
    #[error("Duplicate item id {id} at position {position}")]
    DuplicateId {
        /// Repeated identifier.
        id: ItemId,
        /// 0-based position of the second occurrence.
        position: usize,
    },

    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::InvalidJson {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
