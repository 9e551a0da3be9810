//! Item input sources.
//!
//! The host reads the ordered item list once, from a file or piped stdin.
//! Two encodings are accepted:
//! - a JSON array of items
//! - JSON Lines, one item per line (blank lines skipped)
//!
//! Order is preserved exactly; the grid never sorts.

use crate::model::error::InputError;
use crate::model::{Item, ItemId};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Where the items come from.
#[derive(Debug)]
pub enum InputSource {
    /// Items file given on the command line.
    File(FileSource),
    /// Piped stdin.
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and parse every item.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O failures, malformed JSON and duplicate ids.
    pub fn load(self) -> Result<Vec<Item>, InputError> {
        let (origin, text) = match self {
            InputSource::File(f) => (f.path().display().to_string(), f.read_to_string()?),
            InputSource::Stdin(s) => ("stdin".to_string(), s.read_to_string()?),
        };
        let items = parse_items(&text)?;
        info!(%origin, count = items.len(), "Items loaded");
        Ok(items)
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource
/// 2. Otherwise use stdin, which must be piped
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is a terminal.
/// Returns `InputError::FileNotFound` if file does not exist.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Parse items from a JSON array or JSON Lines text.
///
/// # Errors
///
/// `InvalidJson` with the position of the first bad token (line numbers refer
/// to the whole input for JSON Lines too), or `DuplicateId`.
pub fn parse_items(text: &str) -> Result<Vec<Item>, InputError> {
    let items = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Item>>(text)?
    } else {
        parse_json_lines(text)?
    };
    check_unique_ids(&items)?;
    Ok(items)
}

fn parse_json_lines(text: &str) -> Result<Vec<Item>, InputError> {
    let mut items = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str::<Item>(line).map_err(|e| InputError::InvalidJson {
            line: index + 1,
            column: e.column(),
            message: e.to_string(),
        })?;
        items.push(item);
    }
    Ok(items)
}

/// Reject sequences where an id appears twice.
///
/// # Errors
///
/// `DuplicateId` naming the second occurrence.
pub fn check_unique_ids(items: &[Item]) -> Result<(), InputError> {
    let mut seen: HashSet<ItemId> = HashSet::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if !seen.insert(item.id) {
            return Err(InputError::DuplicateId {
                id: item.id,
                position,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parses_json_array_in_order() {
        let items = parse_items(
            r#"[
                {"id": 3, "sort_name": "zeta"},
                {"id": 1, "sort_name": "alpha", "title": "The Alpha", "monitored": true}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, ItemId::new(3));
        assert_eq!(items[1].display_title(), "The Alpha");
        assert!(items[1].monitored);
    }

    #[test]
    fn parses_json_lines_skipping_blanks() {
        let items = parse_items(
            "{\"id\": 1, \"sort_name\": \"a\"}\n\n{\"id\": 2, \"sort_name\": \"b\"}\n",
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].sort_name, "b");
    }

    #[test]
    fn empty_input_is_empty_sequence() {
        assert!(parse_items("").unwrap().is_empty());
        assert!(parse_items("[]").unwrap().is_empty());
    }

    #[test]
    fn json_lines_error_reports_input_line() {
        let err = parse_items("{\"id\": 1, \"sort_name\": \"a\"}\n{\"id\": oops}\n").unwrap_err();
        match err {
            InputError::InvalidJson { line, .. } => assert_eq!(line, 2),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_field_is_invalid_json() {
        assert!(matches!(
            parse_items(r#"[{"id": 1}]"#),
            Err(InputError::InvalidJson { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_items(
            r#"[{"id": 1, "sort_name": "a"}, {"id": 2, "sort_name": "b"}, {"id": 1, "sort_name": "c"}]"#,
        )
        .unwrap_err();
        match err {
            InputError::DuplicateId { id, position } => {
                assert_eq!(id, ItemId::new(1));
                assert_eq!(position, 2);
            }
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn file_source_loads_items() {
        let path = std::env::temp_dir().join("postergrid_source_items.json");
        fs::write(&path, r#"[{"id": 7, "sort_name": "seven"}]"#).unwrap();

        let items = detect_input_source(Some(path.clone()))
            .unwrap()
            .load()
            .unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(items, vec![Item::new(7u64, "seven")]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let result = detect_input_source(Some(PathBuf::from("/nonexistent/items.json")));
        assert!(matches!(result, Err(InputError::FileNotFound { .. })));
    }
}
