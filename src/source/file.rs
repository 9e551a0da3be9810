//! File-based item source.

use crate::model::error::InputError;
use std::path::{Path, PathBuf};

/// Items file, read once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source for an existing file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the path does not exist.
    pub fn new(path: PathBuf) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound { path });
        }
        Ok(Self { path })
    }

    /// Path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole file contents.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` when the file cannot be read.
    pub fn read_to_string(self) -> Result<String, InputError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn new_rejects_missing_file() {
        let path = PathBuf::from("/nonexistent/postergrid/items.json");
        match FileSource::new(path.clone()) {
            Err(InputError::FileNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn reads_contents() {
        let path = std::env::temp_dir().join("postergrid_file_source.json");
        fs::write(&path, "[]").unwrap();

        let source = FileSource::new(path.clone()).unwrap();
        assert_eq!(source.path(), path.as_path());
        assert_eq!(source.read_to_string().unwrap(), "[]");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn directory_read_is_io_error() {
        let source = FileSource::new(std::env::temp_dir()).unwrap();
        assert!(matches!(source.read_to_string(), Err(InputError::Io(_))));
    }
}
