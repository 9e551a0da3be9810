//! Stdin-based item source for piped input.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};

/// Piped stdin, read to EOF.
///
/// Refuses to start on an interactive terminal so the host does not block
/// waiting for input the user forgot to pipe.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: R,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is a TTY.
    pub fn new() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Ok(Self { reader: stdin })
    }
}

impl<R: Read> StdinSource<R> {
    /// Create a source from any reader, bypassing the TTY check.
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }

    /// Everything up to EOF.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and invalid UTF-8.
    pub fn read_to_string(mut self) -> Result<String, InputError> {
        let mut text = String::new();
        self.reader.read_to_string(&mut text)?;
        Ok(text)
    }
}
