//! Stdin-based package source for piped input.

use crate::model::error::InputError;
use crate::parser::{parse_packages, ParseResult};
use std::io::{BufReader, Read};

/// Stdin source for piped JSONL input, e.g. `cat packages.jsonl | trainsum -`.
///
/// Reads until EOF on the first poll.
#[derive(Debug)]
pub struct StdinSource<R: Read> {
    reader: BufReader<R>,
    complete: bool,
}

impl StdinSource<std::io::Stdin> {
    /// Create a new StdinSource from process stdin.
    pub fn new() -> Self {
        Self::from_reader(std::io::stdin())
    }
}

impl Default for StdinSource<std::io::Stdin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Read> StdinSource<R> {
    /// Create StdinSource from any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            complete: false,
        }
    }

    /// Read all remaining input and parse it.
    ///
    /// Returns an empty vec once EOF has been reached.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for I/O errors, including non-UTF-8 input.
    pub fn poll(&mut self) -> Result<Vec<ParseResult>, InputError> {
        if self.complete {
            return Ok(Vec::new());
        }

        let mut buffer = String::new();
        self.reader.read_to_string(&mut buffer)?;
        self.complete = true;

        Ok(parse_packages(&buffer))
    }

    /// Check if EOF has been reached.
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
