//! File-based package source.
//!
//! Provides FileSource for reading a JSONL package file once.

use crate::model::error::InputError;
use crate::parser::{parse_packages, ParseResult};
use std::path::{Path, PathBuf};

/// Read-once JSONL package file.
///
/// The file is read at construction so that a missing or unreadable file is
/// reported before any output is produced.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    contents: Option<String>,
}

impl FileSource {
    /// Open and read the package file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;

        Ok(Self {
            path: path.to_path_buf(),
            contents: Some(contents),
        })
    }

    /// Path the packages were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and return all packages; subsequent calls return an empty vec.
    pub fn drain_packages(&mut self) -> Vec<ParseResult> {
        self.contents
            .take()
            .map(|contents| parse_packages(&contents))
            .unwrap_or_default()
    }
}
