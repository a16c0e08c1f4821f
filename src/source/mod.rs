//! Package input sources.
//!
//! This module provides input sources for workout sensor packages:
//! - Built-in reference samples when no input is given
//! - File loading for read-once JSONL input
//! - Stdin for piped JSONL input (`-`)
//! - Unified PackageSource enum for all three

use crate::model::error::InputError;
use crate::model::WorkoutPackage;
use crate::parser::ParseResult;
use std::path::PathBuf;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Path argument that selects stdin.
pub const STDIN_PATH: &str = "-";

/// Unified input source for workout packages.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum PackageSource {
    /// Built-in reference packages.
    Builtin(Vec<WorkoutPackage>),
    /// File source - read-once loading
    File(FileSource),
    /// Stdin source - reads piped stdin to EOF
    Stdin(StdinSource<std::io::Stdin>),
}

impl PackageSource {
    /// Take all available packages from the source.
    ///
    /// Every source is read-once: the first call returns everything, later
    /// calls return an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `InputError` for I/O errors.
    pub fn poll(&mut self) -> Result<Vec<ParseResult>, InputError> {
        match self {
            PackageSource::Builtin(packages) => Ok(std::mem::take(packages)
                .into_iter()
                .map(ParseResult::Valid)
                .collect()),
            PackageSource::File(f) => Ok(f.drain_packages()),
            PackageSource::Stdin(s) => s.poll(),
        }
    }

    /// Short description for log messages.
    pub fn describe(&self) -> String {
        match self {
            PackageSource::Builtin(_) => "built-in samples".to_string(),
            PackageSource::File(f) => f.path().display().to_string(),
            PackageSource::Stdin(_) => "stdin".to_string(),
        }
    }
}

/// The reference sensor packages: one swim, one run, one walk.
pub fn builtin_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Detect and create the appropriate package source.
///
/// # Logic:
/// 1. No path: built-in samples
/// 2. `-`: stdin
/// 3. Any other path: FileSource (loads on construction)
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_package_source(file: Option<PathBuf>) -> Result<PackageSource, InputError> {
    match file {
        None => Ok(PackageSource::Builtin(builtin_packages())),
        Some(path) if path.as_os_str() == STDIN_PATH => {
            Ok(PackageSource::Stdin(StdinSource::new()))
        }
        Some(path) => Ok(PackageSource::File(FileSource::new(path)?)),
    }
}
