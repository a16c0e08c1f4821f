//! Error types for trainsum.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Package file/stdin reading failures (file not found, IO)
//!   - [`WorkoutError`] - Factory and formula failures (unknown code, bad arity, zero divisor)
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - `std::io::Error` - Failures writing rendered summaries to stdout
//!
//! [`ParseError`] is absent from [`AppError`]: a malformed JSONL line is counted and
//! skipped, and the count is reported once the batch is done
//! ([`AppError::Incomplete`] under fail-fast).

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::WorkoutCode;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// # Examples
///
/// ```
/// use trainsum::model::error::{AppError, WorkoutError};
///
/// fn build() -> Result<(), WorkoutError> {
///     Err(WorkoutError::UnknownWorkoutType { code: "BIK".to_string() })
/// }
///
/// fn summarize() -> Result<(), AppError> {
///     // WorkoutError converts to AppError via From
///     build()?;
///     Ok(())
/// }
///
/// assert!(matches!(summarize(), Err(AppError::Workout(_))));
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read sensor packages from file or stdin.
    #[error("Failed to read input: {0}")]
    InputRead(#[from] InputError),

    /// A package could not be turned into a workout summary.
    ///
    /// Fatal only when `fail_fast` is enabled; otherwise the driver logs and skips it.
    #[error("Failed to summarize workout: {0}")]
    Workout(#[from] WorkoutError),

    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Fail-fast run finished with skipped lines or packages.
    #[error("Skipped {malformed} malformed line(s) and {failed} failed package(s)")]
    Incomplete {
        /// JSONL lines that could not be parsed.
        malformed: usize,
        /// Packages that could not be summarized.
        failed: usize,
    },

    /// Writing rendered output failed (e.g. broken pipe).
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors encountered when reading sensor packages from files or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified package file does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use trainsum::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.jsonl")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.jsonl"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was not found.
        path: PathBuf,
    },

    /// Generic I/O error reading from the input source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while building a workout from a package or computing its metrics.
///
/// Every variant is surfaced to the caller immediately; nothing in the model retries
/// or substitutes a default value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorkoutError {
    /// The workout-type code is not one of `SWM`, `RUN`, `WLK`.
    ///
    /// # Examples
    ///
    /// ```
    /// use trainsum::model::error::WorkoutError;
    ///
    /// let err = WorkoutError::UnknownWorkoutType { code: "BIK".to_string() };
    /// assert_eq!(err.to_string(), "Unknown workout type: 'BIK'");
    /// ```
    #[error("Unknown workout type: '{code}'")]
    UnknownWorkoutType {
        /// The unrecognized code as received.
        code: String,
    },

    /// The number of values does not match the variant's positional parameters.
    #[error("{code} expects {expected} values, got {actual}")]
    ArityMismatch {
        /// The recognized workout code.
        code: WorkoutCode,
        /// Number of positional parameters the variant takes.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A count field (`action`, `count_pool`) was given a non-whole number.
    #[error("Field '{field}' must be a whole number, got {value}")]
    NonIntegral {
        /// Name of the count field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A count field is whole but does not fit in a 64-bit signed integer.
    #[error("Field '{field}' is out of range: {value}")]
    OutOfRange {
        /// Name of the count field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A formula would divide by zero.
    ///
    /// Raised for `duration == 0` (mean speed) and `height == 0` (sports walking
    /// calories) instead of producing an infinite or NaN metric.
    #[error("Division by zero: '{field}' must not be zero")]
    DivisionByZero {
        /// The zero-valued divisor field.
        field: &'static str,
    },
}

/// Errors encountered when parsing a JSONL package line.
///
/// Parsing errors are **non-fatal**: the driver logs the line number and skips it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A line contains syntactically invalid JSON, or values of the wrong JSON type.
    ///
    /// # Examples
    ///
    /// ```
    /// use trainsum::model::error::ParseError;
    ///
    /// let err = ParseError::InvalidJson {
    ///     line: 42,
    ///     message: "expected value at line 1 column 1".to_string()
    /// };
    /// assert!(err.to_string().contains("line 42"));
    /// ```
    #[error("Invalid JSON at line {line}: {message}")]
    InvalidJson {
        /// 1-based line number.
        line: usize,
        /// Message from `serde_json`.
        message: String,
    },

    /// A JSON object is missing `workout_type` or `data`.
    #[error("Missing required field '{field}' at line {line}")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// The name of the missing field.
        field: &'static str,
    },
}
