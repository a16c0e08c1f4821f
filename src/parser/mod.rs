//! JSONL parser for workout sensor packages.
//!
//! Each line is one package:
//!
//! ```json
//! {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}
//! ```
//!
//! Parsing is pure; the workout code and value count are checked later by the
//! factory, not here.

use crate::model::{MalformedPackage, ParseError, WorkoutPackage};
use serde::Deserialize;

// Field name constants
const FIELD_WORKOUT_TYPE: &str = "workout_type";
const FIELD_DATA: &str = "data";

/// Raw JSON structure for deserializing packages.
#[derive(Debug, Deserialize)]
struct RawPackage {
    #[serde(default)]
    workout_type: Option<String>,
    #[serde(default)]
    data: Option<Vec<f64>>,
}

/// Result of parsing a JSONL line with graceful error handling.
///
/// This allows the driver to continue with subsequent lines
/// even when one line is malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    /// Successfully parsed a package.
    Valid(WorkoutPackage),
    /// Encountered a malformed line that could not be parsed.
    Malformed(MalformedPackage),
}

/// Parse a single JSONL line into a package.
///
/// # Arguments
///
/// * `line` - One line of JSONL input
/// * `line_number` - 1-based line number used in error reports
///
/// # Errors
///
/// - `ParseError::InvalidJson` for bad syntax or wrongly typed values
/// - `ParseError::MissingField` when `workout_type` or `data` is absent
pub fn parse_package(line: &str, line_number: usize) -> Result<WorkoutPackage, ParseError> {
    let raw: RawPackage = serde_json::from_str(line).map_err(|e| ParseError::InvalidJson {
        line: line_number,
        message: e.to_string(),
    })?;

    let workout_type = raw.workout_type.ok_or(ParseError::MissingField {
        line: line_number,
        field: FIELD_WORKOUT_TYPE,
    })?;
    let data = raw.data.ok_or(ParseError::MissingField {
        line: line_number,
        field: FIELD_DATA,
    })?;

    Ok(WorkoutPackage::new(workout_type, data))
}

/// Parse a single JSONL line, converting failures into a [`MalformedPackage`].
pub fn parse_package_graceful(line: &str, line_number: usize) -> ParseResult {
    match parse_package(line, line_number) {
        Ok(package) => ParseResult::Valid(package),
        Err(e) => ParseResult::Malformed(MalformedPackage::new(line_number, line, e.to_string())),
    }
}

/// Parse a whole JSONL document.
///
/// Blank lines are skipped but still counted, so reported line numbers match
/// what an editor shows.
pub fn parse_packages(input: &str) -> Vec<ParseResult> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_package_graceful(line, idx + 1))
        .collect()
}
