//! Raw sensor packages and unparseable package lines.

/// One raw sensor reading: a workout-type code and its positional values.
///
/// Values are kept as delivered; interpretation happens in
/// [`read_package`](crate::model::read_package).
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutPackage {
    workout_type: String,
    data: Vec<f64>,
}

impl WorkoutPackage {
    /// Create a package from a code and its values.
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Workout-type code as received, e.g. `"SWM"`.
    pub fn workout_type(&self) -> &str {
        &self.workout_type
    }

    /// Positional sensor values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}

/// A JSONL line that could not be parsed into a [`WorkoutPackage`].
///
/// Carries enough context to report the problem and move on to the next line.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedPackage {
    line_number: usize,
    raw_line: String,
    error_message: String,
}

impl MalformedPackage {
    /// Create a new malformed package.
    ///
    /// # Arguments
    ///
    /// * `line_number` - The line number in the JSONL input (1-indexed)
    /// * `raw_line` - The raw line content that failed to parse
    /// * `error_message` - Human-readable error message
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            error_message: error_message.into(),
        }
    }

    /// Get the line number where the error occurred.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the raw line content.
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    /// Get the error message.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}
