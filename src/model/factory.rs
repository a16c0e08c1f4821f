//! Workout factory: maps a workout-type code and raw values to a [`Workout`].

use crate::model::error::WorkoutError;
use crate::model::{Running, SportsWalking, Swimming, Workout};
use std::fmt;
use std::str::FromStr;

// Workout code string constants
const CODE_SWIMMING: &str = "SWM";
const CODE_RUNNING: &str = "RUN";
const CODE_WALKING: &str = "WLK";

/// Recognized workout-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutCode {
    /// `SWM`: action, duration, weight, length_pool, count_pool.
    Swimming,
    /// `RUN`: action, duration, weight.
    Running,
    /// `WLK`: action, duration, weight, height.
    Walking,
}

impl WorkoutCode {
    /// Every recognized code.
    pub const ALL: [WorkoutCode; 3] = [
        WorkoutCode::Swimming,
        WorkoutCode::Running,
        WorkoutCode::Walking,
    ];

    /// Parse a workout-type code. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::UnknownWorkoutType` for any other string.
    pub fn parse(code: &str) -> Result<Self, WorkoutError> {
        match code {
            CODE_SWIMMING => Ok(WorkoutCode::Swimming),
            CODE_RUNNING => Ok(WorkoutCode::Running),
            CODE_WALKING => Ok(WorkoutCode::Walking),
            other => Err(WorkoutError::UnknownWorkoutType {
                code: other.to_string(),
            }),
        }
    }

    /// The wire form of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutCode::Swimming => CODE_SWIMMING,
            WorkoutCode::Running => CODE_RUNNING,
            WorkoutCode::Walking => CODE_WALKING,
        }
    }

    /// Number of positional values the variant takes.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutCode::Swimming => 5,
            WorkoutCode::Running => 3,
            WorkoutCode::Walking => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a workout from a code and its positional sensor values.
///
/// Values are applied in the variant's parameter order:
/// - `SWM`: action, duration, weight, length_pool, count_pool
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
///
/// Value ranges are not checked; only count fields must be whole numbers.
///
/// # Errors
///
/// - `UnknownWorkoutType` if `workout_type` is not recognized
/// - `ArityMismatch` if `data.len()` differs from the variant's arity
/// - `NonIntegral` if `action` or `count_pool` has a fractional part
/// - `OutOfRange` if `action` or `count_pool` does not fit in an `i64`
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let code = WorkoutCode::parse(workout_type)?;
    if data.len() != code.arity() {
        return Err(WorkoutError::ArityMismatch {
            code,
            expected: code.arity(),
            actual: data.len(),
        });
    }

    let action = whole("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match code {
        WorkoutCode::Swimming => Swimming::new(
            action,
            duration,
            weight,
            data[3],
            whole("count_pool", data[4])?,
        )
        .into(),
        WorkoutCode::Running => Running::new(action, duration, weight).into(),
        WorkoutCode::Walking => SportsWalking::new(action, duration, weight, data[3]).into(),
    };
    Ok(workout)
}

fn whole(field: &'static str, value: f64) -> Result<i64, WorkoutError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(WorkoutError::NonIntegral { field, value });
    }
    // i64::MAX is not representable; as f64 it rounds up to 2^63
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(WorkoutError::OutOfRange { field, value });
    }
    Ok(value as i64)
}
