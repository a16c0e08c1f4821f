//! Domain model types (pure).
//!
//! Workouts, their summary records, and the factory that builds them.
//! Nothing in this module performs I/O.

pub mod error;
pub mod factory;
pub mod info_message;
pub mod package;
pub mod workout;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError, WorkoutError};
pub use factory::{read_package, WorkoutCode};
pub use info_message::{InfoMessage, Language};
pub use package::{MalformedPackage, WorkoutPackage};
pub use workout::{
    Running, SportsWalking, Swimming, Training, TrainingBase, Workout, DEFAULT_LEN_STEP, M_IN_KM,
    MIN_IN_HOUR,
};
