//! Workout variants and their metric formulas.
//!
//! Shared inputs live in [`TrainingBase`], embedded by every variant. The
//! [`Training`] trait carries the default distance and speed formulas; each
//! variant overrides what differs and must supply its own calorie formula.
//! [`Workout`] is the closed set of variants the factory can produce.

use crate::model::error::WorkoutError;
use crate::model::InfoMessage;

/// Meters per kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by one step, in meters.
pub const DEFAULT_LEN_STEP: f64 = 0.65;

/// Inputs common to every workout variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingBase {
    action: i64,
    duration: f64,
    weight: f64,
}

impl TrainingBase {
    /// Create the shared inputs.
    ///
    /// # Arguments
    ///
    /// * `action` - Number of steps or strokes
    /// * `duration` - Session length in hours
    /// * `weight` - Athlete weight in kilograms
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }

    /// Number of steps or strokes.
    pub fn action(&self) -> i64 {
        self.action
    }

    /// Session length in hours.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Athlete weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Metric formulas shared by all workout variants.
///
/// `spent_calories` has no default: every variant must define it, so there is no
/// base implementation that could be invoked by mistake.
pub trait Training {
    /// Distance covered per action, in meters.
    const LEN_STEP: f64 = DEFAULT_LEN_STEP;

    /// Name shown as the training type in the summary.
    const DISPLAY_NAME: &'static str;

    /// The shared inputs.
    fn base(&self) -> &TrainingBase;

    /// Distance in kilometers: `action * LEN_STEP / M_IN_KM`.
    fn distance(&self) -> f64 {
        self.base().action() as f64 * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h: `distance / duration`.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DivisionByZero` when `duration` is zero.
    fn mean_speed(&self) -> Result<f64, WorkoutError> {
        per_hour(self.distance(), self.base().duration())
    }

    /// Calories burned, in kilocalories.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Training::mean_speed`], plus variant-specific
    /// zero divisors.
    fn spent_calories(&self) -> Result<f64, WorkoutError>;
}

fn per_hour(km: f64, duration: f64) -> Result<f64, WorkoutError> {
    if duration == 0.0 {
        return Err(WorkoutError::DivisionByZero { field: "duration" });
    }
    Ok(km / duration)
}

// ===== Running =====

/// Running session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    base: TrainingBase,
}

impl Running {
    const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_MEAN_SPEED_SUBTRAHEND: f64 = 20.0;

    /// Create a running session from step count, hours and kilograms.
    pub fn new(action: i64, duration: f64, weight: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    const DISPLAY_NAME: &'static str = "Running";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed()?;
        let base = &self.base;
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * speed - Self::CALORIES_MEAN_SPEED_SUBTRAHEND)
            * base.weight()
            / M_IN_KM
            * base.duration()
            * MIN_IN_HOUR)
    }
}

// ===== SportsWalking =====

/// Sports walking session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    base: TrainingBase,
    height: f64,
}

impl SportsWalking {
    const WEIGHT_MULTIPLIER_1: f64 = 0.035;
    const WEIGHT_MULTIPLIER_2: f64 = 0.029;
    const SPEED_POWER: i32 = 2;

    /// Create a walking session; `height` is in centimeters.
    pub fn new(action: i64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            height,
        }
    }

    /// Athlete height in centimeters.
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    const DISPLAY_NAME: &'static str = "SportsWalking";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    /// The squared speed is floor-divided by height, so the second term only
    /// contributes once `speed^2 >= height`.
    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed()?;
        if self.height == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }
        let base = &self.base;
        let speed_term = (speed.powi(Self::SPEED_POWER) / self.height).floor();
        Ok((Self::WEIGHT_MULTIPLIER_1 * base.weight()
            + speed_term * Self::WEIGHT_MULTIPLIER_2 * base.weight())
            * base.duration()
            * MIN_IN_HOUR)
    }
}

// ===== Swimming =====

/// Pool swimming session.
///
/// Distance still comes from the stroke count; speed comes from pool geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    base: TrainingBase,
    length_pool: f64,
    count_pool: i64,
}

impl Swimming {
    const MEAN_SPEED_SUMMAND: f64 = 1.1;
    const MEAN_SPEED_MULTIPLIER: f64 = 2.0;

    /// Create a swimming session.
    ///
    /// # Arguments
    ///
    /// * `action` - Number of strokes
    /// * `duration` - Session length in hours
    /// * `weight` - Athlete weight in kilograms
    /// * `length_pool` - Pool length in meters
    /// * `count_pool` - Number of pool lengths swum
    pub fn new(action: i64, duration: f64, weight: f64, length_pool: f64, count_pool: i64) -> Self {
        Self {
            base: TrainingBase::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    /// Pool length in meters.
    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    /// Number of pool lengths swum.
    pub fn count_pool(&self) -> i64 {
        self.count_pool
    }
}

impl Training for Swimming {
    const LEN_STEP: f64 = 1.38;
    const DISPLAY_NAME: &'static str = "Swimming";

    fn base(&self) -> &TrainingBase {
        &self.base
    }

    fn mean_speed(&self) -> Result<f64, WorkoutError> {
        per_hour(
            self.length_pool * self.count_pool as f64 / M_IN_KM,
            self.base.duration(),
        )
    }

    fn spent_calories(&self) -> Result<f64, WorkoutError> {
        let speed = self.mean_speed()?;
        Ok((speed + Self::MEAN_SPEED_SUMMAND) * Self::MEAN_SPEED_MULTIPLIER * self.base.weight())
    }
}

// ===== Workout =====

/// One workout of any supported variant.
///
/// Sum type enforces exactly one variant; dispatch is an exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    /// Running session.
    Running(Running),
    /// Sports walking session.
    SportsWalking(SportsWalking),
    /// Pool swimming session.
    Swimming(Swimming),
}

impl Workout {
    /// Variant display name, e.g. `"SportsWalking"`.
    pub fn training_type(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::DISPLAY_NAME,
            Workout::SportsWalking(_) => SportsWalking::DISPLAY_NAME,
            Workout::Swimming(_) => Swimming::DISPLAY_NAME,
        }
    }

    /// The shared inputs.
    pub fn base(&self) -> &TrainingBase {
        match self {
            Workout::Running(t) => t.base(),
            Workout::SportsWalking(t) => t.base(),
            Workout::Swimming(t) => t.base(),
        }
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(t) => t.distance(),
            Workout::SportsWalking(t) => t.distance(),
            Workout::Swimming(t) => t.distance(),
        }
    }

    /// Mean speed in km/h.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DivisionByZero` when `duration` is zero.
    pub fn mean_speed(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Running(t) => t.mean_speed(),
            Workout::SportsWalking(t) => t.mean_speed(),
            Workout::Swimming(t) => t.mean_speed(),
        }
    }

    /// Calories burned, in kilocalories.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::DivisionByZero` for a zero `duration`, or a zero
    /// `height` on sports walking.
    pub fn spent_calories(&self) -> Result<f64, WorkoutError> {
        match self {
            Workout::Running(t) => t.spent_calories(),
            Workout::SportsWalking(t) => t.spent_calories(),
            Workout::Swimming(t) => t.spent_calories(),
        }
    }

    /// Build the summary record for this session.
    ///
    /// Metrics are computed in a fixed order: distance, speed, calories. The
    /// workout is not modified, so repeated calls yield equal records.
    ///
    /// # Errors
    ///
    /// Propagates the first `WorkoutError` from the speed or calorie formulas.
    pub fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        match self {
            Workout::Running(t) => summarize(t),
            Workout::SportsWalking(t) => summarize(t),
            Workout::Swimming(t) => summarize(t),
        }
    }
}

fn summarize<T: Training>(training: &T) -> Result<InfoMessage, WorkoutError> {
    let distance = training.distance();
    let speed = training.mean_speed()?;
    let calories = training.spent_calories()?;
    Ok(InfoMessage::new(
        T::DISPLAY_NAME,
        training.base().duration(),
        distance,
        speed,
        calories,
    ))
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<SportsWalking> for Workout {
    fn from(training: SportsWalking) -> Self {
        Workout::SportsWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}
