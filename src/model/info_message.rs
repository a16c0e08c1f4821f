//! Workout summary record and its text rendering.

use serde::Deserialize;
use std::fmt;

/// Label language for rendered summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    /// English labels.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Russian labels, as printed by the original sensor tooling.
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Parse a short language code (`"en"`, `"ru"`).
    ///
    /// Returns `None` for any other code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }

    /// Short language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }
}

/// Immutable summary of one workout session.
///
/// All values are fixed when the workout is summarized; there are no setters.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoMessage {
    training_type: &'static str,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    /// Create a summary record.
    ///
    /// # Arguments
    ///
    /// * `training_type` - Variant display name
    /// * `duration` - Hours
    /// * `distance` - Kilometers
    /// * `speed` - Kilometers per hour
    /// * `calories` - Kilocalories
    pub fn new(
        training_type: &'static str,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Variant display name.
    pub fn training_type(&self) -> &'static str {
        self.training_type
    }

    /// Session length in hours.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Calories burned.
    pub fn calories(&self) -> f64 {
        self.calories
    }

    /// Render as a single line with three decimals per metric.
    pub fn render(&self, language: Language) -> String {
        match language {
            Language::English => format!(
                "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Avg speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Language::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Language::English))
    }
}
