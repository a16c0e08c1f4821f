//! Driver integration functions.
//!
//! Connects parsed packages to the workout factory and writes rendered
//! summaries. The writer is injected so the whole run is testable without
//! touching stdout.

use crate::config::ResolvedConfig;
use crate::model::{read_package, AppError, InfoMessage, WorkoutError, WorkoutPackage};
use crate::parser::ParseResult;
use std::io::Write;
use tracing::{debug, info, warn};

/// Counts from one driver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Packages rendered to the output.
    pub rendered: usize,
    /// JSONL lines skipped because they could not be parsed.
    pub malformed: usize,
    /// Packages skipped because the factory or a formula failed.
    pub failed: usize,
}

impl RunSummary {
    /// Lines and packages that produced no output.
    pub fn skipped(&self) -> usize {
        self.malformed + self.failed
    }

    /// Fail the run if anything was skipped.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Incomplete` naming both counts when `skipped() > 0`.
    pub fn ensure_complete(&self) -> Result<(), AppError> {
        if self.skipped() == 0 {
            return Ok(());
        }
        Err(AppError::Incomplete {
            malformed: self.malformed,
            failed: self.failed,
        })
    }
}

/// Build a workout from a package and summarize it.
///
/// # Errors
///
/// Returns the `WorkoutError` from the factory or from a metric formula.
pub fn summarize_package(package: &WorkoutPackage) -> Result<InfoMessage, WorkoutError> {
    read_package(package.workout_type(), package.data())?.show_training_info()
}

/// Summarize every package in order and write one line per workout.
///
/// Malformed lines are logged, counted and skipped so the rest of the batch is
/// still rendered; the caller decides what the counts mean for the exit status.
/// Workout errors abort the run when `config.fail_fast` is set; otherwise they
/// are logged and skipped too.
///
/// # Errors
///
/// - `AppError::Workout` for the first failing package under `fail_fast`
/// - `AppError::Output` if writing to `out` fails
pub fn run<W: Write>(
    results: Vec<ParseResult>,
    config: &ResolvedConfig,
    out: &mut W,
) -> Result<RunSummary, AppError> {
    let mut summary = RunSummary::default();

    for result in results {
        let package = match result {
            ParseResult::Valid(package) => package,
            ParseResult::Malformed(malformed) => {
                warn!(
                    line = malformed.line_number(),
                    error = malformed.error_message(),
                    "Skipping malformed package line"
                );
                summary.malformed += 1;
                continue;
            }
        };

        match summarize_package(&package) {
            Ok(message) => {
                debug!(
                    workout_type = package.workout_type(),
                    record = %message,
                    "Workout summarized"
                );
                writeln!(out, "{}", message.render(config.language))?;
                summary.rendered += 1;
            }
            Err(err) if config.fail_fast => return Err(err.into()),
            Err(err) => {
                warn!(
                    workout_type = package.workout_type(),
                    error = %err,
                    "Skipping package that could not be summarized"
                );
                summary.failed += 1;
            }
        }
    }

    info!(
        rendered = summary.rendered,
        malformed = summary.malformed,
        failed = summary.failed,
        "Run complete"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, MalformedPackage};
    use crate::source::builtin_packages;

    // ===== Test Helpers =====

    fn valid(workout_type: &str, data: &[f64]) -> ParseResult {
        ParseResult::Valid(WorkoutPackage::new(workout_type, data.to_vec()))
    }

    fn keep_going() -> ResolvedConfig {
        ResolvedConfig {
            fail_fast: false,
            ..ResolvedConfig::default()
        }
    }

    fn run_to_string(
        results: Vec<ParseResult>,
        config: &ResolvedConfig,
    ) -> (Result<RunSummary, AppError>, String) {
        let mut out = Vec::new();
        let result = run(results, config, &mut out);
        (result, String::from_utf8(out).expect("utf-8 output"))
    }

    // ===== summarize_package Tests =====

    #[test]
    fn summarize_package_builds_record() {
        let package = WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let message = summarize_package(&package).unwrap();
        assert_eq!(message.training_type(), "Running");
    }

    #[test]
    fn summarize_package_reports_unknown_code() {
        let package = WorkoutPackage::new("YOGA", vec![1.0, 1.0, 1.0]);
        assert!(matches!(
            summarize_package(&package),
            Err(WorkoutError::UnknownWorkoutType { .. })
        ));
    }

    // ===== run Tests =====

    #[test]
    fn run_renders_builtin_batch_in_order() {
        let results = builtin_packages()
            .into_iter()
            .map(ParseResult::Valid)
            .collect();

        let (result, output) = run_to_string(results, &ResolvedConfig::default());
        let summary = result.unwrap();

        assert_eq!(summary.rendered, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Training type: Swimming;"));
        assert!(lines[1].starts_with("Training type: Running;"));
        assert!(lines[2].starts_with("Training type: SportsWalking;"));
    }

    #[test]
    fn run_uses_configured_language() {
        let config = ResolvedConfig {
            language: Language::Russian,
            ..ResolvedConfig::default()
        };
        let (result, output) = run_to_string(vec![valid("RUN", &[15000.0, 1.0, 75.0])], &config);

        assert!(result.is_ok());
        assert!(output.starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn run_skips_malformed_lines() {
        let results = vec![
            ParseResult::Malformed(MalformedPackage::new(1, "nope", "Invalid JSON")),
            valid("RUN", &[15000.0, 1.0, 75.0]),
        ];

        let (result, output) = run_to_string(results, &ResolvedConfig::default());

        assert_eq!(
            result.unwrap(),
            RunSummary {
                rendered: 1,
                malformed: 1,
                failed: 0
            }
        );
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn run_fail_fast_stops_at_first_workout_error() {
        let results = vec![
            valid("RUN", &[15000.0, 1.0, 75.0]),
            valid("BIK", &[1.0]),
            valid("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        ];

        let (result, output) = run_to_string(results, &ResolvedConfig::default());

        match result {
            Err(AppError::Workout(WorkoutError::UnknownWorkoutType { code })) => {
                assert_eq!(code, "BIK");
            }
            other => panic!("Expected unknown workout error, got {:?}", other),
        }
        assert_eq!(output.lines().count(), 1, "Earlier packages stay rendered");
    }

    #[test]
    fn run_keep_going_skips_failed_packages() {
        let results = vec![
            valid("RUN", &[15000.0, 0.0, 75.0]),
            valid("WLK", &[9000.0, 1.0, 75.0]),
            valid("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ];

        let (result, output) = run_to_string(results, &keep_going());

        assert_eq!(
            result.unwrap(),
            RunSummary {
                rendered: 1,
                malformed: 0,
                failed: 2
            }
        );
        assert!(output.starts_with("Training type: Swimming;"));
    }

    #[test]
    fn ensure_complete_passes_clean_run() {
        let summary = RunSummary {
            rendered: 3,
            malformed: 0,
            failed: 0,
        };
        assert!(summary.ensure_complete().is_ok());
    }

    #[test]
    fn ensure_complete_reports_skipped_counts() {
        let results = vec![ParseResult::Malformed(MalformedPackage::new(
            1,
            "{\"workout_type\":\"RUN\"",
            "Invalid JSON",
        ))];

        let (result, output) = run_to_string(results, &ResolvedConfig::default());
        let summary = result.unwrap();

        assert!(output.is_empty());
        assert_eq!(summary.skipped(), 1);
        match summary.ensure_complete() {
            Err(AppError::Incomplete { malformed, failed }) => {
                assert_eq!((malformed, failed), (1, 0));
            }
            other => panic!("Expected incomplete run, got {:?}", other),
        }
    }

    #[test]
    fn run_with_no_packages_writes_nothing() {
        let (result, output) = run_to_string(Vec::new(), &ResolvedConfig::default());
        assert_eq!(result.unwrap(), RunSummary::default());
        assert!(output.is_empty());
    }
}
