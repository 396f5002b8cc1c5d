//! Orchestration interfaces.

use fitcalc_core::calculator::WorkoutError;
use fitcalc_core::record::WorkoutRecord;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present one computed workout.
    fn present_record(&self, record: &WorkoutRecord);

    /// Present a package that failed to resolve or report.
    fn present_error(&self, code: &str, error: &WorkoutError);
}

/// What to do with the rest of a batch after a package fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Report the failure and move on to the next package.
    #[default]
    Continue,
    /// Stop at the first failure.
    FailFast,
}

/// Result of processing one package.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutOutcome {
    /// Kind code as received.
    pub code: String,
    /// The computed record or a structured error.
    pub outcome: Result<WorkoutRecord, WorkoutError>,
}

/// Totals for a processed batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Packages attempted.
    pub processed: usize,
    /// Packages that failed.
    pub failed: usize,
}

impl BatchSummary {
    /// Whether every attempted package succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_record(&self, _record: &WorkoutRecord) {}
    fn present_error(&self, _code: &str, _error: &WorkoutError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_presenter() {
        let presenter = NullPresenter;
        let record = fitcalc_core::summarize("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        presenter.present_record(&record);
        presenter.present_error("BIKE", &WorkoutError::UnknownWorkoutKind("BIKE".into()));
    }

    #[test]
    fn default_policy_continues() {
        assert_eq!(BatchPolicy::default(), BatchPolicy::Continue);
    }

    #[test]
    fn summary_success() {
        assert!(BatchSummary { processed: 3, failed: 0 }.is_success());
        assert!(!BatchSummary { processed: 3, failed: 1 }.is_success());
    }
}
