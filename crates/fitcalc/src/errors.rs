//! Error handling and exit codes.

use fitcalc_core::calculator::WorkoutError;
use fitcalc_core::constants::exit_codes;
use fitcalc_orchestration::interfaces::WorkoutOutcome;
use fitcalc_orchestration::orchestrator::first_error;

/// Handle a workout error and return the appropriate exit code.
pub fn handle_error(err: &WorkoutError) -> i32 {
    match err {
        WorkoutError::InvalidInput(_) => exit_codes::ERROR_INVALID_INPUT,
        WorkoutError::UnknownWorkoutKind(_) => exit_codes::ERROR_UNKNOWN_KIND,
        WorkoutError::NotImplemented(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for a processed batch: taken from its first failure.
pub fn batch_exit_code(results: &[WorkoutOutcome]) -> i32 {
    first_error(results).map_or(exit_codes::SUCCESS, handle_error)
}
