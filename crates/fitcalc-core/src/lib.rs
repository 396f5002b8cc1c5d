//! # fitcalc-core
//!
//! Core library for FitCalc-rs: distance, mean speed, and calorie
//! calculators for running, sports walking, and pool swimming.

pub mod calculator;
pub(crate) mod common;
pub mod constants;
pub mod kind;
pub mod raw;
pub mod record;
pub mod registry;
pub mod running;
pub mod swimming;
pub mod walking;
pub mod workout;

// Re-exports
pub use calculator::{Calculator, Training, WorkoutError};
pub use constants::exit_codes;
pub use kind::WorkoutKind;
pub use raw::RawInput;
pub use record::WorkoutRecord;
pub use registry::{Dispatcher, WorkoutFactory};
pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;
pub use workout::Workout;

/// Resolve a package and build its summary record.
///
/// This is a convenience function for simple use cases. Batch processing
/// goes through `WorkoutFactory` directly.
///
/// # Example
/// ```
/// let record = fitcalc_core::summarize("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert_eq!(record.kind(), "Running");
/// ```
pub fn summarize(code: &str, values: &[f64]) -> Result<WorkoutRecord, WorkoutError> {
    Dispatcher::new()
        .resolve(code, &RawInput::from(values))?
        .report()
}
