//! Workout dispatcher: maps a kind code and raw package to a calculator.

use tracing::debug;

use crate::calculator::WorkoutError;
use crate::kind::WorkoutKind;
use crate::raw::RawInput;
use crate::workout::Workout;

/// Factory trait for building workouts from sensor packages.
pub trait WorkoutFactory {
    /// Resolve `code` and build the matching workout from `raw`.
    fn resolve(&self, code: &str, raw: &RawInput) -> Result<Workout, WorkoutError>;

    /// List all recognized kind codes.
    fn available(&self) -> Vec<&str>;
}

/// Default dispatcher over the built-in workout kinds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    /// Create a new dispatcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WorkoutFactory for Dispatcher {
    fn resolve(&self, code: &str, raw: &RawInput) -> Result<Workout, WorkoutError> {
        let kind = WorkoutKind::from_code(code)?;
        let workout = Workout::from_raw(kind, raw)?;
        debug!(code, kind = kind.label(), values = raw.len(), "resolved workout");
        Ok(workout)
    }

    fn available(&self) -> Vec<&str> {
        WorkoutKind::ALL.iter().map(|kind| kind.code()).collect()
    }
}
