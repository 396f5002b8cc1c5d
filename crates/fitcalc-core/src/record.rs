//! Computed workout summary.

use serde::Serialize;

/// Summary of one workout, produced by [`Calculator::report`].
///
/// [`Calculator::report`]: crate::calculator::Calculator::report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    kind: String,
    duration: f64,
    distance: f64,
    mean_speed: f64,
    calories: f64,
}

impl WorkoutRecord {
    pub(crate) fn new(
        kind: &str,
        duration: f64,
        distance: f64,
        mean_speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            duration,
            distance,
            mean_speed,
            calories,
        }
    }

    /// Workout label, e.g. `Running`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Duration in hours.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h.
    #[must_use]
    pub fn mean_speed(&self) -> f64 {
        self.mean_speed
    }

    /// Calories burned.
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.calories
    }
}
