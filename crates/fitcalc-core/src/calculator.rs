//! The `Calculator` trait and the shared `Training` session.
//!
//! `Calculator` carries the default distance and speed formulas; each
//! workout kind supplies its own calorie formula and may override the
//! step length or the speed formula. `Training` holds the fields every
//! package shares and is the base the concrete kinds wrap.

use crate::constants::{M_IN_KM, STEP_LENGTH_M};
use crate::raw::RawInput;
use crate::record::WorkoutRecord;

/// Error type for workout calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    /// Raw values do not match the workout's constructor signature.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The kind code is not one of the supported workouts.
    #[error("unknown workout kind: {0}")]
    UnknownWorkoutKind(String),

    /// A formula was requested from a session that does not define it.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Capability shared by every workout kind.
pub trait Calculator {
    /// Label printed in reports.
    fn name(&self) -> &str;

    /// Fields shared by every workout.
    fn session(&self) -> &Training;

    /// Meters covered by one action (step or stroke).
    fn step_length(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        f64::from(self.session().action_count) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration_h
    }

    /// Calories burned over the whole session.
    fn calories(&self) -> Result<f64, WorkoutError>;

    /// Build the summary record for this workout.
    fn report(&self) -> Result<WorkoutRecord, WorkoutError> {
        Ok(WorkoutRecord::new(
            self.name(),
            self.session().duration_h,
            self.distance(),
            self.mean_speed(),
            self.calories()?,
        ))
    }
}

/// Fields common to every workout package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    /// Steps or strokes counted by the sensor.
    pub action_count: u32,
    /// Session length in hours.
    pub duration_h: f64,
    /// Athlete weight in kilograms.
    pub weight_kg: f64,
}

impl Training {
    /// Create a session, rejecting durations that leave speed undefined.
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(WorkoutError::InvalidInput(format!(
                "duration_h must be positive, got {duration_h}"
            )));
        }
        if !weight_kg.is_finite() {
            return Err(WorkoutError::InvalidInput(format!(
                "weight_kg must be finite, got {weight_kg}"
            )));
        }
        Ok(Self {
            action_count,
            duration_h,
            weight_kg,
        })
    }

    /// Read the three leading fields of a package.
    pub(crate) fn from_raw(raw: &RawInput) -> Result<Self, WorkoutError> {
        Self::new(
            raw.count(0, "action_count")?,
            raw.float(1, "duration_h")?,
            raw.float(2, "weight_kg")?,
        )
    }
}

impl Calculator for Training {
    fn name(&self) -> &str {
        "Training"
    }

    fn session(&self) -> &Training {
        self
    }

    fn calories(&self) -> Result<f64, WorkoutError> {
        Err(WorkoutError::NotImplemented(
            "calories are defined per workout kind".into(),
        ))
    }
}
