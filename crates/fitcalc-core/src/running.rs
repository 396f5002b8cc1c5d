//! Running.

use crate::calculator::{Calculator, Training, WorkoutError};
use crate::constants::running::{SPEED_MULTIPLIER, SPEED_SHIFT};
use crate::constants::{MIN_IN_HOUR, M_IN_KM};
use crate::kind::WorkoutKind;
use crate::raw::RawInput;

/// Running session. Uses the default step length and speed formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Training,
}

impl Running {
    /// Create a running session.
    pub fn new(action_count: u32, duration_h: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Training::new(action_count, duration_h, weight_kg)?,
        })
    }

    /// Build from a `RUN` package: action count, duration, weight.
    pub fn from_raw(raw: &RawInput) -> Result<Self, WorkoutError> {
        raw.expect_arity(WorkoutKind::Running)?;
        Ok(Self {
            session: Training::from_raw(raw)?,
        })
    }
}

impl Calculator for Running {
    fn name(&self) -> &str {
        WorkoutKind::Running.label()
    }

    fn session(&self) -> &Training {
        &self.session
    }

    fn calories(&self) -> Result<f64, WorkoutError> {
        let Training {
            duration_h,
            weight_kg,
            ..
        } = self.session;
        Ok(
            (SPEED_MULTIPLIER * self.mean_speed() - SPEED_SHIFT) * weight_kg / M_IN_KM
                * duration_h
                * MIN_IN_HOUR,
        )
    }
}
