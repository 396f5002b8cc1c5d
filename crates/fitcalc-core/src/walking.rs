//! Sports walking.

use crate::calculator::{Calculator, Training, WorkoutError};
use crate::common::floor_div;
use crate::constants::walking::{SPEED_HEIGHT_MULTIPLIER, WEIGHT_MULTIPLIER};
use crate::constants::MIN_IN_HOUR;
use crate::kind::WorkoutKind;
use crate::raw::RawInput;

/// Sports walking session.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Training,
    height_cm: u32,
}

impl SportsWalking {
    /// Create a walking session. Height must be non-zero.
    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: u32,
    ) -> Result<Self, WorkoutError> {
        Self::with_session(Training::new(action_count, duration_h, weight_kg)?, height_cm)
    }

    /// Build from a `WLK` package: action count, duration, weight, height.
    pub fn from_raw(raw: &RawInput) -> Result<Self, WorkoutError> {
        raw.expect_arity(WorkoutKind::Walking)?;
        Self::with_session(Training::from_raw(raw)?, raw.count(3, "height_cm")?)
    }

    fn with_session(session: Training, height_cm: u32) -> Result<Self, WorkoutError> {
        if height_cm == 0 {
            return Err(WorkoutError::InvalidInput("height_cm must be non-zero".into()));
        }
        Ok(Self { session, height_cm })
    }

    /// Athlete height in centimeters.
    #[must_use]
    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }
}

impl Calculator for SportsWalking {
    fn name(&self) -> &str {
        WorkoutKind::Walking.label()
    }

    fn session(&self) -> &Training {
        &self.session
    }

    /// The speed/height term is floor-divided, so it only contributes
    /// once the squared speed reaches the height. Output depends on this.
    fn calories(&self) -> Result<f64, WorkoutError> {
        let Training {
            duration_h,
            weight_kg,
            ..
        } = self.session;
        let speed_term = floor_div(self.mean_speed().powi(2), f64::from(self.height_cm))
            .ok_or_else(|| WorkoutError::InvalidInput("height_cm must be non-zero".into()))?;
        Ok(
            (WEIGHT_MULTIPLIER * weight_kg + speed_term * SPEED_HEIGHT_MULTIPLIER * weight_kg)
                * duration_h
                * MIN_IN_HOUR,
        )
    }
}
