//! Pool swimming.
//!
//! Distance counts strokes with a longer step; mean speed ignores strokes
//! entirely and comes from pool geometry.

use crate::calculator::{Calculator, Training, WorkoutError};
use crate::constants::swimming::{SPEED_MULTIPLIER, SPEED_SHIFT, STROKE_LENGTH_M};
use crate::constants::M_IN_KM;
use crate::kind::WorkoutKind;
use crate::raw::RawInput;

/// Pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Training,
    pool_length_m: u32,
    lap_count: u32,
}

impl Swimming {
    /// Create a swimming session.
    pub fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: u32,
        lap_count: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Training::new(action_count, duration_h, weight_kg)?,
            pool_length_m,
            lap_count,
        })
    }

    /// Build from a `SWM` package: action count, duration, weight, pool
    /// length, lap count.
    pub fn from_raw(raw: &RawInput) -> Result<Self, WorkoutError> {
        raw.expect_arity(WorkoutKind::Swimming)?;
        Ok(Self {
            session: Training::from_raw(raw)?,
            pool_length_m: raw.count(3, "pool_length_m")?,
            lap_count: raw.count(4, "lap_count")?,
        })
    }

    /// Pool length in meters.
    #[must_use]
    pub fn pool_length_m(&self) -> u32 {
        self.pool_length_m
    }

    /// Number of pool lengths swum.
    #[must_use]
    pub fn lap_count(&self) -> u32 {
        self.lap_count
    }
}

impl Calculator for Swimming {
    fn name(&self) -> &str {
        WorkoutKind::Swimming.label()
    }

    fn session(&self) -> &Training {
        &self.session
    }

    fn step_length(&self) -> f64 {
        STROKE_LENGTH_M
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_speed(&self) -> f64 {
        let pool_distance_m = u64::from(self.pool_length_m) * u64::from(self.lap_count);
        pool_distance_m as f64 / M_IN_KM / self.session.duration_h
    }

    fn calories(&self) -> Result<f64, WorkoutError> {
        Ok((self.mean_speed() + SPEED_SHIFT) * SPEED_MULTIPLIER * self.session.weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_session() {
        let swim = Swimming::new(720, 1.0, 80.0, 25, 40).unwrap();
        assert!((swim.distance() - 0.9936).abs() < 1e-9);
        assert!((swim.mean_speed() - 1.0).abs() < 1e-9);
        assert!((swim.calories().unwrap() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn speed_ignores_stroke_distance() {
        let swim = Swimming::new(1500, 1.5, 60.0, 50, 30).unwrap();
        assert!((swim.distance() - 2.07).abs() < 1e-9);
        assert!((swim.mean_speed() - 1.0).abs() < 1e-9);
        assert!((swim.calories().unwrap() - 252.0).abs() < 1e-9);
    }

    #[test]
    fn empty_pool_session() {
        let swim = Swimming::new(0, 1.0, 70.0, 25, 0).unwrap();
        assert!(swim.distance().abs() < f64::EPSILON);
        assert!(swim.mean_speed().abs() < f64::EPSILON);
        assert!((swim.calories().unwrap() - 154.0).abs() < 1e-9);
    }

    #[test]
    fn from_raw_wrong_arity() {
        let raw = RawInput::from(vec![720.0, 1.0, 80.0, 25.0]);
        assert!(matches!(
            Swimming::from_raw(&raw),
            Err(WorkoutError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_raw_reads_pool() {
        let raw = RawInput::from(vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        let swim = Swimming::from_raw(&raw).unwrap();
        assert_eq!(swim.pool_length_m(), 25);
        assert_eq!(swim.lap_count(), 40);
    }
}
