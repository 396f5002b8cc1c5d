//! Tagged union over the supported workout kinds.

use crate::calculator::{Calculator, Training, WorkoutError};
use crate::kind::WorkoutKind;
use crate::raw::RawInput;
use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::SportsWalking;

/// A resolved workout, ready to report.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Build the variant for `kind` from positional raw values.
    pub fn from_raw(kind: WorkoutKind, raw: &RawInput) -> Result<Self, WorkoutError> {
        match kind {
            WorkoutKind::Running => Running::from_raw(raw).map(Self::Running),
            WorkoutKind::Walking => SportsWalking::from_raw(raw).map(Self::Walking),
            WorkoutKind::Swimming => Swimming::from_raw(raw).map(Self::Swimming),
        }
    }

    /// The kind of this workout.
    #[must_use]
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::Walking(_) => WorkoutKind::Walking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    fn inner(&self) -> &dyn Calculator {
        match self {
            Self::Running(w) => w,
            Self::Walking(w) => w,
            Self::Swimming(w) => w,
        }
    }
}

impl Calculator for Workout {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn session(&self) -> &Training {
        self.inner().session()
    }

    fn step_length(&self) -> f64 {
        self.inner().step_length()
    }

    fn distance(&self) -> f64 {
        self.inner().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.inner().mean_speed()
    }

    fn calories(&self) -> Result<f64, WorkoutError> {
        self.inner().calories()
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}
