//! Workout kinds and their short codes.

use std::fmt;
use std::str::FromStr;

use crate::calculator::WorkoutError;

/// The closed set of supported workout kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    /// Running, counted in steps.
    Running,
    /// Sports walking, counted in steps.
    Walking,
    /// Pool swimming, counted in strokes.
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in code order.
    pub const ALL: [WorkoutKind; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Short code used by sensor packages.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Label printed in reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of raw values a package of this kind carries.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }

    /// Resolve a short code. Matching is exact and case-sensitive.
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutKind(code.to_string()))
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
