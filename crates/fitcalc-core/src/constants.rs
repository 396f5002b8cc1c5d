//! Physical constants and per-kind empirical coefficients.

/// Meters in one kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Step length (in meters) for land workouts.
pub const STEP_LENGTH_M: f64 = 0.65;

/// Running calorie coefficients.
pub mod running {
    /// Multiplier applied to the mean speed.
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    /// Offset subtracted from the scaled speed.
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Sports walking calorie coefficients.
pub mod walking {
    /// Weight multiplier for the base term.
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Weight multiplier for the speed/height term.
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming constants.
pub mod swimming {
    /// Distance covered by one stroke, in meters.
    pub const STROKE_LENGTH_M: f64 = 1.38;
    /// Offset added to the mean speed.
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the shifted speed.
    pub const SPEED_MULTIPLIER: f64 = 2.0;
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A package carried malformed raw values.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// A package named an unknown workout kind.
    pub const ERROR_UNKNOWN_KIND: i32 = 3;
}
