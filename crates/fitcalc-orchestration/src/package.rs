//! Sensor packages: a kind code paired with its raw values.

use std::fmt;
use std::str::FromStr;

use fitcalc_core::calculator::WorkoutError;
use fitcalc_core::raw::RawInput;

/// One unresolved workout package.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    /// Kind code as received, e.g. `RUN`.
    pub code: String,
    /// Positional raw values.
    pub raw: RawInput,
}

impl Package {
    /// Create a package from a code and its values.
    pub fn new(code: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            raw: RawInput::new(values),
        }
    }
}

impl FromStr for Package {
    type Err = WorkoutError;

    /// Parse `CODE:v1,v2,...`, e.g. `SWM:720,1,80,25,40`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (code, values) = s.split_once(':').ok_or_else(|| {
            WorkoutError::InvalidInput(format!("expected CODE:v1,v2,..., got '{s}'"))
        })?;
        Ok(Self {
            code: code.trim().to_string(),
            raw: values.parse()?,
        })
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;
        for (i, value) in self.raw.values().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// The demo packages processed when no input is given.
#[must_use]
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
