//! Raw sensor packages.
//!
//! A package is an ordered list of numbers whose meaning depends on the
//! workout kind. Field accessors check the value type (whole number or
//! float) but never reinterpret position.

use std::str::FromStr;

use crate::calculator::WorkoutError;
use crate::kind::WorkoutKind;

/// Ordered raw values read from a sensor package.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawInput {
    values: Vec<f64>,
}

impl RawInput {
    /// Wrap a list of raw values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of values in the package.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the package is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw values, in package order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Check that the package carries exactly the values `kind` needs.
    pub fn expect_arity(&self, kind: WorkoutKind) -> Result<(), WorkoutError> {
        if self.values.len() != kind.arity() {
            return Err(WorkoutError::InvalidInput(format!(
                "{} expects {} values, got {}",
                kind.code(),
                kind.arity(),
                self.values.len()
            )));
        }
        Ok(())
    }

    /// Read a float field.
    pub fn float(&self, index: usize, field: &str) -> Result<f64, WorkoutError> {
        let value = self.get(index, field)?;
        if !value.is_finite() {
            return Err(WorkoutError::InvalidInput(format!(
                "{field} must be finite, got {value}"
            )));
        }
        Ok(value)
    }

    /// Read a non-negative whole-number field.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count(&self, index: usize, field: &str) -> Result<u32, WorkoutError> {
        let value = self.float(index, field)?;
        if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
            return Err(WorkoutError::InvalidInput(format!(
                "{field} must be a non-negative whole number, got {value}"
            )));
        }
        Ok(value as u32)
    }

    fn get(&self, index: usize, field: &str) -> Result<f64, WorkoutError> {
        self.values.get(index).copied().ok_or_else(|| {
            WorkoutError::InvalidInput(format!("missing {field} at position {index}"))
        })
    }
}

impl From<Vec<f64>> for RawInput {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for RawInput {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl FromStr for RawInput {
    type Err = WorkoutError;

    /// Parse a comma-separated list such as `"15000,1,75"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        s.split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>().map_err(|e| {
                    WorkoutError::InvalidInput(format!("'{part}' is not a number: {e}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comma_separated() {
        let raw: RawInput = "720, 1, 80, 25, 40".parse().unwrap();
        assert_eq!(raw.values(), &[720.0, 1.0, 80.0, 25.0, 40.0]);
    }

    #[test]
    fn parse_empty() {
        let raw: RawInput = "".parse().unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "1,two,3".parse::<RawInput>(),
            Err(WorkoutError::InvalidInput(_))
        ));
    }

    #[test]
    fn arity_mismatch() {
        let raw = RawInput::from(vec![15000.0, 1.0]);
        let err = raw.expect_arity(WorkoutKind::Running).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: RUN expects 3 values, got 2"
        );
    }

    #[test]
    fn count_rejects_fraction() {
        let raw = RawInput::from(vec![1.5]);
        assert!(raw.count(0, "action_count").is_err());
    }

    #[test]
    fn count_rejects_negative() {
        let raw = RawInput::from(vec![-3.0]);
        assert!(raw.count(0, "action_count").is_err());
    }

    #[test]
    fn float_rejects_nan() {
        let raw = RawInput::from(vec![f64::NAN]);
        assert!(raw.float(0, "weight_kg").is_err());
    }

    #[test]
    fn missing_field() {
        let raw = RawInput::default();
        assert!(raw.float(0, "duration_h").is_err());
    }
}
