//! Shared numeric helpers.

/// Floor division of two floats.
///
/// Computes the quotient from the remainder (`(a - a % b) / b`) and then
/// snaps it to the nearest integer, so values that sit exactly on a multiple
/// of `b` are not pushed below it by rounding in `a / b`. Returns `None`
/// when `b` is zero.
#[must_use]
pub fn floor_div(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 {
        return None;
    }

    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return Some((0.0_f64).copysign(a / b));
    }

    let mut floor = div.floor();
    if div - floor > 0.5 {
        floor += 1.0;
    }
    Some(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_div_truncates_positive_quotient() {
        assert_eq!(floor_div(676.0, 100.0), Some(6.0));
        assert_eq!(floor_div(34.222_5, 180.0), Some(0.0));
    }

    #[test]
    fn floor_div_exact_multiple() {
        assert_eq!(floor_div(300.0, 100.0), Some(3.0));
    }

    #[test]
    fn floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-7.0, 2.0), Some(-4.0));
        assert_eq!(floor_div(7.0, -2.0), Some(-4.0));
    }

    #[test]
    fn floor_div_by_zero() {
        assert_eq!(floor_div(1.0, 0.0), None);
    }
}
