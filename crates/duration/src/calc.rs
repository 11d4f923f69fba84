//! Arithmetic and comparisons on canonical millisecond values.
//!
//! All functions resolve their operands to [`Millis`] first and return a
//! [`Millis`], not components; call [`normalize`](crate::normalize) for a
//! breakdown. None of them fail: invalid operations follow IEEE-754.

use crate::millis::Millis;

/// Returns `a + b`.
pub fn add(a: impl Into<Millis>, b: impl Into<Millis>) -> Millis {
    a.into() + b.into()
}

/// Returns `a - b`.
pub fn subtract(a: impl Into<Millis>, b: impl Into<Millis>) -> Millis {
    a.into() - b.into()
}

/// Scales a duration by `factor`.
pub fn multiply(value: impl Into<Millis>, factor: f64) -> Millis {
    value.into() * factor
}

/// Divides a duration by `divisor`.
///
/// Dividing by zero yields `±inf`, or NaN for a zero duration.
pub fn divide(value: impl Into<Millis>, divisor: f64) -> Millis {
    value.into() / divisor
}

/// Flips the sign of a duration.
pub fn negate(value: impl Into<Millis>) -> Millis {
    -value.into()
}

/// Returns the magnitude of a duration.
pub fn abs(value: impl Into<Millis>) -> Millis {
    Millis::new(value.into().get().abs())
}

/// Returns `true` if the duration totals zero milliseconds.
pub fn is_zero(value: impl Into<Millis>) -> bool {
    value.into().get() == 0.0
}

/// Returns `true` if the duration totals less than zero milliseconds.
pub fn is_negative(value: impl Into<Millis>) -> bool {
    value.into().get() < 0.0
}

/// Returns `true` if both durations total the same number of milliseconds.
pub fn is_equal(a: impl Into<Millis>, b: impl Into<Millis>) -> bool {
    a.into() == b.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::DurationComponents;

    fn hours(h: f64) -> DurationComponents {
        DurationComponents {
            hours: h,
            ..DurationComponents::ZERO
        }
    }

    #[test]
    fn add_and_subtract() {
        assert_eq!(add(hours(1.0), 500.0).get(), 3_600_500.0);
        assert_eq!(subtract(hours(1.0), hours(2.0)).get(), -3_600_000.0);
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(multiply(hours(1.5), 2.0).get(), 10_800_000.0);
        assert_eq!(divide(hours(1.0), 4.0).get(), 900_000.0);
    }

    #[test]
    fn divide_by_zero_follows_ieee() {
        assert_eq!(divide(1000.0, 0.0).get(), f64::INFINITY);
        assert_eq!(divide(-1000.0, 0.0).get(), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).get().is_nan());
    }

    #[test]
    fn negate_and_abs() {
        assert_eq!(negate(hours(1.0)).get(), -3_600_000.0);
        assert_eq!(abs(hours(-1.0)).get(), 3_600_000.0);
        assert_eq!(abs(250.0).get(), 250.0);
    }

    #[test]
    fn predicates() {
        assert!(is_zero(DurationComponents::ZERO));
        assert!(is_zero(-0.0));
        assert!(!is_zero(1.0));
        assert!(is_negative(hours(-0.5)));
        assert!(!is_negative(0.0));
        let ninety_minutes = DurationComponents {
            minutes: 90.0,
            ..DurationComponents::ZERO
        };
        assert!(is_equal(hours(1.5), ninety_minutes));
        assert!(!is_equal(hours(1.0), ninety_minutes));
    }
}
