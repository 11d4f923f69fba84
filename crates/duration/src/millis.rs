//! Canonical duration value: a signed count of milliseconds.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::components::DurationComponents;
use crate::units::components_to_millis;

/// A signed, possibly fractional number of milliseconds.
///
/// Every other representation converts through this value, and two
/// durations are equal exactly when their `Millis` are equal. Arithmetic
/// follows IEEE-754: dividing by zero yields an infinity or NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Millis(f64);

impl Millis {
    /// The zero duration.
    pub const ZERO: Millis = Millis(0.0);

    /// Wraps a raw millisecond count.
    pub fn new(millis: f64) -> Self {
        Self(millis)
    }

    /// Returns the raw millisecond count.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Millis {
    fn from(millis: f64) -> Self {
        Self(millis)
    }
}

impl From<i64> for Millis {
    fn from(millis: i64) -> Self {
        Self(millis as f64)
    }
}

impl From<i32> for Millis {
    fn from(millis: i32) -> Self {
        Self(f64::from(millis))
    }
}

impl From<DurationComponents> for Millis {
    fn from(components: DurationComponents) -> Self {
        Self(components_to_millis(&components))
    }
}

impl From<&DurationComponents> for Millis {
    fn from(components: &DurationComponents) -> Self {
        Self(components_to_millis(components))
    }
}

impl From<Millis> for f64 {
    fn from(millis: Millis) -> Self {
        millis.0
    }
}

impl Add for Millis {
    type Output = Millis;

    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl Sub for Millis {
    type Output = Millis;

    fn sub(self, rhs: Millis) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

impl Mul<f64> for Millis {
    type Output = Millis;

    fn mul(self, rhs: f64) -> Millis {
        Millis(self.0 * rhs)
    }
}

impl Div<f64> for Millis {
    type Output = Millis;

    fn div(self, rhs: f64) -> Millis {
        Millis(self.0 / rhs)
    }
}

impl Neg for Millis {
    type Output = Millis;

    fn neg(self) -> Millis {
        Millis(-self.0)
    }
}

impl Sum for Millis {
    fn sum<I: Iterator<Item = Millis>>(iter: I) -> Millis {
        iter.fold(Millis::ZERO, Add::add)
    }
}
