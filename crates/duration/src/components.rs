//! Component breakdown of a duration.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;
use crate::iso::{parse, to_iso_duration};
use crate::units::{UNITS, Unit};

/// A duration split into eight named fields.
///
/// Fields may hold any value when built by hand or parsed, e.g. `PT90M`
/// parses to `{ minutes: 90 }`. After [`normalize`](crate::normalize)
/// every field is integral and all non-zero fields share one sign.
///
/// Missing fields deserialize as zero; unknown fields are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationComponents {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
}

impl DurationComponents {
    /// All fields zero.
    pub const ZERO: DurationComponents = DurationComponents {
        years: 0.0,
        months: 0.0,
        weeks: 0.0,
        days: 0.0,
        hours: 0.0,
        minutes: 0.0,
        seconds: 0.0,
        milliseconds: 0.0,
    };

    /// Returns the value of the field for `unit`.
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
            Unit::Milliseconds => self.milliseconds,
        }
    }

    /// Returns a copy with the field for `unit` replaced by `value`.
    pub fn with(mut self, unit: Unit, value: f64) -> Self {
        *self.field_mut(unit) = value;
        self
    }

    /// Returns `true` if every field is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    fn field_mut(&mut self, unit: Unit) -> &mut f64 {
        match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
            Unit::Milliseconds => &mut self.milliseconds,
        }
    }
}

/// Negates every field. Zero fields stay positive zero.
impl Neg for DurationComponents {
    type Output = DurationComponents;

    fn neg(self) -> DurationComponents {
        let mut out = self;
        for unit in UNITS {
            let value = self.get(unit);
            *out.field_mut(unit) = if value == 0.0 { 0.0 } else { -value };
        }
        out
    }
}

/// Formats the normalized ISO-8601 form, e.g. `PT1H30M`.
impl fmt::Display for DurationComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_iso_duration(self))
    }
}

impl FromStr for DurationComponents {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
