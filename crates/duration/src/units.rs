//! Unit table, millisecond factors and unit conversions.
//!
//! Seconds through weeks have exact factors. Years and months use the
//! calendar approximation 1 year = 365.25 days and 1 month = 1/12 year,
//! so converting a component struct that carries years or months to
//! milliseconds is lossy.

use crate::components::DurationComponents;
use crate::millis::Millis;

/// Milliseconds in one second.
pub const MILLISECONDS_IN_SECOND: f64 = 1_000.0;
/// Milliseconds in one minute.
pub const MILLISECONDS_IN_MINUTE: f64 = 60.0 * MILLISECONDS_IN_SECOND;
/// Milliseconds in one hour.
pub const MILLISECONDS_IN_HOUR: f64 = 60.0 * MILLISECONDS_IN_MINUTE;
/// Milliseconds in one day.
pub const MILLISECONDS_IN_DAY: f64 = 24.0 * MILLISECONDS_IN_HOUR;
/// Milliseconds in one week.
pub const MILLISECONDS_IN_WEEK: f64 = 7.0 * MILLISECONDS_IN_DAY;
/// Milliseconds in one year (365.25 days).
pub const MILLISECONDS_IN_YEAR: f64 = 365.25 * MILLISECONDS_IN_DAY;
/// Milliseconds in one month (1/12 of a year).
pub const MILLISECONDS_IN_MONTH: f64 = MILLISECONDS_IN_YEAR / 12.0;

/// One of the eight duration units, ordered from largest to smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

/// All units, largest first. Normalization walks this table in order.
pub const UNITS: [Unit; 8] = [
    Unit::Years,
    Unit::Months,
    Unit::Weeks,
    Unit::Days,
    Unit::Hours,
    Unit::Minutes,
    Unit::Seconds,
    Unit::Milliseconds,
];

impl Unit {
    /// Returns how many milliseconds one of this unit is worth.
    pub fn millis(self) -> f64 {
        match self {
            Unit::Years => MILLISECONDS_IN_YEAR,
            Unit::Months => MILLISECONDS_IN_MONTH,
            Unit::Weeks => MILLISECONDS_IN_WEEK,
            Unit::Days => MILLISECONDS_IN_DAY,
            Unit::Hours => MILLISECONDS_IN_HOUR,
            Unit::Minutes => MILLISECONDS_IN_MINUTE,
            Unit::Seconds => MILLISECONDS_IN_SECOND,
            Unit::Milliseconds => 1.0,
        }
    }

    /// Returns the field name used in component objects (`"years"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
            Unit::Milliseconds => "milliseconds",
        }
    }

    /// Looks up a unit by its component field name.
    pub fn from_name(name: &str) -> Option<Self> {
        UNITS.into_iter().find(|unit| unit.name() == name)
    }

    /// Returns the ISO-8601 designator letter.
    ///
    /// Milliseconds have no designator of their own; they are written as
    /// the fractional part of seconds.
    pub fn designator(self) -> Option<char> {
        match self {
            Unit::Years => Some('Y'),
            Unit::Months | Unit::Minutes => Some('M'),
            Unit::Weeks => Some('W'),
            Unit::Days => Some('D'),
            Unit::Hours => Some('H'),
            Unit::Seconds => Some('S'),
            Unit::Milliseconds => None,
        }
    }

    /// Returns `true` for units written after the ISO-8601 `T` separator.
    pub fn is_time(self) -> bool {
        self >= Unit::Hours
    }
}

/// Total milliseconds of a (possibly partial) component struct.
///
/// Each field is multiplied by its unit factor and the products summed;
/// zero fields contribute nothing.
pub fn components_to_millis(components: &DurationComponents) -> f64 {
    UNITS
        .iter()
        .map(|&unit| components.get(unit) * unit.millis())
        .sum()
}

/// Converts a duration to a (possibly fractional) count of `unit`.
pub fn to_unit(value: impl Into<Millis>, unit: Unit) -> f64 {
    value.into().get() / unit.millis()
}

/// Converts a duration to milliseconds.
pub fn to_milliseconds(value: impl Into<Millis>) -> f64 {
    value.into().get()
}

/// Converts a duration to seconds.
pub fn to_seconds(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Seconds)
}

/// Converts a duration to minutes.
pub fn to_minutes(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Minutes)
}

/// Converts a duration to hours.
pub fn to_hours(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Hours)
}

/// Converts a duration to days.
pub fn to_days(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Days)
}

/// Converts a duration to weeks.
pub fn to_weeks(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Weeks)
}

/// Converts a duration to months (1/12 of a 365.25-day year).
pub fn to_months(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Months)
}

/// Converts a duration to years (365.25 days).
pub fn to_years(value: impl Into<Millis>) -> f64 {
    to_unit(value, Unit::Years)
}
