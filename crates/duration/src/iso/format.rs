//! ISO-8601 duration formatter.

use std::fmt;

use tracing::warn;

use crate::components::DurationComponents;
use crate::config::{DEFAULT_ZERO, FormatConfig};
use crate::error::DurationError;
use crate::millis::Millis;
use crate::normalize::normalize;
use crate::units::{UNITS, Unit};

/// Formats a duration as ISO-8601 with the default [`FormatConfig`].
///
/// The input is normalized first; only non-zero designators are written,
/// milliseconds become the fraction of seconds, and `T` appears only when
/// there is a time designator. A negative total gets a leading `-`. The
/// zero duration is `PT0S`.
///
/// # Example
///
/// ```
/// use tempus_duration::{DurationComponents, to_iso_duration};
///
/// let c = DurationComponents { minutes: 90.0, ..DurationComponents::ZERO };
/// assert_eq!(to_iso_duration(c), "PT1H30M");
/// assert_eq!(to_iso_duration(-3_600_000.0), "-PT1H");
/// assert_eq!(to_iso_duration(0.0), "PT0S");
/// ```
pub fn to_iso_duration(value: impl Into<Millis>) -> String {
    write_iso(value.into().get(), '.', DEFAULT_ZERO)
}

/// Formats a duration as ISO-8601 with an explicit [`FormatConfig`].
///
/// A NaN or infinite total cannot be decomposed; it is written as seconds
/// using Rust's float rendering (`PTinfS`) and will not parse back.
///
/// # Errors
///
/// Returns [`DurationError::InvalidConfig`] if `config` fails
/// [`FormatConfig::validate`].
pub fn to_iso_duration_with(
    value: impl Into<Millis>,
    config: &FormatConfig,
) -> Result<String, DurationError> {
    config.validate()?;
    Ok(write_iso(
        value.into().get(),
        config.decimal_separator(),
        config.zero(),
    ))
}

fn write_iso(total: f64, separator: char, zero: &str) -> String {
    if !total.is_finite() {
        warn!(total, "formatting a non-finite duration");
        let sign = if total < 0.0 { "-" } else { "" };
        return format!("{sign}PT{}S", total.abs());
    }

    let parts = normalize(total);
    if parts.is_zero() {
        return zero.to_string();
    }
    IsoDuration {
        parts,
        negative: total < 0.0,
        separator,
    }
    .to_string()
}

const DATE_DESIGNATORS: [(Unit, char); 4] = [
    (Unit::Years, 'Y'),
    (Unit::Months, 'M'),
    (Unit::Weeks, 'W'),
    (Unit::Days, 'D'),
];

/// A normalized, non-zero duration ready to be written.
struct IsoDuration {
    parts: DurationComponents,
    negative: bool,
    separator: char,
}

impl IsoDuration {
    fn magnitude(&self, unit: Unit) -> f64 {
        self.parts.get(unit).abs()
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        for (unit, designator) in DATE_DESIGNATORS {
            let value = self.magnitude(unit);
            if value != 0.0 {
                write!(f, "{value}{designator}")?;
            }
        }

        let has_time = UNITS
            .into_iter()
            .filter(|u| u.is_time())
            .any(|u| self.magnitude(u) != 0.0);
        if !has_time {
            return Ok(());
        }
        f.write_str("T")?;

        for (unit, designator) in [(Unit::Hours, 'H'), (Unit::Minutes, 'M')] {
            let value = self.magnitude(unit);
            if value != 0.0 {
                write!(f, "{value}{designator}")?;
            }
        }

        let seconds = self.magnitude(Unit::Seconds);
        let millis = self.magnitude(Unit::Milliseconds);
        if millis != 0.0 {
            // Normalized milliseconds are integral and below 1000.
            let fraction = format!("{:03}", millis as u32);
            write!(
                f,
                "{seconds}{}{}S",
                self.separator,
                fraction.trim_end_matches('0')
            )?;
        } else if seconds != 0.0 {
            write!(f, "{seconds}S")?;
        }
        Ok(())
    }
}
