//! Summing many durations into one normalized total.

use crate::components::DurationComponents;
use crate::error::DurationError;
use crate::input::DurationInput;
use crate::millis::Millis;
use crate::normalize::normalize;

/// Adds up any number of durations and normalizes the total once.
///
/// Terms are resolved to milliseconds independently and summed left to
/// right. Totals are exact for integral-millisecond inputs; inputs that
/// carry years or months may differ in the last bit between groupings.
///
/// ISO strings are not accepted here; use [`try_sum`] for those.
///
/// # Example
///
/// ```
/// use tempus_duration::{DurationComponents, sum};
///
/// let one_day = DurationComponents { days: 1.0, ..DurationComponents::ZERO };
/// let later = DurationComponents { days: 2.0, hours: 12.0, ..DurationComponents::ZERO };
///
/// let total = sum([one_day, later]);
/// assert_eq!(total.days, 3.0);
/// assert_eq!(total.hours, 12.0);
/// ```
pub fn sum<I>(values: I) -> DurationComponents
where
    I: IntoIterator,
    I::Item: Into<Millis>,
{
    let total: Millis = values.into_iter().map(Into::<Millis>::into).sum();
    normalize(total)
}

/// Like [`sum`], but over any [`DurationInput`], including ISO strings.
///
/// # Errors
///
/// Returns the [`DurationError::Parse`] of the first malformed string;
/// later inputs are not read.
///
/// # Example
///
/// ```
/// use tempus_duration::{DurationInput, try_sum};
///
/// let total = try_sum([DurationInput::from("PT45M"), DurationInput::from(900_000.0)]).unwrap();
/// assert_eq!(total.hours, 1.0);
/// assert!(try_sum(["PT1H", "1 hour"]).is_err());
/// ```
pub fn try_sum<I>(values: I) -> Result<DurationComponents, DurationError>
where
    I: IntoIterator,
    I::Item: Into<DurationInput>,
{
    let total = values
        .into_iter()
        .map(|value| value.into().to_millis())
        .sum::<Result<Millis, DurationError>>()?;
    Ok(normalize(total))
}
