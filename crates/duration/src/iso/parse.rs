//! ISO-8601 duration parser.

use tracing::debug;

use crate::components::DurationComponents;
use crate::config::ParseConfig;
use crate::error::{DurationError, ParseFailure};
use crate::units::Unit;

/// Designators in the order they must appear. Date designators come
/// before `T`, time designators after it; the slot index is the position
/// in this table.
const DESIGNATORS: [(char, Unit); 7] = [
    ('Y', Unit::Years),
    ('M', Unit::Months),
    ('W', Unit::Weeks),
    ('D', Unit::Days),
    ('H', Unit::Hours),
    ('M', Unit::Minutes),
    ('S', Unit::Seconds),
];

/// First slot that belongs to the time part.
const TIME_SLOT: usize = 4;

/// Parses an ISO-8601 duration with the default [`ParseConfig`].
///
/// Only the designators present are set; the result is not normalized,
/// so `PT90M` yields `{ minutes: 90 }`. A leading `-` negates every field.
/// Fractional seconds are split into whole seconds and milliseconds.
///
/// # Errors
///
/// Returns [`DurationError::Parse`] if the string does not match the
/// grammar: missing `P`, designators out of order or repeated, a bare `P`
/// or `T`, a fraction on a designator other than the last, or a
/// malformed number.
///
/// # Example
///
/// ```
/// use tempus_duration::parse;
///
/// let c = parse("PT1H30M").unwrap();
/// assert_eq!(c.hours, 1.0);
/// assert_eq!(c.minutes, 30.0);
/// assert!(parse("PT").is_err());
/// ```
pub fn parse(input: &str) -> Result<DurationComponents, DurationError> {
    parse_with(input, &ParseConfig::default())
}

/// Parses an ISO-8601 duration with an explicit [`ParseConfig`].
///
/// # Errors
///
/// See [`parse`]. Additionally fails on a leading `-` when
/// [`ParseConfig::allow_negative`] is off, and on `,` decimals when
/// [`ParseConfig::allow_comma_decimal`] is off.
pub fn parse_with(input: &str, config: &ParseConfig) -> Result<DurationComponents, DurationError> {
    parse_components(input, config).map_err(|reason| {
        debug!(input, %reason, "rejected ISO-8601 duration");
        DurationError::Parse {
            input: input.to_string(),
            reason,
        }
    })
}

fn parse_components(input: &str, config: &ParseConfig) -> Result<DurationComponents, ParseFailure> {
    if input.is_empty() {
        return Err(ParseFailure::Empty);
    }
    let (negative, rest) = match input.strip_prefix('-') {
        Some(_) if !config.allow_negative() => return Err(ParseFailure::SignNotAllowed),
        Some(rest) => (true, rest),
        None => (false, input),
    };
    let mut rest = rest.strip_prefix('P').ok_or(ParseFailure::MissingPrefix {
        pos: offset(input, rest),
    })?;

    let mut out = DurationComponents::ZERO;
    let mut next_slot = 0;
    let mut in_time = false;
    let mut seen_any = false;
    let mut seen_time = false;
    let mut fraction_on: Option<char> = None;

    while !rest.is_empty() {
        if !in_time {
            if let Some(after) = rest.strip_prefix('T') {
                in_time = true;
                next_slot = TIME_SLOT;
                rest = after;
                continue;
            }
        }

        let pos = offset(input, rest);
        let (text, after) = decimal_prefix(rest, config.allow_comma_decimal());
        if after.starts_with(['.', ',']) {
            // A second separator, or a comma while commas are off.
            return Err(invalid_number(numeric_run(rest), pos));
        }
        if text.is_empty() {
            return Err(match rest.chars().next() {
                Some(c) if c.is_ascii_alphabetic() => {
                    ParseFailure::UnexpectedDesignator { designator: c, pos }
                }
                _ => ParseFailure::ExpectedNumber { pos },
            });
        }
        if let Some(designator) = fraction_on {
            return Err(ParseFailure::FractionNotLast { designator });
        }
        let number = Number::read(text, pos)?;

        let designator_pos = offset(input, after);
        let designator = after
            .chars()
            .next()
            .ok_or(ParseFailure::MissingDesignator {
                pos: designator_pos,
            })?;
        let slot = find_slot(designator, in_time, next_slot).ok_or(
            ParseFailure::UnexpectedDesignator {
                designator,
                pos: designator_pos,
            },
        )?;

        let unit = DESIGNATORS[slot].1;
        if unit == Unit::Seconds {
            let (seconds, millis) = number.split_millis(pos)?;
            out = out
                .with(Unit::Seconds, seconds)
                .with(Unit::Milliseconds, millis);
        } else {
            out = out.with(unit, number.value(pos)?);
        }
        if number.fraction.is_some() {
            fraction_on = Some(designator);
        }

        next_slot = slot + 1;
        seen_any = true;
        seen_time |= in_time;
        rest = &after[designator.len_utf8()..];
    }

    if in_time && !seen_time {
        return Err(ParseFailure::EmptyTimePart);
    }
    if !seen_any {
        return Err(ParseFailure::NoDesignators);
    }
    Ok(if negative { -out } else { out })
}

/// Byte offset of `rest` within `input`.
fn offset(input: &str, rest: &str) -> usize {
    input.len() - rest.len()
}

/// Finds the table slot for `designator` in the current part, at or after
/// `next_slot`.
fn find_slot(designator: char, in_time: bool, next_slot: usize) -> Option<usize> {
    let part = if in_time {
        TIME_SLOT..DESIGNATORS.len()
    } else {
        0..TIME_SLOT
    };
    part.filter(|&slot| slot >= next_slot)
        .find(|&slot| DESIGNATORS[slot].0 == designator)
}

/// Splits off the longest prefix made of digits and at most one decimal
/// separator.
fn decimal_prefix(input: &str, allow_comma: bool) -> (&str, &str) {
    let mut end = input.len();
    let mut separator_seen = false;
    for (i, c) in input.char_indices() {
        if c.is_ascii_digit() {
            continue;
        }
        if !separator_seen && (c == '.' || (allow_comma && c == ',')) {
            separator_seen = true;
            continue;
        }
        end = i;
        break;
    }
    input.split_at(end)
}

/// The leading run of digits and separators, however many there are.
fn numeric_run(input: &str) -> &str {
    let end = input
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(input.len());
    &input[..end]
}

/// A decimal number split at its separator.
struct Number<'a> {
    text: &'a str,
    whole: &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Number<'a> {
    fn read(text: &'a str, pos: usize) -> Result<Self, ParseFailure> {
        let (whole, fraction) = match text.find(['.', ',']) {
            Some(i) => (&text[..i], Some(&text[i + 1..])),
            None => (text, None),
        };
        if whole.is_empty() || fraction.is_some_and(str::is_empty) {
            return Err(invalid_number(text, pos));
        }
        Ok(Self {
            text,
            whole,
            fraction,
        })
    }

    fn value(&self, pos: usize) -> Result<f64, ParseFailure> {
        let normalized = match self.fraction {
            Some(fraction) => format!("{}.{}", self.whole, fraction),
            None => self.whole.to_string(),
        };
        normalized
            .parse::<f64>()
            .map_err(|_| invalid_number(self.text, pos))
    }

    /// Returns `(whole, milliseconds)`, reading the first three fraction
    /// digits as whole milliseconds and the rest as a fraction of one.
    fn split_millis(&self, pos: usize) -> Result<(f64, f64), ParseFailure> {
        let whole = self
            .whole
            .parse::<f64>()
            .map_err(|_| invalid_number(self.text, pos))?;
        let Some(fraction) = self.fraction else {
            return Ok((whole, 0.0));
        };
        let split = fraction.len().min(3);
        let (millis, sub_millis) = fraction.split_at(split);
        let millis = format!("{millis:0<3}.{sub_millis}0")
            .parse::<f64>()
            .map_err(|_| invalid_number(self.text, pos))?;
        Ok((whole, millis))
    }
}

fn invalid_number(text: &str, pos: usize) -> ParseFailure {
    ParseFailure::InvalidNumber {
        text: text.to_string(),
        pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(input: &str) -> ParseFailure {
        match parse(input) {
            Err(DurationError::Parse { reason, .. }) => reason,
            other => panic!("expected parse error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn hours_and_minutes() {
        let c = parse("PT1H30M").unwrap();
        assert_eq!(
            c,
            DurationComponents {
                hours: 1.0,
                minutes: 30.0,
                ..DurationComponents::ZERO
            }
        );
    }

    #[test]
    fn every_designator() {
        let c = parse("P1Y2M3W4DT5H6M7S").unwrap();
        assert_eq!(c.years, 1.0);
        assert_eq!(c.months, 2.0);
        assert_eq!(c.weeks, 3.0);
        assert_eq!(c.days, 4.0);
        assert_eq!(c.hours, 5.0);
        assert_eq!(c.minutes, 6.0);
        assert_eq!(c.seconds, 7.0);
        assert_eq!(c.milliseconds, 0.0);
    }

    #[test]
    fn month_versus_minute() {
        assert_eq!(parse("P5M").unwrap().months, 5.0);
        assert_eq!(parse("PT5M").unwrap().minutes, 5.0);
        let both = parse("P1MT1M").unwrap();
        assert_eq!((both.months, both.minutes), (1.0, 1.0));
    }

    #[test]
    fn not_normalized() {
        assert_eq!(parse("PT90M").unwrap().minutes, 90.0);
        assert_eq!(parse("PT90M").unwrap().hours, 0.0);
    }

    #[test]
    fn negative_sign_negates_every_field() {
        let c = parse("-P1DT2H").unwrap();
        assert_eq!(c.days, -1.0);
        assert_eq!(c.hours, -2.0);
        assert!(c.minutes.is_sign_positive());
    }

    #[test]
    fn fractional_seconds_split_into_millis() {
        let c = parse("PT1.5S").unwrap();
        assert_eq!((c.seconds, c.milliseconds), (1.0, 500.0));
        let c = parse("PT0.001S").unwrap();
        assert_eq!((c.seconds, c.milliseconds), (0.0, 1.0));
        let c = parse("PT2,25S").unwrap();
        assert_eq!((c.seconds, c.milliseconds), (2.0, 250.0));
        let c = parse("PT0.0005S").unwrap();
        assert_eq!(c.milliseconds, 0.5);
    }

    #[test]
    fn fraction_on_last_designator() {
        assert_eq!(parse("PT1.5H").unwrap().hours, 1.5);
        assert_eq!(parse("P0.5D").unwrap().days, 0.5);
        assert_eq!(
            reason("PT1.5H30M"),
            ParseFailure::FractionNotLast { designator: 'H' }
        );
        assert_eq!(
            reason("P1.5DT1H"),
            ParseFailure::FractionNotLast { designator: 'D' }
        );
    }

    #[test]
    fn bare_prefixes_fail() {
        assert_eq!(reason("P"), ParseFailure::NoDesignators);
        assert_eq!(reason("PT"), ParseFailure::EmptyTimePart);
        assert_eq!(reason("P1DT"), ParseFailure::EmptyTimePart);
        assert_eq!(reason("-P"), ParseFailure::NoDesignators);
        assert_eq!(reason(""), ParseFailure::Empty);
    }

    #[test]
    fn missing_prefix_fails() {
        assert_eq!(reason("1D"), ParseFailure::MissingPrefix { pos: 0 });
        assert_eq!(reason("-1D"), ParseFailure::MissingPrefix { pos: 1 });
        assert_eq!(reason("p1d"), ParseFailure::MissingPrefix { pos: 0 });
    }

    #[test]
    fn designators_out_of_order_fail() {
        assert_eq!(
            reason("P1M1Y"),
            ParseFailure::UnexpectedDesignator {
                designator: 'Y',
                pos: 4
            }
        );
        assert_eq!(
            reason("P1D1D"),
            ParseFailure::UnexpectedDesignator {
                designator: 'D',
                pos: 4
            }
        );
        assert_eq!(
            reason("PT1S1H"),
            ParseFailure::UnexpectedDesignator {
                designator: 'H',
                pos: 5
            }
        );
    }

    #[test]
    fn designator_in_wrong_part_fails() {
        assert!(matches!(
            reason("P1H"),
            ParseFailure::UnexpectedDesignator { designator: 'H', .. }
        ));
        assert!(matches!(
            reason("PT1D"),
            ParseFailure::UnexpectedDesignator { designator: 'D', .. }
        ));
        assert!(matches!(
            reason("PTT1H"),
            ParseFailure::UnexpectedDesignator { designator: 'T', .. }
        ));
        assert!(matches!(
            reason("P1d"),
            ParseFailure::UnexpectedDesignator { designator: 'd', .. }
        ));
    }

    #[test]
    fn malformed_numbers_fail() {
        assert_eq!(
            reason("P1.D"),
            ParseFailure::InvalidNumber {
                text: "1.".to_string(),
                pos: 1
            }
        );
        assert!(matches!(reason("P.5D"), ParseFailure::InvalidNumber { .. }));
        assert_eq!(
            reason("PT1.2.3S"),
            ParseFailure::InvalidNumber {
                text: "1.2.3".to_string(),
                pos: 3
            }
        );
        assert_eq!(reason("P-1D"), ParseFailure::ExpectedNumber { pos: 1 });
        assert_eq!(reason("P12"), ParseFailure::MissingDesignator { pos: 3 });
    }

    #[test]
    fn config_disables_sign() {
        let strict = ParseConfig::new().with_allow_negative(false);
        assert!(matches!(
            parse_with("-PT1S", &strict),
            Err(DurationError::Parse {
                reason: ParseFailure::SignNotAllowed,
                ..
            })
        ));
    }

    #[test]
    fn config_disables_comma() {
        let strict = ParseConfig::new().with_allow_comma_decimal(false);
        let reason_with = |input: &str| match parse_with(input, &strict) {
            Err(DurationError::Parse { reason, .. }) => reason,
            other => panic!("expected parse error for {input:?}, got {other:?}"),
        };
        assert_eq!(
            reason_with("PT1,5S"),
            ParseFailure::InvalidNumber {
                text: "1,5".to_string(),
                pos: 3
            }
        );
        assert_eq!(
            reason_with("P,5D"),
            ParseFailure::InvalidNumber {
                text: ",5".to_string(),
                pos: 1
            }
        );
        assert!(parse_with("PT1.5S", &strict).is_ok());
    }

    #[test]
    fn error_keeps_input() {
        let err = parse("P1X").unwrap_err();
        assert_eq!(
            err,
            DurationError::Parse {
                input: "P1X".to_string(),
                reason: ParseFailure::UnexpectedDesignator {
                    designator: 'X',
                    pos: 2
                },
            }
        );
    }
}
