//! Configuration for ISO-8601 parsing and formatting.

use serde::Deserialize;

use crate::error::DurationError;
use crate::iso::parse_with;

/// Options controlling which ISO-8601 variants [`parse_with`] accepts.
///
/// # Example
///
/// ```
/// use tempus_duration::{ParseConfig, parse_with};
///
/// let strict = ParseConfig::new().with_allow_negative(false);
/// assert!(parse_with("-PT1H", &strict).is_err());
/// assert!(parse_with("PT1H", &strict).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Accept a leading `-` that negates the whole duration.
    allow_negative: bool,
    /// Accept `,` as well as `.` as the decimal separator.
    allow_comma_decimal: bool,
}

impl ParseConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `allow_negative = true`, `allow_comma_decimal = true`.
    pub fn new() -> Self {
        Self {
            allow_negative: true,
            allow_comma_decimal: true,
        }
    }

    /// Sets whether a leading `-` is accepted.
    pub fn with_allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Sets whether `,` is accepted as a decimal separator.
    pub fn with_allow_comma_decimal(mut self, allow: bool) -> Self {
        self.allow_comma_decimal = allow;
        self
    }

    /// Returns whether a leading `-` is accepted.
    pub fn allow_negative(&self) -> bool {
        self.allow_negative
    }

    /// Returns whether `,` is accepted as a decimal separator.
    pub fn allow_comma_decimal(&self) -> bool {
        self.allow_comma_decimal
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero representation used when no [`FormatConfig`] is given.
pub(crate) const DEFAULT_ZERO: &str = "PT0S";

/// Options controlling [`to_iso_duration_with`](crate::to_iso_duration_with).
///
/// # Example
///
/// ```
/// use tempus_duration::{FormatConfig, to_iso_duration_with};
///
/// let config = FormatConfig::new().with_decimal_separator(',');
/// assert_eq!(to_iso_duration_with(1500.0, &config).unwrap(), "PT1,5S");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Separator between whole seconds and the millisecond fraction.
    decimal_separator: char,
    /// Text emitted for a zero duration.
    zero: String,
}

impl FormatConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `decimal_separator = '.'`, `zero = "PT0S"`.
    pub fn new() -> Self {
        Self {
            decimal_separator: '.',
            zero: DEFAULT_ZERO.to_string(),
        }
    }

    /// Sets the decimal separator used for fractional seconds.
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets the representation of the zero duration.
    pub fn with_zero(mut self, zero: impl Into<String>) -> Self {
        self.zero = zero.into();
        self
    }

    /// Returns the decimal separator.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Returns the representation of the zero duration.
    pub fn zero(&self) -> &str {
        &self.zero
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the separator is not `.` or `,`, or if the zero
    /// representation does not parse back to a zero duration.
    pub fn validate(&self) -> Result<(), DurationError> {
        if !matches!(self.decimal_separator, '.' | ',') {
            return Err(DurationError::InvalidConfig {
                reason: format!(
                    "decimal separator must be '.' or ',', got {:?}",
                    self.decimal_separator
                ),
            });
        }
        let zero = parse_with(&self.zero, &ParseConfig::new()).map_err(|e| {
            DurationError::InvalidConfig {
                reason: format!("zero representation is not a duration: {e}"),
            }
        })?;
        if !zero.is_zero() {
            return Err(DurationError::InvalidConfig {
                reason: format!("zero representation {:?} is not zero", self.zero),
            });
        }
        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_defaults() {
        let c = ParseConfig::default();
        assert!(c.allow_negative());
        assert!(c.allow_comma_decimal());
    }

    #[test]
    fn parse_config_builder() {
        let c = ParseConfig::new()
            .with_allow_negative(false)
            .with_allow_comma_decimal(false);
        assert!(!c.allow_negative());
        assert!(!c.allow_comma_decimal());
    }

    #[test]
    fn format_config_defaults() {
        let c = FormatConfig::default();
        assert_eq!(c.decimal_separator(), '.');
        assert_eq!(c.zero(), "PT0S");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn format_config_rejects_bad_separator() {
        let c = FormatConfig::new().with_decimal_separator(':');
        assert!(matches!(
            c.validate(),
            Err(DurationError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn format_config_zero_must_be_zero() {
        assert!(FormatConfig::new().with_zero("P0D").validate().is_ok());
        assert!(FormatConfig::new().with_zero("PT1S").validate().is_err());
        assert!(FormatConfig::new().with_zero("zero").validate().is_err());
    }
}
