//! # tempus-duration
//!
//! Pure conversions between millisecond counts, ISO-8601 duration strings
//! and a normalized eight-field component breakdown.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["ISO-8601 string"] -->|"parse()"| C["DurationComponents"]
//!     N["f64 milliseconds"] --> M["Millis"]
//!     C -->|"Millis::from()"| M
//!     M -->|"add / subtract / multiply / divide"| M
//!     M -->|"normalize()"| C
//!     M -->|"to_iso_duration()"| S
//!     M -->|"to_hours() ..."| U["f64 in unit"]
//! ```
//!
//! Everything funnels through [`Millis`], the canonical value. Years and
//! months are converted with calendar approximations (365.25 days per
//! year, 1/12 year per month), so component structs that carry them are
//! converted lossily.
//!
//! ## Quick Start
//!
//! ```
//! use tempus_duration::{DurationComponents, add, normalize, parse, to_iso_duration, to_minutes};
//!
//! let meeting = parse("PT1H30M").unwrap();
//! assert_eq!(to_minutes(meeting), 90.0);
//!
//! let overrun = DurationComponents { minutes: 45.0, ..DurationComponents::ZERO };
//! let total = add(meeting, overrun);
//!
//! let parts = normalize(total);
//! assert_eq!((parts.hours, parts.minutes), (2.0, 15.0));
//! assert_eq!(to_iso_duration(total), "PT2H15M");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `units` | Unit table, millisecond factors, `to_*` conversions |
//! | `round` | Truncation towards zero |
//! | `millis` | Canonical millisecond value |
//! | `components` | Eight-field component struct |
//! | `calc` | Arithmetic and comparisons |
//! | `normalize` | Largest-unit-first decomposition |
//! | `iso` | ISO-8601 parsing and formatting |
//! | `sum` | Summing many durations (`sum`, fallible `try_sum`) |
//! | `input` | Accepted input shapes and coercion |
//! | `config` | Parse and format options |
//! | `error` | Error types |

mod calc;
mod components;
mod config;
mod error;
mod input;
mod iso;
mod millis;
mod normalize;
mod round;
mod sum;
mod units;

pub use calc::{abs, add, divide, is_equal, is_negative, is_zero, multiply, negate, subtract};
pub use components::DurationComponents;
pub use config::{FormatConfig, ParseConfig};
pub use error::{DurationError, ParseFailure};
pub use input::{DurationInput, to_duration};
pub use iso::{parse, parse_with, to_iso_duration, to_iso_duration_with};
pub use millis::Millis;
pub use normalize::normalize;
pub use round::floor_towards_zero;
pub use sum::{sum, try_sum};
pub use units::{
    MILLISECONDS_IN_DAY, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_MONTH,
    MILLISECONDS_IN_SECOND, MILLISECONDS_IN_WEEK, MILLISECONDS_IN_YEAR, UNITS, Unit,
    components_to_millis, to_days, to_hours, to_milliseconds, to_minutes, to_months, to_seconds,
    to_unit, to_weeks, to_years,
};

/// Alias of [`normalize`].
pub use normalize::normalize as normalize_time;
