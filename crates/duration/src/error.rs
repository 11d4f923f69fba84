//! Error types for the tempus-duration crate.

/// Error type for all fallible operations in the tempus-duration crate.
///
/// Arithmetic never fails; only parsing ISO-8601 strings, coercing
/// dynamically typed input and validating configuration can.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DurationError {
    /// Returned when a string does not match the ISO-8601 duration grammar.
    #[error("invalid ISO-8601 duration {input:?}: {reason}")]
    Parse {
        /// The rejected input string.
        input: String,
        /// Which grammar rule the input violated.
        reason: ParseFailure,
    },

    /// Returned when an input is neither a string, a number nor a
    /// partial component object.
    #[error("invalid duration input: expected string, number or component object, found {found}")]
    InvalidType {
        /// Short description of what was found instead.
        found: String,
    },

    /// Returned when a [`FormatConfig`](crate::FormatConfig) fails validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Human-readable reason.
        reason: String,
    },
}

/// The specific grammar rule an ISO-8601 duration string violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseFailure {
    /// The input was the empty string.
    #[error("empty input")]
    Empty,

    /// The duration did not start with `P` (after an optional sign).
    #[error("expected 'P' at position {pos}")]
    MissingPrefix {
        /// Byte offset where `P` was expected.
        pos: usize,
    },

    /// A leading `-` was found but signed durations are disabled.
    #[error("signed durations are not allowed")]
    SignNotAllowed,

    /// `P` was not followed by any designator.
    #[error("no designators after 'P'")]
    NoDesignators,

    /// `T` was not followed by any time designator.
    #[error("no time designators after 'T'")]
    EmptyTimePart,

    /// A number was expected but something else was found.
    #[error("expected a number at position {pos}")]
    ExpectedNumber {
        /// Byte offset of the offending character.
        pos: usize,
    },

    /// A number was found but could not be read as a decimal.
    #[error("malformed number {text:?} at position {pos}")]
    InvalidNumber {
        /// The number text as it appeared in the input.
        text: String,
        /// Byte offset where the number starts.
        pos: usize,
    },

    /// A number was not followed by a designator letter.
    #[error("number at position {pos} is not followed by a designator")]
    MissingDesignator {
        /// Byte offset right after the number.
        pos: usize,
    },

    /// A designator letter is unknown, repeated or out of order.
    #[error("unexpected designator '{designator}' at position {pos}")]
    UnexpectedDesignator {
        /// The designator letter.
        designator: char,
        /// Byte offset of the designator.
        pos: usize,
    },

    /// A fractional value appeared on a designator that is not the last one.
    #[error("only the last designator may carry a fraction, found one on '{designator}'")]
    FractionNotLast {
        /// The designator carrying the fraction.
        designator: char,
    },
}
