//! Accepted input shapes and the coercion entry point.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::DurationComponents;
use crate::error::DurationError;
use crate::iso::parse;
use crate::millis::Millis;
use crate::units::Unit;

/// Any value that can describe a duration.
///
/// Deserializes untagged, so a JSON or TOML string, number or table all
/// map onto the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    /// An ISO-8601 duration string, e.g. `"PT1H30M"`.
    Iso(String),
    /// A raw millisecond count.
    Millis(f64),
    /// A partial component struct; missing fields are zero.
    Components(DurationComponents),
}

impl DurationInput {
    /// Resolves this input to the canonical millisecond value.
    ///
    /// # Errors
    ///
    /// Returns [`DurationError::Parse`] if an ISO string is malformed.
    pub fn to_millis(&self) -> Result<Millis, DurationError> {
        match self {
            DurationInput::Iso(text) => parse(text).map(Millis::from),
            DurationInput::Millis(millis) => Ok(Millis::new(*millis)),
            DurationInput::Components(components) => Ok(Millis::from(components)),
        }
    }
}

impl From<&str> for DurationInput {
    fn from(text: &str) -> Self {
        DurationInput::Iso(text.to_string())
    }
}

impl From<String> for DurationInput {
    fn from(text: String) -> Self {
        DurationInput::Iso(text)
    }
}

impl From<f64> for DurationInput {
    fn from(millis: f64) -> Self {
        DurationInput::Millis(millis)
    }
}

impl From<Millis> for DurationInput {
    fn from(millis: Millis) -> Self {
        DurationInput::Millis(millis.get())
    }
}

impl From<DurationComponents> for DurationInput {
    fn from(components: DurationComponents) -> Self {
        DurationInput::Components(components)
    }
}

impl TryFrom<&DurationInput> for Millis {
    type Error = DurationError;

    fn try_from(input: &DurationInput) -> Result<Self, Self::Error> {
        input.to_millis()
    }
}

impl TryFrom<DurationInput> for Millis {
    type Error = DurationError;

    fn try_from(input: DurationInput) -> Result<Self, Self::Error> {
        input.to_millis()
    }
}

/// Dispatches on the runtime shape of a JSON value: strings are ISO
/// durations, numbers are milliseconds, objects are partial components.
impl TryFrom<&Value> for DurationInput {
    type Error = DurationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(DurationInput::Iso(text.clone())),
            Value::Number(number) => number
                .as_f64()
                .map(DurationInput::Millis)
                .ok_or_else(|| invalid_type(format!("unrepresentable number {number}"))),
            Value::Object(fields) => {
                let mut components = DurationComponents::ZERO;
                for (name, field) in fields {
                    let unit = Unit::from_name(name)
                        .ok_or_else(|| invalid_type(format!("unknown field {name:?}")))?;
                    let amount = field.as_f64().ok_or_else(|| {
                        invalid_type(format!("{} in field {name:?}", json_kind(field)))
                    })?;
                    components = components.with(unit, amount);
                }
                Ok(DurationInput::Components(components))
            }
            other => Err(invalid_type(json_kind(other).to_string())),
        }
    }
}

impl TryFrom<Value> for DurationInput {
    type Error = DurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        DurationInput::try_from(&value)
    }
}

fn invalid_type(found: String) -> DurationError {
    DurationError::InvalidType { found }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Coerces any accepted input into a full component struct.
///
/// Strings are parsed as ISO-8601, numbers become `{ milliseconds: n }`
/// and component structs pass through with missing fields already zero.
/// The result is not normalized.
///
/// # Errors
///
/// Returns [`DurationError::Parse`] if a string input is malformed.
///
/// # Example
///
/// ```
/// use tempus_duration::to_duration;
///
/// let c = to_duration("PT90M").unwrap();
/// assert_eq!(c.minutes, 90.0);
/// assert_eq!(to_duration(1500.0).unwrap().milliseconds, 1500.0);
/// ```
pub fn to_duration(input: impl Into<DurationInput>) -> Result<DurationComponents, DurationError> {
    match input.into() {
        DurationInput::Iso(text) => parse(&text),
        DurationInput::Millis(millis) => Ok(DurationComponents {
            milliseconds: millis,
            ..DurationComponents::ZERO
        }),
        DurationInput::Components(components) => Ok(components),
    }
}
