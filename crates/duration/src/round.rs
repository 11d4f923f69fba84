//! Truncating rounding used by normalization.

/// Discards the fractional part of `value`, rounding towards zero.
///
/// Unlike [`f64::floor`], negative inputs round up: `-0.5` becomes `0`
/// and `-1.5` becomes `-1`. A zero result is always positive zero.
/// NaN and infinities pass through unchanged.
pub fn floor_towards_zero(value: f64) -> f64 {
    let truncated = value.trunc();
    if truncated == 0.0 { 0.0 } else { truncated }
}
