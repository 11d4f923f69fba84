//! Largest-unit-first decomposition.

use tracing::trace;

use crate::components::DurationComponents;
use crate::millis::Millis;
use crate::round::floor_towards_zero;
use crate::units::UNITS;

/// Decomposes a duration into a complete, normalized component struct.
///
/// The input is first collapsed to milliseconds, so how a component input
/// apportioned its units is not preserved. Units are then extracted
/// greedily from years down to milliseconds: each field is the truncated
/// (towards zero) count of that unit in what remains. Sub-millisecond
/// residue is dropped.
///
/// Every non-zero field of the result carries the sign of the total.
pub fn normalize(value: impl Into<Millis>) -> DurationComponents {
    let total = value.into().get();
    trace!(total, "normalizing duration");

    let mut remaining = total;
    let mut out = DurationComponents::ZERO;
    for unit in UNITS {
        let count = floor_towards_zero(remaining / unit.millis());
        out = out.with(unit, count);
        remaining -= count * unit.millis();
    }
    out
}
