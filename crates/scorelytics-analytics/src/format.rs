//! Output-boundary rounding for report serialization
//!
//! Reports hold full-precision values; these helpers round them only while
//! serializing, via `#[serde(serialize_with = ...)]`.

use scorelytics_stats::ratio::Ratio;
use serde::Serializer;

/// Rounds `value` half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    // avoid emitting "-0.0"
    if rounded == 0.0 { 0.0 } else { rounded }
}

pub(crate) fn two_places<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_to(*value, 2))
}

pub(crate) fn six_places<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_to(*value, 6))
}

/// Serializes a defined ratio rounded to two places and an undefined one as `null`.
pub(crate) fn ratio_two_places<S>(value: &Ratio, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.value() {
        Some(v) => serializer.serialize_some(&round_to(v, 2)),
        None => serializer.serialize_none(),
    }
}
