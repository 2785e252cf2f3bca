// src/utils.rs

/// Rounds to 2 decimal places: the precision all user-facing numbers
/// (scores, distances in miles) carry.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
