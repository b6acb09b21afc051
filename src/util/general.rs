//! General-purpose utility functions.

use super::*;

/// Squared Euclidean distance between `(x1, y1)` and `(x2, y2)`.
#[inline]
pub fn distance_sq(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx.mul_add(dx, dy * dy)
}

/// Compresses a magnitude with `ln(1 + x)`, so that the huge DC term of a
/// spectrum does not wash out everything else when displayed.
#[inline]
pub fn log_compress(magnitude: f64) -> f64 {
    magnitude.ln_1p()
}

/// Rounds a display-range value to the nearest byte, saturating at both ends.
///
/// NaN maps to `0`.
#[inline]
pub fn to_display_byte(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    value.round().clamp(0.0, DISPLAY_MAX) as u8
}

/// Returns whether `value` and `target` differ by no more than `tolerance`.
/// Useful for checking approximate equality.
pub fn within_tolerance(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() <= tolerance
}

/// Returns true if `value` is equal to `target`, with a tolerance of
/// ±`f64::EPSILON`.
pub fn epsilon_eq(value: f64, target: f64) -> bool {
    (target - value).abs() < f64::EPSILON
}
