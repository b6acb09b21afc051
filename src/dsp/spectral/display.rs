//! Conversion of real and complex fields into 8-bit display bitmaps.

use super::grid::Grid;
use crate::prelude::*;
use tracing::warn;

/// Divides every cell by the field's maximum and scales to `[0, 255]`.
///
/// A maximum at or below [`NORMALIZATION_FLOOR`] (or a non-finite one) has
/// no meaningful scale, so the result is a flat zero field instead.
pub fn normalize_to_display(field: &Grid<f64>) -> Grid<f64> {
    let max = field.max_value();

    if !max.is_finite() || max <= NORMALIZATION_FLOOR {
        warn!(
            rows = field.rows(),
            cols = field.cols(),
            max,
            "degenerate display normalization, substituting a flat field"
        );
        return field.map(|_| 0.0);
    }

    let gain = DISPLAY_MAX / max;
    field.map(|&x| x * gain)
}

/// Rounds a display-range field to bytes.
pub fn quantize(field: &Grid<f64>) -> Grid<u8> {
    field.map(|&x| to_display_byte(x))
}

/// The display form of a spectrum: `ln(|v| + 1)`, normalized by its maximum.
pub fn log_magnitude_display(spectrum: &Grid<Complex<f64>>) -> Grid<u8> {
    let log_mag = spectrum.map(|v| log_compress(v.norm()));
    quantize(&normalize_to_display(&log_mag))
}
