//! Image quality metrics.

use crate::dsp::spectral::grid::Grid;
use crate::error::Result;

/// The mean of the squared per-pixel differences.
///
/// # Errors
///
/// Returns [`NotchError::DimensionMismatch`](crate::NotchError::DimensionMismatch)
/// if the grids differ in shape.
pub fn mean_squared_error(reference: &Grid<f64>, test: &Grid<f64>) -> Result<f64> {
    reference.ensure_same_dims(test)?;

    let sum: f64 = reference
        .iter()
        .zip(test.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    Ok(sum / reference.as_slice().len() as f64)
}

/// Signal-to-noise ratio of `test` against `reference`, in decibels:
/// `10 log10(Σ ref² / Σ (ref - test)²)`.
///
/// Identical images give `f64::INFINITY`.
///
/// # Errors
///
/// Returns [`NotchError::DimensionMismatch`](crate::NotchError::DimensionMismatch)
/// if the grids differ in shape.
pub fn snr_db(reference: &Grid<f64>, test: &Grid<f64>) -> Result<f64> {
    reference.ensure_same_dims(test)?;

    let signal: f64 = reference.iter().map(|a| a * a).sum();
    let noise: f64 = reference
        .iter()
        .zip(test.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    if noise == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * (signal / noise).log10())
}
