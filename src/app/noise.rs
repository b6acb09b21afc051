//! Synthetic noise, for checking how well a notch design recovers an image.

use crate::dsp::spectral::grid::Grid;
use crate::prelude::*;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Adds zero-mean Gaussian noise with standard deviation `std_dev` (in pixel
/// units) to every pixel, clamping the result to `[0, 255]`.
///
/// # Errors
///
/// Returns [`NotchError::InvalidNoiseLevel`] if `std_dev` is negative or not
/// finite.
pub fn add_gaussian_noise<R>(
    image: &Grid<f64>,
    std_dev: f64,
    rng: &mut R,
) -> Result<Grid<f64>>
where
    R: Rng + ?Sized,
{
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(NotchError::InvalidNoiseLevel(std_dev));
    }
    if std_dev == 0.0 {
        return Ok(image.clone());
    }

    let normal = Normal::new(0.0, std_dev)
        .map_err(|_| NotchError::InvalidNoiseLevel(std_dev))?;

    Ok(image.map(|&px| (px + normal.sample(rng)).clamp(0.0, DISPLAY_MAX)))
}
