//! The forward/inverse transform pipeline around a notch mask.

use super::display::{log_magnitude_display, normalize_to_display, quantize};
use super::fft2d::{fft_2d, fftshift, ifft_2d, ifftshift};
use super::grid::Grid;
use super::notch::NotchMask;
use crate::prelude::*;
use tracing::debug;

/// The 2D spectrum of a real image, held *shifted*: the zero-frequency cell
/// sits at `(rows / 2, cols / 2)`. Masks are applied in this orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    shifted: Grid<Complex<f64>>,
}

impl Spectrum {
    /// Wraps a field which is already in shifted orientation.
    pub const fn from_shifted(shifted: Grid<Complex<f64>>) -> Self {
        Self { shifted }
    }

    pub const fn as_grid(&self) -> &Grid<Complex<f64>> {
        &self.shifted
    }

    pub const fn dims(&self) -> (usize, usize) {
        self.shifted.dims()
    }

    /// Multiplies every cell by the matching mask gain.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::DimensionMismatch`] if the mask does not have the
    /// spectrum's shape.
    pub fn masked(&self, mask: &NotchMask) -> Result<Self> {
        self.shifted.ensure_same_dims(mask)?;

        let mut shifted = self.shifted.clone();
        shifted
            .iter_mut()
            .zip(mask.iter())
            .for_each(|(bin, &gain)| *bin *= gain);

        Ok(Self { shifted })
    }

    /// The log-magnitude display bitmap of this spectrum.
    pub fn display(&self) -> Grid<u8> {
        log_magnitude_display(&self.shifted)
    }
}

/// Computes the shifted spectrum of a real image.
pub fn forward_spectrum(image: &Grid<f64>) -> Spectrum {
    let spectrum = fft_2d(image);
    debug!(rows = image.rows(), cols = image.cols(), "computed forward spectrum");

    Spectrum::from_shifted(fftshift(&spectrum))
}

/// Transforms a (masked) shifted spectrum back to the spatial domain and
/// returns `|v|` per pixel, in the units of the original image.
pub fn inverse_magnitude(spectrum: &Spectrum) -> Grid<f64> {
    let spatial = ifft_2d(&ifftshift(spectrum.as_grid()));

    let (rows, cols) = spatial.dims();
    debug!(rows, cols, "reconstructed spatial image");

    spatial.map(|v| v.norm())
}

/// Masks `spectrum` and transforms it back, without display normalization.
///
/// # Errors
///
/// Returns [`NotchError::DimensionMismatch`] if `mask` and `spectrum` differ
/// in shape.
pub fn reconstruct_raw(spectrum: &Spectrum, mask: &NotchMask) -> Result<Grid<f64>> {
    Ok(inverse_magnitude(&spectrum.masked(mask)?))
}

/// Masks `spectrum`, transforms it back to the spatial domain, and returns
/// its magnitude normalized into `[0, 255]` (not yet quantized).
///
/// # Errors
///
/// See [`reconstruct_raw`].
pub fn reconstruct_magnitude(
    spectrum: &Spectrum,
    mask: &NotchMask,
) -> Result<Grid<f64>> {
    Ok(normalize_to_display(&reconstruct_raw(spectrum, mask)?))
}

/// Like [`reconstruct_magnitude`], quantized to an 8-bit display bitmap.
///
/// # Errors
///
/// See [`reconstruct_magnitude`].
pub fn reconstruct(spectrum: &Spectrum, mask: &NotchMask) -> Result<Grid<u8>> {
    Ok(quantize(&reconstruct_magnitude(spectrum, mask)?))
}
