//! Two-dimensional discrete Fourier transforms and quadrant shifts.
//!
//! `fft2d` leaves its output transposed, so each transform is fed the
//! transpose of its input and hands back the natural `rows × cols` layout.

use super::grid::Grid;
use crate::prelude::*;
use fft2d::slice;

/// Forward 2D DFT of a real field. The result is unshifted (zero frequency at
/// `(0, 0)`) and unscaled.
pub fn fft_2d(field: &Grid<f64>) -> Grid<Complex<f64>> {
    let (rows, cols) = field.dims();
    let mut buffer = field.map(|&x| Complex::new(x, 0.0)).transposed();

    slice::fft_2d(rows, cols, buffer.as_mut_slice());

    buffer.swap_dims()
}

/// Inverse 2D DFT, scaled by `1 / (rows * cols)` so that
/// `ifft_2d(fft_2d(x)) == x`.
pub fn ifft_2d(spectrum: &Grid<Complex<f64>>) -> Grid<Complex<f64>> {
    let (rows, cols) = spectrum.dims();
    let mut buffer = spectrum.transposed();

    slice::ifft_2d(rows, cols, buffer.as_mut_slice());

    let norm = ((rows * cols) as f64).recip();
    buffer.iter_mut().for_each(|x| *x *= norm);

    buffer.swap_dims()
}

/// Moves the zero-frequency cell from `(0, 0)` to `(rows / 2, cols / 2)`.
pub fn fftshift<T: Copy + Default>(grid: &Grid<T>) -> Grid<T> {
    let (rows, cols) = grid.dims();
    grid.with_buffer(|data| slice::fftshift(cols, rows, data))
}

/// The inverse of [`fftshift`], also for odd dimensions.
pub fn ifftshift<T: Copy + Default>(grid: &Grid<T>) -> Grid<T> {
    let (rows, cols) = grid.dims();
    grid.with_buffer(|data| slice::ifftshift(cols, rows, data))
}
