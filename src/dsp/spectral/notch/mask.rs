//! Notch masks over frequency space.

use crate::dsp::spectral::grid::Grid;
use crate::prelude::*;
use std::ops::{Deref, DerefMut};

/// A "notch mask" — essentially a wrapper around a `Grid<f64>` of
/// multiplicative gains, one per frequency cell.
///
/// Rows are indexed by x and columns by y, so a mask built for a
/// `width × height` canvas has `width` rows. See
/// [`StrokeAdapter::orient_mask`](crate::app::strokes::StrokeAdapter::orient_mask)
/// for lining it up with a spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct NotchMask {
    gains: Grid<f64>,
}

impl Deref for NotchMask {
    type Target = Grid<f64>;

    fn deref(&self) -> &Self::Target {
        &self.gains
    }
}

impl DerefMut for NotchMask {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.gains
    }
}

impl NotchMask {
    /// Creates a pass-through mask (every cell `1.0`).
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidDimension`] if `width` or `height` is `0`.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self { gains: Grid::filled(width, height, PASS_THROUGH)? })
    }

    /// Wraps an existing field of gains.
    pub const fn from_grid(gains: Grid<f64>) -> Self {
        Self { gains }
    }

    /// The extent along x (the number of rows).
    pub const fn width(&self) -> usize {
        self.gains.rows()
    }

    /// The extent along y (the number of columns).
    pub const fn height(&self) -> usize {
        self.gains.cols()
    }

    /// Clamps every cell into `[min, max]`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is NaN.
    pub fn clamp_all(&mut self, min: f64, max: f64) {
        self.gains.iter_mut().for_each(|g| *g = g.clamp(min, max));
    }

    /// Returns `true` if no cell attenuates anything.
    pub fn is_pass_through(&self) -> bool {
        self.gains.iter().all(|&g| epsilon_eq(g, PASS_THROUGH))
    }
}
