//! A dense, row-major 2D field.

use crate::prelude::*;
use std::ops::{Index, IndexMut};

/// A `rows × cols` field stored row-major, used for images, masks, spectra
/// and display bitmaps alike.
///
/// A `Grid` can never be empty: both dimensions are checked on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(NotchError::InvalidDimension { rows, cols });
    }

    Ok(())
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidDimension`] if either dimension is `0`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_dims(rows, cols)?;

        Ok(Self { rows, cols, data: vec![value; rows * cols] })
    }

    /// Returns the transpose of the grid (`cols × rows`).
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());

        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c].clone());
            }
        }

        Self { rows: self.cols, cols: self.rows, data }
    }

    /// Returns the grid with its row order reversed (an up/down flip).
    pub fn flipped_vertical(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());

        for row in self.data.chunks_exact(self.cols).rev() {
            data.extend_from_slice(row);
        }

        Self { rows: self.rows, cols: self.cols, data }
    }
}

impl<T> Grid<T> {
    /// Wraps a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidDimension`] if either dimension is `0`,
    /// or if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        check_dims(rows, cols)?;

        if data.len() != rows * cols {
            return Err(NotchError::InvalidDimension { rows, cols });
        }

        Ok(Self { rows, cols, data })
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidDimension`] if either dimension is `0`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        check_dims(rows, cols)?;

        let data = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();

        Ok(Self { rows, cols, data })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        }
        else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Applies `f` to every cell, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Reinterprets the buffer as `cols × rows` without moving any data.
    pub(crate) fn swap_dims(self) -> Self {
        Self { rows: self.cols, cols: self.rows, data: self.data }
    }

    /// Replaces the buffer with `f(buffer)`, keeping the shape.
    ///
    /// # Panics
    ///
    /// Panics if `f` returns a buffer of a different length.
    pub(crate) fn with_buffer<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnOnce(&[T]) -> Vec<U>,
    {
        let data = f(&self.data);
        assert_eq!(data.len(), self.data.len(), "buffer length changed");

        Grid { rows: self.rows, cols: self.cols, data }
    }

    /// # Errors
    ///
    /// Returns [`NotchError::DimensionMismatch`] if `other` is a different
    /// shape.
    pub fn ensure_same_dims<U>(&self, other: &Grid<U>) -> Result<()> {
        if self.dims() != other.dims() {
            return Err(NotchError::DimensionMismatch {
                expected: self.dims(),
                found: other.dims(),
            });
        }

        Ok(())
    }
}

impl Grid<f64> {
    /// Builds a real-valued image from 8-bit grayscale pixels.
    ///
    /// # Errors
    ///
    /// See [`Grid::from_vec`].
    pub fn from_luma(rows: usize, cols: usize, pixels: &[u8]) -> Result<Self> {
        Self::from_vec(rows, cols, pixels.iter().map(|&p| f64::from(p)).collect())
    }

    /// The largest value in the grid, ignoring NaN.
    pub fn max_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && col < self.cols, "grid index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(rows: usize, cols: usize) -> Grid<usize> {
        Grid::from_fn(rows, cols, |r, c| r * cols + c).unwrap()
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::filled(0, 3, 1.0),
            Err(NotchError::InvalidDimension { rows: 0, cols: 3 })
        );
        assert!(Grid::<f64>::from_vec(2, 2, vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_transpose() {
        let g = counting(2, 3);
        let t = g.transposed();

        assert_eq!(t.dims(), (3, 2));
        assert_eq!(t.as_slice(), &[0, 3, 1, 4, 2, 5]);
        assert_eq!(t.transposed(), g);
    }

    #[test]
    fn test_vertical_flip() {
        let g = counting(3, 2);
        assert_eq!(g.flipped_vertical().as_slice(), &[4, 5, 2, 3, 0, 1]);
    }

    #[test]
    fn test_swap_dims_keeps_buffer() {
        let g = counting(2, 3);
        let swapped = g.clone().swap_dims();

        assert_eq!(swapped.dims(), (3, 2));
        assert_eq!(swapped.as_slice(), g.as_slice());
        assert_eq!(swapped[(1, 0)], 2);
    }

    #[test]
    fn test_shape_checks() {
        let a = Grid::filled(2, 3, 0u8).unwrap();
        let b = Grid::filled(3, 2, 0.0).unwrap();

        assert_eq!(
            a.ensure_same_dims(&b),
            Err(NotchError::DimensionMismatch { expected: (2, 3), found: (3, 2) })
        );
        assert!(a.get(2, 0).is_none());
    }
}
