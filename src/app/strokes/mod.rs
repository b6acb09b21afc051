//! Conversion of pointer strokes drawn over the spectrum display into notch
//! specifications and masks.
//!
//! Two coordinate reconciliations happen here and both are needed. Screen y
//! grows downward, so each sample's y is flipped against the canvas height
//! when it becomes a notch. The mask is then built x-major (`width` rows),
//! while images and spectra are row-major with `height` rows, so the finished
//! mask is transposed and flipped vertically before it meets the spectrum.

use crate::dsp::spectral::notch::{build_shaped_mask, NotchMask, NotchSpec, ShapingMode};
use crate::prelude::*;
use tracing::debug;

/// One pointer sample: screen position (origin top-left, y downward) and the
/// brush width at that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSample {
    pub x: f64,
    pub y: f64,
    pub brush_width: f64,
}

impl StrokeSample {
    pub const fn new(x: f64, y: f64, brush_width: f64) -> Self {
        Self { x, y, brush_width }
    }
}

/// An ordered run of samples from a single pointer drag.
pub type Stroke = Vec<StrokeSample>;

/// The geometry of the canvas the strokes were drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeAdapter {
    pub canvas_width: usize,
    pub canvas_height: usize,
}

impl StrokeAdapter {
    pub const fn new(canvas_width: usize, canvas_height: usize) -> Self {
        Self { canvas_width, canvas_height }
    }

    /// Maps every sample of every stroke, in order, to a notch whose center
    /// has its y flipped against the canvas height and whose diameter is the
    /// brush width.
    pub fn to_notches(&self, strokes: &[Stroke]) -> Vec<NotchSpec> {
        let height = self.canvas_height as f64;

        strokes
            .iter()
            .flatten()
            .map(|s| NotchSpec::new(s.x, height - s.y, s.brush_width))
            .collect()
    }

    /// Transposes `mask` and flips it vertically, taking it from the
    /// x-major layout the mask builder produces to the row-major layout of
    /// the spectrum.
    pub fn orient_mask(&self, mask: NotchMask) -> NotchMask {
        NotchMask::from_grid(mask.transposed().flipped_vertical())
    }

    /// Builds the mask for `strokes` and orients it for the spectrum. The
    /// result has `canvas_height` rows and `canvas_width` columns.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidDimension`] for an empty canvas, or
    /// [`NotchError::InvalidShapingParameter`] for an invalid `mode`.
    pub fn build_oriented_mask(
        &self,
        strokes: &[Stroke],
        mode: ShapingMode,
    ) -> Result<NotchMask> {
        let notches = self.to_notches(strokes);
        debug!(
            strokes = strokes.len(),
            samples = notches.len(),
            "converted strokes to notches"
        );

        let mask = build_shaped_mask(
            &notches,
            self.canvas_width,
            self.canvas_height,
            mode,
        )?;

        Ok(self.orient_mask(mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_flip_of_samples() {
        let adapter = StrokeAdapter::new(10, 8);
        let strokes = vec![
            vec![StrokeSample::new(1.0, 2.0, 3.0), StrokeSample::new(4.0, 0.0, 1.0)],
            vec![StrokeSample::new(9.5, 8.0, 6.0)],
        ];

        assert_eq!(
            adapter.to_notches(&strokes),
            vec![
                NotchSpec::new(1.0, 6.0, 3.0),
                NotchSpec::new(4.0, 8.0, 1.0),
                NotchSpec::new(9.5, 0.0, 6.0),
            ]
        );
    }

    #[test]
    fn test_no_strokes_is_pass_through() {
        let adapter = StrokeAdapter::new(5, 3);
        let mask = adapter.build_oriented_mask(&[], ShapingMode::Binary).unwrap();

        assert_eq!(mask.dims(), (3, 5));
        assert!(mask.is_pass_through());
    }

    #[test]
    fn test_oriented_mask_lands_under_the_pointer() {
        // a dot drawn at screen (x = 5, y = 2) on a 7 × 4 canvas
        let adapter = StrokeAdapter::new(7, 4);
        let strokes = vec![vec![StrokeSample::new(5.0, 2.0, 0.0)]];
        let mask = adapter.build_oriented_mask(&strokes, ShapingMode::Binary).unwrap();

        assert_eq!(mask.dims(), (4, 7));

        // flipped to y' = 2, built at cell (5, 2), transposed to (2, 5), and
        // flipped to row 4 - 1 - 2 = 1: one row above the pointer
        let zeroed: Vec<_> = (0..4)
            .flat_map(|r| (0..7).map(move |c| (r, c)))
            .filter(|&(r, c)| epsilon_eq(mask[(r, c)], 0.0))
            .collect();
        assert_eq!(zeroed, vec![(1, 5)]);
    }

    #[test]
    fn test_orientation_of_a_marked_cell() {
        let adapter = StrokeAdapter::new(3, 2);
        let mut mask = NotchMask::new(3, 2).unwrap();
        mask[(2, 0)] = 0.5;

        let oriented = adapter.orient_mask(mask);

        assert_eq!(oriented.dims(), (2, 3));
        // transpose: (0, 2); flip: (1, 2)
        assert!(epsilon_eq(oriented[(1, 2)], 0.5));
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let adapter = StrokeAdapter::new(0, 4);
        assert!(matches!(
            adapter.build_oriented_mask(&[], ShapingMode::Binary),
            Err(NotchError::InvalidDimension { .. })
        ));
    }
}
