//! The state behind one filtering session: the loaded image, its spectrum,
//! the strokes painted so far and the current filter design.

use super::config::FilterConfig;
use super::strokes::{Stroke, StrokeAdapter};
use crate::dsp::spectral::display::{normalize_to_display, quantize};
use crate::dsp::spectral::grid::Grid;
use crate::dsp::spectral::notch::{NotchMask, ShapingMode};
use crate::dsp::spectral::pipeline::{forward_spectrum, inverse_magnitude, Spectrum};
use crate::prelude::*;
use tracing::debug;

/// Everything produced by one filter request.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOutput {
    /// The mask, oriented to the spectrum.
    pub mask: NotchMask,
    /// Display bitmap of the masked spectrum.
    pub spectrum: Grid<u8>,
    /// Display bitmap of the filtered image.
    pub image: Grid<u8>,
    /// SNR of the filtered image against the reference, if one is set.
    pub snr_db: Option<f64>,
}

/// Owns the mutable state the pure core is called with.
///
/// The spectrum display doubles as the drawing canvas, so strokes are in the
/// coordinates of a canvas with the image's width (columns) and height
/// (rows).
#[derive(Clone, Debug)]
pub struct FilterSession {
    image: Grid<f64>,
    spectrum: Spectrum,
    reference: Option<Grid<f64>>,
    strokes: Vec<Stroke>,
    config: FilterConfig,
    shaping: ShapingMode,
}

impl FilterSession {
    /// Starts a session on `image`, with no strokes and the default config.
    pub fn new(image: Grid<f64>) -> Self {
        let spectrum = forward_spectrum(&image);

        Self {
            image,
            spectrum,
            reference: None,
            strokes: Vec::new(),
            config: FilterConfig::default(),
            shaping: ShapingMode::default(),
        }
    }

    /// Replaces the source image, keeping strokes, config and reference.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::DimensionMismatch`] if a reference is set and
    /// `image` is not its shape. The session is left unchanged.
    pub fn set_image(&mut self, image: Grid<f64>) -> Result<()> {
        if let Some(reference) = &self.reference {
            reference.ensure_same_dims(&image)?;
        }

        self.spectrum = forward_spectrum(&image);
        self.image = image;
        Ok(())
    }

    pub const fn image(&self) -> &Grid<f64> {
        &self.image
    }

    pub const fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Sets the clean image filtered output is compared against.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::DimensionMismatch`] if `reference` is not the
    /// shape of the session's image.
    pub fn set_reference(&mut self, reference: Grid<f64>) -> Result<()> {
        self.image.ensure_same_dims(&reference)?;
        self.reference = Some(reference);
        Ok(())
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        if !stroke.is_empty() {
            self.strokes.push(stroke);
        }
    }

    /// Removes and returns the most recent stroke.
    pub fn undo_stroke(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn clear_strokes(&mut self) {
        self.strokes.clear();
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Installs a new filter design. The current design is kept if `config`
    /// is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidShapingParameter`] if `config` selects an
    /// invalid shaping mode.
    pub fn set_config(&mut self, config: FilterConfig) -> Result<()> {
        self.shaping = config.shaping()?;
        self.config = config;
        Ok(())
    }

    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// The canvas geometry strokes are drawn in.
    pub const fn adapter(&self) -> StrokeAdapter {
        StrokeAdapter::new(self.image.cols(), self.image.rows())
    }

    /// Display bitmap of the unmasked spectrum.
    pub fn spectrum_display(&self) -> Grid<u8> {
        self.spectrum.display()
    }

    /// Display bitmap of the (unfiltered) source image.
    pub fn image_display(&self) -> Grid<u8> {
        quantize(&self.image)
    }

    /// Rebuilds the mask from every stroke and filters the image with it.
    ///
    /// # Errors
    ///
    /// Propagates mask construction and reconstruction errors.
    pub fn apply(&self) -> Result<FilterOutput> {
        let mask = self.adapter().build_oriented_mask(&self.strokes, self.shaping)?;

        let masked = self.spectrum.masked(&mask)?;
        // compared in image units; normalization would rescale the result
        let filtered = inverse_magnitude(&masked);

        let snr_db = match &self.reference {
            Some(reference) => Some(snr_db(reference, &filtered)?),
            None => None,
        };

        debug!(strokes = self.strokes.len(), ?snr_db, "applied notch filter");

        Ok(FilterOutput {
            spectrum: masked.display(),
            image: quantize(&normalize_to_display(&filtered)),
            mask,
            snr_db,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::noise::add_gaussian_noise;
    use crate::app::strokes::StrokeSample;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A horizontal gradient with a strong periodic stripe pattern on top.
    fn striped(rows: usize, cols: usize) -> (Grid<f64>, Grid<f64>) {
        let clean = Grid::from_fn(rows, cols, |_, c| {
            50.0 + 150.0 * c as f64 / (cols - 1) as f64
        })
        .unwrap();
        let striped = Grid::from_fn(rows, cols, |r, c| {
            let stripe = 40.0 * (std::f64::consts::TAU * 4.0 * r as f64 / rows as f64).cos();
            clean[(r, c)] + stripe
        })
        .unwrap();

        (clean, striped)
    }

    #[test]
    fn test_no_strokes_reproduces_image() {
        let mut image = Grid::filled(8, 8, 10.0).unwrap();
        image[(3, 4)] = 255.0;
        let session = FilterSession::new(image.clone());

        let out = session.apply().unwrap();

        assert!(out.mask.is_pass_through());
        assert_eq!(out.image, quantize(&image));
        assert_eq!(out.spectrum, session.spectrum_display());
        assert_eq!(out.snr_db, None);
    }

    #[test]
    fn test_stroke_bookkeeping() {
        let mut session = FilterSession::new(Grid::filled(4, 4, 1.0).unwrap());
        let stroke = vec![StrokeSample::new(1.0, 1.0, 2.0)];

        session.push_stroke(stroke.clone());
        session.push_stroke(Vec::new());
        assert_eq!(session.strokes().len(), 1);

        assert_eq!(session.undo_stroke(), Some(stroke));
        assert_eq!(session.undo_stroke(), None);

        session.push_stroke(vec![StrokeSample::new(0.0, 0.0, 1.0)]);
        session.clear_strokes();
        assert!(session.strokes().is_empty());
    }

    #[test]
    fn test_invalid_config_keeps_previous() {
        let mut session = FilterSession::new(Grid::filled(4, 4, 1.0).unwrap());
        let gaussian = FilterConfig::new().with_std_dev(2.0);

        session.set_config(gaussian).unwrap();
        assert!(session.set_config(FilterConfig::new().with_std_dev(-1.0)).is_err());
        assert_eq!(session.config(), &gaussian);
    }

    #[test]
    fn test_mask_is_oriented_to_image() {
        let mut session = FilterSession::new(Grid::filled(6, 10, 1.0).unwrap());
        session.push_stroke(vec![StrokeSample::new(7.0, 2.0, 0.0)]);

        let out = session.apply().unwrap();

        assert_eq!(out.mask.dims(), (6, 10));
        assert!(epsilon_eq(out.mask[(1, 7)], 0.0));
        assert_eq!(out.mask.iter().filter(|&&g| g == 0.0).count(), 1);
    }

    #[test]
    fn test_notching_stripes_improves_snr() {
        let (rows, cols) = (32, 32);
        let (clean, striped) = striped(rows, cols);
        let mut session = FilterSession::new(striped.clone());
        session.set_reference(clean.clone()).unwrap();

        let before = session.apply().unwrap().snr_db.unwrap();

        // the stripes sit 4 rows above and below the centre of the shifted
        // spectrum; a sample at screen y lands on mask row y - 1
        let (cr, cc) = (rows / 2, cols / 2);
        for row in [cr - 4, cr + 4] {
            let sample = StrokeSample::new(cc as f64, row as f64 + 1.0, 2.0);
            session.push_stroke(vec![sample]);
        }

        let out = session.apply().unwrap();
        let after = out.snr_db.unwrap();

        assert!(epsilon_eq(out.mask[(cr - 4, cc)], 0.0));
        assert!(epsilon_eq(out.mask[(cr + 4, cc)], 0.0));
        assert!(after > before + 10.0, "snr went from {before} to {after}");
    }

    #[test]
    fn test_reference_shape_checked() {
        let mut session = FilterSession::new(Grid::filled(4, 4, 1.0).unwrap());
        assert!(session.set_reference(Grid::filled(4, 5, 1.0).unwrap()).is_err());
    }

    #[test]
    fn test_noisy_session() {
        let mut rng = StdRng::seed_from_u64(11);
        let (clean, _) = striped(16, 16);
        let noisy = add_gaussian_noise(&clean, 5.0, &mut rng).unwrap();

        let mut session = FilterSession::new(noisy);
        session.set_reference(clean).unwrap();

        let snr = session.apply().unwrap().snr_db.unwrap();
        assert!(snr.is_finite() && snr > 0.0);
    }

    #[test]
    fn test_set_image_keeps_reference_shape() {
        let (clean, striped) = striped(8, 8);
        let mut session = FilterSession::new(clean.clone());
        session.set_reference(clean).unwrap();

        session.set_image(striped.clone()).unwrap();
        assert_eq!(session.image(), &striped);
        assert!(session.apply().unwrap().snr_db.is_some());

        let result = session.set_image(Grid::filled(6, 6, 1.0).unwrap());
        assert_eq!(
            result,
            Err(NotchError::DimensionMismatch { expected: (8, 8), found: (6, 6) })
        );
        assert_eq!(session.image(), &striped);
        assert_eq!(session.spectrum(), &forward_spectrum(&striped));
        assert!(session.apply().is_ok());
    }

    #[test]
    fn test_set_image_without_reference_resizes() {
        let mut session = FilterSession::new(Grid::filled(4, 4, 1.0).unwrap());
        session.push_stroke(vec![StrokeSample::new(1.0, 1.0, 1.0)]);

        session.set_image(Grid::filled(6, 10, 1.0).unwrap()).unwrap();

        let out = session.apply().unwrap();
        assert_eq!(out.mask.dims(), (6, 10));
        assert_eq!(out.image.dims(), (6, 10));
    }

    #[test]
    fn test_clear_reference_drops_snr() {
        let (clean, striped) = striped(8, 8);
        let mut session = FilterSession::new(striped);
        session.set_reference(clean).unwrap();
        assert!(session.apply().unwrap().snr_db.is_some());

        session.clear_reference();
        assert_eq!(session.apply().unwrap().snr_db, None);
    }

    #[test]
    fn test_image_display_rounds_and_saturates() {
        let image = Grid::from_vec(1, 4, vec![-3.0, 12.4, 12.6, 300.0]).unwrap();
        let session = FilterSession::new(image);

        assert_eq!(session.image_display().as_slice(), &[0, 12, 13, 255]);
    }
}
