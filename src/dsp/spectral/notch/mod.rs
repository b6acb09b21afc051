//! Notch mask generation: circular notch geometry plus shaping.

use super::grid::Grid;
use crate::prelude::*;
use std::ops::RangeInclusive;
use tracing::{debug, trace};

pub mod mask;
pub mod shaping;

pub use mask::NotchMask;
pub use shaping::ShapingMode;

/// One circular notch in the index space of a mask.
///
/// The diameter (not the radius) is the external unit, matching the brush
/// width of the stroke which produced the notch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NotchSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub diameter: f64,
}

impl NotchSpec {
    pub const fn new(center_x: f64, center_y: f64, diameter: f64) -> Self {
        Self { center_x, center_y, diameter }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Squared distance from cell `(i, j)` to the notch center.
    #[inline]
    pub fn dist_sq(&self, i: usize, j: usize) -> f64 {
        distance_sq(i as f64, j as f64, self.center_x, self.center_y)
    }

    /// Whether cell `(i, j)` lies on or inside the notch circle.
    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let r = self.radius();
        self.dist_sq(i, j) <= r * r
    }
}

/// Builds a binary mask: `0.0` inside any notch, `1.0` elsewhere.
///
/// # Errors
///
/// Returns [`NotchError::InvalidDimension`] if `width` or `height` is `0`.
pub fn build_mask(
    notches: &[NotchSpec],
    width: usize,
    height: usize,
) -> Result<NotchMask> {
    build_shaped_mask(notches, width, height, ShapingMode::Binary)
}

/// Builds a `width × height` mask from `notches`, shaped by `mode`.
///
/// Notches are drawn in order and a later notch overwrites any earlier one
/// inside its own circle. Cells no notch covers stay at `1.0`, except that
/// [`ShapingMode::BinaryClamped`] clamps the entire field afterwards.
///
/// # Errors
///
/// Returns [`NotchError::InvalidDimension`] if `width` or `height` is `0`,
/// or [`NotchError::InvalidShapingParameter`] if `mode` is invalid.
pub fn build_shaped_mask(
    notches: &[NotchSpec],
    width: usize,
    height: usize,
    mode: ShapingMode,
) -> Result<NotchMask> {
    mode.validate()?;

    let mut mask = NotchMask::new(width, height)?;

    for notch in notches {
        draw_notch(&mut mask, notch, &mode);
    }

    if let Some((min, max)) = mode.field_clamp() {
        mask.clamp_all(min, max);
    }

    debug!(width, height, notches = notches.len(), ?mode, "built notch mask");

    Ok(mask)
}

fn draw_notch(mask: &mut Grid<f64>, notch: &NotchSpec, mode: &ShapingMode) {
    let radius = notch.radius().abs();
    let r_sq = radius * radius;

    let (Some(rows), Some(cols)) = (
        cell_span(notch.center_x, radius, mask.rows()),
        cell_span(notch.center_y, radius, mask.cols()),
    )
    else {
        trace!(?notch, "notch misses the field");
        return;
    };

    for i in rows {
        for j in cols.clone() {
            let d_sq = notch.dist_sq(i, j);

            if d_sq <= r_sq {
                mask[(i, j)] = mode.inside_value(d_sq);
            }
        }
    }
}

/// The in-bounds indices along one axis which a circle may touch, padded by a
/// cell on each side so rounding never drops a boundary cell. The distance
/// test decides the rest.
fn cell_span(center: f64, radius: f64, len: usize) -> Option<RangeInclusive<usize>> {
    let lo = (center - radius).floor() - 1.0;
    let hi = (center + radius).ceil() + 1.0;

    if lo.is_nan() || hi.is_nan() {
        return None;
    }

    let lo = lo.max(0.0);
    let hi = hi.min((len - 1) as f64);

    if lo > hi {
        return None;
    }

    Some(lo as usize..=hi as usize)
}
