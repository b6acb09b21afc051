//! Module for spectral (frequency domain) processing.

pub mod display;
pub mod fft2d;
pub mod grid;
pub mod notch;
pub mod pipeline;

pub use grid::Grid;
pub use notch::{
    build_mask, build_shaped_mask, NotchMask, NotchSpec, ShapingMode,
};
pub use pipeline::{
    forward_spectrum, inverse_magnitude, reconstruct, reconstruct_magnitude,
    reconstruct_raw, Spectrum,
};
