//! Signal processing: transforms, notch masks and display conversion.

pub mod spectral;

pub use spectral::{
    build_mask, build_shaped_mask, forward_spectrum, inverse_magnitude,
    reconstruct, reconstruct_magnitude, reconstruct_raw, Grid, NotchMask,
    NotchSpec, ShapingMode, Spectrum,
};
