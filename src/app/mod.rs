//! Session state and the adapters between the interactive surface and the
//! spectral core.

pub mod config;
pub mod noise;
pub mod session;
pub mod strokes;

pub use config::FilterConfig;
pub use noise::add_gaussian_noise;
pub use session::{FilterOutput, FilterSession};
pub use strokes::{Stroke, StrokeAdapter, StrokeSample};
