//! Project-wide exports for easy access.

pub use crate::error::{NotchError, Result};
pub use crate::settings::*;
pub use crate::util::*;
pub use rustfft::num_complex::Complex;
