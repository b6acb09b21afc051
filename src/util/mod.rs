//! Global utility functions — these are publicly re-exported in `prelude.rs`.

use crate::settings::DISPLAY_MAX;

pub mod general;
pub mod metrics;

pub use general::*;
pub use metrics::{mean_squared_error, snr_db};
