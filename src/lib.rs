#![allow(
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::return_self_not_must_use,
    clippy::redundant_closure_for_method_calls
)]

// Session, stroke handling and filter configuration
pub mod app;

// Spectral processing
pub mod dsp;

// Crate-wide error type
pub mod error;

// General utilities
pub mod util;

// Some widely-used re-exports
pub mod prelude;

// Program-wide settings
pub mod settings;

pub use error::{NotchError, Result};
