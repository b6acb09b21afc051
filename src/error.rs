//! Error type shared by the whole crate.

use thiserror::Error;

/// Every failure in this crate is a caller-input problem; nothing here is
/// transient, so there is no retry information attached.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NotchError {
    /// A zero dimension, or a buffer whose length is not `rows * cols`.
    #[error("invalid field dimensions {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Two fields which must share a shape do not.
    #[error("dimension mismatch: expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("invalid shaping parameter: {0}")]
    InvalidShapingParameter(String),

    #[error("invalid filter config: {0}")]
    Config(String),

    #[error("invalid noise standard deviation {0}")]
    InvalidNoiseLevel(f64),
}

pub type Result<T> = std::result::Result<T, NotchError>;

impl From<serde_json::Error> for NotchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
