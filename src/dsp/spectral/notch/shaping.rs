//! Policies which turn the inside/outside test of a notch into a mask value.

use crate::prelude::*;

/// How a notch shapes the mask cells it covers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ShapingMode {
    /// `0.0` inside every notch.
    #[default]
    Binary,
    /// Binary, after which *every* cell of the field (background included)
    /// is clamped into `[min, max]`.
    BinaryClamped { min: f64, max: f64 },
    /// `exp(-d² / 2σ²)` inside a notch, where `d` is the distance to that
    /// notch's center.
    Gaussian { sigma: f64 },
}

impl ShapingMode {
    /// Selects a shaping mode from user-facing filter parameters.
    ///
    /// A standard deviation selects [`Gaussian`](Self::Gaussian) and the
    /// bounds are ignored. Otherwise the bounds select
    /// [`BinaryClamped`](Self::BinaryClamped), unless they are the identity
    /// bounds `(0, 255)`, which select plain [`Binary`](Self::Binary).
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidShapingParameter`] if the selected mode
    /// fails [`validate`](Self::validate).
    pub fn from_parameters(
        min_value: f64,
        max_value: f64,
        std_dev: Option<f64>,
    ) -> Result<Self> {
        let mode = match std_dev {
            Some(sigma) => Self::Gaussian { sigma },
            None if epsilon_eq(min_value, IDENTITY_MIN_VALUE)
                && epsilon_eq(max_value, IDENTITY_MAX_VALUE) =>
            {
                Self::Binary
            }
            None => Self::BinaryClamped { min: min_value, max: max_value },
        };

        mode.validate()?;
        Ok(mode)
    }

    /// Checks the mode's parameters.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidShapingParameter`] if `sigma` is not a
    /// positive finite value, or if the clamp bounds do not satisfy
    /// `0 <= min <= max <= 255`.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Binary => Ok(()),
            Self::Gaussian { sigma } => {
                if sigma.is_finite() && sigma > 0.0 {
                    Ok(())
                }
                else {
                    Err(NotchError::InvalidShapingParameter(format!(
                        "standard deviation must be positive, got {sigma}"
                    )))
                }
            }
            Self::BinaryClamped { min, max } => {
                let in_range =
                    |v: f64| (IDENTITY_MIN_VALUE..=IDENTITY_MAX_VALUE).contains(&v);

                if !in_range(min) || !in_range(max) {
                    return Err(NotchError::InvalidShapingParameter(format!(
                        "clamp bounds [{min}, {max}] must lie within [0, 255]"
                    )));
                }
                if min > max {
                    return Err(NotchError::InvalidShapingParameter(format!(
                        "minimum value {min} exceeds maximum value {max}"
                    )));
                }

                Ok(())
            }
        }
    }

    /// The value written to a cell lying `sqrt(dist_sq)` away from the center
    /// of a notch which contains it.
    #[inline]
    pub fn inside_value(&self, dist_sq: f64) -> f64 {
        match *self {
            Self::Binary | Self::BinaryClamped { .. } => 0.0,
            Self::Gaussian { sigma } => (-dist_sq / (2.0 * sigma * sigma)).exp(),
        }
    }

    /// The clamp applied to the whole field once all notches are drawn, if
    /// any.
    pub const fn field_clamp(&self) -> Option<(f64, f64)> {
        match *self {
            Self::BinaryClamped { min, max } => Some((min, max)),
            _ => None,
        }
    }
}
