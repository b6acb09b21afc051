//! Global constants.

/// The upper bound of the 8-bit display range.
pub const DISPLAY_MAX: f64 = 255.0;

/// The clamp bounds which leave a binary mask untouched. A config with these
/// bounds and no standard deviation selects plain binary shaping.
pub const IDENTITY_MIN_VALUE: f64 = 0.0;
pub const IDENTITY_MAX_VALUE: f64 = DISPLAY_MAX;

/// Maxima at or below this value are treated as degenerate during display
/// normalization, and produce a flat zero field.
///
/// Exact zero is not enough here: a fully suppressed spectrum inverts to
/// floating-point residue around `1e-14`, which would otherwise be stretched
/// to full brightness.
pub const NORMALIZATION_FLOOR: f64 = 1e-9;

/// The value of every mask cell which no notch touches.
pub const PASS_THROUGH: f64 = 1.0;
