//! User-facing filter configuration, validated against a JSON schema.

use crate::dsp::spectral::notch::ShapingMode;
use crate::prelude::*;
use lazy_static::lazy_static;
use serde::Deserialize;
use serde_json::{json, Value};

const FILTER_CONFIG_SCHEMA: &str =
    include_str!("../../../assets/json/filter_config_schema.json");

lazy_static! {
    static ref FILTER_CONFIG_VALIDATOR: jsonschema::Validator = {
        let schema: Value = serde_json::from_str(FILTER_CONFIG_SCHEMA)
            .expect("failed to parse filter config schema to JSON");
        jsonschema::Validator::new(&schema)
            .expect("failed to create filter config schema validator")
    };
}

fn schema_errors(json: &Value) -> Vec<String> {
    FILTER_CONFIG_VALIDATOR
        .iter_errors(json)
        .map(|e| e.to_string())
        .collect()
}

const fn default_min_value() -> f64 {
    IDENTITY_MIN_VALUE
}

const fn default_max_value() -> f64 {
    IDENTITY_MAX_VALUE
}

/// The parameters a user saves from the filter design dialog.
///
/// A present `std_dev` selects Gaussian notches; otherwise the bounds select
/// plain or clamped binary notches (see [`ShapingMode::from_parameters`]).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_min_value")]
    pub min_value: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default)]
    pub std_dev: Option<f64>,
}

impl FilterConfig {
    pub const fn new() -> Self {
        Self {
            min_value: IDENTITY_MIN_VALUE,
            max_value: IDENTITY_MAX_VALUE,
            std_dev: None,
        }
    }

    pub const fn with_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub const fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = Some(std_dev);
        self
    }

    /// Parses and validates a config from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::Config`] if the text is not JSON or does not match
    /// the config schema, or [`NotchError::InvalidShapingParameter`] if the
    /// values are individually valid but inconsistent (e.g. `min > max`).
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;

        let errors = schema_errors(&value);
        if !errors.is_empty() {
            return Err(NotchError::Config(errors.join("; ")));
        }

        let config: Self = serde_json::from_value(value)?;
        config.shaping()?;

        Ok(config)
    }

    /// The shaping mode this config selects.
    ///
    /// # Errors
    ///
    /// Returns [`NotchError::InvalidShapingParameter`] if the selected mode is
    /// invalid.
    pub fn shaping(&self) -> Result<ShapingMode> {
        ShapingMode::from_parameters(self.min_value, self.max_value, self.std_dev)
    }

    pub fn as_json(&self) -> Value {
        let mut result = json!({
            "min_value": self.min_value,
            "max_value": self.max_value,
        });

        if let (Some(std_dev), Some(obj)) = (self.std_dev, result.as_object_mut()) {
            obj.insert("std_dev".into(), json!(std_dev));
        }

        result
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
