//! Tuning knobs shared by every card a coordinator drives.
//!
//! Hosts usually pass a small JSON object with only the keys they want to
//! change; missing keys keep their defaults. Overrides are always applied on
//! top of [`CardsConfig::default`], never on top of a previous override.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Error returned by [`CardsConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not a valid overrides object.
    #[error("failed to parse cards config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A divisor or scale factor was zero, negative or not finite.
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

/// Resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardsConfig {
    /// Scale of the active card, also the hysteresis margin around it.
    pub active_card_scale: f64,
    /// Maximum tilt around the X axis, in degrees.
    pub max_rotate_x: f64,
    /// Maximum tilt around the Y axis, in degrees.
    pub max_rotate_y: f64,
    /// Perspective depth in pixels.
    pub perspective: f64,
    /// Ease divisor for scale. Larger is slower.
    pub scale_easing: f64,
    /// Ease divisor for rotation. 1 snaps immediately.
    pub rotate_easing: f64,
}

impl Default for CardsConfig {
    fn default() -> Self {
        Self {
            active_card_scale: 1.8,
            max_rotate_x: 20.0,
            max_rotate_y: 20.0,
            perspective: 400.0,
            scale_easing: 9.0,
            rotate_easing: 1.0,
        }
    }
}

/// Sparse override. Only present fields replace the defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_card_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotate_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotate_y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_easing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_easing: Option<f64>,
}

impl ConfigOverrides {
    /// Parse an overrides object. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or non-numeric values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl CardsConfig {
    /// Defaults with `overrides` layered on top.
    #[must_use]
    pub fn with_overrides(overrides: &ConfigOverrides) -> Self {
        let base = Self::default();
        Self {
            active_card_scale: overrides.active_card_scale.unwrap_or(base.active_card_scale),
            max_rotate_x: overrides.max_rotate_x.unwrap_or(base.max_rotate_x),
            max_rotate_y: overrides.max_rotate_y.unwrap_or(base.max_rotate_y),
            perspective: overrides.perspective.unwrap_or(base.perspective),
            scale_easing: overrides.scale_easing.unwrap_or(base.scale_easing),
            rotate_easing: overrides.rotate_easing.unwrap_or(base.rotate_easing),
        }
    }

    /// Parse an overrides object such as `{"activeCardScale": 1.5}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::NonPositive`] when a scale or easing divisor is not a
    /// positive finite number.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config = Self::with_overrides(&ConfigOverrides::from_json(json)?);
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would poison the easing filters with NaN or infinity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("activeCardScale", self.active_card_scale),
            ("scaleEasing", self.scale_easing),
            ("rotateEasing", self.rotate_easing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }
}
