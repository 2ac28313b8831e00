//! Look Configuration
//!
//! Mouse-look tuning: sensitivity, smoothing and the vertical clamp.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use super::motor_config::{ensure_finite, ensure_positive};

/// Tuning for the smoothed first-person look controller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Multiplier applied to raw pointer deltas
    pub mouse_sensitivity: f32,
    /// Player preference multiplier stacked on top of `mouse_sensitivity`
    pub sensitivity_modifier: f32,
    /// Scale from smoothed look velocity to accumulated look angle (degrees)
    pub look_speed: f32,
    /// Smoothing factor; look velocity moves `1 / smoothing` of the way to
    /// the target each tick (1.0 = no smoothing)
    pub smoothing: f32,
    /// Vertical look limits in degrees, `x` = down, `y` = up
    pub vertical_extents: Vec2,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 3.0,
            sensitivity_modifier: 1.0,
            look_speed: 0.5,
            smoothing: 2.0,
            vertical_extents: Vec2::new(-70.0, 70.0),
        }
    }
}

impl LookConfig {
    /// Check that every value is usable by the look controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("look.mouse_sensitivity", self.mouse_sensitivity)?;
        ensure_finite("look.sensitivity_modifier", self.sensitivity_modifier)?;
        ensure_finite("look.look_speed", self.look_speed)?;
        ensure_positive("look.smoothing", self.smoothing)?;
        if !self.vertical_extents.is_finite() || self.vertical_extents.x > self.vertical_extents.y {
            return Err(ConfigError::invalid(
                "look.vertical_extents",
                format!(
                    "lower limit {} must not exceed upper limit {}",
                    self.vertical_extents.x, self.vertical_extents.y
                ),
            ));
        }
        Ok(())
    }
}
