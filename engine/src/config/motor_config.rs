//! Motor Configuration
//!
//! Tunable parameters for the player motor. Values are fixed for a session;
//! the motor copies them on construction.
//!
//! # Loading
//!
//! ```rust,ignore
//! use hr_runner_engine::config::MotorConfig;
//!
//! let config = MotorConfig::load("assets/player_motor.json")?;
//! ```

use std::fs;
use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::{ConfigError, LookConfig};

/// Surface tag carried by untagged geometry.
pub const UNTAGGED: &str = "Untagged";

/// Collider and head placement of the body the host spawns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Standing collider height in meters
    pub height: f32,
    /// Collider radius in meters
    pub radius: f32,
    /// Collider center relative to the body position
    pub center: Vec3,
    /// Head (camera) local height relative to the body position
    pub head_height: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.5,
            center: Vec3::ZERO,
            head_height: 0.6,
        }
    }
}

/// Complete tuning for the player motor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotorConfig {
    /// Speed cap for input acceleration (m/s)
    pub move_speed: f32,
    /// Apex height of a jump (m)
    pub jump_height: f32,
    /// Seconds of aligned input needed to reach fully ramped ground acceleration
    pub ground_accel_ramp_duration: f32,
    /// Ground acceleration, `x` = base, `y` = fully ramped (m/s^2)
    pub ground_accel: Vec2,
    /// Air acceleration, never ramped (m/s^2)
    pub air_accel: f32,
    /// Friction while grounded or wall-riding
    pub ground_friction: f32,
    /// Friction while airborne
    pub air_friction: f32,
    /// Friction while sliding
    pub slide_friction: f32,
    /// Horizontal velocity multiplier applied when a slide starts
    pub slide_strength: f32,
    /// Fraction of gravity applied as fall speed while wall-riding.
    ///
    /// This is a velocity, not an acceleration: with `0.5` and default
    /// gravity the body slides down the wall at a steady 4.905 m/s. Use a
    /// small value such as `0.02` for a near-stationary cling.
    pub wall_cling_strength: f32,
    /// Fraction of jump speed pushed along the wall normal on a wall jump
    pub wall_launch_strength: f32,
    /// Surface tag that allows wall-riding
    pub wall_ridable_tag: String,
    /// Extra distance below the feet that the ground snap will reach (m)
    pub snap_distance: f32,
    /// Component-wise scale applied to ambient gravity
    pub gravity_scale: Vec3,
    pub look: LookConfig,
    pub body: BodyConfig,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            jump_height: 1.5,
            ground_accel_ramp_duration: 2.0,
            ground_accel: Vec2::new(50.0, 75.0),
            air_accel: 50.0,
            ground_friction: 12.0,
            air_friction: 3.0,
            slide_friction: 1.0,
            slide_strength: 1.2,
            wall_cling_strength: 0.5,
            wall_launch_strength: 0.5,
            wall_ridable_tag: UNTAGGED.to_string(),
            snap_distance: 0.5,
            gravity_scale: Vec3::Y,
            look: LookConfig::default(),
            body: BodyConfig::default(),
        }
    }
}

impl MotorConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: MotorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded motor config from {}", path.display());
        Ok(config)
    }

    /// Serialize the config as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable by the motor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_positive("move_speed", self.move_speed)?;
        ensure_non_negative("jump_height", self.jump_height)?;
        ensure_non_negative("ground_accel_ramp_duration", self.ground_accel_ramp_duration)?;
        ensure_non_negative("ground_accel.x", self.ground_accel.x)?;
        ensure_non_negative("ground_accel.y", self.ground_accel.y)?;
        ensure_non_negative("air_accel", self.air_accel)?;
        ensure_non_negative("ground_friction", self.ground_friction)?;
        ensure_non_negative("air_friction", self.air_friction)?;
        ensure_non_negative("slide_friction", self.slide_friction)?;
        ensure_non_negative("slide_strength", self.slide_strength)?;
        ensure_finite("wall_cling_strength", self.wall_cling_strength)?;
        ensure_finite("wall_launch_strength", self.wall_launch_strength)?;
        ensure_non_negative("snap_distance", self.snap_distance)?;
        if !self.gravity_scale.is_finite() {
            return Err(ConfigError::invalid("gravity_scale", "must be finite"));
        }

        ensure_positive("body.radius", self.body.radius)?;
        if !self.body.height.is_finite() || self.body.height < self.body.radius * 2.0 {
            return Err(ConfigError::invalid(
                "body.height",
                format!(
                    "{} is shorter than the collider diameter {}",
                    self.body.height,
                    self.body.radius * 2.0
                ),
            ));
        }
        if !self.body.center.is_finite() {
            return Err(ConfigError::invalid("body.center", "must be finite"));
        }
        ensure_finite("body.head_height", self.body.head_height)?;

        self.look.validate()
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not finite")))
    }
}

pub(crate) fn ensure_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} is negative")));
    }
    Ok(())
}

pub(crate) fn ensure_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} must be greater than zero")));
    }
    Ok(())
}
