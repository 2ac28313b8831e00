//! Look Controller
//!
//! Smoothed first-person mouse look. Raw pointer deltas are scaled by the
//! sensitivity, eased toward with a fixed blend per tick, and accumulated
//! into a yaw/pitch pair in degrees. Yaw turns the body, pitch tilts the head.
//!
//! Both rotations are applied on top of offsets captured at reset, so a
//! stage can spawn the player facing any direction.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hr_runner_engine::player::LookController;
//!
//! let mut look = LookController::new(&config.look);
//! look.reset(spawn_rotation, head_rotation);
//!
//! // Each tick:
//! let rotations = look.update(mouse_delta);
//! body.rotation = rotations.body;
//! head.rotation = rotations.head;
//! ```

use glam::{Quat, Vec2, Vec3};

use crate::config::LookConfig;

/// Body and head rotations produced by a look update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookRotations {
    /// World rotation of the body (yaw only, on top of the body offset)
    pub body: Quat,
    /// Local rotation of the head (pitch only, on top of the head offset)
    pub head: Quat,
}

/// Smoothed yaw/pitch look controller.
#[derive(Debug, Clone)]
pub struct LookController {
    config: LookConfig,
    /// Smoothed look velocity (degrees per tick, before `look_speed`)
    velocity: Vec2,
    /// Accumulated look angles in degrees, `x` = yaw, `y` = pitch
    position: Vec2,
    body_offset: Quat,
    head_offset: Quat,
}

impl LookController {
    pub fn new(config: &LookConfig) -> Self {
        Self {
            config: config.clone(),
            velocity: Vec2::ZERO,
            position: Vec2::ZERO,
            body_offset: Quat::IDENTITY,
            head_offset: Quat::IDENTITY,
        }
    }

    /// Accumulated yaw/pitch in degrees.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn body_offset(&self) -> Quat {
        self.body_offset
    }

    pub fn head_offset(&self) -> Quat {
        self.head_offset
    }

    pub fn sensitivity_modifier(&self) -> f32 {
        self.config.sensitivity_modifier
    }

    /// Change the player's sensitivity preference.
    pub fn set_sensitivity_modifier(&mut self, modifier: f32) {
        self.config.sensitivity_modifier = modifier;
    }

    /// Zero the accumulated look and capture new offsets.
    ///
    /// # Arguments
    /// * `body_rotation` - Body rotation that yaw is applied on top of
    /// * `head_rotation` - Head local rotation that pitch is applied on top of
    pub fn reset(&mut self, body_rotation: Quat, head_rotation: Quat) {
        self.velocity = Vec2::ZERO;
        self.position = Vec2::ZERO;
        self.body_offset = body_rotation;
        self.head_offset = head_rotation;
    }

    /// Rotations for the current accumulated look.
    pub fn rotations(&self) -> LookRotations {
        LookRotations {
            body: Quat::from_axis_angle(Vec3::Y, self.position.x.to_radians()) * self.body_offset,
            head: Quat::from_axis_angle(Vec3::NEG_X, self.position.y.to_radians()) * self.head_offset,
        }
    }

    /// Feed one tick of raw pointer movement.
    ///
    /// # Arguments
    /// * `raw` - Pointer delta, `x` = right, `y` = up
    ///
    /// # Returns
    /// The new body and head rotations
    pub fn update(&mut self, raw: Vec2) -> LookRotations {
        let destination = raw * self.config.mouse_sensitivity * self.config.sensitivity_modifier;
        let blend = (1.0 / self.config.smoothing).clamp(0.0, 1.0);
        self.velocity = self.velocity.lerp(destination, blend);

        self.position += self.velocity * self.config.look_speed;
        let extents = self.config.vertical_extents;
        self.position.y = self.position.y.clamp(extents.x, extents.y);

        self.rotations()
    }
}
