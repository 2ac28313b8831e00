//! Slide Geometry
//!
//! Entering a slide squashes the collider to a sphere-sized box, lowers the
//! head by the lost height and drops the collider center by half of it so the
//! feet stay put. Exiting puts back exactly what was there on enter.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hr_runner_engine::player::{BodyShape, SlideGeometry};
//!
//! let mut slide = SlideGeometry::new();
//! slide.enter(&mut body);
//! // ... any number of ticks ...
//! slide.exit(&mut body);
//! ```

use glam::Vec3;

use crate::physics::ColliderShape;

/// Collider plus head placement of the body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyShape {
    pub collider: ColliderShape,
    /// Head (camera) position relative to the body position
    pub head_position: Vec3,
}

impl BodyShape {
    pub fn new(collider: ColliderShape, head_position: Vec3) -> Self {
        Self {
            collider,
            head_position,
        }
    }

    /// Height lost when squashed to a slide.
    pub fn slide_height_delta(&self) -> f32 {
        (self.collider.height - self.collider.radius * 2.0).max(0.0)
    }

    /// The same body squashed for a slide.
    pub fn squashed(&self) -> Self {
        let delta = self.slide_height_delta();
        let mut collider = self.collider;
        collider.height -= delta;
        collider.center.y -= delta * 0.5;

        Self {
            collider,
            head_position: self.head_position - Vec3::Y * delta,
        }
    }
}

/// Tracks the body shape saved when a slide starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideGeometry {
    saved: Option<BodyShape>,
}

impl SlideGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a slide shape is currently applied.
    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Squash `body` for a slide, remembering its current shape.
    ///
    /// # Returns
    /// `false` if a slide was already active (the body is left untouched)
    pub fn enter(&mut self, body: &mut BodyShape) -> bool {
        if self.saved.is_some() {
            return false;
        }
        self.saved = Some(*body);
        *body = body.squashed();
        true
    }

    /// Restore the shape saved by [`SlideGeometry::enter`].
    ///
    /// # Returns
    /// `false` if no slide was active
    pub fn exit(&mut self, body: &mut BodyShape) -> bool {
        match self.saved.take() {
            Some(saved) => {
                *body = saved;
                true
            }
            None => false,
        }
    }
}

/// Velocity at the start of a slide: horizontal scaled, vertical kept.
pub fn slide_kick(velocity: Vec3, strength: f32) -> Vec3 {
    Vec3::new(velocity.x * strength, velocity.y, velocity.z * strength)
}
