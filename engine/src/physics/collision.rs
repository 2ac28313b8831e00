//! Collision Interfaces
//!
//! The narrow surface the player motor needs from a physics world:
//! a collision-aware kinematic move, a raycast, and the ambient gravity.
//! Contacts produced by a move are returned with it instead of being
//! reported through a callback, so the motor can consume them in the same
//! tick.
//!
//! # Ray-AABB Intersection
//!
//! Static geometry in [`super::world::BoxWorld`] is made of axis-aligned
//! boxes, queried with the slab method: entry and exit times are computed
//! per axis and the ray hits when the latest entry precedes the earliest exit.

use super::types::Vec3;

/// Ambient gravity used when a world does not override it (m/s^2).
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// Which sides of the collider were blocked during the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    /// Blocked while moving down (standing on something)
    pub below: bool,
    /// Blocked horizontally
    pub sides: bool,
    /// Blocked while moving up
    pub above: bool,
}

impl CollisionFlags {
    pub const NONE: Self = Self {
        below: false,
        sides: false,
        above: false,
    };

    pub fn any(&self) -> bool {
        self.below || self.sides || self.above
    }

    /// Combine the flags of two consecutive moves.
    pub fn union(self, other: Self) -> Self {
        Self {
            below: self.below || other.below,
            sides: self.sides || other.sides,
            above: self.above || other.above,
        }
    }
}

/// A single surface touched during a move.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// World-space point of contact
    pub point: Vec3,
    /// Surface normal pointing away from the surface (normalized)
    pub normal: Vec3,
    /// Tag of the surface that was hit
    pub tag: String,
}

/// Result of a collision-aware move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    /// Displacement actually applied after resolving collisions
    pub displacement: Vec3,
    pub flags: CollisionFlags,
    /// Every surface touched, in the order they were hit
    pub contacts: Vec<Contact>,
}

/// Closest hit of a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Vec3,
    pub normal: Vec3,
    /// Distance from the ray origin to `point`
    pub distance: f32,
}

/// Upright capsule collider, approximated as a box by simple worlds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderShape {
    /// Total height in meters
    pub height: f32,
    /// Radius in meters
    pub radius: f32,
    /// Offset of the collider center from the body position
    pub center: Vec3,
}

impl ColliderShape {
    pub fn new(height: f32, radius: f32, center: Vec3) -> Self {
        Self {
            height,
            radius,
            center,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    /// Collider center in world space for a body at `position`.
    pub fn world_center(&self, position: Vec3) -> Vec3 {
        position + self.center
    }

    /// Half extents of the collider's bounding box.
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.radius, self.half_height(), self.radius)
    }
}

/// Physics collaborator consumed by the player motor.
pub trait CharacterPhysics {
    /// Move a body at `position` by `displacement`, stopping at geometry.
    fn move_character(
        &mut self,
        position: Vec3,
        collider: &ColliderShape,
        displacement: Vec3,
    ) -> MoveOutcome;

    /// Cast a ray and return the closest hit within `max_distance`.
    ///
    /// `direction` must be normalized.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;

    /// Ambient gravity acceleration.
    fn gravity(&self) -> Vec3 {
        DEFAULT_GRAVITY
    }
}

/// Slab-method ray/AABB test.
///
/// Returns the distance along `ray_dir` to the first intersection, or the
/// exit distance when the origin is inside the box. `None` when the box is
/// missed or lies entirely behind the origin.
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Axis-parallel rays get a huge finite inverse so 0 * inv stays 0
    let inverse = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * d.signum()
        }
    };
    let inv_dir = Vec3::new(inverse(ray_dir.x), inverse(ray_dir.y), inverse(ray_dir.z));

    let t_low = (aabb_min - ray_origin) * inv_dir;
    let t_high = (aabb_max - ray_origin) * inv_dir;

    let t_enter = t_low.min(t_high).max_element();
    let t_exit = t_low.max(t_high).min_element();

    if t_exit < t_enter || t_exit < 0.0 {
        return None;
    }
    if t_enter >= 0.0 {
        Some(t_enter)
    } else {
        Some(t_exit)
    }
}

/// Outward normal of the AABB face closest to `point`.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = (aabb_max - aabb_min) * 0.5;
    let local = (point - center) / half_extents;
    let magnitude = local.abs();

    if magnitude.x >= magnitude.y && magnitude.x >= magnitude.z {
        Vec3::new(local.x.signum(), 0.0, 0.0)
    } else if magnitude.y >= magnitude.z {
        Vec3::new(0.0, local.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, local.z.signum())
    }
}
