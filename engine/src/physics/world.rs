//! Box World
//!
//! A minimal static world of tagged axis-aligned boxes implementing
//! [`CharacterPhysics`]. The collider is treated as its bounding box and
//! moved one axis at a time (vertical first), clamping against any box it
//! would penetrate. Good enough to drive the motor in the sandbox and tests;
//! not a general physics engine.

use super::types::Vec3;

use super::collision::{
    CharacterPhysics, ColliderShape, Contact, DEFAULT_GRAVITY, MoveOutcome, RayHit,
    aabb_surface_normal, ray_aabb_intersect,
};
use crate::config::motor_config::UNTAGGED;

/// Penetration depth below which two boxes are treated as merely touching.
const CONTACT_EPSILON: f32 = 1e-4;

/// A static, tagged axis-aligned box.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidBox {
    pub min: Vec3,
    pub max: Vec3,
    pub tag: String,
}

impl SolidBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self::tagged(min, max, UNTAGGED)
    }

    pub fn tagged(min: Vec3, max: Vec3, tag: impl Into<String>) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
            tag: tag.into(),
        }
    }

    /// Whether a box centered at `center` with `half_extents` penetrates this one.
    fn penetrates(&self, center: Vec3, half_extents: Vec3) -> bool {
        let lo = center - half_extents;
        let hi = center + half_extents;
        let depth = hi.min(self.max) - lo.max(self.min);
        depth.min_element() > CONTACT_EPSILON
    }
}

/// Static world of boxes.
#[derive(Debug, Clone)]
pub struct BoxWorld {
    boxes: Vec<SolidBox>,
    gravity: Vec3,
}

impl Default for BoxWorld {
    fn default() -> Self {
        Self {
            boxes: Vec::new(),
            gravity: DEFAULT_GRAVITY,
        }
    }
}

impl BoxWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world with a custom ambient gravity.
    pub fn with_gravity(gravity: Vec3) -> Self {
        Self {
            gravity,
            ..Default::default()
        }
    }

    pub fn add(&mut self, solid: SolidBox) {
        self.boxes.push(solid);
    }

    /// Add a flat floor slab whose top surface sits at `top_y`.
    pub fn add_floor(&mut self, top_y: f32, half_size: f32) {
        self.add(SolidBox::new(
            Vec3::new(-half_size, top_y - 1.0, -half_size),
            Vec3::new(half_size, top_y, half_size),
        ));
    }

    pub fn boxes(&self) -> &[SolidBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Sweep the collider along a single axis, clamping at the first blocking box.
    fn sweep_axis(
        &self,
        center: &mut Vec3,
        half_extents: Vec3,
        axis: usize,
        delta: f32,
        outcome: &mut MoveOutcome,
    ) {
        if delta == 0.0 {
            return;
        }

        let mut target = *center;
        target[axis] += delta;

        for solid in &self.boxes {
            if !solid.penetrates(target, half_extents) {
                continue;
            }

            let mut normal = Vec3::ZERO;
            if delta > 0.0 {
                target[axis] = solid.min[axis] - half_extents[axis];
                normal[axis] = -1.0;
            } else {
                target[axis] = solid.max[axis] + half_extents[axis];
                normal[axis] = 1.0;
            }

            match (axis, delta > 0.0) {
                (1, false) => outcome.flags.below = true,
                (1, true) => outcome.flags.above = true,
                _ => outcome.flags.sides = true,
            }

            let point = target - normal * half_extents;
            outcome.contacts.push(Contact {
                point,
                normal,
                tag: solid.tag.clone(),
            });
        }

        *center = target;
    }
}

impl CharacterPhysics for BoxWorld {
    fn move_character(
        &mut self,
        position: Vec3,
        collider: &ColliderShape,
        displacement: Vec3,
    ) -> MoveOutcome {
        let half_extents = collider.half_extents();
        let start = collider.world_center(position);
        let mut center = start;
        let mut outcome = MoveOutcome::default();

        for axis in [1, 0, 2] {
            self.sweep_axis(&mut center, half_extents, axis, displacement[axis], &mut outcome);
        }

        outcome.displacement = center - start;
        outcome
    }

    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;

        for solid in &self.boxes {
            let Some(t) = ray_aabb_intersect(origin, direction, solid.min, solid.max) else {
                continue;
            };
            let best = closest.map_or(max_distance, |hit| hit.distance);
            if t >= 0.0 && t <= best {
                let point = origin + direction * t;
                closest = Some(RayHit {
                    point,
                    normal: aabb_surface_normal(point, solid.min, solid.max),
                    distance: t,
                });
            }
        }

        closest
    }

    fn gravity(&self) -> Vec3 {
        self.gravity
    }
}
