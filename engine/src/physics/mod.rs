//! Physics module for the runner motor
//!
//! The motor does not simulate rigid bodies. It talks to a physics world
//! through the narrow [`CharacterPhysics`] trait and this module supplies that
//! trait, the data it exchanges, and a small reference world.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Accelerations in m/s²
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec2, Vec3, Quat) re-exported from glam
//! - [`collision`] - Collaborator trait, collision flags, contacts, ray-AABB helpers
//! - [`world`] - `BoxWorld`, static tagged boxes implementing the collaborator trait

pub mod collision;
pub mod types;
pub mod world;

// Re-export commonly used types at the physics module level
pub use collision::{
    CharacterPhysics, ColliderShape, CollisionFlags, Contact, DEFAULT_GRAVITY, MoveOutcome,
    RayHit, aabb_surface_normal, ray_aabb_intersect,
};
pub use types::{Quat, Vec2, Vec3};
pub use world::{BoxWorld, SolidBox};
