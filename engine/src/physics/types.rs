//! Math type re-exports from glam
//!
//! The motor, its collaborators and the configuration all share these types.

pub use glam::{Quat, Vec2, Vec3};
