//! Motion Integrator
//!
//! Pure per-step functions the motor runs each tick, in order:
//! jump, gravity, friction, acceleration. None of them touch the world; the
//! motor feeds the result to the collision-aware move afterwards.
//!
//! # Physics Model
//!
//! - Jump speed reaches exactly `jump_height` under the effective gravity
//! - Friction scales horizontal speed by `max(1 - friction * dt, 0)`
//! - Acceleration never pushes the speed along the wish direction above the cap,
//!   but never brakes a body that is already faster than it either

use glam::{Quat, Vec2, Vec3};

use super::state::LocomotionState;
use crate::config::MotorConfig;
use crate::physics::CollisionFlags;

/// Per-tick working set of the motor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionFrame {
    /// Current velocity (m/s)
    pub velocity: Vec3,
    /// Input wish vector, `x` = strafe, `y` = forward
    pub wish: Vec2,
    /// Collision flags of the last move
    pub flags: CollisionFlags,
    /// Normal of the last ride-able wall touched
    pub wall_normal: Vec3,
}

/// Result of [`apply_acceleration`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acceleration {
    pub velocity: Vec3,
    /// The speed cap limited the acceleration this step
    pub capped: bool,
}

/// Horizontal part of a vector.
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Launch speed that reaches `jump_height` under `gravity_y`.
///
/// Gravity pointing up (or none) gives zero instead of a NaN.
pub fn jump_speed(gravity_y: f32, jump_height: f32) -> f32 {
    (-2.0 * gravity_y * jump_height).max(0.0).sqrt()
}

/// Set the vertical launch speed, adding a push off the wall if given.
///
/// # Arguments
/// * `velocity` - Velocity before the jump
/// * `jump_speed` - Result of [`jump_speed`]
/// * `wall_kick` - Wall normal and launch strength when jumping off a wall
pub fn apply_jump(velocity: Vec3, jump_speed: f32, wall_kick: Option<(Vec3, f32)>) -> Vec3 {
    let mut velocity = Vec3::new(velocity.x, jump_speed, velocity.z);
    if let Some((normal, strength)) = wall_kick {
        velocity += normal * jump_speed * strength;
    }
    velocity
}

/// Apply gravity for one step.
///
/// With `wall_cling` set the vertical speed is replaced by
/// `gravity_y * wall_cling` instead of accumulating. The result does not
/// scale with `dt`: it is the steady fall speed along the wall.
pub fn apply_gravity(velocity: Vec3, gravity_y: f32, dt: f32, wall_cling: Option<f32>) -> Vec3 {
    let vy = match wall_cling {
        Some(cling) => gravity_y * cling,
        None => velocity.y + gravity_y * dt,
    };
    Vec3::new(velocity.x, vy, velocity.z)
}

/// Friction coefficient for a locomotion state.
pub fn friction_for(state: LocomotionState, config: &MotorConfig) -> f32 {
    match state {
        LocomotionState::InAir => config.air_friction,
        LocomotionState::Sliding => config.slide_friction,
        LocomotionState::Grounded | LocomotionState::WallRide => config.ground_friction,
    }
}

/// Reduce horizontal speed by `speed * friction * dt`, floored at zero.
pub fn apply_friction(velocity: Vec3, friction: f32, dt: f32) -> Vec3 {
    let flat = horizontal(velocity);
    let speed = flat.length();
    if speed <= f32::EPSILON {
        return velocity;
    }

    let new_speed = (speed - speed * friction * dt).max(0.0);
    let flat = flat * (new_speed / speed);
    Vec3::new(flat.x, velocity.y, flat.z)
}

/// Turn a 2D wish vector into a flat, normalized world direction.
///
/// `x` follows the body's right axis and `y` its forward axis.
pub fn wish_direction(wish: Vec2, rotation: Quat) -> Vec3 {
    let forward = horizontal(rotation * Vec3::Z);
    let right = horizontal(rotation * Vec3::X);
    (right * wish.x + forward * wish.y).normalize_or_zero()
}

/// Whether `wish_dir` lies strictly within 90 degrees of the body's facing.
pub fn is_aligned(wish_dir: Vec3, rotation: Quat) -> bool {
    horizontal(rotation * Vec3::Z).dot(wish_dir) > 0.0
}

/// Accelerate along `wish_dir` without exceeding `cap` along it.
///
/// # Arguments
/// * `velocity` - Current velocity
/// * `wish_dir` - Normalized flat wish direction (zero for no input)
/// * `accel` - Effective acceleration (m/s^2)
/// * `cap` - Speed cap along the wish direction (m/s)
/// * `dt` - Step duration in seconds
pub fn apply_acceleration(velocity: Vec3, wish_dir: Vec3, accel: f32, cap: f32, dt: f32) -> Acceleration {
    if wish_dir == Vec3::ZERO {
        return Acceleration {
            velocity,
            capped: false,
        };
    }

    let projection = horizontal(velocity).dot(wish_dir);
    let mut accel_mag = accel * dt;
    let capped = projection + accel_mag > cap;
    if capped {
        accel_mag = (cap - projection).max(0.0);
    }

    Acceleration {
        velocity: velocity + wish_dir * accel_mag,
        capped,
    }
}
