//! Runner Motor Library
//!
//! Headless first-person movement core for a parkour runner: a kinematic
//! player motor with jump, slide and wall-ride mechanics, a smoothed look
//! controller, and the narrow interfaces it uses to talk to a physics world
//! and an input source.
//!
//! # Modules
//!
//! - [`player`] - The motor, its state machine, integrator and look controller
//! - [`physics`] - Physics collaborator trait, collision types and a box world
//! - [`input`] - Key bindings and the action map feeding the motor
//! - [`config`] - Serializable, validated tuning
//! - [`util`] - Counter and timer helpers
//!
//! # Example
//!
//! ```ignore
//! use hr_runner_engine::config::MotorConfig;
//! use hr_runner_engine::input::{ActionMap, KeyCode};
//! use hr_runner_engine::physics::{BoxWorld, SolidBox};
//! use hr_runner_engine::player::PlayerMotor;
//! use glam::{Quat, Vec3};
//!
//! let mut world = BoxWorld::new();
//! world.add_floor(0.0, 100.0);
//!
//! let mut motor = PlayerMotor::new(MotorConfig::default(), Vec3::Y, Quat::IDENTITY);
//! let mut actions = ActionMap::new();
//!
//! actions.handle_key(KeyCode::W, true);
//! for event in actions.drain_events() {
//!     motor.handle_action(event.action, event.phase);
//! }
//! motor.tick(&mut world, &actions, 1.0 / 50.0);
//! actions.end_tick();
//! ```

pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod util;

// Re-export the types most hosts need
pub use config::{ConfigError, MotorConfig};
pub use input::{ActionMap, InputSource, KeyCode};
pub use physics::{BoxWorld, CharacterPhysics};
pub use player::{LocomotionState, MotorEvent, PlayerMotor};
