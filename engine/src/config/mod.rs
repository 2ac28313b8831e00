//! Config Module
//!
//! Centralized tuning for the player motor, look controller and body shape.
//! Every struct has a `Default` matching the shipped tuning and can be loaded
//! from a JSON file with missing fields falling back to those defaults.

pub mod error;
pub mod look_config;
pub mod motor_config;

pub use error::ConfigError;
pub use look_config::LookConfig;
pub use motor_config::{BodyConfig, MotorConfig};
