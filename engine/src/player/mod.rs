//! Player Module
//!
//! First-person movement for the runner.
//!
//! # Components
//!
//! - [`PlayerMotor`] - Kinematic motor running the per-tick movement pipeline
//!   - Jump, gravity and wall cling, friction, ramped acceleration
//!   - Ground snapping over small steps and slopes
//!   - Slide and wall-ride mechanics with buffered button requests
//! - [`LocomotionState`] - Grounded / InAir / WallRide / Sliding, with an explicit transition table
//! - [`LookController`] - Smoothed mouse look with clamped pitch
//! - [`AccelRamp`] - Time-based ground acceleration ramp
//! - [`SlideGeometry`] - Symmetric collider squash for slides

pub mod integrator;
pub mod look;
pub mod motor;
pub mod ramp;
pub mod slide;
pub mod state;

pub use integrator::MotionFrame;
pub use look::{LookController, LookRotations};
pub use motor::{DebugGizmo, MotorEvent, PlayerMotor};
pub use ramp::AccelRamp;
pub use slide::{BodyShape, SlideGeometry};
pub use state::{
    LocomotionEvent, LocomotionState, SurfaceContact, Transition, TransitionEffect, transition,
};
