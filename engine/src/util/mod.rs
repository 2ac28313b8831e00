//! Utility Module
//!
//! Small shared helpers that are not tied to a single gameplay system.

pub mod counter;

pub use counter::{Counter, Timer};
