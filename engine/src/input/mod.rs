//! Input Module
//!
//! Platform-agnostic input for the runner: keys are mapped to logical
//! buttons, buttons and pointer movement are turned into the actions the
//! motor consumes (`Move`, `Look`, `Jump`, `Slide`).
//!
//! # Example
//!
//! ```rust,ignore
//! use hr_runner_engine::input::{ActionMap, InputSource, KeyCode};
//!
//! let mut actions = ActionMap::new();
//! actions.handle_key(KeyCode::W, true);
//! assert_eq!(actions.move_axis().y, 1.0);
//! ```

pub mod actions;
pub mod bindings;
pub mod keyboard;

// Re-export commonly used types at module level
pub use actions::{ActionEvent, ActionMap, ActionPhase, AxisInput, InputAction, InputSource};
pub use bindings::{ButtonAction, KeyBindings};
pub use keyboard::{KeyCode, KeyboardState};
