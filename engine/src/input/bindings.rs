//! Input Bindings Module
//!
//! Maps physical keys to the buttons the runner understands, allowing key
//! remapping without touching the motor.

use std::collections::{HashMap, HashSet};

use super::KeyCode;
use super::actions::InputAction;

/// Logical buttons that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Slide while held (default: Ctrl)
    Slide,
}

impl ButtonAction {
    /// The action this button feeds.
    pub fn input_action(&self) -> InputAction {
        match self {
            ButtonAction::MoveForward
            | ButtonAction::MoveBack
            | ButtonAction::MoveLeft
            | ButtonAction::MoveRight => InputAction::Move,
            ButtonAction::Jump => InputAction::Jump,
            ButtonAction::Slide => InputAction::Slide,
        }
    }
}

/// Maps physical keys to logical buttons, supporting customizable key bindings.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical button
    key_to_action: HashMap<KeyCode, ButtonAction>,
    /// Map from logical button to physical key (for reverse lookup and display)
    action_to_key: HashMap<ButtonAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W = MoveForward
    /// - S = MoveBack
    /// - A = MoveLeft
    /// - D = MoveRight
    /// - Space = Jump
    /// - Ctrl (Left) = Slide
    pub fn new() -> Self {
        let mut bindings = Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        };

        bindings.bind(KeyCode::W, ButtonAction::MoveForward);
        bindings.bind(KeyCode::S, ButtonAction::MoveBack);
        bindings.bind(KeyCode::A, ButtonAction::MoveLeft);
        bindings.bind(KeyCode::D, ButtonAction::MoveRight);
        bindings.bind(KeyCode::Space, ButtonAction::Jump);
        bindings.bind(KeyCode::ControlLeft, ButtonAction::Slide);

        bindings
    }

    /// Bind a physical key to a logical button.
    ///
    /// Any previous binding of either the key or the button is removed.
    pub fn bind(&mut self, key: KeyCode, action: ButtonAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Get the button bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<ButtonAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical button, if any.
    pub fn get_key(&self, action: ButtonAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Check if a button is held, given a set of pressed keys.
    pub fn is_action_pressed(&self, action: ButtonAction, pressed_keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| pressed_keys.contains(key))
    }
}
