//! Keyboard Input Module
//!
//! Tracks which keys are held. Decoupled from any windowing system; the host
//! translates its native key events into [`KeyCode`]s.

use std::collections::HashSet;

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ControlLeft,
    ControlRight,
    C,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Set of currently held keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the key changed state (an edge), `false` for
    /// repeats and releases of keys that were not held.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if pressed {
            self.pressed.insert(key)
        } else {
            self.pressed.remove(&key)
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn pressed_keys(&self) -> &HashSet<KeyCode> {
        &self.pressed
    }

    /// Release every key.
    pub fn reset(&mut self) {
        self.pressed.clear();
    }
}
