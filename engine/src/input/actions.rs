//! Input Actions
//!
//! The four actions the motor listens to and the phases they go through.
//! `Move` and `Look` are polled every tick through [`InputSource`]; `Jump`
//! and `Slide` are buttons whose phase changes are queued as
//! [`ActionEvent`]s for the host to route into the motor.
//!
//! # Example
//!
//! ```rust,ignore
//! use hr_runner_engine::input::{ActionMap, KeyCode};
//!
//! let mut actions = ActionMap::new();
//! actions.handle_key(KeyCode::Space, true);
//! for event in actions.drain_events() {
//!     motor.handle_action(event.action, event.phase);
//! }
//! motor.tick(&mut world, &actions, dt);
//! actions.end_tick();
//! ```

use glam::Vec2;

use super::{ButtonAction, KeyBindings, KeyCode, KeyboardState};

/// Logical actions the motor consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// 2D movement intent
    Move,
    /// Pointer delta
    Look,
    Jump,
    Slide,
}

/// Lifecycle of a button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionPhase {
    /// The control was actuated
    Started,
    /// The interaction completed (for a plain press: same tick as `Started`)
    Performed,
    /// The control was released
    Canceled,
}

/// A phase change of a button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub action: InputAction,
    pub phase: ActionPhase,
}

/// Per-tick axis values read by the motor.
pub trait InputSource {
    /// Movement intent, `x` = strafe right, `y` = forward, length at most 1
    fn move_axis(&self) -> Vec2;

    /// Raw pointer delta since the last tick, `x` = right, `y` = up
    fn look_axis(&self) -> Vec2;
}

/// Fixed axis values, for scripted input and tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisInput {
    pub move_axis: Vec2,
    pub look_axis: Vec2,
}

impl AxisInput {
    pub fn new(move_axis: Vec2, look_axis: Vec2) -> Self {
        Self {
            move_axis,
            look_axis,
        }
    }

    /// Movement only, no look.
    pub fn moving(move_axis: Vec2) -> Self {
        Self::new(move_axis, Vec2::ZERO)
    }
}

impl InputSource for AxisInput {
    fn move_axis(&self) -> Vec2 {
        self.move_axis
    }

    fn look_axis(&self) -> Vec2 {
        self.look_axis
    }
}

/// Turns key and pointer events into actions.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    bindings: KeyBindings,
    keyboard: KeyboardState,
    /// Pointer delta accumulated since the last `end_tick`
    look: Vec2,
    events: Vec<ActionEvent>,
}

impl ActionMap {
    /// Create an action map with the default key bindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Handle a key press or release.
    ///
    /// Pressing a button key queues `Started` then `Performed`; releasing it
    /// queues `Canceled`. Repeats queue nothing.
    ///
    /// # Returns
    /// `true` if the key is bound
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let Some(button) = self.bindings.get_action(key) else {
            return false;
        };
        if !self.keyboard.handle_key(key, pressed) {
            return true;
        }

        let action = button.input_action();
        if action == InputAction::Move {
            return true;
        }

        if pressed {
            self.push(action, ActionPhase::Started);
            self.push(action, ActionPhase::Performed);
        } else {
            self.push(action, ActionPhase::Canceled);
        }
        true
    }

    /// Accumulate pointer movement for this tick.
    pub fn add_look_delta(&mut self, delta: Vec2) {
        self.look += delta;
    }

    /// Take the queued button events in the order they happened.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ActionEvent> + '_ {
        self.events.drain(..)
    }

    /// Forget this tick's pointer movement.
    pub fn end_tick(&mut self) {
        self.look = Vec2::ZERO;
    }

    /// Release every key and drop queued events.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.look = Vec2::ZERO;
        self.events.clear();
    }

    fn push(&mut self, action: InputAction, phase: ActionPhase) {
        self.events.push(ActionEvent { action, phase });
    }

    fn held(&self, button: ButtonAction) -> f32 {
        if self.bindings.is_action_pressed(button, self.keyboard.pressed_keys()) {
            1.0
        } else {
            0.0
        }
    }
}

impl InputSource for ActionMap {
    fn move_axis(&self) -> Vec2 {
        Vec2::new(
            self.held(ButtonAction::MoveRight) - self.held(ButtonAction::MoveLeft),
            self.held(ButtonAction::MoveForward) - self.held(ButtonAction::MoveBack),
        )
        .normalize_or_zero()
    }

    fn look_axis(&self) -> Vec2 {
        self.look
    }
}
