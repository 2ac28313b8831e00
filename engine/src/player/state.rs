//! Locomotion State Machine
//!
//! The four locomotion states and the transition table that moves between
//! them. Every state change the motor makes goes through [`transition`]; the
//! returned [`TransitionEffect`]s tell the motor which side effects to run.
//!
//! # Transitions
//!
//! | From     | Event                | To                 | Effects                       |
//! |----------|----------------------|--------------------|-------------------------------|
//! | Grounded | Jump                 | InAir              | ClearGrounded                 |
//! | WallRide | Jump                 | InAir              | ClearGrounded, WallLaunch     |
//! | Sliding  | Jump                 | InAir              | ExitSlide, ClearGrounded      |
//! | Grounded | SlideBegin           | Sliding            | EnterSlide                    |
//! | Sliding  | SlideEnd(contact)    | resolved(contact)  | ExitSlide                     |
//! | !Sliding | Resolve(contact)     | resolved(contact)  |                               |
//! | !Sliding | GroundSnap           | Grounded           |                               |
//!
//! Every other pair is rejected. A jump out of a slide always launches, even
//! when the body has already left the ground: only InAir refuses a jump.

/// Discrete locomotion state of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocomotionState {
    /// Standing on something
    #[default]
    Grounded,
    /// Falling or jumping
    InAir,
    /// Clinging to a ride-able wall
    WallRide,
    /// Low-profile slide with reduced friction
    Sliding,
}

impl LocomotionState {
    /// Whether a jump can start from this state (possibly after a slide exit).
    pub fn can_jump(&self) -> bool {
        !matches!(self, LocomotionState::InAir)
    }

    pub fn is_sliding(&self) -> bool {
        matches!(self, LocomotionState::Sliding)
    }
}

/// Collision summary used to resolve the state after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceContact {
    /// Blocked while moving down
    pub below: bool,
    /// Blocked horizontally
    pub side: bool,
    /// A ride-able surface was touched this tick
    pub wall_ridable: bool,
}

impl SurfaceContact {
    /// State implied by this contact: below wins, then a ride-able side hit.
    pub fn resolve(&self) -> LocomotionState {
        if self.below {
            LocomotionState::Grounded
        } else if self.wall_ridable && self.side {
            LocomotionState::WallRide
        } else {
            LocomotionState::InAir
        }
    }
}

/// Inputs to the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionEvent {
    Jump,
    SlideBegin,
    SlideEnd(SurfaceContact),
    /// Post-move resolution from collision flags
    Resolve(SurfaceContact),
    /// The ground snap found ground below
    GroundSnap,
}

/// Side effects the motor runs for an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEffect {
    /// Shrink the collider, lower the head, kick horizontal velocity
    EnterSlide,
    /// Restore the geometry saved on enter
    ExitSlide,
    /// Push off the wall along its normal
    WallLaunch,
    /// Forget that the body was grounded last tick
    ClearGrounded,
}

/// An accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: LocomotionState,
    pub effects: &'static [TransitionEffect],
}

impl Transition {
    const fn to(next: LocomotionState) -> Self {
        Self { next, effects: &[] }
    }

    pub fn has(&self, effect: TransitionEffect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Look up `(state, event)` in the transition table.
///
/// # Returns
/// The next state and its effects, or `None` if the event is rejected in
/// `state`.
pub fn transition(state: LocomotionState, event: LocomotionEvent) -> Option<Transition> {
    use LocomotionEvent as E;
    use LocomotionState as S;
    use TransitionEffect as Fx;

    match (state, event) {
        (S::Grounded, E::Jump) => Some(Transition {
            next: S::InAir,
            effects: &[Fx::ClearGrounded],
        }),
        (S::WallRide, E::Jump) => Some(Transition {
            next: S::InAir,
            effects: &[Fx::ClearGrounded, Fx::WallLaunch],
        }),
        (S::Sliding, E::Jump) => Some(Transition {
            next: S::InAir,
            effects: &[Fx::ExitSlide, Fx::ClearGrounded],
        }),
        (S::InAir, E::Jump) => None,

        (S::Grounded, E::SlideBegin) => Some(Transition {
            next: S::Sliding,
            effects: &[Fx::EnterSlide],
        }),
        (_, E::SlideBegin) => None,

        (S::Sliding, E::SlideEnd(contact)) => Some(Transition {
            next: contact.resolve(),
            effects: &[Fx::ExitSlide],
        }),
        (_, E::SlideEnd(_)) => None,

        (S::Sliding, E::Resolve(_) | E::GroundSnap) => None,
        (_, E::Resolve(contact)) => Some(Transition::to(contact.resolve())),
        (_, E::GroundSnap) => Some(Transition::to(S::Grounded)),
    }
}
