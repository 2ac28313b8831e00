//! Player Motor
//!
//! Kinematic first-person motor for the runner. Each fixed tick it consumes
//! the buffered button requests, integrates velocity (jump, gravity,
//! friction, acceleration), moves the body through a [`CharacterPhysics`]
//! world, snaps to ground it just stepped off, resolves the locomotion state
//! and finally updates the look.
//!
//! # Tick Order
//!
//! 1. Buffered requests (slide begin / slide end / jump, in arrival order)
//! 2. Jump
//! 3. Gravity (wall cling replaces it while wall-riding)
//! 4. Friction
//! 5. Acceleration from the move axis (not while sliding)
//! 6. Collision-aware move
//! 7. Ground snap
//! 8. State resolution (not while sliding)
//! 9. Look
//!
//! The velocity kept after a tick is the displacement the world actually
//! allowed divided by `dt`, so running into a wall zeroes that component.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hr_runner_engine::config::MotorConfig;
//! use hr_runner_engine::player::PlayerMotor;
//!
//! let mut motor = PlayerMotor::new(MotorConfig::default(), spawn, Quat::IDENTITY);
//!
//! // Button events, whenever they arrive:
//! motor.request_jump();
//!
//! // Each fixed tick:
//! motor.tick(&mut world, &input, dt);
//! for event in motor.drain_events() {
//!     audio.play(event);
//! }
//! ```

use std::collections::VecDeque;

use glam::{Quat, Vec3};

use super::integrator::{self, MotionFrame};
use super::look::LookController;
use super::ramp::AccelRamp;
use super::slide::{BodyShape, SlideGeometry, slide_kick};
use super::state::{LocomotionEvent, LocomotionState, SurfaceContact, TransitionEffect, transition};
use crate::config::MotorConfig;
use crate::input::{ActionPhase, InputAction, InputSource};
use crate::physics::{CharacterPhysics, ColliderShape, CollisionFlags, Contact};

/// Notifications for audio and presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorEvent {
    /// A jump was accepted
    JumpPressed,
    SlideBegan,
    SlideEnded,
}

/// Button requests buffered until the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotorCommand {
    Jump,
    SlideBegin,
    SlideEnd,
}

/// Shapes for debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugGizmo {
    /// World-space center of the collider box
    pub collider_center: Vec3,
    pub collider_half_extents: Vec3,
    /// Start of the ground snap ray (collider center)
    pub snap_ray_origin: Vec3,
    /// End of the ground snap ray at full reach
    pub snap_ray_end: Vec3,
}

/// Kinematic player motor.
#[derive(Debug, Clone)]
pub struct PlayerMotor {
    config: MotorConfig,

    /// Body position in world space
    position: Vec3,
    /// Body rotation (yaw)
    rotation: Quat,
    /// Head local rotation (pitch)
    head_rotation: Quat,
    /// Current collider and head placement
    body: BodyShape,

    state: LocomotionState,
    frame: MotionFrame,
    /// Horizontal speed after the last acceleration step
    current_speed: f32,
    /// Standing on ground at the end of the previous tick
    was_grounded: bool,
    /// A ride-able surface was touched since the last tick ended
    wall_latch: bool,
    /// Contact summary of the last tick, used when a slide ends
    last_contact: SurfaceContact,

    ramp: AccelRamp,
    slide: SlideGeometry,
    look: LookController,

    locked: bool,
    jump_requested: bool,
    commands: VecDeque<MotorCommand>,
    events: Vec<MotorEvent>,
}

impl PlayerMotor {
    /// Create a motor for a body spawned at `position` facing `rotation`.
    pub fn new(config: MotorConfig, position: Vec3, rotation: Quat) -> Self {
        let body = BodyShape::new(
            ColliderShape::new(config.body.height, config.body.radius, config.body.center),
            Vec3::Y * config.body.head_height,
        );
        let ramp = AccelRamp::new(config.ground_accel_ramp_duration, config.ground_accel);
        let mut look = LookController::new(&config.look);
        look.reset(rotation, Quat::IDENTITY);

        Self {
            config,
            position,
            rotation,
            head_rotation: Quat::IDENTITY,
            body,
            state: LocomotionState::default(),
            frame: MotionFrame::default(),
            current_speed: 0.0,
            was_grounded: false,
            wall_latch: false,
            last_contact: SurfaceContact::default(),
            ramp,
            slide: SlideGeometry::new(),
            look,
            locked: false,
            jump_requested: false,
            commands: VecDeque::new(),
            events: Vec::new(),
        }
    }

    // ========================================================================
    // Read-only state
    // ========================================================================

    pub fn current_state(&self) -> LocomotionState {
        self.state
    }

    /// Horizontal speed in m/s.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn head_rotation(&self) -> Quat {
        self.head_rotation
    }

    /// Head position relative to the body.
    pub fn head_position(&self) -> Vec3 {
        self.body.head_position
    }

    pub fn velocity(&self) -> Vec3 {
        self.frame.velocity
    }

    pub fn collider(&self) -> &ColliderShape {
        &self.body.collider
    }

    /// Collision flags of the last move.
    pub fn collision_flags(&self) -> CollisionFlags {
        self.frame.flags
    }

    pub fn was_grounded(&self) -> bool {
        self.was_grounded
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// Change the player's look sensitivity preference.
    pub fn set_sensitivity_modifier(&mut self, modifier: f32) {
        self.look.set_sensitivity_modifier(modifier);
    }

    // ========================================================================
    // Host control
    // ========================================================================

    pub fn lock_player(&self) -> bool {
        self.locked
    }

    /// Suppress input and movement. Locking drops any buffered requests.
    pub fn set_lock_player(&mut self, locked: bool) {
        if locked && !self.locked {
            self.commands.clear();
            self.jump_requested = false;
        }
        self.locked = locked;
    }

    /// Place the body at a stage start.
    ///
    /// Ends an active slide, moves the body, zeroes its velocity and makes
    /// the given rotations the new look offsets. The locomotion state is
    /// otherwise left as it was.
    pub fn reset_motor(&mut self, position: Vec3, rotation: Quat, head_rotation: Quat) {
        if self.state.is_sliding() {
            self.end_slide();
        }

        self.position = position;
        self.rotation = rotation;
        self.head_rotation = head_rotation;
        self.look.reset(rotation, head_rotation);

        self.frame.velocity = Vec3::ZERO;
        self.current_speed = 0.0;
        self.ramp.reset();
        self.commands.clear();
        self.jump_requested = false;

        log::debug!("Motor reset at {:?} in state {:?}", position, self.state);
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Buffer a jump for the next tick.
    ///
    /// # Returns
    /// `false` if the player is locked
    pub fn request_jump(&mut self) -> bool {
        self.push_command(MotorCommand::Jump)
    }

    /// Buffer a slide start for the next tick.
    pub fn request_slide_begin(&mut self) -> bool {
        self.push_command(MotorCommand::SlideBegin)
    }

    /// Buffer a slide end for the next tick.
    pub fn request_slide_end(&mut self) -> bool {
        self.push_command(MotorCommand::SlideEnd)
    }

    /// Route a button action phase to the matching request.
    ///
    /// Jump fires on `Performed`; slide begins on `Started` and ends on
    /// `Canceled`. Everything else is ignored.
    pub fn handle_action(&mut self, action: InputAction, phase: ActionPhase) -> bool {
        match (action, phase) {
            (InputAction::Jump, ActionPhase::Performed) => self.request_jump(),
            (InputAction::Slide, ActionPhase::Started) => self.request_slide_begin(),
            (InputAction::Slide, ActionPhase::Canceled) => self.request_slide_end(),
            _ => false,
        }
    }

    /// Report a contact produced outside of the motor's own moves.
    ///
    /// Ride-able contacts count toward the next state resolution.
    pub fn notify_contact(&mut self, contact: &Contact) {
        self.latch_contact(contact);
    }

    /// Take the events emitted since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = MotorEvent> + '_ {
        self.events.drain(..)
    }

    /// Collider box and snap ray for debug drawing.
    pub fn debug_gizmo(&self) -> DebugGizmo {
        let collider = &self.body.collider;
        let center = collider.world_center(self.position);
        DebugGizmo {
            collider_center: center,
            collider_half_extents: collider.half_extents(),
            snap_ray_origin: center,
            snap_ray_end: center + Vec3::NEG_Y * self.snap_reach(),
        }
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advance the motor by one fixed tick.
    ///
    /// # Arguments
    /// * `world` - Physics world the body moves through
    /// * `input` - Move and look axes for this tick
    /// * `dt` - Tick duration in seconds
    pub fn tick<W, I>(&mut self, world: &mut W, input: &I, dt: f32)
    where
        W: CharacterPhysics + ?Sized,
        I: InputSource + ?Sized,
    {
        if self.locked {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            log::warn!("Skipping motor tick with invalid dt {}", dt);
            return;
        }

        self.process_commands(world, dt);

        let gravity = world.gravity() * self.config.gravity_scale;

        // Jump
        if std::mem::take(&mut self.jump_requested) {
            self.apply_jump(gravity.y);
        }

        // Gravity
        let cling = (self.state == LocomotionState::WallRide).then_some(self.config.wall_cling_strength);
        self.frame.velocity = integrator::apply_gravity(self.frame.velocity, gravity.y, dt, cling);

        // Friction
        let friction = integrator::friction_for(self.state, &self.config);
        self.frame.velocity = integrator::apply_friction(self.frame.velocity, friction, dt);

        // Acceleration
        self.frame.wish = input.move_axis();
        if !self.state.is_sliding() {
            self.accelerate(dt);
        }
        self.current_speed = integrator::horizontal(self.frame.velocity).length();

        // Move
        let start = self.position;
        let mut flags = self.move_body(world, self.frame.velocity * dt);

        // Ground snap
        if !flags.below {
            if self.was_grounded && !self.state.is_sliding() {
                flags = self.ground_snap(world, flags);
            } else {
                self.was_grounded = false;
            }
        }

        // Resolve
        let contact = SurfaceContact {
            below: flags.below,
            side: flags.sides,
            wall_ridable: self.wall_latch,
        };
        if let Some(t) = transition(self.state, LocomotionEvent::Resolve(contact)) {
            self.set_state(t.next);
            if t.next == LocomotionState::Grounded {
                self.was_grounded = true;
            }
        }

        self.last_contact = contact;
        self.frame.flags = flags;
        self.wall_latch = false;
        self.frame.velocity = (self.position - start) / dt;

        // Look
        let rotations = self.look.update(input.look_axis());
        self.rotation = rotations.body;
        self.head_rotation = rotations.head;
    }

    fn push_command(&mut self, command: MotorCommand) -> bool {
        if self.locked {
            log::debug!("Rejected {:?} while locked", command);
            return false;
        }
        self.commands.push_back(command);
        true
    }

    fn process_commands<W>(&mut self, world: &mut W, dt: f32)
    where
        W: CharacterPhysics + ?Sized,
    {
        while let Some(command) = self.commands.pop_front() {
            match command {
                MotorCommand::SlideBegin => self.begin_slide(world, dt),
                MotorCommand::SlideEnd => {
                    if self.state.is_sliding() {
                        self.end_slide();
                    }
                }
                MotorCommand::Jump => {
                    if self.state.can_jump() {
                        self.jump_requested = true;
                    }
                }
            }
        }
    }

    fn apply_jump(&mut self, gravity_y: f32) {
        let Some(t) = transition(self.state, LocomotionEvent::Jump) else {
            log::debug!("Jump rejected in {:?}", self.state);
            return;
        };
        if t.has(TransitionEffect::ExitSlide) {
            self.slide.exit(&mut self.body);
            self.events.push(MotorEvent::SlideEnded);
        }

        let speed = integrator::jump_speed(gravity_y, self.config.jump_height);
        let kick = t
            .has(TransitionEffect::WallLaunch)
            .then_some((self.frame.wall_normal, self.config.wall_launch_strength));
        self.frame.velocity = integrator::apply_jump(self.frame.velocity, speed, kick);

        if t.has(TransitionEffect::ClearGrounded) {
            self.was_grounded = false;
        }
        self.set_state(t.next);
        self.events.push(MotorEvent::JumpPressed);
    }

    fn accelerate(&mut self, dt: f32) {
        let wish_dir = integrator::wish_direction(self.frame.wish, self.rotation);
        if wish_dir == Vec3::ZERO {
            self.ramp.reset();
            return;
        }

        let accel = match self.state {
            LocomotionState::InAir => self.config.air_accel,
            _ if integrator::is_aligned(wish_dir, self.rotation) => self.ramp.advance(dt),
            _ => {
                self.ramp.reset();
                self.ramp.base()
            }
        };

        let result = integrator::apply_acceleration(
            self.frame.velocity,
            wish_dir,
            accel,
            self.config.move_speed,
            dt,
        );
        if result.capped {
            self.ramp.reset();
        }
        self.frame.velocity = result.velocity;
    }

    /// Move the body, latch ride-able contacts and return the flags.
    fn move_body<W>(&mut self, world: &mut W, displacement: Vec3) -> CollisionFlags
    where
        W: CharacterPhysics + ?Sized,
    {
        let outcome = world.move_character(self.position, &self.body.collider, displacement);
        self.position += outcome.displacement;
        for contact in &outcome.contacts {
            self.latch_contact(contact);
        }
        outcome.flags
    }

    fn latch_contact(&mut self, contact: &Contact) {
        if contact.tag == self.config.wall_ridable_tag {
            self.wall_latch = true;
            self.frame.wall_normal = contact.normal;
        }
    }

    fn snap_reach(&self) -> f32 {
        self.body.collider.half_height() + self.config.snap_distance
    }

    fn ground_snap<W>(&mut self, world: &mut W, flags: CollisionFlags) -> CollisionFlags
    where
        W: CharacterPhysics + ?Sized,
    {
        let origin = self.body.collider.world_center(self.position);
        let Some(hit) = world.raycast(origin, Vec3::NEG_Y, self.snap_reach()) else {
            self.was_grounded = false;
            return flags;
        };

        let snap = hit.distance - self.body.collider.half_height();
        let mut flags = flags;
        if snap > 0.0 {
            flags = flags.union(self.move_body(world, Vec3::NEG_Y * snap));
        }
        flags.below = true;

        if let Some(t) = transition(self.state, LocomotionEvent::GroundSnap) {
            self.set_state(t.next);
        }
        flags
    }

    fn begin_slide<W>(&mut self, world: &mut W, dt: f32)
    where
        W: CharacterPhysics + ?Sized,
    {
        let Some(t) = transition(self.state, LocomotionEvent::SlideBegin) else {
            log::debug!("Slide rejected in {:?}", self.state);
            return;
        };
        if t.has(TransitionEffect::EnterSlide) {
            self.slide.enter(&mut self.body);
        }

        self.frame.velocity = slide_kick(self.frame.velocity, self.config.slide_strength);
        let start = self.position;
        self.frame.flags = self.move_body(world, self.frame.velocity * dt);
        self.frame.velocity = (self.position - start) / dt;

        self.set_state(t.next);
        self.events.push(MotorEvent::SlideBegan);
    }

    fn end_slide(&mut self) {
        let Some(t) = transition(self.state, LocomotionEvent::SlideEnd(self.last_contact)) else {
            return;
        };
        if t.has(TransitionEffect::ExitSlide) {
            self.slide.exit(&mut self.body);
        }

        self.set_state(t.next);
        if t.next == LocomotionState::Grounded {
            self.was_grounded = true;
        }
        self.events.push(MotorEvent::SlideEnded);
    }

    fn set_state(&mut self, next: LocomotionState) {
        if next != self.state {
            log::debug!("Locomotion {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}
