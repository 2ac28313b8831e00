//! Ground Acceleration Ramp
//!
//! While the player keeps pushing roughly the way they are facing, ground
//! acceleration blends from a base value toward a higher sustained value over
//! the ramp duration. Turning away, letting go of the stick, or hitting the
//! speed cap drops it back to the base value.

use glam::Vec2;

use crate::util::Timer;

/// Timer-backed acceleration ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccelRamp {
    timer: Timer,
    /// Acceleration with an empty ramp (m/s^2)
    base: f32,
    /// Acceleration with a full ramp (m/s^2)
    max: f32,
}

impl AccelRamp {
    /// Create an empty ramp.
    ///
    /// # Arguments
    /// * `duration` - Seconds of aligned input to reach `accel.y`
    /// * `accel` - `x` = base acceleration, `y` = fully ramped acceleration
    pub fn new(duration: f32, accel: Vec2) -> Self {
        Self {
            timer: Timer::new(duration),
            base: accel.x,
            max: accel.y,
        }
    }

    /// Fraction of the ramp completed, `0.0..=1.0`.
    ///
    /// A zero-length ramp is always complete.
    pub fn fraction(&self) -> f32 {
        self.timer.percent_complete()
    }

    /// Acceleration for the current ramp fraction.
    pub fn acceleration(&self) -> f32 {
        self.base + (self.max - self.base) * self.fraction()
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    /// Advance the ramp by `dt` and return the resulting acceleration.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.timer.tick(dt);
        self.acceleration()
    }

    /// Drop back to the base acceleration.
    pub fn reset(&mut self) {
        self.timer.reset();
    }
}
