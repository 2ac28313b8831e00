//! Counter and Timer
//!
//! A bounded accumulator (`Counter`) and its time-driven variant (`Timer`).
//! Both clamp their current value to `0..=max`; the timer advances by the
//! elapsed tick duration instead of by whole steps.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hr_runner_engine::util::Timer;
//!
//! let mut ramp = Timer::new(2.0);
//! ramp.tick(delta_time);
//! let blend = ramp.percent_complete();
//! ```

/// Bounded accumulator counting from zero up to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Counter {
    /// Upper bound of the counter
    max: f32,
    /// Current value, always within `0..=max` after a count
    cur: f32,
}

impl Counter {
    /// Create a counter at zero with the given maximum.
    pub fn new(max: f32) -> Self {
        Self { max, cur: 0.0 }
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn cur(&self) -> f32 {
        self.cur
    }

    /// Fraction of the way from zero to `max`.
    ///
    /// A counter with no length (`max <= 0`) is always complete.
    pub fn percent_complete(&self) -> f32 {
        if self.max <= 0.0 {
            return 1.0;
        }
        self.cur / self.max
    }

    /// How much is left before the counter reaches `max`.
    pub fn amount_remaining(&self) -> f32 {
        self.max - self.cur
    }

    /// Change the maximum, optionally resetting the current value.
    pub fn set_max(&mut self, max: f32, reset_cur: bool) {
        self.max = max;
        if reset_cur {
            self.cur = 0.0;
        }
    }

    /// Reset the counter back to zero.
    pub fn reset(&mut self) {
        self.cur = 0.0;
    }

    /// Reset the counter to an arbitrary starting point.
    pub fn reset_to(&mut self, start: f32) {
        self.cur = start;
    }

    /// Count up by one.
    pub fn increment(&mut self) {
        self.count(1.0);
    }

    /// Count up by `value`, clamped to `0..=max`.
    pub fn count(&mut self, value: f32) {
        self.cur = (self.cur + value).clamp(0.0, self.max.max(0.0));
    }

    /// Set the current value `increment` of the way from `min` to `max`.
    ///
    /// A `max` above the counter's own maximum is clamped with a warning.
    pub fn lerp_between(&mut self, min: f32, max: f32, increment: f32) {
        let max = self.clamp_lerp_max(max);
        self.cur = min + (max - min) * increment;
    }

    /// Set the current value `increment` of the way from `max` back down to `min`.
    ///
    /// A `max` above the counter's own maximum is clamped with a warning.
    pub fn inverse_lerp_between(&mut self, min: f32, max: f32, increment: f32) {
        let max = self.clamp_lerp_max(max);
        self.cur = max + (min - max) * increment;
    }

    /// Whether the counter has reached `max`, resetting it if asked to.
    pub fn is_complete(&mut self, reset_on_true: bool) -> bool {
        if self.cur >= self.max {
            if reset_on_true {
                self.reset();
            }
            return true;
        }
        false
    }

    /// Report completion, otherwise count up by `value`.
    pub fn check(&mut self, value: f32, reset_on_true: bool) -> bool {
        if self.is_complete(reset_on_true) {
            return true;
        }
        self.count(value);
        false
    }

    /// Count up by `value`, then report completion.
    pub fn pre_check(&mut self, value: f32, reset_on_true: bool) -> bool {
        self.count(value);
        self.is_complete(reset_on_true)
    }

    fn clamp_lerp_max(&self, max: f32) -> f32 {
        if max > self.max {
            log::warn!(
                "lerp max {} is greater than counter max {}, clamping to counter max",
                max,
                self.max
            );
            return self.max;
        }
        max
    }
}

/// Counter that advances by elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Timer {
    counter: Counter,
}

impl Timer {
    /// Create a timer with the given delay in seconds.
    pub fn new(delay: f32) -> Self {
        Self {
            counter: Counter::new(delay),
        }
    }

    /// Elapsed time in seconds.
    pub fn time(&self) -> f32 {
        self.counter.cur()
    }

    /// Length of the timer in seconds.
    pub fn delay(&self) -> f32 {
        self.counter.max()
    }

    pub fn time_remaining(&self) -> f32 {
        self.counter.amount_remaining()
    }

    pub fn percent_complete(&self) -> f32 {
        self.counter.percent_complete()
    }

    /// Advance the timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.counter.count(dt);
    }

    pub fn reset(&mut self) {
        self.counter.reset();
    }

    pub fn set_delay(&mut self, delay: f32, reset_time: bool) {
        self.counter.set_max(delay, reset_time);
    }

    pub fn is_complete(&mut self, reset_on_true: bool) -> bool {
        self.counter.is_complete(reset_on_true)
    }

    /// Report completion, otherwise advance by `dt`.
    pub fn check(&mut self, dt: f32, reset_on_true: bool) -> bool {
        self.counter.check(dt, reset_on_true)
    }
}
