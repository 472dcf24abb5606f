//! Frame timing for the update loop.
//!
//! [`FrameClock`] is the single source of frame time for the host loop. It
//! hands the controller a monotonically increasing "now" in seconds (used for
//! the long-press deadline) and counts frames for diagnostics. A fixed delta
//! can be set so headless runs and tests advance deterministically.
//!
//! # Example
//!
//! ```ignore
//! let mut clock = FrameClock::new().with_fixed_delta(1.0 / 60.0);
//!
//! loop {
//!     let now = clock.tick();
//!     let strength = controller.update(now);
//!     simulation.step(strength);
//! }
//! ```

use std::time::Instant;

/// Per-frame time tracking.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    now_secs: f32,
    delta_secs: f32,
    frame: u64,
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Create a clock starting at zero seconds.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            now_secs: 0.0,
            delta_secs: 0.0,
            frame: 0,
            fixed_delta: None,
        }
    }

    /// Advance by a fixed timestep each frame instead of wall time.
    ///
    /// Used by headless runs and tests so that timing-dependent behavior
    /// (long-press deadlines, ramp curves) is reproducible.
    pub fn with_fixed_delta(mut self, delta: f32) -> Self {
        self.fixed_delta = Some(delta.max(0.0));
        self
    }

    /// Advance one frame. Returns the new "now" in seconds.
    pub fn tick(&mut self) -> f32 {
        self.frame += 1;
        match self.fixed_delta {
            Some(dt) => {
                self.delta_secs = dt;
                self.now_secs += dt;
            }
            None => {
                let wall = self.start.elapsed().as_secs_f32();
                self.delta_secs = wall - self.now_secs;
                self.now_secs = wall;
            }
        }
        self.now_secs
    }

    /// Current frame time in seconds.
    #[inline]
    pub fn now(&self) -> f32 {
        self.now_secs
    }

    /// Time advanced by the last [`tick`](Self::tick), in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked since creation.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
