//! Easing curves and elapsed-time accumulators
//!
//! Nothing here blocks. Every wait is a duration threshold checked once per
//! tick.

/// Cubic ease-in. Not clamped, so a negative input stays negative.
#[inline]
#[must_use]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

/// Vertical scale of a tile mid-flip: 1 at rest, 0 edge-on at the midpoint.
#[inline]
#[must_use]
pub fn flip_scale(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    (2.0 * t - 1.0).powi(2)
}

/// Time spent entering letters since the last valid submission.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RoundTimer {
    elapsed: f32,
    warned: bool,
}

impl RoundTimer {
    /// Advance the timer. Returns true on the tick that crosses `warn_after`.
    pub fn tick(&mut self, dt: f32, warn_after: f32) -> bool {
        self.elapsed += dt;
        if !self.warned && self.elapsed >= warn_after {
            self.warned = true;
            return true;
        }
        false
    }

    /// Back to zero. Returns true if a warning was active.
    pub fn reset(&mut self) -> bool {
        self.elapsed = 0.0;
        std::mem::take(&mut self.warned)
    }

    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        self.warned
    }
}
