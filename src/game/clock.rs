//! Per-side game clocks.
//!
//! The clock never reads wall time itself: the caller measures elapsed time
//! between frames and feeds it in through [`Clock::tick`].

use std::time::Duration;

use crate::board::Color;

/// Remaining thinking time for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    budget: Duration,
    remaining: [Duration; 2],
    paused: bool,
}

impl Clock {
    #[must_use]
    pub const fn new(budget: Duration) -> Self {
        Clock {
            budget,
            remaining: [budget, budget],
            paused: false,
        }
    }

    /// Charge `elapsed` to `color`. Does nothing while paused.
    pub fn tick(&mut self, color: Color, elapsed: Duration) {
        if self.paused {
            return;
        }
        let slot = &mut self.remaining[color.index()];
        *slot = slot.saturating_sub(elapsed);
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[color.index()]
    }

    /// True once a side has no time left.
    #[inline]
    #[must_use]
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining(color).is_zero()
    }

    #[inline]
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Refill both sides and unpause.
    pub fn reset(&mut self) {
        *self = Clock::new(self.budget);
    }

    /// Remaining time as `MM:SS`.
    #[must_use]
    pub fn format_remaining(&self, color: Color) -> String {
        let secs = self.remaining(color).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
