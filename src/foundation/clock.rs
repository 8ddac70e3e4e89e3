//! Monotonic time sources for hosts that drive the controller.
//!
//! The engine never reads a clock itself: every time-dependent call takes a
//! [`MediaTime`]. These helpers give hosts a convenient source for it.

use std::{cell::Cell, time::Instant};

use crate::foundation::core::{Fps, MediaTime};

/// A source of monotonic timestamps.
pub trait Clock {
    /// Current time on this clock's timeline.
    fn now(&self) -> MediaTime;
}

/// Real-time clock measuring seconds since it was created.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at `MediaTime::ZERO`.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> MediaTime {
        MediaTime::from_secs(self.origin.elapsed().as_secs_f64())
    }
}

/// Clock that only moves when told to. Used for headless simulation and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Clock positioned at `start`.
    pub fn new(start: MediaTime) -> Self {
        Self {
            now: Cell::new(start.secs()),
        }
    }

    /// Move forward by `secs`. Negative steps are ignored to keep the clock monotonic.
    pub fn advance(&self, secs: f64) -> MediaTime {
        if secs > 0.0 {
            self.now.set(self.now.get() + secs);
        }
        self.now()
    }

    /// Move forward by one frame at `fps`.
    pub fn step_frame(&self, fps: Fps) -> MediaTime {
        self.advance(fps.frame_duration_secs())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> MediaTime {
        MediaTime::from_secs(self.now.get())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/clock.rs"]
mod tests;
