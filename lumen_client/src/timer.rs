/// Polled wall-clock gate.
///
/// A `Timer` never blocks. Each call checks the time elapsed since the
/// last accepted tick and accepts a new one once the interval has passed,
/// which decouples a sampling rate from the frame rate.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Timer {
    last: Instant,
}

impl Timer {
    /// Create a timer whose first window starts now
    pub fn new() -> Self {
        Self { last: Instant::now() }
    }

    /// Create a timer whose first window starts at `start`
    pub fn started_at(start: Instant) -> Self {
        Self { last: start }
    }

    /// Whether `interval` has elapsed since the last accepted tick.
    ///
    /// Accepting a tick restarts the window.
    pub fn is_time(&mut self, interval: Duration) -> bool {
        self.is_time_at(Instant::now(), interval)
    }

    /// Same as `is_time` with an explicit clock reading
    pub fn is_time_at(&mut self, now: Instant, interval: Duration) -> bool {
        if now.saturating_duration_since(self.last) >= interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time elapsed since the last accepted tick
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last)
    }

    /// Restart the window at `now`
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
