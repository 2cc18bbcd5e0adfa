//! Suppressing repeated triggers within a time window.
//!
//! Used by hosts for taps that navigate (opening a workflow instance twice
//! from a double tap). Time is passed in explicitly.

use std::time::{Duration, Instant};

/// Window used for navigation taps.
pub const NAVIGATION_WINDOW: Duration = Duration::from_millis(500);

/// Leading-edge debounce: the first trigger fires, later triggers within
/// `window` of the last fired one are suppressed.
#[derive(Debug, Clone)]
pub struct Debounce {
    window: Duration,
    last_fired: Option<Instant>,
}

impl Debounce {
    /// Create a debounce with `window`.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Get the suppression window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Whether a trigger at `now` should fire. Firing restarts the window.
    pub fn should_fire(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_fired
            && now.saturating_duration_since(last) < self.window
        {
            log::trace!("Debounced trigger");
            return false;
        }
        self.last_fired = Some(now);
        true
    }

    /// Forget the last fired trigger.
    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(NAVIGATION_WINDOW)
    }
}
