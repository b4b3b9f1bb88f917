//! Poll-driven one-shot deadlines.
//!
//! ## Usage
//!
//! Arm a deadline from an event handler and fire it from the host's frame
//! tick.

use std::time::Duration;

#[cfg(not(target_family = "wasm"))]
pub use std::time::Instant;
#[cfg(target_family = "wasm")]
pub use web_time::Instant;

/// A cancelable deadline checked against a caller supplied clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Creates a disarmed deadline.
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Arms the deadline `delay` after `now`, replacing any earlier one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.at = Some(now + delay);
    }

    /// Disarms the deadline.
    pub fn cancel(&mut self) {
        self.at = None;
    }

    /// Returns whether the deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.at.is_some()
    }

    /// Returns the instant the deadline fires at.
    pub fn at(&self) -> Option<Instant> {
        self.at
    }

    /// Disarms and returns `true` once `now` has reached the deadline.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.at {
            Some(at) if now >= at => {
                self.at = None;
                true
            }
            _ => false,
        }
    }
}

/// Returns the earlier of two optional instants.
pub(crate) fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
