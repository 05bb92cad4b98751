use std::time::{Duration, Instant};

use super::model::IDLE_THRESHOLD_MS;
use crate::timer::Timer;

/// Pointer activity countdown and the derived idle flag.
#[derive(Debug, Default)]
pub(super) struct IdleState {
    idle: bool,
    countdown: Timer,
    disposed: bool,
}

impl IdleState {
    pub(super) fn is_idle(&self) -> bool {
        self.idle
    }

    pub(super) fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(super) fn has_countdown(&self) -> bool {
        self.countdown.is_armed()
    }

    /// Clear the idle flag and restart the countdown from `now`.
    /// Returns whether the flag flipped.
    pub(super) fn pointer_moved(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        let was_idle = self.idle;
        self.idle = false;
        self.countdown
            .start(now, Duration::from_millis(IDLE_THRESHOLD_MS));
        was_idle
    }

    /// Raise the idle flag once the countdown elapsed.
    /// Returns whether the flag flipped.
    pub(super) fn advance(&mut self, now: Instant) -> bool {
        if self.disposed || self.countdown.fire(now).is_none() {
            return false;
        }

        let was_idle = self.idle;
        self.idle = true;
        !was_idle
    }

    pub(super) fn dispose(&mut self) {
        self.countdown.cancel();
        self.disposed = true;
    }
}
