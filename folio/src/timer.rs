use std::time::{Duration, Instant};

/// Restartable one-shot deadline owned by a single widget.
///
/// A timer holds at most one pending deadline. Starting it again replaces
/// the previous deadline, firing or cancelling releases it. Deadlines are
/// evaluated against an explicit `now` supplied by the tick subscription.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Arm the timer to fire `after` the given instant.
    pub(crate) fn start(&mut self, from: Instant, after: Duration) {
        self.deadline = Some(from + after);
    }

    /// Release the pending deadline. Returns whether one was armed.
    pub(crate) fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[cfg(test)]
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Release and return the deadline when it has elapsed at `now`.
    pub(crate) fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(deadline)
            },
            _ => None,
        }
    }
}
