use std::time::{Duration, Instant};

use super::model::{FADE_IN_MS, RELEASE_DELAY_MS, SWAP_DELAY_MS, Section};
use crate::timer::Timer;

/// Outcome of evaluating transition deadlines at a given instant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Advance {
    pub(super) swapped: Option<Section>,
    pub(super) released: bool,
}

/// Section selection and the two-phase transition in flight, if any.
#[derive(Debug)]
pub(super) struct NavigatorState {
    current: Section,
    pending: Option<Section>,
    transitioning: bool,
    swap_timer: Timer,
    release_timer: Timer,
    started_at: Option<Instant>,
    settled_at: Option<Instant>,
    clock: Instant,
    disposed: bool,
}

impl NavigatorState {
    pub(super) fn new(now: Instant) -> Self {
        Self {
            current: Section::Home,
            pending: None,
            transitioning: false,
            swap_timer: Timer::default(),
            release_timer: Timer::default(),
            started_at: None,
            settled_at: None,
            clock: now,
            disposed: false,
        }
    }

    pub(super) fn current(&self) -> Section {
        self.current
    }

    pub(super) fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub(super) fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(super) fn has_armed_timers(&self) -> bool {
        self.swap_timer.is_armed() || self.release_timer.is_armed()
    }

    /// Whether the panel still needs repaints to finish a fade.
    pub(super) fn is_animating(&self) -> bool {
        self.transitioning || self.settled_at.is_some()
    }

    /// Accept a switch to `target` unless it is current or a switch is
    /// already in flight.
    pub(super) fn request(&mut self, target: Section, now: Instant) -> bool {
        if self.disposed || self.transitioning || target == self.current {
            return false;
        }

        self.clock = now;
        self.transitioning = true;
        self.pending = Some(target);
        self.started_at = Some(now);
        self.settled_at = None;
        self.swap_timer
            .start(now, Duration::from_millis(SWAP_DELAY_MS));
        true
    }

    /// Fire every deadline that elapsed at `now`, swap before release.
    pub(super) fn advance(&mut self, now: Instant) -> Advance {
        let mut advance = Advance::default();
        if self.disposed {
            return advance;
        }

        self.clock = now;

        if let Some(swapped_at) = self.swap_timer.fire(now) {
            if let Some(target) = self.pending.take() {
                self.current = target;
                advance.swapped = Some(target);
            }
            self.release_timer
                .start(swapped_at, Duration::from_millis(RELEASE_DELAY_MS));
        }

        if let Some(released_at) = self.release_timer.fire(now) {
            self.transitioning = false;
            self.started_at = None;
            self.settled_at = Some(released_at);
            advance.released = true;
        }

        if let Some(settled_at) = self.settled_at {
            if now.saturating_duration_since(settled_at)
                >= Duration::from_millis(FADE_IN_MS)
            {
                self.settled_at = None;
            }
        }

        advance
    }

    /// Opacity of the active panel at the last observed instant.
    pub(super) fn panel_opacity(&self) -> f32 {
        if self.transitioning {
            return match self.started_at {
                Some(started_at) if self.swap_timer.is_armed() => {
                    1.0 - progress(started_at, self.clock, SWAP_DELAY_MS)
                },
                _ => 0.0,
            };
        }

        match self.settled_at {
            Some(settled_at) => progress(settled_at, self.clock, FADE_IN_MS),
            None => 1.0,
        }
    }

    /// Drop pending timers without firing them; later calls are no-ops.
    pub(super) fn dispose(&mut self) {
        let swap = self.swap_timer.cancel();
        let release = self.release_timer.cancel();
        if swap || release {
            log::debug!("navigator disposed with a transition in flight");
        }
        self.disposed = true;
    }
}

fn progress(from: Instant, now: Instant, span_ms: u64) -> f32 {
    let elapsed = now.saturating_duration_since(from).as_secs_f32();
    let span = Duration::from_millis(span_ms).as_secs_f32();
    (elapsed / span).clamp(0.0, 1.0)
}
