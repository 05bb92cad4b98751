mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::{NavigatorEffect, NavigatorEvent, NavigatorIntent};
use iced::Task;
pub(crate) use model::{NavigatorViewModel, Section};
pub(crate) use reducer::NavigatorCtx;
use state::NavigatorState;

/// Section navigator: which panel is shown and the timed switch between
/// panels. At most one switch is in flight at a time.
pub(crate) struct NavigatorWidget {
    state: NavigatorState,
}

impl NavigatorWidget {
    /// Construct the navigator showing the home panel.
    pub(crate) fn new(now: Instant) -> Self {
        Self {
            state: NavigatorState::new(now),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: NavigatorIntent,
        ctx: &NavigatorCtx,
    ) -> Task<NavigatorEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer.
    pub(crate) fn vm(&self) -> NavigatorViewModel {
        NavigatorViewModel {
            current: self.state.current(),
            transitioning: self.state.is_transitioning(),
            panel_opacity: self.state.panel_opacity(),
        }
    }

    /// Return the section currently rendered active.
    pub(crate) fn current(&self) -> Section {
        self.state.current()
    }

    /// Return whether a transition deadline is pending.
    pub(crate) fn has_armed_timers(&self) -> bool {
        self.state.has_armed_timers()
    }

    /// Return whether the tick subscription must stay alive.
    pub(crate) fn needs_ticks(&self) -> bool {
        !self.state.is_disposed()
            && (self.has_armed_timers() || self.state.is_animating())
    }

    /// Discard pending transition timers without firing them.
    pub(crate) fn dispose(&mut self) {
        self.state.dispose();
    }
}
