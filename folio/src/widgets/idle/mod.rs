mod event;
pub(crate) mod model;
mod reducer;
mod state;

pub(crate) use event::{IdleEffect, IdleEvent, IdleIntent};
use iced::Task;
pub(crate) use model::IdleViewModel;
pub(crate) use reducer::IdleCtx;
use state::IdleState;

/// Idle detector: raises a flag after the pointer stayed still for the
/// inactivity threshold.
pub(crate) struct IdleWidget {
    state: IdleState,
}

impl IdleWidget {
    pub(crate) fn new() -> Self {
        Self {
            state: IdleState::default(),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: IdleIntent,
        ctx: &IdleCtx,
    ) -> Task<IdleEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    pub(crate) fn vm(&self) -> IdleViewModel {
        IdleViewModel {
            idle: self.state.is_idle(),
        }
    }

    /// Return whether the inactivity countdown needs evaluating.
    pub(crate) fn needs_ticks(&self) -> bool {
        !self.state.is_disposed() && self.state.has_countdown()
    }

    /// Cancel the countdown; later pointer moves are ignored.
    pub(crate) fn dispose(&mut self) {
        self.state.dispose();
    }
}
