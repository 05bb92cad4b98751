use std::time::Instant;

use iced::Task;

use super::event::{NavigatorEffect, NavigatorEvent, NavigatorIntent};
use super::state::NavigatorState;

/// Read-only context for navigator reduction.
pub(crate) struct NavigatorCtx {
    /// Instant the event is reduced at.
    pub(crate) now: Instant,
}

/// Reduce a navigator intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut NavigatorState,
    event: NavigatorIntent,
    ctx: &NavigatorCtx,
) -> Task<NavigatorEvent> {
    match event {
        NavigatorIntent::Select(target) => {
            if state.request(target, ctx.now) {
                log::debug!(
                    "section transition {:?} -> {target:?} started",
                    state.current()
                );
            }
            Task::none()
        },
        NavigatorIntent::Tick => {
            let advance = state.advance(ctx.now);
            match advance.swapped {
                Some(section) => Task::done(NavigatorEvent::Effect(
                    NavigatorEffect::SectionSwapped(section),
                )),
                None => Task::none(),
            }
        },
    }
}
