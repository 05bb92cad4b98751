use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::navigator::{
    NavigatorCtx, NavigatorEffect, NavigatorEvent, NavigatorIntent,
};

/// Route a navigator event through the widget reducer or to app-level tasks.
pub(crate) fn route(
    app: &mut App,
    event: NavigatorEvent,
    now: Instant,
) -> Task<AppEvent> {
    match event {
        NavigatorEvent::Intent(intent) => route_intent(app, intent, now),
        NavigatorEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a navigator intent directly (used by the tick router).
pub(crate) fn route_intent(
    app: &mut App,
    intent: NavigatorIntent,
    now: Instant,
) -> Task<AppEvent> {
    let ctx = NavigatorCtx { now };
    app.widgets
        .navigator
        .reduce(intent, &ctx)
        .map(AppEvent::Navigator)
}

fn route_effect(effect: NavigatorEffect) -> Task<AppEvent> {
    match effect {
        NavigatorEffect::SectionSwapped(section) => {
            log::info!("showing section {}", section.label());
            Task::none()
        },
    }
}
