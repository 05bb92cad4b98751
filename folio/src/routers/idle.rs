use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::background::BackgroundIntent;
use crate::widgets::idle::{IdleCtx, IdleEffect, IdleEvent, IdleIntent};

/// Route an idle event through the widget reducer or to app-level tasks.
pub(crate) fn route(
    app: &mut App,
    event: IdleEvent,
    now: Instant,
) -> Task<AppEvent> {
    match event {
        IdleEvent::Intent(intent) => route_intent(app, intent, now),
        IdleEvent::Effect(effect) => route_effect(app, effect, now),
    }
}

fn route_intent(
    app: &mut App,
    intent: IdleIntent,
    now: Instant,
) -> Task<AppEvent> {
    let ctx = IdleCtx { now };
    app.widgets.idle.reduce(intent, &ctx).map(AppEvent::Idle)
}

fn route_effect(
    app: &mut App,
    effect: IdleEffect,
    now: Instant,
) -> Task<AppEvent> {
    match effect {
        IdleEffect::IdleChanged(idle) => {
            log::debug!("visitor idle: {idle}");
            routers::background::route_intent(
                app,
                BackgroundIntent::SetIdle(idle),
                now,
            )
        },
    }
}
