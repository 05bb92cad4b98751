use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::background::{
    BackgroundCtx, BackgroundEffect, BackgroundEvent, BackgroundIntent,
    scene_loader,
};

/// Route a background event through the widget reducer or to app-level
/// tasks.
pub(crate) fn route(
    app: &mut App,
    event: BackgroundEvent,
    now: Instant,
) -> Task<AppEvent> {
    match event {
        BackgroundEvent::Intent(intent) => route_intent(app, intent, now),
        BackgroundEvent::Effect(effect) => route_effect(effect),
    }
}

/// Route a background intent directly (used by other routers).
pub(crate) fn route_intent(
    app: &mut App,
    intent: BackgroundIntent,
    now: Instant,
) -> Task<AppEvent> {
    let ctx = BackgroundCtx {
        now,
        loader: scene_loader(),
    };
    app.widgets
        .background
        .reduce(intent, &ctx)
        .map(AppEvent::Background)
}

fn route_effect(effect: BackgroundEffect) -> Task<AppEvent> {
    match effect {
        BackgroundEffect::SceneReady { particles } => {
            log::info!("background scene ready with {particles} particles");
            Task::none()
        },
    }
}
