use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::background::BackgroundIntent;
use crate::widgets::theme::{ThemeEffect, ThemeEvent};

/// Route a theme event through the widget reducer or to app-level tasks.
pub(crate) fn route(
    app: &mut App,
    event: ThemeEvent,
    now: Instant,
) -> Task<AppEvent> {
    match event {
        ThemeEvent::Intent(intent) => {
            app.widgets.theme.reduce(intent).map(AppEvent::Theme)
        },
        ThemeEvent::Effect(effect) => route_effect(app, effect, now),
    }
}

fn route_effect(
    app: &mut App,
    effect: ThemeEffect,
    now: Instant,
) -> Task<AppEvent> {
    match effect {
        ThemeEffect::Changed(name) => {
            if !app.theme_manager.set_theme(name) {
                return Task::none();
            }
            routers::background::route_intent(
                app,
                BackgroundIntent::SetTheme(name),
                now,
            )
        },
    }
}
