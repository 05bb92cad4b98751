use iced::Task;

use super::event::{ThemeEffect, ThemeEvent, ThemeIntent};
use super::model::SettingsData;
use super::state::ThemeState;
use super::storage::save_settings;
use crate::theme::ThemeName;

/// Reduce a theme intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut ThemeState,
    event: ThemeIntent,
) -> Task<ThemeEvent> {
    match event {
        ThemeIntent::Toggle => {
            let name = state.toggle();
            log::info!("theme switched to {}", name.as_str());
            Task::batch([
                Task::done(ThemeEvent::Effect(ThemeEffect::Changed(name))),
                save_pending(state),
            ])
        },
        ThemeIntent::SaveCompleted(name) => {
            state.finish_save(Some(name));
            save_pending(state)
        },
        ThemeIntent::SaveFailed(message) => {
            log::warn!("settings save failed: {message}");
            state.finish_save(None);
            Task::none()
        },
    }
}

/// Start a save when the slot is free and the disk is behind.
fn save_pending(state: &mut ThemeState) -> Task<ThemeEvent> {
    match state.begin_save() {
        Some(name) => request_save(name),
        None => Task::none(),
    }
}

fn request_save(name: ThemeName) -> Task<ThemeEvent> {
    let settings = SettingsData { theme: name };
    Task::perform(
        async move {
            match save_settings(&settings) {
                Ok(()) => Ok(settings.theme),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(name) => ThemeEvent::Intent(ThemeIntent::SaveCompleted(name)),
            Err(message) => {
                ThemeEvent::Intent(ThemeIntent::SaveFailed(message))
            },
        },
    )
}
