mod errors;
mod event;
pub(crate) mod model;
mod reducer;
mod state;
mod storage;
pub(crate) mod view;

pub(crate) use event::{ThemeEffect, ThemeEvent, ThemeIntent};
use iced::Task;
pub(crate) use model::ThemeViewModel;
use state::ThemeState;
use storage::SettingsLoadStatus;

use crate::theme::ThemeName;

/// Theme selection: the light/dark toggle and its persisted preference.
pub(crate) struct ThemeWidget {
    state: ThemeState,
}

impl ThemeWidget {
    pub(crate) fn new(name: ThemeName) -> Self {
        Self {
            state: ThemeState::new(name),
        }
    }

    /// Create the widget from the settings file, falling back to the
    /// default scheme when it is missing or unreadable.
    pub(crate) fn load() -> Self {
        let settings = match storage::load_settings() {
            Ok(load) => {
                let (settings, status) = load.into_parts();
                match status {
                    SettingsLoadStatus::Loaded => {},
                    SettingsLoadStatus::Missing => {
                        log::debug!("settings file missing, using defaults");
                    },
                    SettingsLoadStatus::Invalid(message) => {
                        log::warn!("settings file invalid: {message}");
                    },
                }
                settings
            },
            Err(err) => {
                log::warn!("settings load failed: {err}");
                model::SettingsData::default()
            },
        };

        Self::new(settings.theme)
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(&mut self, event: ThemeIntent) -> Task<ThemeEvent> {
        reducer::reduce(&mut self.state, event)
    }

    pub(crate) fn vm(&self) -> ThemeViewModel {
        ThemeViewModel {
            name: self.state.current(),
        }
    }

    pub(crate) fn current(&self) -> ThemeName {
        self.state.current()
    }

    /// Return whether the active scheme still has to reach the disk.
    pub(crate) fn has_unsaved_change(&self) -> bool {
        self.state.current() != self.state.persisted()
    }
}
