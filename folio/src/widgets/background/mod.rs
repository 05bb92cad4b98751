mod errors;
mod event;
mod loader;
pub(crate) mod model;
mod reducer;
mod scene;
mod state;
pub(crate) mod view;

pub(crate) use event::{BackgroundEffect, BackgroundEvent, BackgroundIntent};
use iced::{Size, Task};
pub(crate) use loader::scene_loader;
pub(crate) use model::BackgroundViewModel;
pub(crate) use reducer::BackgroundCtx;
use state::BackgroundState;

use crate::theme::ThemeName;

/// Decorative particle backdrop. The scene is shared process-wide and the
/// animation only advances while the visitor is idle.
pub(crate) struct BackgroundWidget {
    state: BackgroundState,
}

impl BackgroundWidget {
    pub(crate) fn new(theme: ThemeName, viewport: Size) -> Self {
        Self {
            state: BackgroundState::new(theme, viewport),
        }
    }

    /// Reduce an intent event into state updates and effect events.
    pub(crate) fn reduce(
        &mut self,
        event: BackgroundIntent,
        ctx: &BackgroundCtx<'_>,
    ) -> Task<BackgroundEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the canvas.
    pub(crate) fn vm(&self) -> BackgroundViewModel<'_> {
        BackgroundViewModel {
            field: self.state.field(),
            rotation: self.state.rotation(),
            theme: self.state.theme(),
            pointer: self.state.pointer_uv(),
        }
    }

    #[cfg(test)]
    pub(crate) fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Return whether frames must keep coming, either to animate or to pick
    /// up a scene loaded elsewhere.
    pub(crate) fn needs_ticks(&self) -> bool {
        self.state.is_running() || self.state.is_awaiting_scene()
    }

    /// Stop animating and ignore scenes arriving afterwards.
    pub(crate) fn dispose(&mut self) {
        self.state.dispose();
    }
}
