use std::time::Instant;

use iced::{Size, Task, window};

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::background::BackgroundIntent;

/// Handle window resize events and propagate the new viewport.
pub(crate) fn handle_resize(
    app: &mut App,
    size: Size,
    now: Instant,
) -> Task<AppEvent> {
    app.state.window_size = size;
    routers::background::route_intent(app, BackgroundIntent::Resized(size), now)
}

/// Dispose the session, then close the window. Pending timers are
/// discarded without firing.
pub(crate) fn handle_close_requested(app: &mut App) -> Task<AppEvent> {
    if !app.state.is_torn_down() {
        app.widgets.navigator.dispose();
        app.widgets.idle.dispose();
        app.widgets.background.dispose();
        app.state.mark_torn_down();
        if app.widgets.theme.has_unsaved_change() {
            log::warn!("closing before the theme preference was saved");
        }
        log::info!("session disposed, closing window");
    }

    window::latest().and_then(window::close)
}
