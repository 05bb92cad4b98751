use std::time::Duration;

use iced::{Event, Subscription, event, mouse, window};

use crate::app::{App, AppEvent};

/// Tick interval while a transition or the backdrop animation is running.
pub(crate) const FRAME_TICK_MS: u64 = 16;
/// Tick interval when only the idle countdown is pending.
pub(crate) const IDLE_TICK_MS: u64 = 100;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));
    if app.state.is_torn_down() {
        return win_subs;
    }

    let pointer_subs = event::listen_with(|event, _status, _id| match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(AppEvent::PointerMoved(position))
        },
        _ => None,
    });

    let mut subs = vec![win_subs, pointer_subs];
    if let Some(interval) = tick_interval(app) {
        subs.push(
            iced::time::every(Duration::from_millis(interval))
                .map(AppEvent::Tick),
        );
    }

    Subscription::batch(subs)
}

/// Pick the tick rate: frames while something animates, a coarse tick
/// while only the idle countdown runs, nothing otherwise.
fn tick_interval(app: &App) -> Option<u64> {
    let widgets = &app.widgets;
    if widgets.navigator.needs_ticks() || widgets.background.needs_ticks() {
        Some(FRAME_TICK_MS)
    } else if widgets.idle.needs_ticks() {
        Some(IDLE_TICK_MS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::{FRAME_TICK_MS, IDLE_TICK_MS, tick_interval};
    use crate::app::{App, AppEvent};
    use crate::theme::ThemeName;
    use crate::widgets::navigator::{NavigatorEvent, NavigatorIntent, Section};
    use crate::widgets::theme::ThemeWidget;

    fn app(now: Instant) -> App {
        App::with_theme(ThemeWidget::new(ThemeName::Dark), now)
    }

    #[test]
    fn given_quiet_session_when_nothing_is_pending_then_no_tick_is_needed() {
        let app = app(Instant::now());
        assert_eq!(tick_interval(&app), None);
    }

    #[test]
    fn given_pointer_move_when_only_countdown_runs_then_coarse_tick_is_used() {
        let now = Instant::now();
        let mut app = app(now);
        let _ = app.update(AppEvent::PointerMoved(iced::Point::ORIGIN));

        assert_eq!(tick_interval(&app), Some(IDLE_TICK_MS));
    }

    #[test]
    fn given_transition_in_flight_when_ticking_then_frame_rate_is_used() {
        let now = Instant::now();
        let mut app = app(now);
        let _ = app.update(AppEvent::Navigator(NavigatorEvent::Intent(
            NavigatorIntent::Select(Section::Info),
        )));

        assert_eq!(tick_interval(&app), Some(FRAME_TICK_MS));
    }
}
