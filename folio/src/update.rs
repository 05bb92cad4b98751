use std::time::Instant;

use iced::{Task, window};

use super::{App, AppEvent};
use crate::guards::{LifecycleGuard, lifecycle_guard};
use crate::widgets::background::BackgroundIntent;
use crate::{routers, services};

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event, Instant::now())
}

fn route(app: &mut App, event: AppEvent, now: Instant) -> Task<AppEvent> {
    if lifecycle_guard(&event, app.state.is_torn_down()) == LifecycleGuard::Drop
    {
        log::trace!("dropping event after teardown: {event:?}");
        return Task::none();
    }

    match event {
        AppEvent::IcedReady => {
            routers::background::route_intent(app, BackgroundIntent::Mount, now)
        },
        // Section navigator widget
        AppEvent::Navigator(event) => {
            routers::navigator::route(app, event, now)
        },
        // Idle detector widget
        AppEvent::Idle(event) => routers::idle::route(app, event, now),
        // Decorative background widget
        AppEvent::Background(event) => {
            routers::background::route(app, event, now)
        },
        // Theme widget
        AppEvent::Theme(event) => routers::theme::route(app, event, now),
        // Direct operations
        AppEvent::OpenLink(url) => {
            if let Err(err) = services::open_link(url) {
                log::warn!("failed to open {url}: {err}");
            }
            Task::none()
        },
        AppEvent::PointerMoved(position) => {
            routers::pointer::handle_moved(app, position, now)
        },
        AppEvent::Tick(instant) => routers::tick::handle_tick(app, instant),
        AppEvent::Window(window::Event::Resized(size)) => {
            routers::window::handle_resize(app, size, now)
        },
        AppEvent::Window(window::Event::CloseRequested) => {
            routers::window::handle_close_requested(app)
        },
        AppEvent::Window(_) => Task::none(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use iced::{Point, Size, window};

    use super::route;
    use crate::app::{App, AppEvent};
    use crate::theme::ThemeName;
    use crate::widgets::background::{BackgroundEvent, BackgroundIntent};
    use crate::widgets::idle::{IdleEffect, IdleEvent};
    use crate::widgets::navigator::{NavigatorEvent, NavigatorIntent, Section};
    use crate::widgets::theme::{ThemeEffect, ThemeEvent, ThemeWidget};

    fn app(base: Instant) -> App {
        App::with_theme(ThemeWidget::new(ThemeName::Dark), base)
    }

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn select(section: Section) -> AppEvent {
        AppEvent::Navigator(NavigatorEvent::Intent(NavigatorIntent::Select(
            section,
        )))
    }

    #[test]
    fn given_selection_when_swap_deadline_ticks_then_title_follows_section() {
        let base = Instant::now();
        let mut app = app(base);

        let _ = route(&mut app, select(Section::Projects), base);
        let _ = route(&mut app, AppEvent::Tick(at(base, 399)), at(base, 399));
        assert_eq!(app.widgets.navigator.current(), Section::Home);

        let _ = route(&mut app, AppEvent::Tick(at(base, 400)), at(base, 400));
        assert_eq!(app.widgets.navigator.current(), Section::Projects);
        assert_eq!(app.title(), "Aaron Grant | Projects");
    }

    #[test]
    fn given_close_request_when_routed_then_session_is_disposed() {
        let base = Instant::now();
        let mut app = app(base);
        let _ = route(&mut app, select(Section::Contact), base);
        let _ = route(
            &mut app,
            AppEvent::PointerMoved(Point::new(5.0, 5.0)),
            base,
        );

        let _ = route(
            &mut app,
            AppEvent::Window(window::Event::CloseRequested),
            at(base, 10),
        );

        assert!(app.state.is_torn_down());
        assert!(!app.widgets.navigator.has_armed_timers());
        assert!(!app.widgets.navigator.needs_ticks());
        assert!(!app.widgets.idle.needs_ticks());
    }

    #[test]
    fn given_torn_down_session_when_events_arrive_then_nothing_changes() {
        let base = Instant::now();
        let mut app = app(base);
        let _ = route(
            &mut app,
            AppEvent::Window(window::Event::CloseRequested),
            base,
        );

        let _ = route(&mut app, select(Section::Info), at(base, 1));
        let _ = route(&mut app, AppEvent::Tick(at(base, 900)), at(base, 900));

        assert_eq!(app.widgets.navigator.current(), Section::Home);
        assert!(!app.widgets.navigator.vm().transitioning);
    }

    #[test]
    fn given_idle_flip_when_effect_routed_then_background_is_notified() {
        let base = Instant::now();
        let mut app = app(base);

        let _ = route(
            &mut app,
            AppEvent::Idle(IdleEvent::Effect(IdleEffect::IdleChanged(true))),
            base,
        );

        assert!(app.widgets.background.is_idle());
    }

    #[test]
    fn given_theme_change_when_effect_routed_then_theme_and_backdrop_follow() {
        let base = Instant::now();
        let mut app = app(base);

        let _ = route(
            &mut app,
            AppEvent::Theme(ThemeEvent::Effect(ThemeEffect::Changed(
                ThemeName::Light,
            ))),
            base,
        );

        assert_eq!(app.theme_manager.current().name(), ThemeName::Light);
        assert_eq!(app.widgets.background.vm().theme, ThemeName::Light);
    }

    #[test]
    fn given_resize_when_routed_then_pointer_is_normalized_to_new_size() {
        let base = Instant::now();
        let mut app = app(base);

        let _ = route(
            &mut app,
            AppEvent::Window(window::Event::Resized(Size::new(400.0, 200.0))),
            base,
        );
        let _ = route(
            &mut app,
            AppEvent::Background(BackgroundEvent::Intent(
                BackgroundIntent::PointerMoved(Point::new(100.0, 150.0)),
            )),
            base,
        );

        assert_eq!(app.state.window_size, Size::new(400.0, 200.0));
        assert_eq!(app.widgets.background.vm().pointer, Point::new(0.25, 0.75));
    }
}
