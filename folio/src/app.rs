#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::time::Instant;

use iced::{Element, Point, Size, Subscription, Task, Theme, window};

use crate::content::OWNER_NAME;
use crate::state::State;
use crate::theme::ThemeManager;
use crate::widgets::Widgets;
use crate::widgets::background::{BackgroundEvent, BackgroundWidget};
use crate::widgets::idle::{IdleEvent, IdleWidget};
use crate::widgets::navigator::{NavigatorEvent, NavigatorWidget, Section};
use crate::widgets::theme::{ThemeEvent, ThemeWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Section navigator widget
    Navigator(NavigatorEvent),
    // Idle detector widget
    Idle(IdleEvent),
    // Decorative background widget
    Background(BackgroundEvent),
    // Theme widget
    Theme(ThemeEvent),
    // Direct operations
    OpenLink(&'static str),
    PointerMoved(Point),
    Tick(Instant),
    Window(window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let app = Self::with_theme(ThemeWidget::load(), Instant::now());
        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Build a fresh session around an already loaded theme selection.
    pub(crate) fn with_theme(theme: ThemeWidget, now: Instant) -> Self {
        let theme_manager = ThemeManager::new(theme.current());
        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let widgets = Widgets {
            navigator: NavigatorWidget::new(now),
            idle: IdleWidget::new(),
            background: BackgroundWidget::new(theme.current(), window_size),
            theme,
        };

        App {
            theme_manager,
            state: State::new(window_size),
            widgets,
        }
    }

    /// Return the window title, which follows the current section.
    pub(crate) fn title(&self) -> String {
        title_for(self.widgets.navigator.current())
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}

fn title_for(section: Section) -> String {
    match section {
        Section::Home => String::from(OWNER_NAME),
        section => format!("{OWNER_NAME} | {}", section.label()),
    }
}
