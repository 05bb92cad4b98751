use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::background::BackgroundIntent;
use crate::widgets::idle::{IdleEvent, IdleIntent};
use crate::widgets::navigator::NavigatorIntent;

/// Evaluate every pending deadline and advance animations to `now`.
pub(crate) fn handle_tick(app: &mut App, now: Instant) -> Task<AppEvent> {
    let navigator =
        routers::navigator::route_intent(app, NavigatorIntent::Tick, now);
    let idle =
        routers::idle::route(app, IdleEvent::Intent(IdleIntent::Tick), now);
    let background =
        routers::background::route_intent(app, BackgroundIntent::Tick, now);

    Task::batch([navigator, idle, background])
}
