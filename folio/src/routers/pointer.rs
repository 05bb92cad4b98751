use std::time::Instant;

use iced::{Point, Task};

use crate::app::{App, AppEvent};
use crate::routers;
use crate::widgets::background::BackgroundIntent;
use crate::widgets::idle::{IdleEvent, IdleIntent};

/// Fan a pointer move out to the idle detector and the background.
pub(crate) fn handle_moved(
    app: &mut App,
    position: Point,
    now: Instant,
) -> Task<AppEvent> {
    let idle = routers::idle::route(
        app,
        IdleEvent::Intent(IdleIntent::PointerMoved),
        now,
    );
    let background = routers::background::route_intent(
        app,
        BackgroundIntent::PointerMoved(position),
        now,
    );

    Task::batch([idle, background])
}
