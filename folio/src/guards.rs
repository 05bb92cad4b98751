use crate::app::AppEvent;

/// Determines how the event loop treats an incoming event once the
/// session has been torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LifecycleGuard {
    /// Let the event pass through to normal dispatch.
    Allow,
    /// Silently drop the event.
    Drop,
}

/// Classify an incoming event. After teardown only window events reach
/// the routers, so no timer or widget can observe a disposed session.
pub(crate) fn lifecycle_guard(
    event: &AppEvent,
    torn_down: bool,
) -> LifecycleGuard {
    use LifecycleGuard::*;

    if !torn_down {
        return Allow;
    }

    match event {
        AppEvent::Window(_) => Allow,
        AppEvent::IcedReady
        | AppEvent::Navigator(_)
        | AppEvent::Idle(_)
        | AppEvent::Background(_)
        | AppEvent::Theme(_)
        | AppEvent::OpenLink(_)
        | AppEvent::PointerMoved(_)
        | AppEvent::Tick(_) => Drop,
    }
}
