/// Intent events handled by the idle reducer.
#[derive(Debug, Clone)]
pub(crate) enum IdleIntent {
    /// The pointer moved somewhere over the window.
    PointerMoved,
    /// Evaluate the inactivity countdown.
    Tick,
}

/// Effect events produced by the idle reducer.
#[derive(Debug, Clone)]
pub(crate) enum IdleEffect {
    /// The idle flag flipped to the carried value.
    IdleChanged(bool),
}

/// Idle event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum IdleEvent {
    Intent(IdleIntent),
    Effect(IdleEffect),
}
