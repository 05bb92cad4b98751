use iced::Size;

/// Window geometry and session lifecycle.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) window_size: Size,
    torn_down: bool,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self {
            window_size,
            torn_down: false,
        }
    }

    /// Return whether the session was disposed and the window is closing.
    pub(crate) fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub(crate) fn mark_torn_down(&mut self) {
        self.torn_down = true;
    }
}
