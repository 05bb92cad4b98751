use crate::theme::ThemeName;

/// Intent events handled by the theme reducer.
#[derive(Debug, Clone)]
pub(crate) enum ThemeIntent {
    /// Switch between the light and dark scheme.
    Toggle,
    SaveCompleted(ThemeName),
    SaveFailed(String),
}

/// Effect events produced by the theme reducer.
#[derive(Debug, Clone)]
pub(crate) enum ThemeEffect {
    /// The active scheme changed; listeners restyle themselves.
    Changed(ThemeName),
}

/// Theme event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ThemeEvent {
    Intent(ThemeIntent),
    Effect(ThemeEffect),
}
