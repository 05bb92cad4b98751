use std::sync::Arc;

use iced::{Point, Size};

use super::scene::ParticleField;
use crate::theme::ThemeName;

/// Intent events handled by the background reducer.
#[derive(Debug, Clone)]
pub(crate) enum BackgroundIntent {
    /// The background became visible and needs its scene.
    Mount,
    /// Scene generation finished.
    SceneLoaded(Arc<ParticleField>),
    /// Scene generation failed; the backdrop stays static.
    SceneFailed(String),
    SetIdle(bool),
    SetTheme(ThemeName),
    /// Pointer position in window coordinates.
    PointerMoved(Point),
    Resized(Size),
    /// Advance the animation clock.
    Tick,
}

/// Effect events produced by the background reducer.
#[derive(Debug, Clone)]
pub(crate) enum BackgroundEffect {
    /// A scene was installed and can be drawn.
    SceneReady { particles: usize },
}

/// Background event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum BackgroundEvent {
    Intent(BackgroundIntent),
    Effect(BackgroundEffect),
}
