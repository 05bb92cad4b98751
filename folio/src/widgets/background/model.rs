use iced::Point;

use super::scene::ParticleField;
use crate::theme::ThemeName;

/// Particles generated for the decorative field.
pub(crate) const PARTICLE_COUNT: usize = 600;
/// Particles closer than this are joined by a faint line.
pub(crate) const CONNECTION_DISTANCE: f32 = 1.5;
pub(crate) const MAX_CONNECTIONS: usize = 200;
/// Field rotation around the vertical axis, radians per second.
pub(crate) const ROTATION_SPEED: f32 = 0.05;
/// Share of the pointer offset closed per reference frame.
pub(crate) const POINTER_EASING: f32 = 0.05;
/// Largest animation step applied for one frame, in seconds.
pub(crate) const MAX_FRAME_STEP_SECS: f32 = 0.1;

/// Read-only view of the background consumed by the canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackgroundViewModel<'a> {
    pub(crate) field: Option<&'a ParticleField>,
    pub(crate) rotation: f32,
    pub(crate) theme: ThemeName,
    /// Pointer position normalized to the window, `0..1` on both axes.
    pub(crate) pointer: Point,
}
