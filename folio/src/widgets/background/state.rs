use std::time::Instant;

use iced::{Point, Size};

use super::model::{MAX_FRAME_STEP_SECS, POINTER_EASING, ROTATION_SPEED};
use super::scene::{ParticleField, aspect_ratio};
use crate::theme::ThemeName;

const REFERENCE_FPS: f32 = 60.0;

/// Scene, animation clock and the signals the backdrop reacts to.
#[derive(Debug)]
pub(super) struct BackgroundState {
    field: Option<ParticleField>,
    awaiting_scene: bool,
    idle: bool,
    theme: ThemeName,
    pointer_uv: Point,
    pointer_target: [f32; 2],
    pointer: [f32; 2],
    viewport: Size,
    elapsed: f32,
    last_frame: Option<Instant>,
    disposed: bool,
}

impl BackgroundState {
    pub(super) fn new(theme: ThemeName, viewport: Size) -> Self {
        Self {
            field: None,
            awaiting_scene: false,
            idle: false,
            theme,
            pointer_uv: Point::new(0.5, 0.5),
            pointer_target: [0.0, 0.0],
            pointer: [0.0, 0.0],
            viewport,
            elapsed: 0.0,
            last_frame: None,
            disposed: false,
        }
    }

    pub(super) fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub(super) fn has_scene(&self) -> bool {
        self.field.is_some()
    }

    #[cfg(test)]
    pub(super) fn is_idle(&self) -> bool {
        self.idle
    }

    pub(super) fn theme(&self) -> ThemeName {
        self.theme
    }

    pub(super) fn pointer_uv(&self) -> Point {
        self.pointer_uv
    }

    pub(super) fn rotation(&self) -> f32 {
        self.elapsed * ROTATION_SPEED
    }

    pub(super) fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub(super) fn is_awaiting_scene(&self) -> bool {
        self.awaiting_scene && !self.disposed
    }

    /// The animation only runs while the visitor is idle.
    pub(super) fn is_running(&self) -> bool {
        !self.disposed && self.idle && self.field.is_some()
    }

    pub(super) fn set_awaiting_scene(&mut self, awaiting: bool) {
        self.awaiting_scene = awaiting;
    }

    pub(super) fn install_scene(&mut self, field: &ParticleField) {
        if self.disposed {
            return;
        }
        self.field = Some(field.clone());
        self.awaiting_scene = false;
    }

    pub(super) fn set_idle(&mut self, idle: bool) {
        self.idle = idle;
        if !idle {
            self.last_frame = None;
        }
    }

    pub(super) fn set_theme(&mut self, theme: ThemeName) {
        self.theme = theme;
    }

    pub(super) fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Track the pointer from window coordinates.
    pub(super) fn set_pointer(&mut self, position: Point) {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return;
        }

        let u = (position.x / self.viewport.width).clamp(0.0, 1.0);
        let v = (position.y / self.viewport.height).clamp(0.0, 1.0);
        self.pointer_uv = Point::new(u, v);
        self.pointer_target = [u * 2.0 - 1.0, -(v * 2.0 - 1.0)];
    }

    /// Step the animation to `now`. Returns whether anything moved.
    pub(super) fn advance(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            self.last_frame = None;
            return false;
        }

        let dt = self
            .last_frame
            .map(|last| {
                now.saturating_duration_since(last)
                    .as_secs_f32()
                    .min(MAX_FRAME_STEP_SECS)
            })
            .unwrap_or(0.0);
        self.last_frame = Some(now);
        if dt <= 0.0 {
            return false;
        }

        self.elapsed += dt;
        let easing = 1.0 - (1.0 - POINTER_EASING).powf(dt * REFERENCE_FPS);
        for axis in 0..2 {
            self.pointer[axis] +=
                (self.pointer_target[axis] - self.pointer[axis]) * easing;
        }

        let aspect = aspect_ratio(self.viewport);
        let pointer = self.pointer;
        if let Some(field) = self.field.as_mut() {
            field.step(dt, pointer, aspect);
        }
        true
    }

    pub(super) fn dispose(&mut self) {
        self.last_frame = None;
        self.awaiting_scene = false;
        self.disposed = true;
    }
}
