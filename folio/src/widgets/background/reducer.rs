use std::sync::Arc;
use std::time::Instant;

use iced::Task;

use super::errors::SceneError;
use super::event::{BackgroundEffect, BackgroundEvent, BackgroundIntent};
use super::loader::{Acquire, SceneLoader};
use super::model::PARTICLE_COUNT;
use super::scene::ParticleField;
use super::state::BackgroundState;

/// Read-only context for background reduction.
pub(crate) struct BackgroundCtx<'a> {
    /// Instant the event is reduced at.
    pub(crate) now: Instant,
    pub(crate) loader: &'a SceneLoader,
}

/// Reduce a background intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut BackgroundState,
    event: BackgroundIntent,
    ctx: &BackgroundCtx<'_>,
) -> Task<BackgroundEvent> {
    match event {
        BackgroundIntent::Mount => mount(state, ctx),
        BackgroundIntent::SceneLoaded(scene) => {
            let scene = ctx.loader.complete(scene);
            install(state, &scene)
        },
        BackgroundIntent::SceneFailed(message) => {
            log::warn!("background scene failed to load: {message}");
            ctx.loader.fail();
            state.set_awaiting_scene(false);
            Task::none()
        },
        BackgroundIntent::SetIdle(idle) => {
            state.set_idle(idle);
            Task::none()
        },
        BackgroundIntent::SetTheme(theme) => {
            state.set_theme(theme);
            Task::none()
        },
        BackgroundIntent::PointerMoved(position) => {
            state.set_pointer(position);
            Task::none()
        },
        BackgroundIntent::Resized(size) => {
            state.set_viewport(size);
            Task::none()
        },
        BackgroundIntent::Tick => {
            let installed = if state.is_awaiting_scene() {
                match ctx.loader.scene() {
                    Some(scene) => install(state, &scene),
                    None => Task::none(),
                }
            } else {
                Task::none()
            };
            state.advance(ctx.now);
            installed
        },
    }
}

fn mount(
    state: &mut BackgroundState,
    ctx: &BackgroundCtx<'_>,
) -> Task<BackgroundEvent> {
    if state.is_disposed() || state.has_scene() {
        return Task::none();
    }

    match ctx.loader.acquire() {
        Acquire::Start => request_scene(),
        Acquire::Pending => {
            state.set_awaiting_scene(true);
            Task::none()
        },
        Acquire::Ready(scene) => install(state, &scene),
    }
}

fn install(
    state: &mut BackgroundState,
    scene: &Arc<ParticleField>,
) -> Task<BackgroundEvent> {
    if state.is_disposed() {
        return Task::none();
    }

    state.install_scene(scene);
    Task::done(BackgroundEvent::Effect(BackgroundEffect::SceneReady {
        particles: scene.len(),
    }))
}

fn request_scene() -> Task<BackgroundEvent> {
    Task::perform(async { generate_scene() }, |result| match result {
        Ok(scene) => {
            BackgroundEvent::Intent(BackgroundIntent::SceneLoaded(scene))
        },
        Err(err) => BackgroundEvent::Intent(BackgroundIntent::SceneFailed(
            format!("{err}"),
        )),
    })
}

fn generate_scene() -> Result<Arc<ParticleField>, SceneError> {
    let mut rng = rand::thread_rng();
    ParticleField::generate(PARTICLE_COUNT, &mut rng).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use iced::{Point, Size};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::BackgroundCtx;
    use crate::theme::ThemeName;
    use crate::widgets::background::loader::{LoadPhase, SceneLoader};
    use crate::widgets::background::scene::ParticleField;
    use crate::widgets::background::{BackgroundIntent, BackgroundWidget};

    fn scene() -> Arc<ParticleField> {
        let mut rng = StdRng::seed_from_u64(11);
        Arc::new(
            ParticleField::generate(16, &mut rng)
                .expect("scene should generate"),
        )
    }

    fn widget() -> BackgroundWidget {
        BackgroundWidget::new(ThemeName::Dark, Size::new(800.0, 600.0))
    }

    fn reduce(
        widget: &mut BackgroundWidget,
        loader: &SceneLoader,
        now: Instant,
        event: BackgroundIntent,
    ) {
        let _task = widget.reduce(event, &BackgroundCtx { now, loader });
    }

    #[test]
    fn given_initialized_loader_when_mounted_then_existing_scene_is_reused() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        let published = loader.complete(scene());
        let mut widget = widget();

        reduce(&mut widget, &loader, Instant::now(), BackgroundIntent::Mount);

        assert_eq!(widget.vm().field, Some(published.as_ref()));
    }

    #[test]
    fn given_pending_load_when_scene_published_then_tick_picks_it_up() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        let mut widget = widget();
        let now = Instant::now();

        reduce(&mut widget, &loader, now, BackgroundIntent::Mount);
        assert!(widget.vm().field.is_none());
        assert!(widget.needs_ticks());

        let _ = loader.complete(scene());
        reduce(&mut widget, &loader, now, BackgroundIntent::Tick);

        assert!(widget.vm().field.is_some());
        assert!(!widget.needs_ticks());
    }

    #[test]
    fn given_failed_load_when_reported_then_loader_allows_retry() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        let mut widget = widget();

        reduce(
            &mut widget,
            &loader,
            Instant::now(),
            BackgroundIntent::SceneFailed(String::from("boom")),
        );

        assert!(matches!(loader.phase(), LoadPhase::Uninitialized));
        assert!(widget.vm().field.is_none());
    }

    #[test]
    fn given_active_pointer_when_ticking_then_animation_stays_paused() {
        let loader = SceneLoader::new();
        let mut widget = widget();
        let base = Instant::now();
        reduce(
            &mut widget,
            &loader,
            base,
            BackgroundIntent::SceneLoaded(scene()),
        );
        reduce(&mut widget, &loader, base, BackgroundIntent::SetIdle(false));

        for ms in [0, 16, 32, 48] {
            let now = base + Duration::from_millis(ms);
            reduce(&mut widget, &loader, now, BackgroundIntent::Tick);
        }

        assert_eq!(widget.vm().rotation, 0.0);
        assert!(!widget.needs_ticks());
    }

    #[test]
    fn given_idle_visitor_when_ticking_then_animation_clock_advances() {
        let loader = SceneLoader::new();
        let mut widget = widget();
        let base = Instant::now();
        reduce(
            &mut widget,
            &loader,
            base,
            BackgroundIntent::SceneLoaded(scene()),
        );
        reduce(&mut widget, &loader, base, BackgroundIntent::SetIdle(true));
        let before = widget.vm().field.cloned();

        for ms in [0, 16, 32, 48] {
            let now = base + Duration::from_millis(ms);
            reduce(&mut widget, &loader, now, BackgroundIntent::Tick);
        }

        assert!(widget.vm().rotation > 0.0);
        assert_ne!(widget.vm().field.cloned(), before);
        assert!(widget.needs_ticks());
    }

    #[test]
    fn given_pointer_move_when_reduced_then_position_is_normalized() {
        let loader = SceneLoader::new();
        let mut widget = widget();

        reduce(
            &mut widget,
            &loader,
            Instant::now(),
            BackgroundIntent::PointerMoved(Point::new(200.0, 450.0)),
        );

        assert_eq!(widget.vm().pointer, Point::new(0.25, 0.75));
    }

    #[test]
    fn given_theme_notification_when_reduced_then_background_follows_it() {
        let loader = SceneLoader::new();
        let mut widget = widget();

        reduce(
            &mut widget,
            &loader,
            Instant::now(),
            BackgroundIntent::SetTheme(ThemeName::Light),
        );

        assert_eq!(widget.vm().theme, ThemeName::Light);
    }

    #[test]
    fn given_disposed_widget_when_scene_arrives_then_it_is_not_installed() {
        let loader = SceneLoader::new();
        let mut widget = widget();
        widget.dispose();

        reduce(
            &mut widget,
            &loader,
            Instant::now(),
            BackgroundIntent::SceneLoaded(scene()),
        );

        assert!(widget.vm().field.is_none());
        assert!(loader.scene().is_some());
    }
}
