use std::sync::{Arc, Mutex, MutexGuard};

use super::scene::ParticleField;

/// Process-wide lifecycle of the decorative scene.
#[derive(Debug, Clone, Default)]
pub(crate) enum LoadPhase {
    #[default]
    Uninitialized,
    Loading,
    Initialized(Arc<ParticleField>),
}

/// What a mounting background should do next.
#[derive(Debug, Clone)]
pub(crate) enum Acquire {
    /// The caller owns the load and must report `complete` or `fail`.
    Start,
    /// Another mount is loading the scene; poll `scene` later.
    Pending,
    /// The scene is ready and shared.
    Ready(Arc<ParticleField>),
}

/// Guards scene initialization so it happens at most once per process,
/// however many times a background mounts or unmounts.
#[derive(Debug)]
pub(crate) struct SceneLoader {
    phase: Mutex<LoadPhase>,
}

static SCENE_LOADER: SceneLoader = SceneLoader::new();

/// Return the loader shared by every background in this process.
pub(crate) fn scene_loader() -> &'static SceneLoader {
    &SCENE_LOADER
}

impl SceneLoader {
    pub(crate) const fn new() -> Self {
        Self {
            phase: Mutex::new(LoadPhase::Uninitialized),
        }
    }

    /// Claim the load if nobody started it yet.
    pub(crate) fn acquire(&self) -> Acquire {
        let mut phase = self.lock();
        match &*phase {
            LoadPhase::Uninitialized => {
                *phase = LoadPhase::Loading;
                Acquire::Start
            },
            LoadPhase::Loading => Acquire::Pending,
            LoadPhase::Initialized(scene) => Acquire::Ready(Arc::clone(scene)),
        }
    }

    /// Publish a generated scene. An already published scene wins, so a
    /// stray second load never replaces it.
    pub(crate) fn complete(
        &self,
        scene: Arc<ParticleField>,
    ) -> Arc<ParticleField> {
        let mut phase = self.lock();
        if let LoadPhase::Initialized(existing) = &*phase {
            log::debug!("scene already initialized, dropping duplicate");
            return Arc::clone(existing);
        }

        *phase = LoadPhase::Initialized(Arc::clone(&scene));
        scene
    }

    /// Abandon a load so the next mount can retry.
    pub(crate) fn fail(&self) {
        let mut phase = self.lock();
        if matches!(*phase, LoadPhase::Loading) {
            *phase = LoadPhase::Uninitialized;
        }
    }

    pub(crate) fn scene(&self) -> Option<Arc<ParticleField>> {
        match &*self.lock() {
            LoadPhase::Initialized(scene) => Some(Arc::clone(scene)),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> LoadPhase {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, LoadPhase> {
        self.phase
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{Acquire, LoadPhase, SceneLoader};
    use crate::widgets::background::scene::ParticleField;

    fn scene() -> Arc<ParticleField> {
        let mut rng = StdRng::seed_from_u64(3);
        Arc::new(
            ParticleField::generate(8, &mut rng)
                .expect("scene should generate"),
        )
    }

    #[test]
    fn given_fresh_loader_when_acquired_twice_then_only_first_caller_starts() {
        let loader = SceneLoader::new();
        assert!(matches!(loader.acquire(), Acquire::Start));
        assert!(matches!(loader.acquire(), Acquire::Pending));
        assert!(matches!(loader.phase(), LoadPhase::Loading));
    }

    #[test]
    fn given_completed_load_when_acquired_then_same_scene_is_shared() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        let published = loader.complete(scene());

        match loader.acquire() {
            Acquire::Ready(shared) => assert!(Arc::ptr_eq(&shared, &published)),
            other => panic!("expected ready scene, got {other:?}"),
        }
    }

    #[test]
    fn given_initialized_loader_when_completed_again_then_first_scene_is_kept() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        let first = loader.complete(scene());
        let second = loader.complete(scene());

        assert!(Arc::ptr_eq(&first, &second));
        let current = loader.scene().expect("scene should be published");
        assert!(Arc::ptr_eq(&first, &current));
    }

    #[test]
    fn given_failed_load_when_acquired_then_caller_may_retry() {
        let loader = SceneLoader::new();
        let _ = loader.acquire();
        loader.fail();

        assert!(loader.scene().is_none());
        assert!(matches!(loader.acquire(), Acquire::Start));
    }
}
