use thiserror::Error;

/// Errors emitted while building the decorative scene.
#[derive(Debug, Error)]
pub(crate) enum SceneError {
    /// The scene was asked for zero particles.
    #[error("scene needs at least one particle")]
    Empty,
}
