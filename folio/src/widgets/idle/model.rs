/// Pointer inactivity after which the visitor counts as idle.
pub(crate) const IDLE_THRESHOLD_MS: u64 = 5_000;

/// Read-only view of the idle detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdleViewModel {
    pub(crate) idle: bool,
}
