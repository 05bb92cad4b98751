use crate::theme::ThemeName;

/// Active scheme, the last scheme known to be on disk and whether a save
/// is in flight.
#[derive(Debug, Clone)]
pub(super) struct ThemeState {
    current: ThemeName,
    persisted: ThemeName,
    saving: bool,
}

impl ThemeState {
    pub(super) fn new(current: ThemeName) -> Self {
        Self {
            current,
            persisted: current,
            saving: false,
        }
    }

    pub(super) fn current(&self) -> ThemeName {
        self.current
    }

    pub(super) fn persisted(&self) -> ThemeName {
        self.persisted
    }

    pub(super) fn is_saving(&self) -> bool {
        self.saving
    }

    /// Flip the scheme and return the new one.
    pub(super) fn toggle(&mut self) -> ThemeName {
        self.current = self.current.toggled();
        self.current
    }

    /// Claim the single save slot for the current scheme.
    ///
    /// Returns `None` while another save is running or when the disk
    /// already holds the current scheme.
    pub(super) fn begin_save(&mut self) -> Option<ThemeName> {
        if self.saving || self.current == self.persisted {
            return None;
        }

        self.saving = true;
        Some(self.current)
    }

    /// Release the save slot, recording what reached the disk.
    pub(super) fn finish_save(&mut self, written: Option<ThemeName>) {
        self.saving = false;
        if let Some(name) = written {
            self.persisted = name;
        }
    }
}
