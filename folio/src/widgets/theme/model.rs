use serde::{Deserialize, Serialize};

use crate::theme::ThemeName;

/// Persisted user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    pub(crate) theme: ThemeName,
}

/// Read-only view of the theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThemeViewModel {
    pub(crate) name: ThemeName,
}
