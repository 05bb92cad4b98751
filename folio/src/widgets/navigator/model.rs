/// Delay between accepting a switch and swapping the active panel.
pub(crate) const SWAP_DELAY_MS: u64 = 400;
/// Delay between the swap and re-enabling switch requests.
pub(crate) const RELEASE_DELAY_MS: u64 = 50;
/// Duration of the incoming panel fade after the lock-out ends.
pub(crate) const FADE_IN_MS: u64 = 400;

/// Opacity of navigation entries for sections that are not current.
pub(crate) const INACTIVE_NAV_OPACITY: f32 = 0.5;

/// Top-level content panel a visitor can view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub(crate) enum Section {
    #[default]
    Home,
    Projects,
    Info,
    Contact,
}

impl Section {
    /// All sections in navigation bar order.
    pub(crate) const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Info,
        Section::Contact,
    ];

    /// Label shown in the navigation bar.
    pub(crate) fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Info => "About",
            Section::Contact => "Contact",
        }
    }
}

/// Read-only view of the navigator consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NavigatorViewModel {
    pub(crate) current: Section,
    pub(crate) transitioning: bool,
    pub(crate) panel_opacity: f32,
}

impl NavigatorViewModel {
    /// Opacity of the navigation entry for `section`.
    pub(crate) fn nav_opacity(&self, section: Section) -> f32 {
        if section == self.current {
            1.0
        } else {
            INACTIVE_NAV_OPACITY
        }
    }
}
