use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// User-selectable color scheme.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeName {
    Light,
    #[default]
    Dark,
}

impl ThemeName {
    /// The other scheme.
    pub(crate) fn toggled(self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

/// Resolved colors used by views and the background canvas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FolioPalette {
    pub(crate) background: Color,
    pub(crate) backdrop_top: Color,
    pub(crate) backdrop_bottom: Color,
    pub(crate) foreground: Color,
    pub(crate) border: Color,
    pub(crate) card: Color,
    pub(crate) accent: Color,
    pub(crate) accent_deep: Color,
    pub(crate) particle: Color,
    /// Overall strength of the decorative layer.
    pub(crate) backdrop_opacity: f32,
}

impl FolioPalette {
    fn light() -> Self {
        Self {
            background: Color::from_rgb8(0xFA, 0xFA, 0xFA),
            backdrop_top: Color::from_rgb8(0xF5, 0xF5, 0xF5),
            backdrop_bottom: Color::from_rgb8(0xFA, 0xFA, 0xFA),
            foreground: Color::from_rgb8(0x0A, 0x0A, 0x0A),
            border: Color::from_rgba8(0x0A, 0x0A, 0x0A, 0.6),
            card: Color::from_rgba8(0x00, 0x00, 0x00, 0.03),
            accent: Color::from_rgb8(0x34, 0xD3, 0x99),
            accent_deep: Color::from_rgb8(0x10, 0xB9, 0x81),
            particle: Color::from_rgb8(0x4B, 0x55, 0x63),
            backdrop_opacity: 0.3,
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::from_rgb8(0x0A, 0x0A, 0x0A),
            backdrop_top: Color::from_rgb8(0x0A, 0x0A, 0x0A),
            backdrop_bottom: Color::from_rgb8(0x17, 0x17, 0x17),
            foreground: Color::from_rgb8(0xED, 0xED, 0xED),
            border: Color::from_rgba8(0xED, 0xED, 0xED, 0.6),
            card: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0.02),
            accent: Color::from_rgb8(0x34, 0xD3, 0x99),
            accent_deep: Color::from_rgb8(0x10, 0xB9, 0x81),
            particle: Color::from_rgb8(0xE5, 0xE7, 0xEB),
            backdrop_opacity: 1.0,
        }
    }
}

/// Application theme: a named scheme and its resolved palette.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppTheme {
    name: ThemeName,
    palette: FolioPalette,
}

impl AppTheme {
    pub(crate) fn new(name: ThemeName) -> Self {
        let palette = match name {
            ThemeName::Light => FolioPalette::light(),
            ThemeName::Dark => FolioPalette::dark(),
        };

        Self { name, palette }
    }

    pub(crate) fn name(&self) -> ThemeName {
        self.name
    }

    pub(crate) fn palette(&self) -> &FolioPalette {
        &self.palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.accent_deep,
            danger: Color::from_rgb8(0xE0, 0x6C, 0x75),
            warning: Color::from_rgb8(0xE5, 0xC0, 0x7B),
        };

        Theme::custom(String::from(value.name.as_str()), palette)
    }
}

/// Theme props passed from the root view down to panels and widgets.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }

    pub(crate) fn palette(&self) -> &'a FolioPalette {
        self.theme.palette()
    }
}

/// Owns the current theme and rebuilds it when the scheme changes.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new(name: ThemeName) -> Self {
        Self {
            current: AppTheme::new(name),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }

    /// Switch to `name`. Returns whether the scheme changed.
    pub(crate) fn set_theme(&mut self, name: ThemeName) -> bool {
        if self.current.name() == name {
            return false;
        }

        self.current = AppTheme::new(name);
        true
    }
}

/// Return `color` with its alpha scaled by `opacity`.
pub(crate) fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::{ThemeManager, ThemeName, faded};

    #[test]
    fn given_theme_name_when_serialized_then_lowercase_names_are_used() {
        let json = serde_json::to_string(&ThemeName::Light)
            .expect("theme name should serialize");
        assert_eq!(json, "\"light\"");

        let parsed: ThemeName = serde_json::from_str("\"dark\"")
            .expect("theme name should parse");
        assert_eq!(parsed, ThemeName::Dark);
    }

    #[test]
    fn given_same_theme_when_set_then_manager_reports_no_change() {
        let mut manager = ThemeManager::new(ThemeName::Dark);
        assert!(!manager.set_theme(ThemeName::Dark));
        assert!(manager.set_theme(ThemeName::Light));
        assert_eq!(manager.current().name(), ThemeName::Light);
    }

    #[test]
    fn given_opacity_out_of_range_when_fading_then_alpha_is_clamped() {
        let color = iced::Color::from_rgba(1.0, 1.0, 1.0, 0.5);
        assert_eq!(faded(color, 2.0).a, 0.5);
        assert_eq!(faded(color, -1.0).a, 0.0);
    }
}
