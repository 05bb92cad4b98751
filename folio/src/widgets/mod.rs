pub(crate) mod background;
pub(crate) mod idle;
pub(crate) mod navigator;
pub(crate) mod theme;

pub(crate) struct Widgets {
    pub(crate) navigator: navigator::NavigatorWidget,
    pub(crate) idle: idle::IdleWidget,
    pub(crate) background: background::BackgroundWidget,
    pub(crate) theme: theme::ThemeWidget,
}
