use iced::widget::{button, text};
use iced::{Border, Element, Theme};

use super::event::ThemeIntent;
use super::model::ThemeViewModel;
use crate::theme::{ThemeName, ThemeProps, faded};

const TOGGLE_TEXT_SIZE: f32 = 14.0;
const TOGGLE_IDLE_OPACITY: f32 = 0.7;

/// Props for the theme toggle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeViewProps<'a> {
    pub(crate) vm: ThemeViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the light/dark toggle. The label names the scheme it switches to.
pub(crate) fn view(
    props: ThemeViewProps<'_>,
) -> Element<'_, ThemeIntent, Theme, iced::Renderer> {
    let label = match props.vm.name {
        ThemeName::Light => "Dark",
        ThemeName::Dark => "Light",
    };
    let foreground = props.theme.palette().foreground;
    let border_color = props.theme.palette().border;

    button(text(label).size(TOGGLE_TEXT_SIZE))
        .on_press(ThemeIntent::Toggle)
        .padding([4.0, 12.0])
        .style(move |_, status| {
            let text_color = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    foreground
                },
                _ => faded(foreground, TOGGLE_IDLE_OPACITY),
            };

            button::Style {
                background: None,
                text_color,
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 999.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
