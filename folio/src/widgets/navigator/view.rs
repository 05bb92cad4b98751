use iced::widget::{Row, button, text};
use iced::{Border, Element, Theme, alignment};

use super::event::NavigatorIntent;
use super::model::{NavigatorViewModel, Section};
use crate::theme::{ThemeProps, faded};

const NAV_TEXT_SIZE: f32 = 14.0;
const NAV_SPACING: f32 = 28.0;

/// Props for the navigation bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavigatorViewProps<'a> {
    pub(crate) vm: NavigatorViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the section links of the navigation bar.
pub(crate) fn view(
    props: NavigatorViewProps<'_>,
) -> Element<'_, NavigatorIntent, Theme, iced::Renderer> {
    let mut row = Row::new()
        .spacing(NAV_SPACING)
        .align_y(alignment::Vertical::Center);

    for section in Section::ALL {
        row = row.push(nav_button(section, props));
    }

    row.into()
}

fn nav_button<'a>(
    section: Section,
    props: NavigatorViewProps<'a>,
) -> Element<'a, NavigatorIntent, Theme, iced::Renderer> {
    let foreground = props.theme.palette().foreground;
    let base_color = faded(foreground, props.vm.nav_opacity(section));

    button(text(section.label()).size(NAV_TEXT_SIZE))
        .on_press(NavigatorIntent::Select(section))
        .padding(0)
        .style(move |_, status| {
            let text_color = match status {
                button::Status::Hovered | button::Status::Pressed => {
                    foreground
                },
                _ => base_color,
            };

            button::Style {
                background: None,
                text_color,
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}
