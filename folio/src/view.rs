use iced::widget::{column, container, row, stack};
use iced::{Border, Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::panels::{self, PanelProps};
use crate::theme::ThemeProps;
use crate::widgets::background::view::{
    self as background_view, BackgroundViewProps,
};
use crate::widgets::navigator::NavigatorEvent;
use crate::widgets::navigator::view::{
    self as navigator_view, NavigatorViewProps,
};
use crate::widgets::theme::ThemeEvent;
use crate::widgets::theme::view::{self as theme_view, ThemeViewProps};

/// Gap between the window edge and the framed content.
const FRAME_INSET: f32 = 32.0;
const FRAME_BORDER_WIDTH: f32 = 0.5;
const HEADER_SPACING: f32 = 28.0;
const HEADER_PADDING_Y: f32 = 28.0;
const HEADER_PADDING_X: f32 = 24.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = theme_props.palette();
    let navigator_vm = app.widgets.navigator.vm();

    let backdrop = background_view::view(BackgroundViewProps {
        vm: app.widgets.background.vm(),
        idle: app.widgets.idle.vm().idle,
    });

    let nav = navigator_view::view(NavigatorViewProps {
        vm: navigator_vm,
        theme: theme_props,
    })
    .map(|intent| AppEvent::Navigator(NavigatorEvent::Intent(intent)));

    let toggle = theme_view::view(ThemeViewProps {
        vm: app.widgets.theme.vm(),
        theme: theme_props,
    })
    .map(|intent| AppEvent::Theme(ThemeEvent::Intent(intent)));

    let header = container(
        row![nav, toggle]
            .spacing(HEADER_SPACING)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .padding([HEADER_PADDING_Y, HEADER_PADDING_X]);

    let panel = panels::view(PanelProps {
        section: navigator_vm.current,
        opacity: navigator_vm.panel_opacity,
        theme: theme_props,
    });

    let content = stack![
        backdrop,
        column![header, panel]
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let border_color = palette.foreground;
    let framed = container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            border: Border {
                color: border_color,
                width: FRAME_BORDER_WIDTH,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

    let background = palette.background;
    container(framed)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(FRAME_INSET)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
