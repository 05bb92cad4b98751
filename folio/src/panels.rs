use iced::widget::{Column, Row, Space, button, column, container, row, text};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::app::AppEvent;
use crate::content::{
    BIO, CONTACT_BLURB, CONTACT_HEADING, CONTACTS, ContactLink, INFO_HEADING,
    OWNER_NAME, PHILOSOPHY, PROJECTS, PROJECTS_HEADING, Project, TAGLINE,
    TOOLS, TOOLS_HEADING,
};
use crate::theme::{FolioPalette, ThemeProps, faded};
use crate::widgets::navigator::Section;

const TITLE_SIZE: f32 = 44.0;
const HEADING_SIZE: f32 = 34.0;
const CARD_TITLE_SIZE: f32 = 22.0;
const BODY_SIZE: f32 = 15.0;
const SMALL_SIZE: f32 = 13.0;
const CARD_PADDING: u16 = 24;
const CARD_SPACING: f32 = 20.0;
const CARD_WIDTH: f32 = 420.0;
const TOOL_CHIP_WIDTH: f32 = 140.0;
const TOOLS_PER_ROW: usize = 5;
const HAIRLINE: f32 = 0.5;

/// Props for the visible content panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelProps<'a> {
    pub(crate) section: Section,
    /// Fade applied to every element of the panel, `0..=1`.
    pub(crate) opacity: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the panel for the current section.
pub(crate) fn view(
    props: PanelProps<'_>,
) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let ink = Ink {
        palette: props.theme.palette(),
        opacity: props.opacity.clamp(0.0, 1.0),
    };

    let body = match props.section {
        Section::Home => home(ink),
        Section::Projects => projects(ink),
        Section::Info => info(ink),
        Section::Contact => contact(ink),
    };

    container(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(32.0)
        .into()
}

/// Palette with the panel fade folded in.
#[derive(Clone, Copy)]
struct Ink<'a> {
    palette: &'a FolioPalette,
    opacity: f32,
}

impl Ink<'_> {
    fn text(&self, emphasis: f32) -> Color {
        faded(self.palette.foreground, emphasis * self.opacity)
    }

    fn border(&self) -> Color {
        faded(self.palette.border, self.opacity)
    }

    fn card(&self) -> Color {
        faded(self.palette.card, self.opacity)
    }
}

fn home(ink: Ink<'_>) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let heading = column![
        text(OWNER_NAME).size(TITLE_SIZE).color(ink.text(1.0)),
        text(TAGLINE).size(BODY_SIZE).color(ink.text(0.8)),
    ]
    .spacing(8.0)
    .align_x(alignment::Horizontal::Center);

    let bio = container(
        text(BIO)
            .size(SMALL_SIZE)
            .line_height(1.6)
            .color(ink.text(0.7)),
    )
    .max_width(240.0);

    column![heading, Space::new().height(Length::Fill), bio]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn projects(ink: Ink<'_>) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let mut grid = Column::new().spacing(CARD_SPACING);
    for pair in PROJECTS.chunks(2) {
        let mut line = Row::new().spacing(CARD_SPACING);
        for project in pair {
            line = line.push(project_card(*project, ink));
        }
        grid = grid.push(line);
    }

    column![
        section_heading(PROJECTS_HEADING, ink),
        container(grid).center(Length::Fill),
    ]
    .spacing(24.0)
    .into()
}

fn project_card(
    project: Project,
    ink: Ink<'_>,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let title_color = ink.text(1.0);
    let body_color = ink.text(0.6);
    let border = ink.border();
    let card = ink.card();

    let content = column![
        text(project.title)
            .size(CARD_TITLE_SIZE)
            .color(title_color),
        text(project.description)
            .size(BODY_SIZE)
            .line_height(1.5)
            .color(body_color),
    ]
    .spacing(8.0);

    button(content)
        .on_press(AppEvent::OpenLink(project.url))
        .width(CARD_WIDTH)
        .padding(CARD_PADDING)
        .style(move |_, status| {
            let border_width = match status {
                button::Status::Hovered | button::Status::Pressed => 1.0,
                _ => HAIRLINE,
            };

            button::Style {
                background: Some(card.into()),
                text_color: title_color,
                border: Border {
                    color: border,
                    width: border_width,
                    radius: 0.0.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

fn info(ink: Ink<'_>) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let [lead, approach] = PHILOSOPHY;
    let philosophy = column![
        text(lead)
            .size(BODY_SIZE + 1.0)
            .line_height(1.6)
            .align_x(alignment::Horizontal::Center)
            .color(ink.text(0.8)),
        text(approach)
            .size(SMALL_SIZE + 1.0)
            .line_height(1.6)
            .align_x(alignment::Horizontal::Center)
            .color(ink.text(0.7)),
    ]
    .spacing(24.0)
    .max_width(640.0)
    .align_x(alignment::Horizontal::Center);

    let mut tools = Column::new()
        .spacing(12.0)
        .align_x(alignment::Horizontal::Center);
    for chunk in TOOLS.chunks(TOOLS_PER_ROW) {
        let mut line = Row::new().spacing(12.0);
        for tool in chunk {
            line = line.push(tool_chip(*tool, ink));
        }
        tools = tools.push(line);
    }

    let body = column![
        philosophy,
        text(TOOLS_HEADING).size(11.0).color(ink.text(0.5)),
        tools,
    ]
    .spacing(32.0)
    .align_x(alignment::Horizontal::Center);

    column![
        section_heading(INFO_HEADING, ink),
        container(body).center(Length::Fill),
    ]
    .spacing(24.0)
    .into()
}

fn tool_chip(
    tool: &'static str,
    ink: Ink<'_>,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let border = ink.border();
    let card = ink.card();

    container(text(tool).size(SMALL_SIZE).color(ink.text(1.0)))
        .width(TOOL_CHIP_WIDTH)
        .padding([10.0, 16.0])
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            background: Some(card.into()),
            border: Border {
                color: border,
                width: HAIRLINE,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn contact(ink: Ink<'_>) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let mut links = Column::new()
        .spacing(16.0)
        .align_x(alignment::Horizontal::Right);
    for link in CONTACTS {
        links = links.push(contact_link(link, ink));
    }

    let block = column![
        text(CONTACT_HEADING).size(HEADING_SIZE).color(ink.text(1.0)),
        text(CONTACT_BLURB)
            .size(SMALL_SIZE)
            .line_height(1.6)
            .align_x(alignment::Horizontal::Right)
            .color(ink.text(0.7)),
        links,
    ]
    .spacing(16.0)
    .max_width(320.0)
    .align_x(alignment::Horizontal::Right);

    container(block)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .into()
}

fn contact_link(
    link: ContactLink,
    ink: Ink<'_>,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    let label = ink.text(1.0);
    let glyph = ink.text(0.6);

    let content = row![
        text(link.label).size(SMALL_SIZE).color(label),
        text(link.kind.glyph()).size(SMALL_SIZE).color(glyph),
    ]
    .spacing(12.0)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(AppEvent::OpenLink(link.url))
        .padding(0)
        .style(move |_, status| {
            let text_color = match status {
                button::Status::Hovered | button::Status::Pressed => label,
                _ => faded(label, 0.85),
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

fn section_heading(
    title: &'static str,
    ink: Ink<'_>,
) -> Element<'static, AppEvent, Theme, iced::Renderer> {
    container(text(title).size(HEADING_SIZE).color(ink.text(1.0)))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
