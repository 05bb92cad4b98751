use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{Color, Element, Length, Point, Rectangle, Size, Theme, mouse};

use super::model::{BackgroundViewModel, CONNECTION_DISTANCE, MAX_CONNECTIONS};
use super::scene::{ParticleField, Projected, project};
use crate::theme::{AppTheme, FolioPalette, faded};

const BACKDROP_BANDS: usize = 32;
const GLOW_RINGS: usize = 12;
/// Glow radius relative to the shorter window side.
const GLOW_RADIUS: f32 = 0.45;
/// How far the glow leans towards the pointer while the visitor is active.
const GLOW_OFFSET: f32 = 0.12;
const GLOW_ALPHA: f32 = 0.035;
/// Screen size of a particle of unit size seen from unit distance.
const PARTICLE_SCALE: f32 = 6.0;
const CONNECTION_ALPHA: f32 = 0.12;

/// Props for the decorative background layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackgroundViewProps<'a> {
    pub(crate) vm: BackgroundViewModel<'a>,
    /// Idle flag as reported by the idle detector.
    pub(crate) idle: bool,
}

/// Render the backdrop gradient, the glow and the particle field.
pub(crate) fn view<'a, Message: 'a>(
    props: BackgroundViewProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    Canvas::new(Backdrop {
        vm: props.vm,
        idle: props.idle,
    })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

struct Backdrop<'a> {
    vm: BackgroundViewModel<'a>,
    idle: bool,
}

impl<Message> canvas::Program<Message> for Backdrop<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let theme = AppTheme::new(self.vm.theme);
        let palette = theme.palette();
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        draw_backdrop(&mut frame, palette, size);
        draw_glow(&mut frame, palette, size, self.idle, self.vm.pointer);
        if let Some(field) = self.vm.field {
            let projected: Vec<Option<Projected>> = field
                .particles()
                .iter()
                .map(|particle| {
                    project(particle.position, self.vm.rotation, size)
                })
                .collect();

            draw_connections(&mut frame, palette, field, &projected);
            for (particle, projected) in
                field.particles().iter().zip(&projected)
            {
                let Some(projected) = projected else {
                    continue;
                };
                let radius =
                    (particle.size * PARTICLE_SCALE / projected.depth).max(0.5);
                let base = if particle.accent {
                    palette.accent
                } else {
                    palette.particle
                };
                let color =
                    faded(base, particle.brightness * palette.backdrop_opacity);
                frame.fill(&Path::circle(projected.point, radius), color);
            }
        }

        vec![frame.into_geometry()]
    }
}

fn draw_backdrop(frame: &mut Frame, palette: &FolioPalette, size: Size) {
    let band_height = size.height / BACKDROP_BANDS as f32;
    for band in 0..BACKDROP_BANDS {
        let t = band as f32 / (BACKDROP_BANDS - 1) as f32;
        let color = mix(palette.backdrop_top, palette.backdrop_bottom, t);
        let path = Path::rectangle(
            Point::new(0.0, band as f32 * band_height),
            Size::new(size.width, band_height + 1.0),
        );
        frame.fill(&path, color);
    }
}

fn draw_glow(
    frame: &mut Frame,
    palette: &FolioPalette,
    size: Size,
    idle: bool,
    pointer: Point,
) {
    let extent = size.width.min(size.height);
    let mut center = Point::new(size.width * 0.5, size.height * 0.5);
    if !idle {
        let angle = (pointer.y - 0.5).atan2(pointer.x - 0.5);
        center.x += angle.cos() * GLOW_OFFSET * extent;
        center.y += angle.sin() * GLOW_OFFSET * extent;
    }

    let max_radius = extent * GLOW_RADIUS;
    for ring in 0..GLOW_RINGS {
        let t = ring as f32 / GLOW_RINGS as f32;
        let radius = max_radius * (1.0 - t);
        let tint = mix(palette.accent, palette.accent_deep, t);
        let color = faded(tint, GLOW_ALPHA * palette.backdrop_opacity);
        frame.fill(&Path::circle(center, radius), color);
    }
}

fn draw_connections(
    frame: &mut Frame,
    palette: &FolioPalette,
    field: &ParticleField,
    projected: &[Option<Projected>],
) {
    let particles = field.particles();
    let stroke_color = faded(
        palette.particle,
        CONNECTION_ALPHA * palette.backdrop_opacity,
    );
    let mut drawn = 0;

    for (i, a) in particles.iter().enumerate() {
        let Some(from) = projected[i] else {
            continue;
        };
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            if drawn >= MAX_CONNECTIONS {
                return;
            }
            let Some(to) = projected[j] else {
                continue;
            };
            let dx = a.position[0] - b.position[0];
            let dy = a.position[1] - b.position[1];
            let dz = a.position[2] - b.position[2];
            if (dx * dx + dy * dy + dz * dz).sqrt() >= CONNECTION_DISTANCE {
                continue;
            }

            frame.stroke(
                &Path::line(from.point, to.point),
                Stroke::default().with_color(stroke_color).with_width(0.5),
            );
            drawn += 1;
        }
    }
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: from.r + (to.r - from.r) * t,
        g: from.g + (to.g - from.g) * t,
        b: from.b + (to.b - from.b) * t,
        a: from.a + (to.a - from.a) * t,
    }
}
