use std::f32::consts::PI;

use iced::{Point, Size};
use rand::Rng;

use super::errors::SceneError;

/// Particles spawn on a sphere of this radius.
const SPAWN_RADIUS: f32 = 10.0;
/// Particles are pulled back inside this distance from the sphere center.
const MAX_DISTANCE: f32 = 12.0;
/// Sphere center on the depth axis.
const CENTER_Z: f32 = -5.0;
/// Camera position on the depth axis, looking towards negative z.
const CAMERA_Z: f32 = 5.0;
const NEAR_PLANE: f32 = 0.1;
const FIELD_OF_VIEW_DEG: f32 = 75.0;
/// Share of particles drawn in the accent color.
const ACCENT_SHARE: f64 = 0.3;
const MAX_DRIFT: f32 = 0.002;
/// Pointer repulsion radius in normalized device coordinates.
const REPULSION_RADIUS: f32 = 0.5;
const REPULSION_FORCE: f32 = 0.02;
/// Reference frame rate the per-frame constants were tuned for.
const REFERENCE_FPS: f32 = 60.0;

/// A single star in the decorative field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Particle {
    pub(crate) position: [f32; 3],
    pub(crate) velocity: [f32; 3],
    pub(crate) size: f32,
    pub(crate) brightness: f32,
    pub(crate) accent: bool,
}

/// A particle projected onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Projected {
    pub(crate) point: Point,
    /// Position in normalized device coordinates.
    pub(crate) ndc: [f32; 2],
    pub(crate) depth: f32,
}

/// Generated particle cloud animated behind the content.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Spawn `count` particles on the sphere using `rng`.
    pub(crate) fn generate<R: Rng>(
        count: usize,
        rng: &mut R,
    ) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::Empty);
        }

        let particles = (0..count).map(|_| spawn(rng)).collect();
        Ok(Self { particles })
    }

    pub(crate) fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn len(&self) -> usize {
        self.particles.len()
    }

    /// Advance drift, pointer repulsion and the boundary pull by `dt`
    /// seconds. `pointer` is in normalized device coordinates.
    pub(crate) fn step(&mut self, dt: f32, pointer: [f32; 2], aspect: f32) {
        let frames = dt * REFERENCE_FPS;

        for particle in &mut self.particles {
            for axis in 0..3 {
                particle.position[axis] += particle.velocity[axis] * frames;
            }

            if let Some(ndc) = project_ndc(particle.position, 0.0, aspect) {
                let dx = ndc[0] - pointer[0];
                let dy = ndc[1] - pointer[1];
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < REPULSION_RADIUS {
                    let force = (REPULSION_RADIUS - dist) * REPULSION_FORCE;
                    particle.position[0] += dx * force * frames;
                    particle.position[1] += dy * force * frames;
                }
            }

            let dist = distance_from_center(particle.position);
            if dist > MAX_DISTANCE {
                let scale = MAX_DISTANCE / dist;
                let z = particle.position[2];
                particle.position[0] *= scale;
                particle.position[1] *= scale;
                particle.position[2] = (z - CENTER_Z) * scale + CENTER_Z;
            }
        }
    }
}

/// Distance from the sphere center, used to keep particles bounded.
pub(crate) fn distance_from_center(position: [f32; 3]) -> f32 {
    let [x, y, z] = position;
    (x * x + y * y + (z - CENTER_Z) * (z - CENTER_Z)).sqrt()
}

/// Project a world position rotated by `rotation` radians around the
/// vertical axis onto a viewport of `size`.
pub(crate) fn project(
    position: [f32; 3],
    rotation: f32,
    size: Size,
) -> Option<Projected> {
    let aspect = aspect_ratio(size);
    let ndc = project_ndc(position, rotation, aspect)?;
    let depth = CAMERA_Z - rotate_y(position, rotation)[2];

    Some(Projected {
        point: Point::new(
            (ndc[0] + 1.0) * 0.5 * size.width,
            (1.0 - ndc[1]) * 0.5 * size.height,
        ),
        ndc,
        depth,
    })
}

/// Width over height, falling back to 1 for degenerate sizes.
pub(crate) fn aspect_ratio(size: Size) -> f32 {
    if size.height > 0.0 && size.width > 0.0 {
        size.width / size.height
    } else {
        1.0
    }
}

fn project_ndc(
    position: [f32; 3],
    rotation: f32,
    aspect: f32,
) -> Option<[f32; 2]> {
    let [x, y, z] = rotate_y(position, rotation);
    let depth = CAMERA_Z - z;
    if depth <= NEAR_PLANE {
        return None;
    }

    let focal = 1.0 / (FIELD_OF_VIEW_DEG.to_radians() * 0.5).tan();
    Some([focal / aspect * x / depth, focal * y / depth])
}

fn rotate_y(position: [f32; 3], rotation: f32) -> [f32; 3] {
    if rotation == 0.0 {
        return position;
    }

    let [x, y, z] = position;
    let center = z - CENTER_Z;
    let (sin, cos) = rotation.sin_cos();
    [
        x * cos + center * sin,
        y,
        -x * sin + center * cos + CENTER_Z,
    ]
}

fn spawn<R: Rng>(rng: &mut R) -> Particle {
    let theta = rng.gen_range(0.0..2.0 * PI);
    let phi = rng.gen_range(-1.0_f32..1.0).acos();

    let position = [
        SPAWN_RADIUS * phi.sin() * theta.cos(),
        SPAWN_RADIUS * phi.sin() * theta.sin(),
        SPAWN_RADIUS * phi.cos() + CENTER_Z,
    ];
    let velocity = [
        rng.gen_range(-MAX_DRIFT * 0.5..MAX_DRIFT * 0.5),
        rng.gen_range(-MAX_DRIFT * 0.5..MAX_DRIFT * 0.5),
        rng.gen_range(-MAX_DRIFT * 0.5..MAX_DRIFT * 0.5),
    ];
    let accent = rng.gen_bool(ACCENT_SHARE);

    Particle {
        position,
        velocity,
        size: rng.gen_range(1.0..4.0),
        brightness: rng.gen_range(0.7..1.0),
        accent,
    }
}
