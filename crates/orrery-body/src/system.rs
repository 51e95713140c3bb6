//! A set of bodies advanced and rendered together each frame.

use std::collections::HashMap;

use glam::Vec3;
use orrery_mesh::{DEFAULT_COLOR, Mesh, SphereMeshGenerator};
use tracing::debug;

use crate::body::{Body, BodyMotion};
use crate::error::BodyError;
use crate::flags::SimulationFlags;
use crate::orbit::{self, DEFAULT_SPIN_RATE};
use crate::rest_pose::{OrientationFixups, RestPose};

/// Consumer of the per-frame buffers.
///
/// `mesh` holds four equal-length streams; every three consecutive vertices
/// are one triangle. Triangles wind clockwise seen from outside the body, so
/// a backend that culls back faces must set its front face to clockwise.
pub trait Renderer {
    fn draw(&mut self, name: &str, mesh: &Mesh);
}

/// Initial placement relative to an earlier body.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub reference: String,
    pub distance: f32,
    /// Radians.
    pub pitch: f32,
    /// Radians.
    pub yaw: f32,
}

/// Everything needed to build one [`Body`].
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: String,
    pub radius: f32,
    pub sector_count: u32,
    pub stack_count: u32,
    pub scaling_factor: f32,
    pub spin_rate: f32,
    pub color: Vec3,
    pub fixups: OrientationFixups,
    pub motion: BodyMotion,
    pub placement: Option<Placement>,
}

impl BodySpec {
    /// A unit sphere at the origin that only scales.
    pub fn fixed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            radius: 1.0,
            sector_count: orrery_mesh::DEFAULT_SECTOR_COUNT,
            stack_count: orrery_mesh::DEFAULT_STACK_COUNT,
            scaling_factor: 1.0,
            spin_rate: DEFAULT_SPIN_RATE,
            color: DEFAULT_COLOR,
            fixups: OrientationFixups::default(),
            motion: BodyMotion::Fixed,
            placement: None,
        }
    }
}

/// All bodies of the scene in draw order.
#[derive(Debug, Clone, Default)]
pub struct SolarSystem {
    bodies: Vec<Body>,
    pivots: Vec<Option<usize>>,
}

impl SolarSystem {
    /// Generate every body's rest pose and resolve placements and pivots.
    ///
    /// Placements may only reference bodies listed earlier; pivots may
    /// reference any other body.
    pub fn from_specs(specs: &[BodySpec]) -> Result<Self, BodyError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(specs.len());
        let mut bodies: Vec<Body> = Vec::with_capacity(specs.len());

        for spec in specs {
            if index.contains_key(spec.name.as_str()) {
                return Err(BodyError::DuplicateName(spec.name.clone()));
            }

            let generator = SphereMeshGenerator::new(spec.sector_count, spec.stack_count, spec.radius)
                .map_err(|source| BodyError::Mesh {
                    name: spec.name.clone(),
                    source,
                })?;
            let rest = RestPose::generate(&generator, &spec.fixups);

            let position = match &spec.placement {
                None => Vec3::ZERO,
                Some(_) if spec.motion == BodyMotion::Fixed => {
                    return Err(BodyError::PlacedFixedBody(spec.name.clone()));
                }
                Some(placement) => {
                    if placement.reference == spec.name {
                        return Err(BodyError::SelfReference(spec.name.clone()));
                    }
                    let reference = index
                        .get(placement.reference.as_str())
                        .map(|&i| bodies[i].position)
                        .ok_or_else(|| BodyError::UnknownReference {
                            body: spec.name.clone(),
                            reference: placement.reference.clone(),
                        })?;
                    orbit::place_on_inclined_orbit(
                        reference,
                        placement.distance,
                        placement.pitch,
                        placement.yaw,
                    )
                }
            };

            let mut body = Body::new(spec.name.clone(), rest, spec.motion.clone())
                .with_scaling_factor(spec.scaling_factor)
                .with_spin_rate(spec.spin_rate)
                .with_color(spec.color)
                .with_position(position);
            body.update_mesh();

            debug!(
                name = %spec.name,
                scale = body.scaling_factor(),
                x = position.x,
                y = position.y,
                z = position.z,
                vertices = body.mesh().len(),
                "Created body"
            );

            index.insert(spec.name.as_str(), bodies.len());
            bodies.push(body);
        }

        let mut pivots = Vec::with_capacity(bodies.len());
        for spec in specs {
            let pivot = match &spec.motion {
                BodyMotion::Orbiting {
                    pivot: Some(pivot), ..
                } => {
                    if *pivot == spec.name {
                        return Err(BodyError::SelfReference(spec.name.clone()));
                    }
                    let i = index.get(pivot.as_str()).copied().ok_or_else(|| {
                        BodyError::UnknownReference {
                            body: spec.name.clone(),
                            reference: pivot.clone(),
                        }
                    })?;
                    Some(i)
                }
                _ => None,
            };
            pivots.push(pivot);
        }

        Ok(Self { bodies, pivots })
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advance spin and revolution of every orbiting body by one tick.
    ///
    /// Pivot positions are sampled before anything moves, so the result
    /// does not depend on body order.
    pub fn step(&mut self, flags: &SimulationFlags) {
        let pivots: Vec<Option<Vec3>> = self
            .pivots
            .iter()
            .map(|pivot| pivot.map(|i| self.bodies[i].position))
            .collect();

        for (body, pivot) in self.bodies.iter_mut().zip(pivots) {
            let BodyMotion::Orbiting { relative_rate, .. } = body.motion else {
                continue;
            };
            if flags.rotation() {
                orbit::advance_rotation(body, flags.speed(), relative_rate);
            }
            if flags.orbit()
                && let Some(pivot) = pivot
            {
                orbit::advance_orbit(body, pivot, flags.speed());
            }
        }
    }

    /// Recompute every body's mesh and hand it to `renderer`, in order.
    pub fn render<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        for body in &mut self.bodies {
            body.update_mesh();
            renderer.draw(body.name(), body.mesh());
        }
    }

    /// One frame: [`step`](Self::step) then [`render`](Self::render).
    pub fn frame<R: Renderer + ?Sized>(&mut self, flags: &SimulationFlags, renderer: &mut R) {
        self.step(flags);
        self.render(renderer);
    }
}
