//! The undeformed body-local mesh every frame is derived from.

use glam::{Mat3, Vec2, Vec3};
use orrery_mesh::{Mesh, SphereMeshGenerator};

use crate::error::BodyError;

/// A pair of rotations about Z and X, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixupAngles {
    pub z_deg: f32,
    pub x_deg: f32,
}

impl FixupAngles {
    pub const IDENTITY: Self = Self::new(0.0, 0.0);

    pub const fn new(z_deg: f32, x_deg: f32) -> Self {
        Self { z_deg, x_deg }
    }

    fn rz(&self) -> Mat3 {
        Mat3::from_rotation_z(self.z_deg.to_radians())
    }

    fn rx(&self) -> Mat3 {
        Mat3::from_rotation_x(self.x_deg.to_radians())
    }
}

/// One-time orientation corrections baked into a rest pose.
///
/// The generator builds spheres with their poles on Z. `straighten` turns the
/// texture upright, `axial_tilt` leans the spin axis, and `center` lets a
/// backdrop (the skybox) be re-aimed independently. They are applied in that
/// order, once, when the [`RestPose`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFixups {
    /// Applied as `Rx · Rz`.
    pub straighten: FixupAngles,
    /// Applied as `Rz · Rx`.
    pub axial_tilt: FixupAngles,
    /// Applied as `Rz · Rx`.
    pub center: FixupAngles,
}

impl OrientationFixups {
    /// No correction at all.
    pub const NONE: Self = Self {
        straighten: FixupAngles::IDENTITY,
        axial_tilt: FixupAngles::IDENTITY,
        center: FixupAngles::IDENTITY,
    };

    pub fn straighten_matrix(&self) -> Mat3 {
        self.straighten.rx() * self.straighten.rz()
    }

    pub fn axial_tilt_matrix(&self) -> Mat3 {
        self.axial_tilt.rz() * self.axial_tilt.rx()
    }

    pub fn center_matrix(&self) -> Mat3 {
        self.center.rz() * self.center.rx()
    }

    /// All three corrections as one rotation.
    pub fn matrix(&self) -> Mat3 {
        self.center_matrix() * self.axial_tilt_matrix() * self.straighten_matrix()
    }
}

impl Default for OrientationFixups {
    fn default() -> Self {
        Self {
            straighten: FixupAngles::new(75.0, -90.0),
            axial_tilt: FixupAngles::new(-23.0, 10.0),
            center: FixupAngles::IDENTITY,
        }
    }
}

/// A body's mesh in its own unit frame, after the one-time fixups.
///
/// There is no mutable access: once built, a rest pose only serves as the
/// input of the per-frame transforms, so the fixups cannot be applied twice.
#[derive(Debug, Clone, PartialEq)]
pub struct RestPose {
    mesh: Mesh,
    radius: f32,
}

impl RestPose {
    /// Generate the sphere and apply `fixups`.
    pub fn generate(generator: &SphereMeshGenerator, fixups: &OrientationFixups) -> Self {
        Self::orient(generator.generate(), generator.radius(), fixups)
    }

    /// Adopt an already generated sphere of `radius` centered at the origin.
    pub fn from_mesh(mesh: Mesh, radius: f32, fixups: &OrientationFixups) -> Result<Self, BodyError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BodyError::InvalidRadius(radius));
        }
        Ok(Self::orient(mesh, radius, fixups))
    }

    fn orient(mut mesh: Mesh, radius: f32, fixups: &OrientationFixups) -> Self {
        let rotation = fixups.matrix();
        for position in mesh.positions_mut() {
            *position = rotation * *position;
        }
        mesh.recompute_radial_normals(Vec3::ZERO, radius);
        Self { mesh, radius }
    }

    /// Sphere radius the pose was generated with.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn positions(&self) -> &[Vec3] {
        self.mesh.positions()
    }

    pub fn normals(&self) -> &[Vec3] {
        self.mesh.normals()
    }

    pub fn uvs(&self) -> &[Vec2] {
        self.mesh.uvs()
    }

    pub fn len(&self) -> usize {
        self.mesh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mesh.is_empty()
    }
}
