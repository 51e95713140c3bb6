//! Per-body orbital and rotational state.

use std::f32::consts::TAU;

use glam::Vec3;
use orrery_mesh::{DEFAULT_COLOR, Mesh};

use crate::orbit::DEFAULT_SPIN_RATE;
use crate::rest_pose::RestPose;
use crate::transform;

/// Smallest scaling factor a body is rendered with. Smaller values,
/// including zero, negative and NaN, are clamped up to this.
pub const MIN_SCALING_FACTOR: f32 = 1e-6;

/// How a body moves and which transform builds its frame mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyMotion {
    /// Scales in place around the origin (sun, skybox).
    Fixed,
    /// Spins about its own vertical axis and optionally revolves about
    /// another body.
    Orbiting {
        /// Spin speed relative to a primary body (1.0 = same rate).
        relative_rate: f32,
        /// Name of the body revolved around, if any.
        pivot: Option<String>,
    },
}

/// One celestial object.
///
/// `mesh` is always a function of the rest pose and the current
/// `scaling_factor`, `rotation_angle` and `position`;
/// [`update_mesh`](Self::update_mesh) rebuilds it from scratch.
#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    scaling_factor: f32,
    /// Accumulated self-rotation in radians, never wrapped.
    pub rotation_angle: f32,
    /// World-space center.
    pub position: Vec3,
    /// Angular rate constant `k` used by [`orbit::advance_rotation`](crate::orbit::advance_rotation).
    pub spin_rate: f32,
    pub color: Vec3,
    pub motion: BodyMotion,
    rest: RestPose,
    mesh: Mesh,
}

impl Body {
    pub fn new(name: impl Into<String>, rest: RestPose, motion: BodyMotion) -> Self {
        let mesh = rest.mesh().clone();
        Self {
            name: name.into(),
            scaling_factor: 1.0,
            rotation_angle: 0.0,
            position: Vec3::ZERO,
            spin_rate: DEFAULT_SPIN_RATE,
            color: DEFAULT_COLOR,
            motion,
            rest,
            mesh,
        }
    }

    pub fn with_scaling_factor(mut self, scaling_factor: f32) -> Self {
        self.set_scaling_factor(scaling_factor);
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Radius of the rest-pose sphere.
    pub fn radius(&self) -> f32 {
        self.rest.radius()
    }

    pub fn scaling_factor(&self) -> f32 {
        self.scaling_factor
    }

    /// Set the render scale, clamping degenerate values to
    /// [`MIN_SCALING_FACTOR`].
    pub fn set_scaling_factor(&mut self, scaling_factor: f32) {
        self.scaling_factor = transform::sanitize_scale(scaling_factor);
    }

    pub fn rest_pose(&self) -> &RestPose {
        &self.rest
    }

    /// The buffers produced by the last [`update_mesh`](Self::update_mesh).
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Rotation angle wrapped into `[0, 2π)` for display.
    pub fn display_angle(&self) -> f32 {
        self.rotation_angle.rem_euclid(TAU)
    }

    /// Rebuild the frame mesh from the rest pose and current state.
    pub fn update_mesh(&mut self) {
        match self.motion {
            BodyMotion::Fixed => {
                transform::fixed_center_transform(&self.rest, self.scaling_factor, &mut self.mesh);
            }
            BodyMotion::Orbiting { .. } => {
                transform::orbiting_transform(
                    &self.rest,
                    self.scaling_factor,
                    self.rotation_angle,
                    self.position,
                    &mut self.mesh,
                );
            }
        }
        self.mesh.fill_color(self.color);
    }
}
