//! A renderer that records uploads instead of drawing.

use glam::Vec3;
use orrery_body::Renderer;
use orrery_mesh::{Mesh, SphereVertex};
use tracing::debug;

/// What one body has sent to the renderer so far.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyStats {
    pub name: String,
    pub draws: u64,
    /// Triangles in the most recent draw.
    pub triangles: usize,
    /// Bytes of interleaved vertex data in the most recent draw.
    pub bytes: usize,
    /// Mean vertex position of the most recent draw.
    pub centroid: Vec3,
}

/// Interleaves every mesh as it would for a vertex buffer upload and keeps
/// per-body statistics.
#[derive(Debug, Default)]
pub struct StatsRenderer {
    log_frames: bool,
    bodies: Vec<BodyStats>,
    uploaded_bytes: u64,
}

impl StatsRenderer {
    pub fn new(log_frames: bool) -> Self {
        Self {
            log_frames,
            ..Self::default()
        }
    }

    pub fn bodies(&self) -> &[BodyStats] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&BodyStats> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Total bytes uploaded across all draws.
    pub fn uploaded_bytes(&self) -> u64 {
        self.uploaded_bytes
    }
}

impl Renderer for StatsRenderer {
    fn draw(&mut self, name: &str, mesh: &Mesh) {
        let vertices: Vec<SphereVertex> = mesh.interleaved();
        let bytes = bytemuck::cast_slice::<SphereVertex, u8>(&vertices).len();
        let centroid = if mesh.is_empty() {
            Vec3::ZERO
        } else {
            mesh.positions().iter().copied().sum::<Vec3>() / mesh.len() as f32
        };

        let index = match self.bodies.iter().position(|b| b.name == name) {
            Some(index) => index,
            None => {
                self.bodies.push(BodyStats {
                    name: name.to_string(),
                    draws: 0,
                    triangles: 0,
                    bytes: 0,
                    centroid: Vec3::ZERO,
                });
                self.bodies.len() - 1
            }
        };
        let stats = &mut self.bodies[index];
        stats.draws += 1;
        stats.triangles = mesh.triangle_count();
        stats.bytes = bytes;
        stats.centroid = centroid;
        self.uploaded_bytes += bytes as u64;

        if self.log_frames {
            debug!(
                body = name,
                triangles = stats.triangles,
                bytes,
                "Drew body at ({:.3}, {:.3}, {:.3})",
                centroid.x,
                centroid.y,
                centroid.z
            );
        }
    }
}
