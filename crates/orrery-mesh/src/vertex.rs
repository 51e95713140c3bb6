//! Interleaved vertex layout for uploading sphere meshes.
//!
//! | Offset | Size | Field    |
//! |--------|------|----------|
//! | 0      | 12   | position |
//! | 12     | 12   | normal   |
//! | 24     | 8    | uv       |
//! | 32     | 12   | color    |

use glam::{Vec2, Vec3};

/// One vertex of a sphere mesh, laid out for a vertex buffer.
///
/// Use `bytemuck::cast_slice(&mesh.interleaved())` to obtain the raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 3],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 44]);

impl SphereVertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
            color: color.to_array(),
        }
    }
}
