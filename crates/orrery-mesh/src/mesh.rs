//! Non-indexed triangle list with parallel per-vertex streams.

use glam::{Vec2, Vec3};

use crate::vertex::SphereVertex;

/// Color every vertex receives until a body assigns its own.
pub const DEFAULT_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// A triangulated surface stored as four parallel streams.
///
/// Every three consecutive vertices form one triangle. The streams always
/// have the same length: the only way to grow a mesh is
/// [`push_vertex`](Self::push_vertex), and the mutable accessors hand out
/// slices, never the vectors themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    colors: Vec<Vec3>,
}

impl Mesh {
    /// An empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty mesh with room for `vertices` entries in every stream.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    /// Append one vertex. Its color starts as [`DEFAULT_COLOR`].
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) {
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        self.colors.push(DEFAULT_COLOR);
    }

    /// Number of vertices (the length of every stream).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of triangles, i.e. `len() / 3`.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn positions_mut(&mut self) -> &mut [Vec3] {
        &mut self.positions
    }

    pub fn normals_mut(&mut self) -> &mut [Vec3] {
        &mut self.normals
    }

    /// Overwrite every vertex color with `color`.
    pub fn fill_color(&mut self, color: Vec3) {
        self.colors.fill(color);
    }

    /// Replace every normal with the outward radial direction from `center`,
    /// assuming all vertices lie on a sphere of `radius` around it.
    ///
    /// Uses `(p - center) / radius` rather than normalizing, so the result is
    /// unit length exactly when the vertex sits on that sphere.
    pub fn recompute_radial_normals(&mut self, center: Vec3, radius: f32) {
        let inv_radius = 1.0 / radius;
        for (normal, position) in self.normals.iter_mut().zip(&self.positions) {
            *normal = (*position - center) * inv_radius;
        }
    }

    /// Interleave the streams into GPU-ready vertices.
    pub fn interleaved(&self) -> Vec<SphereVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.uvs)
            .zip(&self.colors)
            .map(|(((p, n), uv), c)| SphereVertex::new(*p, *n, *uv, *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.push_vertex(Vec3::X, Vec3::X, Vec2::ZERO);
        mesh.push_vertex(Vec3::Y, Vec3::Y, Vec2::X);
        mesh.push_vertex(Vec3::Z, Vec3::Z, Vec2::Y);
        mesh
    }

    #[test]
    fn test_streams_stay_parallel() {
        let mesh = triangle();
        assert_eq!(mesh.len(), 3);
        assert_eq!(mesh.normals().len(), 3);
        assert_eq!(mesh.uvs().len(), 3);
        assert_eq!(mesh.colors().len(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_new_vertices_get_default_color() {
        let mesh = triangle();
        assert!(mesh.colors().iter().all(|c| *c == DEFAULT_COLOR));
    }

    #[test]
    fn test_fill_color_overwrites_all() {
        let mut mesh = triangle();
        let blue = Vec3::new(0.0, 0.0, 1.0);
        mesh.fill_color(blue);
        assert!(mesh.colors().iter().all(|c| *c == blue));
    }

    #[test]
    fn test_radial_normals_from_offset_center() {
        let mut mesh = Mesh::new();
        let center = Vec3::new(5.0, 0.0, 0.0);
        mesh.push_vertex(center + Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO, Vec2::ZERO);
        mesh.recompute_radial_normals(center, 2.0);
        assert!((mesh.normals()[0] - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_interleaved_matches_streams() {
        let mesh = triangle();
        let verts = mesh.interleaved();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[1].position, [0.0, 1.0, 0.0]);
        assert_eq!(verts[2].uv, [0.0, 1.0]);
        assert_eq!(verts[0].color, DEFAULT_COLOR.to_array());
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::with_capacity(12);
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert!(mesh.interleaved().is_empty());
    }
}
