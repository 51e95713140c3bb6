//! Latitude/longitude sphere tessellation.
//!
//! A point on the sphere is parametrized by its stack angle `u` (polar angle
//! from +Z) and sector angle `v` (azimuth around Z):
//!
//! ```text
//! x = r * sin(u) * cos(v)
//! y = r * sin(u) * sin(v)
//! z = r * cos(u)
//! ```
//!
//! Stacks run from the south pole (`u = π`) to the north pole (`u = 0`),
//! sectors from `v = 0` to `v = 2π`. Each (stack, sector) cell is a quad
//!
//! ```text
//! p3----p4      (stack i + 1)
//! |   / |
//! |  /  |
//! | /   |
//! p1----p2      (stack i)
//! ```
//!
//! split into the triangles `(p1, p3, p2)` and `(p2, p3, p4)`. Vertices are
//! emitted stack-major, sector-minor, first triangle then second, which is
//! the order renderers rely on for the implicit triangle grouping. Seen
//! from outside the sphere both triangles wind clockwise.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Smallest sector count that still closes a ring.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Smallest stack count that still spans pole to pole.
pub const MIN_STACK_COUNT: u32 = 2;

/// Sector count used for every body unless configured otherwise.
pub const DEFAULT_SECTOR_COUNT: u32 = 36;
/// Stack count used for every body unless configured otherwise.
pub const DEFAULT_STACK_COUNT: u32 = 18;

/// Validated parameters for sphere tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereMeshGenerator {
    sector_count: u32,
    stack_count: u32,
    radius: f32,
}

impl SphereMeshGenerator {
    /// Validate the subdivision counts and radius.
    pub fn new(sector_count: u32, stack_count: u32, radius: f32) -> Result<Self, MeshError> {
        if sector_count < MIN_SECTOR_COUNT {
            return Err(MeshError::TooFewSectors {
                min: MIN_SECTOR_COUNT,
                got: sector_count,
            });
        }
        if stack_count < MIN_STACK_COUNT {
            return Err(MeshError::TooFewStacks {
                min: MIN_STACK_COUNT,
                got: stack_count,
            });
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(MeshError::InvalidRadius(radius));
        }
        Ok(Self {
            sector_count,
            stack_count,
            radius,
        })
    }

    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of vertices [`generate`](Self::generate) will emit.
    pub fn vertex_count(&self) -> usize {
        6 * self.sector_count as usize * self.stack_count as usize
    }

    /// Tessellate the sphere.
    pub fn generate(&self) -> Mesh {
        let sectors = self.sector_count;
        let stacks = self.stack_count;
        let sector_step = TAU / sectors as f32;
        let stack_step = PI / stacks as f32;

        let mut mesh = Mesh::with_capacity(self.vertex_count());

        for i in 0..stacks {
            let stack_1 = PI - i as f32 * stack_step;
            let stack_2 = PI - (i + 1) as f32 * stack_step;
            let v_1 = i as f32 / stacks as f32;
            let v_2 = (i + 1) as f32 / stacks as f32;

            for j in 0..sectors {
                let sector_1 = j as f32 * sector_step;
                let sector_2 = (j + 1) as f32 * sector_step;
                let u_1 = j as f32 / sectors as f32;
                let u_2 = (j + 1) as f32 / sectors as f32;

                let p1 = self.corner(stack_1, sector_1, Vec2::new(u_1, v_1));
                let p3 = self.corner(stack_2, sector_1, Vec2::new(u_1, v_2));
                let p2 = self.corner(stack_1, sector_2, Vec2::new(u_2, v_1));
                let p4 = self.corner(stack_2, sector_2, Vec2::new(u_2, v_2));

                for (position, normal, uv) in [p1, p3, p2, p2, p3, p4] {
                    mesh.push_vertex(position, normal, uv);
                }
            }
        }

        debug!(
            sectors,
            stacks,
            radius = self.radius,
            triangles = mesh.triangle_count(),
            "Generated sphere mesh"
        );
        mesh
    }

    /// Position, normal and UV of one cell corner.
    fn corner(&self, stack_angle: f32, sector_angle: f32, uv: Vec2) -> (Vec3, Vec3, Vec2) {
        let xy = self.radius * stack_angle.sin();
        let position = Vec3::new(
            xy * sector_angle.cos(),
            xy * sector_angle.sin(),
            self.radius * stack_angle.cos(),
        );
        let normal = position * (1.0 / self.radius);
        (position, normal, uv)
    }
}

/// Validate the parameters and tessellate a sphere in one call.
pub fn generate_sphere(sector_count: u32, stack_count: u32, radius: f32) -> Result<Mesh, MeshError> {
    Ok(SphereMeshGenerator::new(sector_count, stack_count, radius)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_matches_subdivisions() {
        for (sectors, stacks) in [(3, 2), (4, 2), (7, 5), (36, 18)] {
            let mesh = generate_sphere(sectors, stacks, 1.0).unwrap();
            let expected = 6 * sectors as usize * stacks as usize;
            assert_eq!(mesh.len(), expected, "sectors={sectors} stacks={stacks}");
            assert_eq!(mesh.normals().len(), expected);
            assert_eq!(mesh.uvs().len(), expected);
            assert_eq!(mesh.colors().len(), expected);
        }
    }

    #[test]
    fn test_small_sphere_scenario() {
        let mesh = generate_sphere(4, 2, 1.0).unwrap();
        assert_eq!(mesh.len(), 48);

        // Stack 1, sector 0: first vertex of the cell sits on the equator at v = 0.
        let index = 4 * 6;
        let position = mesh.positions()[index];
        let normal = mesh.normals()[index];
        assert!((position - Vec3::X).length() < 1e-6, "position = {position}");
        assert!((normal - Vec3::X).length() < 1e-6, "normal = {normal}");

        // Same point as the upper ring of the stack below.
        assert!((mesh.positions()[1] - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_normals_are_unit_and_radial() {
        let radius = 2.5;
        let mesh = generate_sphere(12, 7, radius).unwrap();
        for (pos, normal) in mesh.positions().iter().zip(mesh.normals()) {
            assert!((normal.length() - 1.0).abs() < 1e-5, "normal length = {}", normal.length());
            assert!((*pos / radius - *normal).length() < 1e-6);
        }
    }

    #[test]
    fn test_vertices_on_sphere() {
        let radius = 3.0;
        let mesh = generate_sphere(10, 6, radius).unwrap();
        for pos in mesh.positions() {
            assert!((pos.length() - radius).abs() < 1e-5, "length = {}", pos.length());
        }
    }

    #[test]
    fn test_uvs_in_range() {
        let mesh = generate_sphere(36, 18, 1.0).unwrap();
        for uv in mesh.uvs() {
            assert!((0.0..=1.0).contains(&uv.x), "U out of range: {}", uv.x);
            assert!((0.0..=1.0).contains(&uv.y), "V out of range: {}", uv.y);
        }
    }

    #[test]
    fn test_starts_at_south_pole_and_ends_at_north_pole() {
        let mesh = generate_sphere(8, 4, 1.0).unwrap();
        let first = mesh.positions()[0];
        let last = mesh.positions()[mesh.len() - 1];
        assert!((first - Vec3::NEG_Z).length() < 1e-6, "first = {first}");
        assert!((last - Vec3::Z).length() < 1e-6, "last = {last}");
    }

    #[test]
    fn test_consistent_winding() {
        let mesh = generate_sphere(16, 8, 1.0).unwrap();
        for tri in mesh.positions().chunks(3) {
            let face = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            if face.length() < 1e-6 {
                // Pole cells collapse one triangle to a sliver.
                continue;
            }
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(face.dot(centroid) < 0.0, "triangle {tri:?} winds the other way");
        }
    }

    #[test]
    fn test_cell_order_is_stack_major() {
        let mesh = generate_sphere(4, 3, 1.0).unwrap();
        // Second cell of the first stack starts at sector angle π/2.
        let uv = mesh.uvs()[6];
        assert!((uv - Vec2::new(0.25, 0.0)).length() < 1e-6, "uv = {uv}");
        // First cell of the second stack.
        let uv = mesh.uvs()[4 * 6];
        assert!((uv - Vec2::new(0.0, 1.0 / 3.0)).length() < 1e-6, "uv = {uv}");
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert_eq!(
            generate_sphere(2, 4, 1.0).unwrap_err(),
            MeshError::TooFewSectors { min: 3, got: 2 }
        );
        assert_eq!(
            generate_sphere(4, 1, 1.0).unwrap_err(),
            MeshError::TooFewStacks { min: 2, got: 1 }
        );
        assert_eq!(generate_sphere(4, 4, 0.0).unwrap_err(), MeshError::InvalidRadius(0.0));
        assert!(matches!(
            generate_sphere(4, 4, f32::NAN),
            Err(MeshError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_generator_reports_counts() {
        let generator = SphereMeshGenerator::new(36, 18, 1.0).unwrap();
        assert_eq!(generator.vertex_count(), 3888);
        assert_eq!(generator.generate().triangle_count(), 1296);
    }
}
