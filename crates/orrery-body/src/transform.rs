//! Rest pose → world-space mesh.
//!
//! Orbiting bodies use `T · R · S`: uniform scale, then a right-handed
//! rotation about +Y by the spin angle, then a translation to the body's
//! position. Fixed bodies use the scale alone. In both cases normals are not
//! carried through the matrix; they are recomputed as the exact outward
//! radial direction from the body's center, which is what rotating the
//! rest normal would give for a uniform scale.

use glam::{Mat4, Vec3};
use orrery_mesh::Mesh;
use tracing::trace;

use crate::body::MIN_SCALING_FACTOR;
use crate::rest_pose::RestPose;

/// Clamp a scaling factor to at least [`MIN_SCALING_FACTOR`].
pub fn sanitize_scale(scaling_factor: f32) -> f32 {
    if scaling_factor >= MIN_SCALING_FACTOR {
        scaling_factor
    } else {
        trace!(scaling_factor, "Clamping degenerate scaling factor");
        MIN_SCALING_FACTOR
    }
}

/// `T(position) · Ry(angle) · S(scale)`.
pub fn orbiting_matrix(scaling_factor: f32, rotation_angle: f32, position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_rotation_y(rotation_angle)
        * Mat4::from_scale(Vec3::splat(scaling_factor))
}

/// `S(scale)`.
pub fn fixed_center_matrix(scaling_factor: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(scaling_factor))
}

/// Transform `rest` into `out` for a body that spins and revolves.
///
/// `out` must have been cloned from the rest pose's mesh (same length).
pub fn orbiting_transform(
    rest: &RestPose,
    scaling_factor: f32,
    rotation_angle: f32,
    position: Vec3,
    out: &mut Mesh,
) {
    let scale = sanitize_scale(scaling_factor);
    let model = orbiting_matrix(scale, rotation_angle, position);
    apply(rest, &model, position, scale, out);
}

/// Transform `rest` into `out` for a body that only scales about the origin.
pub fn fixed_center_transform(rest: &RestPose, scaling_factor: f32, out: &mut Mesh) {
    let scale = sanitize_scale(scaling_factor);
    let model = fixed_center_matrix(scale);
    apply(rest, &model, Vec3::ZERO, scale, out);
}

fn apply(rest: &RestPose, model: &Mat4, center: Vec3, scale: f32, out: &mut Mesh) {
    debug_assert_eq!(rest.len(), out.len(), "frame mesh must mirror the rest pose");
    for (world, local) in out.positions_mut().iter_mut().zip(rest.positions()) {
        *world = model.transform_point3(*local);
    }
    out.recompute_radial_normals(center, rest.radius() * scale);
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::rest_pose::OrientationFixups;
    use orrery_mesh::{SphereMeshGenerator, generate_sphere};

    fn rest(radius: f32) -> RestPose {
        let generator = SphereMeshGenerator::new(12, 6, radius).unwrap();
        RestPose::generate(&generator, &OrientationFixups::default())
    }

    #[test]
    fn test_fixed_center_scales_magnitude() {
        let rest = rest(1.0);
        let mut out = rest.mesh().clone();
        fixed_center_transform(&rest, 3.0, &mut out);
        for (world, local) in out.positions().iter().zip(rest.positions()) {
            assert!((world.length() - 3.0 * local.length()).abs() < 1e-5);
            assert!((*world - *local * 3.0).length() < 1e-5);
        }
        for (world, normal) in out.positions().iter().zip(out.normals()) {
            assert!((normal.length() - 1.0).abs() < 1e-5);
            assert!((world.normalize() - *normal).length() < 1e-5);
        }
    }

    #[test]
    fn test_orbiting_without_spin_or_offset_is_pure_scale() {
        let rest = rest(1.0);
        let mut orbiting = rest.mesh().clone();
        let mut fixed = rest.mesh().clone();
        orbiting_transform(&rest, 0.25, 0.0, Vec3::ZERO, &mut orbiting);
        fixed_center_transform(&rest, 0.25, &mut fixed);
        for (a, b) in orbiting.positions().iter().zip(fixed.positions()) {
            assert!((*a - *b).length() < 1e-6);
        }
        for (a, b) in orbiting.normals().iter().zip(fixed.normals()) {
            assert!((*a - *b).length() < 1e-5);
        }
    }

    #[test]
    fn test_scale_rotate_translate_scenario() {
        let model = orbiting_matrix(2.0, FRAC_PI_2, Vec3::new(5.0, 0.0, 0.0));
        let world = model.transform_point3(Vec3::X);

        let expected = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0))
            .mul_mat4(&Mat4::from_rotation_y(FRAC_PI_2))
            .mul_mat4(&Mat4::from_scale(Vec3::splat(2.0)))
            .transform_point3(Vec3::X);
        assert_eq!(world, expected);
        assert!((world - Vec3::new(5.0, 0.0, -2.0)).length() < 1e-5, "world = {world}");
    }

    #[test]
    fn test_orbiting_normals_radial_from_body_center() {
        let rest = rest(1.0);
        let mut out = rest.mesh().clone();
        let position = Vec3::new(10.0, -4.0, 2.0);
        orbiting_transform(&rest, 0.5, 1.2, position, &mut out);
        for (world, normal) in out.positions().iter().zip(out.normals()) {
            assert!((normal.length() - 1.0).abs() < 1e-4, "normal length {}", normal.length());
            assert!(((*world - position).normalize() - *normal).length() < 1e-4);
        }
    }

    #[test]
    fn test_normals_account_for_rest_radius() {
        let rest = rest(2.0);
        let mut out = rest.mesh().clone();
        orbiting_transform(&rest, 1.5, 0.3, Vec3::ONE, &mut out);
        for normal in out.normals() {
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_zero_scale_is_clamped_not_nan() {
        let rest = rest(1.0);
        let mut out = rest.mesh().clone();
        fixed_center_transform(&rest, 0.0, &mut out);
        assert!(out.normals().iter().all(|n| n.is_finite()));
        assert!(out.positions().iter().all(|p| p.length() <= MIN_SCALING_FACTOR * 1.01));
    }

    #[test]
    fn test_uvs_pass_through() {
        let raw = generate_sphere(6, 3, 1.0).unwrap();
        let rest = RestPose::from_mesh(raw.clone(), 1.0, &OrientationFixups::NONE).unwrap();
        let mut out = rest.mesh().clone();
        orbiting_transform(&rest, 2.0, 1.0, Vec3::Y, &mut out);
        assert_eq!(out.uvs(), raw.uvs());
    }
}
