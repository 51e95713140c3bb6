//! Per-tick spin and revolution, plus initial orbit placement.

use glam::{DVec2, Vec3};

use crate::body::Body;

/// Default angular-rate constant `k`. The sign fixes the spin direction.
pub const DEFAULT_SPIN_RATE: f32 = -0.0053;

/// Orbit angle advanced per tick for each speed level, in radians.
pub const ORBIT_STEP_PER_SPEED: f32 = 0.005;

/// Spin delta for one tick: `2 · speed · relative_rate · k`.
pub fn rotation_step(spin_rate: f32, speed_level: u8, relative_rate: f32) -> f32 {
    2.0 * f32::from(speed_level) * relative_rate * spin_rate
}

/// Accumulate one tick of self-rotation. The angle is never wrapped.
pub fn advance_rotation(body: &mut Body, speed_level: u8, relative_rate: f32) {
    body.rotation_angle += rotation_step(body.spin_rate, speed_level, relative_rate);
}

/// `point` rotated about `pivot` in the X/Y plane by `angle`, Z untouched.
///
/// Translates by the exact pivot offset, rotates, and translates back, so
/// `pivot` is a fixed point. The arithmetic runs in f64: repeating the step
/// in f32 shrinks the radius by about 0.1% every 100k ticks, while here the
/// only error left is the final rounding to f32, which does not accumulate
/// in one direction.
pub fn rotate_about_pivot(point: Vec3, pivot: Vec3, angle: f64) -> Vec3 {
    let pivot = pivot.as_dvec3();
    let offset = point.as_dvec3() - pivot;
    let planar = DVec2::from_angle(angle).rotate(offset.truncate());
    (pivot + planar.extend(offset.z)).as_vec3()
}

/// Revolve `body.position` one tick about `pivot`.
pub fn advance_orbit(body: &mut Body, pivot: Vec3, speed_level: u8) {
    let angle = f64::from(speed_level) * f64::from(ORBIT_STEP_PER_SPEED);
    body.position = rotate_about_pivot(body.position, pivot, angle);
}

/// Position at `distance` from `reference` along the direction given by
/// `pitch` (elevation) and `yaw` (heading), both in radians.
pub fn place_on_inclined_orbit(reference: Vec3, distance: f32, pitch: f32, yaw: f32) -> Vec3 {
    let direction = Vec3::new(yaw.sin() * pitch.cos(), pitch.sin(), yaw.cos() * pitch.cos());
    reference + direction * distance
}
