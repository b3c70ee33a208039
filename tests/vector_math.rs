//! Guarded normalisation and tolerance comparisons.

use drift::vector_math::{forward_vector, normalize_guarded, quat_near_eq, vec_near_eq};
use glam::{Quat, Vec3};

#[test]
fn normalize_returns_none_for_nan() {
    assert_eq!(normalize_guarded(Vec3::new(f32::NAN, 1.0, 0.0), 0.01), None);
}

#[test]
fn normalize_returns_normalized_vector() {
    assert_eq!(normalize_guarded(Vec3::new(3.0, 0.0, 0.0), 0.01), Some(Vec3::X));
}

#[test]
fn normalize_rejects_lengths_at_the_threshold() {
    assert_eq!(normalize_guarded(Vec3::new(0.1, 0.0, 0.0), 0.01), None);
}

#[test]
fn tolerance_is_per_component_not_euclidean() {
    // Euclidean distance is about 3.46 but no single axis differs by more than 2.
    assert!(vec_near_eq(Vec3::ZERO, Vec3::splat(2.0), 2.0));
}

#[test]
fn opposite_quaternions_are_the_same_rotation() {
    let q = Quat::from_rotation_y(1.2);
    assert!(quat_near_eq(q, -q, 1e-6));
}

#[test]
fn forward_follows_yaw() {
    let forward = forward_vector(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
    assert!(vec_near_eq(forward, Vec3::Y, 1e-6));
}
