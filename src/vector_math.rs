//! Vector and quaternion helpers.
//!
//! Small helpers for guarded normalisation and tolerance-based equality,
//! matching the comparison rules the arrival detector relies on.
use glam::{Quat, Vec3, Vec4};

/// Returns the unit vector along `vector`, or `None` when its squared length
/// is at or below `epsilon_squared` or any component is not finite.
///
/// # Examples
///
/// ```
/// use drift::vector_math::normalize_guarded;
/// use glam::Vec3;
///
/// let unit = normalize_guarded(Vec3::new(3.0, 0.0, 4.0), 0.01).unwrap();
/// assert!((unit.x - 0.6).abs() < 1e-6);
/// assert!((unit.z - 0.8).abs() < 1e-6);
///
/// assert!(normalize_guarded(Vec3::new(0.05, 0.0, 0.0), 0.01).is_none());
/// ```
#[must_use]
pub fn normalize_guarded(vector: Vec3, epsilon_squared: f32) -> Option<Vec3> {
    if !vector.is_finite() {
        return None;
    }
    let length_squared = vector.length_squared();
    if length_squared <= epsilon_squared {
        return None;
    }
    Some(vector / length_squared.sqrt())
}

/// Per-component equality: every axis differs by at most `tolerance`.
///
/// # Examples
///
/// ```
/// use drift::vector_math::vec_near_eq;
/// use glam::Vec3;
///
/// assert!(vec_near_eq(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.5, 2.0, 1.5), 1.5));
/// assert!(!vec_near_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.1), 2.0));
/// ```
#[must_use]
pub fn vec_near_eq(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    (a - b).abs().max_element() <= tolerance
}

/// Component-wise quaternion equality treating `q` and `-q` as the same
/// rotation.
///
/// # Examples
///
/// ```
/// use drift::vector_math::quat_near_eq;
/// use glam::Quat;
///
/// let q = Quat::from_rotation_z(0.5);
/// assert!(quat_near_eq(q, -q, 1e-6));
/// assert!(!quat_near_eq(q, Quat::IDENTITY, 0.01));
/// ```
#[must_use]
pub fn quat_near_eq(a: Quat, b: Quat, tolerance: f32) -> bool {
    let lhs = Vec4::from(a);
    let rhs = Vec4::from(b);
    (lhs - rhs).abs().max_element() <= tolerance || (lhs + rhs).abs().max_element() <= tolerance
}

/// Forward vector of an orientation in the host's X-forward convention.
#[must_use]
pub fn forward_vector(orientation: Quat) -> Vec3 {
    orientation * Vec3::X
}
