//! Interpolation primitives behind the motion integrators.
//!
//! Eased functions cover a fraction of the remaining distance proportional
//! to `speed * delta_seconds`; constant functions move a fixed amount per
//! second. A zero delta never moves anything.

use glam::{Quat, Vec3};

use crate::numeric::unit_alpha;
use crate::vector_math::{normalize_guarded, quat_near_eq};
use crate::{DIRECTION_EPSILON_SQUARED, EASED_SNAP_DISTANCE_SQUARED, MIN_ANGULAR_DISTANCE};

/// Tolerance below which two orientations are treated as identical.
const QUAT_SNAP_TOLERANCE: f32 = 1.0e-4;

/// Eased position step.
///
/// Non-positive `speed` snaps straight to `target`, as does a remaining
/// distance below [`EASED_SNAP_DISTANCE_SQUARED`].
///
/// # Examples
///
/// ```
/// use drift::interp::v_interp_to;
/// use glam::Vec3;
///
/// let next = v_interp_to(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 0.1, 1.5);
/// assert!((next.x - 15.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn v_interp_to(current: Vec3, target: Vec3, delta_seconds: f32, speed: f32) -> Vec3 {
    if speed <= 0.0 {
        return target;
    }
    let alpha = unit_alpha(delta_seconds * speed);
    if alpha <= 0.0 {
        return current;
    }
    let remaining = target - current;
    if remaining.length_squared() < EASED_SNAP_DISTANCE_SQUARED {
        return target;
    }
    current + remaining * alpha
}

/// Constant-speed position step expressed as an offset.
///
/// Returns [`Vec3::ZERO`] when the direction to `target` is too short to
/// normalise; the caller treats that as already arrived. The step never
/// exceeds `speed * delta_seconds` and never passes the target.
///
/// # Examples
///
/// ```
/// use drift::interp::v_constant_step;
/// use glam::Vec3;
///
/// let step = v_constant_step(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.016, 15.0);
/// assert!((step.x - 0.24).abs() < 1e-5);
/// assert_eq!(v_constant_step(Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0), 0.016, 15.0), Vec3::ZERO);
/// ```
#[must_use]
pub fn v_constant_step(current: Vec3, target: Vec3, delta_seconds: f32, speed: f32) -> Vec3 {
    let to_target = target - current;
    let Some(direction) = normalize_guarded(to_target, DIRECTION_EPSILON_SQUARED) else {
        return Vec3::ZERO;
    };
    let max_distance = (speed * delta_seconds).max(0.0);
    if !max_distance.is_finite() {
        return Vec3::ZERO;
    }
    direction * max_distance.min(to_target.length())
}

/// Eased orientation step: slerp by `clamp(speed * delta_seconds, 0, 1)`.
#[must_use]
pub fn q_interp_to(current: Quat, target: Quat, delta_seconds: f32, speed: f32) -> Quat {
    if speed <= 0.0 {
        return target;
    }
    let alpha = unit_alpha(speed * delta_seconds);
    if alpha <= 0.0 {
        return current;
    }
    if quat_near_eq(current, target, QUAT_SNAP_TOLERANCE) {
        return target;
    }
    current.slerp(target, alpha).normalize()
}

/// Constant angular speed step.
///
/// Rotates at most `speed * delta_seconds` radians along the slerp arc
/// towards `target`, landing on it exactly once within reach.
///
/// # Examples
///
/// ```
/// use drift::interp::q_interp_constant_to;
/// use glam::Quat;
///
/// let target = Quat::from_rotation_z(1.0);
/// let next = q_interp_constant_to(Quat::IDENTITY, target, 0.1, 1.5);
/// assert!((next.angle_between(Quat::IDENTITY) - 0.15).abs() < 1e-4);
/// ```
#[must_use]
pub fn q_interp_constant_to(current: Quat, target: Quat, delta_seconds: f32, speed: f32) -> Quat {
    if speed <= 0.0 {
        return target;
    }
    let step_angle = (delta_seconds * speed).max(0.0);
    if !step_angle.is_finite() || step_angle <= 0.0 {
        return current;
    }
    if quat_near_eq(current, target, QUAT_SNAP_TOLERANCE) {
        return target;
    }
    let angular_distance = current.angle_between(target).max(MIN_ANGULAR_DISTANCE);
    let alpha = step_angle.min(angular_distance) / angular_distance;
    current.slerp(target, alpha).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn eased_step_never_overshoots() {
        let target = Vec3::new(30.0, -10.0, 5.0);
        let mut current = Vec3::ZERO;
        for _ in 0..200 {
            let next = v_interp_to(current, target, 0.5, 1.5);
            assert!((target - next).length() <= (target - current).length() + 1e-5);
            current = next;
        }
        assert_eq!(current, target);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let target = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(v_interp_to(Vec3::ZERO, target, 0.0, 1.5), Vec3::ZERO);
        assert_eq!(v_constant_step(Vec3::ZERO, target, 0.0, 15.0), Vec3::ZERO);
        let goal = Quat::from_rotation_x(0.7);
        assert_eq!(q_interp_to(Quat::IDENTITY, goal, 0.0, 1.5), Quat::IDENTITY);
        assert_eq!(q_interp_constant_to(Quat::IDENTITY, goal, 0.0, 1.5), Quat::IDENTITY);
    }

    #[test]
    fn constant_step_clamps_to_remaining_distance() {
        let step = v_constant_step(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), 1.0, 15.0);
        assert_relative_eq!(step.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn non_positive_speed_snaps() {
        let target = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v_interp_to(Vec3::ZERO, target, 0.1, 0.0), target);
        let goal = Quat::from_rotation_y(2.0);
        assert_eq!(q_interp_constant_to(Quat::IDENTITY, goal, 0.1, -1.0), goal);
    }

    #[rstest]
    #[case::half_radian(Quat::from_rotation_z(2.0), 0.25, 2.0, 0.5)]
    #[case::two_radians(Quat::from_rotation_z(2.0), 0.25, 8.0, 2.0)]
    #[case::past_the_goal(Quat::from_rotation_x(1.2), 0.5, 8.0, 1.2)]
    fn constant_rotation_turns_speed_times_delta(
        #[case] goal: Quat,
        #[case] delta_seconds: f32,
        #[case] speed: f32,
        #[case] expected_angle: f32,
    ) {
        let next = q_interp_constant_to(Quat::IDENTITY, goal, delta_seconds, speed);
        assert_relative_eq!(next.angle_between(Quat::IDENTITY), expected_angle, epsilon = 1e-3);
    }

    #[test]
    fn constant_rotation_lands_exactly() {
        let goal = Quat::from_rotation_y(0.3);
        let next = q_interp_constant_to(Quat::IDENTITY, goal, 1.0, 1.5);
        assert!(quat_near_eq(next, goal, 1e-5));
    }
}
