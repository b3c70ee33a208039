//! Arrival detection for movement and rotation pursuits.
//!
//! Both checks are tolerance based: eased interpolation approaches its goal
//! asymptotically and would never compare exactly equal.

use glam::{Quat, Vec3};
use log::debug;

use crate::motion::MotionState;
use crate::vector_math::{normalize_guarded, quat_near_eq, vec_near_eq};
use crate::DIRECTION_EPSILON_SQUARED;

/// Ends the movement episode when every axis of `current_position` is within
/// `tolerance` of the goal. Returns whether arrival was detected.
pub fn check_movement_arrival(
    state: &mut MotionState,
    current_position: Vec3,
    tolerance: f32,
) -> bool {
    if !vec_near_eq(current_position, state.target_position(), tolerance) {
        return false;
    }
    if state.is_moving() {
        debug!("arrived at {:?}", state.target_position());
    }
    state.movement.finish();
    true
}

/// Ends the movement episode when the remaining offset is too short to give
/// a direction. Constant-speed movement cannot step inside that band, so it
/// counts as arrival whatever the configured tolerance.
pub fn check_movement_settled(state: &mut MotionState, current_position: Vec3) -> bool {
    let remaining = state.target_position() - current_position;
    if normalize_guarded(remaining, DIRECTION_EPSILON_SQUARED).is_some() {
        return false;
    }
    if state.is_moving() {
        debug!("settled {remaining:?} short of {:?}", state.target_position());
    }
    state.movement.finish();
    true
}

/// Ends the rotation episode when `current_orientation` matches the goal
/// component-wise within `tolerance`. Returns whether arrival was detected.
pub fn check_rotation_arrival(
    state: &mut MotionState,
    current_orientation: Quat,
    tolerance: f32,
) -> bool {
    if !quat_near_eq(current_orientation, state.target_orientation(), tolerance) {
        return false;
    }
    if state.is_rotating() {
        debug!("reached orientation {:?}", state.target_orientation());
    }
    state.rotation.finish();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_towards(target: Vec3) -> MotionState {
        let mut state = MotionState::new(Vec3::ZERO);
        state.movement.begin_with(|| target);
        state
    }

    #[test]
    fn movement_arrival_is_per_axis() {
        let mut state = moving_towards(Vec3::new(10.0, 0.0, 0.0));
        // 1.9 on two axes is still within a per-axis tolerance of 2.
        assert!(check_movement_arrival(&mut state, Vec3::new(8.1, 1.9, 0.0), 2.0));
        assert!(!state.is_moving());
    }

    #[test]
    fn movement_outside_tolerance_keeps_moving() {
        let mut state = moving_towards(Vec3::new(10.0, 0.0, 0.0));
        assert!(!check_movement_arrival(&mut state, Vec3::new(7.9, 0.0, 0.0), 2.0));
        assert!(state.is_moving());
    }

    #[test]
    fn movement_settles_inside_the_direction_dead_band() {
        let mut state = moving_towards(Vec3::new(10.0, 0.0, 0.0));
        assert!(!check_movement_settled(&mut state, Vec3::new(9.8, 0.0, 0.0)));
        assert!(state.is_moving());
        assert!(check_movement_settled(&mut state, Vec3::new(9.94, 0.0, 0.0)));
        assert!(!state.is_moving());
    }

    #[test]
    fn rotation_arrival_accepts_the_negated_quaternion() {
        let mut state = MotionState::new(Vec3::ZERO);
        let goal = Quat::from_rotation_y(1.0);
        state.rotation.begin_with(|| goal);
        assert!(check_rotation_arrival(&mut state, -goal, 0.01));
        assert!(!state.is_rotating());
    }

    #[test]
    fn rotation_outside_tolerance_keeps_rotating() {
        let mut state = MotionState::new(Vec3::ZERO);
        state.rotation.begin_with(|| Quat::from_rotation_x(1.0));
        assert!(!check_rotation_arrival(&mut state, Quat::IDENTITY, 0.01));
        assert!(state.is_rotating());
    }
}
