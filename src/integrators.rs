//! Per-frame motion integrators.
//!
//! Every integrator runs the same three stages in order: make sure a goal
//! exists, take one step towards it, then check for arrival against the
//! post-step transform. Eased policies write absolute values back to the
//! host; constant policies write world-space deltas so they compose with the
//! oscillation offsets applied in the same frame.

use glam::{Quat, Vec3};
use log::trace;
use rand::Rng;
use serde::Serialize;

use crate::arrival::{check_movement_arrival, check_movement_settled, check_rotation_arrival};
use crate::config::{MovementPolicy, RotationPolicy};
use crate::host::ItemHost;
use crate::interp::{q_interp_constant_to, q_interp_to, v_constant_step, v_interp_to};
use crate::motion::MotionState;
use crate::targeting::{generate_movement_target, generate_rotation_target, TargetMode};

/// Outcome of one movement step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementStep {
    /// Goal pursued during the step.
    pub target: Vec3,
    /// Net position change made by the step.
    pub delta: Vec3,
    /// Whether arrival was detected after the step.
    pub arrived: bool,
}

/// Outcome of one rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RotationStep {
    /// Goal pursued during the step.
    pub target: Quat,
    /// World-space rotation applied by the step.
    pub delta: Quat,
    /// Whether arrival was detected after the step.
    pub arrived: bool,
}

/// Moves the item one frame according to `policy`.
pub fn step_movement<H, R>(
    state: &mut MotionState,
    policy: &MovementPolicy,
    mode: &TargetMode,
    host: &mut H,
    rng: &mut R,
) -> MovementStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    match *policy {
        MovementPolicy::Eased { speed, tolerance } => {
            move_eased(state, mode, host, rng, speed, tolerance)
        }
        MovementPolicy::Constant { speed, tolerance } => {
            move_constant(state, mode, host, rng, speed, tolerance)
        }
    }
}

/// Rotates the item one frame according to `policy`.
pub fn step_rotation<H, R>(
    state: &mut MotionState,
    policy: &RotationPolicy,
    host: &mut H,
    rng: &mut R,
) -> RotationStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    match *policy {
        RotationPolicy::Eased { speed, tolerance } => {
            rotate_eased(state, host, rng, speed, tolerance)
        }
        RotationPolicy::Constant { speed, tolerance } => {
            rotate_constant(state, host, rng, speed, tolerance)
        }
    }
}

/// Eased movement: sets the interpolated position absolutely.
pub fn move_eased<H, R>(
    state: &mut MotionState,
    mode: &TargetMode,
    host: &mut H,
    rng: &mut R,
    speed: f32,
    tolerance: f32,
) -> MovementStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    let current = host.position();
    let target = generate_movement_target(state, mode, current, rng);
    let next = v_interp_to(current, target, host.delta_seconds(), speed);
    host.set_position(next);
    let arrived = check_movement_arrival(state, host.position(), tolerance);
    trace!("eased move {current:?} -> {next:?} towards {target:?}");
    MovementStep {
        target,
        delta: next - current,
        arrived,
    }
}

/// Constant-speed movement: applies a bounded world-space offset.
///
/// A direction too short to normalise produces no movement, so an item left
/// inside that band ends its episode even under a tighter tolerance.
pub fn move_constant<H, R>(
    state: &mut MotionState,
    mode: &TargetMode,
    host: &mut H,
    rng: &mut R,
    speed: f32,
    tolerance: f32,
) -> MovementStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    let current = host.position();
    let target = generate_movement_target(state, mode, current, rng);
    let delta = v_constant_step(current, target, host.delta_seconds(), speed);
    if delta != Vec3::ZERO {
        host.apply_position_delta(delta);
    }
    let arrived = check_movement_arrival(state, host.position(), tolerance)
        || check_movement_settled(state, host.position());
    trace!("constant move by {delta:?} towards {target:?}");
    MovementStep {
        target,
        delta,
        arrived,
    }
}

/// Eased rotation: sets the interpolated orientation absolutely.
pub fn rotate_eased<H, R>(
    state: &mut MotionState,
    host: &mut H,
    rng: &mut R,
    speed: f32,
    tolerance: f32,
) -> RotationStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    let current = host.orientation();
    let target = generate_rotation_target(state, rng);
    let next = q_interp_to(current, target, host.delta_seconds(), speed);
    host.set_orientation(next);
    let arrived = check_rotation_arrival(state, host.orientation(), tolerance);
    RotationStep {
        target,
        delta: (next * current.inverse()).normalize(),
        arrived,
    }
}

/// Constant-speed rotation: applies the world-space delta `step · current⁻¹`.
pub fn rotate_constant<H, R>(
    state: &mut MotionState,
    host: &mut H,
    rng: &mut R,
    speed: f32,
    tolerance: f32,
) -> RotationStep
where
    H: ItemHost + ?Sized,
    R: Rng + ?Sized,
{
    let current = host.orientation();
    let target = generate_rotation_target(state, rng);
    let next = q_interp_constant_to(current, target, host.delta_seconds(), speed);
    let delta = (next * current.inverse()).normalize();
    if next != current {
        host.apply_rotation_delta(delta);
    }
    let arrived = check_rotation_arrival(state, host.orientation(), tolerance);
    RotationStep {
        target,
        delta,
        arrived,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SimHost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn offset_mode(offset: Vec3) -> TargetMode {
        TargetMode::FixedOffset { offset }
    }

    #[test]
    fn constant_move_generates_then_steps() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = MotionState::new(Vec3::ZERO);
        let mut host = SimHost::at(Vec3::ZERO).with_delta(0.1);
        let step = move_constant(
            &mut state,
            &offset_mode(Vec3::new(0.0, 10.0, 0.0)),
            &mut host,
            &mut rng,
            15.0,
            2.0,
        );
        assert_eq!(step.target, Vec3::new(0.0, 10.0, 0.0));
        assert!((host.position.y - 1.5).abs() < 1e-5);
        assert!(!step.arrived);
        assert!(state.is_moving());
    }

    #[test]
    fn eased_move_sets_position() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = MotionState::new(Vec3::ZERO);
        let mut host = SimHost::at(Vec3::ZERO).with_delta(0.5);
        let step = move_eased(
            &mut state,
            &offset_mode(Vec3::new(100.0, 0.0, 0.0)),
            &mut host,
            &mut rng,
            1.5,
            15.0,
        );
        assert!((host.position.x - 75.0).abs() < 1e-4);
        assert!((step.delta.x - 75.0).abs() < 1e-4);
    }

    #[test]
    fn arrival_is_checked_after_the_step() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = MotionState::new(Vec3::ZERO);
        // One step of 1.5 brings the item to 1.5 from a 3 unit goal: within 2.
        let mut host = SimHost::at(Vec3::ZERO).with_delta(0.1);
        let step = move_constant(
            &mut state,
            &offset_mode(Vec3::new(3.0, 0.0, 0.0)),
            &mut host,
            &mut rng,
            15.0,
            2.0,
        );
        assert!(step.arrived);
        assert!(!state.is_moving());
    }

    #[test]
    fn constant_move_settles_under_a_zero_tolerance() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut state = MotionState::new(Vec3::ZERO);
        // 0.3 remains after the first step; the second step leaves 0.06.
        let mut host = SimHost::at(Vec3::ZERO).with_delta(0.016);
        let goal = Vec3::new(0.54, 0.0, 0.0);
        let mode = offset_mode(goal);
        let first = move_constant(&mut state, &mode, &mut host, &mut rng, 15.0, 0.0);
        assert!(!first.arrived);
        let second = move_constant(&mut state, &mode, &mut host, &mut rng, 15.0, 0.0);
        assert!(second.arrived);
        assert!(!state.is_moving());
        assert!((goal - host.position).length() < 0.1);
    }

    #[test]
    fn constant_rotation_reaches_target() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = MotionState::new(Vec3::ZERO);
        let mut host = SimHost::at(Vec3::ZERO).with_delta(0.05);
        let mut frames = 0;
        loop {
            let step = rotate_constant(&mut state, &mut host, &mut rng, 1.5, 0.01);
            frames += 1;
            if step.arrived {
                break;
            }
            assert!(frames < 1_000, "rotation did not converge");
        }
        assert!(!state.is_rotating());
    }
}
