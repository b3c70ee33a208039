//! Targeting state owned by a single floating item.
//!
//! Each motion axis is a [`Pursuit`]: a goal plus a flag telling whether the
//! item is still chasing it. The flags together form the item's
//! [`MotionPhase`]; there is no separate transition table.

use glam::{Quat, Vec3};
use serde::Serialize;

/// Goal of one motion axis and whether it is being pursued.
///
/// The target is kept after arrival so diagnostics can show the last goal.
/// It may only be replaced while the pursuit is idle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pursuit<T> {
    target: T,
    active: bool,
}

impl<T: Copy> Pursuit<T> {
    /// Idle pursuit whose last goal is `target`.
    #[must_use]
    pub const fn idle(target: T) -> Self {
        Self {
            target,
            active: false,
        }
    }

    /// Current or most recent goal.
    #[must_use]
    pub const fn target(&self) -> T {
        self.target
    }

    /// Whether the goal is still being chased.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Starts an episode with a goal from `make_target` unless one is in flight.
    ///
    /// Returns the goal of the episode that is active afterwards.
    pub fn begin_with(&mut self, make_target: impl FnOnce() -> T) -> T {
        if !self.active {
            self.target = make_target();
            self.active = true;
        }
        self.target
    }

    /// Ends the current episode.
    pub fn finish(&mut self) {
        self.active = false;
    }
}

/// Combined state of the movement and rotation pursuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MotionPhase {
    /// Neither moving nor rotating.
    IdleIdle,
    /// Moving towards a position; orientation settled.
    MovingIdle,
    /// Rotating towards an orientation; position settled.
    IdleRotating,
    /// Chasing both goals.
    MovingRotating,
}

impl MotionPhase {
    /// Builds the phase from the two pursuit flags.
    #[must_use]
    pub const fn from_flags(is_moving: bool, is_rotating: bool) -> Self {
        match (is_moving, is_rotating) {
            (false, false) => Self::IdleIdle,
            (true, false) => Self::MovingIdle,
            (false, true) => Self::IdleRotating,
            (true, true) => Self::MovingRotating,
        }
    }

    /// Whether a position goal is being chased.
    #[must_use]
    pub const fn is_moving(self) -> bool {
        matches!(self, Self::MovingIdle | Self::MovingRotating)
    }

    /// Whether an orientation goal is being chased.
    #[must_use]
    pub const fn is_rotating(self) -> bool {
        matches!(self, Self::IdleRotating | Self::MovingRotating)
    }
}

/// Movement and rotation targeting state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionState {
    base_position: Vec3,
    /// Position pursuit.
    pub movement: Pursuit<Vec3>,
    /// Orientation pursuit.
    pub rotation: Pursuit<Quat>,
}

impl MotionState {
    /// Fresh idle state anchored at `base_position`.
    ///
    /// The initial goals are the anchor and the identity rotation; both are
    /// replaced on the first tick.
    #[must_use]
    pub const fn new(base_position: Vec3) -> Self {
        Self {
            base_position,
            movement: Pursuit::idle(base_position),
            rotation: Pursuit::idle(Quat::IDENTITY),
        }
    }

    /// Anchor recorded at activation.
    #[must_use]
    pub const fn base_position(&self) -> Vec3 {
        self.base_position
    }

    /// Current or last movement goal.
    #[must_use]
    pub const fn target_position(&self) -> Vec3 {
        self.movement.target()
    }

    /// Current or last orientation goal.
    #[must_use]
    pub const fn target_orientation(&self) -> Quat {
        self.rotation.target()
    }

    /// Whether a movement episode is in flight.
    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.movement.is_active()
    }

    /// Whether a rotation episode is in flight.
    #[must_use]
    pub const fn is_rotating(&self) -> bool {
        self.rotation.is_active()
    }

    /// Phase derived from the two pursuits.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        MotionPhase::from_flags(self.is_moving(), self.is_rotating())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn new_state_is_idle() {
        let state = MotionState::new(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(state.phase(), MotionPhase::IdleIdle);
        assert_eq!(state.target_position(), state.base_position());
    }

    #[test]
    fn begin_with_locks_the_target() {
        let mut pursuit = Pursuit::idle(0_i32);
        assert_eq!(pursuit.begin_with(|| 5), 5);
        assert_eq!(pursuit.begin_with(|| 9), 5);
        pursuit.finish();
        assert_eq!(pursuit.target(), 5);
        assert_eq!(pursuit.begin_with(|| 9), 9);
    }

    #[rstest]
    #[case(false, false, MotionPhase::IdleIdle)]
    #[case(true, false, MotionPhase::MovingIdle)]
    #[case(false, true, MotionPhase::IdleRotating)]
    #[case(true, true, MotionPhase::MovingRotating)]
    fn phase_round_trips_flags(
        #[case] moving: bool,
        #[case] rotating: bool,
        #[case] expected: MotionPhase,
    ) {
        let phase = MotionPhase::from_flags(moving, rotating);
        assert_eq!(phase, expected);
        assert_eq!(phase.is_moving(), moving);
        assert_eq!(phase.is_rotating(), rotating);
    }
}
