//! Capabilities the frame driver needs from whatever owns the transform.
//!
//! The motion core never caches the item's position or orientation; it
//! reads them from the host each time and writes back either absolute
//! values (eased interpolation) or world-space deltas (constant-speed
//! interpolation and oscillation).

use glam::{Quat, Vec3};
use serde::Serialize;

/// Transform access and frame timing supplied by the host environment.
///
/// Only [`position`](Self::position), [`set_position`](Self::set_position),
/// [`orientation`](Self::orientation),
/// [`set_orientation`](Self::set_orientation) and
/// [`delta_seconds`](Self::delta_seconds) are required; the delta forms
/// default to read-modify-write.
pub trait ItemHost {
    /// Current world-space position.
    fn position(&self) -> Vec3;

    /// Replaces the world-space position.
    fn set_position(&mut self, position: Vec3);

    /// Adds a world-space offset to the position.
    fn apply_position_delta(&mut self, delta: Vec3) {
        let position = self.position();
        self.set_position(position + delta);
    }

    /// Current world-space orientation.
    fn orientation(&self) -> Quat;

    /// Replaces the world-space orientation.
    fn set_orientation(&mut self, orientation: Quat);

    /// Pre-multiplies the orientation by a world-space rotation.
    fn apply_rotation_delta(&mut self, delta: Quat) {
        let orientation = self.orientation();
        self.set_orientation((delta * orientation).normalize());
    }

    /// Seconds elapsed since the previous tick; never negative.
    fn delta_seconds(&self) -> f32;
}

/// Plain in-memory host for headless simulation and tests.
///
/// # Examples
///
/// ```
/// use drift::host::{ItemHost, SimHost};
/// use glam::Vec3;
///
/// let mut host = SimHost::at(Vec3::ZERO).with_delta(0.016);
/// host.apply_position_delta(Vec3::X);
/// assert_eq!(host.position(), Vec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimHost {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub orientation: Quat,
    /// Frame delta reported to the driver.
    pub delta_seconds: f32,
}

impl Default for SimHost {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl SimHost {
    /// Host at `position` with identity orientation and zero delta.
    #[must_use]
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
            delta_seconds: 0.0,
        }
    }

    /// Returns the host with a new frame delta; negative input clamps to zero.
    #[must_use]
    pub fn with_delta(mut self, delta_seconds: f32) -> Self {
        self.delta_seconds = delta_seconds.max(0.0);
        self
    }
}

impl ItemHost for SimHost {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }

    fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_delta_is_world_space() {
        let mut host = SimHost::at(Vec3::ZERO);
        host.set_orientation(Quat::from_rotation_x(0.4));
        let delta = Quat::from_rotation_z(0.3);
        let expected = delta * Quat::from_rotation_x(0.4);
        host.apply_rotation_delta(delta);
        assert!(host.orientation().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn negative_delta_clamps_to_zero() {
        let host = SimHost::default().with_delta(-1.0);
        assert!(host.delta_seconds().abs() < f32::EPSILON);
    }
}
