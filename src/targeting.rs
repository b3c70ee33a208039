//! Movement and rotation target generation.
//!
//! A new goal is only drawn while the corresponding pursuit is idle, so a
//! target stays locked for the whole episode no matter how often the
//! generator is called.

use glam::{EulerRot, Quat, Vec3};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::motion::MotionState;
use crate::TARGET_BOX_HALF_EXTENT;

/// How movement goals are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetMode {
    /// Uniform point in a cuboid centred on the base position.
    RandomInBox {
        /// Half size of the cuboid along each axis.
        half_extent: f32,
    },
    /// The current position shifted by a fixed offset.
    FixedOffset {
        /// World-space offset added to the current position.
        offset: Vec3,
    },
}

impl Default for TargetMode {
    fn default() -> Self {
        Self::RandomInBox {
            half_extent: TARGET_BOX_HALF_EXTENT,
        }
    }
}

/// Roll, pitch and yaw in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EulerAngles {
    /// Rotation about the forward (X) axis.
    pub roll: f32,
    /// Rotation about the right (Y) axis.
    pub pitch: f32,
    /// Rotation about the up (Z) axis.
    pub yaw: f32,
}

impl EulerAngles {
    /// Unit quaternion applying yaw, then pitch, then roll.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::ZYX,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
        .normalize()
    }
}

/// Uniform random point within `half_extent` of `center` on every axis.
pub fn random_point_in_box<R: Rng + ?Sized>(rng: &mut R, center: Vec3, half_extent: f32) -> Vec3 {
    let h = half_extent.abs();
    if !h.is_finite() || h <= 0.0 {
        return center;
    }
    center
        + Vec3::new(
            rng.gen_range(-h..=h),
            rng.gen_range(-h..=h),
            rng.gen_range(-h..=h),
        )
}

/// Draws independent roll, pitch and yaw from `[-180°, 180°)`.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> (EulerAngles, Quat) {
    let angles = EulerAngles {
        roll: rng.gen_range(-180.0..180.0),
        pitch: rng.gen_range(-180.0..180.0),
        yaw: rng.gen_range(-180.0..180.0),
    };
    (angles, angles.to_quat())
}

/// Returns the movement goal, drawing a new one if the item is idle.
///
/// While a movement episode is in flight the existing goal is returned
/// untouched and `rng` is not consumed.
pub fn generate_movement_target<R: Rng + ?Sized>(
    state: &mut MotionState,
    mode: &TargetMode,
    current_position: Vec3,
    rng: &mut R,
) -> Vec3 {
    if state.is_moving() {
        return state.target_position();
    }
    let base = state.base_position();
    let target = state.movement.begin_with(|| match *mode {
        TargetMode::RandomInBox { half_extent } => random_point_in_box(rng, base, half_extent),
        TargetMode::FixedOffset { offset } => current_position + offset,
    });
    debug!("new movement target {target:?} from {current_position:?}");
    target
}

/// Returns the orientation goal, drawing a new one if the item is idle.
pub fn generate_rotation_target<R: Rng + ?Sized>(state: &mut MotionState, rng: &mut R) -> Quat {
    if state.is_rotating() {
        return state.target_orientation();
    }
    let (angles, target) = random_orientation(rng);
    state.rotation.begin_with(|| target);
    debug!(
        "new rotation target roll {:.1} pitch {:.1} yaw {:.1}",
        angles.roll, angles.pitch, angles.yaw
    );
    target
}
