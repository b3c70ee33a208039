//! Vertical bobbing layered on top of the base motion.
//!
//! The offset applied in one frame is retracted at the start of the next,
//! so integrators always see the item where the base motion left it and
//! the bobbing never accumulates into the trajectory.

use glam::Vec3;
use serde::Serialize;

use crate::host::ItemHost;
use crate::numeric::expect_f32;
use crate::oscillator::WaveShape;
use crate::tuning::ItemTuning;

/// Elapsed lifetime and the offset currently applied to the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OscillationState {
    elapsed_lifetime: f64,
    previous_offset: Vec3,
}

impl OscillationState {
    /// Seconds since activation.
    #[must_use]
    pub const fn elapsed_lifetime(&self) -> f64 {
        self.elapsed_lifetime
    }

    /// Offset applied last frame and not yet retracted.
    #[must_use]
    pub const fn previous_offset(&self) -> Vec3 {
        self.previous_offset
    }

    /// Removes last frame's offset from the host.
    pub fn retract<H: ItemHost + ?Sized>(&mut self, host: &mut H) {
        if self.previous_offset != Vec3::ZERO {
            host.apply_position_delta(-self.previous_offset);
        }
        self.previous_offset = Vec3::ZERO;
    }

    /// Advances the lifetime; negative or non-finite deltas are ignored.
    pub fn advance(&mut self, delta_seconds: f32) {
        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.elapsed_lifetime += f64::from(delta_seconds);
        }
    }

    /// Offset along `axis` for the current lifetime.
    #[must_use]
    pub fn offset_for(&self, tuning: &ItemTuning, axis: Vec3) -> Vec3 {
        let shape = WaveShape::sine(f64::from(tuning.amplitude), f64::from(tuning.frequency_hz));
        axis * expect_f32(shape.sample(self.elapsed_lifetime))
    }

    /// Computes and applies this frame's offset, remembering it for the
    /// next retraction. Returns the applied offset.
    pub fn apply<H: ItemHost + ?Sized>(
        &mut self,
        host: &mut H,
        tuning: &ItemTuning,
        axis: Vec3,
    ) -> Vec3 {
        let offset = self.offset_for(tuning, axis);
        host.apply_position_delta(offset);
        self.previous_offset = offset;
        offset
    }
}
