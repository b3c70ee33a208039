//! The floating item and its per-frame driver.
//!
//! [`FloatingItem`] is what gets placed: behaviour settings, the tuning
//! randomised at placement, and a display label. [`ItemMotion`] is created
//! when the item is activated and carries everything that changes from frame
//! to frame. [`ItemMotion::tick`] is the only place that mutates it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use bevy::prelude::Component;
use glam::{Quat, Vec3};
use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::{ItemSettings, TuningRanges};
use crate::debug::{DebugReport, DebugSink};
use crate::host::ItemHost;
use crate::integrators::{step_movement, step_rotation, MovementStep, RotationStep};
use crate::motion::{MotionPhase, MotionState};
use crate::oscillation::OscillationState;
use crate::tuning::ItemTuning;
use crate::vector_math::forward_vector;

/// A placed floating item.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct FloatingItem {
    /// Behaviour settings.
    pub settings: ItemSettings,
    /// Tuning fixed at placement.
    pub tuning: ItemTuning,
    label: String,
    key: u64,
}

impl FloatingItem {
    /// Creates an item with explicit tuning.
    #[must_use]
    pub fn new(label: impl Into<String>, settings: ItemSettings, tuning: ItemTuning) -> Self {
        let name: String = label.into();
        Self {
            settings,
            tuning,
            key: label_key(&name),
            label: name,
        }
    }

    /// Places an item, drawing its tuning from `ranges`.
    pub fn place<R: Rng + ?Sized>(
        label: impl Into<String>,
        settings: ItemSettings,
        ranges: &TuningRanges,
        rng: &mut R,
    ) -> Self {
        Self::new(label, settings, ItemTuning::randomize(rng, ranges))
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stable key derived from the label, used to address overlay messages.
    #[must_use]
    pub const fn key(&self) -> u64 {
        self.key
    }
}

fn label_key(label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    hasher.finish()
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameOutcome {
    /// Phase before the tick.
    pub phase_before: MotionPhase,
    /// Phase after the tick.
    pub phase_after: MotionPhase,
    /// Rotation integrator result.
    pub rotation: RotationStep,
    /// Movement integrator result.
    pub movement: MovementStep,
    /// Bobbing offset applied at the end of the tick.
    pub oscillation_offset: Vec3,
}

/// Mutable per-frame state of an activated item.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemMotion {
    /// Targeting state.
    pub motion: MotionState,
    /// Bobbing state.
    pub oscillation: OscillationState,
}

impl ItemMotion {
    /// Activates an item currently at `position`.
    ///
    /// The position becomes the immutable anchor for random targets and the
    /// lifetime starts from zero.
    #[must_use]
    pub fn activate(position: Vec3) -> Self {
        Self {
            motion: MotionState::new(position),
            oscillation: OscillationState::default(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> MotionPhase {
        self.motion.phase()
    }

    /// Builds the debug report for an item at `position` facing `orientation`.
    #[must_use]
    pub fn report(&self, item: &FloatingItem, position: Vec3, orientation: Quat) -> DebugReport {
        DebugReport {
            key: item.key(),
            label: item.label().to_owned(),
            position,
            forward: forward_vector(orientation),
            target_position: self.motion.target_position(),
            target_orientation: self.motion.target_orientation(),
            phase: self.phase(),
            color: item.tuning.color,
        }
    }

    /// Advances the item by one frame.
    ///
    /// Retracts last frame's bobbing offset, advances the lifetime, rotates,
    /// moves, then applies a fresh bobbing offset. The debug sink, if
    /// enabled, receives a report at the very end.
    pub fn tick<H, R, D>(
        &mut self,
        item: &FloatingItem,
        host: &mut H,
        rng: &mut R,
        sink: &mut D,
    ) -> FrameOutcome
    where
        H: ItemHost + ?Sized,
        R: Rng + ?Sized,
        D: DebugSink + ?Sized,
    {
        let phase_before = self.phase();
        let settings = &item.settings;

        self.oscillation.retract(host);
        self.oscillation.advance(host.delta_seconds());

        let rotation = step_rotation(&mut self.motion, &settings.rotation, host, rng);
        let movement = step_movement(
            &mut self.motion,
            &settings.movement,
            &settings.targeting,
            host,
            rng,
        );

        let oscillation_offset =
            self.oscillation
                .apply(host, &item.tuning, settings.oscillation_axis);

        let phase_after = self.phase();
        if phase_after != phase_before {
            debug!("{}: {phase_before:?} -> {phase_after:?}", item.label());
        }

        if sink.is_enabled() {
            sink.report(&self.report(item, host.position(), host.orientation()));
        }

        FrameOutcome {
            phase_before,
            phase_after,
            rotation,
            movement,
            oscillation_offset,
        }
    }
}
