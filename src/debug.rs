//! Optional debug side channel.
//!
//! The frame driver hands a [`DebugReport`] to a [`DebugSink`] after each
//! tick. Sinks are observers only: nothing they do, and nothing they fail to
//! do, feeds back into motion. [`NoDebug`] discards everything and is the
//! sink to use when no overlay is wanted.

use bevy::prelude::Resource;
use glam::{Quat, Vec3};
use hashbrown::HashMap;
use serde::Serialize;

use crate::motion::MotionPhase;
use crate::tuning::ItemColor;
use crate::{
    DEBUG_ARROW_HEAD_SIZE, DEBUG_ARROW_LENGTH, DEBUG_LINE_THICKNESS, DEBUG_MESSAGE_SECONDS,
    DEBUG_POINT_SIZE, DEBUG_SPHERE_RADIUS, DEBUG_SPHERE_SEGMENTS,
};

/// Snapshot of an item's targeting state after a tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugReport {
    /// Stable per-item key; a new report replaces the previous one.
    pub key: u64,
    /// Display name of the item.
    pub label: String,
    /// World-space position including the bobbing offset.
    pub position: Vec3,
    /// Unit forward vector of the current orientation.
    pub forward: Vec3,
    /// Current movement goal.
    pub target_position: Vec3,
    /// Current orientation goal.
    pub target_orientation: Quat,
    /// Phase after the tick.
    pub phase: MotionPhase,
    /// Per-item display colour.
    pub color: ItemColor,
}

impl DebugReport {
    /// Human-readable summary of the targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use drift::debug::DebugReport;
    /// use drift::motion::MotionPhase;
    /// use drift::tuning::ItemColor;
    /// use glam::{Quat, Vec3};
    ///
    /// let report = DebugReport {
    ///     key: 1,
    ///     label: "Item_0".to_owned(),
    ///     position: Vec3::ZERO,
    ///     forward: Vec3::X,
    ///     target_position: Vec3::new(1.0, 2.0, 3.0),
    ///     target_orientation: Quat::IDENTITY,
    ///     phase: MotionPhase::MovingRotating,
    ///     color: ItemColor::default(),
    /// };
    /// assert!(report.message().starts_with("Item_0 says:\n"));
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        let q = self.target_orientation;
        let p = self.target_position;
        format!(
            "{} says:\nTargetQuaternion: ({:.6}, {:.6}, {:.6}, {:.6})\nTargetLocation: ({:.6}, {:.6}, {:.6})\n",
            self.label, q.x, q.y, q.z, q.w, p.x, p.y, p.z
        )
    }
}

/// Receiver of per-tick debug reports.
pub trait DebugSink {
    /// Whether reports should be built at all. Disabled sinks cost nothing.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Receives the report for one item.
    fn report(&mut self, report: &DebugReport);
}

/// Sink that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebug;

impl DebugSink for NoDebug {
    fn is_enabled(&self) -> bool {
        false
    }

    fn report(&mut self, _report: &DebugReport) {}
}

impl<S: DebugSink + ?Sized> DebugSink for &mut S {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn report(&mut self, report: &DebugReport) {
        (**self).report(report);
    }
}

/// A message shown on the overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayMessage {
    /// Text to display.
    pub text: String,
    /// Colour to display it in.
    pub color: ItemColor,
    /// Seconds left before the message disappears.
    pub remaining_seconds: f32,
}

/// Keyed board of on-screen messages.
///
/// Posting under an existing key replaces that message and restarts its
/// lifetime, so each item occupies a single line however often it reports.
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugOverlay {
    messages: HashMap<u64, OverlayMessage>,
}

impl DebugOverlay {
    /// Posts `text` under `key` for `seconds`.
    pub fn post(&mut self, key: u64, text: String, color: ItemColor, seconds: f32) {
        self.messages.insert(
            key,
            OverlayMessage {
                text,
                color,
                remaining_seconds: seconds,
            },
        );
    }

    /// Ages every message by `delta_seconds` and drops expired ones.
    pub fn expire(&mut self, delta_seconds: f32) {
        let elapsed = delta_seconds.max(0.0);
        self.messages.retain(|_, message| {
            message.remaining_seconds -= elapsed;
            message.remaining_seconds > 0.0
        });
    }

    /// Message currently posted under `key`.
    #[must_use]
    pub fn get(&self, key: u64) -> Option<&OverlayMessage> {
        self.messages.get(&key)
    }

    /// Number of visible messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the overlay shows nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Visible messages ordered by key for stable display.
    #[must_use]
    pub fn sorted(&self) -> Vec<(u64, &OverlayMessage)> {
        let mut entries: Vec<_> = self.messages.iter().map(|(k, m)| (*k, m)).collect();
        entries.sort_unstable_by_key(|(key, _)| *key);
        entries
    }
}

impl DebugSink for DebugOverlay {
    fn report(&mut self, report: &DebugReport) {
        self.post(report.key, report.message(), report.color, DEBUG_MESSAGE_SECONDS);
    }
}

/// Directional arrow primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArrowShape {
    /// Tail of the arrow.
    pub start: Vec3,
    /// Tip of the arrow.
    pub end: Vec3,
    /// Size of the arrow head.
    pub head_size: f32,
}

/// Wireframe sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SphereShape {
    /// Centre of the sphere.
    pub center: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Number of segments per circle.
    pub segments: u32,
}

/// Primitives drawn for one item each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DebugShapes {
    /// Forward arrow.
    pub arrow: ArrowShape,
    /// Sphere around the item.
    pub sphere: SphereShape,
    /// Point at the item origin and its size.
    pub point: (Vec3, f32),
    /// Colour of the origin point, independent of the item.
    pub point_color: ItemColor,
    /// Line thickness for all primitives.
    pub thickness: f32,
    /// Colour of the arrow and sphere.
    pub color: ItemColor,
}

impl DebugShapes {
    /// Plans the primitives for `report`.
    #[must_use]
    pub fn for_report(report: &DebugReport) -> Self {
        let start = report.position;
        Self {
            arrow: ArrowShape {
                start,
                end: start + report.forward * DEBUG_ARROW_LENGTH,
                head_size: DEBUG_ARROW_HEAD_SIZE,
            },
            sphere: SphereShape {
                center: start,
                radius: DEBUG_SPHERE_RADIUS,
                segments: DEBUG_SPHERE_SEGMENTS,
            },
            point: (start, DEBUG_POINT_SIZE),
            point_color: ItemColor::RED,
            thickness: DEBUG_LINE_THICKNESS,
            color: report.color,
        }
    }
}
