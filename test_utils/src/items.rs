//! Builders for floating items with predictable behaviour.

use drift::debug::DebugSink;
use drift::{
    FloatingItem, FrameOutcome, ItemMotion, ItemSettings, ItemTuning, MovementPolicy,
    RotationPolicy, SimHost, TargetMode,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic random source for tests.
///
/// # Examples
/// ```
/// use rand::Rng;
/// let mut a = test_utils::items::seeded_rng(1);
/// let mut b = test_utils::items::seeded_rng(1);
/// assert_eq!(a.gen::<u32>(), b.gen::<u32>());
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Tuning that never bobs, so positions reflect the base motion only.
#[must_use]
pub fn still_tuning() -> ItemTuning {
    ItemTuning {
        amplitude: 0.0,
        ..ItemTuning::default()
    }
}

/// Settings whose movement goal is always `base + offset`.
#[must_use]
pub fn fixed_offset_settings(
    offset: Vec3,
    movement: MovementPolicy,
    rotation: RotationPolicy,
) -> ItemSettings {
    ItemSettings {
        targeting: TargetMode::FixedOffset { offset },
        movement,
        rotation,
        ..ItemSettings::default()
    }
}

/// Item heading for `base + offset` with constant policies and no bobbing.
#[must_use]
pub fn constant_item(offset: Vec3) -> FloatingItem {
    FloatingItem::new(
        "Item_0",
        fixed_offset_settings(offset, MovementPolicy::constant(), RotationPolicy::constant()),
        still_tuning(),
    )
}

/// Ticks `motion` `frames` times against `host`, collecting every outcome.
pub fn run_frames<D: DebugSink + ?Sized>(
    item: &FloatingItem,
    motion: &mut ItemMotion,
    host: &mut SimHost,
    rng: &mut StdRng,
    sink: &mut D,
    frames: usize,
) -> Vec<FrameOutcome> {
    let mut outcomes = Vec::with_capacity(frames);
    for _ in 0..frames {
        outcomes.push(motion.tick(item, &mut *host, &mut *rng, &mut *sink));
    }
    outcomes
}
