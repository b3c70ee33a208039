//! Per-item tuning randomised once at placement.
//!
//! Each item bobs at its own frequency and amplitude and is drawn in its own
//! colour. These are captured in an immutable [`ItemTuning`] when the item is
//! placed; activation and ticking never change them.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::TuningRanges;

/// Opaque RGB colour used for debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ItemColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl ItemColor {
    /// Pure red, used for the origin marker.
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };

    /// Unpacks the low 24 bits of `bits` as `0xRRGGBB`.
    ///
    /// # Examples
    /// ```
    /// use drift::tuning::ItemColor;
    /// let color = ItemColor::from_packed(0x7f12_34ab);
    /// assert_eq!((color.r, color.g, color.b), (0x12, 0x34, 0xab));
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to eight bits before narrowing."
    )]
    #[must_use]
    pub const fn from_packed(bits: u32) -> Self {
        Self {
            r: ((bits >> 16) & 0xff) as u8,
            g: ((bits >> 8) & 0xff) as u8,
            b: (bits & 0xff) as u8,
        }
    }

    /// Channels as normalised floats in `[0, 1]`.
    #[must_use]
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|channel| f32::from(channel) / 255.0)
    }
}

/// Frequency, amplitude and colour of one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemTuning {
    /// Bobbing frequency in hertz.
    pub frequency_hz: f32,
    /// Peak bobbing displacement.
    pub amplitude: f32,
    /// Debug colour.
    pub color: ItemColor,
}

impl Default for ItemTuning {
    fn default() -> Self {
        Self {
            frequency_hz: 1.0,
            amplitude: 1.0,
            color: ItemColor::default(),
        }
    }
}

impl ItemTuning {
    /// Draws a fresh tuning from `ranges`.
    ///
    /// Degenerate ranges (`min == max`) yield exactly that value.
    pub fn randomize<R: Rng + ?Sized>(rng: &mut R, ranges: &TuningRanges) -> Self {
        Self {
            frequency_hz: sample(rng, ranges.min_frequency, ranges.max_frequency),
            amplitude: sample(rng, ranges.min_amplitude, ranges.max_amplitude),
            color: ItemColor::from_packed(rng.gen_range(0..i32::MAX).unsigned_abs()),
        }
    }
}

fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min..max)
    } else {
        min
    }
}
