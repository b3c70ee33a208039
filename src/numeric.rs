//! Numeric conversion helpers used across the crate.
//!
//! The oscillator works in `f64` so long-lived items keep a precise phase,
//! while transforms are `f32`. These helpers guard the narrowing and the
//! interpolation alpha computations.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Clamp an interpolation alpha into `[0, 1]`.
///
/// Non-finite input maps to `0.0` so a corrupted delta never moves an item.
///
/// # Examples
/// ```
/// use drift::numeric::unit_alpha;
/// assert_eq!(unit_alpha(1.7), 1.0);
/// assert_eq!(unit_alpha(-0.2), 0.0);
/// assert_eq!(unit_alpha(f32::NAN), 0.0);
/// ```
#[must_use]
pub fn unit_alpha(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Returns `true` when `value` is finite and not negative.
#[must_use]
pub fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
