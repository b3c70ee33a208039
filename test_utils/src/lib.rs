//! Utility helpers for tests.
//!
//! Assertions for vectors and quaternions, builders for items with
//! predictable behaviour, and a headless Bevy app with a manual clock.

pub mod app;
pub mod items;

use glam::{Quat, Vec3};

/// Assert that all strings in `keys` are present in `text`.
///
/// # Panics
/// Panics with a helpful message if any key is missing.
pub fn assert_all_present(text: &str, keys: &[&str]) {
    for key in keys {
        assert!(text.contains(key), "{key} not found in output");
    }
}

/// Assert that every component of `actual` is within `tolerance` of `expected`.
///
/// # Panics
/// Panics naming both vectors when any component differs by more.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::assert_vec3_near;
/// assert_vec3_near(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0005), 1e-3);
/// ```
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance),
        "expected {expected:?} within {tolerance}, got {actual:?}"
    );
}

/// Assert that two quaternions describe the same rotation within `tolerance`.
///
/// `q` and `-q` are treated as equal.
///
/// # Panics
/// Panics naming both quaternions when neither sign matches.
pub fn assert_quat_near(actual: Quat, expected: Quat, tolerance: f32) {
    assert!(
        actual.abs_diff_eq(expected, tolerance) || actual.abs_diff_eq(-expected, tolerance),
        "expected {expected:?} within {tolerance}, got {actual:?}"
    );
}
