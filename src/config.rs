//! Configuration records for floating items.
//!
//! Settings are chosen once, outside the per-frame path, and validated
//! before any item uses them. They deserialise from JSON with every field
//! optional, so a file only needs to mention what it overrides.
//!
//! ```
//! use drift::config::{ItemSettings, MovementPolicy};
//!
//! let settings = ItemSettings::from_json_str(
//!     r#"{ "movement": { "policy": "eased", "speed": 3.0, "tolerance": 10.0 } }"#,
//! )
//! .unwrap();
//! assert_eq!(
//!     settings.movement,
//!     MovementPolicy::Eased { speed: 3.0, tolerance: 10.0 }
//! );
//! ```

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numeric::is_non_negative;
use crate::targeting::TargetMode;
use crate::{
    CONSTANT_MOVE_SPEED, CONSTANT_MOVE_TOLERANCE, CONSTANT_ROTATE_SPEED,
    CONSTANT_ROTATE_TOLERANCE, EASED_MOVE_SPEED, EASED_MOVE_TOLERANCE, EASED_ROTATE_SPEED,
    EASED_ROTATE_TOLERANCE, MAX_OSCILLATION_AMPLITUDE, MAX_OSCILLATION_FREQUENCY,
    MIN_OSCILLATION_AMPLITUDE, MIN_OSCILLATION_FREQUENCY,
};

/// Errors raised while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("failed to read settings from {path}: {source}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The settings text is not valid JSON for [`ItemSettings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is outside its permitted range.
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// How an item approaches its movement goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum MovementPolicy {
    /// Covers a speed-proportional fraction of the remaining distance and
    /// sets the position absolutely.
    Eased {
        /// Fraction of the remaining distance covered per second.
        speed: f32,
        /// Per-axis arrival tolerance.
        tolerance: f32,
    },
    /// Moves at a fixed speed by applying world-space offsets.
    Constant {
        /// World units per second.
        speed: f32,
        /// Per-axis arrival tolerance.
        tolerance: f32,
    },
}

impl MovementPolicy {
    /// Eased movement with the default speed and tolerance.
    #[must_use]
    pub const fn eased() -> Self {
        Self::Eased {
            speed: EASED_MOVE_SPEED,
            tolerance: EASED_MOVE_TOLERANCE,
        }
    }

    /// Constant-speed movement with the default speed and tolerance.
    #[must_use]
    pub const fn constant() -> Self {
        Self::Constant {
            speed: CONSTANT_MOVE_SPEED,
            tolerance: CONSTANT_MOVE_TOLERANCE,
        }
    }

    /// Speed and tolerance of the policy.
    #[must_use]
    pub const fn parameters(&self) -> (f32, f32) {
        match *self {
            Self::Eased { speed, tolerance } | Self::Constant { speed, tolerance } => {
                (speed, tolerance)
            }
        }
    }
}

impl Default for MovementPolicy {
    fn default() -> Self {
        Self::constant()
    }
}

/// How an item approaches its orientation goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Slerps by a speed-proportional fraction and sets the orientation.
    Eased {
        /// Fraction of the remaining arc covered per second.
        speed: f32,
        /// Quaternion component tolerance for arrival.
        tolerance: f32,
    },
    /// Turns at a fixed angular speed by applying world-space rotations.
    Constant {
        /// Radians per second.
        speed: f32,
        /// Quaternion component tolerance for arrival.
        tolerance: f32,
    },
}

impl RotationPolicy {
    /// Eased rotation with the default speed and tolerance.
    #[must_use]
    pub const fn eased() -> Self {
        Self::Eased {
            speed: EASED_ROTATE_SPEED,
            tolerance: EASED_ROTATE_TOLERANCE,
        }
    }

    /// Constant-speed rotation with the default speed and tolerance.
    #[must_use]
    pub const fn constant() -> Self {
        Self::Constant {
            speed: CONSTANT_ROTATE_SPEED,
            tolerance: CONSTANT_ROTATE_TOLERANCE,
        }
    }

    /// Speed and tolerance of the policy.
    #[must_use]
    pub const fn parameters(&self) -> (f32, f32) {
        match *self {
            Self::Eased { speed, tolerance } | Self::Constant { speed, tolerance } => {
                (speed, tolerance)
            }
        }
    }
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self::constant()
    }
}

/// Behaviour settings shared by every item spawned with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemSettings {
    /// How movement goals are chosen.
    pub targeting: TargetMode,
    /// How the item moves towards its goal.
    pub movement: MovementPolicy,
    /// How the item turns towards its goal.
    pub rotation: RotationPolicy,
    /// Direction of the bobbing offset. The default is the Z-up vertical.
    pub oscillation_axis: Vec3,
}

impl Default for ItemSettings {
    fn default() -> Self {
        Self {
            targeting: TargetMode::default(),
            movement: MovementPolicy::default(),
            rotation: RotationPolicy::default(),
            oscillation_axis: Vec3::Z,
        }
    }
}

impl ItemSettings {
    /// Parses settings from JSON and validates them.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a JSON settings file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Self::from_json_str`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Checks every speed, tolerance and extent.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (move_speed, move_tolerance) = self.movement.parameters();
        check_speed("movement.speed", move_speed)?;
        check_tolerance("movement.tolerance", move_tolerance)?;
        let (rotate_speed, rotate_tolerance) = self.rotation.parameters();
        check_speed("rotation.speed", rotate_speed)?;
        check_tolerance("rotation.tolerance", rotate_tolerance)?;

        match self.targeting {
            TargetMode::RandomInBox { half_extent } if !is_non_negative(half_extent) => {
                return Err(ConfigError::invalid(
                    "targeting.half_extent",
                    format!("expected a finite, non-negative extent, got {half_extent}"),
                ));
            }
            TargetMode::FixedOffset { offset } if !offset.is_finite() => {
                return Err(ConfigError::invalid(
                    "targeting.offset",
                    format!("expected finite components, got {offset:?}"),
                ));
            }
            _ => {}
        }

        if !self.oscillation_axis.is_finite() || self.oscillation_axis == Vec3::ZERO {
            return Err(ConfigError::invalid(
                "oscillation_axis",
                format!("expected a finite, non-zero axis, got {:?}", self.oscillation_axis),
            ));
        }
        Ok(())
    }
}

/// Ranges the per-item tuning is drawn from at placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningRanges {
    /// Lowest bobbing frequency in hertz.
    pub min_frequency: f32,
    /// Highest bobbing frequency in hertz.
    pub max_frequency: f32,
    /// Smallest bobbing amplitude.
    pub min_amplitude: f32,
    /// Largest bobbing amplitude.
    pub max_amplitude: f32,
}

impl Default for TuningRanges {
    fn default() -> Self {
        Self {
            min_frequency: MIN_OSCILLATION_FREQUENCY,
            max_frequency: MAX_OSCILLATION_FREQUENCY,
            min_amplitude: MIN_OSCILLATION_AMPLITUDE,
            max_amplitude: MAX_OSCILLATION_AMPLITUDE,
        }
    }
}

impl TuningRanges {
    /// Checks that both ranges are finite, non-negative and ordered.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the offending range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("frequency", self.min_frequency, self.max_frequency)?;
        check_range("amplitude", self.min_amplitude, self.max_amplitude)
    }
}

fn check_speed(field: &'static str, speed: f32) -> Result<(), ConfigError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("expected a finite, positive speed, got {speed}"),
        ))
    }
}

fn check_tolerance(field: &'static str, tolerance: f32) -> Result<(), ConfigError> {
    if is_non_negative(tolerance) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("expected a finite, non-negative tolerance, got {tolerance}"),
        ))
    }
}

fn check_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if is_non_negative(min) && is_non_negative(max) && min <= max {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("expected 0 <= min <= max, got {min}..{max}"),
        ))
    }
}
