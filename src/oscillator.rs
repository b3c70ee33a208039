//! Transformed sine and cosine waves.
//!
//! The oscillator is a pure function of its input. Items feed it their
//! elapsed lifetime to obtain the vertical bobbing offset.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Which periodic function a [`WaveShape`] samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// `sin`, zero at the origin.
    #[default]
    Sine,
    /// `cos`, at its peak at the origin.
    Cosine,
}

/// Amplitude, frequency, vertical offset and phase of a wave.
///
/// The defaults give a unit sine with a period of one second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveShape {
    /// Peak deviation from `offset`.
    pub amplitude: f64,
    /// Cycles per unit of input (hertz when the input is seconds).
    pub frequency: f64,
    /// Constant added to every sample.
    pub offset: f64,
    /// Phase shift in radians.
    pub phase: f64,
    /// Function to sample.
    pub waveform: Waveform,
}

impl Default for WaveShape {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            offset: 0.0,
            phase: 0.0,
            waveform: Waveform::Sine,
        }
    }
}

impl WaveShape {
    /// Zero-offset, zero-phase sine with the given amplitude and frequency.
    #[must_use]
    pub fn sine(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
            ..Self::default()
        }
    }

    /// Samples the wave at `value`.
    #[must_use]
    pub fn sample(&self, value: f64) -> f64 {
        transformed_wave(value, self)
    }
}

/// Computes `offset + amplitude * f(2π · frequency · value + phase)` where
/// `f` is the shape's [`Waveform`].
///
/// # Examples
///
/// ```
/// use drift::oscillator::{transformed_wave, WaveShape};
///
/// let shape = WaveShape::sine(30.0, 1.0);
/// assert!((transformed_wave(0.25, &shape) - 30.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn transformed_wave(value: f64, shape: &WaveShape) -> f64 {
    let angle = TAU * shape.frequency * value + shape.phase;
    let unit = match shape.waveform {
        Waveform::Sine => angle.sin(),
        Waveform::Cosine => angle.cos(),
    };
    shape.offset + shape.amplitude * unit
}

/// Transformed sine; see [`transformed_wave`].
#[must_use]
pub fn transformed_sine(value: f64, amplitude: f64, frequency: f64, offset: f64, phase: f64) -> f64 {
    transformed_wave(
        value,
        &WaveShape {
            amplitude,
            frequency,
            offset,
            phase,
            waveform: Waveform::Sine,
        },
    )
}

/// Transformed cosine; see [`transformed_wave`].
#[must_use]
pub fn transformed_cosine(
    value: f64,
    amplitude: f64,
    frequency: f64,
    offset: f64,
    phase: f64,
) -> f64 {
    transformed_wave(
        value,
        &WaveShape {
            amplitude,
            frequency,
            offset,
            phase,
            waveform: Waveform::Cosine,
        },
    )
}
