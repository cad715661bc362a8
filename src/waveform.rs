//! Reference waveforms for the conversion demos.
//!
//! Both waveforms are 1 Hz signals biased into the unipolar 0–5 V range that
//! the quantizer expects: the raw ±1 shape is scaled by [`AMPLITUDE`] and
//! shifted up by the same amount. Unlike a streaming oscillator there is no
//! phase state to advance: a waveform here is a pure function of time, so it
//! can stand in for a continuous signal and be evaluated on any grid.

use std::f64::consts::TAU;

use crate::timebase::TimeSeries;

/// Gain and DC offset applied to the raw ±1 waveforms: half the 0–5 V swing.
pub const AMPLITUDE: f64 = 2.5;

/// A continuous-time voltage waveform, evaluated at arbitrary instants.
///
/// Implementations are pure functions over finite time values; there are no
/// error conditions. The provided [`evaluate`](Waveform::evaluate) maps the
/// waveform over a whole [`TimeSeries`], which guarantees the output signal
/// has exactly one value per instant.
pub trait Waveform {
    /// Voltage of the waveform at time `t` (in seconds).
    fn value_at(&self, t: f64) -> f64;

    /// Evaluates the waveform at every instant of `times`.
    ///
    /// The returned signal is index-aligned with `times` and has the same
    /// length.
    fn evaluate(&self, times: &TimeSeries) -> Vec<f64> {
        times.iter().map(|t| self.value_at(t)).collect()
    }
}

/// A 1 Hz sine wave biased into the 0–5 V range.
///
/// `value_at(t)` is `sin(2π·t) · 2.5 + 2.5`: it starts at the 2.5 V midpoint
/// and peaks at 5 V a quarter period in. The output never leaves `[0, 5]`.
///
/// # Examples
///
/// ```
/// use stairstep::{Sine, Waveform};
///
/// assert_eq!(Sine.value_at(0.0), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sine;

impl Waveform for Sine {
    fn value_at(&self, t: f64) -> f64 {
        (TAU * t).sin() * AMPLITUDE + AMPLITUDE
    }
}

/// A 1 Hz sawtooth wave biased into the 0–5 V range.
///
/// `value_at(t)` is `sawtooth_wave(t) · 2.5 + 2.5`: a ramp rising linearly
/// from 0 V to 5 V once per second, then snapping back.
///
/// # Examples
///
/// ```
/// use stairstep::{Sawtooth, Waveform};
///
/// assert_eq!(Sawtooth.value_at(0.0), 0.0);
/// assert_eq!(Sawtooth.value_at(0.5), 2.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sawtooth;

impl Waveform for Sawtooth {
    fn value_at(&self, t: f64) -> f64 {
        sawtooth_wave(t) * AMPLITUDE + AMPLITUDE
    }
}

/// The raw bipolar sawtooth shape with period 1.
///
/// Rises linearly from -1.0 to 1.0 over each period, then drops sharply back
/// to -1.0. The floor-based phase wrap keeps the shape correct for negative
/// times as well.
///
/// # Examples
///
/// ```
/// use stairstep::sawtooth_wave;
///
/// assert_eq!(sawtooth_wave(0.0), -1.0);
/// assert_eq!(sawtooth_wave(0.5), 0.0);
/// assert_eq!(sawtooth_wave(0.75), 0.5);
/// ```
pub fn sawtooth_wave(t: f64) -> f64 {
    2.0 * (t - t.floor()) - 1.0
}
