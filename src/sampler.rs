//! Discrete-time sampling of continuous waveforms.

use crate::timebase::TimeSeries;
use crate::waveform::Waveform;

/// Picks evenly spaced sample instants out of a continuous-time span.
///
/// Given a fine-grained reference grid (standing in for continuous time) and
/// a sample period, the sampler derives the coarser grid of sample instants
/// over the same span and evaluates a waveform at them.
///
/// The period should be an integer submultiple of the waveform period for a
/// clean picture; the demos sample the 1 s waveforms at 0.1 s, ten samples
/// per cycle. Nothing checks this at runtime: a mismatched period silently
/// aliases, which is an accepted simplification here, not a defect to guard
/// against.
///
/// # Examples
///
/// ```
/// use stairstep::{Sampler, Sine, TimeSeries};
///
/// let fine = TimeSeries::with_step(0.0, 5.0, 0.005);
/// let (instants, values) = Sampler::new(0.1).sample(&Sine, &fine);
/// assert_eq!(instants.len(), 50);
/// assert_eq!(values.len(), 50);
/// assert_eq!(values[0], 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampler {
    period: f64,
}

impl Sampler {
    /// Creates a sampler with the given sample period (in seconds).
    ///
    /// # Panics
    ///
    /// Panics if `period` is not strictly positive.
    pub fn new(period: f64) -> Self {
        assert!(period > 0.0, "sample period must be positive");
        Self { period }
    }

    /// The sample period in seconds.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Derives the grid of sample instants covering the same `[start, end)`
    /// span as `reference`, spaced by this sampler's period.
    pub fn resample(&self, reference: &TimeSeries) -> TimeSeries {
        TimeSeries::with_step(reference.start(), reference.end(), self.period)
    }

    /// Samples `wave` across the span of `reference`.
    ///
    /// Returns the sample instants together with the waveform values at
    /// those instants; the two are index-aligned and of equal length.
    pub fn sample<W: Waveform>(&self, wave: &W, reference: &TimeSeries) -> (TimeSeries, Vec<f64>) {
        let instants = self.resample(reference);
        let values = wave.evaluate(&instants);
        (instants, values)
    }
}
