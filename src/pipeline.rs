//! The two conversion demos assembled end to end.
//!
//! [`adc_figure`] walks the analog-to-digital direction, from the
//! continuous sine through its discrete samples to the converter codes
//! they map to. [`dac_figure`] walks back, from a precomputed code
//! sequence through TTL voltages to the staircase a zero-order hold
//! makes of them. Each function returns a plain [`Figure`] that any
//! frontend (or test) can walk.

use crate::figure::{Figure, Layer, Panel};
use crate::quantize::{self, CODE_MAX, V_MAX};
use crate::sampler::Sampler;
use crate::timebase::TimeSeries;
use crate::waveform::{Sawtooth, Sine, Waveform};

/// Span of the analog-to-digital demo in seconds.
const ADC_SPAN: f64 = 5.0;
/// Fine grid step standing in for continuous time.
const ADC_FINE_STEP: f64 = 0.005;
/// Sample period of the analog-to-digital demo.
const ADC_SAMPLE_PERIOD: f64 = 0.1;

/// Span of the digital-to-analog demo in seconds.
const DAC_SPAN: f64 = 2.0;
/// Instant spacing of the digital-to-analog demo.
const DAC_STEP: f64 = 0.02;

/// Builds the analog-to-digital demo figure.
///
/// Three stacked panels follow the signal from the continuous 5 s sine
/// through its fifty 0.1 s samples to the converter code for each
/// sample. The code panel pins its vertical axis to the full 0..1024
/// code range so the codes read against the converter scale rather
/// than the data extent.
pub fn adc_figure() -> Figure {
    let fine = TimeSeries::with_step(0.0, ADC_SPAN, ADC_FINE_STEP);
    let signal = Sine.evaluate(&fine);

    let (instants, sampled) = Sampler::new(ADC_SAMPLE_PERIOD).sample(&Sine, &fine);
    let codes: Vec<f64> = sampled.iter().copied().map(quantize::to_digital).collect();

    Figure::new("ADC")
        .with_panel(
            Panel::new("Original signal").with_layer(Layer::line(
                "Original signal",
                fine.points().to_vec(),
                signal,
            )),
        )
        .with_panel(Panel::new("Sampled signal").with_layer(Layer::stem(
            "Sampled signal",
            instants.points().to_vec(),
            sampled,
        )))
        .with_panel(
            Panel::new("ADC output")
                .with_layer(Layer::stem("ADC output", instants.points().to_vec(), codes))
                .with_y_bounds(0.0, CODE_MAX + 1.0),
        )
}

/// Builds the digital-to-analog demo figure.
///
/// Three stacked panels over the same hundred instants follow the code
/// sequence from [`process_signal`] through the TTL voltage each code
/// reconstructs to, ending in the zero-order-hold staircase an ideal
/// converter would put on its output pin.
pub fn dac_figure() -> Figure {
    let grid = TimeSeries::with_step(0.0, DAC_SPAN, DAC_STEP);
    let codes = process_signal(&grid);
    let ttl: Vec<f64> = codes.iter().copied().map(quantize::to_ttl).collect();

    Figure::new("DAC")
        .with_panel(Panel::new("Process values").with_layer(Layer::stem(
            "Process values",
            grid.points().to_vec(),
            codes,
        )))
        .with_panel(Panel::new("Values in TTL").with_layer(Layer::stem(
            "Values in TTL",
            grid.points().to_vec(),
            ttl.clone(),
        )))
        .with_panel(Panel::new("DAC output").with_layer(Layer::step(
            "DAC output",
            grid.points().to_vec(),
            ttl,
        )))
}

/// Generates the code sequence fed into the digital-to-analog demo.
///
/// A biased sawtooth sweeps 0 to 5 V twice over the demo span; each
/// instant's voltage is scaled onto the code range and rounded to the
/// nearest integer code. The ramp climbs in increments of twenty or
/// twenty-one codes and tops out at 1003: the sawtooth resets at the
/// period boundary before its scaled value can reach full scale.
pub fn process_signal(times: &TimeSeries) -> Vec<f64> {
    times
        .iter()
        .map(|t| (Sawtooth.value_at(t) * (CODE_MAX / V_MAX)).round_ties_even())
        .collect()
}
