//! Stairstep - an analog/digital conversion demo for Rust
//!
//! This library models an ideal ADC and DAC as inspectable figure data, with an optional egui viewer.

pub mod figure;
pub mod pipeline;
pub mod quantize;
pub mod sampler;
pub mod timebase;
pub mod waveform;

#[cfg(feature = "viewer")]
pub mod viewer;

// Re-export commonly used types at the crate root
pub use figure::{Figure, Layer, LayerKind, Panel, zero_order_hold};
pub use pipeline::{adc_figure, dac_figure, process_signal};
pub use sampler::Sampler;
pub use timebase::TimeSeries;
pub use waveform::{AMPLITUDE, Sawtooth, Sine, Waveform, sawtooth_wave};
