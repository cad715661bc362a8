//! Prints a text summary of both conversion figures.
//!
//! Useful for checking the pipeline on a machine with no display:
//! `cargo run --example headless --no-default-features`

use anyhow::ensure;
use stairstep::{Figure, adc_figure, dac_figure};

fn main() -> Result<(), anyhow::Error> {
    for figure in [adc_figure(), dac_figure()] {
        describe(&figure)?;
    }
    Ok(())
}

fn describe(figure: &Figure) -> Result<(), anyhow::Error> {
    println!("{}", figure.title());
    for panel in figure.panels() {
        for layer in panel.layers() {
            ensure!(!layer.is_empty(), "{} has an empty layer", panel.title());
            let (low, high) = extent(layer.values());
            println!(
                "  {:<16} {:?} with {:>4} points, values {low:.3} to {high:.3}",
                layer.label(),
                layer.kind(),
                layer.len(),
            );
        }
    }
    Ok(())
}

fn extent(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), &v| {
            (low.min(v), high.max(v))
        })
}
