use stairstep::{adc_figure, dac_figure, viewer};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let figures = vec![adc_figure(), dac_figure()];
    for figure in &figures {
        log::info!(
            "figure {} ready with {} panels",
            figure.title(),
            figure.panels().len()
        );
    }
    viewer::show(figures)
}
