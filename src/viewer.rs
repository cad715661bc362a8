//! Interactive frontend for the conversion figures.
//!
//! Opens one native window and lays each [`Figure`] out as a movable
//! child window holding its panels as stacked plots. Layers are drawn
//! according to their [`LayerKind`], so the figure data stays free of
//! any drawing detail.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, PlotUi, Points};

use crate::figure::{Figure, Layer, LayerKind, Panel, zero_order_hold};

const PANEL_HEIGHT: f32 = 220.0;
const STEM_COLOR: Color32 = Color32::from_rgba_premultiplied(160, 30, 30, 160);
const MARKER_COLOR: Color32 = Color32::RED;

/// Runs the viewer until its window is closed.
///
/// Blocks on the native event loop; returns once the user closes the
/// window or an error if the backend fails to start.
pub fn show(figures: Vec<Figure>) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([780.0, 880.0])
            .with_title("stairstep"),
        ..Default::default()
    };
    eframe::run_native(
        "stairstep",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(figures)))),
    )
}

struct ViewerApp {
    figures: Vec<Figure>,
}

impl ViewerApp {
    fn new(figures: Vec<Figure>) -> Self {
        Self { figures }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |_ui| {});
        for (index, figure) in self.figures.iter().enumerate() {
            let stagger = 16.0 + 40.0 * index as f32;
            egui::Window::new(figure.title())
                .default_pos([stagger, stagger])
                .default_size([680.0, 760.0])
                .show(ctx, |ui| draw_figure(ui, figure));
        }
    }
}

fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
    for (index, panel) in figure.panels().iter().enumerate() {
        ui.strong(panel.title());
        let mut plot = Plot::new(format!("{}-{index}", figure.title()))
            .height(PANEL_HEIGHT)
            .legend(Legend::default())
            .show_axes(true)
            .show_grid(true);
        if panel.y_bounds().is_some() {
            // Fixed-axis panels are not navigable; their bounds are
            // reimposed every frame.
            plot = plot
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false);
        }
        plot.show(ui, |plot_ui| {
            for layer in panel.layers() {
                draw_layer(plot_ui, layer);
            }
            if let Some((low, high)) = panel.y_bounds() {
                let (left, right) = time_span(panel);
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([left, low], [right, high]));
            }
        });
    }
}

fn draw_layer(plot_ui: &mut PlotUi, layer: &Layer) {
    match layer.kind() {
        LayerKind::Line => {
            let series: PlotPoints = layer.points().map(|(t, v)| [t, v]).collect();
            plot_ui.line(Line::new(series).name(layer.label()).width(1.5));
        }
        LayerKind::Stem => {
            // Only the markers are named: one legend entry per layer.
            for (t, v) in layer.points() {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[t, 0.0], [t, v]]))
                        .color(STEM_COLOR)
                        .width(1.0),
                );
            }
            let markers: PlotPoints = layer.points().map(|(t, v)| [t, v]).collect();
            plot_ui.points(
                Points::new(markers)
                    .radius(2.5)
                    .color(MARKER_COLOR)
                    .name(layer.label()),
            );
        }
        LayerKind::Step => {
            let (time, values) = zero_order_hold(layer.time(), layer.values());
            let series: PlotPoints = time.into_iter().zip(values).map(|(t, v)| [t, v]).collect();
            plot_ui.line(
                Line::new(series)
                    .color(MARKER_COLOR)
                    .name(layer.label())
                    .width(1.5),
            );
        }
    }
}

/// Horizontal extent of a panel's data with a small margin, used when
/// the vertical axis is imposed rather than fitted.
fn time_span(panel: &Panel) -> (f64, f64) {
    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for layer in panel.layers() {
        for &t in layer.time() {
            low = low.min(t);
            high = high.max(t);
        }
    }
    if low > high {
        return (0.0, 1.0);
    }
    let margin = ((high - low) * 0.02).max(0.01);
    (low - margin, high + margin)
}
