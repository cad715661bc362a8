//! Figures, panels, and render layers.
//!
//! A [`Figure`] is a plain data description of one demo window: a titled
//! stack of [`Panel`]s, each holding one or more [`Layer`]s of
//! index-aligned time/value series. Nothing here draws; the structures
//! exist so the conversion stages can be assembled and inspected without
//! a display, and so a frontend can walk them and render each layer by
//! its [`LayerKind`].

/// How a layer's points should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Continuous polyline through the points.
    Line,
    /// Discrete samples: a marker per point with a vertical drop line
    /// down to zero.
    Stem,
    /// Zero-order-hold staircase: each value held flat until the next
    /// instant.
    Step,
}

/// One series of points within a panel, tagged with how to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    label: String,
    kind: LayerKind,
    time: Vec<f64>,
    values: Vec<f64>,
}

impl Layer {
    fn new(label: impl Into<String>, kind: LayerKind, time: Vec<f64>, values: Vec<f64>) -> Self {
        assert_eq!(
            time.len(),
            values.len(),
            "layer time and value series must be the same length"
        );
        Self {
            label: label.into(),
            kind,
            time,
            values,
        }
    }

    /// Creates a continuous-line layer.
    ///
    /// # Panics
    ///
    /// Panics if `time` and `values` differ in length.
    pub fn line(label: impl Into<String>, time: Vec<f64>, values: Vec<f64>) -> Self {
        Self::new(label, LayerKind::Line, time, values)
    }

    /// Creates a discrete-sample (stem) layer.
    ///
    /// # Panics
    ///
    /// Panics if `time` and `values` differ in length.
    pub fn stem(label: impl Into<String>, time: Vec<f64>, values: Vec<f64>) -> Self {
        Self::new(label, LayerKind::Stem, time, values)
    }

    /// Creates a staircase (zero-order-hold) layer.
    ///
    /// # Panics
    ///
    /// Panics if `time` and `values` differ in length.
    pub fn step(label: impl Into<String>, time: Vec<f64>, values: Vec<f64>) -> Self {
        Self::new(label, LayerKind::Step, time, values)
    }

    /// The legend label for this layer.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// How this layer should be drawn.
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// The time coordinates, index-aligned with [`Layer::values`].
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// The value coordinates, index-aligned with [`Layer::time`].
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(time, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.time.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of points in the layer.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Returns `true` if the layer holds no points.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// A titled plot area holding one or more layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    title: String,
    layers: Vec<Layer>,
    y_bounds: Option<(f64, f64)>,
}

impl Panel {
    /// Creates an empty panel with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            layers: Vec::new(),
            y_bounds: None,
        }
    }

    /// Adds a layer to the panel.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Fixes the vertical axis to `[low, high]` instead of fitting it to
    /// the data.
    pub fn with_y_bounds(mut self, low: f64, high: f64) -> Self {
        self.y_bounds = Some((low, high));
        self
    }

    /// The panel title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The layers in draw order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The fixed vertical axis range, if any.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.y_bounds
    }
}

/// A titled stack of panels describing one demo window.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    panels: Vec<Panel>,
}

impl Figure {
    /// Creates an empty figure with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: Vec::new(),
        }
    }

    /// Adds a panel below any existing ones.
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// The figure title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The panels in top-to-bottom order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

/// Expands a sample series into the polyline of its zero-order-hold
/// staircase.
///
/// Each value is held flat until the next instant, so `n` input points
/// become `2n - 1` output points: the original point, then a horizontal
/// segment to the next instant followed by a vertical jump there.
///
/// # Panics
///
/// Panics if `time` and `values` differ in length.
///
/// # Examples
///
/// ```
/// use stairstep::figure::zero_order_hold;
///
/// let (t, v) = zero_order_hold(&[0.0, 1.0, 2.0], &[5.0, 3.0, 8.0]);
/// assert_eq!(t, vec![0.0, 1.0, 1.0, 2.0, 2.0]);
/// assert_eq!(v, vec![5.0, 5.0, 3.0, 3.0, 8.0]);
/// ```
pub fn zero_order_hold(time: &[f64], values: &[f64]) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        time.len(),
        values.len(),
        "staircase time and value series must be the same length"
    );
    if time.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut t = Vec::with_capacity(2 * time.len() - 1);
    let mut v = Vec::with_capacity(2 * values.len() - 1);
    t.push(time[0]);
    v.push(values[0]);
    for i in 1..time.len() {
        t.push(time[i]);
        v.push(values[i - 1]);
        t.push(time[i]);
        v.push(values[i]);
    }
    (t, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> (Vec<f64>, Vec<f64>) {
        let time: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let values: Vec<f64> = (0..n).map(|i| (i * i) as f64).collect();
        (time, values)
    }

    #[test]
    fn test_layer_constructors_set_kind() {
        let (t, v) = ramp(4);
        assert_eq!(Layer::line("a", t.clone(), v.clone()).kind(), LayerKind::Line);
        assert_eq!(Layer::stem("b", t.clone(), v.clone()).kind(), LayerKind::Stem);
        assert_eq!(Layer::step("c", t, v).kind(), LayerKind::Step);
    }

    #[test]
    fn test_layer_accessors() {
        let layer = Layer::line("Original signal", vec![0.0, 0.5], vec![2.5, 2.5]);
        assert_eq!(layer.label(), "Original signal");
        assert_eq!(layer.time(), &[0.0, 0.5]);
        assert_eq!(layer.values(), &[2.5, 2.5]);
        assert_eq!(layer.len(), 2);
        assert!(!layer.is_empty());
    }

    #[test]
    fn test_layer_points_pairs_time_with_values() {
        let layer = Layer::stem("s", vec![0.0, 0.1, 0.2], vec![1.0, 2.0, 3.0]);
        let pairs: Vec<(f64, f64)> = layer.points().collect();
        assert_eq!(pairs, vec![(0.0, 1.0), (0.1, 2.0), (0.2, 3.0)]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_mismatched_series_panics() {
        let _ = Layer::line("bad", vec![0.0, 1.0], vec![5.0]);
    }

    #[test]
    fn test_panel_builder() {
        let (t, v) = ramp(3);
        let panel = Panel::new("ADC output")
            .with_layer(Layer::stem("codes", t, v))
            .with_y_bounds(0.0, 1024.0);
        assert_eq!(panel.title(), "ADC output");
        assert_eq!(panel.layers().len(), 1);
        assert_eq!(panel.y_bounds(), Some((0.0, 1024.0)));
    }

    #[test]
    fn test_panel_defaults_to_fitted_axes() {
        assert_eq!(Panel::new("p").y_bounds(), None);
    }

    #[test]
    fn test_figure_stacks_panels_in_order() {
        let figure = Figure::new("ADC")
            .with_panel(Panel::new("first"))
            .with_panel(Panel::new("second"));
        assert_eq!(figure.title(), "ADC");
        let titles: Vec<&str> = figure.panels().iter().map(Panel::title).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_zero_order_hold_toy_staircase() {
        let (t, v) = zero_order_hold(&[0.0, 1.0, 2.0], &[5.0, 3.0, 8.0]);
        assert_eq!(t, vec![0.0, 1.0, 1.0, 2.0, 2.0]);
        assert_eq!(v, vec![5.0, 5.0, 3.0, 3.0, 8.0]);
    }

    #[test]
    fn test_zero_order_hold_point_count() {
        let (time, values) = ramp(100);
        let (t, v) = zero_order_hold(&time, &values);
        assert_eq!(t.len(), 199);
        assert_eq!(v.len(), 199);
    }

    #[test]
    fn test_zero_order_hold_keeps_endpoints() {
        let (time, values) = ramp(7);
        let (t, v) = zero_order_hold(&time, &values);
        assert_eq!(t[0], time[0]);
        assert_eq!(v[0], values[0]);
        assert_eq!(*t.last().unwrap(), *time.last().unwrap());
        assert_eq!(*v.last().unwrap(), *values.last().unwrap());
    }

    #[test]
    fn test_zero_order_hold_empty_input() {
        let (t, v) = zero_order_hold(&[], &[]);
        assert!(t.is_empty());
        assert!(v.is_empty());
    }

    #[test]
    fn test_zero_order_hold_single_point() {
        let (t, v) = zero_order_hold(&[0.5], &[3.0]);
        assert_eq!(t, vec![0.5]);
        assert_eq!(v, vec![3.0]);
    }
}
