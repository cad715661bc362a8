//! Evenly spaced time grids that drive waveform evaluation.
//!
//! Every stage of the conversion demos is indexed by a [`TimeSeries`], from
//! the fine grid that stands in for continuous time down to the coarse grid
//! of sample instants; all of them share the same representation.

/// An immutable sequence of evenly spaced, strictly increasing time instants.
///
/// The grid covers the half-open span `[start, end)` at a fixed step; the end
/// bound itself is never included. The point count is
/// `ceil((end - start) / step)` and the instants are computed as
/// `start + i * step`, so the spacing is exact up to floating-point rounding
/// and a span that divides evenly by the step yields exactly `span / step`
/// points (`[0, 5)` at step `0.1` has 50).
///
/// # Examples
///
/// ```
/// use stairstep::TimeSeries;
///
/// let grid = TimeSeries::with_step(0.0, 5.0, 0.1);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid.points()[0], 0.0);
/// assert!(grid.points()[49] < 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    start: f64,
    end: f64,
    step: f64,
    points: Vec<f64>,
}

impl TimeSeries {
    /// Creates a time grid over `[start, end)` at the given step.
    ///
    /// An empty grid results when `end <= start`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not strictly positive.
    pub fn with_step(start: f64, end: f64, step: f64) -> Self {
        assert!(step > 0.0, "time step must be positive");

        let count = ((end - start) / step).ceil().max(0.0) as usize;
        let points = (0..count).map(|i| start + i as f64 * step).collect();

        Self {
            start,
            end,
            step,
            points,
        }
    }

    /// First instant of the span.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound of the span.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Spacing between consecutive instants.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of instants in the grid.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the grid holds no instants.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The instants as a slice.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Iterates over the instants by value.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_division_count() {
        let grid = TimeSeries::with_step(0.0, 4.0, 0.5);
        assert_eq!(grid.len(), 8);
        assert_eq!(
            grid.points(),
            &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]
        );
    }

    #[test]
    fn test_demo_grid_sizes() {
        // The three grids the conversion demos are built on.
        assert_eq!(TimeSeries::with_step(0.0, 5.0, 0.005).len(), 1000);
        assert_eq!(TimeSeries::with_step(0.0, 5.0, 0.1).len(), 50);
        assert_eq!(TimeSeries::with_step(0.0, 2.0, 0.02).len(), 100);
    }

    #[test]
    fn test_half_open_span() {
        let grid = TimeSeries::with_step(0.0, 5.0, 0.1);
        let last = *grid.points().last().unwrap();
        assert!(last < 5.0);
    }

    #[test]
    fn test_starts_at_start() {
        let grid = TimeSeries::with_step(0.25, 1.0, 0.25);
        assert_eq!(grid.points()[0], 0.25);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_strictly_increasing() {
        let grid = TimeSeries::with_step(0.0, 5.0, 0.005);
        for pair in grid.points().windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_even_spacing() {
        let grid = TimeSeries::with_step(0.0, 2.0, 0.02);
        for pair in grid.points().windows(2) {
            assert!((pair[1] - pair[0] - 0.02).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_start() {
        let grid = TimeSeries::with_step(-1.0, 1.0, 0.5);
        assert_eq!(grid.points(), &[-1.0, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_empty_when_end_not_after_start() {
        assert!(TimeSeries::with_step(1.0, 1.0, 0.1).is_empty());
        assert!(TimeSeries::with_step(2.0, 1.0, 0.1).is_empty());
    }

    #[test]
    fn test_accessors() {
        let grid = TimeSeries::with_step(0.0, 2.0, 0.02);
        assert_eq!(grid.start(), 0.0);
        assert_eq!(grid.end(), 2.0);
        assert_eq!(grid.step(), 0.02);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_iter_matches_points() {
        let grid = TimeSeries::with_step(0.0, 1.0, 0.25);
        let collected: Vec<f64> = grid.iter().collect();
        assert_eq!(collected, grid.points());
    }

    #[test]
    #[should_panic(expected = "time step must be positive")]
    fn test_zero_step_panics() {
        let _ = TimeSeries::with_step(0.0, 1.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "time step must be positive")]
    fn test_negative_step_panics() {
        let _ = TimeSeries::with_step(0.0, 1.0, -0.1);
    }
}
