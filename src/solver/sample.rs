//! Sampling the parabola for plotting.

use super::Coefficients;

/// Integer x-range to sample over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    /// First x value.
    pub x_min: i64,
    /// Upper bound, included when reachable by whole steps.
    pub x_max: i64,
    /// Distance between consecutive x values. Zero yields no samples.
    pub step: u32,
}

impl SampleRange {
    /// Create a sample range.
    pub fn new(x_min: i64, x_max: i64, step: u32) -> Self {
        Self { x_min, x_max, step }
    }

    /// Iterate over the x values of the range.
    pub fn xs(&self) -> impl Iterator<Item = i64> {
        let step = self.step as usize;
        let range = if step == 0 || self.x_min > self.x_max {
            // Empty
            1..=0
        } else {
            self.x_min..=self.x_max
        };
        range.step_by(step.max(1))
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            x_min: -50,
            x_max: 50,
            step: 1,
        }
    }
}

/// Ordered `(x, y)` points of a quadratic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSeries {
    points: Vec<(i64, f64)>,
}

impl SampleSeries {
    /// The sampled points.
    pub fn points(&self) -> &[(i64, f64)] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points converted for chart rendering.
    pub fn to_chart_data(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&(x, y)| (x as f64, y)).collect()
    }

    /// Points whose y value lies inside `[y_min, y_max]`.
    pub fn visible(&self, y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter(|(_, y)| (y_min..=y_max).contains(y))
            .map(|&(x, y)| (x as f64, y))
            .collect()
    }
}

impl FromIterator<(i64, f64)> for SampleSeries {
    fn from_iter<I: IntoIterator<Item = (i64, f64)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Sample `a*x^2 + b*x + c` over `range`.
pub fn sample(coeffs: &Coefficients, range: &SampleRange) -> SampleSeries {
    let coeffs = *coeffs;
    range
        .xs()
        .map(|x| (x, coeffs.evaluate(x as f64)))
        .collect()
}
