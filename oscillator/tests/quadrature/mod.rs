//! Quadrature helpers shared by the integration tests.

use itertools::Itertools;

/// Trapezoidal rule for samples `y` taken on the (not necessarily uniform) grid `x`.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "grid and samples must have the same length");

    x.iter()
        .zip(y)
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| 0.5 * (x1 - x0) * (y0 + y1))
        .sum()
}

/// `points` evenly spaced coordinates covering `[-half_width, half_width]`.
pub fn symmetric_grid(half_width: f64, points: usize) -> Vec<f64> {
    let step = 2.0 * half_width / (points - 1) as f64;
    (0..points).map(|i| -half_width + step * i as f64).collect()
}
