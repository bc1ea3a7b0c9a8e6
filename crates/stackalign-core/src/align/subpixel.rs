use ndarray::Array2;

use crate::consts::CURVATURE_EPSILON;

/// Refine an integer correlation peak to sub-pixel precision.
///
/// Fits a 1-D parabola through the peak and its two neighbors along each
/// axis and returns the fractional offset of the vertex, clamped to
/// +/- 0.5 px. Neighbors wrap circularly, matching the periodicity of the
/// correlation surface, so a peak on the surface edge still refines (a true
/// half-pixel shift splits its energy across the wrap boundary).
pub fn refine_peak_parabolic(
    correlation: &Array2<f64>,
    peak_row: usize,
    peak_col: usize,
) -> (f64, f64) {
    let (h, w) = correlation.dim();

    let center = correlation[[peak_row, peak_col]];
    let above = correlation[[(peak_row + h - 1) % h, peak_col]];
    let below = correlation[[(peak_row + 1) % h, peak_col]];
    let left = correlation[[peak_row, (peak_col + w - 1) % w]];
    let right = correlation[[peak_row, (peak_col + 1) % w]];

    (
        vertex_offset(above, center, below),
        vertex_offset(left, center, right),
    )
}

/// Vertex of the parabola through `(-1, prev)`, `(0, curr)`, `(1, next)`.
fn vertex_offset(prev: f64, curr: f64, next: f64) -> f64 {
    let curvature = prev - 2.0 * curr + next;
    if curvature.abs() < CURVATURE_EPSILON {
        0.0
    } else {
        ((prev - next) / (2.0 * curvature)).clamp(-0.5, 0.5)
    }
}
