#![allow(dead_code)]

use ndarray::{array, Array2};

/// 5x7 test grid: a diagonal of distinct values with a zero column on the
/// left and a ones column on the right.
pub fn diag_image() -> Array2<f32> {
    array![
        [0., 1., 0., 0., 0., 0., 1.],
        [0., 0., 5., 0., 0., 0., 1.],
        [0., 0., 0., 3., 0., 0., 1.],
        [0., 0., 0., 0., 1., 0., 1.],
        [0., 0., 0., 0., 0., 1., 1.],
    ]
}

/// 15x11 grid with a diamond-shaped ridge surrounded by zeros.
pub fn diamond() -> Array2<f32> {
    array![
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 1., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 1., 1., 1., 0., 0., 0., 0.],
        [0., 0., 0., 1., 1., 6., 1., 1., 0., 0., 0.],
        [0., 0., 1., 1., 5., 1., 7., 1., 1., 0., 0.],
        [0., 0., 0., 1., 1., 8., 1., 1., 0., 0., 0.],
        [0., 0., 0., 0., 1., 1., 1., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 1., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
        [0., 0., 0., 0., 0., 0., 0., 0., 0., 0., 0.],
    ]
}

/// Content moved one row up; the vacated bottom row takes `fill`.
pub fn moved_up(im: &Array2<f32>, fill: f32) -> Array2<f32> {
    let (h, w) = im.dim();
    Array2::from_shape_fn((h, w), |(r, c)| if r + 1 < h { im[[r + 1, c]] } else { fill })
}

/// Content moved one row down; the vacated top row takes `fill`.
pub fn moved_down(im: &Array2<f32>, fill: f32) -> Array2<f32> {
    let (h, w) = im.dim();
    Array2::from_shape_fn((h, w), |(r, c)| if r > 0 { im[[r - 1, c]] } else { fill })
}

/// Content moved one column left; the vacated right column takes `fill`.
pub fn moved_left(im: &Array2<f32>, fill: f32) -> Array2<f32> {
    let (h, w) = im.dim();
    Array2::from_shape_fn((h, w), |(r, c)| if c + 1 < w { im[[r, c + 1]] } else { fill })
}

/// Content moved one column right; the vacated left column takes `fill`.
pub fn moved_right(im: &Array2<f32>, fill: f32) -> Array2<f32> {
    let (h, w) = im.dim();
    Array2::from_shape_fn((h, w), |(r, c)| if c > 0 { im[[r, c - 1]] } else { fill })
}

/// Gaussian blob sampled at a (possibly fractional) center. Sampling the
/// same continuous function at offset centers produces frames related by a
/// true sub-pixel translation.
pub fn gaussian_blob(h: usize, w: usize, cy: f64, cx: f64, sigma: f64) -> Array2<f32> {
    Array2::from_shape_fn((h, w), |(r, c)| {
        let dy = r as f64 - cy;
        let dx = c as f64 - cx;
        (-(dy * dy + dx * dx) / (2.0 * sigma * sigma)).exp() as f32
    })
}

pub fn has_nan(frame: &Array2<f32>) -> bool {
    frame.iter().any(|v| v.is_nan())
}

/// Assert two frames agree elementwise within `epsilon`, with NaN positions
/// matching exactly.
pub fn assert_frames_match(actual: &Array2<f32>, expected: &Array2<f32>, epsilon: f32) {
    assert_eq!(actual.dim(), expected.dim(), "shape mismatch");
    for ((r, c), &a) in actual.indexed_iter() {
        let e = expected[[r, c]];
        if a.is_nan() || e.is_nan() {
            assert!(
                a.is_nan() && e.is_nan(),
                "NaN mismatch at ({r}, {c}): {a} vs {e}"
            );
        } else {
            assert!(
                (a - e).abs() <= epsilon,
                "value mismatch at ({r}, {c}): {a} vs {e}"
            );
        }
    }
}
