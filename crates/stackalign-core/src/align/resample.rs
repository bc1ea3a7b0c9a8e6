//! Sub-pixel frame translation with invalid-border marking.

use ndarray::{s, Array2};

use crate::frame::Shift;

/// Resample `image` translated by `shift` using separable linear
/// interpolation.
///
/// Output pixel `(r, c)` reads source coordinate `(r - dy, c - dx)`; source
/// samples outside the grid clamp to the nearest edge value. Whether a
/// border pixel is valid at all is decided by [`shift_fill`], not by the
/// blend. An axis with an integer shift copies values exactly, so a
/// whole-pixel shift is a permutation, not a lossy interpolation.
pub fn resample_shift(image: &Array2<f32>, shift: Shift) -> Array2<f32> {
    let (h, w) = image.dim();
    Array2::from_shape_fn((h, w), |(row, col)| {
        interp_clamped(image, row as f64 - shift.dy, col as f64 - shift.dx)
    })
}

/// Shift a frame and mark the border rows/columns that left the original
/// grid as NaN.
///
/// The invalidated line count per axis is the shift rounded to the nearest
/// integer, half away from zero. A fractional part below 0.5 leaves only the
/// lines implied by the integer part invalid; 0.5 and above invalidates one
/// line more, because the dominant interpolation weight there comes from
/// outside the grid. A fractional shift of 0.45 therefore marks nothing
/// beyond shift 0, while 0.55 marks the same lines as shift 1.
pub fn shift_fill(image: &Array2<f32>, shift: Shift) -> Array2<f32> {
    let mut shifted = resample_shift(image, shift);
    let (h, w) = shifted.dim();

    let rows = shift.dy.round();
    if rows >= 1.0 {
        let n = (rows as usize).min(h);
        shifted.slice_mut(s![..n, ..]).fill(f32::NAN);
    } else if rows <= -1.0 {
        let n = ((-rows) as usize).min(h);
        shifted.slice_mut(s![h - n.., ..]).fill(f32::NAN);
    }

    let cols = shift.dx.round();
    if cols >= 1.0 {
        let n = (cols as usize).min(w);
        shifted.slice_mut(s![.., ..n]).fill(f32::NAN);
    } else if cols <= -1.0 {
        let n = ((-cols) as usize).min(w);
        shifted.slice_mut(s![.., w - n..]).fill(f32::NAN);
    }

    shifted
}

/// Bilinear sample at `(y, x)` with edge clamping.
fn interp_clamped(image: &Array2<f32>, y: f64, x: f64) -> f32 {
    let (h, w) = image.dim();

    let y0 = y.floor();
    let x0 = x.floor();
    let fy = (y - y0) as f32;
    let fx = (x - x0) as f32;

    let at = |r: f64, c: f64| -> f32 {
        let r = (r.max(0.0) as usize).min(h - 1);
        let c = (c.max(0.0) as usize).min(w - 1);
        image[[r, c]]
    };

    let v00 = at(y0, x0);
    let v01 = at(y0, x0 + 1.0);
    let v10 = at(y0 + 1.0, x0);
    let v11 = at(y0 + 1.0, x0 + 1.0);

    let top = v00 * (1.0 - fx) + v01 * fx;
    let bottom = v10 * (1.0 - fx) + v11 * fx;
    top * (1.0 - fy) + bottom * fy
}
