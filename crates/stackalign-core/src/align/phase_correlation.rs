//! FFT phase correlation shift estimation.
//!
//! Two frames that differ by a pure translation have a cross-power spectrum
//! whose inverse transform is a delta at the displacement. The peak of that
//! correlation surface gives the whole-pixel shift; a local parabolic fit
//! recovers the fractional part.

use std::sync::Arc;

use ndarray::Array2;
use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::consts::{CROSS_POWER_EPSILON, FLAT_PEAK_EPSILON};
use crate::error::{Result, StackAlignError};
use crate::frame::Shift;

use super::subpixel::refine_peak_parabolic;

/// Estimate the shift that aligns `target` onto `reference`.
///
/// Returns the translation that, applied to `target` via
/// [`shift_fill`](super::resample::shift_fill), overlays its content on
/// `reference`. Pure function of its inputs; safe to reuse across many
/// pairs and threads.
///
/// Featureless inputs (flat or near-flat correlation surface) yield a zero
/// shift rather than an error; only a shape mismatch is fatal.
pub fn estimate_shift(reference: &Array2<f32>, target: &Array2<f32>) -> Result<Shift> {
    let (h, w) = reference.dim();
    if (h, w) != target.dim() {
        return Err(StackAlignError::ShapeMismatch {
            reference: (h, w),
            target: target.dim(),
        });
    }

    let ref_spectrum = fft_2d(reference);
    let target_spectrum = fft_2d(target);

    let cross_power = normalized_cross_power(&ref_spectrum, &target_spectrum);
    let correlation = ifft_2d_real(cross_power);

    let (peak_row, peak_col, peak_val) = find_peak(&correlation);
    if !peak_val.is_finite() || peak_val.abs() < FLAT_PEAK_EPSILON {
        // Nothing to register against.
        return Ok(Shift::ZERO);
    }

    // The correlation is circular: a peak past half the dimension is the
    // equivalent negative shift.
    let dy = if peak_row > h / 2 {
        peak_row as f64 - h as f64
    } else {
        peak_row as f64
    };
    let dx = if peak_col > w / 2 {
        peak_col as f64 - w as f64
    } else {
        peak_col as f64
    };

    let (sub_dy, sub_dx) = refine_peak_parabolic(&correlation, peak_row, peak_col);

    Ok(Shift::new(dy + sub_dy, dx + sub_dx))
}

/// Forward 2-D FFT of a real-valued frame, computed in f64.
fn fft_2d(data: &Array2<f32>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut grid = Array2::from_shape_fn((h, w), |(r, c)| Complex::new(data[[r, c]] as f64, 0.0));

    let mut planner = FftPlanner::new();
    transform_in_place(
        &mut grid,
        &planner.plan_fft_forward(w),
        &planner.plan_fft_forward(h),
    );
    grid
}

/// Inverse 2-D FFT, returning the normalized real part.
fn ifft_2d_real(mut spectrum: Array2<Complex<f64>>) -> Array2<f64> {
    let (h, w) = spectrum.dim();

    let mut planner = FftPlanner::new();
    transform_in_place(
        &mut spectrum,
        &planner.plan_fft_inverse(w),
        &planner.plan_fft_inverse(h),
    );

    let scale = 1.0 / (h * w) as f64;
    spectrum.mapv(|v| v.re * scale)
}

/// Apply a 1-D transform along every row, then along every column.
fn transform_in_place(
    grid: &mut Array2<Complex<f64>>,
    row_fft: &Arc<dyn Fft<f64>>,
    col_fft: &Arc<dyn Fft<f64>>,
) {
    let (h, w) = grid.dim();

    let mut row_buf = vec![Complex::default(); w];
    for r in 0..h {
        for c in 0..w {
            row_buf[c] = grid[[r, c]];
        }
        row_fft.process(&mut row_buf);
        for c in 0..w {
            grid[[r, c]] = row_buf[c];
        }
    }

    let mut col_buf = vec![Complex::default(); h];
    for c in 0..w {
        for r in 0..h {
            col_buf[r] = grid[[r, c]];
        }
        col_fft.process(&mut col_buf);
        for r in 0..h {
            grid[[r, c]] = col_buf[r];
        }
    }
}

/// Elementwise `R * conj(T) / |R * conj(T)|`, with near-zero magnitudes
/// zeroed instead of normalized.
fn normalized_cross_power(
    ref_spectrum: &Array2<Complex<f64>>,
    target_spectrum: &Array2<Complex<f64>>,
) -> Array2<Complex<f64>> {
    let (h, w) = ref_spectrum.dim();
    Array2::from_shape_fn((h, w), |(r, c)| {
        let cross = ref_spectrum[[r, c]] * target_spectrum[[r, c]].conj();
        let mag = cross.norm();
        if mag > CROSS_POWER_EPSILON {
            cross / mag
        } else {
            Complex::new(0.0, 0.0)
        }
    })
}

fn find_peak(surface: &Array2<f64>) -> (usize, usize, f64) {
    let mut best = (0, 0, f64::NEG_INFINITY);
    for ((r, c), &val) in surface.indexed_iter() {
        if val > best.2 {
            best = (r, c, val);
        }
    }
    best
}
