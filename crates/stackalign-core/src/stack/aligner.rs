//! Stack-level alignment orchestration.
//!
//! Chains pairwise shift estimation over adjacent frames, accumulates the
//! shifts relative to the first frame, resamples every frame, and crops the
//! stack to the common valid region.

use std::borrow::Cow;

use ndarray::Array2;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::align::resample::shift_fill;
use crate::consts::PARALLEL_FRAME_THRESHOLD;
use crate::error::{Result, StackAlignError};
use crate::frame::{AlignedStack, Shift};

use super::crop::{common_valid_rect, crop_stack};

type ShiftFn<'a> = &'a (dyn Fn(&Array2<f32>, &Array2<f32>) -> Result<Shift> + Sync);
type FilterFn<'a> = &'a (dyn Fn(&Array2<f32>) -> Result<Array2<f32>> + Sync);

/// Align a stack of same-shaped frames to its first frame.
///
/// `shift_fn` estimates the shift between two adjacent frames (see
/// [`estimate_shift`](crate::align::estimate_shift)). Returns the cumulative
/// shift per frame and the shifted frames cropped so that no invalid sample
/// remains.
pub fn align_stack<S>(frames: &[Array2<f32>], shift_fn: S) -> Result<AlignedStack>
where
    S: Fn(&Array2<f32>, &Array2<f32>) -> Result<Shift> + Sync,
{
    align_impl(frames, &shift_fn, None)
}

/// Align a stack, running `filter_fn` over each frame before estimation.
///
/// The filter receives a borrow of the exact original frame, once per frame
/// in input order, and only influences shift estimation; the unfiltered
/// originals are what gets shifted and returned. A filter error aborts the
/// whole alignment.
pub fn align_stack_filtered<S, F>(
    frames: &[Array2<f32>],
    shift_fn: S,
    filter_fn: F,
) -> Result<AlignedStack>
where
    S: Fn(&Array2<f32>, &Array2<f32>) -> Result<Shift> + Sync,
    F: Fn(&Array2<f32>) -> Result<Array2<f32>> + Sync,
{
    align_impl(frames, &shift_fn, Some(&filter_fn))
}

fn align_impl(
    frames: &[Array2<f32>],
    shift_fn: ShiftFn,
    filter_fn: Option<FilterFn>,
) -> Result<AlignedStack> {
    if frames.is_empty() {
        return Err(StackAlignError::EmptySequence);
    }
    let shape = frames[0].dim();
    for frame in &frames[1..] {
        if frame.dim() != shape {
            return Err(StackAlignError::ShapeMismatch {
                reference: shape,
                target: frame.dim(),
            });
        }
    }
    info!(frames = frames.len(), "Aligning stack");

    // Estimation inputs: filtered copies when a filter is supplied, borrows
    // of the originals otherwise.
    let estimation: Vec<Cow<'_, Array2<f32>>> = match filter_fn {
        Some(filter) => frames
            .iter()
            .map(|frame| filter(frame).map(Cow::Owned))
            .collect::<Result<_>>()?,
        None => frames.iter().map(Cow::Borrowed).collect(),
    };

    // Pairwise shifts between adjacent frames in their original order.
    let pairwise: Vec<Shift> = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        estimation
            .par_windows(2)
            .map(|pair| shift_fn(&pair[0], &pair[1]))
            .collect::<Result<_>>()?
    } else {
        estimation
            .windows(2)
            .map(|pair| shift_fn(&pair[0], &pair[1]))
            .collect::<Result<_>>()?
    };

    // Prefix sum: each frame's displacement relative to the fixed first
    // frame. Inherently sequential.
    let mut cumulative = vec![Shift::ZERO; frames.len()];
    for i in 1..frames.len() {
        cumulative[i] = cumulative[i - 1] + pairwise[i - 1];
    }

    let shifted: Vec<Array2<f32>> = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
        frames
            .par_iter()
            .zip(cumulative.par_iter())
            .map(|(frame, &shift)| shift_fill(frame, shift))
            .collect()
    } else {
        frames
            .iter()
            .zip(&cumulative)
            .map(|(frame, &shift)| shift_fill(frame, shift))
            .collect()
    };

    let rect = common_valid_rect(&shifted)?;
    debug!(?rect, "Common valid region");

    Ok(AlignedStack {
        shifts: cumulative,
        frames: crop_stack(&shifted, &rect),
    })
}
