//! Cropping a shifted stack to its common valid region.

use ndarray::{s, Array2};

use crate::error::{Result, StackAlignError};

/// Rectangle of rows/columns that survive cropping, in image coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

/// Find the largest rectangle free of invalid samples in every frame.
///
/// Shifted frames carry their invalid samples as full border rows/columns,
/// so the intersection of valid regions is itself a rectangle: count the
/// leading and trailing lines that are fully NaN in any frame of the stack.
/// Returns [`StackAlignError::NoCommonRegion`] when nothing survives.
pub fn common_valid_rect(frames: &[Array2<f32>]) -> Result<CropRect> {
    let first = frames.first().ok_or(StackAlignError::EmptySequence)?;
    let (h, w) = first.dim();

    let mut row_invalid = vec![false; h];
    let mut col_invalid = vec![false; w];

    for frame in frames {
        for (r, row) in frame.rows().into_iter().enumerate() {
            if row.iter().all(|v| v.is_nan()) {
                row_invalid[r] = true;
            }
        }
        for (c, col) in frame.columns().into_iter().enumerate() {
            if col.iter().all(|v| v.is_nan()) {
                col_invalid[c] = true;
            }
        }
    }

    let top = row_invalid.iter().take_while(|&&inv| inv).count();
    let bottom = row_invalid.iter().rev().take_while(|&&inv| inv).count();
    let left = col_invalid.iter().take_while(|&&inv| inv).count();
    let right = col_invalid.iter().rev().take_while(|&&inv| inv).count();

    if top + bottom >= h || left + right >= w {
        return Err(StackAlignError::NoCommonRegion);
    }

    Ok(CropRect {
        top,
        left,
        height: h - top - bottom,
        width: w - left - right,
    })
}

/// Crop every frame of the stack to `rect`, allocating new grids.
pub fn crop_stack(frames: &[Array2<f32>], rect: &CropRect) -> Vec<Array2<f32>> {
    frames
        .iter()
        .map(|frame| {
            frame
                .slice(s![
                    rect.top..rect.top + rect.height,
                    rect.left..rect.left + rect.width
                ])
                .to_owned()
        })
        .collect()
}
