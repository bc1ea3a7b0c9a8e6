use std::ops::Add;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Sub-pixel translation of a frame, in pixels.
///
/// Positive values move content toward higher row/column indices. Shifts
/// accumulate by addition; there are no wrap-around semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Row offset.
    pub dy: f64,
    /// Column offset.
    pub dx: f64,
}

impl Shift {
    pub const ZERO: Shift = Shift { dy: 0.0, dx: 0.0 };

    pub fn new(dy: f64, dx: f64) -> Self {
        Self { dy, dx }
    }
}

impl Add for Shift {
    type Output = Shift;

    fn add(self, other: Shift) -> Shift {
        Shift {
            dy: self.dy + other.dy,
            dx: self.dx + other.dx,
        }
    }
}

/// Output of stack alignment.
///
/// `shifts` holds one cumulative displacement per input frame (including the
/// zero entry for the reference) in input order. `frames` holds the shifted
/// frames cropped to the common valid region; they share one shape and
/// contain no invalid markers.
#[derive(Clone, Debug)]
pub struct AlignedStack {
    pub shifts: Vec<Shift>,
    pub frames: Vec<Array2<f32>>,
}
