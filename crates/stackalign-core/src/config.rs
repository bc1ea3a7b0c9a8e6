use std::fmt;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::align::phase_correlation::estimate_shift;
use crate::error::Result;
use crate::filters::sobel::gradient_magnitude;
use crate::frame::AlignedStack;
use crate::stack::aligner::{align_stack, align_stack_filtered};

/// Prefilter applied to estimation inputs (never to output pixel values).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prefilter {
    #[default]
    None,
    /// Sobel gradient magnitude; emphasizes edges for low-contrast content.
    Sobel,
}

impl fmt::Display for Prefilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefilter::None => write!(f, "None"),
            Prefilter::Sobel => write!(f, "Sobel"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AlignConfig {
    #[serde(default)]
    pub prefilter: Prefilter,
}

/// Align a stack using phase correlation and the configured prefilter.
pub fn align_stack_configured(
    frames: &[Array2<f32>],
    config: &AlignConfig,
) -> Result<AlignedStack> {
    match config.prefilter {
        Prefilter::None => align_stack(frames, estimate_shift),
        Prefilter::Sobel => {
            align_stack_filtered(frames, estimate_shift, |frame| Ok(gradient_magnitude(frame)))
        }
    }
}
