pub mod phase_correlation;
pub mod resample;
pub mod subpixel;

pub use phase_correlation::estimate_shift;
pub use resample::{resample_shift, shift_fill};
