pub mod aligner;
pub mod crop;

pub use aligner::{align_stack, align_stack_filtered};
pub use crop::{common_valid_rect, crop_stack, CropRect};
