use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackAlignError {
    #[error("Frame shape mismatch: reference is {reference:?}, target is {target:?}")]
    ShapeMismatch {
        reference: (usize, usize),
        target: (usize, usize),
    },

    #[error("Empty frame sequence")]
    EmptySequence,

    #[error("No common valid region remains after alignment")]
    NoCommonRegion,

    #[error("Estimation filter error: {0}")]
    Filter(String),
}

pub type Result<T> = std::result::Result<T, StackAlignError>;
