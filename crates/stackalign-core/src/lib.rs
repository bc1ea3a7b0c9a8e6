pub mod align;
pub mod config;
pub mod consts;
pub mod error;
pub mod filters;
pub mod frame;
pub mod stack;
