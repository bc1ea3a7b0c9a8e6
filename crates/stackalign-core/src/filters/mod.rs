pub mod sobel;

pub use sobel::gradient_magnitude;
