/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// Magnitude below which a cross-power spectrum bin is zeroed instead of
/// normalized, to avoid division by near-zero.
pub const CROSS_POWER_EPSILON: f64 = 1e-12;

/// Correlation peak value below which the surface is considered featureless
/// and the estimate degrades to a zero shift.
pub const FLAT_PEAK_EPSILON: f64 = 1e-12;

/// Minimum curvature for the parabolic sub-pixel peak fit. Below this the
/// fit is skipped along that axis.
pub const CURVATURE_EPSILON: f64 = 1e-12;
