// TODO: some way to override these from user code.
pub const EPSILON: f32 = 1e-5;

/// Number of decimal places used by the `Display` impls when the formatter does not specify one.
pub const DEFAULT_PRECISION: usize = 6;

/// `look_at()` rejects forward/up pairs whose dot product is at least this far from zero.
pub const LOOK_AT_PERPENDICULAR_TOLERANCE: f32 = 0.001;
/// `look_at()` skips the alignment rotation when the cosine between two axes exceeds this.
pub const LOOK_AT_ALIGNED_THRESHOLD: f32 = 0.9999;

pub const DEFAULT_MAT4_BLOCKS: usize = 64;
pub const DEFAULT_MAT4_INCREMENT: usize = 32;
pub const DEFAULT_MAT3_BLOCKS: usize = 64;
pub const DEFAULT_MAT3_INCREMENT: usize = 32;
