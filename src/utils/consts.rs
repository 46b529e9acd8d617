use crate::math::Real;

/// Tolerance below which a determinant or a ray parameter is treated as zero.
pub const FLOAT_ROUNDING_ERROR: Real = 0.000001;
