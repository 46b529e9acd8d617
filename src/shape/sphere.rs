//! 3D sphere.

use crate::math::{Point3, Real};

/// A sphere given by its center and radius.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Sphere {
    /// The center of the sphere.
    pub center: Point3<Real>,
    /// The radius of the sphere, non-negative.
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere.
    #[inline]
    pub fn new(center: Point3<Real>, radius: Real) -> Self {
        debug_assert!(radius >= 0.0, "A sphere radius must be non-negative.");
        Sphere { center, radius }
    }

    /// Does this sphere contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point3<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }
}
