//! 2D circle.

use crate::math::{Point2, Real};

/// A circle given by its center and radius.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point2<Real>,
    /// The radius of the circle, non-negative.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle.
    #[inline]
    pub fn new(center: Point2<Real>, radius: Real) -> Self {
        debug_assert!(radius >= 0.0, "A circle radius must be non-negative.");
        Circle { center, radius }
    }

    /// Does this circle contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point2<Real>) -> bool {
        na::distance_squared(&self.center, point) <= self.radius * self.radius
    }

    /// Do the interiors of `self` and `other` overlap?
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        let sum_radius = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) < sum_radius * sum_radius
    }
}
