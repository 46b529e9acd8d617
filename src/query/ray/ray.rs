//! The ray type used by ray-casting queries.

use crate::math::{Isometry3, Point3, Real, Vector3};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction. Points along the ray are `origin + dir * t` for `t ≥ 0`.
///
/// # Direction Vector
///
/// Most queries of this crate expect `dir` to be **normalized**: the sphere test uses
/// `t` as a literal distance and produces wrong hits otherwise. Use [`Ray::normalized`]
/// or [`Ray::look_at`] when the direction comes from arbitrary data.
///
/// # Example
///
/// ```rust
/// use intersector::query::Ray;
/// use nalgebra::{Point3, Vector3};
///
/// let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 0.0, 0.0));
/// assert_eq!(ray.point_at(5.0), Point3::new(5.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point3<Real>,
    /// Direction vector of the ray.
    pub dir: Vector3<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    #[inline]
    pub fn new(origin: Point3<Real>, dir: Vector3<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates the ray starting at `origin` and passing through `target`, with a unit direction.
    ///
    /// Returns `None` if `origin` and `target` are equal.
    #[inline]
    pub fn look_at(origin: Point3<Real>, target: &Point3<Real>) -> Option<Ray> {
        (target - origin).try_normalize(0.0).map(|dir| Ray::new(origin, dir))
    }

    /// Returns this ray with a unit direction.
    ///
    /// Returns `None` if the direction is zero.
    #[inline]
    pub fn normalized(&self) -> Option<Ray> {
        self.dir.try_normalize(0.0).map(|dir| Ray::new(self.origin, dir))
    }

    /// Transforms this ray by the given isometry (translation + rotation).
    #[inline]
    pub fn transform_by(&self, m: &Isometry3<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir)
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This expresses a world-space ray in the local frame of an object placed at `m`.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry3<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
        )
    }

    /// Computes a point along the ray at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point3<Real> {
        self.origin + self.dir * t
    }

    /// Does this ray have a unit direction (up to a loose tolerance)?
    #[inline]
    pub fn has_unit_dir(&self) -> bool {
        relative_eq!(self.dir.norm_squared(), 1.0, epsilon = 1.0e-4)
    }
}
