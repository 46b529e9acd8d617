//! Axis Aligned Bounding Box.

use crate::math::{Point3, Real, Vector3};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its faces are always
/// perpendicular to the coordinate axes, which makes point containment and ray
/// casting against it very cheap.
///
/// # Invariant
///
/// The box is valid iff `mins.x < maxs.x`, `mins.y < maxs.y` and `mins.z < maxs.z`.
/// Queries do not check this; use [`Aabb::is_valid`] when the corners come from
/// untrusted data.
///
/// # Example
///
/// ```rust
/// use intersector::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
///
/// assert!(aabb.contains_local_point(&Point3::origin()));
/// assert_eq!(aabb.center(), Point3::origin());
/// assert_eq!(aabb.extents().x, 1.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point3<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point3<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point3<Real>, maxs: Point3<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point3<Real>, half_extents: Vector3<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from its center and its full dimensions along each axis.
    #[inline]
    pub fn from_center_and_dimensions(center: Point3<Real>, dimensions: Vector3<Real>) -> Self {
        Self::from_half_extents(center, dimensions * 0.5)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point3<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector3<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector3<Real> {
        self.maxs - self.mins
    }

    /// Is every component of `mins` strictly smaller than the same component of `maxs`?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mins.x < self.maxs.x && self.mins.y < self.maxs.y && self.mins.z < self.maxs.z
    }

    /// Does this AABB contain a point expressed in the same coordinate frame as `self`?
    ///
    /// Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point3<Real>) -> bool {
        for i in 0..3 {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Clamps `point` so that it lies inside of this AABB.
    #[inline]
    pub fn clamp_point(&self, point: &Point3<Real>) -> Point3<Real> {
        point.sup(&self.mins).inf(&self.maxs)
    }
}
