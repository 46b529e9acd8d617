//! Infinite plane in 3D space.

use crate::math::{Point3, Real, Unit, Vector3, DEFAULT_EPSILON};

/// The position of a point relative to a [`Plane`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaneSide {
    /// The point lies exactly on the plane.
    OnPlane,
    /// The point lies on the side the normal points away from.
    Back,
    /// The point lies on the side the normal points toward.
    Front,
}

/// An infinite plane, stored in its Hessian normal form.
///
/// A point `p` lies on the plane iff `normal · p + d == 0`. The normal is a unit
/// vector, so `d` is the signed distance from the plane to the origin, measured
/// against the normal.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The unit normal of the plane.
    pub normal: Unit<Vector3<Real>>,
    /// The distance term of the plane equation.
    pub d: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and its distance term.
    #[inline]
    pub fn new(normal: Unit<Vector3<Real>>, d: Real) -> Self {
        Plane { normal, d }
    }

    /// Builds the plane with the given normal passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Unit<Vector3<Real>>, point: &Point3<Real>) -> Self {
        let d = -normal.dot(&point.coords);
        Plane { normal, d }
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal is `(a - b) × (b - c)`, normalized: it points toward the side from which
    /// the points appear counter-clockwise. Returns `None` if the points are collinear.
    pub fn from_points(a: &Point3<Real>, b: &Point3<Real>, c: &Point3<Real>) -> Option<Self> {
        let normal = Unit::try_new((a - b).cross(&(b - c)), DEFAULT_EPSILON)?;
        Some(Self::from_normal_and_point(normal, a))
    }

    /// The signed distance between `point` and this plane.
    ///
    /// Positive on the front side, negative on the back side.
    #[inline]
    pub fn distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) + self.d
    }

    /// Classifies `point` relative to this plane.
    ///
    /// Only an exactly zero distance counts as [`PlaneSide::OnPlane`].
    #[inline]
    pub fn test_point(&self, point: &Point3<Real>) -> PlaneSide {
        let dist = self.distance(point);

        if dist == 0.0 {
            PlaneSide::OnPlane
        } else if dist < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::Front
        }
    }

    /// Is the plane's front side facing toward a viewer looking along `direction`?
    #[inline]
    pub fn is_front_facing(&self, direction: &Vector3<Real>) -> bool {
        self.normal.dot(direction) <= 0.0
    }
}
