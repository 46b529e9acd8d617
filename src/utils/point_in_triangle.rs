//! Functions to check if a point is inside a triangle.

use crate::math::{Point2, Point3, Real};

/// Returns `true` if the 2D point `p` is in the triangle with corners `a`, `b` and `c`.
///
/// The triangle may have any winding. The side of `p` relative to the edge `ab` is used as
/// reference: the point is rejected if it is on that same side of the edge `ac`, or on the
/// other side of the edge `bc`. Side tests use strict `> 0.0` comparisons, so points lying
/// exactly on an edge are classified as the sign rules dictate rather than by a tolerance.
#[inline]
pub fn is_point_in_triangle2d(
    p: &Point2<Real>,
    a: &Point2<Real>,
    b: &Point2<Real>,
    c: &Point2<Real>,
) -> bool {
    let ap = p - a;
    let side12 = (b - a).perp(&ap) > 0.0;

    if ((c - a).perp(&ap) > 0.0) == side12 {
        return false;
    }

    ((c - b).perp(&(p - b)) > 0.0) == side12
}

/// Returns `true` if the 3D point `p` is in the triangle with corners `a`, `b` and `c`.
///
/// The point is assumed to already lie on the plane of the triangle. This is not checked: a
/// point off the plane is tested against the prism obtained by extruding the triangle along
/// its normal.
#[inline]
pub fn is_point_in_triangle3d(
    p: &Point3<Real>,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
) -> bool {
    let pa = a - p;
    let pb = b - p;
    let pc = c - p;

    let n_bc = pb.cross(&pc);
    let n_ca = pc.cross(&pa);

    if n_bc.dot(&n_ca) < 0.0 {
        return false;
    }

    let n_ab = pa.cross(&pb);
    n_bc.dot(&n_ab) >= 0.0
}
