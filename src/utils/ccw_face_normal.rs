use crate::math::*;

/// Computes the unit direction pointing toward the left-hand-side of an oriented segment.
///
/// For an edge of a counter-clockwise polygon this is the inward normal.
/// Returns `None` if the segment is degenerate.
#[inline]
pub fn ccw_face_normal(pts: [&Point2<Real>; 2]) -> Option<Unit<Vector2<Real>>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector2::new(-ab.y, ab.x);

    Unit::try_new(res, DEFAULT_EPSILON)
}
