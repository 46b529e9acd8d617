use crate::math::{Point2, Real};
use na::ComplexField;

/// Distance between the infinite line through `a` and `b` and the point `pt`.
///
/// The result is not finite if `a == b`.
#[inline]
pub fn distance_line_point(a: &Point2<Real>, b: &Point2<Real>, pt: &Point2<Real>) -> Real {
    let ab = b - a;
    ComplexField::abs((pt - a).perp(&ab)) / ab.norm()
}

/// The point of the segment `[a, b]` nearest to `pt`.
///
/// A zero-length segment returns `a`.
pub fn nearest_segment_point(
    a: &Point2<Real>,
    b: &Point2<Real>,
    pt: &Point2<Real>,
) -> Point2<Real> {
    let ab = b - a;
    let sq_len = ab.norm_squared();

    if sq_len == 0.0 {
        return *a;
    }

    let t = (pt - a).dot(&ab) / sq_len;

    if t <= 0.0 {
        *a
    } else if t >= 1.0 {
        *b
    } else {
        a + ab * t
    }
}

/// Distance between the segment `[a, b]` and the point `pt`.
#[inline]
pub fn distance_segment_point(a: &Point2<Real>, b: &Point2<Real>, pt: &Point2<Real>) -> Real {
    na::distance(&nearest_segment_point(a, b, pt), pt)
}
