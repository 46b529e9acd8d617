use crate::math::{Point2, Real};
use core::cmp::Ordering;

/// Tests on which side of the oriented line through `a` and `b` the point `pt` lies.
///
/// Returns `1` if the point is on the left, `-1` if it is on the right and `0` if
/// it lies exactly on the line (or if the computation produced a NaN).
#[inline]
pub fn point_line_side(a: &Point2<Real>, b: &Point2<Real>, pt: &Point2<Real>) -> i32 {
    let side = (b - a).perp(&(pt - a));

    match side.partial_cmp(&0.0) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        _ => 0,
    }
}

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using the even-odd rule.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge. An edge is crossed when the point's `y` lies in the
/// half-open span `(min_y, max_y]` of the edge and the crossing is strictly on the left of
/// the point. Boundary points are therefore classified deterministically: for an
/// axis-aligned rectangle, points on its bottom or left edges are outside while points on its
/// top or right edges are inside.
pub fn is_point_in_polygon(polygon: &[Point2<Real>], pt: &Point2<Real>) -> bool {
    let Some(mut last) = polygon.last() else {
        return false;
    };

    let (x, y) = (pt.x, pt.y);
    let mut odd_nodes = false;

    for vertex in polygon {
        if ((vertex.y < y && last.y >= y) || (last.y < y && vertex.y >= y))
            && vertex.x + (y - vertex.y) / (last.y - vertex.y) * (last.x - vertex.x) < x
        {
            odd_nodes = !odd_nodes;
        }

        last = vertex;
    }

    odd_nodes
}
