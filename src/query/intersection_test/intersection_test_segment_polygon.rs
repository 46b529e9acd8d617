use crate::math::{Point2, Real};
use crate::query::intersect_segments;
use crate::shape::Rectangle;

/// Iterates over the edges of the closed polygon, starting with the closing one.
#[inline]
fn polygon_edges(
    polygon: &[Point2<Real>],
) -> impl Iterator<Item = (&Point2<Real>, &Point2<Real>)> {
    polygon.last().into_iter().chain(polygon).zip(polygon)
}

/// Does the infinite line through `a` and `b` cross at least one edge of `polygon`?
///
/// Edges parallel to the line are ignored.
pub fn intersect_line_polygon(
    a: &Point2<Real>,
    b: &Point2<Real>,
    polygon: &[Point2<Real>],
) -> bool {
    let dir = b - a;

    polygon_edges(polygon).any(|(e1, e2)| {
        let edge = e2 - e1;
        let denom = dir.perp(&edge);

        if denom == 0.0 {
            return false;
        }

        // Parameter of the crossing point along the edge.
        let t = (e1 - a).perp(&dir) / denom;
        (0.0..=1.0).contains(&t)
    })
}

/// Does the segment `[a, b]` cross at least one edge of `polygon`?
///
/// A segment lying entirely inside of the polygon does not cross any edge.
pub fn intersect_segment_polygon(
    a: &Point2<Real>,
    b: &Point2<Real>,
    polygon: &[Point2<Real>],
) -> bool {
    polygon_edges(polygon).any(|(e1, e2)| intersect_segments(a, b, e1, e2).is_some())
}

/// Does the segment `[a, b]` touch the rectangle?
///
/// This is the case if it crosses one of the rectangle edges, or if `a` lies inside of it.
pub fn intersect_segment_rectangle(a: &Point2<Real>, b: &Point2<Real>, rect: &Rectangle) -> bool {
    intersect_segment_polygon(a, b, &rect.vertices()) || rect.contains_point(a)
}
