use crate::math::Point2;
use crate::shape::{Circle, Rectangle};

/// The rectangle where `r1` and `r2` overlap, if their interiors overlap.
pub fn intersect_rectangles(r1: &Rectangle, r2: &Rectangle) -> Option<Rectangle> {
    if !r1.overlaps(r2) {
        return None;
    }

    let mins = r1.mins().sup(&r2.mins());
    let maxs = r1.maxs().inf(&r2.maxs());

    Some(Rectangle::new(mins.x, mins.y, maxs.x - mins.x, maxs.y - mins.y))
}

/// Do the interiors of the two rectangles overlap?
#[inline]
pub fn overlaps_rectangles(r1: &Rectangle, r2: &Rectangle) -> bool {
    r1.overlaps(r2)
}

/// Do the interiors of the two circles overlap?
#[inline]
pub fn overlaps_circles(c1: &Circle, c2: &Circle) -> bool {
    c1.overlaps(c2)
}

/// Do the interiors of the circle and the rectangle overlap?
pub fn overlaps_circle_rectangle(circle: &Circle, rect: &Rectangle) -> bool {
    let closest: Point2<_> = circle.center.sup(&rect.mins()).inf(&rect.maxs());
    na::distance_squared(&closest, &circle.center) < circle.radius * circle.radius
}
