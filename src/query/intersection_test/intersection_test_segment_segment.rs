use crate::math::{Point2, Real, Vector2};

/// Intersection point of the infinite lines through `(a1, b1)` and `(a2, b2)`.
///
/// Returns `None` only if the lines are exactly parallel (zero determinant).
pub fn intersect_lines(
    a1: &Point2<Real>,
    b1: &Point2<Real>,
    a2: &Point2<Real>,
    b2: &Point2<Real>,
) -> Option<Point2<Real>> {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let denom = d1.perp(&d2);

    if denom == 0.0 {
        return None;
    }

    let t = (a2 - a1).perp(&d2) / denom;
    Some(a1 + d1 * t)
}

/// Intersection point of the segments `[a1, b1]` and `[a2, b2]`.
///
/// Parallel segments never intersect, even when they overlap.
pub fn intersect_segments(
    a1: &Point2<Real>,
    b1: &Point2<Real>,
    a2: &Point2<Real>,
    b2: &Point2<Real>,
) -> Option<Point2<Real>> {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let denom = d1.perp(&d2);

    if denom == 0.0 {
        return None;
    }

    let a2a1 = a2 - a1;
    let num1 = a2a1.perp(&d2);
    let num2 = a2a1.perp(&d1);

    // Both parameters `num / denom` must be in [0, 1].
    let in_range = |num: Real| {
        if denom > 0.0 {
            num >= 0.0 && num <= denom
        } else {
            num <= 0.0 && num >= denom
        }
    };

    if !in_range(num1) || !in_range(num2) {
        return None;
    }

    Some(a1 + d1 * (num1 / denom))
}

/// Parameter along the first ray of the intersection between two 2D rays.
///
/// The result is `start1 + dir1 * t`'s `t`, which may be negative: both rays are treated as
/// lines. Returns [`Real::INFINITY`] if the directions are parallel.
pub fn intersect_ray_ray2d(
    start1: &Point2<Real>,
    dir1: &Vector2<Real>,
    start2: &Point2<Real>,
    dir2: &Vector2<Real>,
) -> Real {
    let denom = dir1.perp(dir2);

    if denom == 0.0 {
        return Real::INFINITY;
    }

    (start2 - start1).perp(dir2) / denom
}
