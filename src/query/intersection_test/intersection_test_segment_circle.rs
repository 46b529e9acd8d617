use crate::math::{Point2, Real, Vector2};
use crate::query::{nearest_segment_point, MinimumTranslationVector};
use crate::shape::Circle;

/// Does the segment `[a, b]` touch the circle? Tangent segments do.
#[inline]
pub fn intersect_segment_circle(a: &Point2<Real>, b: &Point2<Real>, circle: &Circle) -> bool {
    circle.contains_point(&nearest_segment_point(a, b, &circle.center))
}

/// Intersects the segment `[a, b]` with a circle and computes how to push them apart.
///
/// On intersection, the normal of the returned translation points from the circle center
/// toward the point of the segment nearest to it, and the depth is the radius minus the
/// distance to that point. If the segment passes through the center, the normal is the
/// segment's right-hand perpendicular and the depth is the full radius.
pub fn intersect_segment_circle_with_mtv(
    a: &Point2<Real>,
    b: &Point2<Real>,
    circle: &Circle,
) -> Option<MinimumTranslationVector> {
    let nearest = nearest_segment_point(a, b, &circle.center);
    let center_to_nearest = nearest - circle.center;

    if center_to_nearest.norm_squared() > circle.radius * circle.radius {
        return None;
    }

    let mtv = if center_to_nearest == Vector2::zeros() {
        let perp = Vector2::new(b.y - a.y, a.x - b.x);
        MinimumTranslationVector {
            // A zero-length segment sitting on the center has no perpendicular.
            normal: perp.try_normalize(0.0).unwrap_or_else(Vector2::zeros),
            depth: circle.radius,
        }
    } else {
        let dist = center_to_nearest.norm();
        MinimumTranslationVector {
            normal: center_to_nearest / dist,
            depth: circle.radius - dist,
        }
    };

    Some(mtv)
}
