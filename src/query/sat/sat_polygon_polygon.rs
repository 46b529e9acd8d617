use crate::math::{Point2, Real, Vector2};
use crate::shape::convex_polygon;
use crate::utils;
use na::ComplexField;

/// The smallest translation that separates two overlapping shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinimumTranslationVector {
    /// The unit direction along which the first shape must be moved.
    pub normal: Vector2<Real>,
    /// The distance the first shape must be moved along `normal`.
    pub depth: Real,
}

/// The projection interval of a polygon on an axis.
#[inline]
fn project(points: &[Point2<Real>], axis: &Vector2<Real>) -> (Real, Real) {
    points.iter().fold((Real::MAX, -Real::MAX), |(min, max), pt| {
        let proj = axis.dot(&pt.coords);
        (min.min(proj), max.max(proj))
    })
}

#[inline]
fn is_convex_ccw(points: &[Point2<Real>]) -> bool {
    points.len() < 3 || convex_polygon::check_convex_ccw(points).is_ok()
}

/// Runs the separating-axis test over every edge normal of `p1` then `p2`.
///
/// When `orient` is `false`, the returned normal is left unoriented.
fn find_minimum_overlap(
    p1: &[Point2<Real>],
    p2: &[Point2<Real>],
    orient: bool,
) -> Option<MinimumTranslationVector> {
    if p1.is_empty() || p2.is_empty() {
        return None;
    }

    let mut best = MinimumTranslationVector {
        normal: Vector2::zeros(),
        depth: Real::MAX,
    };

    // The edges of `p1` are tested first, then those of `p2`. The side tally of the other
    // polygon's vertices is negated for the edges of `p1`. When the tally is balanced, the
    // normal of an edge of `p1` is kept while the normal of an edge of `p2` is flipped: both
    // then point away from `p2`.
    for (edges, others, tally_sign, keep_balanced) in [(p1, p2, -1, true), (p2, p1, 1, false)] {
        let closing_edge = edges.last().into_iter().zip(edges.first());
        let edge_iter = edges.iter().zip(edges.iter().skip(1)).chain(closing_edge);

        for (i, (a, b)) in edge_iter.enumerate() {
            let Some(axis) = Vector2::new(a.y - b.y, b.x - a.x).try_normalize(0.0) else {
                log::debug!("Skipping the zero-length polygon edge {} during the SAT.", i);
                continue;
            };

            let (min1, max1) = project(p1, &axis);
            let (min2, max2) = project(p2, &axis);

            if !((min1 <= min2 && max1 >= min2) || (min2 <= min1 && max2 >= min1)) {
                return None;
            }

            let mut overlap = max1.min(max2) - min1.max(min2);

            if (min1 > min2 && max1 < max2) || (min2 > min1 && max2 < max1) {
                overlap += ComplexField::abs(min1 - min2).min(ComplexField::abs(max1 - max2));
            }

            if overlap < best.depth {
                best.depth = overlap;
                best.normal = axis;

                if orient {
                    let tally: i32 = others
                        .iter()
                        .map(|pt| tally_sign * utils::point_line_side(a, b, pt))
                        .sum();

                    if tally < 0 || (tally == 0 && !keep_balanced) {
                        best.normal = -axis;
                    }
                }
            }
        }
    }

    Some(best)
}

/// Tests if two convex polygons overlap with the separating axis theorem.
///
/// Both polygons must be convex and wound counter-clockwise. Polygons touching along an
/// edge or at a vertex overlap.
pub fn overlap_convex_polygons(p1: &[Point2<Real>], p2: &[Point2<Real>]) -> bool {
    debug_assert!(is_convex_ccw(p1), "The first polygon must be convex and CCW.");
    debug_assert!(is_convex_ccw(p2), "The second polygon must be convex and CCW.");
    find_minimum_overlap(p1, p2, false).is_some()
}

/// Tests if two convex polygons overlap and computes the minimum translation vector.
///
/// Both polygons must be convex and wound counter-clockwise. The returned normal is the
/// direction in which `p1` must be translated by `depth` to stop overlapping `p2`. Among
/// axes with the same overlap, the first one tested wins: edges of `p1` come before those
/// of `p2`.
pub fn overlap_convex_polygons_with_mtv(
    p1: &[Point2<Real>],
    p2: &[Point2<Real>],
) -> Option<MinimumTranslationVector> {
    debug_assert!(is_convex_ccw(p1), "The first polygon must be convex and CCW.");
    debug_assert!(is_convex_ccw(p2), "The second polygon must be convex and CCW.");
    find_minimum_overlap(p1, p2, true)
}
