use crate::math::{Point2, Real};
use crate::query::intersect_lines;
use crate::shape::Polygon;
use crate::utils;
use alloc::vec::Vec;

/// Computes the overlap of two polygons by clipping `subject` with every edge of `clip`.
///
/// This is the Sutherland–Hodgman algorithm: `clip` must be convex and wound
/// counter-clockwise, while `subject` may be any polygon without holes. A point is kept by
/// an edge if it lies strictly on its left. This is the reverse of the usual clockwise clip
/// convention, so a clockwise `clip` polygon must be reversed before calling this function.
/// Returns `None` if either polygon is empty or if nothing is left after clipping.
pub fn intersect_polygons(subject: &[Point2<Real>], clip: &[Point2<Real>]) -> Option<Polygon> {
    if subject.is_empty() || clip.is_empty() {
        log::debug!("Cannot intersect an empty polygon.");
        return None;
    }

    let mut input = subject.to_vec();
    let mut output = Vec::with_capacity(subject.len() + clip.len());

    let closing_edge = clip.last().into_iter().zip(clip.first());
    let clip_edges = clip.iter().zip(clip.iter().skip(1)).chain(closing_edge);

    for (ep1, ep2) in clip_edges {
        let Some(mut start) = input.last().copied() else {
            return None;
        };

        let is_inside = |pt: &Point2<Real>| utils::point_line_side(ep1, ep2, pt) > 0;

        for end in &input {
            let start_inside = is_inside(&start);

            if is_inside(end) {
                if !start_inside {
                    if let Some(entry) = intersect_lines(&start, end, ep1, ep2) {
                        // Avoid repeating the last point when the polygon re-enters there.
                        if output.last() != Some(&entry) {
                            output.push(entry);
                        }
                    }
                }

                output.push(*end);
            } else if start_inside {
                if let Some(exit) = intersect_lines(&start, end, ep1, ep2) {
                    output.push(exit);
                }
            }

            start = *end;
        }

        core::mem::swap(&mut input, &mut output);
        output.clear();
    }

    if input.is_empty() {
        None
    } else {
        Some(Polygon::new(input))
    }
}

impl Polygon {
    /// Computes the overlap of this polygon with a convex counter-clockwise polygon.
    ///
    /// See [`intersect_polygons`].
    #[inline]
    pub fn intersection(&self, clip: &[Point2<Real>]) -> Option<Polygon> {
        intersect_polygons(self.vertices(), clip)
    }
}
