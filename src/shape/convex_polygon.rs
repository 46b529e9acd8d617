use crate::math::{Point2, Real, Unit, Vector2};
use crate::query::{self, MinimumTranslationVector};
use crate::shape::polygon;
use crate::utils;
use alloc::vec::Vec;

/// Indicates why a set of vertices does not describe a convex counter-clockwise polygon.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// A polygon needs at least three vertices.
    #[error("a convex polygon needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
    /// Two consecutive vertices are equal (or almost equal).
    #[error("the edge starting at vertex {0} has a zero length.")]
    DegenerateEdge(usize),
    /// The vertices are wound clockwise.
    #[error("the polygon vertices are wound clockwise.")]
    Clockwise,
    /// The polygon turns right at the given vertex.
    #[error("the polygon is not convex at vertex {vertex}.")]
    NotConvex {
        /// The index of the reflex vertex.
        vertex: usize,
    },
}

/// A 2D convex polygon with counter-clockwise winding.
///
/// This is the validated input type of the separating-axis queries: building one checks
/// the preconditions that [`query::overlap_convex_polygons`] otherwise trusts the caller with.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ConvexPolygon {
    points: Vec<Point2<Real>>,
    normals: Vec<Unit<Vector2<Real>>>,
}

impl ConvexPolygon {
    /// Creates a new 2D convex polygon from a counter-clockwise convex polyline.
    ///
    /// Collinear consecutive edges are accepted.
    pub fn new(points: Vec<Point2<Real>>) -> Result<Self, PolygonError> {
        if points.len() < 3 {
            return Err(PolygonError::TooFewVertices(points.len()));
        }

        let mut normals = Vec::with_capacity(points.len());

        for i1 in 0..points.len() {
            let i2 = (i1 + 1) % points.len();
            let normal = utils::ccw_face_normal([&points[i1], &points[i2]])
                .ok_or(PolygonError::DegenerateEdge(i1))?;
            normals.push(normal);
        }

        check_convex_ccw(&points)?;

        Ok(ConvexPolygon { points, normals })
    }

    /// The vertices of this convex polygon.
    #[inline]
    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    /// The inward unit normals of the edges of this convex polygon.
    ///
    /// The `i`-th normal belongs to the edge going from the `i`-th vertex to the next one.
    #[inline]
    pub fn normals(&self) -> &[Unit<Vector2<Real>>] {
        &self.normals
    }

    /// Tests if `point` lies inside of this polygon or on its boundary.
    pub fn contains_point(&self, point: &Point2<Real>) -> bool {
        self.points
            .iter()
            .zip(self.normals.iter())
            .all(|(pt, n)| n.dot(&(point - pt)) >= 0.0)
    }

    /// Tests if the interiors of `self` and `other` overlap.
    #[inline]
    pub fn overlaps(&self, other: &ConvexPolygon) -> bool {
        query::overlap_convex_polygons(&self.points, &other.points)
    }

    /// Computes the minimum translation vector that pushes `self` out of `other`.
    ///
    /// Returns `None` if the polygons do not overlap.
    #[inline]
    pub fn overlap_with_mtv(&self, other: &ConvexPolygon) -> Option<MinimumTranslationVector> {
        query::overlap_convex_polygons_with_mtv(&self.points, &other.points)
    }
}

/// Checks that `points` are wound counter-clockwise and never turn right.
pub(crate) fn check_convex_ccw(points: &[Point2<Real>]) -> Result<(), PolygonError> {
    if polygon::signed_area(points) <= 0.0 {
        return Err(PolygonError::Clockwise);
    }

    for i1 in 0..points.len() {
        let i2 = (i1 + 1) % points.len();
        let i3 = (i1 + 2) % points.len();
        let turn = (points[i2] - points[i1]).perp(&(points[i3] - points[i2]));

        if turn < 0.0 {
            return Err(PolygonError::NotConvex { vertex: i2 });
        }
    }

    Ok(())
}

impl TryFrom<Vec<Point2<Real>>> for ConvexPolygon {
    type Error = PolygonError;

    fn try_from(points: Vec<Point2<Real>>) -> Result<Self, Self::Error> {
        ConvexPolygon::new(points)
    }
}
