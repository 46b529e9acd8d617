//! Simple 2D polygon.

use crate::math::{Point2, Real};
use crate::utils;
use alloc::vec::Vec;
use na::ComplexField;

/// A simple (non self-intersecting) polygon with arbitrary winding.
///
/// The polygon is implicitly closed: the last vertex connects back to the first one
/// and no closing duplicate vertex should be stored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    pub fn new(vertices: Vec<Point2<Real>>) -> Self {
        Polygon { vertices }
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// Consumes this polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<Real>> {
        self.vertices
    }

    /// Is this polygon made of less than three vertices?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// The signed area of this polygon: positive if counter-clockwise, negative if clockwise.
    pub fn signed_area(&self) -> Real {
        signed_area(&self.vertices)
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        ComplexField::abs(self.signed_area())
    }

    /// Are the vertices of this polygon wound counter-clockwise?
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverses the winding of this polygon.
    pub fn reverse(&mut self) {
        self.vertices.reverse()
    }

    /// The center of mass of this polygon, assuming a uniform density.
    ///
    /// Returns `None` if the polygon has a zero area.
    pub fn centroid(&self) -> Option<Point2<Real>> {
        let mut twice_area = 0.0;
        let mut x = 0.0;
        let mut y = 0.0;

        for (i, a) in self.vertices.iter().enumerate() {
            let b = self.vertices[(i + 1) % self.vertices.len()];
            let cross = a.x * b.y - b.x * a.y;
            twice_area += cross;
            x += (a.x + b.x) * cross;
            y += (a.y + b.y) * cross;
        }

        if twice_area == 0.0 {
            return None;
        }

        let denom = 3.0 * twice_area;
        Some(Point2::new(x / denom, y / denom))
    }

    /// Tests if `point` is inside of this polygon, using the even-odd rule.
    #[inline]
    pub fn contains_point(&self, point: &Point2<Real>) -> bool {
        utils::is_point_in_polygon(&self.vertices, point)
    }
}

impl From<Vec<Point2<Real>>> for Polygon {
    fn from(vertices: Vec<Point2<Real>>) -> Self {
        Polygon::new(vertices)
    }
}

/// The signed area of the closed polygon described by `vertices`, using the shoelace formula.
pub(crate) fn signed_area(vertices: &[Point2<Real>]) -> Real {
    let Some(mut last) = vertices.last() else {
        return 0.0;
    };

    let mut area = 0.0;

    for vertex in vertices {
        area += last.x * vertex.y - vertex.x * last.y;
        last = vertex;
    }

    area * 0.5
}
