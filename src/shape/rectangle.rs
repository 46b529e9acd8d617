//! Axis-aligned 2D rectangle.

use crate::math::{Point2, Real};

/// An axis-aligned rectangle given by its bottom-left corner and its size.
///
/// Only meaningful for non-negative `width` and `height`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Rectangle {
    /// The x coordinate of the bottom-left corner.
    pub x: Real,
    /// The y coordinate of the bottom-left corner.
    pub y: Real,
    /// The extent along the x axis.
    pub width: Real,
    /// The extent along the y axis.
    pub height: Real,
}

impl Rectangle {
    /// Creates a new rectangle.
    #[inline]
    pub fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }

    /// The bottom-left corner.
    #[inline]
    pub fn mins(&self) -> Point2<Real> {
        Point2::new(self.x, self.y)
    }

    /// The top-right corner.
    #[inline]
    pub fn maxs(&self) -> Point2<Real> {
        Point2::new(self.x + self.width, self.y + self.height)
    }

    /// The four corners, counter-clockwise, starting from the bottom-left one.
    #[inline]
    pub fn vertices(&self) -> [Point2<Real>; 4] {
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Point2::new(self.x, self.y),
            Point2::new(x1, self.y),
            Point2::new(x1, y1),
            Point2::new(self.x, y1),
        ]
    }

    /// Does this rectangle contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point2<Real>) -> bool {
        self.x <= point.x
            && self.x + self.width >= point.x
            && self.y <= point.y
            && self.y + self.height >= point.y
    }

    /// Do the interiors of `self` and `other` overlap?
    ///
    /// Rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
