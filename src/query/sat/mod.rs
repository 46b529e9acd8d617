//! Application of the Separating Axis Theorem (SAT) for overlap tests.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For convex polygons it is sufficient to test the
//! normals of every edge of both polygons. The axis with the smallest overlap gives the
//! minimum translation vector separating both shapes.

pub use self::sat_polygon_polygon::{
    overlap_convex_polygons, overlap_convex_polygons_with_mtv, MinimumTranslationVector,
};

mod sat_polygon_polygon;
