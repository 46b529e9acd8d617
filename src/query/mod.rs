//! Non-persistent geometric queries.
//!
//! Every query is a free function of its arguments, with no hidden state. Misses are
//! reported with `false` or `None`. Queries are grouped by the kind of primitive they
//! cast or test:
//!
//! * Point containment lives in [`crate::utils`] and on the shapes themselves.
//! * Distances: [`distance_segment_point`], [`nearest_segment_point`], [`distance_line_point`].
//! * 2D crossings of lines and segments with segments, polygons, rectangles and circles:
//!   [`intersect_segments`], [`intersect_segment_polygon`], [`intersect_segment_circle`], ...
//! * 3D ray casts against planes, triangles, spheres and boxes: [`intersect_ray_plane`],
//!   [`intersect_ray_triangle`], [`intersect_ray_sphere`], [`intersect_ray_bounds`], ...
//! * Overlap of 2D areas, including the separating axis test of convex polygons with its
//!   [`MinimumTranslationVector`].
//! * Splitting of triangles by a plane with [`split_triangle`], and clipping of polygons
//!   with [`intersect_polygons`].

pub use self::clip::intersect_polygons;
pub use self::distance::{distance_line_point, distance_segment_point, nearest_segment_point};
pub use self::intersection_test::{
    intersect_line_polygon, intersect_lines, intersect_ray_ray2d, intersect_rectangles,
    intersect_segment_circle, intersect_segment_circle_with_mtv, intersect_segment_polygon,
    intersect_segment_rectangle, intersect_segments, overlaps_circle_rectangle,
    overlaps_circles, overlaps_rectangles,
};
pub use self::ray::{
    intersect_line_plane, intersect_planes, intersect_ray_bounds, intersect_ray_bounds_fast,
    intersect_ray_bounds_fast_center, intersect_ray_indexed_triangles,
    intersect_ray_oriented_bounds, intersect_ray_plane, intersect_ray_sphere,
    intersect_ray_triangle, intersect_ray_triangle_list, intersect_ray_triangles,
    intersect_segment_plane, line_toi_with_plane, Ray,
};
pub use self::sat::{
    overlap_convex_polygons, overlap_convex_polygons_with_mtv, MinimumTranslationVector,
};
pub use self::split::{split_triangle, SplitTriangle, SplitTriangleError};

mod clip;
mod distance;
mod intersection_test;
mod ray;
pub mod sat;
mod split;
