//! Implementation details of the 2D intersection and overlap tests.

pub use self::intersection_test_rectangle_circle::{
    intersect_rectangles, overlaps_circle_rectangle, overlaps_circles, overlaps_rectangles,
};
pub use self::intersection_test_segment_circle::{
    intersect_segment_circle, intersect_segment_circle_with_mtv,
};
pub use self::intersection_test_segment_polygon::{
    intersect_line_polygon, intersect_segment_polygon, intersect_segment_rectangle,
};
pub use self::intersection_test_segment_segment::{
    intersect_lines, intersect_ray_ray2d, intersect_segments,
};

mod intersection_test_rectangle_circle;
mod intersection_test_segment_circle;
mod intersection_test_segment_polygon;
mod intersection_test_segment_segment;
