//! Implementation details of the distance and nearest-point queries.

pub use self::distance_segment_point::{
    distance_line_point, distance_segment_point, nearest_segment_point,
};

mod distance_segment_point;
