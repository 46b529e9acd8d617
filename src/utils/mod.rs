//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::consts::FLOAT_ROUNDING_ERROR;
pub use self::point_in_poly2d::{is_point_in_polygon, point_line_side};
pub use self::point_in_triangle::{is_point_in_triangle2d, is_point_in_triangle3d};

mod ccw_face_normal;
mod consts;
mod point_in_poly2d;
mod point_in_triangle;
