pub use self::split_triangle::{split_triangle, SplitTriangle, SplitTriangleError};

mod split_triangle;
