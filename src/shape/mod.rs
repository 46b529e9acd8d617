//! Shapes supported by the intersection queries.

pub use self::circle::Circle;
pub use self::convex_polygon::{ConvexPolygon, PolygonError};
pub use self::plane::{Plane, PlaneSide};
pub use self::polygon::Polygon;
pub use self::rectangle::Rectangle;
pub use self::sphere::Sphere;

mod circle;
pub(crate) mod convex_polygon;
mod plane;
mod polygon;
mod rectangle;
mod sphere;
