//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
pub use self::ray_aabb::{
    intersect_ray_bounds, intersect_ray_bounds_fast, intersect_ray_bounds_fast_center,
    intersect_ray_oriented_bounds,
};
pub use self::ray_plane::{
    intersect_line_plane, intersect_planes, intersect_ray_plane, intersect_segment_plane,
    line_toi_with_plane,
};
pub use self::ray_sphere::intersect_ray_sphere;
pub use self::ray_triangle::intersect_ray_triangle;
pub use self::ray_triangles::{
    intersect_ray_indexed_triangles, intersect_ray_triangle_list, intersect_ray_triangles,
};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_plane;
mod ray_sphere;
mod ray_triangle;
mod ray_triangles;
