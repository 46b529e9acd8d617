use crate::math::{Point3, Real};
use crate::query::Ray;
use crate::shape::Sphere;
use na::ComplexField;

/// Intersects a ray with the sphere of the given center and radius.
///
/// Returns the nearest intersection point in front of the ray origin. A sphere whose
/// center lies behind the ray origin is never hit, even if the origin is inside of it.
///
/// # Precondition
///
/// The ray direction must be normalized: the projection of the center onto the ray is used
/// as a distance. This is only checked by a debug assertion.
pub fn intersect_ray_sphere(
    ray: &Ray,
    center: &Point3<Real>,
    radius: Real,
) -> Option<Point3<Real>> {
    debug_assert!(
        ray.has_unit_dir(),
        "The ray direction must be normalized for sphere intersection."
    );

    let len = ray.dir.dot(&(center - ray.origin));

    // The sphere center is behind the ray.
    if len < 0.0 {
        return None;
    }

    let dst2 = na::distance_squared(center, &ray.point_at(len));
    let r2 = radius * radius;

    if dst2 > r2 {
        return None;
    }

    Some(ray.point_at(len - ComplexField::sqrt(r2 - dst2)))
}

impl Sphere {
    /// Intersects a ray with this sphere.
    ///
    /// See [`intersect_ray_sphere`] for details and preconditions.
    #[inline]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Point3<Real>> {
        intersect_ray_sphere(ray, &self.center, self.radius)
    }
}
