use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Isometry3, Point3, Real, Vector3};
use crate::query::Ray;

/// Intersects a ray with an axis-aligned bounding box.
///
/// If the ray origin is inside of the box (boundary included), the origin itself is
/// returned. Otherwise, each face the ray travels toward is tested and the nearest hit
/// lying within the face is returned, clamped to the box to remove floating-point drift.
///
/// The ray direction does not need to be normalized.
pub fn intersect_ray_bounds(ray: &Ray, aabb: &Aabb) -> Option<Point3<Real>> {
    if aabb.contains_local_point(&ray.origin) {
        return Some(ray.origin);
    }

    let mut lowest: Option<Real> = None;

    for i in 0..3 {
        let (j, k) = ((i + 1) % 3, (i + 2) % 3);

        let faces = [
            (ray.origin[i] <= aabb.mins[i] && ray.dir[i] > 0.0, aabb.mins[i]),
            (ray.origin[i] >= aabb.maxs[i] && ray.dir[i] < 0.0, aabb.maxs[i]),
        ];

        for (facing, face_coord) in faces {
            if !facing {
                continue;
            }

            let t = (face_coord - ray.origin[i]) / ray.dir[i];

            if t < 0.0 || lowest.is_some_and(|lowest| t >= lowest) {
                continue;
            }

            let pt = ray.point_at(t);

            if pt[j] >= aabb.mins[j]
                && pt[j] <= aabb.maxs[j]
                && pt[k] >= aabb.mins[k]
                && pt[k] <= aabb.maxs[k]
            {
                lowest = Some(t);
            }
        }
    }

    lowest.map(|t| aabb.clamp_point(&ray.point_at(t)))
}

/// Quickly tests if a ray intersects the box with the given center and full dimensions.
///
/// This is a branchless slab test evaluated in double precision. It does not compute the
/// intersection point. A ray starting inside of the box intersects it.
pub fn intersect_ray_bounds_fast_center(
    ray: &Ray,
    center: &Point3<Real>,
    dimensions: &Vector3<Real>,
) -> bool {
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for i in 0..3 {
        let inv_dir = 1.0 / f64::from(ray.dir[i]);
        let half_extent = f64::from(dimensions[i]) * 0.5;
        let center = f64::from(center[i]);
        let origin = f64::from(ray.origin[i]);

        let mut near = (center - half_extent - origin) * inv_dir;
        let mut far = (center + half_extent - origin) * inv_dir;

        if near > far {
            mem::swap(&mut near, &mut far);
        }

        t_min = t_min.max(near);
        t_max = t_max.min(far);
    }

    t_max >= 0.0 && t_max >= t_min
}

/// Quickly tests if a ray intersects an axis-aligned bounding box.
///
/// See [`intersect_ray_bounds_fast_center`].
#[inline]
pub fn intersect_ray_bounds_fast(ray: &Ray, aabb: &Aabb) -> bool {
    intersect_ray_bounds_fast_center(ray, &aabb.center(), &aabb.extents())
}

/// Intersects a ray with a box placed in the world with the given rigid transform.
///
/// `aabb` is expressed in the local frame of the box. The intersection point is returned in
/// world space.
pub fn intersect_ray_oriented_bounds(
    ray: &Ray,
    aabb: &Aabb,
    pose: &Isometry3<Real>,
) -> Option<Point3<Real>> {
    let local_ray = ray.inverse_transform_by(pose);
    intersect_ray_bounds(&local_ray, aabb).map(|pt| pose * pt)
}

impl Aabb {
    /// Intersects a ray with this AABB.
    ///
    /// See [`intersect_ray_bounds`].
    #[inline]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Point3<Real>> {
        intersect_ray_bounds(ray, self)
    }

    /// Tests if a ray intersects this AABB, without computing the intersection point.
    #[inline]
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        intersect_ray_bounds_fast(ray, self)
    }
}
