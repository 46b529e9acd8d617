use crate::math::{Point3, Real};
use crate::query::Ray;
use crate::shape::{Plane, PlaneSide};
use crate::utils::{self, FLOAT_ROUNDING_ERROR};
use na::ComplexField;

/// Computes the intersection between a ray and the triangle `abc`, using the
/// Möller–Trumbore algorithm.
///
/// Both faces of the triangle are hit. The direction of the ray does not need to be
/// normalized.
///
/// When the ray is parallel to the triangle (the determinant is within
/// `FLOAT_ROUNDING_ERROR` of zero), it only hits if its origin lies exactly on the plane of
/// the triangle and inside of it; the origin is returned in that case. A hit closer than
/// `FLOAT_ROUNDING_ERROR` along the ray is snapped to the ray origin.
pub fn intersect_ray_triangle(
    ray: &Ray,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
) -> Option<Point3<Real>> {
    let edge1 = b - a;
    let edge2 = c - a;

    let pvec = ray.dir.cross(&edge2);
    let det = edge1.dot(&pvec);

    if ComplexField::abs(det) <= FLOAT_ROUNDING_ERROR {
        return parallel_ray_intersection_with_triangle(ray, a, b, c);
    }

    let inv_det = 1.0 / det;

    let tvec = ray.origin - a;
    let u = tvec.dot(&pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = ray.dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if t < 0.0 {
        return None;
    }

    if t <= FLOAT_ROUNDING_ERROR {
        Some(ray.origin)
    } else {
        Some(ray.point_at(t))
    }
}

fn parallel_ray_intersection_with_triangle(
    ray: &Ray,
    a: &Point3<Real>,
    b: &Point3<Real>,
    c: &Point3<Real>,
) -> Option<Point3<Real>> {
    let Some(plane) = Plane::from_points(a, b, c) else {
        log::trace!("Ray cast against a degenerate triangle: {a:?}, {b:?}, {c:?}.");
        return None;
    };

    if plane.test_point(&ray.origin) == PlaneSide::OnPlane
        && utils::is_point_in_triangle3d(&ray.origin, a, b, c)
    {
        Some(ray.origin)
    } else {
        None
    }
}
