use crate::math::{Point3, Real, Vector3};
use crate::query::Ray;
use crate::shape::{Plane, PlaneSide};
use crate::utils::FLOAT_ROUNDING_ERROR;
use na::ComplexField;

/// Computes the parameter `t` at which the line `origin + dir * t` crosses the plane.
///
/// Returns `None` if the line is parallel to the plane.
#[inline]
pub fn line_toi_with_plane(
    plane: &Plane,
    line_origin: &Point3<Real>,
    line_dir: &Vector3<Real>,
) -> Option<Real> {
    let denom = plane.normal.dot(line_dir);

    if denom == 0.0 {
        None
    } else {
        Some(-(plane.normal.dot(&line_origin.coords) + plane.d) / denom)
    }
}

/// Intersects a ray with a plane.
///
/// Returns the intersection point if the plane is hit for `t ≥ 0`. A ray parallel to the plane
/// only intersects it if its origin lies exactly on the plane, in which case the origin is
/// returned.
pub fn intersect_ray_plane(ray: &Ray, plane: &Plane) -> Option<Point3<Real>> {
    match line_toi_with_plane(plane, &ray.origin, &ray.dir) {
        Some(t) if t >= 0.0 => Some(ray.point_at(t)),
        Some(_) => None,
        None if plane.test_point(&ray.origin) == PlaneSide::OnPlane => Some(ray.origin),
        None => None,
    }
}

/// Intersects the infinite line through `start` and `end` with a plane.
///
/// Returns the parameter `t` (with `start` at `0` and `end` at `1`) and the intersection
/// point. A line parallel to the plane yields `(0, start)` if `start` lies on the plane
/// and `None` otherwise.
pub fn intersect_line_plane(
    start: &Point3<Real>,
    end: &Point3<Real>,
    plane: &Plane,
) -> Option<(Real, Point3<Real>)> {
    let dir = end - start;

    match line_toi_with_plane(plane, start, &dir) {
        Some(t) => Some((t, start + dir * t)),
        None if plane.test_point(start) == PlaneSide::OnPlane => Some((0.0, *start)),
        None => None,
    }
}

/// Intersects the segment `[start, end]` with a plane.
///
/// Returns `None` if the segment is parallel to the plane or does not reach it.
pub fn intersect_segment_plane(
    start: &Point3<Real>,
    end: &Point3<Real>,
    plane: &Plane,
) -> Option<Point3<Real>> {
    let dir = end - start;
    let t = line_toi_with_plane(plane, start, &dir)?;

    if t < 0.0 || t > 1.0 {
        None
    } else {
        Some(start + dir * t)
    }
}

/// Computes the single point shared by three planes.
///
/// Returns `None` if at least two of the planes are parallel (or almost parallel).
pub fn intersect_planes(a: &Plane, b: &Plane, c: &Plane) -> Option<Point3<Real>> {
    let ab = a.normal.cross(&*b.normal);
    let bc = b.normal.cross(&*c.normal);
    let ca = c.normal.cross(&*a.normal);

    let f = -a.normal.dot(&bc);

    if ComplexField::abs(f) <= FLOAT_ROUNDING_ERROR {
        return None;
    }

    Some(Point3::from((bc * a.d + ca * b.d + ab * c.d) / f))
}
