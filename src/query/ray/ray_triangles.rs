//! Ray casts against soups of triangles.
//!
//! All functions return the hit nearest to the ray origin, compared by squared distance.

use crate::math::{Point3, Real};
use crate::query::{intersect_ray_triangle, Ray};

/// Keeps the candidate nearest to `origin`.
#[inline]
fn keep_nearest(
    origin: &Point3<Real>,
    best: Option<(Real, Point3<Real>)>,
    candidate: Option<Point3<Real>>,
) -> Option<(Real, Point3<Real>)> {
    match (best, candidate) {
        (Some((best_dist, _)), Some(pt)) => {
            let dist = na::distance_squared(origin, &pt);
            if dist < best_dist {
                Some((dist, pt))
            } else {
                best
            }
        }
        (None, Some(pt)) => Some((na::distance_squared(origin, &pt), pt)),
        (best, None) => best,
    }
}

/// Intersects a ray with a flat array of triangles.
///
/// Each triangle is made of nine consecutive scalars: the three coordinates of each of its
/// three vertices.
///
/// # Panics
///
/// Panics if the length of `triangles` is not a multiple of 9.
pub fn intersect_ray_triangles(ray: &Ray, triangles: &[Real]) -> Option<Point3<Real>> {
    assert!(
        triangles.len() % 9 == 0,
        "the triangle array length must be a multiple of 9, got {}",
        triangles.len()
    );

    triangles
        .chunks_exact(9)
        .fold(None, |best, tri| {
            let a = Point3::new(tri[0], tri[1], tri[2]);
            let b = Point3::new(tri[3], tri[4], tri[5]);
            let c = Point3::new(tri[6], tri[7], tri[8]);
            keep_nearest(&ray.origin, best, intersect_ray_triangle(ray, &a, &b, &c))
        })
        .map(|(_, pt)| pt)
}

/// Intersects a ray with an indexed triangle mesh.
///
/// `vertices` holds `vertex_size` scalars per vertex, the first three being its position.
/// Every three consecutive entries of `indices` describe one triangle.
///
/// # Panics
///
/// Panics if the length of `indices` is not a multiple of 3, if `vertex_size < 3`, or if
/// an index is out of bounds.
pub fn intersect_ray_indexed_triangles(
    ray: &Ray,
    vertices: &[Real],
    indices: &[u32],
    vertex_size: usize,
) -> Option<Point3<Real>> {
    assert!(
        indices.len() % 3 == 0,
        "the index count must be a multiple of 3, got {}",
        indices.len()
    );
    assert!(
        vertex_size >= 3,
        "a vertex must have at least 3 components, got {}",
        vertex_size
    );

    let vertex = |i: u32| {
        let start = i as usize * vertex_size;
        Point3::new(vertices[start], vertices[start + 1], vertices[start + 2])
    };

    indices
        .chunks_exact(3)
        .fold(None, |best, idx| {
            let hit =
                intersect_ray_triangle(ray, &vertex(idx[0]), &vertex(idx[1]), &vertex(idx[2]));
            keep_nearest(&ray.origin, best, hit)
        })
        .map(|(_, pt)| pt)
}

/// Intersects a ray with a list of triangle vertices, three per triangle.
///
/// # Panics
///
/// Panics if the length of `triangles` is not a multiple of 3.
pub fn intersect_ray_triangle_list(ray: &Ray, triangles: &[Point3<Real>]) -> Option<Point3<Real>> {
    assert!(
        triangles.len() % 3 == 0,
        "the vertex count must be a multiple of 3, got {}",
        triangles.len()
    );

    triangles
        .chunks_exact(3)
        .fold(None, |best, tri| {
            keep_nearest(
                &ray.origin,
                best,
                intersect_ray_triangle(ray, &tri[0], &tri[1], &tri[2]),
            )
        })
        .map(|(_, pt)| pt)
}
