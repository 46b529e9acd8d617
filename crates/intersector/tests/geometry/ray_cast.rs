use intersector::bounding_volume::Aabb;
use intersector::math::{Point3, Real, Vector3};
use intersector::na::{self, Unit};
use intersector::query::{self, Ray};
use intersector::shape::{Plane, PlaneSide, Sphere};

#[test]
fn ray_bounds_from_outside_and_inside() {
    let aabb = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0));

    let outside = Ray::new(Point3::new(-1.0, 0.5, 0.5), Vector3::x());
    assert_eq!(
        query::intersect_ray_bounds(&outside, &aabb),
        Some(Point3::new(0.0, 0.5, 0.5))
    );

    let inside = Ray::new(Point3::new(0.5, 0.5, 0.5), Vector3::x());
    assert_eq!(query::intersect_ray_bounds(&inside, &aabb), Some(inside.origin));
}

#[test]
fn exact_and_fast_ray_bounds_agree() {
    let mut rng = oorandom::Rand32::new(42);
    let aabb = Aabb::new(Point3::new(-1.0, -2.0, -0.5), Point3::new(1.0, 2.0, 0.5));

    for _ in 0..1000 {
        let origin = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() as Real * 8.0 - 4.0));
        let dir = Vector3::from_fn(|_, _| rng.rand_float() as Real * 2.0 - 1.0);
        let ray = Ray::new(origin, dir);

        let exact = query::intersect_ray_bounds(&ray, &aabb);

        if let Some(hit) = exact {
            // The fast test is conservative with respect to the exact one.
            assert!(
                query::intersect_ray_bounds_fast(&ray, &aabb),
                "Ray {ray:?} hit {hit:?} but the fast test missed it."
            );
            assert!(aabb.contains_local_point(&hit));
        }
    }
}

#[test]
fn ray_plane_hits_lie_on_the_plane() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..1000 {
        let normal = Unit::new_normalize(Vector3::from_fn(|_, _| rng.rand_float() as Real - 0.5));
        let plane = Plane::new(normal, rng.rand_float() as Real * 10.0 - 5.0);
        let origin = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() as Real * 20.0 - 10.0));
        let dir = Vector3::from_fn(|_, _| rng.rand_float() as Real - 0.5);
        let ray = Ray::new(origin, dir);

        if let Some(hit) = query::intersect_ray_plane(&ray, &plane) {
            let tolerance = 1.0e-3 * (1.0 + na::distance(&origin, &hit));
            assert!(
                plane.distance(&hit).abs() <= tolerance,
                "Hit {hit:?} of ray {ray:?} is not on {plane:?}."
            );
            // The hit is never behind the ray origin.
            assert!(dir.dot(&(hit - origin)) >= -tolerance);
        }
    }
}

#[test]
fn ray_plane_on_plane_parallel_ray() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);
    let ray = Ray::new(Point3::new(1.0, 2.0, 0.0), Vector3::x());

    assert_eq!(plane.test_point(&ray.origin), PlaneSide::OnPlane);
    assert_eq!(query::intersect_ray_plane(&ray, &plane), Some(ray.origin));

    let above = Ray::new(Point3::new(1.0, 2.0, 1.0), Vector3::x());
    assert_eq!(query::intersect_ray_plane(&above, &plane), None);
}

#[test]
fn ray_sphere_uses_unit_direction_as_distance() {
    let sphere = Sphere::new(Point3::new(0.0, 0.0, 10.0), 2.0);
    let target = Point3::new(0.0, 0.0, 10.0);
    let ray = Ray::look_at(Point3::origin(), &target).unwrap();

    assert!(ray.has_unit_dir());
    let hit = sphere.intersect_ray(&ray).unwrap();
    assert_relative_eq!(hit, Point3::new(0.0, 0.0, 8.0), epsilon = 1.0e-5);
}

#[test]
fn ray_triangle_soup_nearest_hit() {
    #[rustfmt::skip]
    let soup: [Real; 27] = [
        -1.0, -1.0, 5.0,   1.0, -1.0, 5.0,   0.0, 1.0, 5.0,
        -1.0, -1.0, 2.0,   1.0, -1.0, 2.0,   0.0, 1.0, 2.0,
        -1.0, -1.0, 9.0,   1.0, -1.0, 9.0,   0.0, 1.0, 9.0,
    ];
    let ray = Ray::new(Point3::new(0.0, 0.0, -3.0), Vector3::z());

    assert_eq!(
        query::intersect_ray_triangles(&ray, &soup),
        Some(Point3::new(0.0, 0.0, 2.0))
    );
}
