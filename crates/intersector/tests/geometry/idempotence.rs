//! Queries are pure: calling them twice with the same inputs gives the same outputs.

use intersector::bounding_volume::Aabb;
use intersector::math::{Point2, Point3, Real, Vector2, Vector3};
use intersector::query::{self, Ray, SplitTriangle};
use intersector::shape::{Circle, Plane, Rectangle};
use intersector::utils;

fn point2(rng: &mut oorandom::Rand32) -> Point2<Real> {
    Point2::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    )
}

fn point3(rng: &mut oorandom::Rand32) -> Point3<Real> {
    Point3::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    )
}

#[test]
fn queries_2d_are_idempotent() {
    let mut rng = oorandom::Rand32::new(0);
    let square = [
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
        Point2::new(1.0, 1.0),
        Point2::new(-1.0, 1.0),
    ];
    let rect = Rectangle::new(-1.0, -0.5, 2.0, 1.0);

    for _ in 0..200 {
        let [a, b, c, d] = [(); 4].map(|_| point2(&mut rng));
        let circle = Circle::new(c, rng.rand_float() as Real);
        let dir = Vector2::new(1.0, rng.rand_float() as Real);

        assert_eq!(
            query::intersect_segments(&a, &b, &c, &d),
            query::intersect_segments(&a, &b, &c, &d)
        );
        assert_eq!(
            query::intersect_lines(&a, &b, &c, &d),
            query::intersect_lines(&a, &b, &c, &d)
        );
        assert_eq!(
            query::intersect_ray_ray2d(&a, &dir, &c, &b.coords),
            query::intersect_ray_ray2d(&a, &dir, &c, &b.coords)
        );
        assert_eq!(
            query::intersect_segment_circle_with_mtv(&a, &b, &circle),
            query::intersect_segment_circle_with_mtv(&a, &b, &circle)
        );
        assert_eq!(
            query::intersect_segment_rectangle(&a, &b, &rect),
            query::intersect_segment_rectangle(&a, &b, &rect)
        );
        assert_eq!(
            utils::is_point_in_polygon(&square, &a),
            utils::is_point_in_polygon(&square, &a)
        );
        assert_eq!(
            utils::is_point_in_triangle2d(&a, &b, &c, &d),
            utils::is_point_in_triangle2d(&a, &b, &c, &d)
        );

        let moved: Vec<_> = square.iter().map(|pt| pt + a.coords).collect();
        assert_eq!(
            query::overlap_convex_polygons_with_mtv(&moved, &square),
            query::overlap_convex_polygons_with_mtv(&moved, &square)
        );
        assert_eq!(
            query::intersect_polygons(&moved, &square),
            query::intersect_polygons(&moved, &square)
        );
    }
}

#[test]
fn queries_3d_are_idempotent() {
    let mut rng = oorandom::Rand32::new(1);
    let aabb = Aabb::new(Point3::new(-0.5, -0.5, -0.5), Point3::new(0.5, 0.5, 0.5));
    let mut split1 = SplitTriangle::new(3).unwrap();
    let mut split2 = SplitTriangle::new(3).unwrap();

    for _ in 0..200 {
        let [o, a, b, c] = [(); 4].map(|_| point3(&mut rng));
        let ray = Ray::new(o, Point3::origin() - o + Vector3::new(0.1, 0.0, 0.0));

        let Some(plane) = Plane::from_points(&a, &b, &c) else {
            continue;
        };

        assert_eq!(
            query::intersect_ray_plane(&ray, &plane),
            query::intersect_ray_plane(&ray, &plane)
        );
        assert_eq!(
            query::intersect_ray_triangle(&ray, &a, &b, &c),
            query::intersect_ray_triangle(&ray, &a, &b, &c)
        );
        assert_eq!(
            query::intersect_ray_bounds(&ray, &aabb),
            query::intersect_ray_bounds(&ray, &aabb)
        );
        assert_eq!(
            query::intersect_ray_bounds_fast(&ray, &aabb),
            query::intersect_ray_bounds_fast(&ray, &aabb)
        );

        if let Some(unit_ray) = ray.normalized() {
            assert_eq!(
                query::intersect_ray_sphere(&unit_ray, &a, 1.0),
                query::intersect_ray_sphere(&unit_ray, &a, 1.0)
            );
        }

        let triangle = [o.x, o.y, o.z, a.x, a.y, a.z, b.x, b.y, b.z];
        query::split_triangle(&triangle, &plane, &mut split1);
        query::split_triangle(&triangle, &plane, &mut split2);
        assert_eq!(split1.total(), split2.total());
        assert_eq!(split1.front(), split2.front());
        assert_eq!(split1.back(), split2.back());
    }
}
