use intersector::math::{Point2, Real, Vector2};
use intersector::query;
use intersector::shape::{Circle, Polygon, Rectangle};

#[test]
fn crossing_diagonals() {
    let hit = query::intersect_segments(
        &Point2::new(0.0, 0.0),
        &Point2::new(2.0, 2.0),
        &Point2::new(0.0, 2.0),
        &Point2::new(2.0, 0.0),
    );
    assert_relative_eq!(hit.unwrap(), Point2::new(1.0, 1.0));
}

#[test]
fn parallel_segments_do_not_intersect() {
    let hit = query::intersect_segments(
        &Point2::new(0.0, 0.0),
        &Point2::new(2.0, 0.0),
        &Point2::new(0.0, 1.0),
        &Point2::new(2.0, 1.0),
    );
    assert!(hit.is_none());

    let line = query::intersect_lines(
        &Point2::new(0.0, 0.0),
        &Point2::new(2.0, 0.0),
        &Point2::new(0.0, 1.0),
        &Point2::new(2.0, 1.0),
    );
    assert!(line.is_none());
}

#[test]
fn segment_against_shapes() {
    let a = Point2::new(-3.0, 0.5);
    let b = Point2::new(3.0, 0.5);

    let rect = Rectangle::new(0.0, 0.0, 1.0, 1.0);
    assert!(query::intersect_segment_rectangle(&a, &b, &rect));
    assert!(query::intersect_segment_polygon(&a, &b, &rect.vertices()));

    let circle = Circle::new(Point2::new(0.0, 0.0), 1.0);
    assert!(query::intersect_segment_circle(&a, &b, &circle));

    let mtv = query::intersect_segment_circle_with_mtv(&a, &b, &circle).unwrap();
    assert_relative_eq!(mtv.normal, Vector2::y());
    assert_relative_eq!(mtv.depth, 0.5);

    let triangle = Polygon::new(vec![
        Point2::new(5.0, 0.0),
        Point2::new(6.0, 0.0),
        Point2::new(5.5, 1.0),
    ]);
    assert!(!query::intersect_segment_polygon(&a, &b, triangle.vertices()));
    assert!(query::intersect_line_polygon(&a, &b, triangle.vertices()));
}

#[test]
fn nearest_points_and_distances() {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(4.0, 0.0);
    let p = Point2::new(6.0, 3.0);

    assert_eq!(query::nearest_segment_point(&a, &b, &p), b);
    assert_relative_eq!(query::distance_segment_point(&a, &b, &p), (13.0 as Real).sqrt());
    assert_relative_eq!(query::distance_line_point(&a, &b, &p), 3.0);
}
