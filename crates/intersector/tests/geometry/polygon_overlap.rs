use intersector::math::{Point2, Real, Vector2};
use intersector::query;
use intersector::shape::{ConvexPolygon, Polygon, PolygonError};

fn unit_square(x: Real, y: Real) -> Vec<Point2<Real>> {
    vec![
        Point2::new(x, y),
        Point2::new(x + 1.0, y),
        Point2::new(x + 1.0, y + 1.0),
        Point2::new(x, y + 1.0),
    ]
}

#[test]
fn offset_unit_squares() {
    let p1 = ConvexPolygon::new(unit_square(0.0, 0.0)).unwrap();
    let p2 = ConvexPolygon::new(unit_square(0.0, 0.5)).unwrap();

    assert!(p1.overlaps(&p2));

    let mtv = p1.overlap_with_mtv(&p2).unwrap();
    assert_relative_eq!(mtv.depth, 0.5);
    assert_relative_eq!(mtv.normal, -Vector2::y());
}

#[test]
fn mtv_resolves_random_overlaps() {
    let mut rng = oorandom::Rand32::new(1234);
    let p2 = unit_square(0.0, 0.0);

    for _ in 0..500 {
        let offset = Vector2::new(
            rng.rand_float() as Real * 1.8 - 0.9,
            rng.rand_float() as Real * 1.8 - 0.9,
        );
        let p1: Vec<_> = p2.iter().map(|pt| pt + offset).collect();

        let Some(mtv) = query::overlap_convex_polygons_with_mtv(&p1, &p2) else {
            panic!("Squares offset by {offset:?} should overlap.");
        };

        assert_relative_eq!(mtv.normal.norm(), 1.0, epsilon = 1.0e-5);
        assert!(mtv.depth >= 0.0);

        let separated: Vec<_> = p1
            .iter()
            .map(|pt| pt + mtv.normal * (mtv.depth + 1.0e-3))
            .collect();
        assert!(
            !query::overlap_convex_polygons(&separated, &p2),
            "Offset {offset:?} was not resolved by {mtv:?}."
        );
    }
}

#[test]
fn invalid_convex_polygons() {
    let mut cw = unit_square(0.0, 0.0);
    cw.reverse();
    assert_eq!(ConvexPolygon::new(cw).unwrap_err(), PolygonError::Clockwise);

    let concave = vec![
        Point2::new(0.0, 0.0),
        Point2::new(2.0, 0.0),
        Point2::new(1.0, 0.5),
        Point2::new(2.0, 2.0),
        Point2::new(0.0, 2.0),
    ];
    assert!(matches!(
        ConvexPolygon::try_from(concave),
        Err(PolygonError::NotConvex { .. })
    ));
}

#[test]
fn clipped_overlap_area() {
    let subject = Polygon::new(unit_square(0.0, 0.0));
    let overlap = subject.intersection(&unit_square(0.5, 0.5)).unwrap();

    assert_relative_eq!(overlap.area(), 0.25, epsilon = 1.0e-6);
    assert!(overlap.is_ccw());
    assert!(overlap.contains_point(&Point2::new(0.75, 0.75)));
    assert!(!overlap.contains_point(&Point2::new(0.25, 0.25)));
}
