use intersector::math::{Real, Vector3};
use intersector::query::{split_triangle, SplitTriangle};
use intersector::shape::Plane;

#[test]
fn triangle_fully_in_front() {
    let plane = Plane::new(Vector3::z_axis(), 0.0);
    let triangle: [Real; 9] = [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0];
    let mut split = SplitTriangle::new(3).unwrap();

    split_triangle(&triangle, &plane, &mut split);

    assert_eq!(split.total(), 1);
    assert_eq!(split.num_front(), 1);
    assert_eq!(split.num_back(), 0);
    assert_eq!(split.front(), &triangle[..]);
}

#[test]
fn split_counts_add_up() {
    let plane = Plane::new(Vector3::x_axis(), -0.5);
    let mut split = SplitTriangle::new(5).unwrap();

    // One vertex behind `x = 0.5`, two in front of it. Each vertex carries two texture
    // coordinates.
    #[rustfmt::skip]
    let triangle: [Real; 15] = [
        0.0, 0.0, 0.0,   0.0, 0.0,
        1.0, 0.0, 0.0,   1.0, 0.0,
        1.0, 1.0, 0.0,   1.0, 1.0,
    ];

    split_triangle(&triangle, &plane, &mut split);

    assert_eq!(split.total(), 3);
    assert_eq!(split.num_front(), 2);
    assert_eq!(split.num_back(), 1);
    assert_eq!(split.num_front() + split.num_back(), split.total());
    assert_eq!(split.front().len(), 2 * 3 * 5);
    assert_eq!(split.back().len(), 3 * 5);

    // Texture coordinates follow the positions along the cut edges.
    for vertex in split.front().chunks_exact(5).chain(split.back().chunks_exact(5)) {
        assert_relative_eq!(vertex[3], vertex[0]);
        assert_relative_eq!(vertex[4], vertex[1]);
    }

    // The split object is reset by each call.
    let behind: [Real; 15] = [-1.0; 15];
    split_triangle(&behind, &plane, &mut split);
    assert_eq!(split.total(), 1);
    assert_eq!(split.num_back(), 1);
    assert_eq!(split.num_front(), 0);
}
