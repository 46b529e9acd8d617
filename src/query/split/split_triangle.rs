use crate::math::{Point3, Real};
use crate::query::intersect_line_plane;
use crate::shape::{Plane, PlaneSide};
use alloc::vec;
use alloc::vec::Vec;

/// Error returned when building a [`SplitTriangle`] fails.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SplitTriangleError {
    /// A vertex must hold at least its three position components.
    #[error("a vertex stride must be at least 3, got {0}.")]
    StrideTooSmall(usize),
}

/// The result of splitting a triangle by a plane, see [`split_triangle`].
///
/// Vertices are stored flat, `stride` reals per vertex. The first three reals of each vertex
/// are its position; the others are attributes (normals, texture coordinates, ...) that are
/// linearly interpolated where an edge crosses the plane.
///
/// This structure is reused across calls to avoid allocating: each split resets it.
#[derive(Clone, Debug)]
pub struct SplitTriangle {
    front: Vec<Real>,
    back: Vec<Real>,
    edge_split: Vec<Real>,
    num_front: usize,
    num_back: usize,
    total: usize,
    stride: usize,
    front_current: bool,
    front_offset: usize,
    back_offset: usize,
}

impl SplitTriangle {
    /// Allocates the buffers needed to split triangles whose vertices have `stride` reals.
    pub fn new(stride: usize) -> Result<Self, SplitTriangleError> {
        if stride < 3 {
            return Err(SplitTriangleError::StrideTooSmall(stride));
        }

        Ok(SplitTriangle {
            front: vec![0.0; stride * 3 * 2],
            back: vec![0.0; stride * 3 * 2],
            edge_split: vec![0.0; stride],
            num_front: 0,
            num_back: 0,
            total: 0,
            stride,
            front_current: false,
            front_offset: 0,
            back_offset: 0,
        })
    }

    /// The number of reals per vertex.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The number of triangles in front of the plane (or on it).
    #[inline]
    pub fn num_front(&self) -> usize {
        self.num_front
    }

    /// The number of triangles behind the plane.
    #[inline]
    pub fn num_back(&self) -> usize {
        self.num_back
    }

    /// The total number of triangles resulting from the split: `1` if the triangle was not
    /// cut, `3` otherwise.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// The flat vertices of the triangles in front of the plane.
    #[inline]
    pub fn front(&self) -> &[Real] {
        &self.front[..self.num_front * 3 * self.stride]
    }

    /// The flat vertices of the triangles behind the plane.
    #[inline]
    pub fn back(&self) -> &[Real] {
        &self.back[..self.num_back * 3 * self.stride]
    }

    /// The front triangles as position triplets.
    pub fn front_triangles(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        triangle_positions(self.front(), self.stride)
    }

    /// The back triangles as position triplets.
    pub fn back_triangles(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        triangle_positions(self.back(), self.stride)
    }

    fn reset(&mut self) {
        self.front_current = false;
        self.front_offset = 0;
        self.back_offset = 0;
        self.num_front = 0;
        self.num_back = 0;
        self.total = 0;
    }

    fn push_vertex(&mut self, vertex: &[Real]) {
        let stride = self.stride;

        if self.front_current {
            self.front[self.front_offset..self.front_offset + stride].copy_from_slice(vertex);
            self.front_offset += stride;
        } else {
            self.back[self.back_offset..self.back_offset + stride].copy_from_slice(vertex);
            self.back_offset += stride;
        }
    }

    /// Computes the vertex where the edge `start -> end` crosses the plane.
    fn split_edge(&mut self, start: &[Real], end: &[Real], plane: &Plane) {
        let a = Point3::new(start[0], start[1], start[2]);
        let b = Point3::new(end[0], end[1], end[2]);

        let (t, pt) = intersect_line_plane(&a, &b, plane).unwrap_or_else(|| {
            log::debug!("A crossing triangle edge is parallel to the splitting plane.");
            (0.0, a)
        });

        self.edge_split[..3].copy_from_slice(pt.coords.as_slice());

        for i in 3..self.stride {
            self.edge_split[i] = start[i] + t * (end[i] - start[i]);
        }
    }

    /// Turns the quad of the side holding two triangles into a fan of two triangles.
    fn triangulate_quad(&mut self) {
        let stride = self.stride;
        let quad = if self.num_front == 2 {
            &mut self.front
        } else {
            &mut self.back
        };

        // [v0, v1, v2, v3] becomes [v0, v1, v2, v2, v3, v0].
        quad.copy_within(stride * 2..stride * 4, stride * 3);
        quad.copy_within(0..stride, stride * 5);
    }
}

fn triangle_positions(
    vertices: &[Real],
    stride: usize,
) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
    vertices.chunks_exact(stride * 3).map(move |tri| {
        [0, 1, 2].map(|i| {
            let v = &tri[i * stride..];
            Point3::new(v[0], v[1], v[2])
        })
    })
}

/// Splits a flat triangle by a plane.
///
/// Vertices on the plane count as being in front of it. If the triangle lies entirely on
/// one side, it is copied as-is to that side. Otherwise it is cut into three triangles: one
/// on the side holding a single vertex, and two on the other side. The output triangles
/// keep the winding of the input.
///
/// # Panics
///
/// Panics if `triangle` does not hold exactly three vertices of `split.stride()` reals.
pub fn split_triangle(triangle: &[Real], plane: &Plane, split: &mut SplitTriangle) {
    let stride = split.stride;

    assert_eq!(
        triangle.len(),
        stride * 3,
        "the triangle must have 3 vertices of stride {}",
        stride
    );

    let vertex = |i: usize| &triangle[i * stride..(i + 1) * stride];
    let is_back = |i: usize| {
        let v = vertex(i);
        plane.test_point(&Point3::new(v[0], v[1], v[2])) == PlaneSide::Back
    };
    let back = [is_back(0), is_back(1), is_back(2)];

    split.reset();

    if back[0] == back[1] && back[1] == back[2] {
        split.total = 1;

        if back[0] {
            split.num_back = 1;
            split.back[..triangle.len()].copy_from_slice(triangle);
        } else {
            split.num_front = 1;
            split.front[..triangle.len()].copy_from_slice(triangle);
        }

        return;
    }

    split.total = 3;
    split.num_front = back.iter().filter(|b| !**b).count();
    split.num_back = split.total - split.num_front;
    split.front_current = !back[0];

    for (first, second) in [(0, 1), (1, 2), (2, 0)] {
        split.push_vertex(vertex(first));

        if back[first] != back[second] {
            split.split_edge(vertex(first), vertex(second), plane);

            let edge_split = core::mem::take(&mut split.edge_split);
            split.push_vertex(&edge_split);
            split.front_current = !split.front_current;
            split.push_vertex(&edge_split);
            split.edge_split = edge_split;
        }
    }

    split.triangulate_quad();
}
