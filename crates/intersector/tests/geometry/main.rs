#[macro_use]
extern crate approx;

mod idempotence;
mod polygon_overlap;
mod ray_cast;
mod segments;
mod split_triangle;
