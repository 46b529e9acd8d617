pub use self::clip_polygon_polygon::intersect_polygons;

mod clip_polygon_polygon;
