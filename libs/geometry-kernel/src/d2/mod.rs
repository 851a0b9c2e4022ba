//! # 2D Geometry
//!
//! Planar primitives and transformations. Polygon booleans and hulls are
//! delegated to `geo`.
//!
//! ```rust
//! use geometry_kernel::d2::{IntersectionKind, Point, Polygon};
//!
//! let square = |x: f64| {
//!     Polygon::simple(vec![
//!         Point::new(x, 0.0),
//!         Point::new(x + 1.0, 0.0),
//!         Point::new(x + 1.0, 1.0),
//!         Point::new(x, 1.0),
//!     ])
//!     .unwrap()
//! };
//!
//! let contact = square(0.0).intersection_with(&square(1.0)).unwrap();
//!
//! assert_eq!(contact.kind(), IntersectionKind::Segment);
//! ```

mod composite;
mod intersection;
mod line;
mod line_string;
mod multi_polygon;
mod object;
mod point;
mod point_set;
mod polygon;
mod segment;
mod transformation;

pub use composite::Composite;
pub use intersection::{Intersection, IntersectionKind};
pub use line::Line;
pub use line_string::LineString;
pub use multi_polygon::MultiPolygon;
pub use object::{Object, ObjectKind, Primitive};
pub use point::Point;
pub use point_set::PointSet;
pub use polygon::Polygon;
pub use segment::Segment;
pub use transformation::{Transformable, Transformation};
