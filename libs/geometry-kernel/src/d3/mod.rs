//! # 3D Geometry
//!
//! Primitives, pairwise queries and transformations in 3D Euclidean space.
//!
//! ## Example
//!
//! ```rust
//! use geometry_kernel::d3::{IntersectionKind, Line, Object, Plane, Point};
//! use glam::DVec3;
//!
//! let line = Object::from(Line::new(Point::origin(), DVec3::X).unwrap());
//! let plane = Object::from(Plane::new(Point::new(5.0, 0.0, 0.0), DVec3::X).unwrap());
//!
//! let intersection = line.intersection_with(&plane).unwrap();
//!
//! assert_eq!(intersection.kind(), IntersectionKind::Point);
//! assert_eq!(*intersection.downcast::<Point>().unwrap(), Point::new(5.0, 0.0, 0.0));
//! ```

pub mod rotation;

mod composite;
mod cone;
mod cuboid;
mod ellipsoid;
mod intersection;
mod lateral_surface;
mod line;
mod line_string;
mod object;
mod plane;
mod point;
mod point_set;
mod polygon;
mod pyramid;
mod quadric;
mod ray;
mod segment;
mod sphere;
mod transformation;

pub use composite::Composite;
pub use cone::Cone;
pub use cuboid::Cuboid;
pub use ellipsoid::Ellipsoid;
pub use intersection::{Intersection, IntersectionKind};
pub use line::Line;
pub use line_string::LineString;
pub use object::{Object, ObjectKind, Primitive};
pub use plane::Plane;
pub use point::Point;
pub use point_set::PointSet;
pub use polygon::Polygon;
pub use pyramid::Pyramid;
pub use ray::Ray;
pub use segment::Segment;
pub use sphere::Sphere;
pub use transformation::{Transformable, Transformation, TransformationType};
