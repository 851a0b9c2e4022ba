//! # 3D Object
//!
//! Closed sum type over every 3D primitive. [`Object`] gives heterogeneous
//! collections (see [`Composite`]) and pairwise queries a single entry
//! point, while each primitive stays a plain value type.
//!
//! ## Type checks
//!
//! ```rust
//! use geometry_kernel::d3::{Object, Point, Sphere};
//!
//! let object = Object::from(Sphere::unit(Point::origin()));
//!
//! assert!(object.is::<Sphere>());
//! assert!(object.downcast::<Point>().is_err());
//! ```
//!
//! Pairwise `intersects`, `contains` and `intersection_with` are routed in
//! the `dispatch` submodule.

mod dispatch;

use std::fmt;

use crate::d3::composite::Composite;
use crate::d3::cone::Cone;
use crate::d3::cuboid::Cuboid;
use crate::d3::ellipsoid::Ellipsoid;
use crate::d3::line::Line;
use crate::d3::line_string::LineString;
use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::polygon::Polygon;
use crate::d3::pyramid::Pyramid;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::sphere::Sphere;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{GeometryError, Result};

/// A concrete type that can be wrapped in an [`Object`].
pub trait Primitive: Sized + Into<Object> {
    /// Tag of the matching [`Object`] variant.
    const KIND: ObjectKind;

    /// Borrows the value if `object` is this type.
    fn from_object(object: &Object) -> Option<&Self>;

    /// Takes the value if `object` is this type, handing the object back
    /// otherwise.
    fn from_object_owned(object: Object) -> std::result::Result<Self, Object>;
}

object_model! {
    "3D":
    /// Point
    Point,
    /// Set of unique points
    PointSet,
    /// Infinite line
    Line,
    /// Half-line
    Ray,
    /// Bounded segment
    Segment,
    /// Polyline
    LineString,
    /// Infinite plane
    Plane,
    /// Planar polygon
    Polygon,
    /// Oriented box
    Cuboid,
    /// Sphere
    Sphere,
    /// Ellipsoid
    Ellipsoid,
    /// Semi-infinite cone
    Cone,
    /// Semi-infinite pyramid
    Pyramid,
    /// Ordered collection of objects
    Composite,
}
