//! # Intersection
//!
//! Tagged result of an intersection query. The payload is always a
//! [`Composite`]; the tag tells the caller what shape it holds without
//! inspecting it.
//!
//! ## Kind derivation
//!
//! ```text
//! undefined composite  → Undefined
//! 0 objects            → Empty
//! 1 canonical object   → that object's kind
//! anything else        → Complex
//! ```

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::d3::composite::Composite;
use crate::d3::ellipsoid::Ellipsoid;
use crate::d3::line::Line;
use crate::d3::object::{Object, ObjectKind, Primitive};
use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::sphere::Sphere;
use crate::error::{GeometryError, Result};

/// Shape class of an [`Intersection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntersectionKind {
    /// Computed from undefined input
    Undefined,
    /// No common point
    Empty,
    /// Single point
    Point,
    /// Several isolated points
    PointSet,
    /// Infinite line
    Line,
    /// Half-line
    Ray,
    /// Bounded straight piece
    Segment,
    /// Whole plane
    Plane,
    /// Whole sphere
    Sphere,
    /// Whole ellipsoid
    Ellipsoid,
    /// Anything a single primitive cannot express
    Complex,
}

impl IntersectionKind {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Empty => "Empty",
            Self::Point => "Point",
            Self::PointSet => "PointSet",
            Self::Line => "Line",
            Self::Ray => "Ray",
            Self::Segment => "Segment",
            Self::Plane => "Plane",
            Self::Sphere => "Sphere",
            Self::Ellipsoid => "Ellipsoid",
            Self::Complex => "Complex",
        }
    }

    /// Kind of a single-object intersection; `None` for object kinds that are
    /// not canonical intersection shapes.
    fn of_object(kind: ObjectKind) -> Option<Self> {
        match kind {
            ObjectKind::Point => Some(Self::Point),
            ObjectKind::PointSet => Some(Self::PointSet),
            ObjectKind::Line => Some(Self::Line),
            ObjectKind::Ray => Some(Self::Ray),
            ObjectKind::Segment => Some(Self::Segment),
            ObjectKind::Plane => Some(Self::Plane),
            ObjectKind::Sphere => Some(Self::Sphere),
            ObjectKind::Ellipsoid => Some(Self::Ellipsoid),
            _ => None,
        }
    }
}

impl fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`Object::intersection_with`] and the per-pair algorithms.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    kind: IntersectionKind,
    composite: Composite,
}

impl Intersection {
    /// Result of a query on undefined input.
    pub fn undefined() -> Self {
        Self {
            kind: IntersectionKind::Undefined,
            composite: Composite::undefined(),
        }
    }

    /// No common point.
    pub fn empty() -> Self {
        Self {
            kind: IntersectionKind::Empty,
            composite: Composite::empty(),
        }
    }

    /// Single point.
    pub fn point(point: Point) -> Self {
        Self::from_composite(Composite::new(point))
    }

    /// Several points.
    pub fn point_set(point_set: PointSet) -> Self {
        Self::from_composite(Composite::new(point_set))
    }

    /// Infinite line.
    pub fn line(line: Line) -> Self {
        Self::from_composite(Composite::new(line))
    }

    /// Half-line.
    pub fn ray(ray: Ray) -> Self {
        Self::from_composite(Composite::new(ray))
    }

    /// Segment.
    pub fn segment(segment: Segment) -> Self {
        Self::from_composite(Composite::new(segment))
    }

    /// Plane.
    pub fn plane(plane: Plane) -> Self {
        Self::from_composite(Composite::new(plane))
    }

    /// Sphere.
    pub fn sphere(sphere: Sphere) -> Self {
        Self::from_composite(Composite::new(sphere))
    }

    /// Ellipsoid.
    pub fn ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self::from_composite(Composite::new(ellipsoid))
    }

    /// Empty, Point or PointSet depending on how many distinct points are
    /// given.
    pub fn from_points(points: Vec<Point>) -> Self {
        let point_set = PointSet::new(points);

        match point_set.points() {
            [] => Self::empty(),
            [point] => Self::point(*point),
            _ => Self::point_set(point_set),
        }
    }

    /// Wraps a composite, deriving the kind from its content.
    pub fn from_composite(composite: Composite) -> Self {
        let kind = if !composite.is_defined() {
            IntersectionKind::Undefined
        } else {
            match composite.objects() {
                [] => IntersectionKind::Empty,
                [object] => IntersectionKind::of_object(object.kind()).unwrap_or(IntersectionKind::Complex),
                _ => IntersectionKind::Complex,
            }
        };

        Self { kind, composite }
    }

    /// Returns true unless computed from undefined input.
    pub fn is_defined(&self) -> bool {
        self.kind != IntersectionKind::Undefined && self.composite.is_defined()
    }

    /// Returns true if there is no common point.
    pub fn is_empty(&self) -> bool {
        self.kind == IntersectionKind::Empty
    }

    /// Returns true if the result needs several objects.
    pub fn is_complex(&self) -> bool {
        self.kind == IntersectionKind::Complex
    }

    /// Shape class.
    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Objects making up the result.
    pub fn composite(&self) -> &Composite {
        &self.composite
    }

    /// Takes the objects making up the result.
    pub fn into_composite(self) -> Composite {
        self.composite
    }

    /// Returns true if the result is a single `T`.
    pub fn is<T: Primitive>(&self) -> bool {
        matches!(self.composite.objects(), [object] if object.is::<T>())
    }

    /// The single `T` making up the result.
    pub fn downcast<T: Primitive>(&self) -> Result<&T> {
        match self.composite.objects() {
            [object] => object.downcast::<T>(),
            _ => Err(GeometryError::type_mismatch(T::KIND.name(), self.kind.name())),
        }
    }
}

impl Add for Intersection {
    type Output = Intersection;

    /// Concatenates both results and re-derives the kind.
    fn add(self, other: Intersection) -> Intersection {
        Intersection::from_composite(self.composite + other.composite)
    }
}

impl AddAssign for Intersection {
    fn add_assign(&mut self, other: Intersection) {
        let composite = std::mem::take(&mut self.composite);
        *self = Intersection::from_composite(composite + other.composite);
    }
}

impl From<Object> for Intersection {
    fn from(object: Object) -> Self {
        Self::from_composite(Composite::new(object))
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intersection ({}): {}", self.kind, self.composite)
    }
}
