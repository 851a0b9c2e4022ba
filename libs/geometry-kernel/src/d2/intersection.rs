//! # Planar Intersection
//!
//! Tagged result of a 2D intersection query, derived from its [`Composite`]
//! payload the same way as [`crate::d3::Intersection`].

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::d2::composite::Composite;
use crate::d2::line::Line;
use crate::d2::line_string::LineString;
use crate::d2::object::{Object, ObjectKind, Primitive};
use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::polygon::Polygon;
use crate::d2::segment::Segment;
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
    /// Bounded straight piece
    Segment,
    /// Polyline
    LineString,
    /// Area
    Polygon,
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
            Self::Segment => "Segment",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::Complex => "Complex",
        }
    }

    fn of_object(kind: ObjectKind) -> Option<Self> {
        match kind {
            ObjectKind::Point => Some(Self::Point),
            ObjectKind::PointSet => Some(Self::PointSet),
            ObjectKind::Line => Some(Self::Line),
            ObjectKind::Segment => Some(Self::Segment),
            ObjectKind::LineString => Some(Self::LineString),
            ObjectKind::Polygon => Some(Self::Polygon),
            ObjectKind::MultiPolygon | ObjectKind::Composite => None,
        }
    }
}

impl fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a planar intersection query.
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

    /// Segment.
    pub fn segment(segment: Segment) -> Self {
        Self::from_composite(Composite::new(segment))
    }

    /// Polyline.
    pub fn line_string(line_string: LineString) -> Self {
        Self::from_composite(Composite::new(line_string))
    }

    /// Area.
    pub fn polygon(polygon: Polygon) -> Self {
        Self::from_composite(Composite::new(polygon))
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
