//! # Planar Object
//!
//! Closed sum type over the 2D primitives, with the pairwise queries routed
//! to the primitive implementing each pair. Resolution follows the 3D
//! object: defined operands first, then composite delegation, then the
//! ordered pair, then the swapped pair for the symmetric queries.

use std::fmt;

use crate::d2::composite::Composite;
use crate::d2::intersection::Intersection;
use crate::d2::line::Line;
use crate::d2::line_string::LineString;
use crate::d2::multi_polygon::MultiPolygon;
use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::polygon::Polygon;
use crate::d2::segment::Segment;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// A concrete planar type that can be wrapped in an [`Object`].
pub trait Primitive: Sized + Into<Object> {
    /// Tag of the matching [`Object`] variant.
    const KIND: ObjectKind;

    /// Borrows the value if `object` is this type.
    fn from_object(object: &Object) -> Option<&Self>;

    /// Takes the value if `object` is this type.
    fn from_object_owned(object: Object) -> std::result::Result<Self, Object>;
}

object_model! {
    "2D":
    /// Point
    Point,
    /// Set of unique points
    PointSet,
    /// Infinite line
    Line,
    /// Bounded segment
    Segment,
    /// Polyline
    LineString,
    /// Polygon with holes
    Polygon,
    /// Several polygons
    MultiPolygon,
    /// Ordered collection of objects
    Composite,
}

impl Object {
    /// Returns true if the two objects share at least one point.
    pub fn intersects(&self, other: &Object) -> Result<bool> {
        ensure_both_defined(self, other)?;
        log::trace!("intersects: {} / {}", self.kind(), other.kind());

        if let Object::Composite(composite) = self {
            return composite.intersects(other);
        }
        if let Object::Composite(composite) = other {
            return composite.intersects(self);
        }

        match intersects_ordered(self, other)? {
            Some(outcome) => Ok(outcome),
            None => intersects_ordered(other, self)?.ok_or_else(|| not_implemented("intersects", self, other)),
        }
    }

    /// Returns true if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Object) -> Result<bool> {
        ensure_both_defined(self, other)?;
        log::trace!("contains: {} / {}", self.kind(), other.kind());

        if let Object::Composite(composite) = self {
            return composite.contains(other);
        }
        if let Object::Composite(composite) = other {
            if composite.is_empty() {
                return Ok(false);
            }
            for member in composite {
                if !self.contains(member)? {
                    return Ok(false);
                }
            }
            return Ok(true);
        }

        contains_ordered(self, other)?.ok_or_else(|| not_implemented("contains", self, other))
    }

    /// Computes the common part of the two objects.
    pub fn intersection_with(&self, other: &Object) -> Result<Intersection> {
        ensure_both_defined(self, other)?;
        log::trace!("intersection: {} / {}", self.kind(), other.kind());

        if let Object::Composite(composite) = self {
            return composite.intersection_with(other);
        }
        if let Object::Composite(composite) = other {
            let mut intersection = Intersection::empty();
            for member in composite {
                intersection += self.intersection_with(member)?;
            }
            return Ok(intersection);
        }

        match intersection_ordered(self, other)? {
            Some(intersection) => Ok(intersection),
            None => {
                intersection_ordered(other, self)?.ok_or_else(|| not_implemented("intersection", self, other))
            }
        }
    }
}

fn ensure_both_defined(first: &Object, second: &Object) -> Result<()> {
    ensure_defined(first.is_defined(), first.kind().name())?;
    ensure_defined(second.is_defined(), second.kind().name())
}

fn not_implemented(operation: &'static str, first: &Object, second: &Object) -> GeometryError {
    GeometryError::not_implemented(operation, first.kind().name(), second.kind().name())
}

fn point_in_set(point: &Point, point_set: &PointSet) -> bool {
    point_set.iter().any(|candidate| candidate == point)
}

fn point_if(hit: bool, point: &Point) -> Intersection {
    if hit {
        Intersection::point(*point)
    } else {
        Intersection::empty()
    }
}

fn intersects_ordered(first: &Object, second: &Object) -> Result<Option<bool>> {
    use Object as O;

    let outcome = match (first, second) {
        (O::Point(a), O::Point(b)) => a == b,
        (O::Point(point), O::PointSet(point_set)) => point_in_set(point, point_set),
        (O::Line(line), O::Point(point)) => line.intersects_point(point)?,
        (O::Segment(segment), O::Point(point)) => segment.contains_point(point)?,
        (O::Segment(a), O::Segment(b)) => a.intersects_segment(b)?,
        (O::Polygon(polygon), O::Point(point)) => polygon.contains_point(point)?,
        (O::Polygon(a), O::Polygon(b)) => a.intersects_polygon(b)?,
        (O::MultiPolygon(multi_polygon), O::Point(point)) => multi_polygon.contains_point(point)?,
        _ => return Ok(None),
    };

    Ok(Some(outcome))
}

fn contains_ordered(first: &Object, second: &Object) -> Result<Option<bool>> {
    use Object as O;

    let outcome = match (first, second) {
        (O::Point(a), O::Point(b)) => a == b,
        (O::PointSet(point_set), O::Point(point)) => point_in_set(point, point_set),
        (O::Line(line), O::Point(point)) => line.contains_point(point)?,
        (O::Line(line), O::PointSet(point_set)) => line.contains_point_set(point_set)?,
        (O::Segment(segment), O::Point(point)) => segment.contains_point(point)?,
        (O::Segment(segment), O::PointSet(point_set)) => segment.contains_point_set(point_set)?,
        (O::Polygon(polygon), O::Point(point)) => polygon.contains_point(point)?,
        (O::Polygon(polygon), O::PointSet(point_set)) => polygon.contains_point_set(point_set)?,
        (O::Polygon(polygon), O::Segment(segment)) => polygon.contains_segment(segment)?,
        (O::Polygon(polygon), O::LineString(line_string)) => polygon.contains_line_string(line_string)?,
        (O::MultiPolygon(multi_polygon), O::Point(point)) => multi_polygon.contains_point(point)?,
        (O::MultiPolygon(multi_polygon), O::PointSet(point_set)) => multi_polygon.contains_point_set(point_set)?,
        _ => return Ok(None),
    };

    Ok(Some(outcome))
}

fn intersection_ordered(first: &Object, second: &Object) -> Result<Option<Intersection>> {
    use Object as O;

    let intersection = match (first, second) {
        (O::Point(a), O::Point(b)) => point_if(a == b, a),
        (O::Point(point), O::PointSet(point_set)) => point_if(point_in_set(point, point_set), point),
        (O::Line(line), O::Point(point)) => point_if(line.intersects_point(point)?, point),
        (O::Segment(segment), O::Point(point)) => point_if(segment.contains_point(point)?, point),
        (O::Segment(a), O::Segment(b)) => a.intersection_with_segment(b)?,
        (O::Polygon(polygon), O::Point(point)) => point_if(polygon.contains_point(point)?, point),
        (O::Polygon(a), O::Polygon(b)) => a.intersection_with(b)?,
        (O::MultiPolygon(multi_polygon), O::Point(point)) => point_if(multi_polygon.contains_point(point)?, point),
        _ => return Ok(None),
    };

    Ok(Some(intersection))
}
