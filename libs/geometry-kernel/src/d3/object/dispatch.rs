//! # Pairwise Dispatch
//!
//! Routes `intersects`, `contains` and `intersection_with` on two [`Object`]s
//! to the primitive method implementing that pair.
//!
//! ## Resolution order
//!
//! 1. Both operands must be defined (`Undefined` names the first offender)
//! 2. A [`Composite`] operand delegates to its members
//! 3. The ordered pair is looked up
//! 4. For the symmetric queries, the swapped pair is looked up
//! 5. Otherwise `NotImplemented`
//!
//! Cone and Pyramid pairs run at
//! [`DEFAULT_DISCRETIZATION_LEVEL`](config::constants::DEFAULT_DISCRETIZATION_LEVEL)
//! and report both near and far hits. Call the primitive methods directly to
//! pick another level.

use config::constants::DEFAULT_DISCRETIZATION_LEVEL;

use super::Object;
use crate::d3::intersection::Intersection;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::error::{ensure_defined, GeometryError, Result};

const INTERSECTS: &str = "intersects";
const CONTAINS: &str = "contains";
const INTERSECTION: &str = "intersection";

impl Object {
    /// Returns true if the two objects share at least one point.
    ///
    /// Symmetric: `a.intersects(&b) == b.intersects(&a)` for every supported
    /// pair.
    pub fn intersects(&self, other: &Object) -> Result<bool> {
        ensure_both_defined(self, other)?;
        log::trace!("{INTERSECTS}: {} / {}", self.kind(), other.kind());

        if let Object::Composite(composite) = self {
            return composite.intersects(other);
        }
        if let Object::Composite(composite) = other {
            return composite.intersects(self);
        }

        match intersects_ordered(self, other)? {
            Some(outcome) => Ok(outcome),
            None => intersects_ordered(other, self)?.ok_or_else(|| not_implemented(INTERSECTS, self, other)),
        }
    }

    /// Returns true if `other` lies entirely within `self`.
    ///
    /// Not symmetric, so no swapped lookup takes place.
    pub fn contains(&self, other: &Object) -> Result<bool> {
        ensure_both_defined(self, other)?;
        log::trace!("{CONTAINS}: {} / {}", self.kind(), other.kind());

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

        contains_ordered(self, other)?.ok_or_else(|| not_implemented(CONTAINS, self, other))
    }

    /// Computes the common part of the two objects.
    pub fn intersection_with(&self, other: &Object) -> Result<Intersection> {
        ensure_both_defined(self, other)?;
        log::trace!("{INTERSECTION}: {} / {}", self.kind(), other.kind());

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
            None => intersection_ordered(other, self)?.ok_or_else(|| not_implemented(INTERSECTION, self, other)),
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

/// Point as an intersection, if `hit`.
fn point_if(hit: bool, point: &Point) -> Intersection {
    if hit {
        Intersection::point(*point)
    } else {
        Intersection::empty()
    }
}

/// Points of the set passing `keep`, as an intersection.
fn points_where(point_set: &PointSet, mut keep: impl FnMut(&Point) -> Result<bool>) -> Result<Intersection> {
    let mut kept = Vec::new();
    for point in point_set {
        if keep(point)? {
            kept.push(*point);
        }
    }

    Ok(Intersection::from_points(kept))
}

fn intersects_ordered(first: &Object, second: &Object) -> Result<Option<bool>> {
    use Object as O;

    let outcome = match (first, second) {
        (O::Point(a), O::Point(b)) => a == b,
        (O::Point(point), O::PointSet(point_set)) => point_in_set(point, point_set),
        (O::PointSet(a), O::PointSet(b)) => a.iter().any(|point| point_in_set(point, b)),

        (O::Line(line), O::Point(point)) => line.intersects_point(point)?,
        (O::Ray(ray), O::Point(point)) => ray.intersects_point(point)?,
        (O::Segment(segment), O::Point(point)) => segment.intersects_point(point)?,
        (O::Line(a), O::Line(b)) => a.intersects_line(b)?,

        (O::Plane(plane), O::Point(point)) => plane.intersects_point(point)?,
        (O::Plane(plane), O::PointSet(point_set)) => plane.intersects_point_set(point_set)?,
        (O::Plane(plane), O::Line(line)) => plane.intersects_line(line)?,
        (O::Plane(plane), O::Ray(ray)) => plane.intersects_ray(ray)?,
        (O::Plane(plane), O::Segment(segment)) => plane.intersects_segment(segment)?,
        (O::Plane(a), O::Plane(b)) => a.intersects_plane(b)?,

        (O::Polygon(polygon), O::Point(point)) => polygon.contains_point(point)?,

        (O::Sphere(sphere), O::Point(point)) => sphere.intersects_point(point)?,
        (O::Sphere(sphere), O::PointSet(point_set)) => sphere.intersects_point_set(point_set)?,
        (O::Sphere(sphere), O::Line(line)) => sphere.intersects_line(line)?,
        (O::Sphere(sphere), O::Ray(ray)) => sphere.intersects_ray(ray)?,
        (O::Sphere(sphere), O::Segment(segment)) => sphere.intersects_segment(segment)?,
        (O::Sphere(sphere), O::Plane(plane)) => sphere.intersects_plane(plane)?,

        (O::Ellipsoid(ellipsoid), O::Point(point)) => ellipsoid.intersects_point(point)?,
        (O::Ellipsoid(ellipsoid), O::PointSet(point_set)) => ellipsoid.intersects_point_set(point_set)?,
        (O::Ellipsoid(ellipsoid), O::Line(line)) => ellipsoid.intersects_line(line)?,
        (O::Ellipsoid(ellipsoid), O::Ray(ray)) => ellipsoid.intersects_ray(ray)?,
        (O::Ellipsoid(ellipsoid), O::Segment(segment)) => ellipsoid.intersects_segment(segment)?,
        (O::Ellipsoid(ellipsoid), O::Plane(plane)) => ellipsoid.intersects_plane(plane)?,

        (O::Cuboid(cuboid), O::Point(point)) => cuboid.intersects_point(point)?,
        (O::Cuboid(cuboid), O::PointSet(point_set)) => cuboid.intersects_point_set(point_set)?,
        (O::Cuboid(cuboid), O::Line(line)) => cuboid.intersects_line(line)?,
        (O::Cuboid(cuboid), O::Ray(ray)) => cuboid.intersects_ray(ray)?,
        (O::Cuboid(cuboid), O::Segment(segment)) => cuboid.intersects_segment(segment)?,
        (O::Cuboid(a), O::Cuboid(b)) => a.intersects_cuboid(b)?,

        (O::Cone(cone), O::Sphere(sphere)) => cone.intersects_sphere(sphere, DEFAULT_DISCRETIZATION_LEVEL)?,
        (O::Cone(cone), O::Ellipsoid(ellipsoid)) => {
            cone.intersects_ellipsoid(ellipsoid, DEFAULT_DISCRETIZATION_LEVEL)?
        }
        (O::Pyramid(pyramid), O::Sphere(sphere)) => {
            pyramid.intersects_sphere(sphere, DEFAULT_DISCRETIZATION_LEVEL)?
        }
        (O::Pyramid(pyramid), O::Ellipsoid(ellipsoid)) => {
            pyramid.intersects_ellipsoid(ellipsoid, DEFAULT_DISCRETIZATION_LEVEL)?
        }

        _ => return Ok(None),
    };

    Ok(Some(outcome))
}

fn contains_ordered(first: &Object, second: &Object) -> Result<Option<bool>> {
    use Object as O;

    let outcome = match (first, second) {
        (O::Point(a), O::Point(b)) => a == b,
        (O::PointSet(point_set), O::Point(point)) => point_in_set(point, point_set),
        (O::PointSet(a), O::PointSet(b)) => b.iter().all(|point| point_in_set(point, a)),

        (O::Line(line), O::Point(point)) => line.contains_point(point)?,
        (O::Line(line), O::PointSet(point_set)) => line.contains_point_set(point_set)?,
        (O::Ray(ray), O::Point(point)) => ray.contains_point(point)?,
        (O::Ray(ray), O::PointSet(point_set)) => ray.contains_point_set(point_set)?,
        (O::Segment(segment), O::Point(point)) => segment.contains_point(point)?,
        (O::Segment(segment), O::PointSet(point_set)) => segment.contains_point_set(point_set)?,

        (O::Plane(plane), O::Point(point)) => plane.contains_point(point)?,
        (O::Plane(plane), O::PointSet(point_set)) => plane.contains_point_set(point_set)?,
        (O::Plane(plane), O::Line(line)) => plane.contains_line(line)?,
        (O::Plane(plane), O::Ray(ray)) => plane.contains_ray(ray)?,
        (O::Plane(plane), O::Segment(segment)) => plane.contains_segment(segment)?,

        (O::Polygon(polygon), O::Point(point)) => polygon.contains_point(point)?,

        (O::Sphere(sphere), O::Point(point)) => sphere.contains_point(point)?,
        (O::Sphere(sphere), O::PointSet(point_set)) => sphere.contains_point_set(point_set)?,
        (O::Sphere(sphere), O::Segment(segment)) => sphere.contains_segment(segment)?,

        (O::Ellipsoid(ellipsoid), O::Point(point)) => ellipsoid.contains_point(point)?,
        (O::Ellipsoid(ellipsoid), O::PointSet(point_set)) => ellipsoid.contains_point_set(point_set)?,
        (O::Ellipsoid(ellipsoid), O::Segment(segment)) => ellipsoid.contains_segment(segment)?,

        (O::Cuboid(cuboid), O::Point(point)) => cuboid.contains_point(point)?,
        (O::Cuboid(cuboid), O::PointSet(point_set)) => cuboid.contains_point_set(point_set)?,
        (O::Cuboid(cuboid), O::Segment(segment)) => cuboid.contains_segment(segment)?,
        (O::Cuboid(cuboid), O::LineString(line_string)) => cuboid.contains_line_string(line_string)?,
        (O::Cuboid(a), O::Cuboid(b)) => a.contains_cuboid(b)?,

        (O::Cone(cone), O::Point(point)) => cone.contains_point(point)?,
        (O::Cone(cone), O::PointSet(point_set)) => cone.contains_point_set(point_set)?,
        (O::Cone(cone), O::Segment(segment)) => cone.contains_segment(segment)?,
        (O::Cone(cone), O::Ray(ray)) => cone.contains_ray(ray)?,
        (O::Cone(cone), O::Sphere(sphere)) => cone.contains_sphere(sphere)?,

        (O::Pyramid(pyramid), O::Point(point)) => pyramid.contains_point(point)?,
        (O::Pyramid(pyramid), O::PointSet(point_set)) => pyramid.contains_point_set(point_set)?,
        (O::Pyramid(pyramid), O::Segment(segment)) => pyramid.contains_segment(segment)?,

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
        (O::Ray(ray), O::Point(point)) => point_if(ray.intersects_point(point)?, point),
        (O::Segment(segment), O::Point(point)) => point_if(segment.intersects_point(point)?, point),
        (O::Line(a), O::Line(b)) => a.intersection_with_line(b)?,

        (O::Plane(plane), O::Point(point)) => plane.intersection_with_point(point)?,
        (O::Plane(plane), O::PointSet(point_set)) => plane.intersection_with_point_set(point_set)?,
        (O::Plane(plane), O::Line(line)) => plane.intersection_with_line(line)?,
        (O::Plane(plane), O::Ray(ray)) => plane.intersection_with_ray(ray)?,
        (O::Plane(plane), O::Segment(segment)) => plane.intersection_with_segment(segment)?,
        (O::Plane(a), O::Plane(b)) => a.intersection_with_plane(b)?,

        (O::Sphere(sphere), O::Point(point)) => point_if(sphere.intersects_point(point)?, point),
        (O::Sphere(sphere), O::PointSet(point_set)) => sphere.intersection_with_point_set(point_set)?,
        (O::Sphere(sphere), O::Line(line)) => sphere.intersection_with_line(line)?,
        (O::Sphere(sphere), O::Ray(ray)) => sphere.intersection_with_ray(ray, false)?,
        (O::Sphere(sphere), O::Segment(segment)) => sphere.intersection_with_segment(segment)?,

        (O::Ellipsoid(ellipsoid), O::Point(point)) => ellipsoid.intersection_with_point(point)?,
        (O::Ellipsoid(ellipsoid), O::PointSet(point_set)) => ellipsoid.intersection_with_point_set(point_set)?,
        (O::Ellipsoid(ellipsoid), O::Line(line)) => ellipsoid.intersection_with_line(line)?,
        (O::Ellipsoid(ellipsoid), O::Ray(ray)) => ellipsoid.intersection_with_ray(ray, false)?,
        (O::Ellipsoid(ellipsoid), O::Segment(segment)) => ellipsoid.intersection_with_segment(segment)?,

        (O::Cuboid(cuboid), O::Point(point)) => point_if(cuboid.contains_point(point)?, point),
        (O::Cuboid(cuboid), O::PointSet(point_set)) => points_where(point_set, |point| cuboid.contains_point(point))?,
        (O::Cuboid(cuboid), O::Line(line)) => cuboid.intersection_with_line(line)?,
        (O::Cuboid(cuboid), O::Ray(ray)) => cuboid.intersection_with_ray(ray)?,
        (O::Cuboid(cuboid), O::Segment(segment)) => cuboid.intersection_with_segment(segment)?,

        (O::Polygon(polygon), O::Point(point)) => point_if(polygon.contains_point(point)?, point),

        (O::Cone(cone), O::Sphere(sphere)) => {
            cone.intersection_with_sphere(sphere, false, DEFAULT_DISCRETIZATION_LEVEL)?
        }
        (O::Cone(cone), O::Ellipsoid(ellipsoid)) => {
            cone.intersection_with_ellipsoid(ellipsoid, false, DEFAULT_DISCRETIZATION_LEVEL)?
        }
        (O::Pyramid(pyramid), O::Sphere(sphere)) => {
            pyramid.intersection_with_sphere(sphere, false, DEFAULT_DISCRETIZATION_LEVEL)?
        }
        (O::Pyramid(pyramid), O::Ellipsoid(ellipsoid)) => {
            pyramid.intersection_with_ellipsoid(ellipsoid, false, DEFAULT_DISCRETIZATION_LEVEL)?
        }

        _ => return Ok(None),
    };

    Ok(Some(intersection))
}
