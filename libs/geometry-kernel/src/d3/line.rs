//! Infinite 3D line.

use std::fmt;

use config::constants::EPSILON;
use glam::DVec3;

use crate::d3::intersection::Intersection;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Line through `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    origin: Point,
    direction: DVec3,
}

impl Line {
    /// Creates a line. The direction is normalized and must be nonzero.
    pub fn new(origin: Point, direction: DVec3) -> Result<Self> {
        if !origin.is_defined() || direction.is_nan() {
            return Ok(Self::undefined());
        }

        Ok(Self {
            origin,
            direction: unit_direction(direction, "line")?,
        })
    }

    /// Line through two distinct points.
    pub fn points(first: &Point, second: &Point) -> Result<Self> {
        ensure_defined(first.is_defined() && second.is_defined(), "Point")?;

        Self::new(*first, *second - *first)
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            origin: Point::undefined(),
            direction: DVec3::NAN,
        }
    }

    /// Returns true if origin and direction are defined.
    pub fn is_defined(&self) -> bool {
        self.origin.is_defined() && !self.direction.is_nan()
    }

    /// Point the line was built from.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Perpendicular distance to a point.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Line")?;
        ensure_defined(point.is_defined(), "Point")?;

        Ok((*point - self.origin).cross(self.direction).length())
    }

    /// Returns true if the point lies on the line.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies on the line.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set.iter() {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if the point lies on the line.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.contains_point(point)
    }

    /// Returns true if the lines share at least one point.
    pub fn intersects_line(&self, other: &Line) -> Result<bool> {
        Ok(!self.intersection_with_line(other)?.is_empty())
    }

    /// Intersection with another line: a Point, the Line itself when the two
    /// coincide, or Empty for parallel and skew lines.
    pub fn intersection_with_line(&self, other: &Line) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Line")?;
        ensure_defined(other.is_defined(), "Line")?;

        let normal = self.direction.cross(other.direction);
        let offset = other.origin - self.origin;

        if normal.length_squared() < EPSILON * EPSILON {
            return if self.contains_point(&other.origin)? {
                Ok(Intersection::line(*self))
            } else {
                Ok(Intersection::empty())
            };
        }

        // Skew lines do not share a plane.
        if offset.dot(normal).abs() > EPSILON * normal.length() {
            return Ok(Intersection::empty());
        }

        let parameter = offset.cross(other.direction).dot(normal) / normal.length_squared();

        Ok(Intersection::point(self.origin + self.direction * parameter))
    }

    /// Point at `parameter` along the unit direction.
    pub(crate) fn point_at(&self, parameter: f64) -> Point {
        self.origin + self.direction * parameter
    }
}

impl PartialEq for Line {
    /// Same set of points, regardless of origin and orientation.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }

        self.direction.cross(other.direction).length() <= EPSILON
            && self.contains_point(&other.origin).unwrap_or(false)
    }
}

impl Transformable for Line {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Line")?;

        let origin = transformation.apply_to_point(&self.origin)?;
        let direction = transformation.apply_to_vector(self.direction)?;

        *self = Self::new(origin, direction)?;

        Ok(())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Line {{ origin: {}, direction: [{}, {}, {}] }}",
            self.origin, self.direction.x, self.direction.y, self.direction.z
        )
    }
}

/// Normalizes a direction, rejecting zero vectors.
pub(crate) fn unit_direction(direction: DVec3, what: &str) -> Result<DVec3> {
    let length = direction.length();

    if length < EPSILON {
        return Err(GeometryError::domain(format!("{what} direction must be nonzero")));
    }

    Ok(direction / length)
}
