//! Infinite 2D line.

use std::fmt;

use config::constants::{approx_zero, EPSILON};
use glam::DVec2;

use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Line through `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    origin: Point,
    direction: DVec2,
}

impl Line {
    /// Creates a line. The direction is normalized and must be nonzero.
    pub fn new(origin: Point, direction: DVec2) -> Result<Self> {
        if !origin.is_defined() || direction.is_nan() {
            return Ok(Self::undefined());
        }

        if direction.length() < EPSILON {
            return Err(GeometryError::domain("line direction must be nonzero"));
        }

        Ok(Self {
            origin,
            direction: direction.normalize(),
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
            direction: DVec2::NAN,
        }
    }

    /// Returns true if origin and direction are defined.
    pub fn is_defined(&self) -> bool {
        self.origin.is_defined() && !self.direction.is_nan()
    }

    /// Origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> DVec2 {
        self.direction
    }

    /// Perpendicular distance from a point.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Line")?;
        ensure_defined(point.is_defined(), "Point")?;

        Ok(self.direction.perp_dot(*point - self.origin).abs())
    }

    /// Returns true if the point lies on the line.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies on the line.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set {
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
}

impl PartialEq for Line {
    /// Same set of points.
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && approx_zero(self.direction.perp_dot(other.direction))
            && approx_zero(self.direction.perp_dot(other.origin - self.origin))
    }
}

impl Transformable for Line {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Line")?;

        *self = Self::new(
            transformation.apply_to_point(&self.origin)?,
            transformation.apply_to_vector(self.direction)?,
        )?;

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
            "Line {{ origin: {}, direction: [{}, {}] }}",
            self.origin, self.direction.x, self.direction.y
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_distance_and_contains() {
        let line = Line::new(Point::new(0.0, 1.0), DVec2::new(2.0, 0.0)).unwrap();

        assert_abs_diff_eq!(line.distance_to(&Point::new(7.0, 4.0)).unwrap(), 3.0);
        assert!(line.contains_point(&Point::new(-3.0, 1.0)).unwrap());
        assert!(Line::new(Point::origin(), DVec2::ZERO).is_err());
    }

    #[test]
    fn test_equality_is_geometric() {
        let a = Line::points(&Point::new(0.0, 0.0), &Point::new(1.0, 1.0)).unwrap();
        let b = Line::new(Point::new(5.0, 5.0), DVec2::new(-1.0, -1.0)).unwrap();

        assert_eq!(a, b);
    }
}
