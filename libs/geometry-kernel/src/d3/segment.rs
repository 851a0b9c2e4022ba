//! Bounded 3D segment.

use std::fmt;

use config::constants::EPSILON;
use glam::DVec3;

use crate::d3::line::Line;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Segment between two points.
///
/// A segment whose endpoints coincide is degenerate; intersection queries
/// then treat it as its single point.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    first: Point,
    second: Point,
}

impl Segment {
    /// Creates a segment.
    pub const fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self::new(Point::undefined(), Point::undefined())
    }

    /// Returns true if both endpoints are defined.
    pub fn is_defined(&self) -> bool {
        self.first.is_defined() && self.second.is_defined()
    }

    /// Returns true if the endpoints coincide.
    pub fn is_degenerate(&self) -> Result<bool> {
        ensure_defined(self.is_defined(), "Segment")?;

        Ok(self.first == self.second)
    }

    /// First endpoint.
    pub fn first_point(&self) -> Point {
        self.first
    }

    /// Second endpoint.
    pub fn second_point(&self) -> Point {
        self.second
    }

    /// Midpoint.
    pub fn center(&self) -> Result<Point> {
        ensure_defined(self.is_defined(), "Segment")?;

        Ok(self.first + (self.second - self.first) / 2.0)
    }

    /// Unit direction from first to second endpoint.
    pub fn direction(&self) -> Result<DVec3> {
        if self.is_degenerate()? {
            return Err(GeometryError::domain("degenerate segment has no direction"));
        }

        Ok((self.second - self.first).normalize())
    }

    /// Distance between the endpoints.
    pub fn length(&self) -> Result<f64> {
        ensure_defined(self.is_defined(), "Segment")?;

        Ok((self.second - self.first).length())
    }

    /// Supporting line.
    pub fn to_line(&self) -> Result<Line> {
        Line::new(self.first, self.direction()?)
    }

    /// Distance from a point to the closest point of the segment.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Segment")?;
        ensure_defined(point.is_defined(), "Point")?;

        point.distance_to(&self.closest_point_to(point))
    }

    /// Returns true if the point lies on the segment.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies on the segment.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set.iter() {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if the point lies on the segment.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.contains_point(point)
    }

    /// `first + t (second - first)`.
    pub(crate) fn point_at(&self, parameter: f64) -> Point {
        self.first + (self.second - self.first) * parameter
    }

    fn closest_point_to(&self, point: &Point) -> Point {
        let span = self.second - self.first;
        let length_squared = span.length_squared();

        if length_squared == 0.0 {
            return self.first;
        }

        let parameter = ((*point - self.first).dot(span) / length_squared).clamp(0.0, 1.0);

        self.point_at(parameter)
    }
}

impl PartialEq for Segment {
    /// Same endpoints in either order.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }

        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Transformable for Segment {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Segment")?;

        self.first = transformation.apply_to_point(&self.first)?;
        self.second = transformation.apply_to_point(&self.second)?;

        Ok(())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(f, "Segment {{ {} - {} }}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_accessors() {
        let segment = Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 4.0));

        assert_eq!(segment.center().unwrap(), Point::new(0.0, 0.0, 2.0));
        assert_eq!(segment.direction().unwrap(), DVec3::Z);
        assert_abs_diff_eq!(segment.length().unwrap(), 4.0);
        assert!(!segment.is_degenerate().unwrap());
    }

    #[test]
    fn test_degenerate() {
        let point = Point::new(1.0, 2.0, 3.0);
        let segment = Segment::new(point, point);

        assert!(segment.is_degenerate().unwrap());
        assert!(segment.direction().is_err());
        assert!(segment.contains_point(&point).unwrap());
        assert!(Segment::undefined().is_degenerate().is_err());
    }

    #[test]
    fn test_distance_clamps_to_endpoints() {
        let segment = Segment::new(Point::origin(), Point::new(2.0, 0.0, 0.0));

        assert_abs_diff_eq!(segment.distance_to(&Point::new(1.0, 3.0, 0.0)).unwrap(), 3.0);
        assert_abs_diff_eq!(segment.distance_to(&Point::new(5.0, 4.0, 0.0)).unwrap(), 5.0);
        assert!(!segment.contains_point(&Point::new(3.0, 0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_equality_ignores_endpoint_order() {
        let a = Point::new(1.0, 0.0, 0.0);
        let b = Point::new(0.0, 1.0, 0.0);

        assert_eq!(Segment::new(a, b), Segment::new(b, a));
    }
}
