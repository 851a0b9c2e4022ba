//! Half-line starting at an origin.

use std::fmt;

use config::constants::EPSILON;
use glam::DVec3;

use crate::d3::line::{unit_direction, Line};
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, Result};

/// Ray from `origin` along a unit `direction`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    origin: Point,
    direction: DVec3,
}

impl Ray {
    /// Creates a ray. The direction is normalized and must be nonzero.
    pub fn new(origin: Point, direction: DVec3) -> Result<Self> {
        if !origin.is_defined() || direction.is_nan() {
            return Ok(Self::undefined());
        }

        Ok(Self {
            origin,
            direction: unit_direction(direction, "ray")?,
        })
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

    /// Start point.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unit direction.
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Supporting line.
    pub fn to_line(&self) -> Result<Line> {
        ensure_defined(self.is_defined(), "Ray")?;

        Line::new(self.origin, self.direction)
    }

    /// Distance to a point; points behind the origin measure to the origin.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Ray")?;
        ensure_defined(point.is_defined(), "Point")?;

        let offset = *point - self.origin;
        let along = offset.dot(self.direction);

        if along <= 0.0 {
            return Ok(offset.length());
        }

        Ok(offset.cross(self.direction).length())
    }

    /// Returns true if the point lies on the ray.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies on the ray.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set.iter() {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if the point lies on the ray.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.contains_point(point)
    }

    /// Point at `parameter` along the unit direction.
    pub(crate) fn point_at(&self, parameter: f64) -> Point {
        self.origin + self.direction * parameter
    }
}

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.origin == other.origin
            && (self.direction - other.direction).length() <= EPSILON
    }
}

impl Transformable for Ray {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Ray")?;

        let origin = transformation.apply_to_point(&self.origin)?;
        let direction = transformation.apply_to_vector(self.direction)?;

        *self = Self::new(origin, direction)?;

        Ok(())
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Ray {{ origin: {}, direction: [{}, {}, {}] }}",
            self.origin, self.direction.x, self.direction.y, self.direction.z
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(Point::origin(), DVec3::new(0.0, 0.0, -4.0)).unwrap();
        assert_eq!(ray.direction(), -DVec3::Z);
        assert!(Ray::new(Point::origin(), DVec3::ZERO).is_err());
    }

    #[test]
    fn test_contains_only_ahead() {
        let ray = Ray::new(Point::new(1.0, 0.0, 0.0), DVec3::X).unwrap();

        assert!(ray.contains_point(&Point::new(1.0, 0.0, 0.0)).unwrap());
        assert!(ray.contains_point(&Point::new(10.0, 0.0, 0.0)).unwrap());
        assert!(!ray.contains_point(&Point::new(0.0, 0.0, 0.0)).unwrap());
    }

    #[test]
    fn test_distance_behind_origin() {
        let ray = Ray::new(Point::origin(), DVec3::X).unwrap();

        assert_abs_diff_eq!(ray.distance_to(&Point::new(-3.0, 4.0, 0.0)).unwrap(), 5.0);
        assert_abs_diff_eq!(ray.distance_to(&Point::new(3.0, 4.0, 0.0)).unwrap(), 4.0);
    }

    #[test]
    fn test_orientation_matters_for_equality() {
        let forward = Ray::new(Point::origin(), DVec3::X).unwrap();
        let backward = Ray::new(Point::origin(), -DVec3::X).unwrap();

        assert_ne!(forward, backward);
        assert_eq!(forward.to_line().unwrap(), backward.to_line().unwrap());
    }
}
