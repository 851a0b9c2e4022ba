//! 3D point.

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec3;

use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Position in 3D space.
///
/// A point is a position, not a displacement: `Point - Point` yields a
/// [`DVec3`], and `Point + DVec3` yields a point.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coordinates: DVec3,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coordinates: DVec3::new(x, y, z),
        }
    }

    /// Point at the tip of `vector`.
    pub const fn from_vector(vector: DVec3) -> Self {
        Self {
            coordinates: vector,
        }
    }

    /// Undefined sentinel (NaN coordinates).
    pub const fn undefined() -> Self {
        Self::from_vector(DVec3::NAN)
    }

    /// `(0, 0, 0)`.
    pub const fn origin() -> Self {
        Self::from_vector(DVec3::ZERO)
    }

    /// Returns true unless a coordinate is NaN.
    pub fn is_defined(&self) -> bool {
        !self.coordinates.is_nan()
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.coordinates.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.coordinates.y
    }

    /// Z coordinate.
    pub fn z(&self) -> f64 {
        self.coordinates.z
    }

    /// Position vector from the origin.
    pub fn as_vector(&self) -> DVec3 {
        self.coordinates
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        ensure_defined(self.is_defined() && other.is_defined(), "Point")?;

        Ok(self.coordinates.distance(other.coordinates))
    }

    /// Returns true if the points are at most `tolerance` apart.
    pub fn is_near(&self, other: &Point, tolerance: f64) -> Result<bool> {
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(GeometryError::domain("tolerance must be non-negative"));
        }

        Ok(self.distance_to(other)? <= tolerance)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.coordinates == other.coordinates
    }
}

impl From<DVec3> for Point {
    fn from(vector: DVec3) -> Self {
        Self::from_vector(vector)
    }
}

impl Add<DVec3> for Point {
    type Output = Point;

    fn add(self, rhs: DVec3) -> Point {
        Point::from_vector(self.coordinates + rhs)
    }
}

impl Sub<DVec3> for Point {
    type Output = Point;

    fn sub(self, rhs: DVec3) -> Point {
        Point::from_vector(self.coordinates - rhs)
    }
}

impl Sub for Point {
    type Output = DVec3;

    fn sub(self, rhs: Point) -> DVec3 {
        self.coordinates - rhs.coordinates
    }
}

impl Transformable for Point {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Point")?;

        *self = transformation.apply_to_point(self)?;

        Ok(())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}, {:.p$}]", self.x(), self.y(), self.z()),
            None => write!(f, "[{}, {}, {}]", self.x(), self.y(), self.z()),
        }
    }
}
