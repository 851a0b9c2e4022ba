//! 2D point.

use std::fmt;
use std::ops::{Add, Sub};

use glam::DVec2;

use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Position in the plane.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coordinates: DVec2,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            coordinates: DVec2::new(x, y),
        }
    }

    /// Point at the tip of `vector`.
    pub const fn from_vector(vector: DVec2) -> Self {
        Self { coordinates: vector }
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self::from_vector(DVec2::NAN)
    }

    /// `(0, 0)`.
    pub const fn origin() -> Self {
        Self::from_vector(DVec2::ZERO)
    }

    /// Returns true unless a coordinate is NaN.
    pub fn is_defined(&self) -> bool {
        !self.coordinates.is_nan()
    }

    /// First coordinate.
    pub fn x(&self) -> f64 {
        self.coordinates.x
    }

    /// Second coordinate.
    pub fn y(&self) -> f64 {
        self.coordinates.y
    }

    /// Position vector.
    pub fn as_vector(&self) -> DVec2 {
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

    pub(crate) fn to_coord(self) -> geo::Coord<f64> {
        geo::coord! { x: self.coordinates.x, y: self.coordinates.y }
    }

    pub(crate) fn from_coord(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.coordinates == other.coordinates
    }
}

impl From<DVec2> for Point {
    fn from(vector: DVec2) -> Self {
        Self::from_vector(vector)
    }
}

impl Add<DVec2> for Point {
    type Output = Point;

    fn add(self, rhs: DVec2) -> Point {
        Point::from_vector(self.coordinates + rhs)
    }
}

impl Sub<DVec2> for Point {
    type Output = Point;

    fn sub(self, rhs: DVec2) -> Point {
        Point::from_vector(self.coordinates - rhs)
    }
}

impl Sub for Point {
    type Output = DVec2;

    fn sub(self, rhs: Point) -> DVec2 {
        self.coordinates - rhs.coordinates
    }
}

impl Transformable for Point {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
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
            Some(p) => write!(f, "[{:.p$}, {:.p$}]", self.x(), self.y()),
            None => write!(f, "[{}, {}]", self.x(), self.y()),
        }
    }
}
