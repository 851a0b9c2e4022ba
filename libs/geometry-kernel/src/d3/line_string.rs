//! Ordered polyline.

use std::fmt;

use crate::d3::point::Point;
use crate::d3::segment::Segment;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Ordered sequence of points. Insertion order is significant.
///
/// The empty line string is defined; the undefined sentinel holds a single
/// undefined point.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    /// Creates a line string from ordered points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Line string with no points.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Undefined sentinel.
    pub fn undefined() -> Self {
        Self {
            points: vec![Point::undefined()],
        }
    }

    /// Two-point line string tracing a segment.
    pub fn segment(segment: &Segment) -> Result<Self> {
        ensure_defined(segment.is_defined(), "Segment")?;

        Ok(Self::new(vec![segment.first_point(), segment.second_point()]))
    }

    /// Returns true if every point is defined.
    pub fn is_defined(&self) -> bool {
        self.points.iter().all(Point::is_defined)
    }

    /// Returns true if there are no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Point at `index`.
    pub fn point_at(&self, index: usize) -> Result<&Point> {
        self.points
            .get(index)
            .ok_or_else(|| GeometryError::out_of_bounds(index, self.points.len()))
    }

    /// Points in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Vertex closest to `point`.
    pub fn point_closest_to(&self, point: &Point) -> Result<Point> {
        ensure_defined(self.is_defined(), "LineString")?;
        ensure_defined(point.is_defined(), "Point")?;

        let mut closest: Option<(f64, Point)> = None;

        for candidate in &self.points {
            let distance = candidate.distance_to(point)?;

            if closest.map_or(true, |(best, _)| distance < best) {
                closest = Some((distance, *candidate));
            }
        }

        closest
            .map(|(_, point)| point)
            .ok_or_else(|| GeometryError::domain("line string is empty"))
    }

    /// Returns true if both have the same length and corresponding points are
    /// within `tolerance`.
    pub fn is_near(&self, other: &LineString, tolerance: f64) -> Result<bool> {
        ensure_defined(self.is_defined() && other.is_defined(), "LineString")?;

        if self.point_count() != other.point_count() {
            return Ok(false);
        }

        for (first, second) in self.points.iter().zip(&other.points) {
            if !first.is_near(second, tolerance)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.points == other.points
    }
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Transformable for LineString {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "LineString")?;

        for point in &mut self.points {
            *point = transformation.apply_to_point(point)?;
        }

        Ok(())
    }
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LineString [")?;

        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }

        f.write_str("]")
    }
}
