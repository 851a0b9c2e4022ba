//! Unordered set of unique 3D points.

use std::fmt;

use crate::d3::point::Point;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Set of points; points with identical coordinates collapse into one.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Builds a set from points, dropping duplicates.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut unique: Vec<Point> = Vec::new();

        for point in points {
            if !unique.iter().any(|existing| existing.as_vector() == point.as_vector()) {
                unique.push(point);
            }
        }

        Self { points: unique }
    }

    /// Empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if every point is defined. The empty set is defined.
    pub fn is_defined(&self) -> bool {
        self.points.iter().all(Point::is_defined)
    }

    /// Returns true if the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Distance from `point` to the closest member.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        self.point_closest_to(point)?.distance_to(point)
    }

    /// Member closest to `point`.
    pub fn point_closest_to(&self, point: &Point) -> Result<Point> {
        ensure_defined(self.is_defined(), "PointSet")?;
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
            .ok_or_else(|| GeometryError::domain("point set is empty"))
    }

    /// Returns true if both sets have the same size and every point of one
    /// lies within `tolerance` of some point of the other.
    pub fn is_near(&self, other: &PointSet, tolerance: f64) -> Result<bool> {
        ensure_defined(self.is_defined() && other.is_defined(), "PointSet")?;

        if self.size() != other.size() {
            return Ok(false);
        }

        for point in &self.points {
            if other.is_empty() || other.distance_to(point)? > tolerance {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl PartialEq for PointSet {
    /// Same members, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.size() == other.size()
            && self.points.iter().all(|point| other.points.contains(point))
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Transformable for PointSet {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "PointSet")?;

        let transformed = self
            .points
            .iter()
            .map(|point| transformation.apply_to_point(point))
            .collect::<Result<Vec<_>>>()?;

        *self = Self::new(transformed);

        Ok(())
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PointSet [")?;

        for (index, point) in self.points.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{point}")?;
        }

        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let set = PointSet::new([
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
        ]);

        assert_eq!(set.size(), 2);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = PointSet::new([Point::new(1.0, 0.0, 0.0), Point::new(0.0, 1.0, 0.0)]);
        let b = PointSet::new([Point::new(0.0, 1.0, 0.0), Point::new(1.0, 0.0, 0.0)]);

        assert_eq!(a, b);
        assert_eq!(PointSet::empty(), PointSet::empty());
    }

    #[test]
    fn test_closest_point() {
        let set = PointSet::new([Point::new(0.0, 0.0, 10.0), Point::new(0.0, 0.0, 1.0)]);

        assert_eq!(
            set.point_closest_to(&Point::origin()).unwrap(),
            Point::new(0.0, 0.0, 1.0)
        );
        assert_abs_diff_eq!(set.distance_to(&Point::origin()).unwrap(), 1.0);
        assert!(PointSet::empty().point_closest_to(&Point::origin()).is_err());
    }

    #[test]
    fn test_is_near() {
        let a = PointSet::new([Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)]);
        let b = PointSet::new([Point::new(1.0, 0.0, 1e-6), Point::new(0.0, 0.0, 0.0)]);

        assert!(a.is_near(&b, 1e-5).unwrap());
        assert!(!a.is_near(&b, 1e-7).unwrap());
    }

    #[test]
    fn test_undefined_member() {
        let set = PointSet::new([Point::origin(), Point::undefined()]);

        assert!(!set.is_defined());
        assert!(set.point_closest_to(&Point::origin()).is_err());
    }
}
