//! Bounded 2D segment.

use std::fmt;

use config::constants::EPSILON;
use glam::DVec2;

use crate::d2::intersection::Intersection;
use crate::d2::line::Line;
use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Segment between two points.
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

        Ok(self.point_at(0.5))
    }

    /// Unit direction from first to second endpoint.
    pub fn direction(&self) -> Result<DVec2> {
        if self.is_degenerate()? {
            return Err(GeometryError::domain("degenerate segment has no direction"));
        }

        Ok((self.second - self.first).normalize())
    }

    /// Length.
    pub fn length(&self) -> Result<f64> {
        self.first.distance_to(&self.second)
    }

    /// Supporting line.
    pub fn to_line(&self) -> Result<Line> {
        Line::new(self.first, self.direction()?)
    }

    /// Distance from a point to the closest point of the segment.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Segment")?;
        ensure_defined(point.is_defined(), "Point")?;

        let span = self.second - self.first;
        let length_squared = span.length_squared();

        let parameter = if length_squared == 0.0 {
            0.0
        } else {
            ((*point - self.first).dot(span) / length_squared).clamp(0.0, 1.0)
        };

        point.distance_to(&self.point_at(parameter))
    }

    /// Distance from the closest member of a point set.
    pub fn distance_to_point_set(&self, point_set: &PointSet) -> Result<f64> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        point_set
            .iter()
            .map(|point| self.distance_to(point))
            .try_fold(None, |closest: Option<f64>, distance| {
                let distance = distance?;
                Ok::<_, GeometryError>(Some(closest.map_or(distance, |best| best.min(distance))))
            })?
            .ok_or_else(|| GeometryError::domain("point set is empty"))
    }

    /// Returns true if the point lies on the segment.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies on the segment.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if the segments share at least one point.
    pub fn intersects_segment(&self, other: &Segment) -> Result<bool> {
        Ok(!self.intersection_with_segment(other)?.is_empty())
    }

    /// Common part of two segments: a Point, an overlapping Segment when
    /// they are collinear, or Empty.
    pub fn intersection_with_segment(&self, other: &Segment) -> Result<Intersection> {
        ensure_defined(self.is_defined() && other.is_defined(), "Segment")?;

        if self.is_degenerate()? {
            return Ok(point_if(other.contains_point(&self.first)?, self.first));
        }
        if other.is_degenerate()? {
            return Ok(point_if(self.contains_point(&other.first)?, other.first));
        }

        let span = self.second - self.first;
        let other_span = other.second - other.first;
        let offset = other.first - self.first;
        let denominator = span.perp_dot(other_span);

        if denominator.abs() <= EPSILON * span.length() * other_span.length() {
            if span.perp_dot(offset).abs() > EPSILON * span.length() {
                return Ok(Intersection::empty());
            }

            return Ok(self.collinear_overlap(other));
        }

        let parameter = offset.perp_dot(other_span) / denominator;
        let other_parameter = offset.perp_dot(span) / denominator;
        let range = -EPSILON..=1.0 + EPSILON;

        Ok(point_if(
            range.contains(&parameter) && range.contains(&other_parameter),
            self.point_at(parameter.clamp(0.0, 1.0)),
        ))
    }

    /// `first + t (second - first)`.
    pub(crate) fn point_at(&self, parameter: f64) -> Point {
        self.first + (self.second - self.first) * parameter
    }

    fn collinear_overlap(&self, other: &Segment) -> Intersection {
        let span = self.second - self.first;
        let length_squared = span.length_squared();

        let start = (other.first - self.first).dot(span) / length_squared;
        let end = (other.second - self.first).dot(span) / length_squared;

        let lower = start.min(end).max(0.0);
        let upper = start.max(end).min(1.0);

        if lower > upper + EPSILON {
            Intersection::empty()
        } else if (upper - lower) * length_squared.sqrt() <= EPSILON {
            Intersection::point(self.point_at(lower))
        } else {
            Intersection::segment(Segment::new(self.point_at(lower), self.point_at(upper)))
        }
    }
}

fn point_if(condition: bool, point: Point) -> Intersection {
    if condition {
        Intersection::point(point)
    } else {
        Intersection::empty()
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
    use crate::d2::intersection::IntersectionKind;

    #[test]
    fn test_crossing() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
        let b = Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));

        assert_eq!(
            *a.intersection_with_segment(&b).unwrap().downcast::<Point>().unwrap(),
            Point::new(1.0, 1.0)
        );
    }

    #[test]
    fn test_disjoint_and_parallel() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let short = Segment::new(Point::new(2.0, -1.0), Point::new(2.0, 1.0));
        let parallel = Segment::new(Point::new(0.0, 1.0), Point::new(1.0, 1.0));

        assert!(!a.intersects_segment(&short).unwrap());
        assert!(!a.intersects_segment(&parallel).unwrap());
    }

    #[test]
    fn test_collinear_overlap() {
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        let b = Segment::new(Point::new(6.0, 0.0), Point::new(2.0, 0.0));
        let touching = Segment::new(Point::new(4.0, 0.0), Point::new(5.0, 0.0));

        assert_eq!(
            *a.intersection_with_segment(&b).unwrap().downcast::<Segment>().unwrap(),
            Segment::new(Point::new(2.0, 0.0), Point::new(4.0, 0.0))
        );
        assert_eq!(
            a.intersection_with_segment(&touching).unwrap().kind(),
            IntersectionKind::Point
        );
    }

    #[test]
    fn test_degenerate() {
        let point = Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 0.0));
        let a = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));

        assert_eq!(a.intersection_with_segment(&point).unwrap().kind(), IntersectionKind::Point);
        assert!(point.direction().is_err());
    }

    #[test]
    fn test_distance_to_point_set() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        let set = PointSet::new([Point::new(2.0, 3.0), Point::new(6.0, 0.0)]);

        assert_abs_diff_eq!(segment.distance_to_point_set(&set).unwrap(), 2.0);
        assert_abs_diff_eq!(segment.length().unwrap(), 4.0);
        assert_eq!(segment.center().unwrap(), Point::new(2.0, 0.0));
    }
}
