//! Infinite plane.

use std::fmt;

use config::constants::{approx_zero, EPSILON};
use glam::DVec3;

use crate::d3::intersection::Intersection;
use crate::d3::line::{unit_direction, Line};
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Plane through `point` with unit `normal`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plane {
    point: Point,
    normal: DVec3,
}

impl Plane {
    /// Creates a plane. The normal is normalized and must be nonzero.
    pub fn new(point: Point, normal: DVec3) -> Result<Self> {
        if !point.is_defined() || normal.is_nan() {
            return Ok(Self::undefined());
        }

        Ok(Self {
            point,
            normal: unit_direction(normal, "plane normal")?,
        })
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            point: Point::undefined(),
            normal: DVec3::NAN,
        }
    }

    /// Returns true if point and normal are defined.
    pub fn is_defined(&self) -> bool {
        self.point.is_defined() && !self.normal.is_nan()
    }

    /// Point the plane was built from.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Unit normal.
    pub fn normal_vector(&self) -> DVec3 {
        self.normal
    }

    /// Unsigned distance from a point to the plane.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined(self.is_defined(), "Plane")?;
        ensure_defined(point.is_defined(), "Point")?;

        Ok(self.signed_distance(point).abs())
    }

    /// Returns true if the point lies in the plane.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= EPSILON)
    }

    /// Returns true if every point lies in the plane.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if the line lies in the plane.
    pub fn contains_line(&self, line: &Line) -> Result<bool> {
        ensure_defined(line.is_defined(), "Line")?;

        Ok(self.is_parallel_to(line.direction()) && self.contains_point(&line.origin())?)
    }

    /// Returns true if the ray lies in the plane.
    pub fn contains_ray(&self, ray: &Ray) -> Result<bool> {
        ensure_defined(ray.is_defined(), "Ray")?;

        Ok(self.is_parallel_to(ray.direction()) && self.contains_point(&ray.origin())?)
    }

    /// Returns true if both endpoints lie in the plane.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        ensure_defined(segment.is_defined(), "Segment")?;

        Ok(self.contains_point(&segment.first_point())? && self.contains_point(&segment.second_point())?)
    }

    /// Returns true if the point lies in the plane.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.contains_point(point)
    }

    /// Returns true if any point lies in the plane.
    pub fn intersects_point_set(&self, point_set: &PointSet) -> Result<bool> {
        Ok(!self.intersection_with_point_set(point_set)?.is_empty())
    }

    /// Returns true unless the line is parallel to and off the plane.
    pub fn intersects_line(&self, line: &Line) -> Result<bool> {
        Ok(!self.intersection_with_line(line)?.is_empty())
    }

    /// Returns true if the ray reaches the plane.
    pub fn intersects_ray(&self, ray: &Ray) -> Result<bool> {
        Ok(!self.intersection_with_ray(ray)?.is_empty())
    }

    /// Returns true if the segment touches the plane.
    pub fn intersects_segment(&self, segment: &Segment) -> Result<bool> {
        Ok(!self.intersection_with_segment(segment)?.is_empty())
    }

    /// Returns true unless the planes are parallel and distinct.
    pub fn intersects_plane(&self, other: &Plane) -> Result<bool> {
        Ok(!self.intersection_with_plane(other)?.is_empty())
    }

    /// The point itself if it lies in the plane, Empty otherwise.
    pub fn intersection_with_point(&self, point: &Point) -> Result<Intersection> {
        Ok(if self.contains_point(point)? {
            Intersection::point(*point)
        } else {
            Intersection::empty()
        })
    }

    /// Members of the set lying in the plane.
    pub fn intersection_with_point_set(&self, point_set: &PointSet) -> Result<Intersection> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        let mut in_plane = Vec::new();
        for point in point_set {
            if self.contains_point(point)? {
                in_plane.push(*point);
            }
        }

        Ok(Intersection::from_points(in_plane))
    }

    /// Crossing point, the line itself when it lies in the plane, or Empty
    /// when it is parallel and off the plane.
    pub fn intersection_with_line(&self, line: &Line) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Plane")?;
        ensure_defined(line.is_defined(), "Line")?;

        match self.crossing_parameter(&line.origin(), line.direction()) {
            Some(parameter) => Ok(Intersection::point(line.point_at(parameter))),
            None if self.contains_point(&line.origin())? => Ok(Intersection::line(*line)),
            None => Ok(Intersection::empty()),
        }
    }

    /// As for a line, but crossings behind the ray origin are rejected.
    pub fn intersection_with_ray(&self, ray: &Ray) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Plane")?;
        ensure_defined(ray.is_defined(), "Ray")?;

        match self.crossing_parameter(&ray.origin(), ray.direction()) {
            Some(parameter) if parameter >= -EPSILON => {
                Ok(Intersection::point(ray.point_at(parameter.max(0.0))))
            }
            Some(_) => Ok(Intersection::empty()),
            None if self.contains_point(&ray.origin())? => Ok(Intersection::ray(*ray)),
            None => Ok(Intersection::empty()),
        }
    }

    /// Crossing point, the segment itself when it lies in the plane, or Empty.
    pub fn intersection_with_segment(&self, segment: &Segment) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Plane")?;

        if segment.is_degenerate()? {
            return self.intersection_with_point(&segment.first_point());
        }

        let span = segment.second_point() - segment.first_point();

        match self.crossing_parameter(&segment.first_point(), span) {
            Some(parameter) if (-EPSILON..=1.0 + EPSILON).contains(&parameter) => {
                Ok(Intersection::point(segment.point_at(parameter.clamp(0.0, 1.0))))
            }
            Some(_) => Ok(Intersection::empty()),
            None if self.contains_point(&segment.first_point())? => Ok(Intersection::segment(*segment)),
            None => Ok(Intersection::empty()),
        }
    }

    /// Line of intersection, the plane itself when the two coincide, or Empty
    /// for distinct parallel planes.
    pub fn intersection_with_plane(&self, other: &Plane) -> Result<Intersection> {
        ensure_defined(self.is_defined() && other.is_defined(), "Plane")?;

        let direction = self.normal.cross(other.normal);
        let length_squared = direction.length_squared();

        if length_squared < EPSILON * EPSILON {
            return Ok(if self.contains_point(&other.point)? {
                Intersection::plane(*self)
            } else {
                Intersection::empty()
            });
        }

        let first_offset = self.normal.dot(self.point.as_vector());
        let second_offset = other.normal.dot(other.point.as_vector());

        let point = (first_offset * other.normal.cross(direction)
            + second_offset * direction.cross(self.normal))
            / length_squared;

        Ok(Intersection::line(Line::new(Point::from_vector(point), direction)?))
    }

    fn signed_distance(&self, point: &Point) -> f64 {
        self.normal.dot(*point - self.point)
    }

    fn is_parallel_to(&self, direction: DVec3) -> bool {
        approx_zero(self.normal.dot(direction))
    }

    /// Parameter `t` where `origin + t direction` meets the plane; `None` when
    /// the direction is parallel to the plane.
    fn crossing_parameter(&self, origin: &Point, direction: DVec3) -> Option<f64> {
        let denominator = self.normal.dot(direction);

        if denominator.abs() <= EPSILON * direction.length() {
            return None;
        }

        Some(self.normal.dot(self.point - *origin) / denominator)
    }
}

impl PartialEq for Plane {
    /// Same set of points, regardless of support point and normal sign.
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.normal.cross(other.normal).length() <= EPSILON
            && approx_zero(self.signed_distance(&other.point))
    }
}

impl Transformable for Plane {
    /// Normals map through the inverse transpose of the linear part.
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Plane")?;
        ensure_defined(transformation.is_defined(), "Transformation")?;

        let linear = transformation.linear_part();
        if approx_zero(linear.determinant()) {
            return Err(GeometryError::domain("cannot map a plane through a singular transformation"));
        }

        let normal = linear.inverse().transpose() * self.normal;
        let point = transformation.apply_to_point(&self.point)?;

        *self = Self::new(point, normal)?;

        Ok(())
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Plane {{ point: {}, normal: [{}, {}, {}] }}",
            self.point, self.normal.x, self.normal.y, self.normal.z
        )
    }
}
