//! Sphere.

use std::fmt;

use config::constants::{approx_equal, EPSILON};
use glam::DMat3;

use crate::d3::intersection::Intersection;
use crate::d3::line::Line;
use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::quadric::{Curve, Quadric};
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::transformation::{ensure_rigid, Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Sphere with a non-negative radius.
///
/// Intersection queries against points and curves see the sphere as a
/// closed surface; containment queries see it as a solid ball.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sphere {
    center: Point,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere. The radius must be non-negative.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if radius < 0.0 {
            return Err(GeometryError::domain(format!(
                "sphere radius must be non-negative, got {radius}"
            )));
        }

        Ok(Self { center, radius })
    }

    /// Unit sphere centered on `center`.
    pub const fn unit(center: Point) -> Self {
        Self {
            center,
            radius: 1.0,
        }
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            radius: f64::NAN,
        }
    }

    /// Returns true if center and radius are defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined() && !self.radius.is_nan()
    }

    /// Returns true for a radius of exactly 1.
    pub fn is_unitary(&self) -> Result<bool> {
        ensure_defined(self.is_defined(), "Sphere")?;

        Ok(self.radius == 1.0)
    }

    /// Center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns true if the point lies on the surface.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        Ok(approx_equal(self.center.distance_to(point)?, self.radius))
    }

    /// Returns true if any point lies on the surface.
    pub fn intersects_point_set(&self, point_set: &PointSet) -> Result<bool> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if self.intersects_point(point)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if the line crosses or touches the surface.
    pub fn intersects_line(&self, line: &Line) -> Result<bool> {
        Ok(!self.intersection_with_line(line)?.is_empty())
    }

    /// Returns true if the ray crosses or touches the surface.
    pub fn intersects_ray(&self, ray: &Ray) -> Result<bool> {
        Ok(!self.intersection_with_ray(ray, false)?.is_empty())
    }

    /// Returns true if the segment crosses or touches the surface.
    pub fn intersects_segment(&self, segment: &Segment) -> Result<bool> {
        Ok(!self.intersection_with_segment(segment)?.is_empty())
    }

    /// Returns true if the plane cuts or touches the sphere.
    pub fn intersects_plane(&self, plane: &Plane) -> Result<bool> {
        self.ensure_defined_with(plane.is_defined(), "Plane")?;

        Ok(plane.distance_to(&self.center)? <= self.radius + EPSILON)
    }

    /// Returns true if the point lies in the closed ball.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        Ok(self.center.distance_to(point)? <= self.radius + EPSILON)
    }

    /// Returns true if every point lies in the closed ball.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if both endpoints lie in the closed ball.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        self.ensure_defined_with(segment.is_defined(), "Segment")?;

        Ok(self.contains_point(&segment.first_point())? && self.contains_point(&segment.second_point())?)
    }

    /// Surface crossings of a line: the chord as a Segment, a tangent Point,
    /// or Empty.
    pub fn intersection_with_line(&self, line: &Line) -> Result<Intersection> {
        self.ensure_defined_with(line.is_defined(), "Line")?;

        match self.quadric() {
            Some(quadric) => quadric.intersection_with_curve(Curve::Line(line), false),
            None => self.point_sphere_intersection(line.contains_point(&self.center)?),
        }
    }

    /// Surface crossings of a ray. With `only_in_sight`, only the first
    /// crossing seen from the ray origin is kept.
    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        self.ensure_defined_with(ray.is_defined(), "Ray")?;

        match self.quadric() {
            Some(quadric) => quadric.intersection_with_curve(Curve::Ray(ray), only_in_sight),
            None => self.point_sphere_intersection(ray.contains_point(&self.center)?),
        }
    }

    /// Surface crossings of a segment. A segment wholly inside the ball does
    /// not cross the surface and yields Empty.
    pub fn intersection_with_segment(&self, segment: &Segment) -> Result<Intersection> {
        self.ensure_defined_with(segment.is_defined(), "Segment")?;

        match self.quadric() {
            Some(quadric) => quadric.intersection_with_curve(Curve::Segment(segment), false),
            None => self.point_sphere_intersection(segment.contains_point(&self.center)?),
        }
    }

    /// Points of the set lying on the surface.
    pub fn intersection_with_point_set(&self, point_set: &PointSet) -> Result<Intersection> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        let mut on_surface = Vec::new();
        for point in point_set {
            if self.intersects_point(point)? {
                on_surface.push(*point);
            }
        }

        Ok(Intersection::from_points(on_surface))
    }

    /// `None` for a zero radius, whose level set matrix is unbounded.
    fn quadric(&self) -> Option<Quadric> {
        (self.radius > 0.0).then(|| {
            Quadric::new(
                self.center.as_vector(),
                DMat3::from_diagonal(glam::DVec3::splat(1.0 / (self.radius * self.radius))),
            )
        })
    }

    fn point_sphere_intersection(&self, touches: bool) -> Result<Intersection> {
        Ok(if touches {
            Intersection::point(self.center)
        } else {
            Intersection::empty()
        })
    }

    fn ensure_defined_with(&self, other_defined: bool, other: &'static str) -> Result<()> {
        ensure_defined(other_defined, other)?;
        ensure_defined(self.is_defined(), "Sphere")
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.center == other.center && self.radius == other.radius
    }
}

impl Transformable for Sphere {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Sphere")?;
        ensure_rigid(transformation, "Sphere")?;

        self.center = transformation.apply_to_point(&self.center)?;

        Ok(())
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(f, "Sphere {{ center: {}, radius: {} }}", self.center, self.radius)
    }
}
