//! # Pyramid
//!
//! Semi-infinite pyramid: every ray from the apex through the planar base
//! polygon. One lateral face per edge of the base's outer ring.
//!
//! Intersections with spheres and ellipsoids sample each lateral face with a
//! fan of rays from the apex, the same way [`Cone`](crate::d3::Cone) samples
//! its surface.

use std::fmt;

use config::constants::EPSILON;

use crate::angle::Angle;
use crate::d2;
use crate::d3::ellipsoid::Ellipsoid;
use crate::d3::intersection::Intersection;
use crate::d3::lateral_surface::{any_ray_hits, ensure_discretization_level, nested_fractions, sweep};
use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::polygon::Polygon;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::sphere::Sphere;
use crate::d3::transformation::{ensure_rigid, Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Pyramid with a planar polygonal base and an apex.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pyramid {
    base: Polygon,
    apex: Point,
}

impl Pyramid {
    /// Creates a pyramid. The apex must lie off the base plane.
    pub fn new(base: Polygon, apex: Point) -> Result<Self> {
        if !base.is_defined() || !apex.is_defined() {
            return Ok(Self::undefined());
        }

        if Plane::new(base.origin(), base.normal_vector()?)?.contains_point(&apex)? {
            return Err(GeometryError::domain("pyramid apex lies in the base plane"));
        }

        Ok(Self { base, apex })
    }

    /// Undefined sentinel.
    pub fn undefined() -> Self {
        Self {
            base: Polygon::undefined(),
            apex: Point::undefined(),
        }
    }

    /// Returns true if base and apex are defined.
    pub fn is_defined(&self) -> bool {
        self.base.is_defined() && self.apex.is_defined()
    }

    /// Base polygon.
    pub fn base(&self) -> &Polygon {
        &self.base
    }

    /// Apex.
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Number of lateral faces, one per outer edge of the base.
    pub fn lateral_face_count(&self) -> usize {
        self.base.polygon2d().outer_ring_vertices().len()
    }

    /// Triangular lateral face at `index`, framed at the apex with its x axis
    /// along the first edge from the apex.
    pub fn lateral_face_at(&self, index: usize) -> Result<Polygon> {
        let edge = self.base_edge_at(index)?;

        let first_span = edge.first_point() - self.apex;
        let x_axis = first_span.normalize();
        let second_direction = (edge.second_point() - self.apex).normalize();
        let y_axis = x_axis.cross(second_direction).cross(x_axis).normalize();

        let edge_span = edge.second_point() - edge.first_point();
        let second_vertex = d2::Point::new(first_span.length(), 0.0);
        let third_vertex = d2::Point::new(
            second_vertex.x() + edge_span.dot(x_axis),
            second_vertex.y() + edge_span.dot(y_axis),
        );

        let triangle = d2::Polygon::simple(vec![d2::Point::origin(), second_vertex, third_vertex])?;

        Polygon::new(triangle, self.apex, x_axis, y_axis)
    }

    /// `count` rays from the apex sweeping the lateral face at `index`, from
    /// its first edge toward its second edge.
    ///
    /// A single ray runs along the first edge; two or more also cover the
    /// second edge. Rays for `count` are a subset of the rays for any larger
    /// count.
    pub fn rays_of_lateral_face_at(&self, index: usize, count: usize) -> Result<Vec<Ray>> {
        let edge = self.base_edge_at(index)?;

        if count == 0 {
            return Err(GeometryError::domain("ray count must be positive"));
        }

        let first = (edge.first_point() - self.apex).normalize();
        let second = (edge.second_point() - self.apex).normalize();

        let fan_axis = first.cross(second);
        if fan_axis.length() <= EPSILON {
            return Ok(vec![Ray::new(self.apex, first)?]);
        }

        let toward_second = fan_axis.normalize().cross(first);
        let spread = Angle::between(first, second)?.in_radians();

        let mut fractions = nested_fractions((count - 1).max(1));
        if count > 1 {
            fractions.push(1.0);
        }

        fractions
            .into_iter()
            .map(|fraction| {
                let angle = spread * fraction;

                Ray::new(self.apex, first * angle.cos() + toward_second * angle.sin())
            })
            .collect()
    }

    /// Rays of every lateral face, `count / lateral_face_count` per face.
    ///
    /// Fails if `count` is below the face count or is not a valid
    /// discretization level.
    pub fn rays_of_lateral_faces(&self, count: usize) -> Result<Vec<Ray>> {
        self.ensure_defined()?;
        ensure_discretization_level(count)?;

        let face_count = self.lateral_face_count();
        if count < face_count {
            return Err(GeometryError::domain(format!(
                "ray count {count} is lower than lateral face count {face_count}"
            )));
        }

        let mut rays = Vec::with_capacity(count);
        for index in 0..face_count {
            rays.extend(self.rays_of_lateral_face_at(index, count / face_count)?);
        }

        Ok(rays)
    }

    /// Returns true if the point lies in the pyramid, apex included.
    ///
    /// The point is projected from the apex onto the base plane and tested
    /// against the base polygon.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        if *point == self.apex {
            return Ok(true);
        }

        let sight = Ray::new(self.apex, *point - self.apex)?;
        let base_plane = Plane::new(self.base.origin(), self.base.normal_vector()?)?;
        let crossing = base_plane.intersection_with_ray(&sight)?;

        if !crossing.is::<Point>() {
            return Ok(false);
        }

        let projected = self.base.project(crossing.downcast::<Point>()?);

        self.base.polygon2d().contains_point(&projected)
    }

    /// Returns true if every point is contained.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Returns true if both endpoints are contained.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        self.ensure_defined_with(segment.is_defined(), "Segment")?;

        Ok(self.contains_point(&segment.first_point())? && self.contains_point(&segment.second_point())?)
    }

    /// Returns true if some lateral sample ray hits the sphere.
    pub fn intersects_sphere(&self, sphere: &Sphere, discretization_level: usize) -> Result<bool> {
        self.ensure_defined_with(sphere.is_defined(), "Sphere")?;

        any_ray_hits(&self.rays_of_lateral_faces(discretization_level)?, |ray| {
            sphere.intersects_ray(ray)
        })
    }

    /// Returns true if some lateral sample ray hits the ellipsoid.
    pub fn intersects_ellipsoid(&self, ellipsoid: &Ellipsoid, discretization_level: usize) -> Result<bool> {
        self.ensure_defined_with(ellipsoid.is_defined(), "Ellipsoid")?;

        any_ray_hits(&self.rays_of_lateral_faces(discretization_level)?, |ray| {
            ellipsoid.intersects_ray(ray)
        })
    }

    /// Discretized intersection of the lateral faces with a sphere.
    pub fn intersection_with_sphere(
        &self,
        sphere: &Sphere,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> Result<Intersection> {
        self.ensure_defined_with(sphere.is_defined(), "Sphere")?;

        let rays = self.rays_of_lateral_faces(discretization_level)?;

        sweep(&self.apex, &rays, only_in_sight, |ray| {
            sphere.intersection_with_ray(ray, only_in_sight)
        })
    }

    /// Discretized intersection of the lateral faces with an ellipsoid.
    pub fn intersection_with_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> Result<Intersection> {
        self.ensure_defined_with(ellipsoid.is_defined(), "Ellipsoid")?;

        let rays = self.rays_of_lateral_faces(discretization_level)?;

        sweep(&self.apex, &rays, only_in_sight, |ray| {
            ellipsoid.intersection_with_ray(ray, only_in_sight)
        })
    }

    fn base_edge_at(&self, index: usize) -> Result<Segment> {
        self.ensure_defined()?;

        let face_count = self.lateral_face_count();
        if index >= face_count {
            return Err(GeometryError::out_of_bounds(index, face_count));
        }

        self.base.edge_at(index)
    }

    fn ensure_defined(&self) -> Result<()> {
        ensure_defined(self.is_defined(), "Pyramid")
    }

    fn ensure_defined_with(&self, other_defined: bool, other: &'static str) -> Result<()> {
        ensure_defined(other_defined, other)?;
        self.ensure_defined()
    }
}

impl PartialEq for Pyramid {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.base == other.base && self.apex == other.apex
    }
}

impl Transformable for Pyramid {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        self.ensure_defined()?;
        ensure_rigid(transformation, "Pyramid")?;

        self.base.apply_transformation_mut(transformation)?;
        self.apex = transformation.apply_to_point(&self.apex)?;

        Ok(())
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(f, "Pyramid {{ apex: {}, base: {} }}", self.apex, self.base)
    }
}
