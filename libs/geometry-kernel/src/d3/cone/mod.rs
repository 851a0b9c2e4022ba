//! # Cone
//!
//! Semi-infinite circular cone: every ray from the apex within `angle` of
//! the axis.
//!
//! ## Discretized intersections
//!
//! Intersections with spheres and ellipsoids have no closed form here. The
//! lateral surface is sampled by `discretization_level` rays around the
//! axis, and each ray is crossed exactly with the target. The result is a
//! Complex intersection of near (and optionally far) hit line strings.
//! Raising the level keeps every earlier ray, so hits never disappear, and
//! tightens the approximation at a linear cost;
//! see [`config::constants::DEFAULT_DISCRETIZATION_LEVEL`] for the default's
//! accuracy bound.

use std::f64::consts::{PI, TAU};
use std::fmt;

use config::constants::EPSILON;
use glam::DVec3;

use crate::angle::Angle;
use crate::d3::ellipsoid::Ellipsoid;
use crate::d3::intersection::Intersection;
use crate::d3::lateral_surface::{any_ray_hits, ensure_discretization_level, nested_fractions, sweep};
use crate::d3::line::unit_direction;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::sphere::Sphere;
use crate::d3::transformation::{ensure_rigid, Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Cone with apex, unit axis and half-angle in `(0, π)`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cone {
    apex: Point,
    axis: DVec3,
    angle: Angle,
}

impl Cone {
    /// Creates a cone. The axis is normalized; the half-angle must lie in
    /// `(0, π)`.
    pub fn new(apex: Point, axis: DVec3, angle: Angle) -> Result<Self> {
        if !apex.is_defined() || axis.is_nan() || !angle.is_defined() {
            return Ok(Self::undefined());
        }

        let half_angle = angle.in_radians();
        if half_angle <= 0.0 || half_angle >= PI {
            return Err(GeometryError::domain(format!(
                "cone half-angle must lie in (0, π), got {angle}"
            )));
        }

        Ok(Self {
            apex,
            axis: unit_direction(axis, "cone axis")?,
            angle,
        })
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            apex: Point::undefined(),
            axis: DVec3::NAN,
            angle: Angle::undefined(),
        }
    }

    /// Returns true if apex, axis and angle are defined.
    pub fn is_defined(&self) -> bool {
        self.apex.is_defined() && !self.axis.is_nan() && self.angle.is_defined()
    }

    /// Apex.
    pub fn apex(&self) -> Point {
        self.apex
    }

    /// Unit axis.
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Half-angle between the axis and the lateral surface.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// `count` rays from the apex along the lateral surface, ordered by
    /// azimuth around the axis.
    ///
    /// The rays for `count` are a subset of the rays for any larger count,
    /// and a power-of-two `count` spreads them evenly. Fails unless `count`
    /// is a valid discretization level.
    pub fn rays_of_lateral_surface(&self, count: usize) -> Result<Vec<Ray>> {
        self.ensure_defined()?;
        ensure_discretization_level(count)?;

        let reference = self.reference_direction();
        let binormal = self.axis.cross(reference);
        let (sin_angle, cos_angle) = self.angle.in_radians().sin_cos();

        nested_fractions(count)
            .into_iter()
            .map(|fraction| {
                let azimuth = TAU * fraction;
                let radial = reference * azimuth.cos() + binormal * azimuth.sin();

                Ray::new(self.apex, self.axis * cos_angle + radial * sin_angle)
            })
            .collect()
    }

    /// Distance from a point to the lateral surface. Points behind the apex
    /// measure to the apex.
    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        if *point == self.apex {
            return Ok(0.0);
        }

        let offset = *point - self.apex;
        if offset.dot(self.axis) < 0.0 {
            return Ok(offset.length());
        }

        let perpendicular = offset - self.axis * offset.dot(self.axis);
        let radial = if perpendicular.length() > EPSILON {
            perpendicular.normalize()
        } else {
            self.reference_direction()
        };

        let (sin_angle, cos_angle) = self.angle.in_radians().sin_cos();

        Ray::new(self.apex, self.axis * cos_angle + radial * sin_angle)?.distance_to(point)
    }

    /// Returns true if the point lies inside the cone or on its surface.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        if *point == self.apex {
            return Ok(true);
        }

        self.within_angle(*point - self.apex)
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

    /// Returns true if the ray starts inside and never leaves.
    pub fn contains_ray(&self, ray: &Ray) -> Result<bool> {
        self.ensure_defined_with(ray.is_defined(), "Ray")?;

        Ok(self.contains_point(&ray.origin())? && self.within_angle(ray.direction())?)
    }

    /// Returns true if the whole ball lies inside the cone.
    pub fn contains_sphere(&self, sphere: &Sphere) -> Result<bool> {
        self.ensure_defined_with(sphere.is_defined(), "Sphere")?;

        Ok(self.contains_point(&sphere.center())? && self.distance_to(&sphere.center())? >= sphere.radius())
    }

    /// Returns true if some lateral sample ray hits the sphere.
    pub fn intersects_sphere(&self, sphere: &Sphere, discretization_level: usize) -> Result<bool> {
        self.ensure_defined_with(sphere.is_defined(), "Sphere")?;

        any_ray_hits(&self.rays_of_lateral_surface(discretization_level)?, |ray| {
            sphere.intersects_ray(ray)
        })
    }

    /// Returns true if some lateral sample ray hits the ellipsoid.
    pub fn intersects_ellipsoid(&self, ellipsoid: &Ellipsoid, discretization_level: usize) -> Result<bool> {
        self.ensure_defined_with(ellipsoid.is_defined(), "Ellipsoid")?;

        any_ray_hits(&self.rays_of_lateral_surface(discretization_level)?, |ray| {
            ellipsoid.intersects_ray(ray)
        })
    }

    /// Discretized intersection of the lateral surface with a sphere.
    pub fn intersection_with_sphere(
        &self,
        sphere: &Sphere,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> Result<Intersection> {
        self.ensure_defined_with(sphere.is_defined(), "Sphere")?;

        let rays = self.rays_of_lateral_surface(discretization_level)?;

        sweep(&self.apex, &rays, only_in_sight, |ray| {
            sphere.intersection_with_ray(ray, only_in_sight)
        })
    }

    /// Discretized intersection of the lateral surface with an ellipsoid.
    pub fn intersection_with_ellipsoid(
        &self,
        ellipsoid: &Ellipsoid,
        only_in_sight: bool,
        discretization_level: usize,
    ) -> Result<Intersection> {
        self.ensure_defined_with(ellipsoid.is_defined(), "Ellipsoid")?;

        let rays = self.rays_of_lateral_surface(discretization_level)?;

        sweep(&self.apex, &rays, only_in_sight, |ray| {
            ellipsoid.intersection_with_ray(ray, only_in_sight)
        })
    }

    /// Unit vector perpendicular to the axis, origin of the azimuth.
    fn reference_direction(&self) -> DVec3 {
        let helper = if self.axis.dot(DVec3::X).abs() < 0.5 {
            DVec3::X
        } else {
            DVec3::Y
        };

        self.axis.cross(helper).normalize()
    }

    fn within_angle(&self, direction: DVec3) -> Result<bool> {
        Ok(Angle::between(direction, self.axis)?.in_radians() <= self.angle.in_radians() + EPSILON)
    }

    fn ensure_defined(&self) -> Result<()> {
        ensure_defined(self.is_defined(), "Cone")
    }

    fn ensure_defined_with(&self, other_defined: bool, other: &'static str) -> Result<()> {
        ensure_defined(other_defined, other)?;
        self.ensure_defined()
    }
}

impl PartialEq for Cone {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.apex == other.apex
            && self.axis == other.axis
            && self.angle.in_radians() == other.angle.in_radians()
    }
}

impl Transformable for Cone {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        self.ensure_defined()?;
        ensure_rigid(transformation, "Cone")?;

        self.apex = transformation.apply_to_point(&self.apex)?;
        self.axis = transformation.apply_to_vector(self.axis)?.normalize();

        Ok(())
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Cone {{ apex: {}, axis: [{}, {}, {}], angle: {} }}",
            self.apex, self.axis.x, self.axis.y, self.axis.z, self.angle
        )
    }
}

#[cfg(test)]
mod tests;
