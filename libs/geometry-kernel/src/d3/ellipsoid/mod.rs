//! # Ellipsoid
//!
//! Ellipsoid with three positive principal semi-axes, oriented by a
//! quaternion.
//!
//! ## Quadratic form
//!
//! With `A` the direction cosine matrix of the orientation and
//! `D = diag(1/a², 1/b², 1/c²)`, a point `x` is on the surface when
//!
//! ```text
//! (x - c)ᵀ Aᵀ D A (x - c) = 1
//! ```
//!
//! and inside when the left side is below 1. [`Ellipsoid::matrix`] exposes
//! `Aᵀ D A`; every line-like query solves the same quadratic through it.

use std::fmt;

use config::constants::EPSILON;
use glam::{DMat3, DVec3};

use crate::d3::intersection::Intersection;
use crate::d3::line::Line;
use crate::d3::plane::Plane;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::quadric::{Curve, Quadric};
use crate::d3::ray::Ray;
use crate::d3::rotation::{Quaternion, RotationMatrix};
use crate::d3::segment::Segment;
use crate::d3::transformation::{ensure_rigid, Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Oriented ellipsoid.
///
/// Like [`Sphere`](crate::d3::Sphere), intersection queries against points
/// and curves see a closed surface while containment sees a solid.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid {
    center: Point,
    semi_axes: DVec3,
    orientation: Quaternion,
}

impl Ellipsoid {
    /// Creates an ellipsoid. Semi-axes must be positive.
    pub fn new(
        center: Point,
        first_semi_axis: f64,
        second_semi_axis: f64,
        third_semi_axis: f64,
        orientation: Quaternion,
    ) -> Result<Self> {
        let semi_axes = DVec3::new(first_semi_axis, second_semi_axis, third_semi_axis);

        if !center.is_defined() || semi_axes.is_nan() || !orientation.is_defined() {
            return Ok(Self::undefined());
        }

        if semi_axes.min_element() <= 0.0 {
            return Err(GeometryError::domain(format!(
                "ellipsoid semi-axes must be positive, got [{first_semi_axis}, {second_semi_axis}, {third_semi_axis}]"
            )));
        }

        Ok(Self {
            center,
            semi_axes,
            orientation: orientation.normalized()?,
        })
    }

    /// Ellipsoid aligned with the reference axes.
    pub fn aligned(center: Point, semi_axes: DVec3) -> Result<Self> {
        Self::new(center, semi_axes.x, semi_axes.y, semi_axes.z, Quaternion::unit())
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            semi_axes: DVec3::NAN,
            orientation: Quaternion::undefined(),
        }
    }

    /// Returns true if center, semi-axes and orientation are defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined() && !self.semi_axes.is_nan() && self.orientation.is_defined()
    }

    /// Center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Semi-axis along [`first_axis`](Self::first_axis).
    pub fn first_principal_semi_axis(&self) -> f64 {
        self.semi_axes.x
    }

    /// Semi-axis along [`second_axis`](Self::second_axis).
    pub fn second_principal_semi_axis(&self) -> f64 {
        self.semi_axes.y
    }

    /// Semi-axis along [`third_axis`](Self::third_axis).
    pub fn third_principal_semi_axis(&self) -> f64 {
        self.semi_axes.z
    }

    /// Orientation of the principal axes.
    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// First principal direction in the reference frame.
    pub fn first_axis(&self) -> Result<DVec3> {
        Ok(self.frame()?.row(0))
    }

    /// Second principal direction in the reference frame.
    pub fn second_axis(&self) -> Result<DVec3> {
        Ok(self.frame()?.row(1))
    }

    /// Third principal direction in the reference frame.
    pub fn third_axis(&self) -> Result<DVec3> {
        Ok(self.frame()?.row(2))
    }

    /// Quadratic form matrix `Aᵀ D A`.
    pub fn matrix(&self) -> Result<DMat3> {
        let frame = self.frame()?;
        let scaling = DMat3::from_diagonal(DVec3::ONE / (self.semi_axes * self.semi_axes));

        Ok(frame.transpose() * scaling * frame)
    }

    /// Returns true if the point lies on the surface.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        Ok(self.quadric()?.is_on_surface(point))
    }

    /// Returns true if any point lies on the surface.
    pub fn intersects_point_set(&self, point_set: &PointSet) -> Result<bool> {
        Ok(!self.intersection_with_point_set(point_set)?.is_empty())
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

    /// Returns true if the plane cuts or touches the ellipsoid.
    ///
    /// The support function of the ellipsoid along the unit normal `n` is
    /// `sqrt(nᵀ M⁻¹ n)`; the plane touches when its distance to the center
    /// does not exceed it.
    pub fn intersects_plane(&self, plane: &Plane) -> Result<bool> {
        self.ensure_defined_with(plane.is_defined(), "Plane")?;

        let normal = plane.normal_vector();
        let reach = normal.dot(self.matrix()?.inverse() * normal).sqrt();

        Ok(plane.distance_to(&self.center)? <= reach + EPSILON)
    }

    /// Returns true if the point lies in the closed solid.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined_with(point.is_defined(), "Point")?;

        Ok(self.quadric()?.is_inside(point))
    }

    /// Returns true if every point lies in the closed solid.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        let quadric = self.quadric()?;

        Ok(point_set.iter().all(|point| quadric.is_inside(point)))
    }

    /// Returns true if both endpoints lie in the closed solid.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        self.ensure_defined_with(segment.is_defined(), "Segment")?;

        let quadric = self.quadric()?;

        Ok(quadric.is_inside(&segment.first_point()) && quadric.is_inside(&segment.second_point()))
    }

    /// The point itself if it lies on the surface, Empty otherwise.
    pub fn intersection_with_point(&self, point: &Point) -> Result<Intersection> {
        Ok(if self.intersects_point(point)? {
            Intersection::point(*point)
        } else {
            Intersection::empty()
        })
    }

    /// Points of the set lying on the surface.
    pub fn intersection_with_point_set(&self, point_set: &PointSet) -> Result<Intersection> {
        self.ensure_defined_with(point_set.is_defined(), "PointSet")?;

        let quadric = self.quadric()?;

        Ok(Intersection::from_points(
            point_set.iter().filter(|point| quadric.is_on_surface(point)).copied().collect(),
        ))
    }

    /// Surface crossings of a line.
    pub fn intersection_with_line(&self, line: &Line) -> Result<Intersection> {
        self.ensure_defined_with(line.is_defined(), "Line")?;

        self.quadric()?.intersection_with_curve(Curve::Line(line), false)
    }

    /// Surface crossings of a ray. With `only_in_sight`, only the first
    /// crossing seen from the ray origin is kept.
    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        self.ensure_defined_with(ray.is_defined(), "Ray")?;

        self.quadric()?.intersection_with_curve(Curve::Ray(ray), only_in_sight)
    }

    /// Surface crossings of a segment.
    pub fn intersection_with_segment(&self, segment: &Segment) -> Result<Intersection> {
        self.ensure_defined_with(segment.is_defined(), "Segment")?;

        self.quadric()?.intersection_with_curve(Curve::Segment(segment), false)
    }

    /// Direction cosine matrix of the orientation; rows are the principal
    /// directions.
    fn frame(&self) -> Result<DMat3> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;

        Ok(RotationMatrix::from_quaternion(&self.orientation)?.matrix())
    }

    pub(crate) fn quadric(&self) -> Result<Quadric> {
        Ok(Quadric::new(self.center.as_vector(), self.matrix()?))
    }

    fn ensure_defined_with(&self, other_defined: bool, other: &'static str) -> Result<()> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        ensure_defined(other_defined, other)
    }
}

impl PartialEq for Ellipsoid {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.center == other.center
            && self.semi_axes == other.semi_axes
            && self.orientation == other.orientation
    }
}

impl Transformable for Ellipsoid {
    /// Moves the center and turns the principal axes. A reflection flips the
    /// third axis so the frame stays right-handed; the shape is symmetric
    /// under that flip.
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Ellipsoid")?;
        ensure_rigid(transformation, "Ellipsoid")?;

        let linear = transformation.linear_part();
        let frame = self.frame()?;

        let first = linear * frame.row(0);
        let second = linear * frame.row(1);
        let mut third = linear * frame.row(2);

        if linear.determinant() < 0.0 {
            third = -third;
        }

        self.orientation = Quaternion::from_rotation_matrix(&RotationMatrix::rows(first, second, third)?)?;
        self.center = transformation.apply_to_point(&self.center)?;

        Ok(())
    }
}

impl fmt::Display for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Ellipsoid {{ center: {}, semi-axes: [{}, {}, {}], orientation: {} }}",
            self.center, self.semi_axes.x, self.semi_axes.y, self.semi_axes.z, self.orientation
        )
    }
}

#[cfg(test)]
mod tests;
