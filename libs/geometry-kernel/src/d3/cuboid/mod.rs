//! # Cuboid
//!
//! Oriented box: a center, three orthonormal axes and three non-negative
//! half-extents.
//!
//! ## Algorithms
//!
//! - Line, ray and segment queries clip the curve parameter against the
//!   three slabs `|(x - c)·aᵢ| ≤ eᵢ`
//! - Cuboid against cuboid runs the separating axis test over the 15
//!   candidate axes

use std::fmt;

use config::constants::{approx_zero, EPSILON, ROTATION_MATRIX_TOLERANCE};
use glam::DVec3;

use crate::d3::intersection::Intersection;
use crate::d3::line::{unit_direction, Line};
use crate::d3::line_string::LineString;
use crate::d3::point::Point;
use crate::d3::point_set::PointSet;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Oriented box.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cuboid {
    center: Point,
    axes: [DVec3; 3],
    extents: [f64; 3],
}

impl Cuboid {
    /// Creates a cuboid.
    ///
    /// Axes are normalized and must be mutually orthogonal; extents are
    /// half-lengths along each axis and must be non-negative.
    pub fn new(center: Point, axes: [DVec3; 3], extents: [f64; 3]) -> Result<Self> {
        if !center.is_defined() || axes.iter().any(|axis| axis.is_nan()) || extents.iter().any(|e| e.is_nan()) {
            return Ok(Self::undefined());
        }

        if let Some(extent) = extents.iter().find(|extent| **extent < 0.0) {
            return Err(GeometryError::domain(format!(
                "cuboid extents must be non-negative, got {extent}"
            )));
        }

        let axes = [
            unit_direction(axes[0], "cuboid axis")?,
            unit_direction(axes[1], "cuboid axis")?,
            unit_direction(axes[2], "cuboid axis")?,
        ];

        for (first, second) in [(0, 1), (0, 2), (1, 2)] {
            if axes[first].dot(axes[second]).abs() > ROTATION_MATRIX_TOLERANCE {
                return Err(GeometryError::domain(format!(
                    "cuboid axes {first} and {second} are not orthogonal"
                )));
            }
        }

        Ok(Self { center, axes, extents })
    }

    /// Axis-aligned cube with half-extent `extent`.
    pub fn cube(center: Point, extent: f64) -> Result<Self> {
        Self::new(center, [DVec3::X, DVec3::Y, DVec3::Z], [extent; 3])
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            center: Point::undefined(),
            axes: [DVec3::NAN; 3],
            extents: [f64::NAN; 3],
        }
    }

    /// Returns true if center, axes and extents are defined.
    pub fn is_defined(&self) -> bool {
        self.center.is_defined()
            && self.axes.iter().all(|axis| !axis.is_nan())
            && self.extents.iter().all(|extent| !extent.is_nan())
    }

    /// Center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// First axis.
    pub fn first_axis(&self) -> DVec3 {
        self.axes[0]
    }

    /// Second axis.
    pub fn second_axis(&self) -> DVec3 {
        self.axes[1]
    }

    /// Third axis.
    pub fn third_axis(&self) -> DVec3 {
        self.axes[2]
    }

    /// Half-extent along the first axis.
    pub fn first_extent(&self) -> f64 {
        self.extents[0]
    }

    /// Half-extent along the second axis.
    pub fn second_extent(&self) -> f64 {
        self.extents[1]
    }

    /// Half-extent along the third axis.
    pub fn third_extent(&self) -> f64 {
        self.extents[2]
    }

    /// The eight corners, `center ± e₀a₀ ± e₁a₁ ± e₂a₂`.
    pub fn vertices(&self) -> Result<Vec<Point>> {
        ensure_defined(self.is_defined(), "Cuboid")?;

        let [a, b, c] = self.half_axes();
        let mut vertices = Vec::with_capacity(8);

        for sign_a in [1.0, -1.0] {
            for sign_b in [1.0, -1.0] {
                for sign_c in [1.0, -1.0] {
                    vertices.push(self.center + sign_a * a + sign_b * b + sign_c * c);
                }
            }
        }

        Ok(vertices)
    }

    /// Returns true if both cuboids have the same axes and extents and their
    /// centers are within `tolerance`.
    pub fn is_near(&self, other: &Cuboid, tolerance: f64) -> Result<bool> {
        ensure_defined(self.is_defined() && other.is_defined(), "Cuboid")?;

        Ok(self.center.is_near(&other.center, tolerance)?
            && self.axes == other.axes
            && self.extents == other.extents)
    }

    /// Returns true if the point lies in the closed box.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        ensure_defined(point.is_defined(), "Point")?;

        let local = self.to_local(point.as_vector());

        Ok((0..3).all(|index| local[index].abs() <= self.extents[index] + EPSILON))
    }

    /// Returns true if every point lies in the closed box.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        self.contains_all(point_set.iter())
    }

    /// Returns true if both endpoints lie in the box.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        ensure_defined(segment.is_defined(), "Segment")?;

        self.contains_all([segment.first_point(), segment.second_point()].iter())
    }

    /// Returns true if every vertex lies in the box.
    pub fn contains_line_string(&self, line_string: &LineString) -> Result<bool> {
        ensure_defined(line_string.is_defined(), "LineString")?;

        self.contains_all(line_string.iter())
    }

    /// Returns true if every corner of `other` lies in the box.
    pub fn contains_cuboid(&self, other: &Cuboid) -> Result<bool> {
        self.contains_all(other.vertices()?.iter())
    }

    /// Returns true if the point lies in the closed box.
    pub fn intersects_point(&self, point: &Point) -> Result<bool> {
        self.contains_point(point)
    }

    /// Returns true if any point lies in the closed box.
    pub fn intersects_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if self.contains_point(point)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if the line passes through the box.
    pub fn intersects_line(&self, line: &Line) -> Result<bool> {
        Ok(!self.intersection_with_line(line)?.is_empty())
    }

    /// Returns true if the ray passes through the box.
    pub fn intersects_ray(&self, ray: &Ray) -> Result<bool> {
        Ok(!self.intersection_with_ray(ray)?.is_empty())
    }

    /// Returns true if the segment passes through the box.
    pub fn intersects_segment(&self, segment: &Segment) -> Result<bool> {
        Ok(!self.intersection_with_segment(segment)?.is_empty())
    }

    /// Separating axis test.
    pub fn intersects_cuboid(&self, other: &Cuboid) -> Result<bool> {
        ensure_defined(self.is_defined() && other.is_defined(), "Cuboid")?;

        let offset = other.center - self.center;

        let mut candidates: Vec<DVec3> = self.axes.iter().chain(other.axes.iter()).copied().collect();
        for first in &self.axes {
            for second in &other.axes {
                let axis = first.cross(*second);

                if axis.length() > EPSILON {
                    candidates.push(axis.normalize());
                }
            }
        }

        let separated = candidates.iter().any(|axis| {
            offset.dot(*axis).abs() > self.projected_radius(*axis) + other.projected_radius(*axis) + EPSILON
        });

        Ok(!separated)
    }

    /// Part of the line inside the box: a Segment, a Point when the line
    /// grazes an edge or corner, or Empty.
    pub fn intersection_with_line(&self, line: &Line) -> Result<Intersection> {
        ensure_defined(line.is_defined(), "Line")?;

        self.clip(line.origin(), line.direction(), f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Part of the ray inside the box.
    pub fn intersection_with_ray(&self, ray: &Ray) -> Result<Intersection> {
        ensure_defined(ray.is_defined(), "Ray")?;

        self.clip(ray.origin(), ray.direction(), 0.0, f64::INFINITY)
    }

    /// Part of the segment inside the box.
    pub fn intersection_with_segment(&self, segment: &Segment) -> Result<Intersection> {
        ensure_defined(segment.is_defined(), "Segment")?;

        if segment.is_degenerate()? {
            return Ok(if self.contains_point(&segment.first_point())? {
                Intersection::point(segment.first_point())
            } else {
                Intersection::empty()
            });
        }

        let span = segment.second_point() - segment.first_point();

        self.clip(segment.first_point(), span, 0.0, 1.0)
    }

    /// Slab clipping of `origin + t direction` for `t` in `[lower, upper]`.
    fn clip(&self, origin: Point, direction: DVec3, lower: f64, upper: f64) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Cuboid")?;

        let local_origin = self.to_local(origin.as_vector());
        let local_direction = self.rotate_to_local(direction);

        let (mut entry, mut exit) = (lower, upper);

        for index in 0..3 {
            let extent = self.extents[index];

            if approx_zero(local_direction[index]) {
                if local_origin[index].abs() > extent + EPSILON {
                    return Ok(Intersection::empty());
                }
                continue;
            }

            let near = (-extent - local_origin[index]) / local_direction[index];
            let far = (extent - local_origin[index]) / local_direction[index];

            entry = entry.max(near.min(far));
            exit = exit.min(near.max(far));
        }

        if entry > exit + EPSILON {
            return Ok(Intersection::empty());
        }

        let first = origin + entry * direction;
        let second = origin + exit.max(entry) * direction;

        Ok(if first.is_near(&second, EPSILON)? {
            Intersection::point(first)
        } else {
            Intersection::segment(Segment::new(first, second))
        })
    }

    fn contains_all<'a>(&self, points: impl Iterator<Item = &'a Point>) -> Result<bool> {
        for point in points {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn half_axes(&self) -> [DVec3; 3] {
        [
            self.extents[0] * self.axes[0],
            self.extents[1] * self.axes[1],
            self.extents[2] * self.axes[2],
        ]
    }

    /// Half-length of the box projected on a unit axis.
    fn projected_radius(&self, axis: DVec3) -> f64 {
        self.half_axes().iter().map(|half_axis| half_axis.dot(axis).abs()).sum()
    }

    fn rotate_to_local(&self, vector: DVec3) -> DVec3 {
        DVec3::new(
            vector.dot(self.axes[0]),
            vector.dot(self.axes[1]),
            vector.dot(self.axes[2]),
        )
    }

    fn to_local(&self, position: DVec3) -> DVec3 {
        self.rotate_to_local(position - self.center.as_vector())
    }
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.center == other.center
            && self.axes == other.axes
            && self.extents == other.extents
    }
}

impl Transformable for Cuboid {
    /// Maps the center and each half-axis. The mapped axes must stay
    /// orthogonal.
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Cuboid")?;
        ensure_defined(transformation.is_defined(), "Transformation")?;

        let linear = transformation.linear_part();
        let mut axes = self.axes;
        let mut extents = self.extents;

        for index in 0..3 {
            let mapped = linear * self.axes[index];
            let stretch = mapped.length();

            if stretch < EPSILON {
                return Err(GeometryError::domain("transformation collapses a cuboid axis"));
            }

            axes[index] = mapped / stretch;
            extents[index] *= stretch;
        }

        *self = Self::new(transformation.apply_to_point(&self.center)?, axes, extents)?;

        Ok(())
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Cuboid {{ center: {}, extents: [{}, {}, {}] }}",
            self.center, self.extents[0], self.extents[1], self.extents[2]
        )
    }
}
