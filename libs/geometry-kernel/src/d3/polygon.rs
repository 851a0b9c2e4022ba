//! # 3D Polygon
//!
//! Planar polygon embedded in 3D space. The shape is a [`d2::Polygon`]
//! expressed in a local frame `(origin, x_axis, y_axis)`; a local vertex
//! `(u, v)` lives at `origin + u x_axis + v y_axis`.
//!
//! Keeping the 2D polygon around lets every ring and containment query run
//! on the planar implementation.

use std::fmt;

use config::constants::{EPSILON, ROTATION_MATRIX_TOLERANCE};
use glam::DVec3;

use crate::d2;
use crate::d3::line::unit_direction;
use crate::d3::point::Point;
use crate::d3::segment::Segment;
use crate::d3::transformation::{ensure_rigid, Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Planar polygon with an orthonormal embedding frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    polygon2d: d2::Polygon,
    origin: Point,
    x_axis: DVec3,
    y_axis: DVec3,
}

impl Polygon {
    /// Embeds `polygon2d` in the plane spanned by `x_axis` and `y_axis`.
    ///
    /// The axes are normalized and must be orthogonal.
    pub fn new(polygon2d: d2::Polygon, origin: Point, x_axis: DVec3, y_axis: DVec3) -> Result<Self> {
        if !polygon2d.is_defined() || !origin.is_defined() || x_axis.is_nan() || y_axis.is_nan() {
            return Ok(Self::undefined());
        }

        let x_axis = unit_direction(x_axis, "polygon x axis")?;
        let y_axis = unit_direction(y_axis, "polygon y axis")?;

        if x_axis.dot(y_axis).abs() > ROTATION_MATRIX_TOLERANCE {
            return Err(GeometryError::domain("polygon axes must be orthogonal"));
        }

        Ok(Self {
            polygon2d,
            origin,
            x_axis,
            y_axis,
        })
    }

    /// Undefined sentinel.
    pub fn undefined() -> Self {
        Self {
            polygon2d: d2::Polygon::undefined(),
            origin: Point::undefined(),
            x_axis: DVec3::NAN,
            y_axis: DVec3::NAN,
        }
    }

    /// Returns true if the planar polygon and the frame are defined.
    pub fn is_defined(&self) -> bool {
        self.polygon2d.is_defined() && self.origin.is_defined() && !self.x_axis.is_nan() && !self.y_axis.is_nan()
    }

    /// Planar polygon in local coordinates.
    pub fn polygon2d(&self) -> &d2::Polygon {
        &self.polygon2d
    }

    /// Frame origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Unit x axis of the frame.
    pub fn x_axis(&self) -> DVec3 {
        self.x_axis
    }

    /// Unit y axis of the frame.
    pub fn y_axis(&self) -> DVec3 {
        self.y_axis
    }

    /// Unit normal `x_axis × y_axis`.
    pub fn normal_vector(&self) -> Result<DVec3> {
        self.ensure_defined()?;

        Ok(self.x_axis.cross(self.y_axis).normalize())
    }

    /// Number of vertices over all rings.
    pub fn vertex_count(&self) -> usize {
        self.polygon2d.vertex_count()
    }

    /// Number of edges over all rings.
    pub fn edge_count(&self) -> usize {
        self.polygon2d.edge_count()
    }

    /// Vertices in space, outer ring first.
    pub fn vertices(&self) -> Result<Vec<Point>> {
        self.ensure_defined()?;

        Ok(self.polygon2d.vertices().iter().map(|vertex| self.lift(vertex)).collect())
    }

    /// Edges in space, outer ring first.
    pub fn edges(&self) -> Result<Vec<Segment>> {
        self.ensure_defined()?;

        Ok(self.polygon2d.edges().iter().map(|edge| self.lift_segment(edge)).collect())
    }

    /// Edge at `index`; the outer ring's edges come first.
    pub fn edge_at(&self, index: usize) -> Result<Segment> {
        self.ensure_defined()?;

        Ok(self.lift_segment(&self.polygon2d.edge_at(index)?))
    }

    /// Same planar shape in a frame whose origin and axes are within
    /// `tolerance`.
    pub fn is_near(&self, other: &Polygon, tolerance: f64) -> Result<bool> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        Ok(self.origin.is_near(&other.origin, tolerance)?
            && (self.x_axis - other.x_axis).length() <= tolerance
            && (self.y_axis - other.y_axis).length() <= tolerance
            && self.polygon2d.is_near(&other.polygon2d, tolerance)?)
    }

    /// Returns true if the point lies in the polygon's plane, inside or on
    /// the boundary of the polygon.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined()?;
        ensure_defined(point.is_defined(), "Point")?;

        let offset = *point - self.origin;
        if offset.dot(self.normal_vector()?).abs() > EPSILON * offset.length().max(1.0) {
            return Ok(false);
        }

        self.polygon2d.contains_point(&self.project(point))
    }

    /// Local coordinates of a point, dropping its offset from the plane.
    pub(crate) fn project(&self, point: &Point) -> d2::Point {
        let offset = *point - self.origin;

        d2::Point::new(offset.dot(self.x_axis), offset.dot(self.y_axis))
    }

    fn lift(&self, vertex: &d2::Point) -> Point {
        self.origin + self.x_axis * vertex.x() + self.y_axis * vertex.y()
    }

    fn lift_segment(&self, edge: &d2::Segment) -> Segment {
        Segment::new(self.lift(&edge.first_point()), self.lift(&edge.second_point()))
    }

    fn ensure_defined(&self) -> Result<()> {
        ensure_defined(self.is_defined(), "Polygon")
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.polygon2d == other.polygon2d
            && self.origin == other.origin
            && self.x_axis == other.x_axis
            && self.y_axis == other.y_axis
    }
}

impl Transformable for Polygon {
    /// Moves the frame; the planar shape is untouched.
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        self.ensure_defined()?;
        ensure_rigid(transformation, "Polygon")?;

        self.origin = transformation.apply_to_point(&self.origin)?;
        self.x_axis = transformation.apply_to_vector(self.x_axis)?.normalize();
        self.y_axis = transformation.apply_to_vector(self.y_axis)?.normalize();

        Ok(())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "Polygon {{ {}, origin: {}, x axis: [{}, {}, {}], y axis: [{}, {}, {}] }}",
            self.polygon2d,
            self.origin,
            self.x_axis.x,
            self.x_axis.y,
            self.x_axis.z,
            self.y_axis.x,
            self.y_axis.y,
            self.y_axis.z
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::angle::Angle;
    use crate::d3::rotation::RotationVector;

    fn unit_square_in_yz() -> Polygon {
        let square = d2::Polygon::simple(vec![
            d2::Point::new(0.0, 0.0),
            d2::Point::new(1.0, 0.0),
            d2::Point::new(1.0, 1.0),
            d2::Point::new(0.0, 1.0),
        ])
        .unwrap();

        Polygon::new(square, Point::new(2.0, 0.0, 0.0), DVec3::Y, DVec3::Z).unwrap()
    }

    #[test]
    fn test_embedding() {
        let polygon = unit_square_in_yz();

        assert_eq!(polygon.normal_vector().unwrap(), DVec3::X);
        assert_eq!(polygon.vertices().unwrap()[2], Point::new(2.0, 1.0, 1.0));
        assert_eq!(
            polygon.edge_at(0).unwrap(),
            Segment::new(Point::new(2.0, 0.0, 0.0), Point::new(2.0, 1.0, 0.0))
        );
        assert_eq!(polygon.edges().unwrap().len(), 4);
    }

    #[test]
    fn test_skewed_axes_rejected() {
        let square = unit_square_in_yz().polygon2d().clone();

        assert!(Polygon::new(square, Point::origin(), DVec3::X, DVec3::new(1.0, 1.0, 0.0)).is_err());
    }

    #[test]
    fn test_contains_point() {
        let polygon = unit_square_in_yz();

        assert!(polygon.contains_point(&Point::new(2.0, 0.5, 0.5)).unwrap());
        assert!(!polygon.contains_point(&Point::new(2.1, 0.5, 0.5)).unwrap());
        assert!(!polygon.contains_point(&Point::new(2.0, 1.5, 0.5)).unwrap());
    }

    #[test]
    fn test_rotation_moves_frame() {
        let quarter_turn = Transformation::rotation_around(
            &Point::origin(),
            &RotationVector::new(DVec3::Z, Angle::degrees(90.0)).unwrap(),
        )
        .unwrap();

        let turned = unit_square_in_yz().apply_transformation(&quarter_turn).unwrap();
        let normal = turned.normal_vector().unwrap();

        assert_abs_diff_eq!(normal.x.abs() + normal.y.abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normal.z, 0.0, epsilon = 1e-12);
        assert!(unit_square_in_yz()
            .apply_transformation(&Transformation::scaling(DVec3::splat(2.0)).unwrap())
            .is_err());
    }
}
