//! # 2D Transformations
//!
//! Homogeneous 3x3 transformations of the plane. Classification follows the
//! same priority order as the 3D transformations and reuses
//! [`TransformationType`].

use std::fmt;
use std::ops::Mul;

use config::constants::{approx_zero, EPSILON, ROTATION_MATRIX_TOLERANCE};
use glam::{DMat2, DMat3, DVec2, DVec3};

use crate::angle::Angle;
use crate::d2::point::Point;
use crate::d3::TransformationType;
use crate::error::{ensure_defined, GeometryError, Result};

/// Planar geometry that can be mapped through a [`Transformation`].
pub trait Transformable: Sized + Clone {
    /// Transforms the value in place.
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()>;

    /// Returns a transformed copy of the value.
    fn apply_transformation(&self, transformation: &Transformation) -> Result<Self> {
        let mut transformed = self.clone();
        transformed.apply_transformation_mut(transformation)?;
        Ok(transformed)
    }
}

/// Homogeneous 2D transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformation {
    kind: TransformationType,
    matrix: DMat3,
}

impl Transformation {
    /// Wraps a homogeneous matrix and classifies it. The last row must be
    /// `[0, 0, 1]`.
    pub fn new(matrix: DMat3) -> Result<Self> {
        if matrix.is_nan() {
            return Ok(Self::undefined());
        }

        if (matrix.row(2) - DVec3::Z).abs().max_element() > EPSILON {
            return Err(GeometryError::domain(format!(
                "last row of a homogeneous matrix must be [0, 0, 1], got {}",
                matrix.row(2)
            )));
        }

        Ok(Self {
            kind: Self::type_of_matrix(&matrix),
            matrix,
        })
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            kind: TransformationType::Undefined,
            matrix: DMat3::NAN,
        }
    }

    /// Identity transformation.
    pub const fn identity() -> Self {
        Self {
            kind: TransformationType::Identity,
            matrix: DMat3::IDENTITY,
        }
    }

    /// Translation by `translation`.
    pub fn translation(translation: DVec2) -> Self {
        let matrix = DMat3::from_translation(translation);

        Self {
            kind: Self::type_of_matrix(&matrix),
            matrix,
        }
    }

    /// Counterclockwise rotation about the origin.
    pub fn rotation(angle: &Angle) -> Result<Self> {
        ensure_defined(angle.is_defined(), "Angle")?;

        Self::new(DMat3::from_angle(angle.in_radians()))
    }

    /// Counterclockwise rotation about `point`.
    pub fn rotation_around(point: &Point, angle: &Angle) -> Result<Self> {
        ensure_defined(point.is_defined(), "Point")?;

        Self::translation(point.as_vector())
            .compose(&Self::rotation(angle)?)?
            .compose(&Self::translation(-point.as_vector()))
    }

    /// Scaling by per-axis factors, all nonzero.
    pub fn scaling(factors: DVec2) -> Result<Self> {
        if factors.is_nan() {
            return Ok(Self::undefined());
        }

        if factors.abs().min_element() < EPSILON {
            return Err(GeometryError::domain("scaling factors must be nonzero"));
        }

        Self::new(DMat3::from_scale(factors))
    }

    /// Returns true unless the matrix contains NaN.
    pub fn is_defined(&self) -> bool {
        self.kind != TransformationType::Undefined
    }

    /// Returns true for the identity.
    pub fn is_identity(&self) -> bool {
        self.kind == TransformationType::Identity
    }

    /// Returns true if the linear block preserves distances.
    pub fn is_rigid(&self) -> bool {
        self.is_defined() && is_orthonormal(&self.linear_part(), ROTATION_MATRIX_TOLERANCE)
    }

    /// Structural class.
    pub fn kind(&self) -> TransformationType {
        self.kind
    }

    /// Homogeneous matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Upper-left 2x2 block.
    pub fn linear_part(&self) -> DMat2 {
        DMat2::from_mat3(self.matrix)
    }

    /// Translation column.
    pub fn translation_part(&self) -> DVec2 {
        self.matrix.z_axis.truncate()
    }

    /// Inverse transformation, re-classified.
    pub fn inverse(&self) -> Result<Self> {
        ensure_defined(self.is_defined(), "Transformation")?;

        if approx_zero(self.matrix.determinant()) {
            return Err(GeometryError::domain("transformation matrix is singular"));
        }

        Self::new(self.matrix.inverse())
    }

    /// `self ∘ other`: applies `other` first, then `self`.
    pub fn compose(&self, other: &Transformation) -> Result<Self> {
        ensure_defined(self.is_defined() && other.is_defined(), "Transformation")?;

        Self::new(self.matrix * other.matrix)
    }

    /// Maps a point, including the translation.
    pub fn apply_to_point(&self, point: &Point) -> Result<Point> {
        ensure_defined(self.is_defined(), "Transformation")?;
        ensure_defined(point.is_defined(), "Point")?;

        let homogeneous = self.matrix * point.as_vector().extend(1.0);

        Ok(Point::from_vector(homogeneous.truncate() / homogeneous.z))
    }

    /// Maps a free vector, ignoring the translation.
    pub fn apply_to_vector(&self, vector: DVec2) -> Result<DVec2> {
        ensure_defined(self.is_defined(), "Transformation")?;

        if vector.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }

        Ok(self.matrix.transform_vector2(vector))
    }

    /// Classifies a homogeneous matrix by structure.
    pub fn type_of_matrix(matrix: &DMat3) -> TransformationType {
        if matrix.is_nan() {
            return TransformationType::Undefined;
        }

        let linear = DMat2::from_mat3(*matrix);
        let is_translated = matrix.z_axis.truncate().abs().max_element() > EPSILON;

        if linear.abs_diff_eq(DMat2::IDENTITY, EPSILON) {
            return if is_translated {
                TransformationType::Translation
            } else {
                TransformationType::Identity
            };
        }

        if is_translated {
            return TransformationType::Affine;
        }

        let determinant = linear.determinant();
        let orthonormal = is_orthonormal(&linear, ROTATION_MATRIX_TOLERANCE);
        let (upper, lower) = (linear.y_axis.x, linear.x_axis.y);

        if orthonormal && determinant > 0.0 {
            TransformationType::Rotation
        } else if approx_zero(upper) && approx_zero(lower) && !approx_zero(determinant) {
            TransformationType::Scaling
        } else if orthonormal {
            TransformationType::Reflection
        } else if approx_zero(upper) != approx_zero(lower) {
            TransformationType::Shear
        } else {
            TransformationType::Affine
        }
    }
}

/// Composition; undefined if either side is.
impl Mul for Transformation {
    type Output = Transformation;

    fn mul(self, rhs: Transformation) -> Transformation {
        self.compose(&rhs).unwrap_or_else(|_| Transformation::undefined())
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.name())?;

        if !self.is_defined() {
            return Ok(());
        }

        for index in 0..3 {
            let row = self.matrix.row(index);
            writeln!(f, "[{}, {}, {}]", row.x, row.y, row.z)?;
        }

        Ok(())
    }
}

fn is_orthonormal(linear: &DMat2, tolerance: f64) -> bool {
    (linear.transpose() * *linear).abs_diff_eq(DMat2::IDENTITY, tolerance)
}

/// Fails with a domain error unless the transformation is rigid.
pub(crate) fn ensure_rigid(transformation: &Transformation, what: &str) -> Result<()> {
    ensure_defined(transformation.is_defined(), "Transformation")?;

    if transformation.is_rigid() {
        Ok(())
    } else {
        Err(GeometryError::domain(format!(
            "{what} only supports rigid transformations, got {}",
            transformation.kind().name()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point_near(actual: Point, expected: Point) {
        assert!(
            actual.is_near(&expected, 1e-12).unwrap(),
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_classification() {
        assert_eq!(Transformation::identity().kind(), TransformationType::Identity);
        assert_eq!(
            Transformation::translation(DVec2::new(1.0, 2.0)).kind(),
            TransformationType::Translation
        );
        assert_eq!(
            Transformation::rotation(&Angle::degrees(30.0)).unwrap().kind(),
            TransformationType::Rotation
        );
        assert_eq!(
            Transformation::scaling(DVec2::new(2.0, 3.0)).unwrap().kind(),
            TransformationType::Scaling
        );
        assert_eq!(
            Transformation::new(DMat3::from_cols(DVec3::Y, DVec3::X, DVec3::Z)).unwrap().kind(),
            TransformationType::Reflection
        );
        assert_eq!(
            Transformation::new(DMat3::from_cols(DVec3::X, DVec3::new(0.5, 1.0, 0.0), DVec3::Z))
                .unwrap()
                .kind(),
            TransformationType::Shear
        );
        assert_eq!(
            Transformation::rotation_around(&Point::new(1.0, 0.0), &Angle::degrees(90.0))
                .unwrap()
                .kind(),
            TransformationType::Affine
        );
    }

    #[test]
    fn test_rotation_is_counterclockwise() {
        let quarter = Transformation::rotation(&Angle::degrees(90.0)).unwrap();

        assert_point_near(quarter.apply_to_point(&Point::new(1.0, 0.0)).unwrap(), Point::new(0.0, 1.0));
    }

    #[test]
    fn test_rotation_around_keeps_center() {
        let center = Point::new(1.0, 1.0);
        let half_turn = Transformation::rotation_around(&center, &Angle::degrees(180.0)).unwrap();

        assert_point_near(half_turn.apply_to_point(&center).unwrap(), center);
        assert_point_near(
            half_turn.apply_to_point(&Point::new(2.0, 1.0)).unwrap(),
            Point::new(0.0, 1.0),
        );
    }

    #[test]
    fn test_inverse_round_trip() {
        let transformation = Transformation::rotation_around(&Point::new(3.0, -1.0), &Angle::degrees(37.0)).unwrap();
        let point = Point::new(0.25, 7.5);

        let back = transformation
            .inverse()
            .unwrap()
            .apply_to_point(&transformation.apply_to_point(&point).unwrap())
            .unwrap();

        assert!(back.is_near(&point, 1e-9).unwrap());
    }

    #[test]
    fn test_vector_ignores_translation() {
        let shift = Transformation::translation(DVec2::new(5.0, 5.0));

        assert_eq!(shift.apply_to_vector(DVec2::X).unwrap(), DVec2::X);
        assert!(Transformation::scaling(DVec2::new(0.0, 1.0)).is_err());
        assert!(Transformation::undefined().apply_to_point(&Point::origin()).is_err());
    }
}
