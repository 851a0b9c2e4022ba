//! # 3D Transformations
//!
//! Homogeneous 4x4 transformations, classified by structure.
//!
//! ## Classification
//!
//! [`Transformation::type_of_matrix`] inspects the matrix in this order:
//!
//! ```text
//! Identity → Translation → Rotation → Scaling → Reflection → Shear → Affine
//! ```
//!
//! Every class after Translation requires a zero translation column; a
//! translated non-identity linear block is Affine.

use std::fmt;
use std::ops::Mul;

use config::constants::{approx_zero, EPSILON, ROTATION_MATRIX_TOLERANCE};
use glam::{DMat3, DMat4, DVec3, DVec4};

use crate::d3::point::Point;
use crate::d3::rotation::{RotationMatrix, RotationVector};
use crate::error::{ensure_defined, GeometryError, Result};

// =============================================================================
// TRANSFORMATION TYPE
// =============================================================================

/// Structural class of a homogeneous matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformationType {
    /// Contains NaN
    Undefined,
    /// Exactly the identity
    Identity,
    /// Identity linear block, nonzero translation
    Translation,
    /// Orthonormal linear block with determinant +1
    Rotation,
    /// Diagonal invertible linear block
    Scaling,
    /// Orthonormal linear block with determinant -1
    Reflection,
    /// Triangular non-orthonormal linear block
    Shear,
    /// Anything else
    Affine,
}

impl TransformationType {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Identity => "Identity",
            Self::Translation => "Translation",
            Self::Rotation => "Rotation",
            Self::Scaling => "Scaling",
            Self::Reflection => "Reflection",
            Self::Shear => "Shear",
            Self::Affine => "Affine",
        }
    }
}

// =============================================================================
// TRANSFORMABLE
// =============================================================================

/// Geometry that can be mapped through a [`Transformation`].
///
/// The pure form is the default; the in-place form exists for callers that
/// own the value and want to avoid a copy.
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

// =============================================================================
// TRANSFORMATION
// =============================================================================

/// Homogeneous 3D transformation.
///
/// # Example
///
/// ```rust
/// use geometry_kernel::d3::{Point, Transformation, TransformationType};
/// use glam::DVec3;
///
/// let shift = Transformation::translation(DVec3::new(1.0, 0.0, 0.0));
/// assert_eq!(shift.kind(), TransformationType::Translation);
///
/// let moved = shift.apply_to_point(&Point::origin()).unwrap();
/// assert_eq!(moved, Point::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transformation {
    kind: TransformationType,
    matrix: DMat4,
}

impl Transformation {
    /// Wraps a homogeneous matrix and classifies it.
    ///
    /// The last row must be `[0, 0, 0, 1]`.
    pub fn new(matrix: DMat4) -> Result<Self> {
        if matrix.is_nan() {
            return Ok(Self::undefined());
        }

        if (matrix.row(3) - DVec4::W).abs().max_element() > EPSILON {
            return Err(GeometryError::domain(format!(
                "last row of a homogeneous matrix must be [0, 0, 0, 1], got {}",
                matrix.row(3)
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
            matrix: DMat4::NAN,
        }
    }

    /// Identity transformation.
    pub const fn identity() -> Self {
        Self {
            kind: TransformationType::Identity,
            matrix: DMat4::IDENTITY,
        }
    }

    /// Translation by `translation`.
    pub fn translation(translation: DVec3) -> Self {
        let matrix = DMat4::from_translation(translation);

        Self {
            kind: Self::type_of_matrix(&matrix),
            matrix,
        }
    }

    /// Active rotation that turns vectors by the rotation the matrix describes.
    ///
    /// Rotation matrices describe frame rotations, so the linear block is the
    /// transpose of `rotation_matrix`.
    pub fn rotation(rotation_matrix: &RotationMatrix) -> Result<Self> {
        ensure_defined(rotation_matrix.is_defined(), "RotationMatrix")?;

        let matrix = DMat4::from_mat3(rotation_matrix.transpose().matrix());

        Ok(Self {
            kind: Self::type_of_matrix(&matrix),
            matrix,
        })
    }

    /// Rotation about the axis through `point`.
    pub fn rotation_around(point: &Point, rotation_vector: &RotationVector) -> Result<Self> {
        ensure_defined(point.is_defined(), "Point")?;

        let rotation = Self::rotation(&RotationMatrix::from_rotation_vector(rotation_vector)?)?;

        Self::translation(point.as_vector())
            .compose(&rotation)?
            .compose(&Self::translation(-point.as_vector()))
    }

    /// Scaling by per-axis factors, all nonzero.
    pub fn scaling(factors: DVec3) -> Result<Self> {
        if factors.is_nan() {
            return Ok(Self::undefined());
        }

        if factors.abs().min_element() < EPSILON {
            return Err(GeometryError::domain("scaling factors must be nonzero"));
        }

        Self::new(DMat4::from_scale(factors))
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
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Upper-left 3x3 block.
    pub fn linear_part(&self) -> DMat3 {
        DMat3::from_mat4(self.matrix)
    }

    /// Translation column.
    pub fn translation_part(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
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

        Ok(Point::from_vector(homogeneous.truncate() / homogeneous.w))
    }

    /// Maps a free vector, ignoring the translation.
    pub fn apply_to_vector(&self, vector: DVec3) -> Result<DVec3> {
        ensure_defined(self.is_defined(), "Transformation")?;

        if vector.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }

        Ok(self.matrix.transform_vector3(vector))
    }

    /// Classifies a homogeneous matrix by structure.
    pub fn type_of_matrix(matrix: &DMat4) -> TransformationType {
        if matrix.is_nan() {
            return TransformationType::Undefined;
        }

        let linear = DMat3::from_mat4(*matrix);
        let translation = matrix.w_axis.truncate();
        let is_translated = translation.abs().max_element() > EPSILON;

        if linear.abs_diff_eq(DMat3::IDENTITY, EPSILON) {
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

        if orthonormal && determinant > 0.0 {
            return TransformationType::Rotation;
        }

        if is_diagonal(&linear) && !approx_zero(determinant) {
            return TransformationType::Scaling;
        }

        if orthonormal {
            return TransformationType::Reflection;
        }

        if is_triangular(&linear) {
            return TransformationType::Shear;
        }

        TransformationType::Affine
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

        for index in 0..4 {
            let row = self.matrix.row(index);
            writeln!(f, "[{}, {}, {}, {}]", row.x, row.y, row.z, row.w)?;
        }

        Ok(())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// `LᵀL ≈ I`.
pub(crate) fn is_orthonormal(linear: &DMat3, tolerance: f64) -> bool {
    (linear.transpose() * *linear).abs_diff_eq(DMat3::IDENTITY, tolerance)
}

fn is_diagonal(linear: &DMat3) -> bool {
    off_diagonal(linear).iter().all(|value| approx_zero(*value))
}

/// Upper or lower triangular with at least one nonzero off-diagonal term.
fn is_triangular(linear: &DMat3) -> bool {
    let [upper_01, upper_02, upper_12, lower_10, lower_20, lower_21] = off_diagonal(linear);

    let upper = [upper_01, upper_02, upper_12];
    let lower = [lower_10, lower_20, lower_21];

    let is_zero = |terms: &[f64; 3]| terms.iter().all(|value| approx_zero(*value));

    (is_zero(&lower) && !is_zero(&upper)) || (is_zero(&upper) && !is_zero(&lower))
}

/// `[m01, m02, m12, m10, m20, m21]`.
fn off_diagonal(linear: &DMat3) -> [f64; 6] {
    let m = |row: usize, column: usize| linear.col(column)[row];

    [m(0, 1), m(0, 2), m(1, 2), m(1, 0), m(2, 0), m(2, 1)]
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
mod tests;
