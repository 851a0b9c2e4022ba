//! Rotation matrix (direction cosine matrix).
//!
//! A [`RotationMatrix`] maps coordinates expressed in a reference frame to
//! coordinates in the rotated frame. Its transpose is the active rotation used
//! by [`Transformation::rotation`](crate::d3::Transformation::rotation).

use std::fmt;
use std::ops::Mul;

use config::constants::ROTATION_MATRIX_TOLERANCE;
use glam::{DMat3, DQuat, DVec3};

use crate::angle::Angle;
use crate::d3::rotation::{AxisSequence, EulerAngle, Quaternion, RotationVector};
use crate::error::{ensure_defined, GeometryError, Result};

/// Orthonormal 3×3 matrix with determinant +1.
///
/// # Example
///
/// ```rust
/// use geometry_kernel::d3::rotation::{Quaternion, RotationMatrix};
/// use glam::DMat3;
///
/// let matrix = RotationMatrix::from_quaternion(&Quaternion::unit()).unwrap();
/// assert_eq!(matrix.matrix(), DMat3::IDENTITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix {
    matrix: DMat3,
}

impl RotationMatrix {
    /// Wraps `matrix` after checking that it is a proper rotation.
    ///
    /// Columns must be unit length and mutually orthogonal within
    /// `ROTATION_MATRIX_TOLERANCE`, and the determinant must be +1.
    pub fn from_matrix(matrix: DMat3) -> Result<Self> {
        if matrix.is_nan() {
            return Ok(Self::undefined());
        }

        let columns = [matrix.x_axis, matrix.y_axis, matrix.z_axis];

        for (index, column) in columns.iter().enumerate() {
            if (column.length() - 1.0).abs() > ROTATION_MATRIX_TOLERANCE {
                return Err(GeometryError::domain(format!(
                    "not a rotation: column {index} has norm {}",
                    column.length()
                )));
            }
        }

        for (first, second) in [(0, 1), (0, 2), (1, 2)] {
            if columns[first].dot(columns[second]).abs() > ROTATION_MATRIX_TOLERANCE {
                return Err(GeometryError::domain(format!(
                    "not a rotation: columns {first} and {second} are not orthogonal"
                )));
            }
        }

        if matrix.determinant() < 0.0 {
            return Err(GeometryError::domain("not a rotation: determinant is -1"));
        }

        Ok(Self { matrix })
    }

    /// Builds the matrix from nine row-major elements.
    pub fn new(elements: [f64; 9]) -> Result<Self> {
        Self::rows(
            DVec3::new(elements[0], elements[1], elements[2]),
            DVec3::new(elements[3], elements[4], elements[5]),
            DVec3::new(elements[6], elements[7], elements[8]),
        )
    }

    /// Builds the matrix from its rows.
    pub fn rows(first: DVec3, second: DVec3, third: DVec3) -> Result<Self> {
        Self::from_matrix(DMat3::from_cols(first, second, third).transpose())
    }

    /// Builds the matrix from its columns.
    pub fn columns(first: DVec3, second: DVec3, third: DVec3) -> Result<Self> {
        Self::from_matrix(DMat3::from_cols(first, second, third))
    }

    /// Identity.
    pub const fn unit() -> Self {
        Self {
            matrix: DMat3::IDENTITY,
        }
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self { matrix: DMat3::NAN }
    }

    /// Elementary frame rotation about X.
    pub fn rx(angle: &Angle) -> Self {
        Self {
            matrix: DMat3::from_rotation_x(angle.in_radians()).transpose(),
        }
    }

    /// Elementary frame rotation about Y.
    pub fn ry(angle: &Angle) -> Self {
        Self {
            matrix: DMat3::from_rotation_y(angle.in_radians()).transpose(),
        }
    }

    /// Elementary frame rotation about Z.
    pub fn rz(angle: &Angle) -> Self {
        Self {
            matrix: DMat3::from_rotation_z(angle.in_radians()).transpose(),
        }
    }

    /// Direction cosine matrix of the quaternion.
    pub fn from_quaternion(quaternion: &Quaternion) -> Result<Self> {
        let q = quaternion.normalized()?;
        let hamilton = DQuat::from_xyzw(q.x(), q.y(), q.z(), q.s());

        Ok(Self {
            matrix: DMat3::from_quat(hamilton).transpose(),
        })
    }

    /// Direction cosine matrix of the rotation vector.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> Result<Self> {
        ensure_defined(rotation_vector.is_defined(), "RotationVector")?;

        let matrix = DMat3::from_axis_angle(rotation_vector.axis(), rotation_vector.angle().in_radians());

        Ok(Self {
            matrix: matrix.transpose(),
        })
    }

    /// Direction cosine matrix of the Euler angle triplet.
    ///
    /// The first angle is applied first: for `ZYX`, `R = Rx(ψ) Ry(θ) Rz(φ)`.
    pub fn from_euler_angle(euler_angle: &EulerAngle) -> Result<Self> {
        ensure_defined(euler_angle.is_defined(), "EulerAngle")?;

        let (phi, theta, psi) = (euler_angle.phi(), euler_angle.theta(), euler_angle.psi());

        let composed = match euler_angle.axis_sequence() {
            AxisSequence::XYZ => Self::rz(&psi) * Self::ry(&theta) * Self::rx(&phi),
            AxisSequence::ZXY => Self::ry(&psi) * Self::rx(&theta) * Self::rz(&phi),
            AxisSequence::ZYX => Self::rx(&psi) * Self::ry(&theta) * Self::rz(&phi),
        };

        Ok(composed)
    }

    /// Returns true unless an element is NaN.
    pub fn is_defined(&self) -> bool {
        !self.matrix.is_nan()
    }

    /// Underlying matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Element at `(row, column)`; both indices must be below 3.
    pub fn at(&self, row: usize, column: usize) -> f64 {
        self.matrix.col(column)[row]
    }

    /// Row `index`.
    pub fn row_at(&self, index: usize) -> Result<DVec3> {
        if index > 2 {
            return Err(GeometryError::out_of_bounds(index, 3));
        }

        Ok(self.matrix.row(index))
    }

    /// Column `index`.
    pub fn column_at(&self, index: usize) -> Result<DVec3> {
        if index > 2 {
            return Err(GeometryError::out_of_bounds(index, 3));
        }

        Ok(self.matrix.col(index))
    }

    /// Inverse rotation.
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

impl Mul<DVec3> for RotationMatrix {
    type Output = DVec3;

    fn mul(self, rhs: DVec3) -> DVec3 {
        self.matrix * rhs
    }
}

impl TryFrom<&Quaternion> for RotationMatrix {
    type Error = GeometryError;

    fn try_from(quaternion: &Quaternion) -> Result<Self> {
        Self::from_quaternion(quaternion)
    }
}

impl TryFrom<&RotationVector> for RotationMatrix {
    type Error = GeometryError;

    fn try_from(rotation_vector: &RotationVector) -> Result<Self> {
        Self::from_rotation_vector(rotation_vector)
    }
}

impl fmt::Display for RotationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        let rows = [self.matrix.row(0), self.matrix.row(1), self.matrix.row(2)];
        f.write_str("[")?;
        for (index, row) in rows.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "[{:.p$}, {:.p$}, {:.p$}]", row.x, row.y, row.z)?,
                None => write!(f, "[{}, {}, {}]", row.x, row.y, row.z)?,
            }
        }
        f.write_str("]")
    }
}
