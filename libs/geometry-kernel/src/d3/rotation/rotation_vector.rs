//! Axis-angle rotation.

use std::f64::consts::{PI, TAU};
use std::fmt;

use config::constants::{EPSILON, ROTATION_MATRIX_TOLERANCE};
use glam::DVec3;

use crate::angle::{Angle, AngleUnit};
use crate::d3::rotation::{EulerAngle, Quaternion, RotationMatrix};
use crate::error::{ensure_defined, GeometryError, Result};

/// Rotation of `angle` about a unit `axis`.
///
/// `(axis, θ)` and `(-axis, -θ)` denote the same rotation; [`RotationVector::rectified`]
/// picks the representative with `θ` in `[0, π]`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationVector {
    axis: DVec3,
    angle: Angle,
}

impl RotationVector {
    /// Creates a rotation vector.
    ///
    /// The axis must have unit length (within `ROTATION_MATRIX_TOLERANCE`);
    /// it is renormalized.
    pub fn new(axis: DVec3, angle: Angle) -> Result<Self> {
        if axis.is_nan() || !angle.is_defined() {
            return Ok(Self::undefined());
        }

        if (axis.length() - 1.0).abs() > ROTATION_MATRIX_TOLERANCE {
            return Err(GeometryError::domain(format!(
                "rotation axis has norm {}, expected 1",
                axis.length()
            )));
        }

        Ok(Self {
            axis: axis.normalize(),
            angle,
        })
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self {
            axis: DVec3::NAN,
            angle: Angle::undefined(),
        }
    }

    /// Identity rotation: zero angle about Z.
    pub const fn unit() -> Self {
        Self {
            axis: DVec3::Z,
            angle: Angle::zero(),
        }
    }

    /// Rotation about X.
    pub const fn x(angle: Angle) -> Self {
        Self { axis: DVec3::X, angle }
    }

    /// Rotation about Y.
    pub const fn y(angle: Angle) -> Self {
        Self { axis: DVec3::Y, angle }
    }

    /// Rotation about Z.
    pub const fn z(angle: Angle) -> Self {
        Self { axis: DVec3::Z, angle }
    }

    /// Rotation whose axis is the direction of `vector` and whose angle is its
    /// norm, read in `unit`. A zero vector yields [`RotationVector::unit`].
    pub fn from_vector(vector: DVec3, unit: AngleUnit) -> Result<Self> {
        if vector.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }

        let norm = vector.length();
        if norm < EPSILON {
            return Ok(Self::unit());
        }

        Ok(Self {
            axis: vector / norm,
            angle: Angle::new(norm, unit),
        })
    }

    /// Rotation vector of the quaternion, with angle in `[0, π]`.
    ///
    /// The identity quaternion yields [`RotationVector::unit`] instead of an
    /// indeterminate axis.
    pub fn from_quaternion(quaternion: &Quaternion) -> Result<Self> {
        let q = quaternion.normalized()?.rectified();

        let vector = q.vector_part();
        let sine = vector.length();
        if sine < f64::MIN_POSITIVE {
            return Ok(Self::unit());
        }

        Ok(Self {
            axis: vector / sine,
            angle: Angle::radians(2.0 * sine.atan2(q.s())),
        })
    }

    /// Rotation vector of the matrix, extracted through its quaternion so that
    /// half-turns keep a well defined axis.
    pub fn from_rotation_matrix(rotation_matrix: &RotationMatrix) -> Result<Self> {
        Self::from_quaternion(&Quaternion::from_rotation_matrix(rotation_matrix)?)
    }

    /// Rotation vector of the Euler angle triplet.
    pub fn from_euler_angle(euler_angle: &EulerAngle) -> Result<Self> {
        Self::from_quaternion(&Quaternion::from_euler_angle(euler_angle)?)
    }

    /// Returns true if both axis and angle are defined.
    pub fn is_defined(&self) -> bool {
        !self.axis.is_nan() && self.angle.is_defined()
    }

    /// Rotation axis.
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Rotation angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// `axis * angle`, with the angle read in `unit`.
    pub fn to_vector(&self, unit: AngleUnit) -> DVec3 {
        self.axis * self.angle.in_unit(unit)
    }

    /// Equivalent rotation vector with angle in `[0, π]`.
    pub fn rectified(&self) -> Result<Self> {
        ensure_defined(self.is_defined(), "RotationVector")?;

        let mut axis = self.axis;
        let mut radians = Angle::reduce_range(self.angle.in_radians(), 0.0, TAU);

        if radians > PI {
            axis = -axis;
            radians = TAU - radians;
        }

        Ok(Self {
            axis,
            angle: Angle::radians(radians),
        })
    }

    /// Returns true if the rotations differ by at most `angular_tolerance`.
    pub fn is_near(&self, other: &RotationVector, angular_tolerance: &Angle) -> Result<bool> {
        Quaternion::from_rotation_vector(self)?
            .is_near(&Quaternion::from_rotation_vector(other)?, angular_tolerance)
    }
}

impl PartialEq for RotationVector {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }

        if self.angle.is_zero() && other.angle.is_zero() {
            return true;
        }

        (self.axis == other.axis && self.angle == other.angle)
            || (self.axis == -other.axis && self.angle == -other.angle)
    }
}

impl TryFrom<&Quaternion> for RotationVector {
    type Error = GeometryError;

    fn try_from(quaternion: &Quaternion) -> Result<Self> {
        Self::from_quaternion(quaternion)
    }
}

impl TryFrom<&RotationMatrix> for RotationVector {
    type Error = GeometryError;

    fn try_from(rotation_matrix: &RotationMatrix) -> Result<Self> {
        Self::from_rotation_matrix(rotation_matrix)
    }
}

impl fmt::Display for RotationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "[{}, {}, {}] : {}",
            self.axis.x, self.axis.y, self.axis.z, self.angle
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_rejects_non_unit_axis() {
        assert!(matches!(
            RotationVector::new(DVec3::new(1.0, 1.0, 0.0), Angle::degrees(10.0)),
            Err(GeometryError::Domain { .. })
        ));
        assert!(RotationVector::new(DVec3::ZERO, Angle::degrees(10.0)).is_err());
    }

    #[test]
    fn test_from_vector() {
        let rv = RotationVector::from_vector(DVec3::new(0.0, 0.0, 90.0), AngleUnit::Degree).unwrap();
        assert_eq!(rv.axis(), DVec3::Z);
        assert_abs_diff_eq!(rv.angle().in_degrees(), 90.0);

        assert_eq!(
            RotationVector::from_vector(DVec3::ZERO, AngleUnit::Radian).unwrap(),
            RotationVector::unit()
        );
        assert_eq!(rv.to_vector(AngleUnit::Degree), DVec3::new(0.0, 0.0, 90.0));
    }

    #[test]
    fn test_half_turn_to_quaternion() {
        let rv = RotationVector::new(DVec3::Z, Angle::pi()).unwrap();
        let q = Quaternion::from_rotation_vector(&rv).unwrap();

        assert_abs_diff_eq!(q.x(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.z().abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.s(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_identity_quaternion_gives_unit() {
        assert_eq!(
            RotationVector::from_quaternion(&Quaternion::unit()).unwrap(),
            RotationVector::unit()
        );
    }

    #[test]
    fn test_quaternion_round_trip() {
        let rv = RotationVector::new(DVec3::new(1.0, -2.0, 2.0) / 3.0, Angle::degrees(123.0)).unwrap();
        let back = RotationVector::from_quaternion(&Quaternion::from_rotation_vector(&rv).unwrap()).unwrap();

        assert!((back.axis() - rv.axis()).length() < 1e-12);
        assert_abs_diff_eq!(back.angle().in_degrees(), 123.0, epsilon = 1e-9);
    }

    #[test]
    fn test_small_angles_keep_relative_precision() {
        let axis = DVec3::new(1.0, 2.0, 2.0) / 3.0;

        for radians in [1e-5, 1e-8, 1e-12] {
            let rv = RotationVector::new(axis, Angle::radians(radians)).unwrap();
            let back = RotationVector::from_quaternion(&Quaternion::from_rotation_vector(&rv).unwrap()).unwrap();

            assert!(back.is_defined());
            assert!((back.axis() - axis).length() < 1e-12, "{radians}: {}", back.axis());
            assert_abs_diff_eq!(back.angle().in_radians() / radians, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_matrix_round_trip_through_half_turn() {
        let rv = RotationVector::new(DVec3::new(0.0, 0.6, 0.8), Angle::pi()).unwrap();
        let matrix = RotationMatrix::from_rotation_vector(&rv).unwrap();
        let back = RotationVector::from_rotation_matrix(&matrix).unwrap();

        assert_abs_diff_eq!(back.angle().in_radians(), std::f64::consts::PI, epsilon = 1e-9);
        assert!(back.axis().cross(rv.axis()).length() < 1e-9);
    }

    #[test]
    fn test_rectified() {
        let rv = RotationVector::new(DVec3::X, Angle::degrees(270.0)).unwrap();
        let rectified = rv.rectified().unwrap();
        assert_eq!(rectified.axis(), -DVec3::X);
        assert_abs_diff_eq!(rectified.angle().in_degrees(), 90.0, epsilon = 1e-9);

        let negative = RotationVector::new(DVec3::Y, Angle::degrees(-30.0)).unwrap();
        let rectified = negative.rectified().unwrap();
        assert_eq!(rectified.axis(), -DVec3::Y);
        assert_abs_diff_eq!(rectified.angle().in_degrees(), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equality_of_opposite_representations() {
        let a = RotationVector::new(DVec3::X, Angle::degrees(30.0)).unwrap();
        let b = RotationVector::new(-DVec3::X, Angle::degrees(-30.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            RotationVector::x(Angle::zero()),
            RotationVector::y(Angle::zero())
        );
        assert_ne!(RotationVector::undefined(), RotationVector::undefined());
    }

    #[test]
    fn test_is_near() {
        let a = RotationVector::z(Angle::degrees(10.0));
        let b = RotationVector::z(Angle::degrees(10.5));
        assert!(a.is_near(&b, &Angle::degrees(1.0)).unwrap());
        assert!(!a.is_near(&b, &Angle::degrees(0.1)).unwrap());
    }
}
