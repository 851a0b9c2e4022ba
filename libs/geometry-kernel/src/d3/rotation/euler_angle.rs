//! Euler angle triplets.
//!
//! `(φ, θ, ψ)` are applied as successive frame rotations about the axes named
//! by the [`AxisSequence`]: φ about the first axis, θ about the second and ψ
//! about the third. The composed matrix for `ZYX` is therefore
//! `RX(ψ) · RY(θ) · RZ(φ)`.

use std::fmt;

use config::constants::GIMBAL_LOCK_TOLERANCE;
use glam::DVec3;

use crate::angle::{Angle, AngleUnit};
use crate::d3::rotation::{Quaternion, RotationMatrix, RotationVector};
use crate::error::{ensure_defined, Result};

/// Order of the three elementary rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisSequence {
    /// X, then Y, then Z
    XYZ,
    /// Z, then X, then Y
    ZXY,
    /// Z, then Y, then X (yaw, pitch, roll)
    ZYX,
}

impl fmt::Display for AxisSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::XYZ => "XYZ",
            Self::ZXY => "ZXY",
            Self::ZYX => "ZYX",
        })
    }
}

/// Euler angles `(φ, θ, ψ)` with their axis sequence.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngle {
    phi: Angle,
    theta: Angle,
    psi: Angle,
    axis_sequence: AxisSequence,
}

impl EulerAngle {
    /// Creates an Euler angle triplet.
    pub const fn new(phi: Angle, theta: Angle, psi: Angle, axis_sequence: AxisSequence) -> Self {
        Self {
            phi,
            theta,
            psi,
            axis_sequence,
        }
    }

    /// `XYZ` triplet.
    pub const fn xyz(phi: Angle, theta: Angle, psi: Angle) -> Self {
        Self::new(phi, theta, psi, AxisSequence::XYZ)
    }

    /// `ZXY` triplet.
    pub const fn zxy(phi: Angle, theta: Angle, psi: Angle) -> Self {
        Self::new(phi, theta, psi, AxisSequence::ZXY)
    }

    /// `ZYX` triplet.
    pub const fn zyx(phi: Angle, theta: Angle, psi: Angle) -> Self {
        Self::new(phi, theta, psi, AxisSequence::ZYX)
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self::zyx(Angle::undefined(), Angle::undefined(), Angle::undefined())
    }

    /// Identity rotation, `ZYX` with zero angles.
    pub const fn unit() -> Self {
        Self::zyx(Angle::zero(), Angle::zero(), Angle::zero())
    }

    /// Triplet whose components are the elements of `vector`, read in `unit`.
    pub fn from_vector(vector: DVec3, unit: AngleUnit, axis_sequence: AxisSequence) -> Self {
        Self::new(
            Angle::new(vector.x, unit),
            Angle::new(vector.y, unit),
            Angle::new(vector.z, unit),
            axis_sequence,
        )
    }

    /// Euler angles of the quaternion in the given sequence.
    pub fn from_quaternion(quaternion: &Quaternion, axis_sequence: AxisSequence) -> Result<Self> {
        Self::from_rotation_matrix(&RotationMatrix::from_quaternion(quaternion)?, axis_sequence)
    }

    /// Euler angles of the rotation vector in the given sequence.
    pub fn from_rotation_vector(
        rotation_vector: &RotationVector,
        axis_sequence: AxisSequence,
    ) -> Result<Self> {
        Self::from_rotation_matrix(&RotationMatrix::from_rotation_vector(rotation_vector)?, axis_sequence)
    }

    /// Euler angles of the rotation matrix in the given sequence.
    ///
    /// θ is returned in `[-π/2, π/2]`. At gimbal lock (`|sin θ| ≈ 1`) the
    /// first and third rotations share an axis; ψ is then set to zero and the
    /// whole remaining rotation is carried by φ.
    pub fn from_rotation_matrix(
        rotation_matrix: &RotationMatrix,
        axis_sequence: AxisSequence,
    ) -> Result<Self> {
        ensure_defined(rotation_matrix.is_defined(), "RotationMatrix")?;

        let m = |row: usize, column: usize| rotation_matrix.at(row, column);

        // Signed sine of θ read off the matrix for each sequence.
        let sine = match axis_sequence {
            AxisSequence::XYZ => m(2, 0),
            AxisSequence::ZXY => m(1, 2),
            AxisSequence::ZYX => -m(0, 2),
        }
        .clamp(-1.0, 1.0);

        let theta = sine.asin();
        let locked = 1.0 - sine.abs() < GIMBAL_LOCK_TOLERANCE;

        if locked {
            log::warn!(
                "Gimbal lock in {} extraction (theta = {:.6} rad), psi set to zero",
                axis_sequence,
                theta
            );
        }

        let (phi, psi) = match (axis_sequence, locked) {
            (AxisSequence::XYZ, false) => ((-m(2, 1)).atan2(m(2, 2)), (-m(1, 0)).atan2(m(0, 0))),
            (AxisSequence::XYZ, true) => (m(1, 2).atan2(m(1, 1)), 0.0),
            (AxisSequence::ZXY, false) => ((-m(1, 0)).atan2(m(1, 1)), (-m(0, 2)).atan2(m(2, 2))),
            (AxisSequence::ZXY, true) => (m(0, 1).atan2(m(0, 0)), 0.0),
            (AxisSequence::ZYX, false) => (m(0, 1).atan2(m(0, 0)), m(1, 2).atan2(m(2, 2))),
            (AxisSequence::ZYX, true) => ((-m(1, 0)).atan2(m(1, 1)), 0.0),
        };

        Ok(Self::new(
            Angle::radians(phi),
            Angle::radians(theta),
            Angle::radians(psi),
            axis_sequence,
        ))
    }

    /// Returns true if all three angles are defined.
    pub fn is_defined(&self) -> bool {
        self.phi.is_defined() && self.theta.is_defined() && self.psi.is_defined()
    }

    /// First rotation angle.
    pub fn phi(&self) -> Angle {
        self.phi
    }

    /// Second rotation angle.
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// Third rotation angle.
    pub fn psi(&self) -> Angle {
        self.psi
    }

    /// Axis sequence.
    pub fn axis_sequence(&self) -> AxisSequence {
        self.axis_sequence
    }

    /// `(φ, θ, ψ)` read in `unit`.
    pub fn to_vector(&self, unit: AngleUnit) -> DVec3 {
        DVec3::new(self.phi.in_unit(unit), self.theta.in_unit(unit), self.psi.in_unit(unit))
    }

    /// Returns true if the two triplets encode rotations within
    /// `angular_tolerance` of each other, regardless of sequence.
    pub fn is_near(&self, other: &EulerAngle, angular_tolerance: &Angle) -> Result<bool> {
        Quaternion::from_euler_angle(self)?
            .is_near(&Quaternion::from_euler_angle(other)?, angular_tolerance)
    }
}

impl PartialEq for EulerAngle {
    /// Same sequence and same angles, or the alternate triplet
    /// `(φ + π, π − θ, ψ + π)` describing the same rotation.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.axis_sequence != other.axis_sequence {
            return false;
        }

        let direct = self.phi == other.phi && self.theta == other.theta && self.psi == other.psi;

        let alternate = self.phi + Angle::pi() == other.phi
            && Angle::pi() - self.theta == other.theta
            && self.psi + Angle::pi() == other.psi;

        direct || alternate
    }
}

impl fmt::Display for EulerAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(
            f,
            "[{}, {}, {}] ({})",
            self.phi.in_degrees(),
            self.theta.in_degrees(),
            self.psi.in_degrees(),
            self.axis_sequence
        )
    }
}
