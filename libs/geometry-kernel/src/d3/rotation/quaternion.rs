//! Rotation quaternion.
//!
//! Components are stored as vector part `(x, y, z)` plus scalar part `s`.
//! The product convention follows Shuster: `p * q` composes the rotation `q`
//! first and `p` second, and [`Quaternion::rotate_vector`] applies the frame
//! rotation (direction cosine matrix) encoded by the quaternion.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg};

use config::constants::{approx_equal, EPSILON};
use glam::{DVec3, DVec4};

use crate::angle::Angle;
use crate::d3::rotation::{EulerAngle, RotationMatrix, RotationVector};
use crate::error::{ensure_defined, GeometryError, Result};

/// Component ordering of a quaternion serialized as four reals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuaternionFormat {
    /// Vector part first, scalar last
    XYZS,
    /// Scalar first, vector part last
    SXYZ,
}

/// Quaternion `(x, y, z, s)`.
///
/// # Example
///
/// ```rust
/// use geometry_kernel::d3::rotation::{Quaternion, RotationVector};
/// use geometry_kernel::angle::Angle;
/// use glam::DVec3;
///
/// let rotation = RotationVector::new(DVec3::Z, Angle::degrees(90.0)).unwrap();
/// let quaternion = Quaternion::from_rotation_vector(&rotation).unwrap();
///
/// // Frame rotation: the X axis of the old frame is -Y in the new one
/// let rotated = quaternion.rotate_vector(DVec3::X).unwrap();
/// assert!((rotated - DVec3::new(0.0, -1.0, 0.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    x: f64,
    y: f64,
    z: f64,
    s: f64,
}

impl Quaternion {
    /// Creates a quaternion from components in XYZS order.
    pub const fn xyzs(x: f64, y: f64, z: f64, s: f64) -> Self {
        Self { x, y, z, s }
    }

    /// Creates a quaternion from four components in the given order.
    pub fn new(components: DVec4, format: QuaternionFormat) -> Self {
        match format {
            QuaternionFormat::XYZS => Self::xyzs(components.x, components.y, components.z, components.w),
            QuaternionFormat::SXYZ => Self::xyzs(components.y, components.z, components.w, components.x),
        }
    }

    /// Creates a quaternion from its vector and scalar parts.
    pub fn from_parts(vector_part: DVec3, scalar_part: f64) -> Self {
        Self::xyzs(vector_part.x, vector_part.y, vector_part.z, scalar_part)
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self::xyzs(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// Identity rotation.
    pub const fn unit() -> Self {
        Self::xyzs(0.0, 0.0, 0.0, 1.0)
    }

    /// Quaternion of the rotation vector: `(sin(θ/2) axis, cos(θ/2))`.
    pub fn from_rotation_vector(rotation_vector: &RotationVector) -> Result<Self> {
        ensure_defined(rotation_vector.is_defined(), "RotationVector")?;

        let half_angle = rotation_vector.angle().in_radians() / 2.0;

        Self::from_parts(half_angle.sin() * rotation_vector.axis(), half_angle.cos()).normalized()
    }

    /// Quaternion of the rotation matrix.
    ///
    /// Uses the trace-based extraction, branching on the largest of the trace
    /// and the three diagonal terms so that the divisor never nears zero.
    pub fn from_rotation_matrix(rotation_matrix: &RotationMatrix) -> Result<Self> {
        ensure_defined(rotation_matrix.is_defined(), "RotationMatrix")?;

        let m = |row: usize, column: usize| rotation_matrix.at(row, column);
        let trace = m(0, 0) + m(1, 1) + m(2, 2);

        let candidates = [trace, m(0, 0), m(1, 1), m(2, 2)];
        let mut branch = 0;
        for (index, candidate) in candidates.iter().enumerate() {
            if *candidate > candidates[branch] {
                branch = index;
            }
        }

        let quaternion = match branch {
            0 => Self::xyzs(m(1, 2) - m(2, 1), m(2, 0) - m(0, 2), m(0, 1) - m(1, 0), 1.0 + trace),
            1 => Self::xyzs(
                1.0 + 2.0 * m(0, 0) - trace,
                m(0, 1) + m(1, 0),
                m(0, 2) + m(2, 0),
                m(1, 2) - m(2, 1),
            ),
            2 => Self::xyzs(
                m(1, 0) + m(0, 1),
                1.0 + 2.0 * m(1, 1) - trace,
                m(1, 2) + m(2, 1),
                m(2, 0) - m(0, 2),
            ),
            _ => Self::xyzs(
                m(2, 0) + m(0, 2),
                m(2, 1) + m(1, 2),
                1.0 + 2.0 * m(2, 2) - trace,
                m(0, 1) - m(1, 0),
            ),
        };

        quaternion.normalized()
    }

    /// Quaternion of the Euler angle triplet.
    pub fn from_euler_angle(euler_angle: &EulerAngle) -> Result<Self> {
        Self::from_rotation_matrix(&RotationMatrix::from_euler_angle(euler_angle)?)
    }

    /// Smallest rotation taking the direction of `first` onto `second`:
    /// `q.rotate_vector(first)` is parallel to `second`.
    pub fn shortest_rotation(first: DVec3, second: DVec3) -> Result<Self> {
        if first.is_nan() || second.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }

        if first.length() < EPSILON || second.length() < EPSILON {
            return Err(GeometryError::domain("shortest rotation of a zero vector"));
        }

        let first = first.normalize();
        let second = second.normalize();
        let dot = first.dot(second);

        if 1.0 + dot < EPSILON {
            // Antiparallel: any axis orthogonal to `first` works, half a turn
            return Ok(Self::from_parts(first.any_orthonormal_vector(), 0.0));
        }

        Self::from_parts(second.cross(first), 1.0 + dot).normalized()
    }

    /// Parses `"[a, b, c, d]"` (brackets optional, comma or whitespace
    /// separated) in the given component order.
    pub fn parse(text: &str, format: QuaternionFormat) -> Result<Self> {
        let trimmed = text.trim().trim_start_matches('[').trim_end_matches(']');

        let components = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| GeometryError::domain(format!("invalid quaternion component [{token}]")))
            })
            .collect::<Result<Vec<f64>>>()?;

        if components.len() != 4 {
            return Err(GeometryError::domain(format!(
                "quaternion needs 4 components, got {}",
                components.len()
            )));
        }

        Ok(Self::new(
            DVec4::new(components[0], components[1], components[2], components[3]),
            format,
        ))
    }

    /// Linear interpolation, `ratio` in `[0, 1]`.
    pub fn lerp(first: &Quaternion, second: &Quaternion, ratio: f64) -> Result<Self> {
        check_ratio(ratio)?;
        ensure_defined(first.is_defined() && second.is_defined(), "Quaternion")?;

        Ok(*first * (1.0 - ratio) + *second * ratio)
    }

    /// Normalized linear interpolation, `ratio` in `[0, 1]`.
    pub fn nlerp(first: &Quaternion, second: &Quaternion, ratio: f64) -> Result<Self> {
        Self::lerp(first, second, ratio)?.normalized()
    }

    /// Spherical linear interpolation along the shorter arc, `ratio` in `[0, 1]`.
    pub fn slerp(first: &Quaternion, second: &Quaternion, ratio: f64) -> Result<Self> {
        check_ratio(ratio)?;
        ensure_defined(first.is_defined() && second.is_defined(), "Quaternion")?;

        let target = if first.dot_product(second) >= 0.0 {
            *second
        } else {
            -*second
        };

        let delta = first.inverse()?.cross_multiply(&target);

        first.cross_multiply(&delta.pow(ratio)).normalized()
    }

    /// Returns true unless a component is NaN.
    pub fn is_defined(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.s.is_nan())
    }

    /// Returns true if the norm is one within tolerance.
    pub fn is_unitary(&self) -> bool {
        self.is_defined() && approx_equal(self.norm(), 1.0)
    }

    /// Returns true if the rotations differ by at most `angular_tolerance`.
    pub fn is_near(&self, other: &Quaternion, angular_tolerance: &Angle) -> Result<bool> {
        ensure_defined(angular_tolerance.is_defined(), "Angle")?;

        Ok(self.angular_difference_with(other)?.in_radians() <= angular_tolerance.in_radians())
    }

    /// First vector component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second vector component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Third vector component.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Scalar component.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Vector part `(x, y, z)`.
    pub fn vector_part(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Scalar part `s`.
    pub fn scalar_part(&self) -> f64 {
        self.s
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        self.to_vector(QuaternionFormat::XYZS).length()
    }

    /// Four-component dot product.
    pub fn dot_product(&self, other: &Quaternion) -> f64 {
        self.to_vector(QuaternionFormat::XYZS)
            .dot(other.to_vector(QuaternionFormat::XYZS))
    }

    /// Components in the requested order.
    pub fn to_vector(&self, format: QuaternionFormat) -> DVec4 {
        match format {
            QuaternionFormat::XYZS => DVec4::new(self.x, self.y, self.z, self.s),
            QuaternionFormat::SXYZ => DVec4::new(self.s, self.x, self.y, self.z),
        }
    }

    /// Unit-norm copy. Fails for a zero quaternion.
    pub fn normalized(&self) -> Result<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;

        let norm = self.norm();
        if norm < EPSILON {
            return Err(GeometryError::domain("quaternion norm is zero"));
        }

        Ok(*self * (1.0 / norm))
    }

    /// Conjugate `(-x, -y, -z, s)`.
    pub fn conjugate(&self) -> Self {
        Self::xyzs(-self.x, -self.y, -self.z, self.s)
    }

    /// Multiplicative inverse. Fails for a zero quaternion.
    pub fn inverse(&self) -> Result<Self> {
        ensure_defined(self.is_defined(), "Quaternion")?;

        let squared_norm = self.dot_product(self);
        if squared_norm < EPSILON {
            return Err(GeometryError::domain("quaternion norm is zero"));
        }

        Ok(self.conjugate() * (1.0 / squared_norm))
    }

    /// Same rotation with a non-negative scalar part.
    pub fn rectified(&self) -> Self {
        if self.s < 0.0 {
            -*self
        } else {
            *self
        }
    }

    /// Shuster product: `p.cross_multiply(q)` applies `q` then `p`.
    pub fn cross_multiply(&self, other: &Quaternion) -> Self {
        let left = self.vector_part();
        let right = other.vector_part();

        Self::from_parts(
            other.s * left + self.s * right - left.cross(right),
            self.s * other.s - left.dot(right),
        )
    }

    /// Hamilton product: `p.dot_multiply(q)` applies `p` then `q`.
    pub fn dot_multiply(&self, other: &Quaternion) -> Self {
        let left = self.vector_part();
        let right = other.vector_part();

        Self::from_parts(
            other.s * left + self.s * right + left.cross(right),
            self.s * other.s - left.dot(right),
        )
    }

    /// Applies the frame rotation to `vector`. Requires a unit quaternion.
    pub fn rotate_vector(&self, vector: DVec3) -> Result<DVec3> {
        if vector.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }
        ensure_defined(self.is_defined(), "Quaternion")?;

        if !self.is_unitary() {
            return Err(GeometryError::domain(format!(
                "quaternion with norm [{}] is not unitary",
                self.norm()
            )));
        }

        Ok(self
            .cross_multiply(&Self::from_parts(vector, 0.0))
            .cross_multiply(&self.conjugate())
            .vector_part())
    }

    /// Quaternion exponential.
    pub fn exp(&self) -> Self {
        let vector = self.vector_part();
        let vector_norm = vector.length();

        if vector_norm <= EPSILON {
            return Self::from_parts(DVec3::ZERO, self.s.exp());
        }

        Self::from_parts(vector * (vector_norm.sin() / vector_norm), vector_norm.cos()) * self.s.exp()
    }

    /// Quaternion logarithm.
    pub fn log(&self) -> Self {
        let vector = self.vector_part();
        let vector_norm = vector.length();

        if vector_norm <= EPSILON {
            return Self::from_parts(DVec3::ZERO, self.norm().ln());
        }

        Self::from_parts(
            vector * (vector_norm.atan2(self.s) / vector_norm),
            self.norm().ln(),
        )
    }

    /// Real power, `exp(log(q) * exponent)`.
    pub fn pow(&self, exponent: f64) -> Self {
        (self.log() * exponent).exp()
    }

    /// Geodesic distance between two rotations, in `[0, π]`.
    pub fn angular_difference_with(&self, other: &Quaternion) -> Result<Angle> {
        ensure_defined(self.is_defined() && other.is_defined(), "Quaternion")?;

        if !self.is_unitary() || !other.is_unitary() {
            return Err(GeometryError::domain("angular difference requires unit quaternions"));
        }

        let delta = self.cross_multiply(&other.inverse()?).normalized()?;

        Ok(Angle::radians(2.0 * delta.s.abs().clamp(0.0, 1.0).acos()))
    }

    /// Division `self * other⁻¹` that rejects a zero divisor.
    pub fn checked_div(&self, other: &Quaternion) -> Result<Self> {
        Ok(self.cross_multiply(&other.inverse()?))
    }
}

fn check_ratio(ratio: f64) -> Result<()> {
    if ratio.is_nan() {
        return Err(GeometryError::undefined("Ratio"));
    }

    if !(0.0..=1.0).contains(&ratio) {
        return Err(GeometryError::domain(format!("ratio [{ratio}] not in [0, 1]")));
    }

    Ok(())
}

impl PartialEq for Quaternion {
    /// Equal up to sign: `q` and `-q` encode the same rotation.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }

        let a = self.to_vector(QuaternionFormat::XYZS);
        let b = other.to_vector(QuaternionFormat::XYZS);

        a == b || a == -b
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        self.cross_multiply(&rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: f64) -> Quaternion {
        Quaternion::xyzs(self.x * rhs, self.y * rhs, self.z * rhs, self.s * rhs)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Quaternion {
        rhs * self
    }
}

impl Div for Quaternion {
    type Output = Quaternion;

    /// Yields an undefined quaternion when `rhs` is zero; see
    /// [`Quaternion::checked_div`].
    fn div(self, rhs: Quaternion) -> Quaternion {
        self.checked_div(&rhs).unwrap_or_else(|_| Quaternion::undefined())
    }
}

impl Add for Quaternion {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Quaternion {
        Quaternion::xyzs(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.s + rhs.s)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;

    fn neg(self) -> Quaternion {
        self * -1.0
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        match f.precision() {
            Some(p) => write!(f, "[{:.p$}, {:.p$}, {:.p$}, {:.p$}]", self.x, self.y, self.z, self.s),
            None => write!(f, "[{}, {}, {}, {}]", self.x, self.y, self.z, self.s),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn assert_vec_near(actual: DVec3, expected: DVec3) {
        assert!(
            (actual - expected).length() < 1e-12,
            "{actual} != {expected}"
        );
    }

    fn assert_components_near(actual: Quaternion, expected: Quaternion) {
        let delta = actual.to_vector(QuaternionFormat::XYZS) - expected.to_vector(QuaternionFormat::XYZS);
        assert!(delta.length() < 1e-12, "{actual} != {expected}");
    }

    #[test]
    fn test_formats() {
        let q = Quaternion::new(DVec4::new(1.0, 2.0, 3.0, 4.0), QuaternionFormat::SXYZ);
        assert_eq!(q.s(), 1.0);
        assert_eq!(q.x(), 2.0);
        assert_eq!(q.to_vector(QuaternionFormat::XYZS), DVec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(q.to_vector(QuaternionFormat::SXYZ), DVec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_equality_up_to_sign() {
        let q = Quaternion::xyzs(0.0, 0.0, 1.0, 0.0);
        assert_eq!(q, -q);
        assert_ne!(q, Quaternion::unit());
        assert_ne!(Quaternion::undefined(), Quaternion::undefined());
    }

    #[test]
    fn test_rotate_vector_about_z() {
        let rv = RotationVector::new(DVec3::Z, Angle::degrees(90.0)).unwrap();
        let q = Quaternion::from_rotation_vector(&rv).unwrap();

        assert_vec_near(q.rotate_vector(DVec3::X).unwrap(), -DVec3::Y);
        assert_vec_near(q.conjugate().rotate_vector(DVec3::X).unwrap(), DVec3::Y);
        assert_vec_near(q.rotate_vector(DVec3::Z).unwrap(), DVec3::Z);
    }

    #[test]
    fn test_rotate_vector_requires_unit() {
        let q = Quaternion::xyzs(0.0, 0.0, 0.0, 2.0);
        assert!(matches!(q.rotate_vector(DVec3::X), Err(GeometryError::Domain { .. })));
    }

    #[test]
    fn test_cross_and_dot_multiply_compose_in_opposite_orders() {
        let a = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::X, Angle::degrees(30.0)).unwrap()).unwrap();
        let b = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Y, Angle::degrees(50.0)).unwrap()).unwrap();

        assert_components_near(a.cross_multiply(&b), b.dot_multiply(&a));

        // b applied first, then a
        let v = DVec3::new(0.3, -0.2, 0.9);
        let sequential = a.rotate_vector(b.rotate_vector(v).unwrap()).unwrap();
        assert_vec_near((a * b).rotate_vector(v).unwrap(), sequential);
    }

    #[test]
    fn test_inverse_and_conjugate() {
        let q = Quaternion::xyzs(1.0, 2.0, 3.0, 4.0);
        assert_components_near(q * q.inverse().unwrap(), Quaternion::unit());
        assert_eq!(q.conjugate(), Quaternion::xyzs(-1.0, -2.0, -3.0, 4.0));
        assert!(Quaternion::xyzs(0.0, 0.0, 0.0, 0.0).inverse().is_err());
    }

    #[test]
    fn test_division() {
        let q = Quaternion::xyzs(1.0, 2.0, 3.0, 4.0);
        let r = Quaternion::xyzs(0.0, 1.0, 0.0, 1.0);

        assert_components_near((q / r) * r, q);
        assert_components_near(q.checked_div(&r).unwrap(), q / r);
    }

    #[test]
    fn test_division_by_zero_is_undefined() {
        let zero = Quaternion::xyzs(0.0, 0.0, 0.0, 0.0);

        assert!(matches!(Quaternion::unit().checked_div(&zero), Err(GeometryError::Domain { .. })));
        assert!(!(Quaternion::unit() / zero).is_defined());
        assert!(!(Quaternion::unit() / Quaternion::undefined()).is_defined());
    }

    #[test]
    fn test_rectified() {
        let q = Quaternion::xyzs(0.1, 0.2, 0.3, -0.9);
        let rectified = q.rectified();
        assert!(rectified.s() > 0.0);
        assert_eq!(rectified, q);
    }

    #[test]
    fn test_angular_difference() {
        let a = Quaternion::unit();
        let b = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Z, Angle::degrees(40.0)).unwrap()).unwrap();

        assert_abs_diff_eq!(
            a.angular_difference_with(&b).unwrap().in_degrees(),
            40.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            b.angular_difference_with(&-b).unwrap().in_radians(),
            0.0,
            epsilon = 1e-7
        );
        assert!(b.is_near(&a, &Angle::degrees(41.0)).unwrap());
        assert!(!b.is_near(&a, &Angle::degrees(39.0)).unwrap());
    }

    #[test]
    fn test_exp_log_pow() {
        let q = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Y, Angle::radians(FRAC_PI_2)).unwrap()).unwrap();
        assert_components_near(q.log().exp(), q);

        let half = q.pow(0.5);
        let expected = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Y, Angle::radians(FRAC_PI_2 / 2.0)).unwrap()).unwrap();
        assert!(half.is_near(&expected, &Angle::radians(1e-9)).unwrap());
    }

    #[test]
    fn test_shortest_rotation() {
        let q = Quaternion::shortest_rotation(DVec3::X, DVec3::Y).unwrap();
        assert_vec_near(q.rotate_vector(DVec3::X).unwrap(), DVec3::Y);

        let q = Quaternion::shortest_rotation(DVec3::new(1.0, 1.0, 0.0), DVec3::Z * 3.0).unwrap();
        assert_vec_near(
            q.rotate_vector(DVec3::new(1.0, 1.0, 0.0).normalize()).unwrap(),
            DVec3::Z,
        );

        let flip = Quaternion::shortest_rotation(DVec3::X, -DVec3::X).unwrap();
        assert_vec_near(flip.rotate_vector(DVec3::X).unwrap(), -DVec3::X);

        assert!(Quaternion::shortest_rotation(DVec3::ZERO, DVec3::X).is_err());
    }

    #[test]
    fn test_interpolation() {
        let start = Quaternion::unit();
        let end = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Z, Angle::radians(PI / 2.0)).unwrap()).unwrap();

        let middle = Quaternion::slerp(&start, &end, 0.5).unwrap();
        let expected = Quaternion::from_rotation_vector(&RotationVector::new(DVec3::Z, Angle::radians(PI / 4.0)).unwrap()).unwrap();
        assert!(middle.is_near(&expected, &Angle::radians(1e-9)).unwrap());

        let nlerp = Quaternion::nlerp(&start, &end, 0.5).unwrap();
        assert!(nlerp.is_near(&expected, &Angle::radians(1e-9)).unwrap());

        assert_eq!(Quaternion::lerp(&start, &end, 0.0).unwrap(), start);
        assert!(Quaternion::slerp(&start, &end, 1.5).is_err());
    }

    #[test]
    fn test_parse() {
        let q = Quaternion::parse("[0.0, 0.0, 1.0, 0.0]", QuaternionFormat::XYZS).unwrap();
        assert_eq!(q, Quaternion::xyzs(0.0, 0.0, 1.0, 0.0));

        let q = Quaternion::parse("1 0 0 0", QuaternionFormat::SXYZ).unwrap();
        assert_eq!(q, Quaternion::unit());

        assert!(Quaternion::parse("[1, 2, 3]", QuaternionFormat::XYZS).is_err());
        assert!(Quaternion::parse("[a, 2, 3, 4]", QuaternionFormat::XYZS).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Quaternion::unit().to_string(), "[0, 0, 0, 1]");
        assert_eq!(format!("{:.1}", Quaternion::unit()), "[0.0, 0.0, 0.0, 1.0]");
    }
}
