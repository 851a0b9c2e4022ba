//! Unit-tagged angle with range reduction.
//!
//! An [`Angle`] keeps the unit it was created in; conversions happen on read.
//! Arithmetic between angles of different units converts the right operand to
//! the unit of the left one.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use config::constants::EPSILON;
use glam::{DVec2, DVec3};

use crate::error::{GeometryError, Result};

/// Angular unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    /// Radian (SI)
    Radian,
    /// Degree
    Degree,
    /// Arcminute, 1/60 degree
    Arcminute,
    /// Arcsecond, 1/3600 degree
    Arcsecond,
    /// Full revolution
    Revolution,
}

impl AngleUnit {
    /// Short symbol used in human-readable output.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Radian => "rad",
            Self::Degree => "deg",
            Self::Arcminute => "amin",
            Self::Arcsecond => "asec",
            Self::Revolution => "rev",
        }
    }

    /// Full unit name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Radian => "Radian",
            Self::Degree => "Degree",
            Self::Arcminute => "Arcminute",
            Self::Arcsecond => "Arcsecond",
            Self::Revolution => "Revolution",
        }
    }

    /// Number of radians in one unit.
    fn si_ratio(self) -> f64 {
        use std::f64::consts::PI;

        match self {
            Self::Radian => 1.0,
            Self::Degree => PI / 180.0,
            Self::Arcminute => PI / 10_800.0,
            Self::Arcsecond => PI / 648_000.0,
            Self::Revolution => 2.0 * PI,
        }
    }

    /// Value of a full turn expressed in this unit.
    fn period(self) -> f64 {
        match self {
            Self::Radian => std::f64::consts::TAU,
            Self::Degree => 360.0,
            Self::Arcminute => 21_600.0,
            Self::Arcsecond => 1_296_000.0,
            Self::Revolution => 1.0,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Scalar angle tagged with its unit.
///
/// # Example
///
/// ```rust
/// use geometry_kernel::angle::Angle;
///
/// let right = Angle::degrees(90.0);
/// assert!((right.in_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert_eq!(right, Angle::half_pi());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Creates an angle from a value and a unit.
    pub const fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// Undefined sentinel.
    pub const fn undefined() -> Self {
        Self::new(f64::NAN, AngleUnit::Radian)
    }

    /// Zero radians.
    pub const fn zero() -> Self {
        Self::radians(0.0)
    }

    /// π/2 radians.
    pub const fn half_pi() -> Self {
        Self::radians(std::f64::consts::FRAC_PI_2)
    }

    /// π radians.
    pub const fn pi() -> Self {
        Self::radians(std::f64::consts::PI)
    }

    /// 2π radians.
    pub const fn two_pi() -> Self {
        Self::radians(std::f64::consts::TAU)
    }

    /// Angle in radians.
    pub const fn radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radian)
    }

    /// Angle in degrees.
    pub const fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    /// Angle in arcminutes.
    pub const fn arcminutes(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcminute)
    }

    /// Angle in arcseconds.
    pub const fn arcseconds(value: f64) -> Self {
        Self::new(value, AngleUnit::Arcsecond)
    }

    /// Angle in revolutions.
    pub const fn revolutions(value: f64) -> Self {
        Self::new(value, AngleUnit::Revolution)
    }

    /// Angle between two 2D vectors, in `[0, π]`.
    ///
    /// Fails with a domain error if either vector has zero length.
    pub fn between_2d(first: DVec2, second: DVec2) -> Result<Self> {
        Self::between_components(first.length(), second.length(), first.dot(second))
    }

    /// Angle between two 3D vectors, in `[0, π]`.
    ///
    /// Fails with a domain error if either vector has zero length.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geometry_kernel::angle::Angle;
    /// use glam::DVec3;
    ///
    /// let angle = Angle::between(DVec3::X, DVec3::Y).unwrap();
    /// assert!((angle.in_degrees() - 90.0).abs() < 1e-12);
    /// ```
    pub fn between(first: DVec3, second: DVec3) -> Result<Self> {
        Self::between_components(first.length(), second.length(), first.dot(second))
    }

    fn between_components(first_norm: f64, second_norm: f64, dot: f64) -> Result<Self> {
        if first_norm.is_nan() || second_norm.is_nan() {
            return Err(GeometryError::undefined("Vector"));
        }

        if first_norm < EPSILON || second_norm < EPSILON {
            return Err(GeometryError::domain("cannot measure angle to a zero vector"));
        }

        let cosine = (dot / (first_norm * second_norm)).clamp(-1.0, 1.0);

        Ok(Self::radians(cosine.acos()))
    }

    /// Reduces `value` into the half-open interval `[lower, upper)`.
    pub fn reduce_range(value: f64, lower: f64, upper: f64) -> f64 {
        let reduced = lower + (value - lower).rem_euclid(upper - lower);

        // rem_euclid rounds tiny negative offsets up to the full span
        if reduced >= upper {
            lower
        } else {
            reduced
        }
    }

    /// Returns true unless the value is NaN.
    pub fn is_defined(&self) -> bool {
        !self.value.is_nan()
    }

    /// Returns true for an exactly zero angle.
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Raw value in the angle's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit the angle was created in.
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Value converted to `unit`.
    pub fn in_unit(&self, unit: AngleUnit) -> f64 {
        if unit == self.unit {
            return self.value;
        }

        self.value * self.unit.si_ratio() / unit.si_ratio()
    }

    /// Value in radians.
    pub fn in_radians(&self) -> f64 {
        self.in_unit(AngleUnit::Radian)
    }

    /// Value in degrees.
    pub fn in_degrees(&self) -> f64 {
        self.in_unit(AngleUnit::Degree)
    }

    /// Value in arcminutes.
    pub fn in_arcminutes(&self) -> f64 {
        self.in_unit(AngleUnit::Arcminute)
    }

    /// Value in arcseconds.
    pub fn in_arcseconds(&self) -> f64 {
        self.in_unit(AngleUnit::Arcsecond)
    }

    /// Value in revolutions.
    pub fn in_revolutions(&self) -> f64 {
        self.in_unit(AngleUnit::Revolution)
    }

    /// Value in radians reduced into `[lower, upper)`.
    ///
    /// The interval must span exactly one full turn.
    pub fn in_radians_range(&self, lower: f64, upper: f64) -> Result<f64> {
        self.in_unit_range(AngleUnit::Radian, lower, upper)
    }

    /// Value in degrees reduced into `[lower, upper)`.
    ///
    /// The interval must span exactly 360 degrees.
    pub fn in_degrees_range(&self, lower: f64, upper: f64) -> Result<f64> {
        self.in_unit_range(AngleUnit::Degree, lower, upper)
    }

    fn in_unit_range(&self, unit: AngleUnit, lower: f64, upper: f64) -> Result<f64> {
        if !self.is_defined() {
            return Err(GeometryError::undefined("Angle"));
        }

        if ((upper - lower) - unit.period()).abs() > EPSILON * unit.period() {
            return Err(GeometryError::domain(format!(
                "range [{lower}, {upper}) does not span one full turn in {}",
                unit.name()
            )));
        }

        Ok(Self::reduce_range(self.in_unit(unit), lower, upper))
    }

    /// Returns true if the two angles differ by at most `tolerance`, modulo a
    /// full turn.
    pub fn is_near(&self, other: &Angle, tolerance: &Angle) -> Result<bool> {
        if !self.is_defined() || !other.is_defined() || !tolerance.is_defined() {
            return Err(GeometryError::undefined("Angle"));
        }

        let difference = Self::reduce_range(self.in_degrees() - other.in_degrees(), -180.0, 180.0);

        Ok(difference.abs() <= tolerance.in_degrees())
    }

    /// Division that rejects a zero divisor.
    pub fn checked_div(&self, divisor: f64) -> Result<Angle> {
        if divisor == 0.0 {
            return Err(GeometryError::domain("division of an angle by zero"));
        }

        Ok(Self::new(self.value / divisor, self.unit))
    }
}

impl PartialEq for Angle {
    /// Angles are equal when they denote the same direction, in any unit.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }

        let period = self.unit.period();
        let other_value = Self::reduce_range(other.in_unit(self.unit), self.value, self.value + period);
        let difference = (other_value - self.value).min(self.value + period - other_value);

        difference.abs() <= EPSILON * period
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::new(self.value + rhs.in_unit(self.unit), self.unit)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Angle) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self.value - rhs.in_unit(self.unit), self.unit)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Angle) {
        *self = *self - rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle::new(-self.value, self.unit)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        Angle::new(self.value * rhs, self.unit)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f64> for Angle {
    type Output = Angle;

    /// Division by zero yields an undefined angle; use [`Angle::checked_div`]
    /// to get an error instead.
    fn div(self, rhs: f64) -> Angle {
        self.checked_div(rhs).unwrap_or_else(|_| Angle::undefined())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        match f.precision() {
            Some(precision) => write!(f, "{:.*} [{}]", precision, self.value, self.unit),
            None => write!(f, "{} [{}]", self.value, self.unit),
        }
    }
}
