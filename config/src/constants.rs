//! # Configuration Constants
//!
//! Centralized constants for the geometry kernel. All comparison tolerances
//! and discretization defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Rotation**: Tolerances specific to rotation representations
//! - **Discretization**: Ray counts used to approximate curved lateral surfaces

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance: coincident points, zero-length vectors, plane
/// distances and tangency discriminants.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ROTATION CONSTANTS
// =============================================================================

/// Tolerance used when validating a user supplied rotation matrix.
///
/// Column norms must be within this distance of 1 and column dot products
/// within this distance of 0. Matrices typed from rounded decimals
/// (e.g. `0.707107`) are accepted; anything further off is rejected as
/// "not a rotation".
///
/// # Example
///
/// ```rust
/// use config::constants::ROTATION_MATRIX_TOLERANCE;
///
/// let column_norm: f64 = (0.707107_f64.powi(2) * 2.0).sqrt();
/// assert!((column_norm - 1.0).abs() < ROTATION_MATRIX_TOLERANCE);
/// ```
pub const ROTATION_MATRIX_TOLERANCE: f64 = 1e-6;

/// Gimbal lock threshold for Euler angle extraction.
///
/// When `1 - |sin(middle angle)|` falls below this value the first and third
/// axes are considered aligned and the third angle is pinned to zero.
///
/// # Example
///
/// ```rust
/// use config::constants::GIMBAL_LOCK_TOLERANCE;
///
/// let sin_theta: f64 = 1.0 - 1e-12;
/// assert!(1.0 - sin_theta.abs() < GIMBAL_LOCK_TOLERANCE);
/// ```
pub const GIMBAL_LOCK_TOLERANCE: f64 = 1e-9;

// =============================================================================
// DISCRETIZATION CONSTANTS
// =============================================================================

/// Default number of rays used to sample the lateral surface of a cone or
/// pyramid when intersecting it with a sphere or an ellipsoid.
///
/// Ray azimuths follow a nested ordering: the rays of a level are a subset of
/// the rays of every higher level, and a power-of-two level spreads them
/// evenly. At 64 rays neighbours are `360° / 64 = 5.625°` apart, so the
/// polygon traced by the hits deviates from the true intersection curve by at
/// most the chord sagitta `r (1 - cos(2.8125°))`, i.e. below 0.13% of the
/// local cross-section radius `r`. Callers needing a tighter bound raise the
/// level (cost is linear in the ray count) until successive results agree
/// within their own tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DISCRETIZATION_LEVEL;
///
/// let half_spacing = std::f64::consts::PI / DEFAULT_DISCRETIZATION_LEVEL as f64;
/// assert!(1.0 - half_spacing.cos() < 0.0013);
/// ```
pub const DEFAULT_DISCRETIZATION_LEVEL: usize = 64;

/// Smallest accepted discretization level.
///
/// Fewer than three rays cannot enclose a cross-section.
pub const MIN_DISCRETIZATION_LEVEL: usize = 3;

/// Largest accepted discretization level.
pub const MAX_DISCRETIZATION_LEVEL: usize = 100_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
///
/// Used for on-surface tests such as a point on a sphere or a unit norm.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// let radius = 2.0;
/// assert!(approx_equal((radius + 1e-11) / radius, 1.0));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if `value` lies within [`EPSILON`] of zero.
///
/// Used for determinants, off-diagonal terms and dot products of directions.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
