//! # Error Types
//!
//! Error taxonomy for the geometry kernel. Every failure is explicit and
//! propagates immediately to the caller.
//!
//! ## Error Policy
//!
//! - Undefined operands are rejected before any computation starts
//! - "Not implemented" is never folded into an empty result
//! - No partial results, no retries

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during geometric operations.
///
/// ## Example
///
/// ```rust
/// use geometry_kernel::d3::{Object, Point, Sphere};
/// use geometry_kernel::GeometryError;
///
/// let point = Object::from(Point::undefined());
/// let sphere = Object::from(Sphere::unit(Point::origin()));
///
/// match point.intersects(&sphere) {
///     Err(GeometryError::Undefined { what }) => assert_eq!(what, "Point"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operand failed its own `is_defined` check.
    #[error("Undefined {what}")]
    Undefined {
        /// Name of the undefined operand type
        what: &'static str,
    },

    /// A constructor or conversion received a mathematically invalid input.
    #[error("Domain violation: {message}")]
    Domain {
        /// Description of the violated constraint
        message: String,
    },

    /// No algorithm exists for the requested pair of primitives.
    #[error("Not implemented: {operation} between {first} and {second}")]
    NotImplemented {
        /// Name of the requested operation
        operation: &'static str,
        /// Name of the receiver type
        first: &'static str,
        /// Name of the argument type
        second: &'static str,
    },

    /// A downcast requested a type different from the dynamic type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Requested type
        expected: &'static str,
        /// Actual dynamic type
        found: &'static str,
    },

    /// Positional access past the end of a collection.
    #[error("Index {index} out of bounds [{size}]")]
    OutOfBounds {
        /// Requested index
        index: usize,
        /// Collection size
        size: usize,
    },
}

impl GeometryError {
    /// Creates an undefined operand error.
    pub fn undefined(what: &'static str) -> Self {
        Self::Undefined { what }
    }

    /// Creates a domain violation error.
    pub fn domain(message: impl Into<String>) -> Self {
        Self::Domain {
            message: message.into(),
        }
    }

    /// Creates a not implemented error for a pairwise operation.
    pub fn not_implemented(
        operation: &'static str,
        first: &'static str,
        second: &'static str,
    ) -> Self {
        Self::NotImplemented {
            operation,
            first,
            second,
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Creates an out of bounds error.
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }
}

/// Result type alias for kernel operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Fails with [`GeometryError::Undefined`] unless `defined` holds.
#[inline]
pub(crate) fn ensure_defined(defined: bool, what: &'static str) -> Result<()> {
    if defined {
        Ok(())
    } else {
        Err(GeometryError::undefined(what))
    }
}
