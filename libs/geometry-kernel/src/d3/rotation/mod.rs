//! # Rotations
//!
//! Four interconvertible representations of a 3D rotation:
//!
//! - [`Quaternion`]: unit quaternion, the canonical composition form
//! - [`RotationMatrix`]: orthonormal 3x3 matrix with determinant +1
//! - [`RotationVector`]: axis and angle
//! - [`EulerAngle`]: three elementary rotations in an [`AxisSequence`]
//!
//! All representations describe frame (passive) rotations: applying one to a
//! vector expresses that vector in the rotated frame.

mod euler_angle;
mod quaternion;
mod rotation_matrix;
mod rotation_vector;

pub use euler_angle::{AxisSequence, EulerAngle};
pub use quaternion::{Quaternion, QuaternionFormat};
pub use rotation_matrix::RotationMatrix;
pub use rotation_vector::RotationVector;
