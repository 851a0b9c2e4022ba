//! # Config Crate
//!
//! Centralized numeric configuration for the geometry kernel.
//! Every tolerance and default discretization parameter lives here so that
//! algorithms never carry unexplained literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_DISCRETIZATION_LEVEL};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Use the default ray count when the caller does not override it
//! let level_override: Option<usize> = None;
//! let level = level_override.unwrap_or(DEFAULT_DISCRETIZATION_LEVEL);
//! assert_eq!(level, DEFAULT_DISCRETIZATION_LEVEL);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Documented Accuracy**: Defaults state the error bound they imply
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
