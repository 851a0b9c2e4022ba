//! # Geometry Kernel
//!
//! Computational-geometry kernel for 2D and 3D Euclidean space.
//!
//! ## Architecture
//!
//! ```text
//! config (tolerances, discretization defaults)
//!       ↓
//! angle → d3::rotation → d3::Transformation / d2::Transformation
//!       ↓
//! primitives → Object (closed enum) → Intersection / Composite
//! ```
//!
//! ## Queries
//!
//! Every pair of [`d3::Object`]s (or [`d2::Object`]s) answers
//! `intersects`, `contains` and `intersection_with`:
//! - Undefined operands fail with [`GeometryError::Undefined`]
//! - Pairs without an algorithm fail with [`GeometryError::NotImplemented`]
//! - Results of `intersection_with` are tagged [`d3::Intersection`]s
//!
//! ## Usage
//!
//! ```rust
//! use geometry_kernel::d3::{Line, Object, Point, Segment, Sphere};
//! use glam::DVec3;
//!
//! let sphere = Object::from(Sphere::unit(Point::origin()));
//! let line = Object::from(Line::new(Point::new(0.0, 0.0, 2.0), DVec3::NEG_Z).unwrap());
//!
//! let chord = sphere.intersection_with(&line).unwrap();
//! let segment = chord.downcast::<Segment>().unwrap();
//!
//! assert!(segment.first_point().is_near(&Point::new(0.0, 0.0, 1.0), 1e-12).unwrap());
//! ```

#[macro_use]
mod macros;

pub mod angle;
pub mod d2;
pub mod d3;
pub mod error;

pub use error::{GeometryError, Result};
