//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(2.0, 2.0 + EPSILON / 2.0));
    assert!(!approx_equal(2.0, 2.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}

// =============================================================================
// ROTATION TESTS
// =============================================================================

#[test]
fn test_rotation_matrix_tolerance_looser_than_epsilon() {
    assert!(ROTATION_MATRIX_TOLERANCE > EPSILON);
    assert!(ROTATION_MATRIX_TOLERANCE < 1e-3);
}

#[test]
fn test_gimbal_lock_tolerance_is_small() {
    assert!(GIMBAL_LOCK_TOLERANCE > 0.0);
    assert!(GIMBAL_LOCK_TOLERANCE < 1e-6);
}

// =============================================================================
// DISCRETIZATION TESTS
// =============================================================================

#[test]
fn test_default_level_within_bounds() {
    assert!(DEFAULT_DISCRETIZATION_LEVEL >= MIN_DISCRETIZATION_LEVEL);
    assert!(DEFAULT_DISCRETIZATION_LEVEL <= MAX_DISCRETIZATION_LEVEL);
}

#[test]
fn test_default_level_is_evenly_spread() {
    assert!(DEFAULT_DISCRETIZATION_LEVEL.is_power_of_two());
}

#[test]
fn test_default_level_accuracy_matches_documentation() {
    // 5.625 degree spacing, sagitta below 0.13% of the radius
    let ratio = 1.0 - (std::f64::consts::PI / DEFAULT_DISCRETIZATION_LEVEL as f64).cos();
    assert!(ratio < 0.0013);
    assert!(ratio > 0.0012);
}

#[test]
fn test_level_bounds_are_ordered() {
    assert!(MIN_DISCRETIZATION_LEVEL >= 3);
    assert!(MIN_DISCRETIZATION_LEVEL < MAX_DISCRETIZATION_LEVEL);
}
