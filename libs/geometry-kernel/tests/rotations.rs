//! Round trips between the four rotation representations.

use geometry_kernel::angle::Angle;
use geometry_kernel::d3::rotation::{AxisSequence, EulerAngle, Quaternion, RotationMatrix, RotationVector};
use glam::DVec3;

fn tolerance() -> Angle {
    Angle::degrees(1e-4)
}

/// Rotations spread over axes and angles, away from gimbal lock for every
/// sequence used below.
fn samples() -> Vec<Quaternion> {
    let axes = [
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(1.0, 1.0, 1.0).normalize(),
        DVec3::new(-0.3, 0.5, 0.8).normalize(),
    ];
    let angles = [5.0, 37.0, 80.0, 135.0];

    axes.iter()
        .flat_map(|axis| {
            angles
                .iter()
                .map(move |degrees| RotationVector::new(*axis, Angle::degrees(*degrees)).unwrap())
        })
        .map(|rotation_vector| Quaternion::from_rotation_vector(&rotation_vector).unwrap())
        .collect()
}

// ============================================================================
// Quaternion ↔ RotationMatrix
// ============================================================================

#[test]
fn test_quaternion_through_matrix() {
    for quaternion in samples() {
        let matrix = RotationMatrix::from_quaternion(&quaternion).unwrap();
        let back = Quaternion::from_rotation_matrix(&matrix).unwrap();

        assert!(back.is_near(&quaternion, &tolerance()).unwrap(), "{quaternion} -> {back}");
    }
}

#[test]
fn test_round_trip_is_up_to_sign() {
    for quaternion in samples() {
        let negated = -quaternion;
        let back = Quaternion::from_rotation_matrix(&RotationMatrix::from_quaternion(&negated).unwrap()).unwrap();

        assert!(back.is_near(&quaternion, &tolerance()).unwrap());
    }
}

// ============================================================================
// Quaternion ↔ RotationVector
// ============================================================================

#[test]
fn test_quaternion_through_rotation_vector() {
    for quaternion in samples() {
        let rotation_vector = RotationVector::from_quaternion(&quaternion).unwrap();
        let back = Quaternion::from_rotation_vector(&rotation_vector).unwrap();

        assert!(back.is_near(&quaternion, &tolerance()).unwrap());
    }
}

#[test]
fn test_zero_rotation_has_defined_axis() {
    let rotation_vector = RotationVector::from_quaternion(&Quaternion::unit()).unwrap();

    assert!(rotation_vector.is_defined());
    assert!(rotation_vector.angle().is_zero());
    assert!(!rotation_vector.axis().is_nan());
}

// ============================================================================
// Quaternion ↔ EulerAngle
// ============================================================================

#[test]
fn test_quaternion_through_euler_angles() {
    for sequence in [AxisSequence::XYZ, AxisSequence::ZXY, AxisSequence::ZYX] {
        for quaternion in samples() {
            let euler_angle = EulerAngle::from_quaternion(&quaternion, sequence).unwrap();
            let back = Quaternion::from_euler_angle(&euler_angle).unwrap();

            assert!(
                back.is_near(&quaternion, &tolerance()).unwrap(),
                "{sequence}: {quaternion} -> {euler_angle} -> {back}"
            );
        }
    }
}

#[test]
fn test_gimbal_lock_degrades_gracefully() {
    let locked = EulerAngle::zyx(Angle::degrees(30.0), Angle::degrees(90.0), Angle::degrees(20.0));
    let matrix = RotationMatrix::from_euler_angle(&locked).unwrap();

    let extracted = EulerAngle::from_rotation_matrix(&matrix, AxisSequence::ZYX).unwrap();

    assert!(extracted.is_defined());
    assert!(extracted.psi().is_zero());
    assert!(extracted.is_near(&locked, &tolerance()).unwrap());
}

// ============================================================================
// Full cycle
// ============================================================================

#[test]
fn test_full_cycle() {
    for quaternion in samples() {
        let matrix = RotationMatrix::from_quaternion(&quaternion).unwrap();
        let rotation_vector = RotationVector::from_rotation_matrix(&matrix).unwrap();
        let euler_angle = EulerAngle::from_rotation_vector(&rotation_vector, AxisSequence::ZYX).unwrap();
        let back = Quaternion::from_euler_angle(&euler_angle).unwrap();

        assert!(back.is_near(&quaternion, &tolerance()).unwrap());
    }
}
