//! Tests for classification, composition and application.

use glam::{DMat3, DMat4, DVec3, DVec4};

use super::*;
use crate::angle::Angle;

fn assert_point_near(actual: Point, expected: Point) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_classification() {
    assert_eq!(Transformation::identity().kind(), TransformationType::Identity);
    assert_eq!(
        Transformation::translation(DVec3::new(1.0, 2.0, 3.0)).kind(),
        TransformationType::Translation
    );
    assert_eq!(
        Transformation::translation(DVec3::ZERO).kind(),
        TransformationType::Identity
    );
    assert_eq!(
        Transformation::rotation(&RotationMatrix::rz(&Angle::degrees(30.0))).unwrap().kind(),
        TransformationType::Rotation
    );
    assert_eq!(
        Transformation::scaling(DVec3::new(2.0, 3.0, 4.0)).unwrap().kind(),
        TransformationType::Scaling
    );
    assert_eq!(Transformation::undefined().kind(), TransformationType::Undefined);
}

#[test]
fn test_reflection_shear_affine() {
    let swap_xy = DMat3::from_cols(DVec3::Y, DVec3::X, DVec3::Z);
    assert_eq!(
        Transformation::new(DMat4::from_mat3(swap_xy)).unwrap().kind(),
        TransformationType::Reflection
    );

    let shear = DMat3::from_cols(DVec3::X, DVec3::new(0.5, 1.0, 0.0), DVec3::Z);
    assert_eq!(
        Transformation::new(DMat4::from_mat3(shear)).unwrap().kind(),
        TransformationType::Shear
    );

    let general = DMat3::from_cols(
        DVec3::new(1.0, 2.0, 0.0),
        DVec3::new(3.0, 1.0, 0.0),
        DVec3::Z,
    );
    assert_eq!(
        Transformation::new(DMat4::from_mat3(general)).unwrap().kind(),
        TransformationType::Affine
    );

    let translated_rotation = Transformation::translation(DVec3::X)
        .compose(&Transformation::rotation(&RotationMatrix::rx(&Angle::degrees(10.0))).unwrap())
        .unwrap();
    assert_eq!(translated_rotation.kind(), TransformationType::Affine);
    assert!(translated_rotation.is_rigid());
}

#[test]
fn test_rejects_projective_row() {
    let mut matrix = DMat4::IDENTITY;
    matrix.x_axis = DVec4::new(1.0, 0.0, 0.0, 0.5);

    assert!(matches!(
        Transformation::new(matrix),
        Err(GeometryError::Domain { .. })
    ));
}

#[test]
fn test_identity_leaves_points() {
    let point = Point::new(1.5, -2.0, 7.25);

    assert_eq!(Transformation::identity().apply_to_point(&point).unwrap(), point);
}

#[test]
fn test_rotation_is_active() {
    let quarter_turn = Transformation::rotation(&RotationMatrix::rz(&Angle::degrees(90.0))).unwrap();

    let turned = quarter_turn.apply_to_vector(DVec3::X).unwrap();
    assert!((turned - DVec3::Y).length() < 1e-12);
}

#[test]
fn test_rotation_around_point() {
    let rotation = RotationVector::z(Angle::degrees(180.0));
    let transformation = Transformation::rotation_around(&Point::new(1.0, 0.0, 0.0), &rotation).unwrap();

    assert_point_near(
        transformation.apply_to_point(&Point::new(2.0, 0.0, 5.0)).unwrap(),
        Point::new(0.0, 0.0, 5.0),
    );
    assert!(transformation.is_rigid());
}

#[test]
fn test_vectors_ignore_translation() {
    let shift = Transformation::translation(DVec3::new(10.0, 0.0, 0.0));

    assert_eq!(shift.apply_to_vector(DVec3::Y).unwrap(), DVec3::Y);
}

#[test]
fn test_inverse_round_trip() {
    let transformation = Transformation::translation(DVec3::new(1.0, -2.0, 3.0))
        * Transformation::rotation(&RotationMatrix::from_rotation_vector(
            &RotationVector::new(DVec3::new(1.0, 1.0, 1.0).normalize(), Angle::degrees(75.0)).unwrap(),
        )
        .unwrap())
        .unwrap();

    let inverse = transformation.inverse().unwrap();
    let point = Point::new(4.0, 5.0, -6.0);

    assert_point_near(
        inverse.apply_to_point(&transformation.apply_to_point(&point).unwrap()).unwrap(),
        point,
    );
}

#[test]
fn test_inverse_keeps_class() {
    let translation = Transformation::translation(DVec3::new(1.0, 2.0, 3.0)).inverse().unwrap();
    assert_eq!(translation.kind(), TransformationType::Translation);
    assert_eq!(translation.translation_part(), DVec3::new(-1.0, -2.0, -3.0));

    let scaling = Transformation::scaling(DVec3::new(2.0, 4.0, 8.0)).unwrap().inverse().unwrap();
    assert_eq!(scaling.kind(), TransformationType::Scaling);
    assert!(scaling
        .linear_part()
        .abs_diff_eq(DMat3::from_diagonal(DVec3::new(0.5, 0.25, 0.125)), 1e-12));
}

#[test]
fn test_singular_inverse() {
    let flat = Transformation::new(DMat4::from_scale(DVec3::new(1.0, 1.0, 0.0))).unwrap();

    assert!(matches!(flat.inverse(), Err(GeometryError::Domain { .. })));
    assert!(Transformation::scaling(DVec3::new(1.0, 0.0, 1.0)).is_err());
}

#[test]
fn test_undefined_propagates() {
    let undefined = Transformation::undefined();

    assert!(!undefined.is_defined());
    assert!(!undefined.is_rigid());
    assert!(undefined.apply_to_point(&Point::origin()).is_err());
    assert!(!(undefined * Transformation::identity()).is_defined());
}

#[test]
fn test_points_transform_in_place() {
    let mut point = Point::new(1.0, 1.0, 1.0);
    point
        .apply_transformation_mut(&Transformation::translation(DVec3::splat(1.0)))
        .unwrap();

    assert_eq!(point, Point::new(2.0, 2.0, 2.0));

    let scaled = point
        .apply_transformation(&Transformation::scaling(DVec3::splat(0.5)).unwrap())
        .unwrap();
    assert_eq!(scaled, Point::new(1.0, 1.0, 1.0));
    assert_eq!(point, Point::new(2.0, 2.0, 2.0));
}

#[test]
fn test_composition_operator() {
    let shift = Transformation::translation(DVec3::X);
    let scale = Transformation::scaling(DVec3::splat(2.0)).unwrap();

    assert_eq!(shift * scale, shift.compose(&scale).unwrap());
    assert_point_near(
        (shift * scale).apply_to_point(&Point::new(1.0, 0.0, 0.0)).unwrap(),
        Point::new(3.0, 0.0, 0.0),
    );
}

#[test]
fn test_composition_with_undefined_is_undefined() {
    let undefined = Transformation::undefined();
    let shift = Transformation::translation(DVec3::X);

    assert!(shift.compose(&undefined).is_err());

    let product = shift * undefined;
    assert!(!product.is_defined());
    assert_eq!(product.kind(), TransformationType::Undefined);
}

#[test]
fn test_rounded_rotation_is_rigid_rotation() {
    let c = 0.707107;
    let rounded = DMat3::from_cols(DVec3::new(c, c, 0.0), DVec3::new(-c, c, 0.0), DVec3::Z);

    let transformation = Transformation::new(DMat4::from_mat3(rounded)).unwrap();

    assert!(transformation.is_rigid());
    assert_eq!(transformation.kind(), TransformationType::Rotation);
    assert!(RotationMatrix::from_matrix(rounded).unwrap().is_defined());
}
