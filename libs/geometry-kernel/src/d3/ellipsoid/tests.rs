use approx::assert_abs_diff_eq;

use super::*;
use crate::angle::Angle;
use crate::d3::intersection::IntersectionKind;
use crate::d3::rotation::RotationVector;

// =============================================================================
// HELPERS
// =============================================================================

fn cigar() -> Ellipsoid {
    Ellipsoid::aligned(Point::origin(), DVec3::new(3.0, 1.0, 1.0)).unwrap()
}

fn turned_cigar() -> Ellipsoid {
    let orientation = Quaternion::from_rotation_vector(&RotationVector::z(Angle::degrees(90.0))).unwrap();

    Ellipsoid::new(Point::origin(), 3.0, 1.0, 1.0, orientation).unwrap()
}

fn assert_vector_near(actual: DVec3, expected: DVec3) {
    assert!(
        (actual - expected).length() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

#[test]
fn test_rejects_non_positive_semi_axes() {
    assert!(matches!(
        Ellipsoid::new(Point::origin(), 1.0, 0.0, 1.0, Quaternion::unit()),
        Err(GeometryError::Domain { .. })
    ));
    assert!(!Ellipsoid::undefined().is_defined());
}

#[test]
fn test_axes_follow_orientation() {
    let ellipsoid = turned_cigar();

    assert_vector_near(ellipsoid.first_axis().unwrap(), DVec3::Y);
    assert_vector_near(ellipsoid.second_axis().unwrap(), -DVec3::X);
    assert_vector_near(ellipsoid.third_axis().unwrap(), DVec3::Z);
}

#[test]
fn test_matrix_is_diagonal_when_aligned() {
    let matrix = cigar().matrix().unwrap();

    assert!(matrix.abs_diff_eq(DMat3::from_diagonal(DVec3::new(1.0 / 9.0, 1.0, 1.0)), 1e-12));
}

// =============================================================================
// POINTS
// =============================================================================

#[test]
fn test_surface_and_solid() {
    let ellipsoid = turned_cigar();

    assert!(ellipsoid.intersects_point(&Point::new(0.0, 3.0, 0.0)).unwrap());
    assert!(!ellipsoid.intersects_point(&Point::new(3.0, 0.0, 0.0)).unwrap());
    assert!(ellipsoid.contains_point(&Point::new(0.0, 2.5, 0.0)).unwrap());
    assert!(!ellipsoid.contains_point(&Point::new(2.5, 0.0, 0.0)).unwrap());
}

#[test]
fn test_point_set() {
    let ellipsoid = cigar();
    let set = PointSet::new([
        Point::new(3.0, 0.0, 0.0),
        Point::new(-3.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 0.0),
    ]);

    assert_eq!(
        ellipsoid.intersection_with_point_set(&set).unwrap().kind(),
        IntersectionKind::PointSet
    );
    assert!(ellipsoid.contains_point_set(&set).unwrap());
}

// =============================================================================
// CURVES
// =============================================================================

#[test]
fn test_line_along_major_axis() {
    let ellipsoid = turned_cigar();
    let line = Line::new(Point::new(0.0, -5.0, 0.0), DVec3::Y).unwrap();

    let intersection = ellipsoid.intersection_with_line(&line).unwrap();
    let chord = intersection.downcast::<Segment>().unwrap();

    assert!(chord.first_point().is_near(&Point::new(0.0, -3.0, 0.0), 1e-9).unwrap());
    assert!(chord.second_point().is_near(&Point::new(0.0, 3.0, 0.0), 1e-9).unwrap());
}

#[test]
fn test_ray_in_sight() {
    let ellipsoid = cigar();
    let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), DVec3::X).unwrap();

    let both = ellipsoid.intersection_with_ray(&ray, false).unwrap();
    let first = ellipsoid.intersection_with_ray(&ray, true).unwrap();

    assert_eq!(both.kind(), IntersectionKind::Segment);
    assert!(first
        .downcast::<Point>()
        .unwrap()
        .is_near(&Point::new(-3.0, 0.0, 0.0), 1e-9)
        .unwrap());
}

#[test]
fn test_tangent_and_missing_segment() {
    let ellipsoid = cigar();
    let tangent = Segment::new(Point::new(-4.0, 1.0, 0.0), Point::new(4.0, 1.0, 0.0));
    let outside = Segment::new(Point::new(-4.0, 2.0, 0.0), Point::new(4.0, 2.0, 0.0));
    let inside = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));

    assert_eq!(
        ellipsoid.intersection_with_segment(&tangent).unwrap().kind(),
        IntersectionKind::Point
    );
    assert!(!ellipsoid.intersects_segment(&outside).unwrap());
    assert!(ellipsoid.intersection_with_segment(&inside).unwrap().is_empty());
    assert!(ellipsoid.contains_segment(&inside).unwrap());
}

// =============================================================================
// PLANES
// =============================================================================

#[test]
fn test_plane_reach() {
    let ellipsoid = cigar();

    let cutting = Plane::new(Point::new(0.0, 0.0, 0.9), DVec3::Z).unwrap();
    let missing = Plane::new(Point::new(0.0, 0.0, 1.1), DVec3::Z).unwrap();
    let end_cap = Plane::new(Point::new(2.9, 0.0, 0.0), DVec3::X).unwrap();

    assert!(ellipsoid.intersects_plane(&cutting).unwrap());
    assert!(!ellipsoid.intersects_plane(&missing).unwrap());
    assert!(ellipsoid.intersects_plane(&end_cap).unwrap());
}

// =============================================================================
// TRANSFORMATIONS
// =============================================================================

#[test]
fn test_rotation_turns_axes() {
    let rotation = RotationMatrix::from_rotation_vector(&RotationVector::z(Angle::degrees(90.0))).unwrap();
    let transformation = Transformation::rotation(&rotation).unwrap();

    let turned = cigar().apply_transformation(&transformation).unwrap();

    assert_abs_diff_eq!(turned.first_axis().unwrap().dot(DVec3::Y).abs(), 1.0, epsilon = 1e-9);
    assert!(turned.intersects_point(&Point::new(0.0, 3.0, 0.0)).unwrap());
}

#[test]
fn test_translation_and_reflection() {
    let mut ellipsoid = cigar();
    ellipsoid
        .apply_transformation_mut(&Transformation::translation(DVec3::new(0.0, 0.0, 2.0)))
        .unwrap();
    assert_eq!(ellipsoid.center(), Point::new(0.0, 0.0, 2.0));

    let mirror = Transformation::scaling(DVec3::new(1.0, 1.0, -1.0)).unwrap();
    let mirrored = ellipsoid.apply_transformation(&mirror).unwrap();

    assert_eq!(mirrored.center(), Point::new(0.0, 0.0, -2.0));
    assert!(mirrored.intersects_point(&Point::new(3.0, 0.0, -2.0)).unwrap());
}

#[test]
fn test_rejects_non_rigid() {
    let stretch = Transformation::scaling(DVec3::new(2.0, 1.0, 1.0)).unwrap();

    assert!(matches!(
        cigar().apply_transformation(&stretch),
        Err(GeometryError::Domain { .. })
    ));
}

#[test]
fn test_undefined_operand() {
    assert_eq!(
        Ellipsoid::undefined().contains_point(&Point::origin()),
        Err(GeometryError::undefined("Ellipsoid"))
    );
    assert_eq!(
        cigar().contains_point(&Point::undefined()),
        Err(GeometryError::undefined("Point"))
    );
}
