use approx::assert_abs_diff_eq;

use super::*;
use crate::d3::intersection::IntersectionKind;
use crate::d3::line_string::LineString;

fn upright(degrees: f64) -> Cone {
    Cone::new(Point::origin(), DVec3::Z, Angle::degrees(degrees)).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_half_angle_domain() {
    assert!(Cone::new(Point::origin(), DVec3::Z, Angle::degrees(0.0)).is_err());
    assert!(Cone::new(Point::origin(), DVec3::Z, Angle::degrees(180.0)).is_err());
    assert!(Cone::new(Point::origin(), DVec3::ZERO, Angle::degrees(30.0)).is_err());
    assert!(!Cone::new(Point::undefined(), DVec3::Z, Angle::degrees(30.0)).unwrap().is_defined());
}

#[test]
fn test_axis_is_normalized() {
    let cone = Cone::new(Point::origin(), DVec3::new(0.0, 0.0, 3.0), Angle::degrees(30.0)).unwrap();

    assert_eq!(cone.axis(), DVec3::Z);
}

// ============================================================================
// Lateral rays
// ============================================================================

#[test]
fn test_lateral_rays_lie_on_surface() {
    let cone = upright(45.0);
    let rays = cone.rays_of_lateral_surface(4).unwrap();

    assert_eq!(rays.len(), 4);
    for ray in &rays {
        assert_eq!(ray.origin(), Point::origin());
        assert_abs_diff_eq!(ray.direction().z, 45f64.to_radians().cos(), epsilon = 1e-12);
    }

    assert!(cone.rays_of_lateral_surface(0).is_err());
}

#[test]
fn test_lateral_rays_are_evenly_spread() {
    let rays = upright(30.0).rays_of_lateral_surface(8).unwrap();

    for pair in rays.windows(2) {
        let first = pair[0].direction();
        let second = pair[1].direction();
        let azimuth = Angle::between(
            DVec3::new(first.x, first.y, 0.0),
            DVec3::new(second.x, second.y, 0.0),
        )
        .unwrap();

        assert_abs_diff_eq!(azimuth.in_degrees(), 45.0, epsilon = 1e-9);
    }
}

#[test]
fn test_lateral_rays_are_nested_across_levels() {
    let cone = upright(30.0);

    for level in 3..=16 {
        let lower = cone.rays_of_lateral_surface(level).unwrap();
        let higher = cone.rays_of_lateral_surface(level + 1).unwrap();

        assert_eq!(higher.len(), level + 1);
        for ray in &lower {
            assert!(
                higher
                    .iter()
                    .any(|other| (other.direction() - ray.direction()).length() < 1e-12),
                "level {level}: {} missing",
                ray.direction()
            );
        }
    }
}

#[test]
fn test_level_outside_bounds_is_rejected() {
    let cone = upright(30.0);

    for level in [0, 1, 2] {
        assert!(matches!(
            cone.rays_of_lateral_surface(level),
            Err(GeometryError::Domain { .. })
        ));
    }
    assert!(cone.rays_of_lateral_surface(100_001).is_err());
}

// ============================================================================
// Containment and distance
// ============================================================================

#[test]
fn test_contains_point() {
    let cone = upright(45.0);

    assert!(cone.contains_point(&Point::origin()).unwrap());
    assert!(cone.contains_point(&Point::new(0.0, 0.0, 1.0)).unwrap());
    assert!(cone.contains_point(&Point::new(1.0, 0.0, 1.0)).unwrap());
    assert!(!cone.contains_point(&Point::new(1.1, 0.0, 1.0)).unwrap());
    assert!(!cone.contains_point(&Point::new(0.0, 0.0, -1.0)).unwrap());
}

#[test]
fn test_distance_to_lateral_surface() {
    let cone = upright(45.0);

    assert_abs_diff_eq!(
        cone.distance_to(&Point::new(0.0, 0.0, 1.0)).unwrap(),
        std::f64::consts::FRAC_1_SQRT_2,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(cone.distance_to(&Point::new(0.0, 0.0, -2.0)).unwrap(), 2.0);
    assert_abs_diff_eq!(cone.distance_to(&Point::new(3.0, 0.0, 3.0)).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_contains_ray_and_segment() {
    let cone = upright(45.0);
    let inner = Point::new(0.0, 0.0, 1.0);

    assert!(cone.contains_ray(&Ray::new(inner, DVec3::Z).unwrap()).unwrap());
    assert!(!cone.contains_ray(&Ray::new(inner, DVec3::X).unwrap()).unwrap());
    assert!(cone
        .contains_segment(&Segment::new(inner, Point::new(0.5, 0.5, 2.0)))
        .unwrap());
}

#[test]
fn test_contains_sphere() {
    let cone = upright(45.0);

    assert!(cone.contains_sphere(&Sphere::new(Point::new(0.0, 0.0, 5.0), 1.0).unwrap()).unwrap());
    assert!(!cone.contains_sphere(&Sphere::new(Point::new(0.0, 0.0, 5.0), 4.0).unwrap()).unwrap());
}

// ============================================================================
// Discretized intersections
// ============================================================================

#[test]
fn test_sphere_crossed_twice_by_every_ray() {
    let cone = upright(30.0);
    let sphere = Sphere::new(Point::new(0.0, 0.0, 10.0), 8.0).unwrap();

    let intersection = cone.intersection_with_sphere(&sphere, false, 12).unwrap();

    assert_eq!(intersection.kind(), IntersectionKind::Complex);
    assert_eq!(intersection.composite().object_count(), 2);

    let near = intersection.composite().object_at(0).unwrap().downcast::<LineString>().unwrap();
    let far = intersection.composite().object_at(1).unwrap().downcast::<LineString>().unwrap();

    assert_eq!(near.point_count(), 12);
    assert_eq!(far.point_count(), 12);

    let expected_near = 10.0 * 30f64.to_radians().cos() - 39f64.sqrt();
    for point in near {
        assert_abs_diff_eq!(point.distance_to(&Point::origin()).unwrap(), expected_near, epsilon = 1e-9);
        assert_abs_diff_eq!(point.distance_to(&sphere.center()).unwrap(), 8.0, epsilon = 1e-9);
    }
}

#[test]
fn test_only_in_sight_keeps_near_hits() {
    let cone = upright(30.0);
    let sphere = Sphere::new(Point::new(0.0, 0.0, 10.0), 8.0).unwrap();

    let intersection = cone.intersection_with_sphere(&sphere, true, 12).unwrap();

    assert!(intersection.is_complex());
    assert_eq!(intersection.composite().object_count(), 1);
}

#[test]
fn test_sphere_between_rays_is_missed() {
    let cone = upright(30.0);
    let sphere = Sphere::new(Point::new(0.0, 0.0, 10.0), 1.0).unwrap();

    assert!(!cone.intersects_sphere(&sphere, 40).unwrap());
    assert!(cone.intersection_with_sphere(&sphere, false, 40).unwrap().is_empty());
    assert!(cone.contains_sphere(&sphere).unwrap());
}

#[test]
fn test_ellipsoid_around_apex() {
    let cone = upright(45.0);
    let ellipsoid = Ellipsoid::aligned(Point::origin(), DVec3::new(2.0, 3.0, 4.0)).unwrap();

    let intersection = cone.intersection_with_ellipsoid(&ellipsoid, false, 8).unwrap();

    assert!(intersection.is_complex());
    assert_eq!(intersection.composite().object_count(), 1);
    assert!(cone.intersects_ellipsoid(&ellipsoid, 8).unwrap());
}

#[test]
fn test_hit_count_grows_with_level() {
    let cone = upright(45.0);
    let ellipsoid = Ellipsoid::aligned(Point::origin(), DVec3::new(2.0, 3.0, 4.0)).unwrap();

    let mut previous = 0;
    for level in [4, 8, 16, 32] {
        let intersection = cone.intersection_with_ellipsoid(&ellipsoid, true, level).unwrap();
        let hits = intersection
            .composite()
            .object_at(0)
            .unwrap()
            .downcast::<LineString>()
            .unwrap()
            .point_count();

        assert!(hits >= previous);
        previous = hits;
    }

    assert_eq!(previous, 32);
}

fn hit_count(intersection: &Intersection) -> usize {
    intersection
        .composite()
        .iter()
        .filter_map(|object| object.downcast::<LineString>().ok())
        .map(LineString::point_count)
        .sum()
}

#[test]
fn test_hit_count_never_drops_between_consecutive_levels() {
    let cone = upright(30.0);
    let half_turn = DVec3::new(0.0, -0.5, 3f64.sqrt() / 2.0);
    let sphere = Sphere::new(Point::from_vector(half_turn * 10.0), 1.0).unwrap();
    let ellipsoid = Ellipsoid::aligned(Point::from_vector(half_turn * 10.0), DVec3::new(1.0, 1.5, 1.0)).unwrap();

    let mut previous_sphere_hits = 0;
    let mut previous_ellipsoid_hits = 0;

    for level in 3..=24 {
        let sphere_hits = hit_count(&cone.intersection_with_sphere(&sphere, false, level).unwrap());
        let ellipsoid_hits = hit_count(&cone.intersection_with_ellipsoid(&ellipsoid, false, level).unwrap());

        assert!(sphere_hits >= previous_sphere_hits, "level {level}: {sphere_hits} < {previous_sphere_hits}");
        assert!(
            ellipsoid_hits >= previous_ellipsoid_hits,
            "level {level}: {ellipsoid_hits} < {previous_ellipsoid_hits}"
        );

        previous_sphere_hits = sphere_hits;
        previous_ellipsoid_hits = ellipsoid_hits;
    }

    assert_eq!(hit_count(&cone.intersection_with_sphere(&sphere, false, 3).unwrap()), 2);
}

#[test]
fn test_undefined_target() {
    let cone = upright(30.0);

    assert_eq!(
        cone.intersects_sphere(&Sphere::undefined(), 10),
        Err(GeometryError::undefined("Sphere"))
    );
}

// ============================================================================
// Transformation
// ============================================================================

#[test]
fn test_rigid_transformation_only() {
    let cone = upright(30.0);

    let moved = cone
        .apply_transformation(&Transformation::translation(DVec3::new(1.0, 2.0, 3.0)))
        .unwrap();
    assert_eq!(moved.apex(), Point::new(1.0, 2.0, 3.0));
    assert_eq!(moved.axis(), DVec3::Z);

    assert!(cone
        .apply_transformation(&Transformation::scaling(DVec3::new(1.0, 1.0, 2.0)).unwrap())
        .is_err());
}
