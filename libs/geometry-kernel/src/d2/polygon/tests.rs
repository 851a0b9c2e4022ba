use super::*;
use crate::d2::transformation::Transformation;
use glam::DVec2;

fn rectangle(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::simple(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
    .unwrap()
}

fn framed_square() -> Polygon {
    Polygon::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ],
        vec![vec![
            Point::new(1.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 1.0),
        ]],
    )
    .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_closing_vertex_is_dropped() {
    let polygon = Polygon::simple(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(0.0, 0.0),
    ])
    .unwrap();

    assert_eq!(polygon.vertex_count(), 3);
    assert_eq!(polygon.outer_ring().unwrap().point_count(), 4);
}

#[test]
fn test_too_few_vertices() {
    let result = Polygon::simple(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);

    assert!(matches!(result, Err(GeometryError::Domain { .. })));
}

#[test]
fn test_undefined_operand() {
    let undefined = Polygon::undefined();

    assert!(!undefined.is_defined());
    assert!(undefined.contains_point(&Point::origin()).is_err());
    assert!(rectangle(0.0, 0.0, 1.0, 1.0).intersects_polygon(&undefined).is_err());
}

// ============================================================================
// Access
// ============================================================================

#[test]
fn test_rings_and_edges() {
    let polygon = framed_square();

    assert_eq!(polygon.inner_ring_count(), 1);
    assert_eq!(polygon.edge_count(), 8);
    assert_eq!(polygon.vertices().len(), 8);
    assert_eq!(polygon.vertex_at(4).unwrap(), Point::new(1.0, 1.0));
    assert_eq!(
        polygon.edge_at(7).unwrap(),
        Segment::new(Point::new(3.0, 1.0), Point::new(1.0, 1.0))
    );
    assert!(polygon.edge_at(8).is_err());
    assert!(polygon.inner_ring_at(1).is_err());
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_contains_respects_holes() {
    let polygon = framed_square();

    assert!(polygon.contains_point(&Point::new(0.5, 0.5)).unwrap());
    assert!(polygon.contains_point(&Point::new(0.0, 2.0)).unwrap());
    assert!(!polygon.contains_point(&Point::new(2.0, 2.0)).unwrap());
    assert!(!polygon.contains_point(&Point::new(5.0, 2.0)).unwrap());
}

#[test]
fn test_contains_line_string() {
    let polygon = framed_square();
    let along_bottom = LineString::new(vec![Point::new(0.5, 0.5), Point::new(3.5, 0.5)]);
    let through_hole = LineString::new(vec![Point::new(0.5, 2.0), Point::new(3.5, 2.0)]);

    assert!(polygon.contains_line_string(&along_bottom).unwrap());
    assert!(!polygon.contains_line_string(&through_hole).unwrap());
    assert!(!polygon.contains_line_string(&LineString::empty()).unwrap());
}

#[test]
fn test_contains_point_set() {
    let polygon = rectangle(0.0, 0.0, 2.0, 2.0);
    let inside = PointSet::new([Point::new(0.5, 0.5), Point::new(1.5, 1.0)]);
    let straddling = PointSet::new([Point::new(0.5, 0.5), Point::new(3.0, 1.0)]);

    assert!(polygon.contains_point_set(&inside).unwrap());
    assert!(!polygon.contains_point_set(&straddling).unwrap());
}

// ============================================================================
// Boolean operations
// ============================================================================

#[test]
fn test_overlapping_intersection_is_polygon() {
    let a = rectangle(0.0, 0.0, 2.0, 2.0);
    let b = rectangle(1.0, 1.0, 3.0, 3.0);

    let intersection = a.intersection_with(&b).unwrap();
    let overlap = intersection.downcast::<Polygon>().unwrap();

    assert_eq!(overlap.vertex_count(), 4);
    assert!(overlap.contains_point(&Point::new(1.5, 1.5)).unwrap());
    assert!(!overlap.contains_point(&Point::new(0.5, 0.5)).unwrap());
}

#[test]
fn test_shared_edge_intersection_is_segment() {
    let a = rectangle(0.0, 0.0, 1.0, 1.0);
    let b = rectangle(1.0, 0.0, 2.0, 1.0);

    let intersection = a.intersection_with(&b).unwrap();

    assert_eq!(intersection.kind(), IntersectionKind::Segment);
    assert_eq!(
        *intersection.downcast::<Segment>().unwrap(),
        Segment::new(Point::new(1.0, 0.0), Point::new(1.0, 1.0))
    );
}

#[test]
fn test_corner_contact_is_point() {
    let a = rectangle(0.0, 0.0, 1.0, 1.0);
    let b = rectangle(1.0, 1.0, 2.0, 2.0);

    let intersection = a.intersection_with(&b).unwrap();

    assert_eq!(*intersection.downcast::<Point>().unwrap(), Point::new(1.0, 1.0));
}

#[test]
fn test_disjoint_intersection_is_empty() {
    let a = rectangle(0.0, 0.0, 1.0, 1.0);
    let b = rectangle(5.0, 5.0, 6.0, 6.0);

    assert!(a.intersection_with(&b).unwrap().is_empty());
    assert!(!a.intersects_polygon(&b).unwrap());
}

#[test]
fn test_difference() {
    let a = rectangle(0.0, 0.0, 2.0, 2.0);
    let b = rectangle(1.0, 0.0, 3.0, 2.0);

    let difference = a.difference_with(&b).unwrap();
    let rest = difference.downcast::<Polygon>().unwrap();

    assert!(rest.contains_point(&Point::new(0.5, 1.0)).unwrap());
    assert!(!rest.contains_point(&Point::new(1.5, 1.0)).unwrap());

    assert!(a.difference_with(&a).unwrap().is_empty());
}

#[test]
fn test_union() {
    let a = rectangle(0.0, 0.0, 2.0, 2.0);

    assert_eq!(a.union_with(&rectangle(1.0, 1.0, 3.0, 3.0)).unwrap().polygon_count(), 1);
    assert_eq!(a.union_with(&rectangle(5.0, 5.0, 6.0, 6.0)).unwrap().polygon_count(), 2);
}

#[test]
fn test_convex_hull_of_l_shape() {
    let l_shape = Polygon::simple(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ])
    .unwrap();

    let hull = l_shape.convex_hull().unwrap();

    assert_eq!(hull.vertex_count(), 5);
    assert!(hull.contains_point(&Point::new(1.4, 1.4)).unwrap());
    assert!(!l_shape.contains_point(&Point::new(1.4, 1.4)).unwrap());
}

// ============================================================================
// Transformation
// ============================================================================

#[test]
fn test_translation_moves_every_ring() {
    let polygon = framed_square()
        .apply_transformation(&Transformation::translation(DVec2::new(10.0, 0.0)))
        .unwrap();

    assert!(polygon.contains_point(&Point::new(10.5, 0.5)).unwrap());
    assert!(!polygon.contains_point(&Point::new(12.0, 2.0)).unwrap());
    assert_eq!(polygon.vertex_at(4).unwrap(), Point::new(11.0, 1.0));
}
