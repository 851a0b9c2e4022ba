//! Crossings of straight curves with quadric surfaces.
//!
//! Spheres and ellipsoids are both level sets `(x - c)ᵀ M (x - c) = 1` of a
//! positive definite `M`. Substituting `x = o + t d` gives the quadratic
//! `a₂ t² + 2 a₁ t + a₀ = 0` shared by every line-like query.

use config::constants::{approx_equal, EPSILON};
use glam::{DMat3, DVec3};

use crate::d3::intersection::Intersection;
use crate::d3::line::Line;
use crate::d3::point::Point;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::error::{ensure_defined, Result};

/// Level set `(x - center)ᵀ matrix (x - center) = 1`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Quadric {
    center: DVec3,
    matrix: DMat3,
}

/// Straight curve crossed against a quadric.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Curve<'a> {
    Line(&'a Line),
    Ray(&'a Ray),
    Segment(&'a Segment),
}

impl Quadric {
    pub(crate) fn new(center: DVec3, matrix: DMat3) -> Self {
        Self { center, matrix }
    }

    /// `(p - c)ᵀ M (p - c)`: below 1 inside, 1 on the surface.
    pub(crate) fn level_at(&self, point: &Point) -> f64 {
        let offset = point.as_vector() - self.center;

        offset.dot(self.matrix * offset)
    }

    pub(crate) fn is_on_surface(&self, point: &Point) -> bool {
        approx_equal(self.level_at(point), 1.0)
    }

    pub(crate) fn is_inside(&self, point: &Point) -> bool {
        self.level_at(point) <= 1.0 + EPSILON
    }

    /// Sorted parameters `t` at which `origin + t direction` is on the surface.
    ///
    /// A tangent line yields one parameter.
    fn crossings(&self, origin: DVec3, direction: DVec3) -> Vec<f64> {
        let offset = origin - self.center;
        let scaled_direction = self.matrix * direction;

        let a2 = direction.dot(scaled_direction);
        let a1 = offset.dot(scaled_direction) / a2;
        let a0 = (offset.dot(self.matrix * offset) - 1.0) / a2;

        let discriminant = a1 * a1 - a0;
        let tolerance = EPSILON * (a1 * a1).max(a0.abs()).max(1.0);

        if discriminant < -tolerance {
            return Vec::new();
        }

        if discriminant.abs() <= tolerance {
            return vec![-a1];
        }

        let root = discriminant.sqrt();

        vec![-a1 - root, -a1 + root]
    }

    /// Intersection of the surface with a line, ray or segment.
    ///
    /// Two crossings yield the chord between them as a Segment, one crossing
    /// (tangency, or a ray/segment ending inside) a Point. With
    /// `only_in_sight`, a ray keeps only its first crossing.
    pub(crate) fn intersection_with_curve(&self, curve: Curve<'_>, only_in_sight: bool) -> Result<Intersection> {
        let points = match curve {
            Curve::Line(line) => {
                ensure_defined(line.is_defined(), "Line")?;

                self.crossings(line.origin().as_vector(), line.direction())
                    .into_iter()
                    .map(|parameter| line.point_at(parameter))
                    .collect::<Vec<_>>()
            }
            Curve::Ray(ray) => {
                ensure_defined(ray.is_defined(), "Ray")?;

                let mut parameters: Vec<f64> = self
                    .crossings(ray.origin().as_vector(), ray.direction())
                    .into_iter()
                    .filter(|parameter| *parameter >= -EPSILON)
                    .map(|parameter| parameter.max(0.0))
                    .collect();

                if only_in_sight {
                    parameters.truncate(1);
                }

                parameters.into_iter().map(|parameter| ray.point_at(parameter)).collect()
            }
            Curve::Segment(segment) => {
                if segment.is_degenerate()? {
                    let point = segment.first_point();

                    return Ok(if self.is_on_surface(&point) {
                        Intersection::point(point)
                    } else {
                        Intersection::empty()
                    });
                }

                let origin = segment.first_point().as_vector();
                let direction = segment.second_point() - segment.first_point();

                self.crossings(origin, direction)
                    .into_iter()
                    .filter(|parameter| (-EPSILON..=1.0 + EPSILON).contains(parameter))
                    .map(|parameter| segment.point_at(parameter.clamp(0.0, 1.0)))
                    .collect()
            }
        };

        Ok(intersection_from_crossings(&points))
    }
}

fn intersection_from_crossings(points: &[Point]) -> Intersection {
    match points {
        [] => Intersection::empty(),
        [point] => Intersection::point(*point),
        [first, second, ..] if first == second => Intersection::point(*first),
        [first, second, ..] => Intersection::segment(Segment::new(*first, *second)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::d3::intersection::IntersectionKind;

    fn unit_sphere() -> Quadric {
        Quadric::new(DVec3::ZERO, DMat3::IDENTITY)
    }

    #[test]
    fn test_chord_through_center() {
        let line = Line::new(Point::new(0.0, 0.0, 2.0), -DVec3::Z).unwrap();
        let intersection = unit_sphere().intersection_with_curve(Curve::Line(&line), false).unwrap();

        assert_eq!(
            *intersection.downcast::<Segment>().unwrap(),
            Segment::new(Point::new(0.0, 0.0, 1.0), Point::new(0.0, 0.0, -1.0))
        );
    }

    #[test]
    fn test_tangent_line() {
        let line = Line::new(Point::new(1.0, 0.0, -5.0), DVec3::Z).unwrap();
        let intersection = unit_sphere().intersection_with_curve(Curve::Line(&line), false).unwrap();

        assert_eq!(intersection.kind(), IntersectionKind::Point);
    }

    #[test]
    fn test_ray_starting_inside() {
        let ray = Ray::new(Point::origin(), DVec3::X).unwrap();
        let intersection = unit_sphere().intersection_with_curve(Curve::Ray(&ray), false).unwrap();

        assert_eq!(
            *intersection.downcast::<Point>().unwrap(),
            Point::new(1.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_level_set() {
        let quadric = Quadric::new(DVec3::ZERO, DMat3::from_diagonal(DVec3::new(1.0, 0.25, 1.0)));

        assert!(quadric.is_on_surface(&Point::new(0.0, 2.0, 0.0)));
        assert!(quadric.is_inside(&Point::new(0.0, 1.5, 0.0)));
        assert!(!quadric.is_inside(&Point::new(0.0, 2.5, 0.0)));
    }
}
