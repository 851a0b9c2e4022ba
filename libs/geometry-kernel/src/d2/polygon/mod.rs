//! # 2D Polygon
//!
//! Polygon with one outer ring and zero or more inner rings (holes).
//!
//! ## Rings
//!
//! Rings are stored open: the closing vertex is not repeated. Accessors that
//! return a ring as a [`LineString`] close it.
//!
//! ## Boolean operations
//!
//! Intersection, difference, union and convex hull are computed by `geo` on
//! a `geo::Polygon<f64>` built at the call boundary.

use std::fmt;

use geo::{BooleanOps, Contains, ConvexHull, Intersects};

use crate::d2::intersection::{Intersection, IntersectionKind};
use crate::d2::line_string::LineString;
use crate::d2::multi_polygon::MultiPolygon;
use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::segment::Segment;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Planar polygon.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    outer_ring: Vec<Point>,
    inner_rings: Vec<Vec<Point>>,
}

impl Polygon {
    /// Creates a polygon from its rings.
    ///
    /// A repeated closing vertex is dropped. The outer ring needs at least
    /// three vertices, each inner ring too.
    pub fn new(outer_ring: Vec<Point>, inner_rings: Vec<Vec<Point>>) -> Result<Self> {
        let outer_ring = open_ring(outer_ring);
        let inner_rings: Vec<Vec<Point>> = inner_rings.into_iter().map(open_ring).collect();

        let polygon = Self {
            outer_ring,
            inner_rings,
        };

        if !polygon.is_defined() {
            return Ok(Self::undefined());
        }

        for ring in std::iter::once(&polygon.outer_ring).chain(&polygon.inner_rings) {
            if ring.len() < 3 {
                return Err(GeometryError::domain(format!(
                    "polygon ring needs at least 3 vertices, got {}",
                    ring.len()
                )));
            }
        }

        Ok(polygon)
    }

    /// Polygon without holes.
    pub fn simple(outer_ring: Vec<Point>) -> Result<Self> {
        Self::new(outer_ring, Vec::new())
    }

    /// Undefined sentinel: no outer ring.
    pub fn undefined() -> Self {
        Self {
            outer_ring: Vec::new(),
            inner_rings: Vec::new(),
        }
    }

    /// Returns true if the outer ring is present and every vertex is defined.
    pub fn is_defined(&self) -> bool {
        !self.outer_ring.is_empty()
            && self.outer_ring.iter().all(Point::is_defined)
            && self.inner_rings.iter().flatten().all(Point::is_defined)
    }

    /// Same ring structure with corresponding vertices within `tolerance`.
    pub fn is_near(&self, other: &Polygon, tolerance: f64) -> Result<bool> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        if self.inner_rings.len() != other.inner_rings.len() {
            return Ok(false);
        }

        let rings = std::iter::once((&self.outer_ring, &other.outer_ring))
            .chain(self.inner_rings.iter().zip(&other.inner_rings));

        for (first, second) in rings {
            if first.len() != second.len() {
                return Ok(false);
            }

            for (a, b) in first.iter().zip(second) {
                if !a.is_near(b, tolerance)? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Number of holes.
    pub fn inner_ring_count(&self) -> usize {
        self.inner_rings.len()
    }

    /// Outer ring, closed.
    pub fn outer_ring(&self) -> Result<LineString> {
        self.ensure_defined()?;

        Ok(closed_ring(&self.outer_ring))
    }

    /// Inner ring at `index`, closed.
    pub fn inner_ring_at(&self, index: usize) -> Result<LineString> {
        self.ensure_defined()?;

        self.inner_rings
            .get(index)
            .map(|ring| closed_ring(ring))
            .ok_or_else(|| GeometryError::out_of_bounds(index, self.inner_rings.len()))
    }

    /// Vertices of the outer ring.
    pub fn outer_ring_vertices(&self) -> &[Point] {
        &self.outer_ring
    }

    /// Number of vertices over all rings.
    pub fn vertex_count(&self) -> usize {
        self.outer_ring.len() + self.inner_rings.iter().map(Vec::len).sum::<usize>()
    }

    /// Number of edges over all rings; equal to the vertex count.
    pub fn edge_count(&self) -> usize {
        self.vertex_count()
    }

    /// Vertices of the outer ring, then of each inner ring.
    pub fn vertices(&self) -> Vec<Point> {
        self.rings().flatten().copied().collect()
    }

    /// Vertex at `index` in [`vertices`](Self::vertices) order.
    pub fn vertex_at(&self, index: usize) -> Result<Point> {
        self.ensure_defined()?;

        self.rings()
            .flatten()
            .nth(index)
            .copied()
            .ok_or_else(|| GeometryError::out_of_bounds(index, self.vertex_count()))
    }

    /// Edges of every ring, each ring closed back to its first vertex.
    pub fn edges(&self) -> Vec<Segment> {
        self.rings().flat_map(|ring| ring_edges(ring)).collect()
    }

    /// Edge at `index` in [`edges`](Self::edges) order.
    pub fn edge_at(&self, index: usize) -> Result<Segment> {
        self.ensure_defined()?;

        self.rings()
            .flat_map(|ring| ring_edges(ring))
            .nth(index)
            .ok_or_else(|| GeometryError::out_of_bounds(index, self.edge_count()))
    }

    /// Returns true if the polygons share at least one point.
    pub fn intersects_polygon(&self, other: &Polygon) -> Result<bool> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        Ok(self.to_geo().intersects(&other.to_geo()))
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined()?;
        ensure_defined(point.is_defined(), "Point")?;

        Ok(self.to_geo().intersects(&point.to_coord()))
    }

    /// Returns true if every point lies inside or on the boundary.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        self.ensure_defined()?;
        ensure_defined(point_set.is_defined(), "PointSet")?;

        let polygon = self.to_geo();

        Ok(point_set.iter().all(|point| polygon.intersects(&point.to_coord())))
    }

    /// Returns true if the line string lies in the polygon.
    pub fn contains_line_string(&self, line_string: &LineString) -> Result<bool> {
        self.ensure_defined()?;
        ensure_defined(line_string.is_defined(), "LineString")?;

        if line_string.is_empty() {
            return Ok(false);
        }

        Ok(self.to_geo().contains(&line_string.to_geo()))
    }

    /// Returns true if the segment lies in the polygon.
    pub fn contains_segment(&self, segment: &Segment) -> Result<bool> {
        self.contains_line_string(&LineString::segment(segment)?)
    }

    /// Smallest convex polygon enclosing every vertex.
    pub fn convex_hull(&self) -> Result<Polygon> {
        self.ensure_defined()?;

        Self::from_geo(&self.to_geo().convex_hull())
    }

    /// Common part of both polygons.
    ///
    /// Overlapping areas come back as polygons. Polygons that only touch
    /// yield the shared boundary points and edge pieces instead.
    pub fn intersection_with(&self, other: &Polygon) -> Result<Intersection> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        let overlap = self.to_geo().intersection(&other.to_geo());

        let mut intersection = Intersection::empty();
        for polygon in &overlap {
            intersection += Intersection::polygon(Self::from_geo(polygon)?);
        }

        if !intersection.is_empty() || !self.intersects_polygon(other)? {
            return Ok(intersection);
        }

        let mut segments: Vec<Segment> = Vec::new();
        let mut points: Vec<Point> = Vec::new();

        for edge in self.edges() {
            for other_edge in other.edges() {
                let contact = edge.intersection_with_segment(&other_edge)?;

                match contact.kind() {
                    IntersectionKind::Segment => {
                        let segment = *contact.downcast::<Segment>()?;
                        if !segments.contains(&segment) {
                            segments.push(segment);
                        }
                    }
                    IntersectionKind::Point => points.push(*contact.downcast::<Point>()?),
                    _ => {}
                }
            }
        }

        for segment in &segments {
            intersection += Intersection::segment(*segment);
        }

        let mut loose = Vec::new();
        for point in points {
            let mut covered = false;
            for segment in &segments {
                covered |= segment.contains_point(&point)?;
            }

            if !covered {
                loose.push(point);
            }
        }

        if !loose.is_empty() {
            intersection += Intersection::from_points(loose);
        }

        Ok(intersection)
    }

    /// Part of `self` outside `other`, as zero or more polygons.
    pub fn difference_with(&self, other: &Polygon) -> Result<Intersection> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        let mut difference = Intersection::empty();
        for polygon in &self.to_geo().difference(&other.to_geo()) {
            difference += Intersection::polygon(Self::from_geo(polygon)?);
        }

        Ok(difference)
    }

    /// Union of both polygons.
    pub fn union_with(&self, other: &Polygon) -> Result<MultiPolygon> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        MultiPolygon::from_geo(&self.to_geo().union(&other.to_geo()))
    }

    pub(crate) fn to_geo(&self) -> geo::Polygon<f64> {
        let ring = |vertices: &[Point]| {
            geo::LineString::new(vertices.iter().map(|point| point.to_coord()).collect())
        };

        geo::Polygon::new(
            ring(&self.outer_ring),
            self.inner_rings.iter().map(|inner| ring(inner)).collect(),
        )
    }

    pub(crate) fn from_geo(polygon: &geo::Polygon<f64>) -> Result<Self> {
        let ring = |line_string: &geo::LineString<f64>| -> Vec<Point> {
            line_string.coords().map(|coord| Point::from_coord(*coord)).collect()
        };

        Self::new(
            ring(polygon.exterior()),
            polygon.interiors().iter().map(ring).collect(),
        )
    }

    fn rings(&self) -> impl Iterator<Item = &Vec<Point>> {
        std::iter::once(&self.outer_ring).chain(&self.inner_rings)
    }

    fn ensure_defined(&self) -> Result<()> {
        ensure_defined(self.is_defined(), "Polygon")
    }
}

/// Drops a trailing vertex equal to the first one.
fn open_ring(mut ring: Vec<Point>) -> Vec<Point> {
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    ring
}

fn closed_ring(ring: &[Point]) -> LineString {
    LineString::new(ring.iter().chain(ring.first()).copied().collect())
}

fn ring_edges(ring: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(first, second)| Segment::new(*first, *second))
}

impl PartialEq for Polygon {
    /// Same rings with the same vertices in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.outer_ring == other.outer_ring
            && self.inner_rings == other.inner_rings
    }
}

impl Transformable for Polygon {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        self.ensure_defined()?;

        for point in self.outer_ring.iter_mut().chain(self.inner_rings.iter_mut().flatten()) {
            *point = transformation.apply_to_point(point)?;
        }

        Ok(())
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        write!(f, "Polygon {{ outer: {}", closed_ring(&self.outer_ring))?;
        for ring in &self.inner_rings {
            write!(f, ", inner: {}", closed_ring(ring))?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests;
