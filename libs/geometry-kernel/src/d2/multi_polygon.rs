//! Collection of 2D polygons, produced by polygon unions.

use std::fmt;

use geo::{BooleanOps, ConvexHull};

use crate::d2::point::Point;
use crate::d2::point_set::PointSet;
use crate::d2::polygon::Polygon;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, Result};

/// Ordered list of polygons. The empty multi-polygon is defined.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a multi-polygon.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Multi-polygon holding a single polygon.
    pub fn polygon(polygon: Polygon) -> Self {
        Self::new(vec![polygon])
    }

    /// Returns true if every polygon is defined.
    pub fn is_defined(&self) -> bool {
        self.polygons.iter().all(Polygon::is_defined)
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Polygons in order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Returns true if some polygon contains the point.
    pub fn contains_point(&self, point: &Point) -> Result<bool> {
        self.ensure_defined()?;

        for polygon in &self.polygons {
            if polygon.contains_point(point)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if every point is contained by some polygon.
    pub fn contains_point_set(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined(point_set.is_defined(), "PointSet")?;

        for point in point_set {
            if !self.contains_point(point)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Union with another multi-polygon.
    pub fn union_with(&self, other: &MultiPolygon) -> Result<MultiPolygon> {
        self.ensure_defined()?;
        other.ensure_defined()?;

        Self::from_geo(&self.to_geo().union(&other.to_geo()))
    }

    /// Convex hull of every vertex.
    pub fn convex_hull(&self) -> Result<Polygon> {
        self.ensure_defined()?;

        Polygon::from_geo(&self.to_geo().convex_hull())
    }

    pub(crate) fn to_geo(&self) -> geo::MultiPolygon<f64> {
        geo::MultiPolygon::new(self.polygons.iter().map(Polygon::to_geo).collect())
    }

    pub(crate) fn from_geo(multi_polygon: &geo::MultiPolygon<f64>) -> Result<Self> {
        multi_polygon
            .iter()
            .filter(|polygon| !polygon.exterior().0.is_empty())
            .map(Polygon::from_geo)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    fn ensure_defined(&self) -> Result<()> {
        ensure_defined(self.is_defined(), "MultiPolygon")
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self::polygon(polygon)
    }
}

impl Transformable for MultiPolygon {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        for polygon in &mut self.polygons {
            polygon.apply_transformation_mut(transformation)?;
        }

        Ok(())
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MultiPolygon [")?;

        for (index, polygon) in self.polygons.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{polygon}")?;
        }

        f.write_str("]")
    }
}
