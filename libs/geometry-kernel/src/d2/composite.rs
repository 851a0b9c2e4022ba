//! Ordered collection of owned planar objects.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::d2::intersection::Intersection;
use crate::d2::object::Object;
use crate::d2::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Owned, ordered list of planar objects.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Composite {
    objects: Vec<Object>,
    defined: bool,
}

impl Composite {
    /// Composite holding a single object.
    pub fn new(object: impl Into<Object>) -> Self {
        Self::from_objects(vec![object.into()])
    }

    /// Composite holding the given objects in order.
    pub fn from_objects(objects: Vec<Object>) -> Self {
        Self {
            objects,
            defined: true,
        }
    }

    /// Composite with no members.
    pub fn empty() -> Self {
        Self::from_objects(Vec::new())
    }

    /// Undefined sentinel.
    pub fn undefined() -> Self {
        Self {
            objects: Vec::new(),
            defined: false,
        }
    }

    /// Returns true if the composite and all its members are defined.
    pub fn is_defined(&self) -> bool {
        self.defined && self.objects.iter().all(Object::is_defined)
    }

    /// Returns true if there are no members.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of members.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Member at `index`.
    pub fn object_at(&self, index: usize) -> Result<&Object> {
        self.objects
            .get(index)
            .ok_or_else(|| GeometryError::out_of_bounds(index, self.objects.len()))
    }

    /// Members in order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Object> {
        self.objects.iter()
    }

    /// Returns true if at least one member contains `object`.
    pub fn any_contains(&self, object: &Object) -> Result<bool> {
        ensure_defined(self.is_defined(), "Composite")?;

        for member in &self.objects {
            if member.contains(object)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if at least one member intersects `object`.
    pub fn intersects(&self, object: &Object) -> Result<bool> {
        ensure_defined(self.is_defined(), "Composite")?;

        for member in &self.objects {
            if member.intersects(object)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Returns true if the composite has members and all of them contain
    /// `object`.
    pub fn contains(&self, object: &Object) -> Result<bool> {
        ensure_defined(self.is_defined(), "Composite")?;

        if self.objects.is_empty() {
            return Ok(false);
        }

        for member in &self.objects {
            if !member.contains(object)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Concatenation of every member's intersection with `object`.
    pub fn intersection_with(&self, object: &Object) -> Result<Intersection> {
        ensure_defined(self.is_defined(), "Composite")?;

        let mut intersection = Intersection::empty();
        for member in &self.objects {
            intersection += member.intersection_with(object)?;
        }

        Ok(intersection)
    }
}

impl Default for Composite {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Composite {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.objects == other.objects
    }
}

impl Add for Composite {
    type Output = Composite;

    fn add(mut self, other: Composite) -> Composite {
        self += other;
        self
    }
}

impl AddAssign for Composite {
    fn add_assign(&mut self, other: Composite) {
        self.defined &= other.defined;
        self.objects.extend(other.objects);
    }
}

impl<'a> IntoIterator for &'a Composite {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

impl IntoIterator for Composite {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl Transformable for Composite {
    fn apply_transformation_mut(&mut self, transformation: &Transformation) -> Result<()> {
        ensure_defined(self.is_defined(), "Composite")?;

        for object in &mut self.objects {
            object.apply_transformation_mut(transformation)?;
        }

        Ok(())
    }
}

impl fmt::Display for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("Undefined");
        }

        f.write_str("[")?;
        for (index, object) in self.objects.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{object}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::d2::{Point, Polygon};

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        Polygon::simple(vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ])
        .unwrap()
    }

    #[test]
    fn test_containment_quantifiers() {
        let composite = Composite::from_objects(vec![square(0.0, 0.0, 2.0).into(), square(1.0, 1.0, 2.0).into()]);

        let shared = Object::from(Point::new(1.5, 1.5));
        let only_first = Object::from(Point::new(0.5, 0.5));

        assert!(composite.contains(&shared).unwrap());
        assert!(!composite.contains(&only_first).unwrap());
        assert!(composite.any_contains(&only_first).unwrap());
        assert!(composite.intersects(&only_first).unwrap());
    }

    #[test]
    fn test_undefined_member() {
        let composite = Composite::new(Point::undefined());

        assert!(!composite.is_defined());
        assert_eq!(
            composite.intersects(&Object::from(Point::origin())),
            Err(GeometryError::undefined("Composite"))
        );
    }

    #[test]
    fn test_translation_applies_to_members() {
        let moved = Composite::new(Point::origin())
            .apply_transformation(&Transformation::translation(glam::DVec2::new(2.0, 3.0)))
            .unwrap();

        assert_eq!(*moved.object_at(0).unwrap().downcast::<Point>().unwrap(), Point::new(2.0, 3.0));
    }
}
