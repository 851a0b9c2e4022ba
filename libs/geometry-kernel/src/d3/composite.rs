//! Ordered collection of owned heterogeneous objects.

use std::fmt;
use std::ops::{Add, AddAssign};

use crate::d3::intersection::Intersection;
use crate::d3::object::Object;
use crate::d3::transformation::{Transformable, Transformation};
use crate::error::{ensure_defined, GeometryError, Result};

/// Owned, ordered list of objects. Cloning deep-copies every member.
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

    /// Composite with no members. It is defined.
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

    /// Returns true if the composite has members and every one of them
    /// contains `object`.
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
    /// Same members in the same order.
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
