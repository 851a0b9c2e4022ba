//! Ray sampling of cone and pyramid lateral surfaces.
//!
//! Neither surface has a closed-form intersection with a quadric. Each
//! sample ray from the apex is crossed with the target instead, and the hits
//! are chained into line strings: the near string holds the first crossing
//! of every ray, the far string the second one.
//!
//! Sample positions are nested across levels: every ray of a level is also a
//! ray of each higher level, so raising the level never loses a hit.

use config::constants::{MAX_DISCRETIZATION_LEVEL, MIN_DISCRETIZATION_LEVEL};
use log::debug;

use crate::d3::composite::Composite;
use crate::d3::intersection::{Intersection, IntersectionKind};
use crate::d3::line_string::LineString;
use crate::d3::point::Point;
use crate::d3::ray::Ray;
use crate::d3::segment::Segment;
use crate::error::{GeometryError, Result};

/// Fails unless `level` lies within the accepted discretization bounds.
pub(crate) fn ensure_discretization_level(level: usize) -> Result<()> {
    if !(MIN_DISCRETIZATION_LEVEL..=MAX_DISCRETIZATION_LEVEL).contains(&level) {
        return Err(GeometryError::domain(format!(
            "discretization level {level} is outside \
             [{MIN_DISCRETIZATION_LEVEL}, {MAX_DISCRETIZATION_LEVEL}]"
        )));
    }

    Ok(())
}

/// First `count` fractions of the base-2 van der Corput sequence, ascending.
///
/// Prefixes of the sequence are nested, and a power-of-two `count` yields
/// the evenly spaced fractions `i / count`.
pub(crate) fn nested_fractions(count: usize) -> Vec<f64> {
    let mut fractions: Vec<f64> = (0..count).map(van_der_corput).collect();
    fractions.sort_by(f64::total_cmp);
    fractions
}

/// Bit-reversed `index` as a binary fraction in `[0, 1)`.
fn van_der_corput(index: usize) -> f64 {
    let mut remaining = index;
    let mut weight = 0.5;
    let mut fraction = 0.0;

    while remaining > 0 {
        if remaining & 1 == 1 {
            fraction += weight;
        }
        remaining >>= 1;
        weight *= 0.5;
    }

    fraction
}

/// Returns true if some ray hits the target.
pub(crate) fn any_ray_hits<F>(rays: &[Ray], mut hits: F) -> Result<bool>
where
    F: FnMut(&Ray) -> Result<bool>,
{
    for ray in rays {
        if hits(ray)? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Chains per-ray crossings into near and far line strings.
///
/// Empty when no ray hits. With `only_in_sight` the far string is dropped.
pub(crate) fn sweep<F>(apex: &Point, rays: &[Ray], only_in_sight: bool, mut cast: F) -> Result<Intersection>
where
    F: FnMut(&Ray) -> Result<Intersection>,
{
    let mut near = Vec::new();
    let mut far = Vec::new();

    for ray in rays {
        let crossing = cast(ray)?;

        match crossing.kind() {
            IntersectionKind::Point => near.push(*crossing.downcast::<Point>()?),
            IntersectionKind::Segment => {
                let chord = crossing.downcast::<Segment>()?;
                let (first, second) = (chord.first_point(), chord.second_point());

                if first.distance_to(apex)? <= second.distance_to(apex)? {
                    near.push(first);
                    far.push(second);
                } else {
                    near.push(second);
                    far.push(first);
                }
            }
            _ => {}
        }
    }

    debug!(
        "lateral sweep: {} rays, {} near hits, {} far hits",
        rays.len(),
        near.len(),
        far.len()
    );

    let mut composite = Composite::empty();

    if !near.is_empty() {
        composite += Composite::new(LineString::new(near));
    }
    if !far.is_empty() && !only_in_sight {
        composite += Composite::new(LineString::new(far));
    }

    Ok(Intersection::from_composite(composite))
}
