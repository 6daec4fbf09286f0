//! World-space corner extraction from an object's local bounds.

use draftcull_math::{Point3, Transform};

/// An object's axis-aligned bounds in its own local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalBounds {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl LocalBounds {
    /// Create bounds from two opposite corners, in any order per axis.
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// The eight local corners in the corner convention.
    pub fn corners(&self) -> [Point3; 8] {
        std::array::from_fn(|i| {
            let pick = |use_max: bool, lo: f64, hi: f64| if use_max { hi } else { lo };
            Point3::new(
                pick(i >= 4, self.min.x, self.max.x),
                pick(matches!(i, 2 | 3 | 6 | 7), self.min.y, self.max.y),
                pick(matches!(i, 1 | 2 | 5 | 6), self.min.z, self.max.z),
            )
        })
    }
}

/// Map local bounds through a world transform, keeping the corner convention.
///
/// A mirroring transform would turn every face inside out, so the two corner
/// quads are exchanged (corner `i` takes local corner `i ^ 4`) to restore
/// outward normals.
pub fn corners_of(bounds: &LocalBounds, transform: &Transform) -> [Point3; 8] {
    let local = bounds.corners();
    let flip = if transform.is_mirroring() { 4 } else { 0 };
    std::array::from_fn(|i| transform.apply_point(&local[i ^ flip]))
}
