//! Fixed hexahedron topology: edge and face value types and the corner
//! wiring tables shared by every [`BoundingBox`](crate::BoundingBox).
//!
//! Corner convention (the order [`corners_of`](crate::corners_of) emits):
//!
//! ```text
//!   index   x    y    z
//!     0    min  min  min
//!     1    min  min  max
//!     2    min  max  max
//!     3    min  max  min
//!     4    max  min  min
//!     5    max  min  max
//!     6    max  max  max
//!     7    max  max  min
//! ```
//!
//! Corners 0-3 loop around one quad, 4-7 loop around the opposite quad in
//! the same rotational order, and corner `i` is joined to corner `i + 4`.

use draftcull_math::{Point3, Vec3};

/// Corner index pairs of the 12 box edges: the two quad loops, then the
/// four connecting edges.
pub const EDGE_TABLE: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Corner index triples of the 6 box faces. Three faces meet at corner 0 and
/// three at corner 6; each triple is wound so `(v1 - v0) x (v2 - v0)` points
/// out of the box.
pub const FACE_TABLE: [[usize; 3]; 6] = [
    [0, 1, 3],
    [0, 4, 1],
    [0, 3, 4],
    [6, 5, 7],
    [6, 7, 2],
    [6, 2, 5],
];

/// A box edge: two endpoints and the vector from the first to the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint.
    pub v0: Point3,
    /// Second endpoint.
    pub v1: Point3,
    /// `v1 - v0`.
    pub direction: Vec3,
}

impl Edge {
    /// Create an edge between two points.
    pub fn new(v0: Point3, v1: Point3) -> Self {
        Self {
            v0,
            v1,
            direction: v1 - v0,
        }
    }
}

/// A box face given by three of its corners and the derived normal.
///
/// The normal is the unnormalized right-hand cross product: only the sign of
/// dot products against it matters, and a collapsed face yields the zero
/// vector instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corner the face plane is anchored at.
    pub v0: Point3,
    /// Second corner.
    pub v1: Point3,
    /// Third corner.
    pub v2: Point3,
    /// `(v1 - v0) x (v2 - v0)`.
    pub normal: Vec3,
}

impl Face {
    /// Create a face from three corners in winding order.
    pub fn new(v0: Point3, v1: Point3, v2: Point3) -> Self {
        let normal = (v1 - v0).cross(&(v2 - v0));
        Self { v0, v1, v2, normal }
    }
}
