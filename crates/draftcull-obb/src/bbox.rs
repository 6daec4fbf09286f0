//! The eight-corner box and its derived topology.

use draftcull_math::{Point3, Transform};

use crate::corners::{corners_of, LocalBounds};
use crate::error::{ObbError, Result};
use crate::topology::{Edge, Face, EDGE_TABLE, FACE_TABLE};

/// A hexahedron given by eight world-space corners in the corner convention
/// (see [`topology`](crate::topology)), with its 12 edges and 6 faces wired
/// from the constant tables.
///
/// Built once per query and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    vertices: [Point3; 8],
    edges: [Edge; 12],
    faces: [Face; 6],
}

impl BoundingBox {
    /// Build a box from its eight corners.
    pub fn new(vertices: [Point3; 8]) -> Self {
        let edges = EDGE_TABLE.map(|[a, b]| Edge::new(vertices[a], vertices[b]));
        let faces = FACE_TABLE.map(|[a, b, c]| Face::new(vertices[a], vertices[b], vertices[c]));
        Self {
            vertices,
            edges,
            faces,
        }
    }

    /// Build a box from a corner slice, failing unless it holds exactly eight
    /// points.
    pub fn from_slice(points: &[Point3]) -> Result<Self> {
        let found = points.len();
        let vertices: [Point3; 8] = points
            .try_into()
            .map_err(|_| ObbError::InvalidVertexCount { found })?;
        Ok(Self::new(vertices))
    }

    /// Axis-aligned box spanning two opposite corners.
    pub fn from_bounds(min: Point3, max: Point3) -> Self {
        Self::from_local(&LocalBounds::new(min, max), &Transform::identity())
    }

    /// Local bounds placed in the world by `transform`.
    pub fn from_local(bounds: &LocalBounds, transform: &Transform) -> Self {
        Self::new(corners_of(bounds, transform))
    }

    /// The eight corners.
    pub fn vertices(&self) -> &[Point3; 8] {
        &self.vertices
    }

    /// The twelve edges, in [`EDGE_TABLE`] order.
    pub fn edges(&self) -> &[Edge; 12] {
        &self.edges
    }

    /// The six faces, in [`FACE_TABLE`] order.
    pub fn faces(&self) -> &[Face; 6] {
        &self.faces
    }

    /// Mean of the eight corners.
    pub fn centroid(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Point3::origin().coords, |acc, v| acc + v.coords);
        Point3::from(sum / 8.0)
    }

    /// Check the corners against the corner convention.
    ///
    /// Construction never validates; call this when the corner source is not
    /// trusted. Flat or collapsed boxes pass: their zero normals are handled
    /// by the overlap test.
    pub fn validate(&self) -> Result<()> {
        for (index, v) in self.vertices.iter().enumerate() {
            if !(v.x.is_finite() && v.y.is_finite() && v.z.is_finite()) {
                return Err(ObbError::NonFiniteVertex { index });
            }
        }
        let center = self.centroid();
        for (face, f) in self.faces.iter().enumerate() {
            if f.normal.dot(&(center - f.v0)) > 0.0 {
                return Err(ObbError::InwardFace { face });
            }
        }
        Ok(())
    }
}

impl From<[Point3; 8]> for BoundingBox {
    fn from(vertices: [Point3; 8]) -> Self {
        Self::new(vertices)
    }
}

impl TryFrom<&[Point3]> for BoundingBox {
    type Error = ObbError;

    fn try_from(points: &[Point3]) -> Result<Self> {
        Self::from_slice(points)
    }
}
