#![warn(missing_docs)]

//! Oriented bounding box overlap tests for drawing generation.
//!
//! Boxes are eight world-space corners in a fixed corner convention; their
//! edges and faces come from constant wiring tables. [`intersects`] runs the
//! separating axis test over face normals and edge-pair cross products and
//! answers whether the two convex hulls overlap. Touching counts as
//! overlapping.
//!
//! # Example
//!
//! ```
//! use draftcull_math::{Point3, Transform};
//! use draftcull_obb::{intersects, BoundingBox, LocalBounds};
//!
//! let wall = BoundingBox::from_bounds(Point3::origin(), Point3::new(4.0, 0.2, 3.0));
//! let door = BoundingBox::from_local(
//!     &LocalBounds::new(Point3::origin(), Point3::new(0.9, 0.1, 2.1)),
//!     &Transform::translation(1.0, 0.05, 0.0),
//! );
//! assert!(intersects(&wall, &door));
//! ```

pub mod batch;
pub mod bbox;
pub mod corners;
pub mod error;
pub mod sat;
pub mod topology;

pub use batch::{overlapping_pairs, overlapping_with};
pub use bbox::BoundingBox;
pub use corners::{corners_of, LocalBounds};
pub use error::{ObbError, Result};
pub use sat::{classify_side, intersects, separated_by_faces, Side};
pub use topology::{Edge, Face, EDGE_TABLE, FACE_TABLE};
