//! Error types for box construction and validation.

use thiserror::Error;

/// Errors raised when corner data cannot describe a box.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObbError {
    /// The corner sequence does not hold exactly eight points.
    #[error("a bounding box needs exactly 8 corners, got {found}")]
    InvalidVertexCount {
        /// Number of points supplied.
        found: usize,
    },

    /// A corner has a NaN or infinite coordinate.
    #[error("corner {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Index of the offending corner.
        index: usize,
    },

    /// A face normal points into the box: the corners are wound against the
    /// corner convention.
    #[error("face {face} points inward; corners do not follow the corner convention")]
    InwardFace {
        /// Index into the face table.
        face: usize,
    },
}

/// Result type for box operations.
pub type Result<T> = std::result::Result<T, ObbError>;
