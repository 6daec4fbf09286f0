//! Error types for unit settings.

use thiserror::Error;

/// Errors raised while loading or checking unit settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitsError {
    /// A settings value is out of range.
    #[error("invalid unit settings: {0}")]
    InvalidSettings(String),

    /// An imperial precision string is not `NONE`, `1` or `1/n`.
    #[error("invalid imperial precision {0:?}: expected NONE, 1 or 1/n")]
    InvalidPrecision(String),
}

/// Result type for unit settings.
pub type Result<T> = std::result::Result<T, UnitsError>;
