//! Errors raised by shape construction and mutation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Error when creating or mutating a shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Radius must be a non-negative number.
    #[error("The radius cannot be negative! (got {0})")]
    NegativeRadius(f64),

    /// Diameter must be a non-negative number.
    #[error("The diameter cannot be negative! (got {0})")]
    NegativeDiameter(f64),

    /// A coordinate pair did not hold exactly two values.
    #[error("Expected a coordinate pair of 2 values, got {found}")]
    MalformedPair { found: usize },
}

impl ShapeError {
    /// True for errors caused by a malformed call rather than a bad value.
    pub fn is_usage(&self) -> bool {
        matches!(self, ShapeError::MalformedPair { .. })
    }

    /// True for errors where a well-typed value broke a shape invariant.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            ShapeError::NegativeRadius(_) | ShapeError::NegativeDiameter(_)
        )
    }
}
