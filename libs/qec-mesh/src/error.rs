//! # Mesh Errors
//!
//! Error types for primitive construction and the shape factory.

use thiserror::Error;

/// Errors that can occur while generating primitive geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Degenerate geometry (non-positive dimension, too few segments)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Errors raised by the shape factory.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Underlying primitive construction failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// A location must have two or three coordinates
    #[error("Location must have 2 or 3 coordinates, got {0}")]
    InvalidLocation(usize),

    /// A rectangle normal of zero length has no orientation
    #[error("Rectangle normal must be non-zero")]
    ZeroNormal,
}

/// Checks that a primitive dimension is finite and strictly positive.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<(), MeshError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::degenerate(format!("{name} must be positive: {value}")))
    }
}
