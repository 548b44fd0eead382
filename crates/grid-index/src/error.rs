//! Error types for grid index mapping.

use projection::ProjectionError;
use thiserror::Error;

/// Errors that can occur while building areas or mapping indices.
#[derive(Error, Debug)]
pub enum GridIndexError {
    /// The area's projection could not be set up or executed.
    #[error("projection error: {0}")]
    Projection(#[from] ProjectionError),

    /// The area description is unusable (zero size, degenerate extent).
    #[error("invalid area definition: {0}")]
    InvalidArea(String),

    /// An input array does not match the shape it must have.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Radius of influence is not a positive finite distance.
    #[error("radius of influence must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// Zero neighbours requested.
    #[error("number of neighbours must be at least 1, got {0}")]
    InvalidNeighbours(usize),

    /// A neighbour index points past the valid source pixels.
    #[error("neighbour index {index} exceeds the {valid} valid source pixels")]
    NeighbourIndexOutOfRange { index: usize, valid: usize },
}

impl GridIndexError {
    /// Create an InvalidArea error.
    pub fn invalid_area(msg: impl Into<String>) -> Self {
        Self::InvalidArea(msg.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch { expected, actual }
    }
}

/// Result type for grid index operations.
pub type Result<T> = std::result::Result<T, GridIndexError>;
