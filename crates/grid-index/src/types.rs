//! Core types for index mapping results.

use serde::Serialize;

use crate::error::{GridIndexError, Result};

/// Row and column indices into a source grid, one pair per target pixel.
///
/// Both arrays are row-major with the target area's shape. A position
/// holding [`PixelIndexGrid::NO_MATCH`] in both arrays has no corresponding
/// source pixel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixelIndexGrid {
    /// Target shape as (rows, cols)
    pub shape: (usize, usize),
    /// Source row index per target pixel
    pub row_indices: Vec<i64>,
    /// Source column index per target pixel
    pub col_indices: Vec<i64>,
}

impl PixelIndexGrid {
    /// Sentinel for target pixels without a source pixel.
    pub const NO_MATCH: i64 = -1;

    /// Assemble a grid, checking both arrays against `shape`.
    pub fn new(shape: (usize, usize), row_indices: Vec<i64>, col_indices: Vec<i64>) -> Result<Self> {
        let expected = shape.0 * shape.1;
        for len in [row_indices.len(), col_indices.len()] {
            if len != expected {
                return Err(GridIndexError::shape_mismatch(expected, len));
            }
        }
        Ok(Self {
            shape,
            row_indices,
            col_indices,
        })
    }

    pub fn rows(&self) -> usize {
        self.shape.0
    }

    pub fn cols(&self) -> usize {
        self.shape.1
    }

    /// Total number of target pixels.
    pub fn len(&self) -> usize {
        self.row_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty()
    }

    /// Source `(row, col)` for target pixel `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<(i64, i64)> {
        if row >= self.shape.0 || col >= self.shape.1 {
            return None;
        }
        let idx = row * self.shape.1 + col;
        Some((self.row_indices[idx], self.col_indices[idx]))
    }

    /// Number of target pixels marked [`Self::NO_MATCH`].
    pub fn unmatched_count(&self) -> usize {
        self.row_indices
            .iter()
            .zip(&self.col_indices)
            .filter(|(r, c)| **r == Self::NO_MATCH && **c == Self::NO_MATCH)
            .count()
    }
}
