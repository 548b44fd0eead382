//! Typed area configuration built from an area file block or from arguments.

use serde::Serialize;

use crate::{AreaExtent, Proj4Params};

/// A fully typed, ready-to-construct area description.
///
/// Immutable once built; every field has passed conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaConfig {
    /// Area identifier (the block id in an area file).
    pub region: String,
    /// Human readable description.
    pub name: String,
    /// Projection identifier.
    pub pcs_id: String,
    /// Normalized proj4 parameters.
    pub proj4_params: Proj4Params,
    /// Number of pixels in x (columns).
    pub x_size: usize,
    /// Number of pixels in y (rows).
    pub y_size: usize,
    /// Extent of the outer pixel edges in projection coordinates.
    pub extent: AreaExtent,
}

impl AreaConfig {
    /// Shape of the area as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y_size, self.x_size)
    }
}
