//! Projected area extent.

use serde::{Deserialize, Serialize};

/// Extent of an area in projection coordinates: lower-left and upper-right
/// corners of the outer pixel edges, in projection units (usually meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaExtent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl AreaExtent {
    /// Create a new extent from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Width of the extent in projection units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the extent in projection units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The extent as `[min_x, min_y, max_x, max_y]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl From<[f64; 4]> for AreaExtent {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<(f64, f64, f64, f64)> for AreaExtent {
    fn from(v: (f64, f64, f64, f64)) -> Self {
        Self::new(v.0, v.1, v.2, v.3)
    }
}
