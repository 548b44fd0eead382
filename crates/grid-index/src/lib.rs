//! Index mapping between projected area grids.
//!
//! Given a source and a target [`AreaDefinition`], computes for every target
//! pixel the row/column of the corresponding source pixel. The result, a
//! [`PixelIndexGrid`], is what a resampler uses to pull source values onto
//! the target grid.
//!
//! Two strategies are provided:
//!
//! - [`quick_index_map`]: project the target's lon/lat grid straight into
//!   the source projection and truncate to pixel indices. No bounds checks.
//! - [`nearest_neighbour_index_map`]: look up the nearest valid source pixel
//!   within a radius of influence; unmatched target pixels get `-1`.
//!
//! # Architecture
//!
//! ```text
//! target AreaDefinition ──► lonlats ──► Projector (source proj4) ──► x, y
//!                                                                      │
//!                                               truncate(x / size + offset)
//!                                                                      ▼
//!                                                              PixelIndexGrid
//!
//! source AreaDefinition ──► lonlats ──► NeighbourQuery ──► valid mask, indices
//!                                                                      │
//!                                      remap to source rows/cols, -1 sentinel
//!                                                                      ▼
//!                                                              PixelIndexGrid
//! ```
//!
//! The caller's parallelism hint is an [`Executor`] passed by reference; it
//! only affects how projections and neighbour queries are scheduled.

pub mod area;
pub mod error;
pub mod linesample;
pub mod neighbours;
pub mod types;

// Re-export commonly used types at crate root
pub use area::AreaDefinition;
pub use error::{GridIndexError, Result};
pub use linesample::{
    nearest_neighbour_index_map, nearest_neighbour_index_map_with, quick_index_map,
    remap_neighbour_indices,
};
pub use neighbours::{NeighbourInfo, NeighbourQuery, RTreeNeighbourQuery};
pub use projection::Executor;
pub use types::PixelIndexGrid;
