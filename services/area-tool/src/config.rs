//! Linesample run configuration.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::ValueEnum;

/// Default radius of influence for nearest neighbour matching (meters).
pub const DEFAULT_RADIUS_OF_INFLUENCE: f64 = 50_000.0;

/// How target pixels are matched to source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Project target pixel centres straight into the source grid.
    Quick,
    /// Nearest valid source pixel within the radius of influence.
    Nearest,
}

/// Everything needed to compute one pair of linesample arrays.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Area definition file holding both areas
    pub area_file: PathBuf,

    pub source: String,

    pub target: String,

    pub method: Method,

    /// Radius of influence in meters (nearest neighbour only)
    pub radius_of_influence: f64,

    /// Worker threads; 1 runs serially
    pub nprocs: usize,

    /// Write the grid here instead of stdout
    pub output: Option<PathBuf>,
}

impl ToolConfig {
    /// Reject settings that cannot produce a result.
    pub fn validate(&self) -> Result<()> {
        if self.nprocs == 0 {
            bail!("nprocs must be at least 1");
        }
        if !(self.radius_of_influence.is_finite() && self.radius_of_influence > 0.0) {
            bail!(
                "radius of influence must be a positive number of meters, got {}",
                self.radius_of_influence
            );
        }
        if self.source.trim().is_empty() || self.target.trim().is_empty() {
            bail!("source and target area ids must not be empty");
        }
        Ok(())
    }
}
