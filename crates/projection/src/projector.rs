//! The projector seam and its construction from proj4 parameters.

use std::fmt::Debug;
use std::sync::Arc;

use area_common::Proj4Params;
use tracing::debug;

use crate::cylindrical::{EquidistantCylindrical, Mercator};
use crate::error::{ProjectionError, ProjectionResult};
use crate::geographic::Geographic;
use crate::lambert::LambertConformal;
use crate::stereographic::Stereographic;

/// Converts between geographic coordinates (degrees) and planar
/// projection coordinates (projection units, usually meters).
pub trait Projector: Debug + Send + Sync {
    /// Project a `(lon, lat)` pair in degrees to `(x, y)`.
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Unproject `(x, y)` back to `(lon, lat)` in degrees.
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);
}

/// Build the projector named by the `proj` parameter.
pub fn from_proj4(params: &Proj4Params) -> ProjectionResult<Arc<dyn Projector>> {
    let name = params
        .get("proj")
        .ok_or_else(|| ProjectionError::invalid_parameter("proj", "missing"))?;

    debug!(proj = %name, params = %params, "Building projector");

    let projector: Arc<dyn Projector> = match name {
        "latlong" | "longlat" | "latlon" | "lonlat" => Arc::new(Geographic),
        "eqc" => Arc::new(EquidistantCylindrical::from_proj4(params)?),
        "merc" => Arc::new(Mercator::from_proj4(params)?),
        "stere" => Arc::new(Stereographic::from_proj4(params)?),
        "lcc" => Arc::new(LambertConformal::from_proj4(params)?),
        other => return Err(ProjectionError::UnsupportedProjection(other.to_string())),
    };
    Ok(projector)
}
