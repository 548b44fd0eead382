//! Typed access to numeric proj4 parameters.

use area_common::Proj4Params;

use crate::cartesian::EARTH_RADIUS;
use crate::error::{ProjectionError, ProjectionResult};

/// Read-only view over [`Proj4Params`] that converts values on access.
#[derive(Debug, Clone, Copy)]
pub struct ParamReader<'a> {
    params: &'a Proj4Params,
}

impl<'a> ParamReader<'a> {
    pub fn new(params: &'a Proj4Params) -> Self {
        Self { params }
    }

    /// Numeric value of `key`, or `None` when absent.
    pub fn f64(&self, key: &str) -> ProjectionResult<Option<f64>> {
        match self.params.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ProjectionError::invalid_parameter(key, format!("not a number: {:?}", raw))),
        }
    }

    /// Numeric value of `key`, or `default` when absent.
    pub fn f64_or(&self, key: &str, default: f64) -> ProjectionResult<f64> {
        Ok(self.f64(key)?.unwrap_or(default))
    }

    /// Angle parameter in degrees, returned in radians.
    pub fn radians_or(&self, key: &str, default_deg: f64) -> ProjectionResult<f64> {
        Ok(self.f64_or(key, default_deg)?.to_radians())
    }

    /// Sphere radius: `R`, then `a`, then the default Earth radius.
    pub fn radius(&self) -> ProjectionResult<f64> {
        let radius = match self.f64("R")? {
            Some(r) => r,
            None => self.f64_or("a", EARTH_RADIUS)?,
        };
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ProjectionError::invalid_parameter("R", "radius must be positive"));
        }
        Ok(radius)
    }

    /// False easting and northing (`x_0`, `y_0`).
    pub fn false_origin(&self) -> ProjectionResult<(f64, f64)> {
        Ok((self.f64_or("x_0", 0.0)?, self.f64_or("y_0", 0.0)?))
    }
}

/// Wrap a longitude difference in radians into `[-π, π]`.
pub(crate) fn wrap_pi(mut dlon: f64) -> f64 {
    use std::f64::consts::PI;
    if !dlon.is_finite() {
        return dlon;
    }
    while dlon > PI {
        dlon -= 2.0 * PI;
    }
    while dlon < -PI {
        dlon += 2.0 * PI;
    }
    dlon
}
