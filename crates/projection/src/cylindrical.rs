//! Cylindrical projections on a sphere: equidistant (`eqc`) and Mercator (`merc`).

use std::f64::consts::FRAC_PI_4;

use area_common::Proj4Params;

use crate::error::ProjectionResult;
use crate::params::{wrap_pi, ParamReader};
use crate::projector::Projector;

/// Equidistant cylindrical (plate carrée when `lat_ts = 0`).
#[derive(Debug, Clone)]
pub struct EquidistantCylindrical {
    /// Sphere radius (meters)
    pub radius: f64,
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of origin in radians
    pub lat0: f64,
    /// Cosine of the latitude of true scale
    cos_lat_ts: f64,
    x0: f64,
    y0: f64,
}

impl EquidistantCylindrical {
    pub fn from_proj4(params: &Proj4Params) -> ProjectionResult<Self> {
        let p = ParamReader::new(params);
        let (x0, y0) = p.false_origin()?;
        Ok(Self {
            radius: p.radius()?,
            lon0: p.radians_or("lon_0", 0.0)?,
            lat0: p.radians_or("lat_0", 0.0)?,
            cos_lat_ts: p.radians_or("lat_ts", 0.0)?.cos(),
            x0,
            y0,
        })
    }
}

impl Projector for EquidistantCylindrical {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let dlon = wrap_pi(lon.to_radians() - self.lon0);
        let x = self.radius * dlon * self.cos_lat_ts + self.x0;
        let y = self.radius * (lat.to_radians() - self.lat0) + self.y0;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = wrap_pi((x - self.x0) / (self.radius * self.cos_lat_ts) + self.lon0);
        let lat = (y - self.y0) / self.radius + self.lat0;
        (lon.to_degrees(), lat.to_degrees())
    }
}

/// Spherical Mercator.
#[derive(Debug, Clone)]
pub struct Mercator {
    /// Sphere radius (meters)
    pub radius: f64,
    /// Central meridian in radians
    pub lon0: f64,
    /// Scale factor on the equator, `cos(lat_ts)` or `k_0`
    k0: f64,
    x0: f64,
    y0: f64,
}

impl Mercator {
    pub fn from_proj4(params: &Proj4Params) -> ProjectionResult<Self> {
        let p = ParamReader::new(params);
        let k0 = match p.f64("lat_ts")? {
            Some(lat_ts) => lat_ts.to_radians().cos(),
            None => match p.f64("k_0")? {
                Some(k) => k,
                None => p.f64_or("k", 1.0)?,
            },
        };
        let (x0, y0) = p.false_origin()?;
        Ok(Self {
            radius: p.radius()?,
            lon0: p.radians_or("lon_0", 0.0)?,
            k0,
            x0,
            y0,
        })
    }
}

impl Projector for Mercator {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let dlon = wrap_pi(lon.to_radians() - self.lon0);
        let x = self.radius * self.k0 * dlon + self.x0;
        let y = self.radius * self.k0 * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln() + self.y0;
        (x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let rk = self.radius * self.k0;
        let lon = wrap_pi((x - self.x0) / rk + self.lon0);
        let lat = 2.0 * ((y - self.y0) / rk).exp().atan() - 2.0 * FRAC_PI_4;
        (lon.to_degrees(), lat.to_degrees())
    }
}
