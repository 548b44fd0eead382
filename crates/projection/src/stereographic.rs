//! Stereographic projection on a sphere, oblique or polar aspect.
//!
//! Polar stereographic grids (`lat_0=90` or `lat_0=-90`) are the most common
//! area definitions for high-latitude satellite products. When `lat_ts` is
//! given for a polar aspect the scale factor is chosen so that scale is true
//! along that parallel.

use area_common::Proj4Params;

use crate::error::ProjectionResult;
use crate::params::{wrap_pi, ParamReader};
use crate::projector::Projector;

#[derive(Debug, Clone)]
pub struct Stereographic {
    /// Sphere radius (meters)
    pub radius: f64,
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of the projection centre in radians
    pub lat0: f64,
    /// Scale factor at the projection centre
    pub k0: f64,
    sin_lat0: f64,
    cos_lat0: f64,
    x0: f64,
    y0: f64,
}

impl Stereographic {
    pub fn from_proj4(params: &Proj4Params) -> ProjectionResult<Self> {
        let p = ParamReader::new(params);
        let lat0 = p.radians_or("lat_0", 0.0)?;
        let is_polar = (lat0.abs() - std::f64::consts::FRAC_PI_2).abs() < 1e-10;

        let k0 = match (is_polar, p.f64("lat_ts")?) {
            (true, Some(lat_ts)) => (1.0 + lat_ts.to_radians().abs().sin()) / 2.0,
            _ => match p.f64("k_0")? {
                Some(k) => k,
                None => p.f64_or("k", 1.0)?,
            },
        };
        let (x0, y0) = p.false_origin()?;

        Ok(Self {
            radius: p.radius()?,
            lon0: p.radians_or("lon_0", 0.0)?,
            lat0,
            k0,
            sin_lat0: lat0.sin(),
            cos_lat0: lat0.cos(),
            x0,
            y0,
        })
    }
}

impl Projector for Stereographic {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lat = lat.to_radians();
        let dlon = wrap_pi(lon.to_radians() - self.lon0);
        let (sin_lat, cos_lat) = lat.sin_cos();
        let cos_dlon = dlon.cos();

        let k = 2.0 * self.k0 / (1.0 + self.sin_lat0 * sin_lat + self.cos_lat0 * cos_lat * cos_dlon);
        let x = self.radius * k * cos_lat * dlon.sin();
        let y = self.radius * k * (self.cos_lat0 * sin_lat - self.sin_lat0 * cos_lat * cos_dlon);
        (x + self.x0, y + self.y0)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let x = x - self.x0;
        let y = y - self.y0;
        let rho = (x * x + y * y).sqrt();
        if rho == 0.0 {
            return (self.lon0.to_degrees(), self.lat0.to_degrees());
        }

        let c = 2.0 * (rho / (2.0 * self.radius * self.k0)).atan();
        let (sin_c, cos_c) = c.sin_cos();

        let lat = (cos_c * self.sin_lat0 + y * sin_c * self.cos_lat0 / rho)
            .clamp(-1.0, 1.0)
            .asin();
        let lon = self.lon0
            + (x * sin_c).atan2(rho * self.cos_lat0 * cos_c - y * self.sin_lat0 * sin_c);

        (wrap_pi(lon).to_degrees(), lat.to_degrees())
    }
}
