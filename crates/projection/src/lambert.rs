//! Lambert Conformal Conic projection.
//!
//! Maps a cone tangent or secant to the Earth's surface onto a flat plane.
//! Parameters follow proj4 naming:
//! - `lat_1`, `lat_2`: standard parallels (equal for a tangent cone)
//! - `lat_0`: latitude of origin (defaults to `lat_1`)
//! - `lon_0`: central meridian

use std::f64::consts::FRAC_PI_4;

use area_common::Proj4Params;

use crate::error::{ProjectionError, ProjectionResult};
use crate::params::{wrap_pi, ParamReader};
use crate::projector::Projector;

/// Lambert Conformal Conic projection parameters.
#[derive(Debug, Clone)]
pub struct LambertConformal {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of origin in radians
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the latitude of origin
    rho0: f64,
    x0: f64,
    y0: f64,
}

impl LambertConformal {
    pub fn from_proj4(params: &Proj4Params) -> ProjectionResult<Self> {
        let p = ParamReader::new(params);
        let latin1 = p
            .f64("lat_1")?
            .ok_or_else(|| ProjectionError::invalid_parameter("lat_1", "required for lcc"))?
            .to_radians();
        let latin2 = p.f64("lat_2")?.map(f64::to_radians).unwrap_or(latin1);
        let lat0 = p.f64("lat_0")?.map(f64::to_radians).unwrap_or(latin1);
        let lon0 = p.radians_or("lon_0", 0.0)?;
        let earth_radius = p.radius()?;
        let (x0, y0) = p.false_origin()?;

        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((FRAC_PI_4 + latin2 / 2.0).tan() / (FRAC_PI_4 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };
        if n.abs() < 1e-10 {
            return Err(ProjectionError::invalid_parameter(
                "lat_1",
                "standard parallels must not be symmetric about the equator",
            ));
        }

        let f = (latin1.cos() * (FRAC_PI_4 + latin1 / 2.0).tan().powf(n)) / n;
        let rho0 = earth_radius * f / (FRAC_PI_4 + lat0 / 2.0).tan().powf(n);

        Ok(Self {
            lon0,
            lat0,
            latin1,
            latin2,
            earth_radius,
            n,
            f,
            rho0,
            x0,
            y0,
        })
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }
}

impl Projector for LambertConformal {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let lat = lat.to_radians();
        let dlon = wrap_pi(lon.to_radians() - self.lon0);

        let rho = self.earth_radius * self.f / (FRAC_PI_4 + lat / 2.0).tan().powf(self.n);
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        (x + self.x0, y + self.y0)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let x = x - self.x0;
        let y = y - self.y0;
        let sign = self.n.signum();

        let rho = sign * (x * x + (self.rho0 - y) * (self.rho0 - y)).sqrt();
        let theta = (sign * x).atan2(sign * (self.rho0 - y));

        let lat = 2.0 * ((self.earth_radius * self.f / rho).powf(1.0 / self.n)).atan()
            - 2.0 * FRAC_PI_4;
        let lon = wrap_pi(self.lon0 + theta / self.n);

        (lon.to_degrees(), lat.to_degrees())
    }
}
