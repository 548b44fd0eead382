//! Geographic "projection": coordinates stay in degrees.

use crate::params::wrap_pi;
use crate::projector::Projector;

/// Identity projection for `proj=latlong` areas.
#[derive(Debug, Clone, Copy, Default)]
pub struct Geographic;

impl Projector for Geographic {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        (wrap_pi(x.to_radians()).to_degrees(), y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(Geographic.forward(12.5, -40.0), (12.5, -40.0));
        let (lon, lat) = Geographic.inverse(12.5, -40.0);
        assert!((lon - 12.5).abs() < 1e-12);
        assert_eq!(lat, -40.0);
    }

    #[test]
    fn test_inverse_wraps_longitude() {
        let (lon, _) = Geographic.inverse(190.0, 0.0);
        assert!((lon + 170.0).abs() < 1e-9);
    }
}
