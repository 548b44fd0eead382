//! Geographic to Earth-centred cartesian coordinates.

/// Mean Earth radius (meters) used for spherical computations.
pub const EARTH_RADIUS: f64 = 6370997.0;

/// Convert `(lon, lat)` in degrees to `[x, y, z]` meters on a sphere of
/// radius [`EARTH_RADIUS`].
#[inline]
pub fn lonlat_to_cartesian(lon: f64, lat: f64) -> [f64; 3] {
    let lon = lon.to_radians();
    let lat = lat.to_radians();
    [
        EARTH_RADIUS * lat.cos() * lon.cos(),
        EARTH_RADIUS * lat.cos() * lon.sin(),
        EARTH_RADIUS * lat.sin(),
    ]
}
