//! Concrete area definition: a projected raster grid.

use std::sync::Arc;

use area_common::{AreaConfig, AreaExtent, Proj4Params};
use projection::{from_proj4, lonlat_to_cartesian, Executor, Projector};
use tracing::debug;

use crate::error::{GridIndexError, Result};

/// An immutable projected grid.
///
/// Pixel `(row, col)` covers the cell whose centre is
/// `x = min_x + (col + 0.5) * pixel_size_x`,
/// `y = max_y - (row + 0.5) * pixel_size_y`; row 0 is the top of the grid.
#[derive(Debug, Clone)]
pub struct AreaDefinition {
    pub area_id: String,
    pub name: String,
    pub proj_id: String,
    proj4_params: Proj4Params,
    x_size: usize,
    y_size: usize,
    extent: AreaExtent,
    pixel_size_x: f64,
    pixel_size_y: f64,
    pixel_offset_x: f64,
    pixel_offset_y: f64,
    projector: Arc<dyn Projector>,
}

impl AreaDefinition {
    /// Build a definition, setting up the projector from `proj4_params`.
    ///
    /// # Errors
    /// [`GridIndexError::InvalidArea`] for a zero size or an empty extent,
    /// [`GridIndexError::Projection`] for unusable projection parameters.
    pub fn new(
        area_id: impl Into<String>,
        name: impl Into<String>,
        proj_id: impl Into<String>,
        proj4_params: Proj4Params,
        x_size: usize,
        y_size: usize,
        extent: AreaExtent,
    ) -> Result<Self> {
        let area_id = area_id.into();
        if x_size == 0 || y_size == 0 {
            return Err(GridIndexError::invalid_area(format!(
                "{}: grid size {}x{} must be positive",
                area_id, x_size, y_size
            )));
        }
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(extent.width()) || !valid(extent.height()) {
            return Err(GridIndexError::invalid_area(format!(
                "{}: extent {:?} is empty",
                area_id,
                extent.to_array()
            )));
        }

        let projector = from_proj4(&proj4_params)?;
        let pixel_size_x = extent.width() / x_size as f64;
        let pixel_size_y = extent.height() / y_size as f64;

        debug!(
            area = %area_id,
            x_size,
            y_size,
            pixel_size_x,
            pixel_size_y,
            "Created area definition"
        );

        Ok(Self {
            area_id,
            name: name.into(),
            proj_id: proj_id.into(),
            proj4_params,
            x_size,
            y_size,
            extent,
            pixel_size_x,
            pixel_size_y,
            pixel_offset_x: -extent.min_x / pixel_size_x,
            pixel_offset_y: extent.max_y / pixel_size_y,
            projector,
        })
    }

    /// Build a definition from a parsed area configuration.
    pub fn from_config(config: &AreaConfig) -> Result<Self> {
        Self::new(
            config.region.clone(),
            config.name.clone(),
            config.pcs_id.clone(),
            config.proj4_params.clone(),
            config.x_size,
            config.y_size,
            config.extent,
        )
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y_size, self.x_size)
    }

    /// Number of pixels.
    pub fn size(&self) -> usize {
        self.x_size * self.y_size
    }

    pub fn x_size(&self) -> usize {
        self.x_size
    }

    pub fn y_size(&self) -> usize {
        self.y_size
    }

    pub fn extent(&self) -> AreaExtent {
        self.extent
    }

    pub fn proj4_params(&self) -> &Proj4Params {
        &self.proj4_params
    }

    pub fn projector(&self) -> &dyn Projector {
        self.projector.as_ref()
    }

    pub fn pixel_size_x(&self) -> f64 {
        self.pixel_size_x
    }

    pub fn pixel_size_y(&self) -> f64 {
        self.pixel_size_y
    }

    /// Column offset of projection x = 0, in pixels.
    pub fn pixel_offset_x(&self) -> f64 {
        self.pixel_offset_x
    }

    /// Row offset of projection y = 0, in pixels.
    pub fn pixel_offset_y(&self) -> f64 {
        self.pixel_offset_y
    }

    /// Projection coordinates of every pixel centre, row-major.
    pub fn proj_coords(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.size());
        let mut ys = Vec::with_capacity(self.size());
        for row in 0..self.y_size {
            let y = self.extent.max_y - (row as f64 + 0.5) * self.pixel_size_y;
            for col in 0..self.x_size {
                xs.push(self.extent.min_x + (col as f64 + 0.5) * self.pixel_size_x);
                ys.push(y);
            }
        }
        (xs, ys)
    }

    /// Longitude and latitude (degrees) of every pixel centre, row-major.
    pub fn lonlats(&self, executor: &Executor) -> (Vec<f64>, Vec<f64>) {
        let (xs, ys) = self.proj_coords();
        executor.unproject(self.projector(), &xs, &ys)
    }

    /// Earth-centred cartesian coordinates of every pixel centre, row-major.
    pub fn cartesian_grid(&self, executor: &Executor) -> Vec<[f64; 3]> {
        let (lons, lats) = self.lonlats(executor);
        let pairs: Vec<(f64, f64)> = lons.into_iter().zip(lats).collect();
        executor.map(&pairs, |&(lon, lat)| lonlat_to_cartesian(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projection::EARTH_RADIUS;
    use test_utils::{assert_all_approx_eq, assert_approx_eq};

    fn params(pairs: &[(&str, &str)]) -> Proj4Params {
        pairs.iter().map(|(k, v)| (*k, *v)).collect()
    }

    fn latlong(x_size: usize, y_size: usize, extent: (f64, f64, f64, f64)) -> AreaDefinition {
        AreaDefinition::new(
            "ll",
            "lat/lon",
            "ll",
            params(&[("proj", "latlong")]),
            x_size,
            y_size,
            extent.into(),
        )
        .unwrap()
    }

    #[test]
    fn test_pixel_geometry() {
        let area = AreaDefinition::new(
            "ps",
            "polar",
            "ps",
            params(&[("proj", "stere"), ("lat_0", "90")]),
            4,
            3,
            AreaExtent::new(-2000.0, -1000.0, 2000.0, 2000.0),
        )
        .unwrap();

        assert_eq!(area.shape(), (3, 4));
        assert_eq!(area.pixel_size_x(), 1000.0);
        assert_eq!(area.pixel_size_y(), 1000.0);
        assert_eq!(area.pixel_offset_x(), 2.0);
        assert_eq!(area.pixel_offset_y(), 2.0);
    }

    #[test]
    fn test_proj_coords_are_pixel_centres() {
        let area = latlong(2, 2, (0.0, 0.0, 20.0, 10.0));
        let (xs, ys) = area.proj_coords();
        assert_eq!(xs, vec![5.0, 15.0, 5.0, 15.0]);
        assert_eq!(ys, vec![7.5, 7.5, 2.5, 2.5]);
    }

    #[test]
    fn test_lonlats_match_regular_generator() {
        let area = latlong(8, 4, (-20.0, 40.0, 20.0, 60.0));
        let (lons, lats) = area.lonlats(&Executor::serial());
        let (exp_lons, exp_lats) = test_utils::regular_lonlat_grid(4, 8, (-20.0, 40.0, 20.0, 60.0));
        assert_all_approx_eq!(&lons, &exp_lons, 1e-9);
        assert_all_approx_eq!(&lats, &exp_lats, 1e-9);
    }

    #[test]
    fn test_lonlats_serial_and_parallel_agree() {
        let area = AreaDefinition::new(
            "ps",
            "polar",
            "ps",
            params(&[("proj", "stere"), ("lat_0", "90"), ("lat_ts", "60")]),
            30,
            20,
            AreaExtent::new(-1.5e6, -1.0e6, 1.5e6, 1.0e6),
        )
        .unwrap();
        let serial = area.lonlats(&Executor::serial());
        let parallel = area.lonlats(&Executor::from_nprocs(4).unwrap());
        assert_eq!(serial, parallel);
    }

    #[test]
    fn test_cartesian_grid_on_sphere() {
        let area = latlong(3, 2, (-30.0, -10.0, 30.0, 10.0));
        let grid = area.cartesian_grid(&Executor::serial());
        assert_eq!(grid.len(), 6);
        for [x, y, z] in grid {
            assert_approx_eq!((x * x + y * y + z * z).sqrt(), EARTH_RADIUS, 1e-6);
        }
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = AreaDefinition::new(
            "z",
            "zero",
            "z",
            params(&[("proj", "latlong")]),
            0,
            5,
            AreaExtent::new(0.0, 0.0, 1.0, 1.0),
        );
        assert!(matches!(result, Err(GridIndexError::InvalidArea(_))));
    }

    #[test]
    fn test_rejects_inverted_extent() {
        let result = AreaDefinition::new(
            "inv",
            "inverted",
            "inv",
            params(&[("proj", "latlong")]),
            5,
            5,
            AreaExtent::new(10.0, 0.0, 0.0, 1.0),
        );
        assert!(matches!(result, Err(GridIndexError::InvalidArea(_))));
    }

    #[test]
    fn test_unsupported_projection_propagates() {
        let result = AreaDefinition::new(
            "g",
            "geos",
            "g",
            params(&[("proj", "geos")]),
            5,
            5,
            AreaExtent::new(0.0, 0.0, 1.0, 1.0),
        );
        assert!(matches!(result, Err(GridIndexError::Projection(_))));
    }
}
