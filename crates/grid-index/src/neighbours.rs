//! Nearest-neighbour lookup between irregular source points and an area grid.

use projection::{lonlat_to_cartesian, Executor};
use rstar::primitives::GeomWithData;
use rstar::RTree;
use tracing::debug;

use crate::area::AreaDefinition;
use crate::error::{GridIndexError, Result};

/// Result of a neighbour query.
///
/// `index_array` and `distance_array` hold `neighbours` entries per target
/// pixel (row-major, nearest first). Indices point into the *valid subset*
/// of the source points, in source order; an index equal to the number of
/// valid source points means "no neighbour within the radius", with an
/// infinite distance.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighbourInfo {
    /// Per source point: whether it took part in the query.
    pub valid_input_index: Vec<bool>,
    /// Per target pixel and neighbour: index into the valid source subset.
    pub index_array: Vec<usize>,
    /// Per target pixel and neighbour: chord distance in meters.
    pub distance_array: Vec<f64>,
    /// Neighbours per target pixel.
    pub neighbours: usize,
}

impl NeighbourInfo {
    /// Number of valid source points; also the "no match" index value.
    pub fn valid_count(&self) -> usize {
        self.valid_input_index.iter().filter(|v| **v).count()
    }
}

/// Spatial neighbour search from source lon/lat points onto a target area.
pub trait NeighbourQuery {
    /// Find up to `neighbours` source points within `radius_of_influence`
    /// meters of each target pixel centre.
    fn neighbour_info(
        &self,
        source_lons: &[f64],
        source_lats: &[f64],
        target: &AreaDefinition,
        radius_of_influence: f64,
        neighbours: usize,
        executor: &Executor,
    ) -> Result<NeighbourInfo>;
}

/// [`NeighbourQuery`] backed by an R-tree over Earth-centred cartesian
/// coordinates.
///
/// A source point is valid when its longitude lies in `[-180, 180]` and its
/// latitude in `[-90, 90]`. Distances are straight-line (chord) distances on
/// a sphere of radius [`projection::EARTH_RADIUS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RTreeNeighbourQuery;

type IndexedPoint = GeomWithData<[f64; 3], usize>;

fn is_valid_lonlat(lon: f64, lat: f64) -> bool {
    (-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat)
}

impl NeighbourQuery for RTreeNeighbourQuery {
    fn neighbour_info(
        &self,
        source_lons: &[f64],
        source_lats: &[f64],
        target: &AreaDefinition,
        radius_of_influence: f64,
        neighbours: usize,
        executor: &Executor,
    ) -> Result<NeighbourInfo> {
        if source_lons.len() != source_lats.len() {
            return Err(GridIndexError::shape_mismatch(source_lons.len(), source_lats.len()));
        }
        if !(radius_of_influence.is_finite() && radius_of_influence > 0.0) {
            return Err(GridIndexError::InvalidRadius(radius_of_influence));
        }
        if neighbours == 0 {
            return Err(GridIndexError::InvalidNeighbours(neighbours));
        }

        let valid_input_index: Vec<bool> = source_lons
            .iter()
            .zip(source_lats)
            .map(|(&lon, &lat)| is_valid_lonlat(lon, lat))
            .collect();

        let points: Vec<IndexedPoint> = source_lons
            .iter()
            .zip(source_lats)
            .filter(|&(&lon, &lat)| is_valid_lonlat(lon, lat))
            .enumerate()
            .map(|(i, (&lon, &lat))| GeomWithData::new(lonlat_to_cartesian(lon, lat), i))
            .collect();
        let valid_count = points.len();
        let tree = RTree::bulk_load(points);

        let (target_lons, target_lats) = target.lonlats(executor);
        let targets: Vec<(f64, f64)> = target_lons.into_iter().zip(target_lats).collect();
        let max_distance_2 = radius_of_influence * radius_of_influence;

        let found: Vec<Vec<(usize, f64)>> = executor.map(&targets, |&(lon, lat)| {
            if !(lon.is_finite() && lat.is_finite()) {
                return Vec::new();
            }
            let query = lonlat_to_cartesian(lon, lat);
            tree.nearest_neighbor_iter_with_distance_2(&query)
                .take(neighbours)
                .take_while(|(_, d2)| *d2 <= max_distance_2)
                .map(|(p, d2)| (p.data, d2.sqrt()))
                .collect()
        });

        let mut index_array = Vec::with_capacity(targets.len() * neighbours);
        let mut distance_array = Vec::with_capacity(targets.len() * neighbours);
        for hits in &found {
            for k in 0..neighbours {
                match hits.get(k) {
                    Some(&(index, distance)) => {
                        index_array.push(index);
                        distance_array.push(distance);
                    }
                    None => {
                        index_array.push(valid_count);
                        distance_array.push(f64::INFINITY);
                    }
                }
            }
        }

        debug!(
            sources = source_lons.len(),
            valid = valid_count,
            targets = targets.len(),
            radius = radius_of_influence,
            "Computed neighbour info"
        );

        Ok(NeighbourInfo {
            valid_input_index,
            index_array,
            distance_array,
            neighbours,
        })
    }
}
