//! Linesample arrays: per-target-pixel source row/column indices.

use projection::Executor;
use tracing::{debug, info};

use crate::area::AreaDefinition;
use crate::error::{GridIndexError, Result};
use crate::neighbours::{NeighbourQuery, RTreeNeighbourQuery};
use crate::types::PixelIndexGrid;

/// Truncate fractional pixel coordinates toward zero.
///
/// If either coordinate is non-finite (a point the projection cannot
/// represent), both indices become [`PixelIndexGrid::NO_MATCH`].
#[inline]
fn truncate_pixel(row: f64, col: f64) -> (i64, i64) {
    if row.is_finite() && col.is_finite() {
        (row as i64, col as i64)
    } else {
        (PixelIndexGrid::NO_MATCH, PixelIndexGrid::NO_MATCH)
    }
}

/// Map target pixels to source pixels by direct projection.
///
/// Every target pixel centre is projected into the source projection and
/// converted with
///
/// ```text
/// col = trunc(x / pixel_size_x + pixel_offset_x)
/// row = trunc(pixel_offset_y - y / pixel_size_y)
/// ```
///
/// Indices are not checked against the source grid; values outside
/// `0..rows` / `0..cols` are returned as computed and must be clipped by
/// the caller.
pub fn quick_index_map(
    source: &AreaDefinition,
    target: &AreaDefinition,
    executor: &Executor,
) -> Result<PixelIndexGrid> {
    let (lons, lats) = target.lonlats(executor);
    let (xs, ys) = executor.project(source.projector(), &lons, &lats);
    drop(lons);
    drop(lats);

    let (row_indices, col_indices): (Vec<i64>, Vec<i64>) = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| {
            truncate_pixel(
                source.pixel_offset_y() - y / source.pixel_size_y(),
                x / source.pixel_size_x() + source.pixel_offset_x(),
            )
        })
        .unzip();

    debug!(
        source = %source.area_id,
        target = %target.area_id,
        nprocs = executor.nprocs(),
        "Computed quick linesample arrays"
    );

    PixelIndexGrid::new(target.shape(), row_indices, col_indices)
}

/// Map target pixels to the nearest source pixel within
/// `radius_of_influence` meters, using the built-in R-tree query.
///
/// Target pixels without a source pixel in range are `-1` in both arrays.
pub fn nearest_neighbour_index_map(
    source: &AreaDefinition,
    target: &AreaDefinition,
    radius_of_influence: f64,
    executor: &Executor,
) -> Result<PixelIndexGrid> {
    nearest_neighbour_index_map_with(&RTreeNeighbourQuery, source, target, radius_of_influence, executor)
}

/// [`nearest_neighbour_index_map`] with a caller-supplied neighbour query.
pub fn nearest_neighbour_index_map_with<Q: NeighbourQuery + ?Sized>(
    query: &Q,
    source: &AreaDefinition,
    target: &AreaDefinition,
    radius_of_influence: f64,
    executor: &Executor,
) -> Result<PixelIndexGrid> {
    let (lons, lats) = source.lonlats(executor);
    let info = query.neighbour_info(&lons, &lats, target, radius_of_influence, 1, executor)?;
    let grid = remap_neighbour_indices(
        source.shape(),
        target.shape(),
        &info.valid_input_index,
        &info.index_array,
    )?;

    info!(
        source = %source.area_id,
        target = %target.area_id,
        radius = radius_of_influence,
        unmatched = grid.unmatched_count(),
        "Computed nearest neighbour linesample arrays"
    );
    Ok(grid)
}

/// Turn a neighbour query result into source row/column indices.
///
/// `valid_input_index` covers the flattened source grid (row-major,
/// `source_shape`); `index_array` holds, per target pixel, an index into
/// the valid source subset or the valid count for "no match".
///
/// # Errors
/// [`GridIndexError::ShapeMismatch`] if either array disagrees with its
/// shape, [`GridIndexError::NeighbourIndexOutOfRange`] for an index past
/// the valid count.
pub fn remap_neighbour_indices(
    source_shape: (usize, usize),
    target_shape: (usize, usize),
    valid_input_index: &[bool],
    index_array: &[usize],
) -> Result<PixelIndexGrid> {
    let (source_rows, source_cols) = source_shape;
    if valid_input_index.len() != source_rows * source_cols {
        return Err(GridIndexError::shape_mismatch(
            source_rows * source_cols,
            valid_input_index.len(),
        ));
    }
    if index_array.len() != target_shape.0 * target_shape.1 {
        return Err(GridIndexError::shape_mismatch(
            target_shape.0 * target_shape.1,
            index_array.len(),
        ));
    }

    // Source (row, col) for each valid pixel, in valid-subset order
    let valid_positions: Vec<(i64, i64)> = valid_input_index
        .iter()
        .enumerate()
        .filter(|(_, valid)| **valid)
        .map(|(i, _)| ((i / source_cols) as i64, (i % source_cols) as i64))
        .collect();
    let no_match = valid_positions.len();

    let mut row_indices = Vec::with_capacity(index_array.len());
    let mut col_indices = Vec::with_capacity(index_array.len());
    for &index in index_array {
        let (row, col) = match index {
            i if i == no_match => (PixelIndexGrid::NO_MATCH, PixelIndexGrid::NO_MATCH),
            i => *valid_positions
                .get(i)
                .ok_or(GridIndexError::NeighbourIndexOutOfRange { index: i, valid: no_match })?,
        };
        row_indices.push(row);
        col_indices.push(col);
    }

    PixelIndexGrid::new(target_shape, row_indices, col_indices)
}
