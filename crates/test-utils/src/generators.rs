//! Generators for synthetic lon/lat grids.
//!
//! All grids are returned in row-major order (row 0 first).

/// Regular lon/lat grid of pixel centres.
///
/// Row 0 is the northern edge, matching image orientation. Longitudes run
/// from `min_lon` to `max_lon` west to east.
///
/// # Example
///
/// ```
/// use test_utils::regular_lonlat_grid;
///
/// let (lons, lats) = regular_lonlat_grid(2, 4, (0.0, 0.0, 4.0, 2.0));
/// assert_eq!(lons.len(), 8);
/// assert_eq!(lons[0], 0.5);
/// assert_eq!(lats[0], 1.5);
/// assert_eq!(lats[4], 0.5);
/// ```
pub fn regular_lonlat_grid(
    rows: usize,
    cols: usize,
    bbox: (f64, f64, f64, f64),
) -> (Vec<f64>, Vec<f64>) {
    let (min_lon, min_lat, max_lon, max_lat) = bbox;
    let dx = (max_lon - min_lon) / cols as f64;
    let dy = (max_lat - min_lat) / rows as f64;

    let mut lons = Vec::with_capacity(rows * cols);
    let mut lats = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            lons.push(min_lon + (col as f64 + 0.5) * dx);
            lats.push(max_lat - (row as f64 + 0.5) * dy);
        }
    }
    (lons, lats)
}

/// Copy of `values` with every `stride`-th element replaced by `fill`.
pub fn with_fill_every(values: &[f64], stride: usize, fill: f64) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| if stride > 0 && i % stride == 0 { fill } else { v })
        .collect()
}
