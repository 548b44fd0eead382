//! Subcommand implementations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use area_parser::{parse_area_file, AreaConfig};
use grid_index::{
    nearest_neighbour_index_map, quick_index_map, AreaDefinition, Executor, PixelIndexGrid,
};
use tracing::info;

use crate::config::{Method, ToolConfig};

/// Parse `file` and write the selected areas as a pretty JSON array.
///
/// Returns the number of areas written.
pub fn list_areas<W: Write>(file: &Path, names: &[String], out: &mut W) -> Result<usize> {
    let areas = parse_area_file(file, names)
        .with_context(|| format!("Failed to parse area file {}", file.display()))?;

    serde_json::to_writer_pretty(&mut *out, &areas)?;
    writeln!(out)?;

    info!(file = %file.display(), areas = areas.len(), "Listed areas");
    Ok(areas.len())
}

/// Load the source and target areas named in `config`.
fn load_areas(config: &ToolConfig) -> Result<(AreaDefinition, AreaDefinition)> {
    // A repeated id is only looked up once
    let mut names = vec![config.source.as_str()];
    if config.target != config.source {
        names.push(config.target.as_str());
    }

    let configs: Vec<AreaConfig> = parse_area_file(&config.area_file, &names)
        .with_context(|| format!("Failed to parse area file {}", config.area_file.display()))?;

    let source = AreaDefinition::from_config(&configs[0])
        .with_context(|| format!("Invalid source area {}", config.source))?;
    let target = match configs.get(1) {
        Some(target) => AreaDefinition::from_config(target)
            .with_context(|| format!("Invalid target area {}", config.target))?,
        None => source.clone(),
    };
    Ok((source, target))
}

/// Compute the linesample arrays described by `config`.
pub fn compute_linesample(config: &ToolConfig) -> Result<PixelIndexGrid> {
    config.validate()?;

    let (source, target) = load_areas(config)?;
    let executor = Executor::from_nprocs(config.nprocs)?;

    info!(
        source = %source.area_id,
        target = %target.area_id,
        method = ?config.method,
        nprocs = executor.nprocs(),
        "Computing linesample arrays"
    );

    let grid = match config.method {
        Method::Quick => quick_index_map(&source, &target, &executor)?,
        Method::Nearest => {
            nearest_neighbour_index_map(&source, &target, config.radius_of_influence, &executor)?
        }
    };

    info!(
        rows = grid.rows(),
        cols = grid.cols(),
        unmatched = grid.unmatched_count(),
        "Linesample arrays ready"
    );
    Ok(grid)
}

/// Write `grid` as JSON to `output`, or to `stdout` when no path is given.
pub fn write_grid(grid: &PixelIndexGrid, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer(&mut writer, grid)?;
            writer.flush()?;
            info!(path = %path.display(), "Wrote linesample arrays");
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer(&mut lock, grid)?;
            writeln!(lock)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use test_utils::fixtures::{write_area_file, SMALL_POLAR, THREE_AREAS};

    fn linesample_config(file: PathBuf, source: &str, target: &str, method: Method) -> ToolConfig {
        ToolConfig {
            area_file: file,
            source: source.to_string(),
            target: target.to_string(),
            method,
            radius_of_influence: 5_000.0,
            nprocs: 1,
            output: None,
        }
    }

    #[test]
    fn test_list_all_areas() {
        let file = write_area_file(THREE_AREAS);
        let mut out = Vec::new();
        let count = list_areas(file.path(), &[], &mut out).unwrap();
        assert_eq!(count, 3);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["region"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["ease_sh", "euro_stere", "scan_ll"]);
        assert_eq!(json[1]["proj4_params"]["lat_ts"], "60");
    }

    #[test]
    fn test_list_missing_area_fails() {
        let file = write_area_file(THREE_AREAS);
        let mut out = Vec::new();
        let err = list_areas(file.path(), &["nowhere".to_string()], &mut out).unwrap_err();
        assert!(format!("{:#}", err).contains("nowhere"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_linesample_same_area() {
        let file = write_area_file(SMALL_POLAR);
        for method in [Method::Quick, Method::Nearest] {
            let config = linesample_config(file.path().to_path_buf(), "small_polar", "small_polar", method);
            let grid = compute_linesample(&config).unwrap();
            assert_eq!(grid.shape, (3, 4));
            assert_eq!(grid.get(2, 3), Some((2, 3)));
            assert_eq!(grid.unmatched_count(), 0);
        }
    }

    #[test]
    fn test_linesample_rejects_invalid_config() {
        let file = write_area_file(SMALL_POLAR);
        let mut config = linesample_config(file.path().to_path_buf(), "small_polar", "small_polar", Method::Quick);
        config.nprocs = 0;
        assert!(compute_linesample(&config).is_err());
    }

    #[test]
    fn test_linesample_unsupported_projection() {
        let file = write_area_file(THREE_AREAS);
        let config = linesample_config(file.path().to_path_buf(), "ease_sh", "scan_ll", Method::Quick);
        let err = compute_linesample(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("ease_sh"));
    }

    #[test]
    fn test_write_grid_to_file() {
        let file = write_area_file(SMALL_POLAR);
        let config = linesample_config(file.path().to_path_buf(), "small_polar", "small_polar", Method::Quick);
        let grid = compute_linesample(&config).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.json");
        write_grid(&grid, Some(&path)).unwrap();

        let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["shape"], serde_json::json!([3, 4]));
        assert_eq!(json["col_indices"].as_array().unwrap().len(), 12);
    }
}
