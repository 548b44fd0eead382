//! Area definition file fixtures.
//!
//! The texts below use the brace-delimited area file format:
//!
//! ```text
//! REGION: <id> {
//!   NAME: <description>
//!   ...
//! };
//! ```

use std::io::Write;

use tempfile::NamedTempFile;

/// Three areas in file order `ease_sh`, `euro_stere`, `scan_ll`.
///
/// Exercises comma separated lists (PCS_DEF, AREA_EXTENT, a list NAME),
/// whitespace separated proj4 text, comments and tab indentation.
pub const THREE_AREAS: &str = "\
# Test areas
REGION: ease_sh {
\tNAME:\t\tAntarctic EASE grid
\tPCS_ID:\t\tease_sh
\tPCS_DEF:\tproj=laea, lat_0=-90, lon_0=0, a=6371228.0, units=m
\tXSIZE:\t\t425
\tYSIZE:\t\t425
\tAREA_EXTENT:\t(-5326849.0625,-5326849.0625,5326849.0625,5326849.0625)
};

REGION: euro_stere {
\tNAME:\t\tEurope, polar stereographic
\tPCS_ID:\t\tps60n
\tPCS_DEF:\t+proj=stere +lat_0=90 +lon_0=14 +lat_ts=60 +a=6378144.0
\tXSIZE:\t\t800
\tYSIZE:\t\t1024
\tAREA_EXTENT:\t(-3780000.0, -7644000.0, 3900000.0, -1500000.0)
};

REGION: scan_ll {
\tNAME:\t\tScandinavia lat/lon
\tPCS_ID:\t\tlatlong
\tPCS_DEF:\tproj=latlong
\tXSIZE:\t\t40
\tYSIZE:\t\t20
\tAREA_EXTENT:\t(0, 55, 40, 75)
};
";

/// One small polar stereographic area, 4 columns by 3 rows of 1000 m pixels.
pub const SMALL_POLAR: &str = "\
REGION: small_polar {
  NAME: Small polar test grid
  PCS_ID: ps
  PCS_DEF: proj=stere lat_0=90 lon_0=0
  XSIZE: 4
  YSIZE: 3
  AREA_EXTENT: (0, 0, 4000, 3000)
};
";

/// A block missing its YSIZE line.
pub const MISSING_YSIZE: &str = "\
REGION: broken {
  NAME: Broken area
  PCS_ID: broken
  PCS_DEF: proj=latlong
  XSIZE: 10
  AREA_EXTENT: (0, 0, 10, 10)
};
";

/// A block whose XSIZE is not an integer.
pub const BAD_XSIZE: &str = "\
REGION: bad_size {
  NAME: Bad size
  PCS_ID: bad
  PCS_DEF: proj=latlong
  XSIZE: 10.5
  YSIZE: 10
  AREA_EXTENT: (0, 0, 10, 10)
};
";

/// Build the text of one area block.
pub fn area_block(
    id: &str,
    name: &str,
    pcs_def: &str,
    x_size: usize,
    y_size: usize,
    extent: (f64, f64, f64, f64),
) -> String {
    format!(
        "REGION: {id} {{\n  NAME: {name}\n  PCS_ID: {id}\n  PCS_DEF: {pcs_def}\n  XSIZE: {x_size}\n  YSIZE: {y_size}\n  AREA_EXTENT: ({:?}, {:?}, {:?}, {:?})\n}};\n",
        extent.0, extent.1, extent.2, extent.3
    )
}

/// Write `contents` to a fresh temporary file that is removed on drop.
pub fn write_area_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("areas")
        .suffix(".def")
        .tempfile()
        .expect("failed to create temp area file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp area file");
    file.flush().expect("failed to flush temp area file");
    file
}
