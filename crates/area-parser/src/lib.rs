//! Area definition file parsing.
//!
//! Reads files of brace-delimited area blocks:
//!
//! ```text
//! REGION: euro_stere {
//!   NAME: Europe, polar stereographic
//!   PCS_ID: ps60n
//!   PCS_DEF: proj=stere lat_0=90 lon_0=14 lat_ts=60
//!   XSIZE: 800
//!   YSIZE: 1024
//!   AREA_EXTENT: (-3780000.0, -7644000.0, 3900000.0, -1500000.0)
//! };
//! ```
//!
//! and turns each selected block into a typed [`AreaConfig`].
//!
//! # Pipeline
//!
//! ```text
//! file text
//!    │
//!    ▼
//! scanner (Scanning ⇄ InBlock)  ──► AreaBlockRaw { id, content_lines }
//!    │
//!    ▼
//! builder (tokenize key: value, convert)  ──► AreaConfig
//! ```

pub mod builder;
pub mod normalize;
pub mod parser;
pub mod scanner;
pub mod tokenize;

pub use area_common::{AreaConfig, AreaError, AreaExtent, AreaResult, Proj4Args, Proj4Params};
pub use builder::{build_area_config, build_area_from_args, build_area_from_dict, AreaValue};
pub use normalize::normalize_proj4_args;
pub use parser::{parse_area_file, parse_area_text};
pub use scanner::{AreaBlockRaw, BlockScanner, ScanState};
pub use tokenize::{tokenize_block, RawValue};
