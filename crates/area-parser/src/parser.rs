//! Whole-file area parsing with name selection.

use std::path::Path;

use area_common::{AreaConfig, AreaError, AreaResult};
use tracing::{debug, warn};

use crate::builder::build_area_config;
use crate::scanner::BlockScanner;

/// Parse an area file and build the selected areas.
///
/// With no `names`, every block is returned in file order. Otherwise one
/// area is returned per requested name, in requested order. When a
/// requested name occurs more than once, every occurrence is built and the
/// last one is returned.
///
/// # Errors
/// - I/O errors from reading the file, unmodified
/// - [`AreaError::AreaNotFound`] for the first requested name (in requested
///   order) that has no block
/// - any [`build_area_config`] error for a selected block
pub fn parse_area_file<P: AsRef<Path>, S: AsRef<str>>(path: P, names: &[S]) -> AreaResult<Vec<AreaConfig>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    parse_area_text(&text, names, path)
}

/// Parse area file contents already in memory; `origin` names the source
/// in [`AreaError::AreaNotFound`].
pub fn parse_area_text<S: AsRef<str>>(text: &str, names: &[S], origin: &Path) -> AreaResult<Vec<AreaConfig>> {
    let requested: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    let select_all = requested.is_empty();

    let mut collected: Vec<AreaConfig> = Vec::new();
    let mut slots: Vec<Option<AreaConfig>> = vec![None; requested.len()];
    let mut scanner = BlockScanner::new();

    for line in text.lines() {
        let wanted = |id: &str| select_all || requested.iter().any(|name| *name == id);
        let Some(block) = scanner.feed(line, wanted) else {
            continue;
        };

        debug!(area = %block.id, lines = block.content_lines.len(), "Found area block");
        let config = build_area_config(&block.id, &block.content_lines)?;

        if select_all {
            collected.push(config);
        } else if let Some(i) = requested.iter().position(|name| *name == block.id) {
            slots[i] = Some(config);
        }
    }

    if let Some(open) = scanner.finish() {
        warn!(
            area = %open.id,
            file = %origin.display(),
            "Area block reached end of file without terminator; discarded"
        );
    }

    if select_all {
        debug!(count = collected.len(), file = %origin.display(), "Parsed all areas");
        return Ok(collected);
    }

    requested
        .iter()
        .zip(slots)
        .map(|(name, slot)| slot.ok_or_else(|| AreaError::area_not_found(*name, origin)))
        .collect()
}
