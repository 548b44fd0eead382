//! Builds typed [`AreaConfig`] records from block content, dictionaries or
//! plain arguments.

use std::collections::HashMap;

use area_common::{AreaConfig, AreaError, AreaExtent, AreaResult, Proj4Args, Proj4Params};
use tracing::debug;

use crate::normalize::normalize_proj4_args;
use crate::tokenize::{tokenize_block, RawValue};

/// Field names used in area files and area dictionaries.
pub mod keys {
    pub const NAME: &str = "NAME";
    pub const PCS_ID: &str = "PCS_ID";
    pub const PCS_DEF: &str = "PCS_DEF";
    pub const XSIZE: &str = "XSIZE";
    pub const YSIZE: &str = "YSIZE";
    pub const AREA_EXTENT: &str = "AREA_EXTENT";
}

/// Build an [`AreaConfig`] from one block's id and raw content lines.
///
/// The block id always becomes the region, overriding any `REGION` key in
/// the content. A list-valued `NAME` is joined with `", "`.
///
/// # Errors
/// - [`AreaError::MissingKey`] naming the first absent required field
/// - [`AreaError::Conversion`] naming a field that is not numeric
/// - [`AreaError::Format`] for a malformed `PCS_DEF` token
/// - [`AreaError::MalformedLine`] / [`AreaError::DuplicateKey`] for a body
///   line that is not a single `KEY: value` entry
pub fn build_area_config<S: AsRef<str>>(block_id: &str, content_lines: &[S]) -> AreaResult<AreaConfig> {
    let fields: HashMap<String, RawValue> = tokenize_block(content_lines)?.into_iter().collect();
    let field = |key: &str| fields.get(key).ok_or_else(|| AreaError::missing_key(key));

    let name = field(keys::NAME)?.joined();
    let x_size = parse_size(keys::XSIZE, field(keys::XSIZE)?)?;
    let y_size = parse_size(keys::YSIZE, field(keys::YSIZE)?)?;
    let extent = parse_extent(field(keys::AREA_EXTENT)?)?;
    let proj4_params = normalize_proj4_args(match field(keys::PCS_DEF)? {
        RawValue::Scalar(text) => Proj4Args::Text(text.clone()),
        RawValue::List(tokens) => Proj4Args::Tokens(tokens.clone()),
    })?;
    let pcs_id = field(keys::PCS_ID)?.joined();

    debug!(area = %block_id, x_size, y_size, "Built area config");

    Ok(AreaConfig {
        region: block_id.to_string(),
        name,
        pcs_id,
        proj4_params,
        x_size,
        y_size,
        extent,
    })
}

fn parse_size(key: &str, value: &RawValue) -> AreaResult<usize> {
    let RawValue::Scalar(raw) = value else {
        return Err(AreaError::conversion(key, value.joined()));
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AreaError::conversion(key, raw.as_str())),
    }
}

/// Parse the four extent tokens `(minX, minY, maxX, maxY)`.
///
/// Accepts a comma separated list or, for a scalar value, whitespace
/// separated tokens. The leading `(` of the first token and the trailing `)`
/// of the last one are stripped.
fn parse_extent(value: &RawValue) -> AreaResult<AreaExtent> {
    let tokens: Vec<&str> = match value {
        RawValue::List(items) => items.iter().map(String::as_str).collect(),
        RawValue::Scalar(text) => text.split_whitespace().collect(),
    };
    if tokens.len() != 4 {
        return Err(AreaError::conversion(keys::AREA_EXTENT, value.joined()));
    }

    let first = tokens[0].trim().trim_start_matches('(');
    let last = tokens[3].trim().trim_end_matches(')');
    let cleaned = [first, tokens[1], tokens[2], last];

    let mut coords = [0.0f64; 4];
    for (slot, token) in coords.iter_mut().zip(cleaned) {
        *slot = token
            .trim()
            .parse::<f64>()
            .map_err(|_| AreaError::conversion(keys::AREA_EXTENT, token))?;
    }
    Ok(AreaExtent::from(coords))
}

/// A typed value in an area dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaValue {
    Text(String),
    Params(Proj4Params),
    Size(usize),
    Extent(AreaExtent),
}

/// Build an [`AreaConfig`] from a dictionary keyed by area-file field names.
///
/// Fields are copied as given: `PCS_DEF` must already be normalized and no
/// range checks are applied. The region is taken from `PCS_ID`.
///
/// # Errors
/// [`AreaError::MissingKey`] for an absent key, [`AreaError::Conversion`] for
/// a value of the wrong kind.
pub fn build_area_from_dict(dict: &HashMap<String, AreaValue>) -> AreaResult<AreaConfig> {
    let get = |key: &str| dict.get(key).ok_or_else(|| AreaError::missing_key(key));
    let wrong = |key: &str, value: &AreaValue| AreaError::conversion(key, format!("{:?}", value));

    let text = |key: &str| -> AreaResult<String> {
        match get(key)? {
            AreaValue::Text(s) => Ok(s.clone()),
            other => Err(wrong(key, other)),
        }
    };
    let size = |key: &str| -> AreaResult<usize> {
        match get(key)? {
            AreaValue::Size(n) => Ok(*n),
            other => Err(wrong(key, other)),
        }
    };

    let pcs_id = text(keys::PCS_ID)?;
    let name = text(keys::NAME)?;
    let proj4_params = match get(keys::PCS_DEF)? {
        AreaValue::Params(p) => p.clone(),
        other => return Err(wrong(keys::PCS_DEF, other)),
    };
    let x_size = size(keys::XSIZE)?;
    let y_size = size(keys::YSIZE)?;
    let extent = match get(keys::AREA_EXTENT)? {
        AreaValue::Extent(e) => *e,
        other => return Err(wrong(keys::AREA_EXTENT, other)),
    };

    Ok(AreaConfig {
        region: pcs_id.clone(),
        name,
        pcs_id,
        proj4_params,
        x_size,
        y_size,
        extent,
    })
}

/// Build an [`AreaConfig`] from explicit arguments, normalizing the proj4
/// arguments.
///
/// # Example
/// ```
/// use area_parser::build_area_from_args;
///
/// let area = build_area_from_args(
///     "ps", "Polar", "ps60n", "+proj=stere +lat_0=90", 10, 20, (0.0, 0.0, 1.0, 2.0),
/// ).unwrap();
/// assert_eq!(area.proj4_params.get("lat_0"), Some("90"));
/// assert_eq!(area.shape(), (20, 10));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn build_area_from_args(
    area_id: &str,
    name: &str,
    proj_id: &str,
    proj4_args: impl Into<Proj4Args>,
    x_size: usize,
    y_size: usize,
    extent: impl Into<AreaExtent>,
) -> AreaResult<AreaConfig> {
    Ok(AreaConfig {
        region: area_id.to_string(),
        name: name.to_string(),
        pcs_id: proj_id.to_string(),
        proj4_params: normalize_proj4_args(proj4_args)?,
        x_size,
        y_size,
        extent: extent.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASE: [&str; 6] = [
        "\tNAME:\t\tAntarctic EASE grid",
        "\tPCS_ID:\t\tease_sh",
        "\tPCS_DEF:\tproj=laea, lat_0=-90, lon_0=0, a=6371228.0, units=m",
        "\tXSIZE:\t\t425",
        "\tYSIZE:\t\t425",
        "\tAREA_EXTENT:\t(-5326849.0625,-5326849.0625,5326849.0625,5326849.0625)",
    ];

    fn without(key: &str) -> Vec<&'static str> {
        EASE.iter()
            .copied()
            .filter(|l| !l.trim_start().starts_with(&format!("{}:", key)))
            .collect()
    }

    #[test]
    fn test_build_from_block() {
        let area = build_area_config("ease_sh", &EASE).unwrap();
        assert_eq!(area.region, "ease_sh");
        assert_eq!(area.name, "Antarctic EASE grid");
        assert_eq!(area.pcs_id, "ease_sh");
        assert_eq!(area.x_size, 425);
        assert_eq!(area.y_size, 425);
        assert_eq!(
            area.extent,
            AreaExtent::new(-5326849.0625, -5326849.0625, 5326849.0625, 5326849.0625)
        );
        let keys: Vec<&str> = area.proj4_params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["proj", "lat_0", "lon_0", "a", "units"]);
        assert_eq!(area.proj4_params.get("a"), Some("6371228.0"));
    }

    #[test]
    fn test_block_id_overrides_region_key() {
        let mut lines = EASE.to_vec();
        lines.push("REGION: something_else");
        let area = build_area_config("ease_sh", &lines).unwrap();
        assert_eq!(area.region, "ease_sh");
    }

    #[test]
    fn test_list_name_is_joined() {
        let mut lines = without("NAME");
        lines.push("NAME: Europe,3km ,  polar");
        let area = build_area_config("x", &lines).unwrap();
        assert_eq!(area.name, "Europe, 3km, polar");
    }

    #[test]
    fn test_extent_parenthesis_tokens() {
        let value = RawValue::List(
            ["(10", "20", "30", "40)"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(parse_extent(&value).unwrap(), AreaExtent::new(10.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_extent_whitespace_tokens() {
        let value = RawValue::Scalar("(1.5 -2 3e3 4)".to_string());
        assert_eq!(parse_extent(&value).unwrap(), AreaExtent::new(1.5, -2.0, 3000.0, 4.0));
    }

    #[test]
    fn test_extent_wrong_arity() {
        let value = RawValue::List(vec!["(1".into(), "2".into(), "3)".into()]);
        assert!(matches!(
            parse_extent(&value),
            Err(AreaError::Conversion { ref field, .. }) if field == "AREA_EXTENT"
        ));
    }

    #[test]
    fn test_extent_non_numeric() {
        let mut lines = without("AREA_EXTENT");
        lines.push("AREA_EXTENT: (0, zero, 10, 10)");
        match build_area_config("x", &lines).unwrap_err() {
            AreaError::Conversion { field, value } => {
                assert_eq!(field, "AREA_EXTENT");
                assert_eq!(value, "zero");
            }
            other => panic!("expected Conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_keys_are_named() {
        for key in ["NAME", "PCS_ID", "PCS_DEF", "XSIZE", "YSIZE", "AREA_EXTENT"] {
            match build_area_config("x", &without(key)).unwrap_err() {
                AreaError::MissingKey(k) => assert_eq!(k, key),
                other => panic!("expected MissingKey({}), got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_non_integral_size() {
        let mut lines = without("XSIZE");
        lines.push("XSIZE: 42.5");
        match build_area_config("x", &lines).unwrap_err() {
            AreaError::Conversion { field, value } => {
                assert_eq!(field, "XSIZE");
                assert_eq!(value, "42.5");
            }
            other => panic!("expected Conversion, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_size_rejected() {
        let mut lines = without("YSIZE");
        lines.push("YSIZE: 0");
        assert!(matches!(
            build_area_config("x", &lines),
            Err(AreaError::Conversion { ref field, .. }) if field == "YSIZE"
        ));
    }

    #[test]
    fn test_bad_proj4_token() {
        let mut lines = without("PCS_DEF");
        lines.push("PCS_DEF: proj=stere no_defs");
        assert!(matches!(build_area_config("x", &lines), Err(AreaError::Format(_))));
    }

    #[test]
    fn test_stray_line_aborts_build() {
        let mut lines = EASE.to_vec();
        lines.push("garbage line");
        assert!(matches!(
            build_area_config("ease_sh", &lines),
            Err(AreaError::MalformedLine(ref line)) if line == "garbage line"
        ));
    }

    #[test]
    fn test_repeated_key_aborts_build() {
        let mut lines = EASE.to_vec();
        lines.push("XSIZE: 7");
        assert!(matches!(
            build_area_config("ease_sh", &lines),
            Err(AreaError::DuplicateKey(ref key)) if key == "XSIZE"
        ));
    }

    fn sample_dict() -> HashMap<String, AreaValue> {
        let params: Proj4Params = vec![("proj", "stere"), ("lat_0", "90")].into_iter().collect();
        HashMap::from([
            (keys::PCS_ID.to_string(), AreaValue::Text("ps60n".into())),
            (keys::NAME.to_string(), AreaValue::Text("Polar".into())),
            (keys::PCS_DEF.to_string(), AreaValue::Params(params)),
            (keys::XSIZE.to_string(), AreaValue::Size(100)),
            (keys::YSIZE.to_string(), AreaValue::Size(50)),
            (
                keys::AREA_EXTENT.to_string(),
                AreaValue::Extent(AreaExtent::new(0.0, 0.0, 1.0, 1.0)),
            ),
        ])
    }

    #[test]
    fn test_from_dict_copies_fields() {
        let area = build_area_from_dict(&sample_dict()).unwrap();
        assert_eq!(area.region, "ps60n");
        assert_eq!(area.pcs_id, "ps60n");
        assert_eq!(area.name, "Polar");
        assert_eq!(area.proj4_params.get("proj"), Some("stere"));
        assert_eq!(area.shape(), (50, 100));
    }

    #[test]
    fn test_from_dict_missing_and_mistyped() {
        let mut dict = sample_dict();
        dict.remove(keys::YSIZE);
        assert!(matches!(build_area_from_dict(&dict), Err(AreaError::MissingKey(k)) if k == "YSIZE"));

        let mut dict = sample_dict();
        dict.insert(keys::XSIZE.to_string(), AreaValue::Text("100".into()));
        assert!(matches!(
            build_area_from_dict(&dict),
            Err(AreaError::Conversion { ref field, .. }) if field == "XSIZE"
        ));
    }

    #[test]
    fn test_from_args_normalizes() {
        let area = build_area_from_args(
            "ease",
            "EASE",
            "ease_nh",
            vec!["proj=laea".to_string(), "lat_0=90".to_string()],
            425,
            425,
            [-1.0, -1.0, 1.0, 1.0],
        )
        .unwrap();
        assert_eq!(area.region, "ease");
        assert_eq!(area.pcs_id, "ease_nh");
        assert_eq!(area.proj4_params.to_string(), "+proj=laea +lat_0=90");
    }

    #[test]
    fn test_from_args_rejects_bad_token() {
        let result = build_area_from_args("a", "b", "c", "proj", 1, 1, (0.0, 0.0, 1.0, 1.0));
        assert!(matches!(result, Err(AreaError::Format(_))));
    }
}
