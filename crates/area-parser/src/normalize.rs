//! proj4 argument normalization.

use area_common::{AreaError, AreaResult, Proj4Args, Proj4Params};

/// Turn proj4 arguments into a key/value mapping.
///
/// Accepts either a whitespace-separated string of `+key=value` tokens or an
/// already tokenized list of `key=value` strings. A leading `+` is optional.
/// Each token is split on its first `=`; a later duplicate key overwrites the
/// earlier value.
///
/// # Errors
/// [`AreaError::Format`] if a token has no `=`.
///
/// # Example
/// ```
/// use area_parser::normalize_proj4_args;
///
/// let params = normalize_proj4_args("+proj=stere +lat_0=90 +lon_0=0").unwrap();
/// assert_eq!(params.get("proj"), Some("stere"));
/// assert_eq!(params.len(), 3);
/// ```
pub fn normalize_proj4_args(args: impl Into<Proj4Args>) -> AreaResult<Proj4Params> {
    let args = args.into();
    let tokens: Vec<&str> = match &args {
        Proj4Args::Text(text) => text.split_whitespace().collect(),
        Proj4Args::Tokens(tokens) => tokens
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect(),
    };

    let mut params = Proj4Params::new();
    for token in tokens {
        let stripped = token.trim_start_matches('+');
        let (key, value) = stripped
            .split_once('=')
            .ok_or_else(|| AreaError::format(token))?;
        params.insert(key.trim(), value.trim());
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(params: &Proj4Params) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn test_text_with_plus_prefix() {
        let params = normalize_proj4_args("+proj=stere +lat_0=90 +lon_0=0").unwrap();
        assert_eq!(
            pairs(&params),
            vec![("proj", "stere"), ("lat_0", "90"), ("lon_0", "0")]
        );
    }

    #[test]
    fn test_tokens_without_prefix() {
        let params = normalize_proj4_args(["proj=stere", "lat_0=90", "lon_0=0"]).unwrap();
        assert_eq!(
            pairs(&params),
            vec![("proj", "stere"), ("lat_0", "90"), ("lon_0", "0")]
        );
    }

    #[test]
    fn test_text_and_tokens_agree() {
        let a = normalize_proj4_args("proj=laea lat_0=-90 a=6371228.0").unwrap();
        let b = normalize_proj4_args(vec![
            "+proj=laea".to_string(),
            " lat_0=-90".to_string(),
            "a=6371228.0 ".to_string(),
        ])
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let params = normalize_proj4_args("+proj=stere +lat_0=90 +proj=merc").unwrap();
        assert_eq!(params.get("proj"), Some("merc"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_value_split_on_first_equals() {
        let params = normalize_proj4_args("+init=epsg:4326 +towgs84=a=b").unwrap();
        assert_eq!(params.get("towgs84"), Some("a=b"));
    }

    #[test]
    fn test_token_without_equals_is_format_error() {
        let err = normalize_proj4_args("+proj=stere +no_defs").unwrap_err();
        match err {
            AreaError::Format(token) => assert_eq!(token, "+no_defs"),
            other => panic!("expected Format, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_proj4_args("   ").unwrap().is_empty());
    }
}
