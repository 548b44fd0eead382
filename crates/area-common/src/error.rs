//! Error types for area definition handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using AreaError.
pub type AreaResult<T> = Result<T, AreaError>;

/// Errors raised while reading or building area definitions.
#[derive(Debug, Error)]
pub enum AreaError {
    /// A requested region was not present in the area file.
    #[error("Area \"{name}\" not found in file \"{}\"", .path.display())]
    AreaNotFound { name: String, path: PathBuf },

    /// A required field was absent from an area block.
    #[error("Missing required key: {0}")]
    MissingKey(String),

    /// A field could not be converted to its numeric type.
    #[error("Invalid value for '{field}': {value:?}")]
    Conversion { field: String, value: String },

    /// A proj4 token without a `=` separator.
    #[error("Malformed proj4 argument: {0:?}")]
    Format(String),

    /// A block line that is not a `KEY: value` pair.
    #[error("Malformed area line: {0:?}")]
    MalformedLine(String),

    /// A key given more than once in one area block.
    #[error("Duplicate key in area block: {0}")]
    DuplicateKey(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AreaError {
    /// Create an AreaNotFound error.
    pub fn area_not_found(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::AreaNotFound {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Create a MissingKey error.
    pub fn missing_key(field: impl Into<String>) -> Self {
        Self::MissingKey(field.into())
    }

    /// Create a Conversion error.
    pub fn conversion(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Conversion {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a Format error.
    pub fn format(token: impl Into<String>) -> Self {
        Self::Format(token.into())
    }

    /// Create a MalformedLine error.
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedLine(line.into())
    }

    /// Create a DuplicateKey error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }
}
