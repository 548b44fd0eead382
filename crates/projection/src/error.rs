//! Error types for projection setup and execution.

use thiserror::Error;

pub type ProjectionResult<T> = Result<T, ProjectionError>;

#[derive(Debug, Error)]
pub enum ProjectionError {
    /// The `proj=` value names a projection that is not implemented.
    #[error("Unsupported projection: {0}")]
    UnsupportedProjection(String),

    /// A projection parameter is missing or not numeric.
    #[error("Invalid projection parameter '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    /// The worker pool for parallel execution could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl ProjectionError {
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}
