//! Error handling for apisurf-store
//!
//! Store failures are raised as `ApiSurfError` input variants and mapped into
//! `ExError` through `From`.

use apisurf_core::errors::{ApiSurfError, ExError};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for `path`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ApiSurfError::Io {
        op: operation.to_string(),
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Create a semantic-model error
pub fn invalid_model(path: &Path, reason: impl Into<String>) -> ExError {
    ApiSurfError::InvalidModel {
        path: path.display().to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Create a configuration error
pub fn invalid_config(path: &Path, reason: impl Into<String>) -> ExError {
    ApiSurfError::InvalidConfig {
        path: path.display().to_string(),
        reason: reason.into(),
    }
    .into()
}
