//! Error types for fixture loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fixture loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),
    /// Malformed glob pattern
    #[error("Invalid fixture pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Fixture file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Pattern matched no files
    #[error("No fixture files match: {0}")]
    NoFilesMatched(String),
}

impl From<glob::GlobError> for ConfigError {
    fn from(err: glob::GlobError) -> Self {
        ConfigError::Io {
            path: err.path().to_path_buf(),
            source: err.into(),
        }
    }
}
