use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a backend resource
#[derive(Debug, Error)]
pub enum DataError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource} unavailable after {attempts} attempts: {last}")]
    Exhausted {
        resource: String,
        attempts: u32,
        last: Box<DataError>,
    },
}

impl DataError {
    /// Transient failures worth another attempt.
    ///
    /// Missing or malformed resources will not fix themselves on retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::Io { source, .. } => !matches!(
                source.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
            ),
            DataError::NotFound(_) | DataError::Parse { .. } | DataError::Exhausted { .. } => false,
        }
    }
}
