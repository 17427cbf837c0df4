//! Failure taxonomy for the dump pipeline

use crate::normalizer::NormalizeError;

/// Custom result type for dump operations
pub type DumpResult<T> = Result<T, DumpError>;

/// Everything that can go wrong while producing one artifact.
///
/// All variants collapse to one handling policy at the batch boundary:
/// log `<id> error: <message>` and move on to the next identifier.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("no such exchange: {0}")]
    Resolution(String),

    #[error("describe failed: {0}")]
    Introspection(String),

    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizeError),

    #[error("re-encode failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("persistence failed: {0}")]
    Persistence(#[from] std::io::Error),
}

impl From<anyhow::Error> for DumpError {
    fn from(err: anyhow::Error) -> Self {
        Self::Introspection(err.to_string())
    }
}
