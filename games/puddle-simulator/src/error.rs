use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the I/O edges: level files and the progress file.
#[derive(Debug, Error)]
pub enum PuddleError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level {index} out of range (have {count})")]
    LevelOutOfRange { index: usize, count: usize },
    #[error("color index {0} is outside the 7-color palette")]
    InvalidColor(u8),
}

pub type Result<T> = std::result::Result<T, PuddleError>;

impl PuddleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PuddleError::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        PuddleError::Json { path: path.into(), source }
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PuddleError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
