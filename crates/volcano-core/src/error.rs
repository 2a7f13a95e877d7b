// crates/volcano-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading or querying a dataset.
#[derive(Debug, Error)]
pub enum VolcanoError {
    /// The identifier (or the default) does not resolve to a readable file.
    #[error("Dataset not found at {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not valid JSON or a record does not have the expected shape.
    #[error("Failed to parse dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A query ran before any successful `load`.
    #[error("Dataset not loaded: call `load` before querying")]
    NotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VolcanoError {
    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        // serde_json reports reader failures (e.g. a truncated gzip stream) as
        // its own error kind; those are IO problems, not malformed data.
        if source.is_io() {
            return VolcanoError::Io(source.into());
        }
        VolcanoError::Parse {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, VolcanoError>;
