use std::path::PathBuf;

/// The one way a generation call can fail.
///
/// The reason is meant for logs only; callers facing a client should report a
/// generic message instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("generation failed: {reason}")]
pub struct GenerationFailure {
    pub reason: String,
}

impl GenerationFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Problems found while building or loading a topic catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    #[error("topic catalogue is empty")]
    Empty,

    #[error("topic #{index} has an empty `{field}` field")]
    InvalidTopic { index: usize, field: &'static str },

    #[error("failed to read topic catalogue {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse topic catalogue {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
