//! Error type for configuration, output, and record-dump failures.
//!
//! Classification itself never fails; these errors only come from the
//! surrounding I/O.

use std::io;
use std::path::PathBuf;

use game_records::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatcherError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to access '{path}': {source}")]
    Path { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Records(#[from] RecordError),
    #[error("invalid output key '{0}': expected <hex-id>|<source-file>")]
    InvalidKey(String),
    #[error("invalid color '{0}': expected exactly six hex digits")]
    InvalidColor(String),
    #[error("source '{0}' is not an enabled plugin in the load order")]
    UnknownSource(String),
}

impl PatcherError {
    /// Attach the path that failed to an I/O error.
    pub fn at_path(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| PatcherError::Path { path, source }
    }
}
