//! Errors raised while reading record identities and record dumps.

use thiserror::Error;

/// Failures when parsing source keys, references, or a record dump.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid source file name '{0}': expected <name>.esm, .esp or .esl")]
    InvalidSourceKey(String),
    #[error("invalid record reference '{0}': expected <hex-id>:<source-file>")]
    InvalidReference(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
