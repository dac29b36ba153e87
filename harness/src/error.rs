//! Harness error type.

use std::path::PathBuf;

use strips_kernel::error::EncodeError;
use strips_search::error::SearchError;
use thiserror::Error;

use crate::reader::ReadError;

/// Error surfaced by harness entry points.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("`{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("unknown built-in world `{0}`")]
    UnknownWorld(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}
