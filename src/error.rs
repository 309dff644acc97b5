//! Error types for stree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreeError>;

#[derive(Debug, Error)]
pub enum StreeError {
    /// The root could not be stat'ed, or is a directory that cannot be listed.
    #[error("cannot access '{}': {}", .path.display(), .source)]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error writing output: {0}")]
    Io(#[from] io::Error),
    #[error("error serializing entry: {0}")]
    Json(#[from] serde_json::Error),
}

impl StreeError {
    /// True when stdout was closed under us (e.g. `stree | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            StreeError::Io(e) => e.kind() == io::ErrorKind::BrokenPipe,
            StreeError::Json(e) => e.io_error_kind() == Some(io::ErrorKind::BrokenPipe),
            StreeError::RootInaccessible { .. } => false,
        }
    }
}
