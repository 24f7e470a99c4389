//! Error type shared by the listing, navigation and codec layers.
//!
//! Nothing here is recovered locally: every failure travels back to the host,
//! which decides how to surface it to the user.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Reading the directory failed (missing, not a directory, permission denied).
    #[error("cannot list directory {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Inbound payload was not a valid navigation request.
    #[error("malformed payload: {0}")]
    Parse(#[source] serde_json::Error),

    /// Outbound state could not be serialized.
    #[error("cannot encode state: {0}")]
    Encode(#[source] serde_json::Error),

    /// The process working directory could not be resolved.
    #[error("cannot read working directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl ExplorerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExplorerError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the underlying filesystem reported a missing path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExplorerError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
