//! Error types for tunesync-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from playlist loading.
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Underlying I/O failure (file not found, permission denied, etc.),
    /// with annotated path for context.
    #[error("could not read playlist {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PlaylistError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PlaylistError {
    PlaylistError::Io {
        path: path.into(),
        source,
    }
}
