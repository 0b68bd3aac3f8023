//! Error types for tunesync-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from sync and prune operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target root does not exist or is not a directory. Aborts the
    /// sync pass before any file is touched.
    #[error("target directory {path} does not exist")]
    TargetMissing { path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
