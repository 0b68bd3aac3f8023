//! The actual file copy: mkdir-p, content+permissions, timestamps.

use std::io::ErrorKind;
use std::path::Path;

use filetime::FileTime;

use crate::error::{io_err, SyncError};

/// Copy `source` to `target`, creating any missing ancestor directories.
///
/// Content and permissions come over via `fs::copy`; the source's access
/// and modification times are then applied to the target. A filesystem
/// that cannot represent the timestamps (`ErrorKind::Unsupported`) does
/// not fail the copy — common on FAT-formatted players.
pub fn copy_file(source: &Path, target: &Path) -> Result<(), SyncError> {
    if let Some(parent) = target.parent() {
        // create_dir_all is idempotent: an already-existing directory (e.g.
        // made for an earlier file in the pass) is not an error.
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    std::fs::copy(source, target).map_err(|e| io_err(target, e))?;

    let meta = std::fs::metadata(source).map_err(|e| io_err(source, e))?;
    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    match filetime::set_file_times(target, atime, mtime) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::Unsupported => {
            tracing::debug!(
                "timestamps not supported on destination for {}",
                target.display()
            );
            Ok(())
        }
        Err(e) => Err(io_err(target, e)),
    }
}
