//! Target tree snapshot for quick-mode existence checks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{io_err, SyncError};

/// Every path under the target root at one point in time.
///
/// Built once per sync pass so quick-mode existence checks are set lookups
/// instead of per-file `stat` calls. This is a snapshot, not a live view:
/// files created later in the same pass are not visible through it.
#[derive(Debug, Default)]
pub struct TargetIndex {
    paths: HashSet<PathBuf>,
}

impl TargetIndex {
    /// Walk `target_root` recursively and record every file and directory
    /// beneath it.
    pub fn scan(target_root: &Path) -> Result<TargetIndex, SyncError> {
        let mut paths = HashSet::new();
        for entry in WalkDir::new(target_root).min_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(target_root).to_path_buf();
                io_err(path, e.into())
            })?;
            paths.insert(entry.into_path());
        }
        Ok(TargetIndex { paths })
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
