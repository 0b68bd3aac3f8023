//! Per-file copy/skip policy.
//!
//! Decision table:
//!
//! | mode      | target state                          | decision          |
//! |-----------|---------------------------------------|-------------------|
//! | quick     | path in snapshot                      | `SkipQuickExists` |
//! | quick     | path not in snapshot                  | `Copy`            |
//! | non-quick | missing                               | `Copy`            |
//! | non-quick | byte-identical to source              | `SkipIdentical`   |
//! | non-quick | differs, target mtime ≥ source mtime  | `SkipTargetNewer` |
//! | non-quick | differs, target strictly older        | `Copy`            |
//!
//! Quick mode never reads content or timestamps — a stale target file with
//! the same path is deliberately never overwritten in that mode.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{io_err, SyncError};
use crate::index::TargetIndex;

/// Outcome of the per-file policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyDecision {
    /// Target is absent or older with different content — copy it.
    Copy,
    /// Target exists with byte-identical content.
    SkipIdentical,
    /// Target exists with different content but is at least as new as the
    /// source. Never overwritten — protects edits made on the device.
    SkipTargetNewer,
    /// Quick mode: a file already exists at the target path.
    SkipQuickExists,
}

/// Decide whether `source` should be copied to `target`.
///
/// In quick mode `index` must hold the pre-pass target snapshot; it is
/// ignored otherwise.
pub fn decide(
    source: &Path,
    target: &Path,
    quick: bool,
    index: Option<&TargetIndex>,
) -> Result<CopyDecision, SyncError> {
    if quick {
        let exists = index.map_or_else(|| target.exists(), |idx| idx.contains(target));
        return Ok(if exists {
            CopyDecision::SkipQuickExists
        } else {
            CopyDecision::Copy
        });
    }

    if !target.exists() {
        return Ok(CopyDecision::Copy);
    }

    if hash_file(source)? == hash_file(target)? {
        return Ok(CopyDecision::SkipIdentical);
    }

    let source_mtime = mtime(source)?;
    let target_mtime = mtime(target)?;
    if target_mtime >= source_mtime {
        Ok(CopyDecision::SkipTargetNewer)
    } else {
        Ok(CopyDecision::Copy)
    }
}

/// SHA-256 hex digest of a file's contents, read in chunks.
fn hash_file(path: &Path) -> Result<String, SyncError> {
    let mut file = File::open(path).map_err(|e| io_err(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = file.read(&mut buf).map_err(|e| io_err(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn mtime(path: &Path) -> Result<std::time::SystemTime, SyncError> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| io_err(path, e))
}
