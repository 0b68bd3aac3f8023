//! Prune pass: delete target audio files the playlist no longer lists,
//! then remove directories the deletions emptied.
//!
//! Deletion is higher-stakes than copying, so any failure here aborts the
//! pass instead of being logged and skipped.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use tunesync_core::Playlist;

use crate::error::{io_err, SyncError};

/// File extensions treated as music when scanning the target tree; matched
/// case-insensitively. Extend here to recognize more formats.
pub const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "m4a", "wav"];

/// Summary of one prune pass.
#[derive(Debug, Default)]
pub struct PruneReport {
    /// Files deleted, in traversal order.
    pub deleted: Vec<PathBuf>,
    /// Directories removed because deletion left them empty.
    pub removed_dirs: Vec<PathBuf>,
    /// Audio files kept because a playlist entry matched them.
    pub kept: usize,
}

/// Delete every audio file under `target_root` that no playlist entry
/// refers to, then remove directories emptied by those deletions.
///
/// Directory removal checks each touched parent exactly once and does not
/// cascade: a grandparent emptied by removing its child directory stays.
pub fn prune(playlist: &Playlist, target_root: &Path) -> Result<PruneReport, SyncError> {
    let mut report = PruneReport::default();
    let mut touched_dirs: BTreeSet<PathBuf> = BTreeSet::new();

    for entry in WalkDir::new(target_root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(target_root).to_path_buf();
            io_err(path, e.into())
        })?;
        if !entry.file_type().is_file() || !is_audio_file(entry.path()) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(target_root)
            .unwrap_or_else(|_| entry.path());
        if is_kept(playlist, relative) {
            report.kept += 1;
            continue;
        }

        tracing::info!("deleting {}", entry.path().display());
        std::fs::remove_file(entry.path()).map_err(|e| io_err(entry.path(), e))?;
        if let Some(parent) = entry.path().parent() {
            touched_dirs.insert(parent.to_path_buf());
        }
        report.deleted.push(entry.into_path());
    }

    for dir in touched_dirs {
        // The target root itself is never removed.
        if dir == target_root {
            continue;
        }
        if is_empty_dir(&dir)? {
            tracing::info!("removing empty directory {}", dir.display());
            std::fs::remove_dir(&dir).map_err(|e| io_err(&dir, e))?;
            report.removed_dirs.push(dir);
        }
    }

    Ok(report)
}

/// Keep-check: does any playlist entry end with this target-relative path?
///
/// A suffix match, not equality — entries hold absolute source paths of
/// which only the tail is comparable. Known imprecision: a relative path
/// that happens to be the tail of an unrelated, longer entry is kept too.
fn is_kept(playlist: &Playlist, relative: &Path) -> bool {
    let Some(relative) = relative.to_str() else {
        // Paths that are not valid UTF-8 cannot match any entry string;
        // keep them rather than delete on an uncomparable name.
        return true;
    };
    playlist.iter().any(|entry| entry.ends_with(relative))
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn is_empty_dir(dir: &Path) -> Result<bool, SyncError> {
    let mut entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    Ok(entries.next().is_none())
}
