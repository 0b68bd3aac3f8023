//! Domain types for tunesync.
//!
//! Filesystem roots use `PathBuf`; playlist entries stay `String` because
//! they are compared and prefix-stripped as text, exactly as read from the
//! playlist file.

use std::path::PathBuf;
use std::slice;

// ---------------------------------------------------------------------------
// Playlist
// ---------------------------------------------------------------------------

/// An ordered list of source file paths read from a playlist file.
///
/// Order is the order of non-comment lines in the file; duplicates are
/// permitted and preserved. The list is immutable once constructed — there
/// is deliberately no push/remove surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<String>,
}

impl Playlist {
    /// Build a playlist from already-parsed entries (tests, programmatic use).
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// All entries, in playlist order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ---------------------------------------------------------------------------
// SyncConfig
// ---------------------------------------------------------------------------

/// Configuration for one sync/prune run.
///
/// Built once from parsed CLI arguments and passed by reference into the
/// engines; no component mutates it after a pass starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Path prefix shared by the playlist entries this run covers; stripped
    /// when computing target paths. Entries not starting with it are skipped.
    pub source_prefix: String,
    /// Root directory files are copied into.
    pub target_root: PathBuf,
    /// Existence-only decision mode: a target path that already exists is
    /// skipped without looking at content or timestamps.
    pub quick: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_preserves_order_and_duplicates() {
        let playlist = Playlist::from_entries(vec![
            "/music/a.mp3".to_string(),
            "/music/b.mp3".to_string(),
            "/music/a.mp3".to_string(),
        ]);
        assert_eq!(playlist.len(), 3);
        assert_eq!(playlist.entries()[0], "/music/a.mp3");
        assert_eq!(playlist.entries()[2], "/music/a.mp3");
    }

    #[test]
    fn empty_playlist() {
        let playlist = Playlist::from_entries(vec![]);
        assert!(playlist.is_empty());
        assert_eq!(playlist.iter().count(), 0);
    }

    #[test]
    fn borrowing_iteration() {
        let playlist = Playlist::from_entries(vec!["x".to_string(), "y".to_string()]);
        let collected: Vec<_> = (&playlist).into_iter().collect();
        assert_eq!(collected, ["x", "y"]);
    }
}
