//! Playlist file loading.
//!
//! The format is a flat list of file paths, one per line. Lines whose first
//! character is `#` are comments (this covers the `#EXTM3U` / `#EXTINF`
//! directives of extended m3u files). All other non-empty lines are taken
//! verbatim — no trimming beyond the trailing newline, no quoting support.

use std::path::Path;

use crate::error::{io_err, PlaylistError};
use crate::types::Playlist;

impl Playlist {
    /// Load a playlist from `path`.
    ///
    /// Inability to open or read the file is an error; callers treat it as
    /// fatal (no work has happened yet at that point).
    pub fn load(path: impl AsRef<Path>) -> Result<Playlist, PlaylistError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        Ok(Self::parse(&contents))
    }

    /// Parse playlist text. Separated from [`Playlist::load`] so tests can
    /// exercise the line rules without touching the filesystem.
    pub fn parse(contents: &str) -> Playlist {
        let entries = contents
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect();
        Playlist::from_entries(entries)
    }
}

/// Longest common prefix of all playlist entries.
///
/// Used as the default source prefix when the caller does not supply one.
/// Returns `None` for an empty playlist. The result is a plain string
/// prefix, not necessarily ending on a path-component boundary.
pub fn guess_source_prefix(playlist: &Playlist) -> Option<String> {
    let mut iter = playlist.iter();
    let mut prefix = iter.next()?.clone();
    for entry in iter {
        let common = prefix
            .chars()
            .zip(entry.chars())
            .take_while(|(a, b)| a == b)
            .count();
        let byte_len = prefix
            .char_indices()
            .nth(common)
            .map_or(prefix.len(), |(i, _)| i);
        prefix.truncate(byte_len);
        if prefix.is_empty() {
            break;
        }
    }
    Some(prefix)
}
