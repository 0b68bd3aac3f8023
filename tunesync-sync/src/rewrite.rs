//! Source-to-target path rewriting. Pure string/path work, no I/O.

use std::path::{Path, PathBuf};

/// Whether `source_path` falls under the configured source prefix.
///
/// Entries outside the prefix are a policy matter for the engine (skip and
/// report), not an error here.
pub fn in_scope(source_path: &str, source_prefix: &str) -> bool {
    source_path.starts_with(source_prefix)
}

/// Map a source file path to its target path: strip `source_prefix`, join
/// the remainder onto `target_root`.
///
/// Callers must check [`in_scope`] first. Leading separators on the
/// remainder are trimmed so `join` cannot be tricked into producing an
/// absolute path outside the target root.
pub fn target_path_for(source_path: &str, source_prefix: &str, target_root: &Path) -> PathBuf {
    debug_assert!(in_scope(source_path, source_prefix));
    let remainder = source_path[source_prefix.len()..].trim_start_matches(['/', '\\']);
    target_root.join(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_and_joins() {
        let target = target_path_for("/music/a/1.mp3", "/music/", Path::new("/dev/"));
        assert_eq!(target, PathBuf::from("/dev/a/1.mp3"));
    }

    #[test]
    fn prefix_without_trailing_separator_stays_inside_target() {
        // Remainder would start with '/' — a bare join would escape to the
        // filesystem root.
        let target = target_path_for("/music/a/1.mp3", "/music", Path::new("/dev"));
        assert_eq!(target, PathBuf::from("/dev/a/1.mp3"));
    }

    #[test]
    fn empty_prefix_keeps_whole_relative_tail() {
        let target = target_path_for("albums/a/1.mp3", "", Path::new("/dev"));
        assert_eq!(target, PathBuf::from("/dev/albums/a/1.mp3"));
    }

    #[test]
    fn scope_check() {
        assert!(in_scope("/music/a.mp3", "/music/"));
        assert!(!in_scope("/podcasts/a.mp3", "/music/"));
        assert!(in_scope("/anything", ""));
    }
}
