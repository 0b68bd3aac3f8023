//! End-to-end sync + prune passes over real temporary trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use tunesync_core::{Playlist, SyncConfig};
use tunesync_sync::{engine, prune, CopyDecision, EntryOutcome};

fn entry(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

fn source_tree(files: &[(&str, &[u8])]) -> (TempDir, String) {
    let _ = env_logger::builder().is_test(true).try_init();
    let root = TempDir::new().expect("source tree");
    for (rel, content) in files {
        let path = root.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).expect("mkdir");
        fs::write(path, content).expect("write");
    }
    let prefix = format!("{}/", root.path().display());
    (root, prefix)
}

#[test]
fn copy_pass_builds_mirrored_tree() {
    let (src, prefix) = source_tree(&[("a/1.mp3", b"one"), ("b/2.mp3", b"two")]);
    let target = TempDir::new().unwrap();

    let playlist = Playlist::from_entries(vec![
        entry(&src.path().join("a/1.mp3")),
        entry(&src.path().join("b/2.mp3")),
    ]);
    let config = SyncConfig {
        source_prefix: prefix,
        target_root: target.path().to_path_buf(),
        quick: false,
    };

    let report = engine::run(&playlist, &config).expect("sync");
    assert_eq!(report.copied(), 2);
    assert!(target.path().join("a").is_dir());
    assert!(target.path().join("b").is_dir());
    assert_eq!(fs::read(target.path().join("a/1.mp3")).unwrap(), b"one");
    assert_eq!(fs::read(target.path().join("b/2.mp3")).unwrap(), b"two");
}

#[test]
fn full_cycle_sync_then_prune_removes_dropped_track() {
    let (src, prefix) = source_tree(&[("a/1.mp3", b"one"), ("c/3.mp3", b"three")]);
    let target = TempDir::new().unwrap();

    // First sync both tracks.
    let both = Playlist::from_entries(vec![
        entry(&src.path().join("a/1.mp3")),
        entry(&src.path().join("c/3.mp3")),
    ]);
    let config = SyncConfig {
        source_prefix: prefix,
        target_root: target.path().to_path_buf(),
        quick: false,
    };
    engine::run(&both, &config).expect("sync");

    // The playlist then drops c/3.mp3.
    let trimmed = Playlist::from_entries(vec![entry(&src.path().join("a/1.mp3"))]);
    let report = prune::prune(&trimmed, target.path()).expect("prune");

    assert_eq!(report.deleted, vec![target.path().join("c/3.mp3")]);
    assert_eq!(report.removed_dirs, vec![target.path().join("c")]);
    assert_eq!(report.kept, 1);
    assert!(target.path().join("a/1.mp3").exists());
    assert!(!target.path().join("c").exists());
}

#[test]
fn sync_never_copies_what_prune_would_keep_twice() {
    // A file is never both copied and deleted within one sync+prune cycle:
    // everything the playlist lists is kept by prune.
    let (src, prefix) = source_tree(&[("a/1.mp3", b"one")]);
    let target = TempDir::new().unwrap();

    let playlist = Playlist::from_entries(vec![entry(&src.path().join("a/1.mp3"))]);
    let config = SyncConfig {
        source_prefix: prefix,
        target_root: target.path().to_path_buf(),
        quick: false,
    };

    let report = engine::run(&playlist, &config).expect("sync");
    assert_eq!(report.copied(), 1);

    let pruned = prune::prune(&playlist, target.path()).expect("prune");
    assert!(pruned.deleted.is_empty());
    assert!(target.path().join("a/1.mp3").exists());
}

#[test]
fn quick_pass_after_full_pass_is_all_skips() {
    let (src, prefix) = source_tree(&[("a/1.mp3", b"one"), ("b/2.mp3", b"two")]);
    let target = TempDir::new().unwrap();

    let playlist = Playlist::from_entries(vec![
        entry(&src.path().join("a/1.mp3")),
        entry(&src.path().join("b/2.mp3")),
    ]);
    let mut config = SyncConfig {
        source_prefix: prefix,
        target_root: target.path().to_path_buf(),
        quick: false,
    };
    engine::run(&playlist, &config).expect("full sync");

    config.quick = true;
    let second = engine::run(&playlist, &config).expect("quick sync");
    assert_eq!(second.copied(), 0);
    assert!(second.outcomes.iter().all(|o| matches!(
        o,
        EntryOutcome::Skipped {
            decision: CopyDecision::SkipQuickExists,
            ..
        }
    )));
}

#[test]
fn mixed_scope_playlist_copies_only_matching_entries() {
    let (src, prefix) = source_tree(&[("a/1.mp3", b"one")]);
    let target = TempDir::new().unwrap();

    let playlist = Playlist::from_entries(vec![
        entry(&src.path().join("a/1.mp3")),
        "/some/other/library/9.mp3".to_string(),
    ]);
    let config = SyncConfig {
        source_prefix: prefix,
        target_root: target.path().to_path_buf(),
        quick: false,
    };

    let report = engine::run(&playlist, &config).expect("sync");
    assert_eq!(report.copied(), 1);
    assert_eq!(report.out_of_scope(), 1);
    assert!(!target.path().join("some").exists());
}
