//! Sync pass orchestration.
//!
//! One pass walks the playlist in order; each entry reaches exactly one
//! terminal outcome and is never revisited:
//!
//! ```text
//! Pending → OutOfScope
//!         → Copy → Copied | CopyFailed
//!         → Skipped(SkipIdentical | SkipTargetNewer | SkipQuickExists)
//! ```
//!
//! Only the up-front target-directory check aborts the pass; every
//! per-file failure is logged and the pass moves on.

use std::path::PathBuf;

use tunesync_core::{Playlist, SyncConfig};

use crate::copy::copy_file;
use crate::decide::{decide, CopyDecision};
use crate::error::SyncError;
use crate::index::TargetIndex;
use crate::rewrite::{in_scope, target_path_for};

/// Terminal state of one playlist entry within a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Entry does not start with the configured source prefix; no file
    /// operation occurred.
    OutOfScope { source: String },
    /// Copied to the target path.
    Copied { source: String, target: PathBuf },
    /// Copy was attempted and failed; the pass continued.
    CopyFailed {
        source: String,
        target: PathBuf,
        reason: String,
    },
    /// Skipped per the copy policy.
    Skipped {
        target: PathBuf,
        decision: CopyDecision,
    },
}

/// Summary of one sync pass, in playlist order.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<EntryOutcome>,
}

impl SyncReport {
    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Copied { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::CopyFailed { .. }))
    }

    pub fn out_of_scope(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::OutOfScope { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, EntryOutcome::Skipped { .. }))
    }

    fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Run a sync pass over the full playlist.
pub fn run(playlist: &Playlist, config: &SyncConfig) -> Result<SyncReport, SyncError> {
    run_range(playlist, config, 0, playlist.len())
}

/// Run a sync pass over `playlist[first..last]`.
///
/// `last < first` selects the full list; bounds beyond the entry count are
/// clamped. Fails with [`SyncError::TargetMissing`] — before touching any
/// file — when the target root is absent or not a directory.
pub fn run_range(
    playlist: &Playlist,
    config: &SyncConfig,
    first: usize,
    last: usize,
) -> Result<SyncReport, SyncError> {
    if !config.target_root.is_dir() {
        return Err(SyncError::TargetMissing {
            path: config.target_root.clone(),
        });
    }

    let (first, last) = if last < first {
        (0, playlist.len())
    } else {
        (first.min(playlist.len()), last.min(playlist.len()))
    };

    // Quick mode snapshots the target tree once, up front. Files copied
    // later in this same pass are not visible through the snapshot.
    let index = if config.quick {
        Some(TargetIndex::scan(&config.target_root)?)
    } else {
        None
    };

    let mut report = SyncReport::default();
    for source in &playlist.entries()[first..last] {
        report.outcomes.push(process_entry(source, config, index.as_ref()));
    }

    tracing::info!(
        "sync pass done: {} copied, {} skipped, {} out of scope, {} failed",
        report.copied(),
        report.skipped(),
        report.out_of_scope(),
        report.failed()
    );
    Ok(report)
}

fn process_entry(source: &str, config: &SyncConfig, index: Option<&TargetIndex>) -> EntryOutcome {
    if !in_scope(source, &config.source_prefix) {
        tracing::info!(
            "skipping {source}: not under source prefix {}",
            config.source_prefix
        );
        return EntryOutcome::OutOfScope {
            source: source.to_string(),
        };
    }

    let target = target_path_for(source, &config.source_prefix, &config.target_root);
    let decision = match decide(source.as_ref(), &target, config.quick, index) {
        Ok(d) => d,
        Err(e) => {
            tracing::warn!("could not compare {source}: {e}");
            return EntryOutcome::CopyFailed {
                source: source.to_string(),
                target,
                reason: e.to_string(),
            };
        }
    };

    match decision {
        CopyDecision::Copy => match copy_file(source.as_ref(), &target) {
            Ok(()) => {
                tracing::info!("copied {source} -> {}", target.display());
                EntryOutcome::Copied {
                    source: source.to_string(),
                    target,
                }
            }
            Err(e) => {
                tracing::warn!("copy failed for {source}: {e}");
                EntryOutcome::CopyFailed {
                    source: source.to_string(),
                    target,
                    reason: e.to_string(),
                }
            }
        },
        skip => {
            tracing::debug!("skipping {source}: {skip:?}");
            EntryOutcome::Skipped {
                target,
                decision: skip,
            }
        }
    }
}
