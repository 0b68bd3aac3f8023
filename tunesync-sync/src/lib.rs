//! # tunesync-sync
//!
//! Playlist-driven file synchronization and pruning.
//!
//! Call [`engine::run`] to copy every in-scope playlist entry into the
//! target tree, or [`prune::prune`] to delete target audio files the
//! playlist no longer references (plus directories emptied by deletion).

pub mod copy;
pub mod decide;
pub mod engine;
pub mod error;
pub mod index;
pub mod prune;
pub mod rewrite;

pub use decide::CopyDecision;
pub use engine::{run, run_range, EntryOutcome, SyncReport};
pub use error::SyncError;
pub use index::TargetIndex;
pub use prune::{prune, PruneReport};
