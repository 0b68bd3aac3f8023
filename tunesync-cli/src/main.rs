//! tunesync — copy playlist music to a target tree, prune what fell off.
//!
//! # Usage
//!
//! ```text
//! tunesync [--infile playlist.m3u] [--target ./Copiedfiles/]
//!          [--source /music/] [--quick] [--delete] [--copy=false]
//! ```
//!
//! Exit codes: 0 clean, 1 completed with per-file warnings, 2 fatal at
//! startup (unreadable playlist).

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use colored::Colorize;

use tunesync_core::{guess_source_prefix, Playlist, SyncConfig};
use tunesync_sync::{engine, prune, CopyDecision, EntryOutcome, SyncError};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "tunesync",
    version,
    about = "Copy the files of a playlist into a target directory tree",
    long_about = None,
)]
struct Cli {
    /// Playlist file to read (one path per line, '#' lines are comments).
    #[arg(long, default_value = "playlist.m3u")]
    infile: PathBuf,

    /// Target root directory files are copied into.
    #[arg(long, default_value = "./Copiedfiles/")]
    target: String,

    /// Source prefix to strip from playlist entries; defaults to the
    /// longest common prefix of all entries.
    #[arg(long)]
    source: Option<String>,

    /// Skip any file whose target path already exists, without comparing
    /// content or timestamps.
    #[arg(long, default_value_t = false)]
    quick: bool,

    /// Delete target audio files absent from the playlist afterwards.
    #[arg(long, default_value_t = false)]
    delete: bool,

    /// Run the copy pass (disable with --copy=false to only prune).
    #[arg(long, default_value_t = true, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    copy: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // Playlist failures are fatal: nothing has been touched yet.
    let playlist = match Playlist::load(&cli.infile)
        .with_context(|| format!("cannot read playlist {}", cli.infile.display()))
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} {e:#}", "fatal:".red().bold());
            return ExitCode::from(2);
        }
    };

    let source_prefix = cli
        .source
        .clone()
        .or_else(|| guess_source_prefix(&playlist))
        .unwrap_or_default();
    let config = SyncConfig {
        source_prefix,
        target_root: PathBuf::from(normalize_target(&cli.target)),
        quick: cli.quick,
    };

    println!(
        "{} {} entries, source prefix '{}', target {}",
        "tunesync:".bold(),
        playlist.len(),
        config.source_prefix,
        config.target_root.display()
    );

    let mut warnings = 0usize;

    if cli.copy {
        match engine::run(&playlist, &config) {
            Ok(report) => {
                warnings += print_sync_report(&report);
            }
            Err(SyncError::TargetMissing { path }) => {
                // Aborts only the copy pass; prune (if requested) would
                // fail the same precondition implicitly via its own walk.
                eprintln!(
                    "{} target directory {} does not exist; copy pass skipped",
                    "error:".red().bold(),
                    path.display()
                );
                warnings += 1;
            }
            Err(e) => {
                eprintln!("{} {e}", "error:".red().bold());
                warnings += 1;
            }
        }
    }

    if cli.delete {
        match prune::prune(&playlist, &config.target_root) {
            Ok(report) => print_prune_report(&report),
            Err(e) => {
                eprintln!("{} prune aborted: {e}", "error:".red().bold());
                warnings += 1;
            }
        }
    }

    if warnings > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Target roots always end with a separator so prefix-stripped remainders
/// concatenate unambiguously.
fn normalize_target(target: &str) -> String {
    if target.ends_with('/') || target.ends_with('\\') {
        target.to_string()
    } else {
        format!("{target}/")
    }
}

fn print_sync_report(report: &engine::SyncReport) -> usize {
    for outcome in &report.outcomes {
        match outcome {
            EntryOutcome::Copied { target, .. } => {
                println!("  {}  {}", "+".green(), target.display());
            }
            EntryOutcome::Skipped { target, decision } => {
                let why = match decision {
                    CopyDecision::SkipIdentical => "identical",
                    CopyDecision::SkipTargetNewer => "target newer",
                    CopyDecision::SkipQuickExists => "exists",
                    CopyDecision::Copy => unreachable!("copy is not a skip"),
                };
                println!("  {}  {} ({why})", "·".dimmed(), target.display());
            }
            EntryOutcome::OutOfScope { source } => {
                println!("  {}  {} (outside source prefix)", "!".yellow(), source);
            }
            EntryOutcome::CopyFailed { source, reason, .. } => {
                println!("  {}  {source}: {reason}", "x".red());
            }
        }
    }

    println!(
        "{} {} copied, {} skipped, {} out of scope, {} failed",
        "✓".green(),
        report.copied(),
        report.skipped(),
        report.out_of_scope(),
        report.failed()
    );
    report.failed() + report.out_of_scope()
}

fn print_prune_report(report: &prune::PruneReport) {
    for path in &report.deleted {
        println!("  {}  {}", "-".red(), path.display());
    }
    for dir in &report.removed_dirs {
        println!("  {}  {} (empty)", "-".red(), dir.display());
    }
    println!(
        "{} {} deleted, {} directories removed, {} kept",
        "✓".green(),
        report.deleted.len(),
        report.removed_dirs.len(),
        report.kept
    );
}
