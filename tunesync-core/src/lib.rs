//! Tunesync core library — domain types, playlist loading, errors.
//!
//! Public API surface:
//! - [`types`] — [`Playlist`] and [`SyncConfig`]
//! - [`playlist`] — load / source-prefix guess
//! - [`error`] — [`PlaylistError`]

pub mod error;
pub mod playlist;
pub mod types;

pub use error::PlaylistError;
pub use playlist::guess_source_prefix;
pub use types::{Playlist, SyncConfig};
