//! ID types for Mixtape entities
//!
//! All identifiers are `SQLite` rowids assigned by the store.

/// User identifier
pub type UserId = i64;

/// Playlist identifier
pub type PlaylistId = i64;

/// Song identifier
pub type SongId = i64;
