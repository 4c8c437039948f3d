//! Operation surface for front ends

use crate::error::Result;
use crate::types::{
    Playlist, PlaylistId, PlaylistSummary, Song, SongId, SongMatch, User, UserId, UserSummary,
};
use async_trait::async_trait;

/// Catalog of users, playlists and songs
///
/// Every method is a single validated use case. Write operations either
/// commit all of their changes or none of them; inputs are plain values and
/// validation happens behind this boundary.
#[async_trait]
pub trait Catalog: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// List all users ordered by name, with playlist and song counts
    async fn list_users(&self) -> Result<Vec<UserSummary>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Register a new user
    async fn create_user(&self, name: &str, email: &str) -> Result<User>;

    /// Delete a user together with their playlists and songs
    async fn delete_user(&self, id: UserId) -> Result<User>;

    // ========================================================================
    // Playlists
    // ========================================================================

    /// Get playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>>;

    /// Create a playlist owned by `user_id`
    async fn create_playlist(
        &self,
        user_id: UserId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Playlist>;

    /// List a user's playlists with song counts
    async fn list_playlists(&self, user_id: UserId) -> Result<Vec<PlaylistSummary>>;

    /// Delete a playlist together with its songs
    async fn delete_playlist(&self, id: PlaylistId) -> Result<Playlist>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Add a song to a playlist
    async fn add_song(
        &self,
        playlist_id: PlaylistId,
        title: &str,
        artist: &str,
        album: Option<&str>,
    ) -> Result<Song>;

    /// List the songs of a playlist in insertion order
    async fn list_songs(&self, playlist_id: PlaylistId) -> Result<Vec<Song>>;

    /// Delete a song, returning it for confirmation
    async fn delete_song(&self, id: SongId) -> Result<Song>;

    /// Case-insensitive substring search over title, artist and album
    async fn search_songs(&self, term: &str) -> Result<Vec<SongMatch>>;

    // ========================================================================
    // Sample data
    // ========================================================================

    /// Populate an empty catalog with sample data
    ///
    /// Returns `false` without writing anything if any user already exists.
    async fn seed_sample_data(&self) -> Result<bool>;
}
