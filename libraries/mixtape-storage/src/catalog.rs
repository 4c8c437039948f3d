use crate::session::{Session, UnitOfWork};
use crate::{playlists, seed, songs, users};
use async_trait::async_trait;
use mixtape_core::{
    error::Result, Catalog, CreatePlaylist, CreateSong, CreateUser, MixtapeError, Playlist,
    PlaylistId, PlaylistSummary, Song, SongId, SongMatch, User, UserId, UserSummary,
};

/// Catalog backed by a local `SQLite` session
///
/// Each write runs in its own unit of work, committed on success and rolled
/// back before any error is returned.
#[derive(Clone, Debug)]
pub struct LocalCatalog {
    session: Session,
}

impl LocalCatalog {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Commit on success, roll back on failure, surfacing the operation error
    async fn finish<T>(uow: UnitOfWork, outcome: Result<T>) -> Result<T> {
        match outcome {
            Ok(value) => {
                uow.commit().await?;
                Ok(value)
            }
            Err(err) => {
                tracing::warn!("Rolling back: {}", err);
                if let Err(rollback_err) = uow.rollback().await {
                    tracing::error!("Rollback failed: {}", rollback_err);
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl Catalog for LocalCatalog {
    // Users
    async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let mut conn = self.session.connection().await?;
        users::get_all_with_counts(&mut conn).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let mut conn = self.session.connection().await?;
        users::get_by_id(&mut conn, id).await
    }

    async fn create_user(&self, name: &str, email: &str) -> Result<User> {
        let draft = CreateUser::new(name, email)?;

        let mut uow = self.session.begin().await?;
        let outcome = users::create(uow.conn(), &draft).await;
        let user = Self::finish(uow, outcome).await?;

        tracing::info!("User '{}' created", user.name);
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User> {
        let mut uow = self.session.begin().await?;
        let outcome: Result<User> = async {
            let user = users::get_by_id(uow.conn(), id)
                .await?
                .ok_or_else(|| MixtapeError::not_found("User", id))?;
            users::delete(uow.conn(), id).await?;
            Ok(user)
        }
        .await;
        let user = Self::finish(uow, outcome).await?;

        tracing::info!("Deleted user '{}' with all playlists and songs", user.name);
        Ok(user)
    }

    // Playlists
    async fn get_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>> {
        let mut conn = self.session.connection().await?;
        playlists::get_by_id(&mut conn, id).await
    }

    async fn create_playlist(
        &self,
        user_id: UserId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Playlist> {
        let mut uow = self.session.begin().await?;
        let outcome: Result<(User, Playlist)> = async {
            let owner = users::get_by_id(uow.conn(), user_id)
                .await?
                .ok_or_else(|| MixtapeError::not_found("User", user_id))?;
            let draft = CreatePlaylist::new(user_id, title, description)?;
            let playlist = playlists::create(uow.conn(), &draft).await?;
            Ok((owner, playlist))
        }
        .await;
        let (owner, playlist) = Self::finish(uow, outcome).await?;

        tracing::info!("Playlist '{}' created for {}", playlist.title, owner.name);
        Ok(playlist)
    }

    async fn list_playlists(&self, user_id: UserId) -> Result<Vec<PlaylistSummary>> {
        let mut conn = self.session.connection().await?;
        if users::get_by_id(&mut conn, user_id).await?.is_none() {
            return Err(MixtapeError::not_found("User", user_id));
        }
        playlists::get_user_playlists(&mut conn, user_id).await
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<Playlist> {
        let mut uow = self.session.begin().await?;
        let outcome: Result<Playlist> = async {
            let playlist = playlists::get_by_id(uow.conn(), id)
                .await?
                .ok_or_else(|| MixtapeError::not_found("Playlist", id))?;
            playlists::delete(uow.conn(), id).await?;
            Ok(playlist)
        }
        .await;
        let playlist = Self::finish(uow, outcome).await?;

        tracing::info!("Deleted playlist '{}' with all songs", playlist.title);
        Ok(playlist)
    }

    // Songs
    async fn add_song(
        &self,
        playlist_id: PlaylistId,
        title: &str,
        artist: &str,
        album: Option<&str>,
    ) -> Result<Song> {
        let mut uow = self.session.begin().await?;
        let outcome: Result<(Playlist, Song)> = async {
            let playlist = playlists::get_by_id(uow.conn(), playlist_id)
                .await?
                .ok_or_else(|| MixtapeError::not_found("Playlist", playlist_id))?;
            let draft = CreateSong::new(playlist_id, title, artist, album)?;
            let song = songs::create(uow.conn(), &draft).await?;
            Ok((playlist, song))
        }
        .await;
        let (playlist, song) = Self::finish(uow, outcome).await?;

        tracing::info!("Added {} to '{}'", song, playlist.title);
        Ok(song)
    }

    async fn list_songs(&self, playlist_id: PlaylistId) -> Result<Vec<Song>> {
        let mut conn = self.session.connection().await?;
        if playlists::get_by_id(&mut conn, playlist_id).await?.is_none() {
            return Err(MixtapeError::not_found("Playlist", playlist_id));
        }
        songs::get_by_playlist(&mut conn, playlist_id).await
    }

    async fn delete_song(&self, id: SongId) -> Result<Song> {
        let mut uow = self.session.begin().await?;
        let outcome: Result<Song> = async {
            let song = songs::get_by_id(uow.conn(), id)
                .await?
                .ok_or_else(|| MixtapeError::not_found("Song", id))?;
            songs::delete(uow.conn(), id).await?;
            Ok(song)
        }
        .await;
        let song = Self::finish(uow, outcome).await?;

        tracing::info!("Deleted {}", song);
        Ok(song)
    }

    async fn search_songs(&self, term: &str) -> Result<Vec<SongMatch>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(MixtapeError::validation("search term", "cannot be empty"));
        }

        let mut conn = self.session.connection().await?;
        let hits = songs::search(&mut conn, term).await?;

        tracing::debug!("Search for '{}' matched {} songs", term, hits.len());
        Ok(hits)
    }

    // Sample data
    async fn seed_sample_data(&self) -> Result<bool> {
        let mut uow = self.session.begin().await?;
        let outcome = seed::seed(uow.conn()).await;
        Self::finish(uow, outcome).await
    }
}
