//! Playlist queries

use mixtape_core::{
    error::Result, CreatePlaylist, MixtapeError, Playlist, PlaylistId, PlaylistSummary, UserId,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

fn playlist_from_row(row: &SqliteRow) -> Result<Playlist> {
    Ok(Playlist {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        user_id: row.try_get("user_id")?,
    })
}

/// Get playlist by ID
pub async fn get_by_id(conn: &mut SqliteConnection, id: PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query("SELECT id, title, description, user_id FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(playlist_from_row).transpose()
}

/// Get a user's playlists with song counts, oldest first
pub async fn get_user_playlists(
    conn: &mut SqliteConnection,
    user_id: UserId,
) -> Result<Vec<PlaylistSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT
            p.id, p.title, p.description, p.user_id,
            (SELECT COUNT(*) FROM songs s WHERE s.playlist_id = p.id) AS song_count
        FROM playlists p
        WHERE p.user_id = ?
        ORDER BY p.id
        "#,
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|row| -> Result<PlaylistSummary> {
            Ok(PlaylistSummary {
                playlist: playlist_from_row(row)?,
                song_count: row.try_get("song_count")?,
            })
        })
        .collect()
}

/// Count all playlists
pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playlists")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

/// Insert a validated playlist
///
/// The owner must already exist.
pub async fn create(conn: &mut SqliteConnection, playlist: &CreatePlaylist) -> Result<Playlist> {
    let result =
        sqlx::query("INSERT INTO playlists (title, description, user_id) VALUES (?, ?, ?)")
            .bind(playlist.title())
            .bind(playlist.description())
            .bind(playlist.user_id())
            .execute(&mut *conn)
            .await?;

    let id = result.last_insert_rowid();

    get_by_id(conn, id)
        .await?
        .ok_or_else(|| MixtapeError::storage("Failed to retrieve created playlist"))
}

/// Delete playlist by ID; its songs go with it
///
/// Returns whether a row was removed.
pub async fn delete(conn: &mut SqliteConnection, id: PlaylistId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
