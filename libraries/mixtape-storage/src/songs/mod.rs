//! Song queries

use mixtape_core::{error::Result, CreateSong, MixtapeError, PlaylistId, Song, SongId, SongMatch};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

fn song_from_row(row: &SqliteRow) -> Result<Song> {
    Ok(Song {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        artist: row.try_get("artist")?,
        album: row.try_get("album")?,
        playlist_id: row.try_get("playlist_id")?,
    })
}

/// Get song by ID
pub async fn get_by_id(conn: &mut SqliteConnection, id: SongId) -> Result<Option<Song>> {
    let row = sqlx::query("SELECT id, title, artist, album, playlist_id FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(song_from_row).transpose()
}

/// Get the songs of a playlist in insertion order
pub async fn get_by_playlist(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, artist, album, playlist_id FROM songs WHERE playlist_id = ? ORDER BY id",
    )
    .bind(playlist_id)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter().map(song_from_row).collect()
}

/// Count all songs
pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

/// Count the songs of one playlist
pub async fn count_in_playlist(
    conn: &mut SqliteConnection,
    playlist_id: PlaylistId,
) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs WHERE playlist_id = ?")
        .bind(playlist_id)
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

/// Insert a validated song
///
/// The playlist must already exist.
pub async fn create(conn: &mut SqliteConnection, song: &CreateSong) -> Result<Song> {
    let result =
        sqlx::query("INSERT INTO songs (title, artist, album, playlist_id) VALUES (?, ?, ?, ?)")
            .bind(song.title())
            .bind(song.artist())
            .bind(song.album())
            .bind(song.playlist_id())
            .execute(&mut *conn)
            .await?;

    let id = result.last_insert_rowid();

    get_by_id(conn, id)
        .await?
        .ok_or_else(|| MixtapeError::storage("Failed to retrieve created song"))
}

/// Delete song by ID
///
/// Returns whether a row was removed.
pub async fn delete(conn: &mut SqliteConnection, id: SongId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Search title, artist and album for a substring
///
/// Matching is case-insensitive for ASCII (`SQLite` `LIKE`). A song matches
/// when any one of the three fields contains `term`; each song is returned
/// once, ordered by ID.
pub async fn search(conn: &mut SqliteConnection, term: &str) -> Result<Vec<SongMatch>> {
    let pattern = format!("%{}%", escape_like(term));

    let rows = sqlx::query(
        r#"
        SELECT
            s.id, s.title, s.artist, s.album, s.playlist_id,
            p.title AS playlist_title,
            u.name AS user_name
        FROM songs s
        INNER JOIN playlists p ON s.playlist_id = p.id
        INNER JOIN users u ON p.user_id = u.id
        WHERE s.title LIKE ? ESCAPE '\'
           OR s.artist LIKE ? ESCAPE '\'
           OR s.album LIKE ? ESCAPE '\'
        ORDER BY s.id
        "#,
    )
    .bind(&pattern)
    .bind(&pattern)
    .bind(&pattern)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|row| -> Result<SongMatch> {
            Ok(SongMatch {
                song: song_from_row(row)?,
                playlist_title: row.try_get("playlist_title")?,
                user_name: row.try_get("user_name")?,
            })
        })
        .collect()
}

/// Escape `LIKE` wildcards so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
