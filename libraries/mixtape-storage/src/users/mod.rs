//! User queries

use chrono::{DateTime, Utc};
use mixtape_core::{error::Result, CreateUser, MixtapeError, User, UserId, UserSummary};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

fn user_from_row(row: &SqliteRow) -> Result<User> {
    let created_at: i64 = row.try_get("created_at")?;
    let created_at = DateTime::<Utc>::from_timestamp(created_at, 0).ok_or_else(|| {
        MixtapeError::Database(format!("invalid created_at timestamp: {created_at}"))
    })?;

    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at,
    })
}

/// Get all users ordered by name, with playlist and song counts
pub async fn get_all_with_counts(conn: &mut SqliteConnection) -> Result<Vec<UserSummary>> {
    let rows = sqlx::query(
        r#"
        SELECT
            u.id, u.name, u.email, u.created_at,
            (SELECT COUNT(*) FROM playlists p WHERE p.user_id = u.id) AS playlist_count,
            (SELECT COUNT(*)
               FROM songs s
               INNER JOIN playlists p ON s.playlist_id = p.id
              WHERE p.user_id = u.id) AS song_count
        FROM users u
        ORDER BY u.name, u.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|row| -> Result<UserSummary> {
            Ok(UserSummary {
                user: user_from_row(row)?,
                playlist_count: row.try_get("playlist_count")?,
                song_count: row.try_get("song_count")?,
            })
        })
        .collect()
}

/// Get user by ID
pub async fn get_by_id(conn: &mut SqliteConnection, id: UserId) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Find user by exact email
pub async fn find_by_email(conn: &mut SqliteConnection, email: &str) -> Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, email, created_at FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Count all users
pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&mut *conn)
        .await?;

    Ok(count)
}

/// Insert a validated user
///
/// The email is checked against existing users first; the UNIQUE constraint
/// reports the same validation error if the check is bypassed.
pub async fn create(conn: &mut SqliteConnection, user: &CreateUser) -> Result<User> {
    if find_by_email(conn, user.email()).await?.is_some() {
        return Err(already_registered(user.email()));
    }

    let result = sqlx::query("INSERT INTO users (name, email, created_at) VALUES (?, ?, ?)")
        .bind(user.name())
        .bind(user.email())
        .bind(Utc::now().timestamp())
        .execute(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                already_registered(user.email())
            }
            other => other.into(),
        })?;

    let id = result.last_insert_rowid();

    get_by_id(conn, id)
        .await?
        .ok_or_else(|| MixtapeError::storage("Failed to retrieve created user"))
}

/// Delete user by ID; playlists and songs go with it
///
/// Returns whether a row was removed.
pub async fn delete(conn: &mut SqliteConnection, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}

fn already_registered(email: &str) -> MixtapeError {
    MixtapeError::validation("email", format!("'{email}' is already registered"))
}
