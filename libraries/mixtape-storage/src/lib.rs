//! Mixtape Storage
//!
//! `SQLite` persistence for Mixtape users, playlists and songs.
//!
//! # Architecture
//!
//! - **Session**: one explicitly passed handle over the database file, with
//!   units of work that commit or roll back as a whole
//! - **Vertical Slicing**: each entity owns its own queries (`users`,
//!   `playlists`, `songs`)
//! - **Catalog**: `LocalCatalog` implements every front-end operation on top
//!   of the slices, one unit of work per write
//! - **Cascades**: the schema removes playlists and songs with their owner
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_core::Catalog;
//! use mixtape_storage::{LocalCatalog, Session};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let session = Session::open("sqlite://music_app.db").await?;
//! let catalog = LocalCatalog::new(session);
//!
//! catalog.seed_sample_data().await?;
//! let hits = catalog.search_songs("queen").await?;
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod session;

// Vertical slices
pub mod playlists;
pub mod seed;
pub mod songs;
pub mod users;

pub use catalog::LocalCatalog;
pub use error::StorageError;
pub use session::{Session, UnitOfWork};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed schema scripts into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create tables, constraints and indexes if they are absent
///
/// Safe to call on every start-up; an already-initialized database is left
/// untouched.
///
/// # Errors
///
/// Returns an error if the schema scripts fail to run
pub async fn initialize_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    MIGRATOR.run(pool).await?;
    tracing::debug!("Schema initialized");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// Foreign key enforcement is switched on for every connection so that
/// deletes cascade.
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://music_app.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
