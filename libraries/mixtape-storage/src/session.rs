//! Persistence session and unit of work

use crate::error::{Result, StorageError};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, SqliteConnection, Transaction};
use std::str::FromStr;

/// Handle over a single `SQLite` database file
///
/// Constructed once at start-up and passed to whatever needs it. Cloning is
/// cheap and shares the underlying pool.
#[derive(Clone, Debug)]
pub struct Session {
    pool: SqlitePool,
}

impl Session {
    /// Open (creating if missing) the database and initialize its schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be
    /// created
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::create_pool(database_url)
            .await
            .map_err(|e| StorageError::Connection(format!("{database_url}: {e}")))?;

        crate::initialize_schema(&pool).await?;

        tracing::info!("Opened database {}", database_url);
        Ok(Self { pool })
    }

    /// Open a private in-memory database with the schema applied
    ///
    /// Uses a single long-lived connection, since every `SQLite` memory
    /// connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        crate::initialize_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check out a connection for read-only work
    ///
    /// # Errors
    ///
    /// Returns an error if no connection can be acquired
    pub async fn connection(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    /// Start a unit of work
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started
    pub async fn begin(&self) -> Result<UnitOfWork> {
        let tx = self.pool.begin().await?;
        Ok(UnitOfWork { tx })
    }
}

/// A set of writes committed or rolled back together
///
/// Dropping a unit of work without committing discards its writes.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl UnitOfWork {
    /// Connection carrying the pending writes
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Durably apply all pending writes
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails; nothing is applied in that case
    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await.map_err(StorageError::from)
    }

    /// Discard all pending writes
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback statement fails
    pub async fn rollback(self) -> Result<()> {
        self.tx.rollback().await.map_err(StorageError::from)
    }
}
