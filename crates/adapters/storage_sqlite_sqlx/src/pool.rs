//! `SQLite` connection pool setup.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

const SCHEMA: &str = include_str!("../schema/machines.sql");

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:machinehub.db` or `sqlite::memory:`).
    pub database_url: String,
    /// Create the `machines` table when it is missing.
    pub create_schema: bool,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Opens the connection pool, creating the database file if missing, and
    /// optionally bootstraps the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        let db = Database::connect(&self.database_url).await?;
        if self.create_schema {
            db.create_schema().await?;
        }
        Ok(db)
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the pool and verify that a connection can be established.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL is invalid or the connection fails.
    async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;
        tracing::debug!("database connection established");

        Ok(Self { pool })
    }

    /// Create the `machines` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the statement fails.
    pub async fn create_schema(&self) -> Result<(), StorageError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        tracing::info!("ensured machines table exists");
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
