//! SQLite handle factory and schema bootstrap.
//!
//! [`Database`] holds connection options only. Every store operation opens a
//! fresh [`SqliteConnection`], uses it for one statement, and closes it.
//! Early returns drop the connection, which also releases the file handle.

use std::str::FromStr;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use super::seed;
use crate::error::LeagueError;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Connection settings for the league database.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Parses a `sqlite://` URL.
    ///
    /// The file is never created by store operations; a missing file makes
    /// them fail with [`LeagueError::StorageUnavailable`]. Use
    /// [`Database::ensure_initialized`] to create and seed it.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::InvalidConfig`] if the URL cannot be parsed.
    pub fn from_url(url: &str) -> Result<Self, LeagueError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| LeagueError::InvalidConfig(format!("DATABASE_URL {url:?}: {e}")))?
            .create_if_missing(false)
            .disable_statement_logging();
        Ok(Self { options })
    }

    /// Opens a new connection for a single operation.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the file is missing,
    /// unreadable, or not a database.
    pub async fn connect(&self) -> Result<SqliteConnection, LeagueError> {
        SqliteConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "failed to open league database");
                LeagueError::StorageUnavailable(e.to_string())
            })
    }

    /// Creates the database file if needed, applies migrations, and seeds
    /// the fixture into empty tables. Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the file cannot be
    /// created or opened, and [`LeagueError::Bootstrap`] if migrations or
    /// seeding fail.
    pub async fn ensure_initialized(&self) -> Result<(), LeagueError> {
        let options = self.options.clone().create_if_missing(true);
        let mut conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| LeagueError::StorageUnavailable(e.to_string()))?;

        MIGRATOR
            .run(&mut conn)
            .await
            .map_err(|e| LeagueError::Bootstrap(format!("migration failed: {e}")))?;

        let seeded = seed::seed_if_empty(&mut conn).await?;
        conn.close().await?;

        tracing::info!(
            accounts = seeded.accounts,
            matches = seeded.matches,
            "league database ready"
        );
        Ok(())
    }
}
