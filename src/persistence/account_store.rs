//! SQLite-backed account lookup.

use sqlx::Connection;

use super::database::Database;
use super::models::AccountRow;
use crate::domain::Account;
use crate::error::LeagueError;

/// Read-only access to the `accounts` table.
#[derive(Debug, Clone)]
pub struct AccountStore {
    db: Database,
}

impl AccountStore {
    /// Creates a store over the given database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Finds the account whose username and credential both match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the database cannot be
    /// read.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        credential: &str,
    ) -> Result<Option<Account>, LeagueError> {
        let mut conn = self.db.connect().await?;

        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, username FROM accounts WHERE username = ? AND credential = ?",
        )
        .bind(username)
        .bind(credential)
        .fetch_optional(&mut conn)
        .await?;
        conn.close().await?;

        Ok(row.map(Account::from))
    }
}
