//! SQLite-backed match table access.

use sqlx::Connection;

use super::database::Database;
use super::models::MatchRow;
use crate::domain::{Match, MatchId, MatchStatus};
use crate::error::LeagueError;

const LIST_ALL: &str = "SELECT id, home_team, away_team, kickoff, status, home_score, away_score \
     FROM matches ORDER BY kickoff ASC, id ASC";

const LIST_BY_STATUS: &str = "SELECT id, home_team, away_team, kickoff, status, home_score, away_score \
     FROM matches WHERE status = ? ORDER BY kickoff ASC, id ASC";

/// Read and score-update access to the `matches` table.
///
/// Holds no open connection between calls.
#[derive(Debug, Clone)]
pub struct MatchStore {
    db: Database,
}

impl MatchStore {
    /// Creates a store over the given database.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Lists matches ordered by kickoff ascending, ties broken by id.
    ///
    /// With `status` set, only matches in that state are returned. An empty
    /// vector means nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the database cannot be
    /// read, or [`LeagueError::DataIntegrity`] if a row fails validation.
    pub async fn list(&self, status: Option<MatchStatus>) -> Result<Vec<Match>, LeagueError> {
        let mut conn = self.db.connect().await?;

        let rows = if let Some(status) = status {
            sqlx::query_as::<_, MatchRow>(LIST_BY_STATUS)
                .bind(status.as_str())
                .fetch_all(&mut conn)
                .await
        } else {
            sqlx::query_as::<_, MatchRow>(LIST_ALL)
                .fetch_all(&mut conn)
                .await
        }?;
        conn.close().await?;

        let matches = rows
            .into_iter()
            .map(Match::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(status = ?status, count = matches.len(), "listed matches");
        Ok(matches)
    }

    /// Lists matches currently in progress.
    ///
    /// # Errors
    ///
    /// Same as [`MatchStore::list`].
    pub async fn list_live(&self) -> Result<Vec<Match>, LeagueError> {
        self.list(Some(MatchStatus::Live)).await
    }

    /// Overwrites both scores of one match.
    ///
    /// An unknown id is not an error; the statement simply affects no rows.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the write fails.
    pub async fn update_score(
        &self,
        id: MatchId,
        home_score: u32,
        away_score: u32,
    ) -> Result<(), LeagueError> {
        let mut conn = self.db.connect().await?;

        let result = sqlx::query("UPDATE matches SET home_score = ?, away_score = ? WHERE id = ?")
            .bind(home_score)
            .bind(away_score)
            .bind(id.get())
            .execute(&mut conn)
            .await?;
        conn.close().await?;

        if result.rows_affected() == 0 {
            tracing::debug!(match_id = %id, "score update matched no row");
        }
        Ok(())
    }
}
