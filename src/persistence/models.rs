//! Database rows and their validation into domain types.

use chrono::NaiveDateTime;

use crate::domain::{Account, KICKOFF_FORMAT, Match, MatchId, MatchStatus};
use crate::error::LeagueError;

/// A raw row from the `matches` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchRow {
    /// Row id.
    pub id: i64,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Kickoff as `YYYY-MM-DD HH:MM` text.
    pub kickoff: String,
    /// Status text, expected to be `played`, `live` or `upcoming`.
    pub status: String,
    /// Home score.
    pub home_score: i64,
    /// Away score.
    pub away_score: i64,
}

impl TryFrom<MatchRow> for Match {
    type Error = LeagueError;

    fn try_from(row: MatchRow) -> Result<Self, Self::Error> {
        let match_id = MatchId::new(row.id);
        let integrity = |reason: String| LeagueError::DataIntegrity { match_id, reason };

        let kickoff = NaiveDateTime::parse_from_str(&row.kickoff, KICKOFF_FORMAT)
            .map_err(|e| integrity(format!("unparseable kickoff {:?}: {e}", row.kickoff)))?;
        // Listings sort on the raw text, so only zero-padded kickoffs order correctly.
        if kickoff.format(KICKOFF_FORMAT).to_string() != row.kickoff {
            return Err(integrity(format!("non-canonical kickoff {:?}", row.kickoff)));
        }
        let status: MatchStatus = row.status.parse().map_err(|e| integrity(format!("{e}")))?;
        let home_score = u32::try_from(row.home_score)
            .map_err(|_| integrity(format!("invalid home score {}", row.home_score)))?;
        let away_score = u32::try_from(row.away_score)
            .map_err(|_| integrity(format!("invalid away score {}", row.away_score)))?;

        Ok(Self {
            id: match_id,
            home_team: row.home_team,
            away_team: row.away_team,
            kickoff,
            status,
            home_score,
            away_score,
        })
    }
}

/// The identity columns of an `accounts` row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccountRow {
    /// Row id.
    pub id: i64,
    /// Login name.
    pub username: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
        }
    }
}
