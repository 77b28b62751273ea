//! Match entity with display helpers.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::{MatchId, MatchStatus};

/// Storage format of the `matches.kickoff` column.
pub const KICKOFF_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single fixture between two teams.
///
/// Built from a validated storage row; see
/// [`crate::persistence::models::MatchRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Stable row identifier.
    pub id: MatchId,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Local kickoff date and time (no timezone).
    pub kickoff: NaiveDateTime,
    /// Lifecycle state.
    pub status: MatchStatus,
    /// Goals scored by the home side.
    pub home_score: u32,
    /// Goals scored by the away side.
    pub away_score: u32,
}

impl Match {
    /// Kickoff date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_str(&self) -> String {
        self.kickoff.format("%Y-%m-%d").to_string()
    }

    /// Kickoff time as `HH:MM`.
    #[must_use]
    pub fn time_str(&self) -> String {
        self.kickoff.format("%H:%M").to_string()
    }

    /// Current score, or `None` when the status has no meaningful score.
    #[must_use]
    pub const fn score(&self) -> Option<(u32, u32)> {
        if self.status.shows_score() {
            Some((self.home_score, self.away_score))
        } else {
            None
        }
    }

    /// Score as shown in tables: `"2 - 1"`, or `"-"` when absent.
    #[must_use]
    pub fn score_str(&self) -> String {
        match self.score() {
            Some((home, away)) => format!("{home} - {away}"),
            None => "-".to_string(),
        }
    }

    /// Sum of both scores.
    #[must_use]
    pub const fn total_goals(&self) -> u32 {
        self.home_score.saturating_add(self.away_score)
    }
}
