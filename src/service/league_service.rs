//! League service: match listings and the live-score tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Match, MatchStatus, ScoreUpdate, draw_goal};
use crate::error::LeagueError;
use crate::persistence::MatchStore;

/// Business logic over the match table.
///
/// Owns its random source so that tests can substitute a deterministic
/// generator through [`LeagueService::with_rng`].
#[derive(Debug)]
pub struct LeagueService<R = StdRng> {
    store: MatchStore,
    rng: R,
}

impl LeagueService<StdRng> {
    /// Creates a service with an entropy-seeded generator.
    #[must_use]
    pub fn new(store: MatchStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }
}

impl<R: Rng> LeagueService<R> {
    /// Creates a service drawing goals from `rng`.
    #[must_use]
    pub fn with_rng(store: MatchStore, rng: R) -> Self {
        Self { store, rng }
    }

    /// Lists matches, optionally filtered by status, in kickoff order.
    ///
    /// # Errors
    ///
    /// Propagates [`MatchStore::list`] failures.
    pub async fn get_matches(
        &self,
        status: Option<MatchStatus>,
    ) -> Result<Vec<Match>, LeagueError> {
        self.store.list(status).await
    }

    /// Advances every live match by one tick.
    ///
    /// Each live match independently has a 40% chance of a goal, split
    /// evenly between home and away. Only matches that scored are written.
    /// Status is never changed. With no live matches this does nothing.
    ///
    /// Returns the updates that were persisted, in listing order.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if reading or writing
    /// fails. Updates persisted before the failure are kept.
    pub async fn simulate_live_updates(&mut self) -> Result<Vec<ScoreUpdate>, LeagueError> {
        let live = self.store.list_live().await?;
        if live.is_empty() {
            tracing::debug!("no live matches to advance");
            return Ok(Vec::new());
        }

        let mut updates = Vec::new();
        for m in &live {
            let Some(update) = draw_goal(&mut self.rng, m) else {
                continue;
            };
            self.store
                .update_score(update.match_id, update.home_score, update.away_score)
                .await?;
            tracing::info!(
                match_id = %update.match_id,
                scorer = ?update.scorer,
                home = %m.home_team,
                away = %m.away_team,
                home_score = update.home_score,
                away_score = update.away_score,
                "goal"
            );
            updates.push(update);
        }

        tracing::debug!(live = live.len(), goals = updates.len(), "tick complete");
        Ok(updates)
    }
}
