//! One simulated tick of a live match.
//!
//! The draw is separated from persistence so that the probabilities can be
//! exercised with any [`rand::Rng`], including deterministic ones.

use rand::Rng;
use serde::Serialize;

use super::{Match, MatchId};

/// Probability that a live match sees a goal during one tick.
pub const GOAL_PROBABILITY: f64 = 0.4;

/// Probability that a goal, once drawn, goes to the home side.
pub const HOME_GOAL_PROBABILITY: f64 = 0.5;

/// Which side of a fixture scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The home team.
    Home,
    /// The away team.
    Away,
}

/// Score change produced by a tick for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreUpdate {
    /// Match that changed.
    pub match_id: MatchId,
    /// Side that scored.
    pub scorer: Side,
    /// Home score after the goal.
    pub home_score: u32,
    /// Away score after the goal.
    pub away_score: u32,
}

/// Draws the outcome of one tick for `m`.
///
/// Returns `None` when no goal happens. Otherwise exactly one side is
/// incremented by one. Status is not inspected; the caller decides which
/// matches are live.
pub fn draw_goal<R: Rng + ?Sized>(rng: &mut R, m: &Match) -> Option<ScoreUpdate> {
    if !rng.gen_bool(GOAL_PROBABILITY) {
        return None;
    }

    let (scorer, home_score, away_score) = if rng.gen_bool(HOME_GOAL_PROBABILITY) {
        (Side::Home, m.home_score.saturating_add(1), m.away_score)
    } else {
        (Side::Away, m.home_score, m.away_score.saturating_add(1))
    };

    Some(ScoreUpdate {
        match_id: m.id,
        scorer,
        home_score,
        away_score,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{KICKOFF_FORMAT, MatchStatus};
    use chrono::NaiveDateTime;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn live_match(home: u32, away: u32) -> Match {
        let Ok(kickoff) = NaiveDateTime::parse_from_str("2025-01-12 21:00", KICKOFF_FORMAT) else {
            panic!("valid kickoff");
        };
        Match {
            id: MatchId::new(3),
            home_team: "Roma".to_string(),
            away_team: "Lazio".to_string(),
            kickoff,
            status: MatchStatus::Live,
            home_score: home,
            away_score: away,
        }
    }

    // A generator that always yields zero passes every Bernoulli trial.
    fn always_yes() -> StepRng {
        StepRng::new(0, 0)
    }

    fn always_no() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn always_event_always_home() {
        let update = draw_goal(&mut always_yes(), &live_match(1, 0));
        assert_eq!(
            update,
            Some(ScoreUpdate {
                match_id: MatchId::new(3),
                scorer: Side::Home,
                home_score: 2,
                away_score: 0,
            })
        );
    }

    #[test]
    fn no_event_means_no_update() {
        assert_eq!(draw_goal(&mut always_no(), &live_match(2, 2)), None);
    }

    #[test]
    fn each_goal_adds_exactly_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = live_match(0, 0);
        for _ in 0..500 {
            let before = m.total_goals();
            if let Some(update) = draw_goal(&mut rng, &m) {
                assert!(update.home_score >= m.home_score);
                assert!(update.away_score >= m.away_score);
                m.home_score = update.home_score;
                m.away_score = update.away_score;
                assert_eq!(m.total_goals(), before + 1);
            }
        }
    }

    #[test]
    fn goal_rate_is_roughly_forty_percent() {
        let mut rng = StdRng::seed_from_u64(2025);
        let m = live_match(0, 0);
        let trials = 10_000;
        let goals = (0..trials).filter(|_| draw_goal(&mut rng, &m).is_some()).count();
        #[allow(clippy::cast_precision_loss)]
        let rate = goals as f64 / f64::from(trials);
        assert!((0.37..0.43).contains(&rate), "rate was {rate}");
    }

    #[test]
    fn both_sides_score_over_many_draws() {
        let mut rng = StdRng::seed_from_u64(11);
        let m = live_match(0, 0);
        let scorers: Vec<Side> = (0..200)
            .filter_map(|_| draw_goal(&mut rng, &m))
            .map(|u| u.scorer)
            .collect();
        assert!(scorers.contains(&Side::Home));
        assert!(scorers.contains(&Side::Away));
    }
}
