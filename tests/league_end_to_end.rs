//! End-to-end behaviour against a freshly seeded SQLite file.

#![allow(clippy::panic, clippy::indexing_slicing, missing_docs)]

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use league_tracker::domain::{Match, MatchId, MatchStatus, Side};
use league_tracker::error::LeagueError;
use league_tracker::persistence::seed::{DEMO_CREDENTIAL, DEMO_USERNAME};
use league_tracker::persistence::{AccountStore, Database, MatchStore};
use league_tracker::service::{AuthService, LeagueService};

/// Replays a fixed script of raw `u64` draws, then repeats the last one.
///
/// A draw of `0` passes any Bernoulli trial and `u64::MAX` fails it.
#[derive(Debug)]
struct ScriptedRng {
    script: VecDeque<u64>,
    last: u64,
}

impl ScriptedRng {
    fn new(script: &[u64]) -> Self {
        Self {
            script: script.iter().copied().collect(),
            last: u64::MAX,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        if let Some(v) = self.script.pop_front() {
            self.last = v;
        }
        self.last
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rngs::mock::StepRng::new(self.next_u64(), 0).fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

const YES: u64 = 0;
const NO: u64 = u64::MAX;

async fn seeded_database() -> (tempfile::TempDir, Database) {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let url = format!("sqlite://{}", dir.path().join("league.db").display());
    let Ok(db) = Database::from_url(&url) else {
        panic!("valid url");
    };
    let Ok(()) = db.ensure_initialized().await else {
        panic!("bootstrap failed");
    };
    (dir, db)
}

async fn list<R: rand::Rng>(league: &LeagueService<R>, status: Option<MatchStatus>) -> Vec<Match> {
    let Ok(matches) = league.get_matches(status).await else {
        panic!("listing failed");
    };
    matches
}

fn scores(matches: &[Match]) -> Vec<(u32, u32)> {
    matches.iter().map(|m| (m.home_score, m.away_score)).collect()
}

#[tokio::test]
async fn played_matches_come_back_in_kickoff_order_with_seeded_scores() {
    let (_dir, db) = seeded_database().await;
    let league = LeagueService::new(MatchStore::new(db));

    let played = list(&league, Some(MatchStatus::Played)).await;
    let fixtures: Vec<(&str, &str, (u32, u32))> = played
        .iter()
        .map(|m| (m.home_team.as_str(), m.away_team.as_str(), (m.home_score, m.away_score)))
        .collect();
    assert_eq!(
        fixtures,
        vec![("Inter Milan", "AC Milan", (2, 1)), ("Juventus", "Napoli", (1, 1))]
    );
    assert_eq!(played[0].date_str(), "2025-01-10");
    assert_eq!(played[1].time_str(), "18:00");
}

#[tokio::test]
async fn every_filter_is_sorted_and_well_formed() {
    let (_dir, db) = seeded_database().await;
    let league = LeagueService::new(MatchStore::new(db));

    let filters = [
        None,
        Some(MatchStatus::Played),
        Some(MatchStatus::Live),
        Some(MatchStatus::Upcoming),
    ];
    for filter in filters {
        let matches = list(&league, filter).await;
        assert!(!matches.is_empty());
        assert!(matches.windows(2).all(|w| w[0].kickoff <= w[1].kickoff));
        assert!(matches.iter().all(|m| MatchStatus::ALL.contains(&m.status)));
        if let Some(status) = filter {
            assert!(matches.iter().all(|m| m.status == status));
        }
    }
}

#[tokio::test]
async fn upcoming_scores_are_zero_and_absent() {
    let (_dir, db) = seeded_database().await;
    let league = LeagueService::new(MatchStore::new(db));

    let upcoming = list(&league, Some(MatchStatus::Upcoming)).await;
    assert_eq!(upcoming.len(), 2);
    for m in &upcoming {
        assert_eq!((m.home_score, m.away_score), (0, 0));
        assert_eq!(m.score(), None);
        assert_eq!(m.score_str(), "-");
    }
}

#[tokio::test]
async fn zero_ticks_leave_scores_alone() {
    let (_dir, db) = seeded_database().await;
    let league = LeagueService::new(MatchStore::new(db));

    let first = list(&league, None).await;
    let second = list(&league, None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn tick_without_live_matches_is_a_no_op() {
    let (_dir, db) = seeded_database().await;
    let Ok(mut conn) = db.connect().await else {
        panic!("connect failed");
    };
    let Ok(_) = sqlx::query("UPDATE matches SET status = 'played' WHERE status = 'live'")
        .execute(&mut conn)
        .await
    else {
        panic!("fixture edit failed");
    };
    drop(conn);

    let mut league = LeagueService::with_rng(MatchStore::new(db), ScriptedRng::new(&[YES]));
    let before = list(&league, None).await;
    let Ok(updates) = league.simulate_live_updates().await else {
        panic!("tick failed");
    };
    assert!(updates.is_empty());
    assert_eq!(before, list(&league, None).await);
}

#[tokio::test]
async fn always_event_always_home_gives_one_nil_and_two_nil() {
    let (_dir, db) = seeded_database().await;
    let mut league = LeagueService::with_rng(MatchStore::new(db), ScriptedRng::new(&[YES]));

    assert_eq!(scores(&list(&league, Some(MatchStatus::Live)).await), vec![(0, 0), (1, 0)]);
    let Ok(_) = league.simulate_live_updates().await else {
        panic!("tick failed");
    };
    assert_eq!(scores(&list(&league, Some(MatchStatus::Live)).await), vec![(1, 0), (2, 0)]);
}

#[tokio::test]
async fn scripted_draws_pick_matches_and_sides_independently() {
    let (_dir, db) = seeded_database().await;
    // Roma-Lazio: goal, away. Atalanta-Fiorentina: no goal.
    let script = [YES, NO, NO];
    let mut league = LeagueService::with_rng(MatchStore::new(db), ScriptedRng::new(&script));

    let Ok(updates) = league.simulate_live_updates().await else {
        panic!("tick failed");
    };
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].match_id, MatchId::new(3));
    assert_eq!(updates[0].scorer, Side::Away);
    assert_eq!(scores(&list(&league, Some(MatchStatus::Live)).await), vec![(0, 1), (1, 0)]);
}

#[tokio::test]
async fn scores_grow_by_at_most_one_per_tick() {
    let (_dir, db) = seeded_database().await;
    let mut league = LeagueService::with_rng(MatchStore::new(db), StdRng::seed_from_u64(90));

    let mut previous = list(&league, Some(MatchStatus::Live)).await;
    for _ in 0..25 {
        let Ok(_) = league.simulate_live_updates().await else {
            panic!("tick failed");
        };
        let current = list(&league, Some(MatchStatus::Live)).await;
        assert_eq!(current.len(), previous.len());
        for (before, after) in previous.iter().zip(&current) {
            assert_eq!(before.id, after.id);
            assert!(after.home_score >= before.home_score);
            assert!(after.away_score >= before.away_score);
            let delta = after.total_goals() - before.total_goals();
            assert!(delta <= 1, "match {} jumped by {delta}", after.id);
        }
        previous = current;
    }
}

#[tokio::test]
async fn authentication_matches_seeded_account_only() {
    let (_dir, db) = seeded_database().await;
    let auth = AuthService::new(AccountStore::new(db));

    let Ok(Some(account)) = auth.authenticate(DEMO_USERNAME, DEMO_CREDENTIAL).await else {
        panic!("seeded account should authenticate");
    };
    assert_eq!(account.username, "lina@gmail.com");
    assert!(matches!(auth.authenticate("lina@gmail.com", "wrong").await, Ok(None)));
    assert!(matches!(auth.authenticate("nobody@x.com", "demodemo").await, Ok(None)));
}

#[tokio::test]
async fn missing_database_is_a_storage_failure_everywhere() {
    let Ok(dir) = tempfile::tempdir() else {
        panic!("tempdir");
    };
    let url = format!("sqlite://{}", dir.path().join("never-created.db").display());
    let Ok(db) = Database::from_url(&url) else {
        panic!("valid url");
    };

    let league = LeagueService::new(MatchStore::new(db.clone()));
    assert!(matches!(
        league.get_matches(None).await,
        Err(LeagueError::StorageUnavailable(_))
    ));

    let auth = AuthService::new(AccountStore::new(db));
    assert!(matches!(
        auth.authenticate(DEMO_USERNAME, DEMO_CREDENTIAL).await,
        Err(LeagueError::StorageUnavailable(_))
    ));
}
