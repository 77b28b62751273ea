//! Demo fixture: one account and six Serie A matches.
//!
//! Seeding only touches empty tables, so user data in an existing file is
//! left alone. The whole fixture goes in as one transaction.

use sqlx::Connection;
use sqlx::sqlite::SqliteConnection;

use crate::domain::MatchStatus;
use crate::error::LeagueError;

/// Username of the seeded demo account.
pub const DEMO_USERNAME: &str = "lina@gmail.com";

/// Credential of the seeded demo account.
pub const DEMO_CREDENTIAL: &str = "demodemo";

/// A fixture row for the `matches` table.
#[derive(Debug, Clone, Copy)]
pub struct SeedMatch {
    /// Home team name.
    pub home_team: &'static str,
    /// Away team name.
    pub away_team: &'static str,
    /// Kickoff as stored text.
    pub kickoff: &'static str,
    /// Lifecycle state.
    pub status: MatchStatus,
    /// Home score.
    pub home_score: u32,
    /// Away score.
    pub away_score: u32,
}

/// Fixture matches in insertion order (ids 1 through 6).
pub const SEED_MATCHES: [SeedMatch; 6] = [
    SeedMatch {
        home_team: "Inter Milan",
        away_team: "AC Milan",
        kickoff: "2025-01-10 20:45",
        status: MatchStatus::Played,
        home_score: 2,
        away_score: 1,
    },
    SeedMatch {
        home_team: "Juventus",
        away_team: "Napoli",
        kickoff: "2025-01-11 18:00",
        status: MatchStatus::Played,
        home_score: 1,
        away_score: 1,
    },
    SeedMatch {
        home_team: "Roma",
        away_team: "Lazio",
        kickoff: "2025-01-12 21:00",
        status: MatchStatus::Live,
        home_score: 0,
        away_score: 0,
    },
    SeedMatch {
        home_team: "Atalanta",
        away_team: "Fiorentina",
        kickoff: "2025-01-12 21:00",
        status: MatchStatus::Live,
        home_score: 1,
        away_score: 0,
    },
    SeedMatch {
        home_team: "Udinese",
        away_team: "Bologna",
        kickoff: "2025-01-20 18:30",
        status: MatchStatus::Upcoming,
        home_score: 0,
        away_score: 0,
    },
    SeedMatch {
        home_team: "Torino",
        away_team: "Genoa",
        kickoff: "2025-01-21 20:45",
        status: MatchStatus::Upcoming,
        home_score: 0,
        away_score: 0,
    },
];

/// Rows inserted by [`seed_if_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Accounts inserted.
    pub accounts: u64,
    /// Matches inserted.
    pub matches: u64,
}

/// Inserts the demo account and fixture matches into whichever tables are
/// empty.
///
/// # Errors
///
/// Returns [`LeagueError::Bootstrap`] if any statement fails. Nothing is
/// kept in that case, so a later call seeds from scratch.
pub async fn seed_if_empty(conn: &mut SqliteConnection) -> Result<SeedReport, LeagueError> {
    let bootstrap = |e: sqlx::Error| LeagueError::Bootstrap(format!("seeding failed: {e}"));
    let mut report = SeedReport::default();
    let mut tx = conn.begin().await.map_err(bootstrap)?;

    let accounts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
        .fetch_one(&mut *tx)
        .await
        .map_err(bootstrap)?;
    if accounts == 0 {
        report.accounts = sqlx::query("INSERT INTO accounts (username, credential) VALUES (?, ?)")
            .bind(DEMO_USERNAME)
            .bind(DEMO_CREDENTIAL)
            .execute(&mut *tx)
            .await
            .map_err(bootstrap)?
            .rows_affected();
    }

    let matches = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches")
        .fetch_one(&mut *tx)
        .await
        .map_err(bootstrap)?;
    if matches == 0 {
        for m in &SEED_MATCHES {
            let inserted = sqlx::query(
                "INSERT INTO matches (home_team, away_team, kickoff, status, home_score, away_score) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(m.home_team)
            .bind(m.away_team)
            .bind(m.kickoff)
            .bind(m.status.as_str())
            .bind(m.home_score)
            .bind(m.away_score)
            .execute(&mut *tx)
            .await
            .map_err(bootstrap)?;
            report.matches += inserted.rows_affected();
        }
    }

    tx.commit().await.map_err(bootstrap)?;

    if report != SeedReport::default() {
        tracing::debug!(?report, "seeded demo fixture");
    }
    Ok(report)
}
