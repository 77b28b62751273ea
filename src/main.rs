//! league-tracker entry point.
//!
//! Bootstraps the database, asks for credentials, then runs the menu on
//! stdin/stdout.

use std::process::ExitCode;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use league_tracker::cli;
use league_tracker::config::{LeagueConfig, LogFormat};
use league_tracker::persistence::{AccountStore, Database, MatchStore};
use league_tracker::service::{AuthService, LeagueService};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load configuration
    let config = LeagueConfig::from_env()?;
    init_tracing(config.log_format);
    tracing::info!(database_url = %config.database_url, "starting league-tracker");

    // Storage must be reachable before anything is shown
    let db = Database::from_url(&config.database_url)?;
    db.ensure_initialized()
        .await
        .context("preparing the league database")?;

    // Build service layer
    let auth = AuthService::new(AccountStore::new(db.clone()));
    let mut league = LeagueService::new(MatchStore::new(db));

    let mut input = BufReader::new(tokio::io::stdin());
    let mut out = tokio::io::stdout();

    if cli::prompt_login(&auth, &mut input, &mut out).await?.is_none() {
        return Ok(ExitCode::FAILURE);
    }

    cli::menu_loop(
        &mut league,
        &mut input,
        &mut out,
        config.watch_interval,
        tokio::signal::ctrl_c,
    )
    .await?;

    Ok(ExitCode::SUCCESS)
}
