//! Interactive login, menu, and watch mode.
//!
//! All functions take their input and output streams as parameters so the
//! binary can pass stdin/stdout and tests can pass in-memory buffers.

use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::table::render_match_table;
use crate::domain::{Account, MatchStatus};
use crate::service::{AuthService, LeagueService};

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List matches with the given status.
    Show(MatchStatus),
    /// Tick and re-list live matches until interrupted.
    WatchLive,
    /// Leave the menu.
    Quit,
}

impl MenuChoice {
    /// Parses one line of user input. Surrounding whitespace and case are
    /// ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" => Some(Self::Show(MatchStatus::Played)),
            "2" => Some(Self::Show(MatchStatus::Live)),
            "3" => Some(Self::Show(MatchStatus::Upcoming)),
            "4" => Some(Self::WatchLive),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

const MENU: &str = "\nMenu:\n  \
    1) Show played matches\n  \
    2) Show live matches\n  \
    3) Show upcoming matches\n  \
    4) Watch live matches (auto-refresh)\n  \
    q) Quit\n";

/// Writes `prompt` and reads one line. Returns `None` at end of input.
async fn prompt<I, O>(input: &mut I, out: &mut O, prompt: &str) -> anyhow::Result<Option<String>>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    out.write_all(prompt.as_bytes()).await?;
    out.flush().await?;

    let mut line = String::new();
    let read = input.read_line(&mut line).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks for a username and password and checks them once.
///
/// Returns `None` when the credentials are rejected or input ends early.
///
/// # Errors
///
/// Returns an error if the streams fail or the account store is
/// unavailable.
pub async fn prompt_login<I, O>(
    auth: &AuthService,
    input: &mut I,
    out: &mut O,
) -> anyhow::Result<Option<Account>>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    out.write_all(b"=== Football League CLI ===\nPlease log in.\n").await?;

    let Some(username) = prompt(input, out, "Username (email): ").await? else {
        return Ok(None);
    };
    let Some(password) = prompt(input, out, "Password: ").await? else {
        return Ok(None);
    };

    let account = auth
        .authenticate(username.trim(), &password)
        .await
        .context("checking credentials")?;

    match &account {
        Some(a) => {
            out.write_all(format!("Welcome, {}!\n", a.username).as_bytes())
                .await?;
        }
        None => out.write_all(b"Invalid credentials.\n").await?,
    }
    Ok(account)
}

/// Prints one listing of matches with the given status.
async fn show_matches<R, O>(
    league: &LeagueService<R>,
    out: &mut O,
    status: MatchStatus,
) -> anyhow::Result<()>
where
    R: Rng,
    O: AsyncWrite + Unpin,
{
    let matches = league
        .get_matches(Some(status))
        .await
        .with_context(|| format!("listing {status} matches"))?;
    out.write_all(render_match_table(&matches).as_bytes()).await?;
    Ok(())
}

/// Repeatedly ticks the simulation and prints live matches, pausing
/// `interval` between refreshes, until `stop` resolves.
///
/// The first refresh happens immediately.
///
/// # Errors
///
/// Returns an error if a tick or listing fails or output cannot be written.
pub async fn watch_live<R, O, S>(
    league: &mut LeagueService<R>,
    out: &mut O,
    interval: Duration,
    stop: S,
) -> anyhow::Result<()>
where
    R: Rng,
    O: AsyncWrite + Unpin,
    S: Future,
{
    out.write_all(b"Watching live matches. Press Ctrl+C to stop.\n")
        .await?;
    tokio::pin!(stop);

    loop {
        league
            .simulate_live_updates()
            .await
            .context("advancing live matches")?;
        let header = format!(
            "\n{}\n{}\n",
            "-".repeat(70),
            chrono::Local::now().format("Updated at %H:%M:%S")
        );
        out.write_all(header.as_bytes()).await?;
        show_matches(league, out, MatchStatus::Live).await?;
        out.flush().await?;

        tokio::select! {
            biased;
            _ = &mut stop => break,
            () = tokio::time::sleep(interval) => {}
        }
    }

    out.write_all(b"\nStopped watching live matches.\n").await?;
    Ok(())
}

/// Runs the menu until the user quits, input ends, or an interrupt arrives
/// at the prompt.
///
/// `make_stop` is called once per prompt and once per watch session. Its
/// future ends watch mode, or ends the menu when it resolves while waiting
/// for a choice.
///
/// # Errors
///
/// Returns an error if the streams fail or storage becomes unavailable.
pub async fn menu_loop<R, I, O, F, S>(
    league: &mut LeagueService<R>,
    input: &mut I,
    out: &mut O,
    watch_interval: Duration,
    mut make_stop: F,
) -> anyhow::Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
    F: FnMut() -> S,
    S: Future,
{
    loop {
        out.write_all(MENU.as_bytes()).await?;
        let read = tokio::select! {
            biased;
            read = prompt(input, out, "Select an option: ") => read?,
            _ = make_stop() => {
                out.write_all(b"\nGoodbye!\n").await?;
                break;
            }
        };
        let Some(line) = read else {
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Quit) => {
                out.write_all(b"Goodbye!\n").await?;
                break;
            }
            Some(MenuChoice::Show(status)) => {
                out.write_all(b"\n").await?;
                show_matches(league, out, status).await?;
            }
            Some(MenuChoice::WatchLive) => {
                out.write_all(b"\n").await?;
                watch_live(league, out, watch_interval, make_stop()).await?;
            }
            None => out.write_all(b"Invalid choice.\n").await?,
        }
    }

    out.flush().await?;
    Ok(())
}
