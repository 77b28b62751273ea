//! Fixed-width match table for the terminal.

use crate::domain::Match;

const RULE_WIDTH: usize = 70;

fn line(cells: [&str; 7]) -> String {
    let [id, date, time, status, home, score, away] = cells;
    format!("{id:<3} {date:<10} {time:<5} {status:<8} {home:<15} {score:<7} {away:<15}\n")
}

/// Renders `matches` as a text table, one line per match.
///
/// An empty slice renders as a single "No matches found." line.
#[must_use]
pub fn render_match_table(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches found.\n".to_string();
    }

    let mut out = line(["ID", "Date", "Time", "Status", "Home", "Score", "Away"]);
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    for m in matches {
        out.push_str(&line([
            &m.id.to_string(),
            &m.date_str(),
            &m.time_str(),
            m.status.as_str(),
            &m.home_team,
            &m.score_str(),
            &m.away_team,
        ]));
    }
    out
}
