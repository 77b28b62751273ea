//! Domain layer: matches, accounts, and the live-score simulation step.
//!
//! Types here are storage-agnostic. Rows coming out of SQLite are validated
//! into these types by [`crate::persistence::models`].

pub mod account;
pub mod football_match;
pub mod match_id;
pub mod match_status;
pub mod simulation;

pub use account::Account;
pub use football_match::{KICKOFF_FORMAT, Match};
pub use match_id::MatchId;
pub use match_status::{MatchStatus, UnknownStatus};
pub use simulation::{ScoreUpdate, Side, draw_goal};
