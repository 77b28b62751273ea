//! # league-tracker
//!
//! Football match tracker backed by SQLite, with a live-score simulation.
//!
//! Matches are `played`, `live` or `upcoming`. Listings are always ordered by
//! kickoff. Each call to [`service::LeagueService::simulate_live_updates`]
//! advances live matches by one tick: every live match independently has a
//! 40% chance of a goal, split evenly between home and away.
//!
//! ## Architecture
//!
//! ```text
//! Terminal (cli/)
//!     │
//!     ├── AuthService, LeagueService (service/)
//!     │
//!     ├── Match, MatchStatus, draw_goal (domain/)
//!     │
//!     └── AccountStore, MatchStore ── SQLite (persistence/)
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
