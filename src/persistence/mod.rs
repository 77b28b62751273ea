//! Persistence layer: SQLite match and account tables.
//!
//! [`Database`] carries connection options; [`MatchStore`] and
//! [`AccountStore`] open a scoped connection per call. Schema lives in the
//! embedded `migrations/` directory and the demo fixture in [`seed`].

pub mod account_store;
pub mod database;
pub mod match_store;
pub mod models;
pub mod seed;

pub use account_store::AccountStore;
pub use database::Database;
pub use match_store::MatchStore;
