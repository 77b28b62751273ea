//! Service layer: business logic orchestration.
//!
//! [`LeagueService`] lists matches and advances live ones by one simulated
//! tick. [`AuthService`] gates access with a credential check.

pub mod auth_service;
pub mod league_service;

pub use auth_service::AuthService;
pub use league_service::LeagueService;
