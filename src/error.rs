//! League error types with numeric code mapping.
//!
//! [`LeagueError`] is the central error type for the crate. "Nothing found"
//! is never an error: lookups return empty vectors or `None`. Only storage
//! failures and corrupt rows surface here.

use crate::domain::MatchId;

/// Crate-wide error enum.
///
/// # Error Code Ranges
///
/// | Range     | Category        |
/// |-----------|-----------------|
/// | 1000–1999 | Configuration   |
/// | 2000–2999 | Storage         |
/// | 3000–3999 | Data integrity  |
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    /// A configuration value could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The database could not be opened or a statement against it failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Schema migration or fixture seeding failed.
    #[error("bootstrap failed: {0}")]
    Bootstrap(String),

    /// A stored row could not be turned into a valid domain value.
    #[error("data integrity fault in match {match_id}: {reason}")]
    DataIntegrity {
        /// Row the fault was found in.
        match_id: MatchId,
        /// What was wrong with it.
        reason: String,
    },
}

impl LeagueError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidConfig(_) => 1001,
            Self::StorageUnavailable(_) => 2001,
            Self::Bootstrap(_) => 2002,
            Self::DataIntegrity { .. } => 3001,
        }
    }

    /// Whether the error means the store itself cannot be used, as opposed
    /// to a single bad row.
    #[must_use]
    pub const fn is_storage_failure(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_) | Self::Bootstrap(_))
    }
}

impl From<sqlx::Error> for LeagueError {
    fn from(err: sqlx::Error) -> Self {
        Self::StorageUnavailable(err.to_string())
    }
}
