//! Type-safe match identifier.
//!
//! [`MatchId`] is a newtype over the SQLite row id so that match identifiers
//! cannot be confused with account ids or raw scores.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
///
/// Assigned by the store when the row is created and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(i64);

impl MatchId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MatchId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<MatchId> for i64 {
    fn from(id: MatchId) -> Self {
        id.0
    }
}
