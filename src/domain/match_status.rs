//! Closed lifecycle category of a match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a match.
///
/// Nothing in this crate moves a match from one status to another; the
/// simulation tick only touches scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Finished; the stored score is final.
    Played,
    /// In progress; the score advances on every simulation tick.
    Live,
    /// Not started; scores are always zero and shown as absent.
    Upcoming,
}

impl MatchStatus {
    /// All statuses, in menu order.
    pub const ALL: [Self; 3] = [Self::Played, Self::Live, Self::Upcoming];

    /// Returns the status as stored in the `matches.status` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Played => "played",
            Self::Live => "live",
            Self::Upcoming => "upcoming",
        }
    }

    /// Whether scores are meaningful for this status.
    #[must_use]
    pub const fn shows_score(self) -> bool {
        matches!(self, Self::Played | Self::Live)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three known statuses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown match status {0:?}")]
pub struct UnknownStatus(
    /// The rejected value.
    pub String,
);

impl FromStr for MatchStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "played" => Ok(Self::Played),
            "live" => Ok(Self::Live),
            "upcoming" => Ok(Self::Upcoming),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}
