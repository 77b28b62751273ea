//! Authenticated identity.

use serde::Serialize;

/// An account that passed credential verification.
///
/// Carries no credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    /// Row identifier.
    pub id: i64,
    /// Login name (case-sensitive, opaque).
    pub username: String,
}
