//! Credential check against the stored accounts.

use crate::domain::Account;
use crate::error::LeagueError;
use crate::persistence::AccountStore;

/// Single-shot credential verification.
///
/// Credentials are compared in cleartext. There is no lockout, session, or
/// rate limit; every call is independent.
#[derive(Debug, Clone)]
pub struct AuthService {
    accounts: AccountStore,
}

impl AuthService {
    /// Creates a service over the given account store.
    #[must_use]
    pub fn new(accounts: AccountStore) -> Self {
        Self { accounts }
    }

    /// Returns the account when both `username` and `credential` match
    /// exactly, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::StorageUnavailable`] if the accounts table
    /// cannot be read. A wrong password or unknown user is not an error.
    pub async fn authenticate(
        &self,
        username: &str,
        credential: &str,
    ) -> Result<Option<Account>, LeagueError> {
        let account = self
            .accounts
            .find_by_credentials(username, credential)
            .await?;

        match &account {
            Some(a) => tracing::info!(account_id = a.id, username = %a.username, "login accepted"),
            None => tracing::info!(username, "login rejected"),
        }
        Ok(account)
    }
}
