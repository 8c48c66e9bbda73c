//! Sign-in and identity lookup service

use std::sync::Arc;

use tracing::debug;

use crate::domain::account::AuthenticatedIdentity;
use crate::domain::{AccountRepository, AuthError};

use super::password::PasswordHasher;

/// Orchestrates sign-in: account lookup and password verification.
///
/// Also exposes the password-less [`Authenticator::load_by_login`]
/// used by request-authentication middleware, kept separate from the
/// password-checking path.
#[derive(Debug)]
pub struct Authenticator {
    repository: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl Authenticator {
    pub fn new(repository: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Authenticate a login/password pair.
    ///
    /// Unknown logins and wrong passwords fail with the same
    /// [`AuthError::AuthenticationFailed`] so callers cannot
    /// enumerate usernames.
    pub async fn authenticate(
        &self,
        login: &str,
        password: &str,
    ) -> Result<AuthenticatedIdentity, AuthError> {
        let Some(account) = self.repository.find_by_login(login).await? else {
            debug!("sign-in rejected");
            return Err(AuthError::AuthenticationFailed);
        };

        if !self.hasher.verify(password, account.password_hash()) {
            debug!("sign-in rejected");
            return Err(AuthError::AuthenticationFailed);
        }

        Ok(account.identity())
    }

    /// Resolve an identity by login without checking a password
    pub async fn load_by_login(
        &self,
        login: &str,
    ) -> Result<Option<AuthenticatedIdentity>, AuthError> {
        let account = self.repository.find_by_login(login).await?;
        Ok(account.map(|a| a.identity()))
    }
}
