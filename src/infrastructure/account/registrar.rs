//! Account registration service

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;

use crate::domain::account::{validate_login, validate_password, Account, Role};
use crate::domain::{AccountRepository, AuthError};

use super::password::PasswordHasher;

/// Request for registering a new account.
///
/// The role arrives as a string from the transport layer and is
/// re-validated here against the closed enumeration.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub role: String,
}

/// Orchestrates sign-up: uniqueness check, password hashing, persist.
#[derive(Debug)]
pub struct AccountRegistrar {
    repository: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AccountRegistrar {
    pub fn new(repository: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account.
    ///
    /// Registration is all-or-nothing: the account is persisted with
    /// its hash, or nothing is persisted. The preliminary lookup is a
    /// fast path only; the store's atomic uniqueness constraint at
    /// save time is what closes the check-then-act race.
    pub async fn register(&self, request: RegisterRequest) -> Result<Account, AuthError> {
        validate_login(&request.login).map_err(map_credential_error)?;
        validate_password(&request.password).map_err(map_credential_error)?;

        let role = Role::from_str(&request.role)?;

        if self
            .repository
            .find_by_login(&request.login)
            .await?
            .is_some()
        {
            return Err(AuthError::duplicate_account(&request.login));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let account = Account::new(&request.login, password_hash, role);
        let account = self.repository.save(account).await?;

        info!(login = %account.login(), role = %account.role(), "account registered");

        Ok(account)
    }
}

fn map_credential_error(error: crate::domain::account::CredentialValidationError) -> AuthError {
    use crate::domain::account::CredentialValidationError::*;

    match error {
        EmptyLogin | EmptyPassword => AuthError::EmptyCredential,
        other => AuthError::validation(other.to_string()),
    }
}
