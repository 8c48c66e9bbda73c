//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::account::{Account, AccountRepository};
use crate::domain::AuthError;

/// In-memory implementation of [`AccountRepository`].
///
/// Accounts are keyed by login; the insert-if-absent under a single
/// write lock is the atomic uniqueness guarantee concurrent
/// registrations rely on.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing accounts
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let map = accounts
            .into_iter()
            .map(|a| {
                let a = if a.id().is_some() {
                    a
                } else {
                    a.with_id(Uuid::new_v4())
                };
                (a.login().to_string(), a)
            })
            .collect();

        Self {
            accounts: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, AuthError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(login).cloned())
    }

    async fn save(&self, account: Account) -> Result<Account, AuthError> {
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(account.login()) {
            return Err(AuthError::duplicate_account(account.login()));
        }

        let account = account.with_id(Uuid::new_v4());
        accounts.insert(account.login().to_string(), account.clone());

        Ok(account)
    }
}
