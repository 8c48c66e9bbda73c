//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Account;
use crate::domain::AuthError;

/// Repository trait for account storage.
///
/// Implementations must provide read-after-write consistency: a `save`
/// followed by `find_by_login` for the same login sees the saved record.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Look up an account by its login name
    async fn find_by_login(&self, login: &str) -> Result<Option<Account>, AuthError>;

    /// Persist a new account and assign its internal identifier.
    ///
    /// Login uniqueness is enforced atomically at write time; a
    /// conflicting save fails with [`AuthError::DuplicateAccount`].
    async fn save(&self, account: Account) -> Result<Account, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Mock account repository for testing, with a failure switch
    #[derive(Debug, Default)]
    pub struct MockAccountRepository {
        accounts: Arc<RwLock<HashMap<String, Account>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockAccountRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        /// Number of stored accounts
        pub async fn len(&self) -> usize {
            self.accounts.read().await.len()
        }

        async fn check_should_fail(&self) -> Result<(), AuthError> {
            if *self.should_fail.read().await {
                return Err(AuthError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn find_by_login(&self, login: &str) -> Result<Option<Account>, AuthError> {
            self.check_should_fail().await?;
            let accounts = self.accounts.read().await;
            Ok(accounts.get(login).cloned())
        }

        async fn save(&self, account: Account) -> Result<Account, AuthError> {
            self.check_should_fail().await?;
            let mut accounts = self.accounts.write().await;

            if accounts.contains_key(account.login()) {
                return Err(AuthError::duplicate_account(account.login()));
            }

            let account = account.with_id(Uuid::new_v4());
            accounts.insert(account.login().to_string(), account.clone());
            Ok(account)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::account::Role;

        #[tokio::test]
        async fn test_save_and_find() {
            let repo = MockAccountRepository::new();
            let account = Account::new("alice", "hash", Role::User);

            let saved = repo.save(account).await.unwrap();
            assert!(saved.id().is_some());

            let found = repo.find_by_login("alice").await.unwrap();
            assert!(found.is_some());
            assert_eq!(found.unwrap().login(), "alice");
        }

        #[tokio::test]
        async fn test_save_duplicate_login() {
            let repo = MockAccountRepository::new();

            repo.save(Account::new("alice", "hash-1", Role::User))
                .await
                .unwrap();

            let result = repo.save(Account::new("alice", "hash-2", Role::Admin)).await;
            assert!(matches!(
                result,
                Err(AuthError::DuplicateAccount { login }) if login == "alice"
            ));
        }

        #[tokio::test]
        async fn test_failure_switch() {
            let repo = MockAccountRepository::new();
            repo.set_should_fail(true).await;

            let result = repo.find_by_login("alice").await;
            assert!(matches!(result, Err(AuthError::Storage { .. })));
        }
    }
}
