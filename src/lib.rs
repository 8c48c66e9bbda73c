//! User authentication service.
//!
//! Registers accounts (hashed, salted passwords; globally unique
//! logins), verifies sign-in attempts, and mints stateless HMAC-signed
//! bearer tokens carrying identity and role claims.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;

use std::sync::Arc;

use api::AppState;
use config::AppConfig;
use domain::AccountRepository;
use infrastructure::account::{
    AccountRegistrar, Argon2Hasher, Authenticator, InMemoryAccountRepository, PasswordHasher,
};
use infrastructure::auth::{SystemClock, TokenConfig, TokenIssuer};

/// Assemble the application state: explicit constructor wiring, done
/// once at process start.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let repository: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());

    let registrar = Arc::new(AccountRegistrar::new(
        Arc::clone(&repository),
        Arc::clone(&hasher),
    ));
    let authenticator = Arc::new(Authenticator::new(repository, hasher));

    let tokens = Arc::new(TokenIssuer::new(
        TokenConfig::new(
            config.auth.token_secret.clone(),
            config.auth.token_lifetime_secs,
        ),
        Arc::new(SystemClock::new()),
    ));

    AppState::new(registrar, authenticator, tokens)
}
