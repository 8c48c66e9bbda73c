//! Application state shared across handlers

use std::sync::Arc;

use crate::infrastructure::account::{AccountRegistrar, Authenticator};
use crate::infrastructure::auth::TokenIssuer;

/// Shared services, assembled once at process start
#[derive(Debug, Clone)]
pub struct AppState {
    pub registrar: Arc<AccountRegistrar>,
    pub authenticator: Arc<Authenticator>,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(
        registrar: Arc<AccountRegistrar>,
        authenticator: Arc<Authenticator>,
        tokens: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            registrar,
            authenticator,
            tokens,
        }
    }
}
