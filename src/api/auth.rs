//! Authentication endpoints: sign-up, sign-in, current identity

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::middleware::RequireIdentity;
use crate::api::state::AppState;
use crate::domain::account::{Account, AuthenticatedIdentity};
use crate::infrastructure::account::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(sign_up))
        .route("/signin", post(sign_in))
        .route("/me", get(current_identity))
}

/// Sign-up request
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub login: String,
    pub password: String,
    pub role: String,
}

/// Account response - never carries the password hash
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub login: String,
    pub role: String,
    pub created_at: String,
}

impl AccountResponse {
    fn from_account(account: &Account) -> Self {
        Self {
            login: account.login().to_string(),
            role: account.role().to_string(),
            created_at: account.created_at().to_rfc3339(),
        }
    }
}

/// Sign-in request
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub login: String,
    pub password: String,
}

/// Sign-in response carrying the bearer token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_at: String,
}

/// Register a new account
///
/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let account = state
        .registrar
        .register(RegisterRequest {
            login: request.login,
            password: request.password,
            role: request.role,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::from_account(&account)),
    ))
}

/// Authenticate and mint a bearer token
///
/// POST /signin
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let identity = state
        .authenticator
        .authenticate(&request.login, &request.password)
        .await?;

    let access_token = state.tokens.issue(&identity)?;
    let expires_at = chrono::Utc::now() + state.tokens.lifetime();

    Ok(Json(TokenResponse {
        access_token,
        expires_at: expires_at.to_rfc3339(),
    }))
}

/// Return the identity behind the presented token
///
/// GET /me
pub async fn current_identity(
    RequireIdentity(identity): RequireIdentity,
) -> Json<AuthenticatedIdentity> {
    Json(identity)
}
