//! API layer - axum routes, extractors and error mapping

pub mod auth;
pub mod error;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiErrorResponse};
pub use router::create_router;
pub use state::AppState;
