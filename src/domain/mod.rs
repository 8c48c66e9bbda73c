//! Domain layer - core entities and contracts

pub mod account;
pub mod error;

pub use account::{Account, AccountRepository, AuthenticatedIdentity, Role};
pub use error::AuthError;
