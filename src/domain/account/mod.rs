//! Account domain - entities, validation and the storage contract

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{Account, AuthenticatedIdentity, Role};
pub use repository::AccountRepository;
pub use validation::{validate_login, validate_password, CredentialValidationError};
