//! Account services - hashing, storage, registration, sign-in

pub mod authenticator;
pub mod password;
pub mod registrar;
pub mod repository;

pub use authenticator::Authenticator;
pub use password::{Argon2Hasher, PasswordHasher};
pub use registrar::{AccountRegistrar, RegisterRequest};
pub use repository::InMemoryAccountRepository;
