use thiserror::Error;

/// Core authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Account '{login}' already exists")]
    DuplicateAccount { login: String },

    #[error("Invalid role: '{value}'")]
    InvalidRole { value: String },

    #[error("Login and password must not be empty")]
    EmptyCredential,

    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Deliberately undifferentiated: never reveals whether the login
    /// or the password was wrong.
    #[error("Invalid login or password")]
    AuthenticationFailed,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    ExpiredToken,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AuthError {
    pub fn duplicate_account(login: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            login: login.into(),
        }
    }

    pub fn invalid_role(value: impl Into<String>) -> Self {
        Self::InvalidRole {
            value: value.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
