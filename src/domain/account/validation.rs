//! Credential validation rules

use thiserror::Error;

/// Errors that can occur while validating a credential pair
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CredentialValidationError {
    #[error("Login cannot be empty")]
    EmptyLogin,

    #[error("Login exceeds maximum length of {0} characters")]
    LoginTooLong(usize),

    #[error("Login contains whitespace")]
    LoginContainsWhitespace,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password exceeds maximum length of {0} characters")]
    PasswordTooLong(usize),
}

const MAX_LOGIN_LENGTH: usize = 64;
const MAX_PASSWORD_LENGTH: usize = 128;

/// Validate a login name
///
/// Rules:
/// - Cannot be empty
/// - Maximum 64 characters
/// - No whitespace
pub fn validate_login(login: &str) -> Result<(), CredentialValidationError> {
    if login.is_empty() {
        return Err(CredentialValidationError::EmptyLogin);
    }

    if login.len() > MAX_LOGIN_LENGTH {
        return Err(CredentialValidationError::LoginTooLong(MAX_LOGIN_LENGTH));
    }

    if login.chars().any(char::is_whitespace) {
        return Err(CredentialValidationError::LoginContainsWhitespace);
    }

    Ok(())
}

/// Validate a raw password
///
/// Rules:
/// - Cannot be empty
/// - Maximum 128 characters (argon2 input cap)
pub fn validate_password(password: &str) -> Result<(), CredentialValidationError> {
    if password.is_empty() {
        return Err(CredentialValidationError::EmptyPassword);
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(CredentialValidationError::PasswordTooLong(
            MAX_PASSWORD_LENGTH,
        ));
    }

    Ok(())
}
