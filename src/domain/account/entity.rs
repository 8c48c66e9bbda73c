//! Account entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::AuthError;

/// Role assigned to an account. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            other => Err(AuthError::invalid_role(other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persisted identity record
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Internal identifier, assigned by the store on save
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    /// Login name, globally unique, case-sensitive as stored
    login: String,
    /// Argon2 password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Role assigned at registration
    role: Role,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new, not yet persisted account
    pub fn new(login: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: None,
            login: login.into(),
            password_hash: password_hash.into(),
            role,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attach the store-assigned identifier
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Derive the transient identity carried by tokens
    pub fn identity(&self) -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            login: self.login.clone(),
            role: self.role,
        }
    }
}

/// Result of a successful sign-in, consumed by the token issuer.
/// Produced fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    pub login: String,
    pub role: Role,
}
