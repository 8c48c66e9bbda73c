//! Signed bearer token issuance and validation

use std::fmt::Debug;
use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::account::{AuthenticatedIdentity, Role};
use crate::domain::AuthError;

use super::clock::Clock;

/// Claims embedded in an issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (login name)
    pub sub: String,
    /// Role claim
    pub role: Role,
    /// Issued-at timestamp (Unix epoch seconds)
    pub iat: i64,
    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,
}

impl TokenClaims {
    fn identity(&self) -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            login: self.sub.clone(),
            role: self.role,
        }
    }
}

/// Configuration for the token issuer
#[derive(Clone)]
pub struct TokenConfig {
    /// Signing secret, process-wide and immutable. Never logged.
    pub secret: String,
    /// Token lifetime in seconds
    pub lifetime_secs: i64,
}

impl TokenConfig {
    pub fn new(secret: impl Into<String>, lifetime_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            lifetime_secs,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            lifetime_secs: 3600,
        }
    }
}

impl Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[redacted]")
            .field("lifetime_secs", &self.lifetime_secs)
            .finish()
    }
}

/// Issues and validates HMAC-signed (HS256) bearer tokens.
///
/// Tokens are stateless: there is no server-side record and no
/// revocation, they simply expire. Expiry is checked against the
/// injected [`Clock`] with `now >= exp`, so a token is already expired
/// at its expiry instant.
#[derive(Clone)]
pub struct TokenIssuer {
    lifetime: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    clock: Arc<dyn Clock>,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("lifetime", &self.lifetime)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            lifetime: Duration::seconds(config.lifetime_secs),
            encoding_key,
            decoding_key,
            clock,
        }
    }

    /// Configured token lifetime
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// Issue a signed token for an authenticated identity
    pub fn issue(&self, identity: &AuthenticatedIdentity) -> Result<String, AuthError> {
        let now = self.clock.now();

        let claims = TokenClaims {
            sub: identity.login.clone(),
            role: identity.role,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a token's signature and expiry, returning the embedded
    /// identity.
    ///
    /// Signature mismatch or a malformed token fails with
    /// [`AuthError::InvalidToken`]; a structurally valid token past its
    /// expiry fails with [`AuthError::ExpiredToken`].
    pub fn validate(&self, token: &str) -> Result<AuthenticatedIdentity, AuthError> {
        // Expiry is checked below against the injected clock rather
        // than by the decoder (which would use wall-clock time and a
        // default leeway).
        let mut validation = Validation::default();
        validation.validate_exp = false;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        let claims = token_data.claims;

        if self.clock.now().timestamp() >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(claims.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::auth::clock::mock::ManualClock;
    use crate::infrastructure::auth::clock::SystemClock;

    const LIFETIME_SECS: i64 = 60;

    fn test_identity() -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            login: "alice".to_string(),
            role: Role::User,
        }
    }

    fn create_issuer_with_clock() -> (Arc<ManualClock>, TokenIssuer) {
        let clock = Arc::new(ManualClock::starting_now());
        let issuer = TokenIssuer::new(
            TokenConfig::new("test-secret-key-12345", LIFETIME_SECS),
            clock.clone(),
        );
        (clock, issuer)
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let (_, issuer) = create_issuer_with_clock();
        let identity = test_identity();

        let token = issuer.issue(&identity).unwrap();
        assert!(!token.is_empty());

        let validated = issuer.validate(&token).unwrap();
        assert_eq!(validated, identity);
    }

    #[test]
    fn test_role_claim_round_trip() {
        let (_, issuer) = create_issuer_with_clock();
        let identity = AuthenticatedIdentity {
            login: "root".to_string(),
            role: Role::Admin,
        };

        let token = issuer.issue(&identity).unwrap();
        let validated = issuer.validate(&token).unwrap();
        assert_eq!(validated.role, Role::Admin);
    }

    #[test]
    fn test_malformed_token() {
        let (_, issuer) = create_issuer_with_clock();

        assert!(matches!(
            issuer.validate("not-a-token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(issuer.validate(""), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let issuer1 = TokenIssuer::new(
            TokenConfig::new("secret-1", LIFETIME_SECS),
            Arc::clone(&clock),
        );
        let issuer2 = TokenIssuer::new(TokenConfig::new("secret-2", LIFETIME_SECS), clock);

        let token = issuer1.issue(&test_identity()).unwrap();

        assert!(matches!(
            issuer2.validate(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_payload_is_invalid() {
        let (_, issuer) = create_issuer_with_clock();
        let token = issuer.issue(&test_identity()).unwrap();

        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        assert_eq!(parts.len(), 3);

        // Flip one character of the payload segment
        let payload = &mut parts[1];
        let flipped = if payload.starts_with('A') { "B" } else { "A" };
        payload.replace_range(0..1, flipped);

        let tampered = parts.join(".");
        assert_ne!(tampered, token);

        assert!(matches!(
            issuer.validate(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        let (clock, issuer) = create_issuer_with_clock();
        let token = issuer.issue(&test_identity()).unwrap();

        clock.advance(Duration::seconds(LIFETIME_SECS + 1));

        assert!(matches!(
            issuer.validate(&token),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_token_expired_exactly_at_expiry_instant() {
        use chrono::{DateTime, Utc};

        // Pin the clock to a whole second so iat/exp truncation cannot
        // skew the boundary check.
        let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let issuer = TokenIssuer::new(
            TokenConfig::new("test-secret-key-12345", LIFETIME_SECS),
            clock.clone(),
        );

        let token = issuer.issue(&test_identity()).unwrap();

        // Just before expiry: still valid
        clock.advance(Duration::seconds(LIFETIME_SECS - 1));
        assert!(issuer.validate(&token).is_ok());

        // At the expiry instant: expired, never valid
        clock.advance(Duration::seconds(1));
        assert!(matches!(
            issuer.validate(&token),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_config_debug_redacts_secret() {
        let config = TokenConfig::new("super-secret", 60);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_issuer_debug_hides_keys() {
        let (_, issuer) = create_issuer_with_clock();
        let debug = format!("{:?}", issuer);
        assert!(!debug.contains("test-secret-key-12345"));
    }
}
