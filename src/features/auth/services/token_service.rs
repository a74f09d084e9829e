use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::Claims;

/// Single generic message for every verification failure. Distinguishing
/// "expired" from "tampered" would give probes an oracle.
const INVALID_TOKEN: &str = "Invalid or expired token";

/// A freshly signed token plus its lifetime in seconds.
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Service for issuing and verifying HS256 bearer tokens. Tokens embed the
/// user id and email and stay valid until natural expiry; there is no
/// revocation list.
pub struct TokenService {
    secret: String,
    ttl_secs: i64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            ttl_secs: config.token_ttl.as_secs() as i64,
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Sign a token for the given identity with the configured lifetime.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<IssuedToken> {
        self.issue_with_ttl(user_id, email, Duration::seconds(self.ttl_secs))
    }

    fn issue_with_ttl(&self, user_id: Uuid, email: &str, ttl: Duration) -> Result<IssuedToken> {
        let now = Utc::now();
        let expiry = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::Internal("Token expiry overflow".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        tracing::debug!("Token issued for user {}", user_id);

        Ok(IssuedToken {
            token,
            expires_in: ttl.num_seconds(),
        })
    }

    /// Verify signature and expiry. All failure modes collapse into the same
    /// generic authentication error.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.leeway = self.leeway_secs;

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|_| AppError::Auth(INVALID_TOKEN.to_string()))?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration as StdDuration;

    fn test_service(leeway_secs: u64) -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "a-test-signing-secret-of-32-chars!!".to_string(),
            token_ttl: StdDuration::from_secs(7 * 24 * 3600),
            jwt_leeway: StdDuration::from_secs(leeway_secs),
            bcrypt_cost: 4,
        })
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let service = test_service(60);
        let user_id = Uuid::new_v4();

        let issued = service.issue(user_id, "a@x.com").unwrap();
        assert_eq!(issued.expires_in, 7 * 24 * 3600);

        let claims = service.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "a@x.com");
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = test_service(60);
        assert!(service.verify("not.a.token").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let issuer = test_service(60);
        let verifier = TokenService::new(&AuthConfig {
            jwt_secret: "a-different-signing-secret-32chars".to_string(),
            token_ttl: StdDuration::from_secs(3600),
            jwt_leeway: StdDuration::from_secs(60),
            bcrypt_cost: 4,
        });

        let issued = issuer.issue(Uuid::new_v4(), "a@x.com").unwrap();
        assert!(verifier.verify(&issued.token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = test_service(0);
        let issued = service
            .issue_with_ttl(Uuid::new_v4(), "a@x.com", Duration::seconds(-3600))
            .unwrap();
        assert!(service.verify(&issued.token).is_err());
    }
}
