use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::auth::services::TokenService;
use crate::features::users::services::UserService;

const INVALID_TOKEN: &str = "Invalid or expired token";

/// Verifies bearer tokens for the auth middleware.
///
/// Signature and expiry checks are pure; the user row is then re-fetched so
/// that a deactivated or deleted account is rejected immediately. That
/// re-fetch is the system's only revocation mechanism.
pub struct AuthVerifier {
    token_service: Arc<TokenService>,
    user_service: Arc<UserService>,
}

impl AuthVerifier {
    pub fn new(token_service: Arc<TokenService>, user_service: Arc<UserService>) -> Self {
        Self {
            token_service,
            user_service,
        }
    }

    pub async fn verify(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.token_service.verify(token)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Auth(INVALID_TOKEN.to_string()))?;

        let user = self
            .user_service
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Auth(INVALID_TOKEN.to_string()))?;

        if !user.is_active {
            return Err(AppError::Auth(INVALID_TOKEN.to_string()));
        }

        Ok(AuthenticatedUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
