use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::auth::services::TokenService;
use crate::features::users::dtos::UserResponseDto;
use crate::features::users::services::UserService;

/// Both unknown email and wrong password surface as this one message, so the
/// response cannot be used to enumerate registered accounts.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Service for authentication operations (register, login, current user)
pub struct AuthService {
    user_service: Arc<UserService>,
    token_service: Arc<TokenService>,
    bcrypt_cost: u32,
    /// Burned on login misses so an unknown email costs a bcrypt
    /// verification, same as a wrong password.
    dummy_hash: String,
}

impl AuthService {
    pub fn new(
        user_service: Arc<UserService>,
        token_service: Arc<TokenService>,
        bcrypt_cost: u32,
    ) -> Result<Self> {
        let dummy_hash = make_dummy_hash(bcrypt_cost)?;

        Ok(Self {
            user_service,
            token_service,
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// Register a new user and issue a token identical in shape to login.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let email = normalize_email(&dto.email);
        let password_hash = hash_password(dto.password, self.bcrypt_cost).await?;

        let user = self
            .user_service
            .create(&email, dto.name.trim(), &password_hash)
            .await?;

        let issued = self.token_service.issue(user.id, &user.email)?;

        Ok(AuthResponseDto {
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
            user: user.into(),
        })
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = normalize_email(&dto.email);

        let user = match self.user_service.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Equalize response timing between unknown email and wrong
                // password.
                let _ = verify_password(dto.password, self.dummy_hash.clone()).await;
                return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
            }
        };

        let password_valid = verify_password(dto.password, user.password_hash.clone()).await?;
        if !password_valid {
            return Err(AppError::Auth(INVALID_CREDENTIALS.to_string()));
        }

        if !user.is_active {
            return Err(AppError::Forbidden("Account is deactivated".to_string()));
        }

        let issued = self.token_service.issue(user.id, &user.email)?;

        tracing::info!("User logged in: id={}", user.id);

        Ok(AuthResponseDto {
            token: issued.token,
            token_type: "Bearer".to_string(),
            expires_in: issued.expires_in,
            user: user.into(),
        })
    }

    /// Fetch the full public projection for the verified identity.
    pub async fn current_user(&self, user: AuthenticatedUser) -> Result<UserResponseDto> {
        let record = self
            .user_service
            .find_by_id(user.user_id)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid or expired token".to_string()))?;

        Ok(record.into())
    }
}

/// Emails are compared case-insensitively by storing them lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Well-formed hash of a fixed throwaway password, verified on login misses.
fn make_dummy_hash(cost: u32) -> Result<String> {
    bcrypt::hash("meetscribe-dummy-password", cost)
        .map_err(|e| AppError::Internal(format!("Failed to prepare dummy hash: {}", e)))
}

/// Bcrypt is CPU-bound; keep it off the async runtime threads.
async fn hash_password(password: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(normalize_email("  A@X.Com "), "a@x.com");
        assert_eq!(normalize_email("a@x.com"), "a@x.com");
    }

    #[test]
    fn test_dummy_hash_is_verifiable() {
        // The burn on a login miss must exercise a real verification, not
        // error out early on a malformed hash.
        let hash = make_dummy_hash(4).unwrap();
        assert!(!bcrypt::verify("any password", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_password_hash_round_trip() {
        // Minimum cost keeps the test fast; production uses cost 10.
        let hash = hash_password("Password1!".to_string(), 4).await.unwrap();
        assert_ne!(hash, "Password1!");
        assert!(verify_password("Password1!".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!verify_password("wrong-password".to_string(), hash)
            .await
            .unwrap());
    }
}
