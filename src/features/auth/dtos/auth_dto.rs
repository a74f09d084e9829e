use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::dtos::UserResponseDto;

/// Request DTO for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 100, message = "Name must be 1-100 characters"),
        custom(function = crate::shared::validation::not_blank)
    )]
    pub name: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for authentication (register/login)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    /// Signed JWT bearer token
    pub token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    /// Authenticated user info (public projection, never the hash)
    pub user: UserResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::Fake;

    #[test]
    fn test_register_rejects_short_password() {
        let dto = RegisterRequestDto {
            email: "a@x.com".to_string(),
            name: "A".to_string(),
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_rejects_invalid_email() {
        let dto = RegisterRequestDto {
            email: "not-an-email".to_string(),
            name: "A".to_string(),
            password: "Password1!".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let dto = RegisterRequestDto {
            email: "a@x.com".to_string(),
            name: String::new(),
            password: "Password1!".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_rejects_whitespace_only_name() {
        let dto = RegisterRequestDto {
            email: "a@x.com".to_string(),
            name: "   ".to_string(),
            password: "Password1!".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_accepts_valid_input() {
        let dto = RegisterRequestDto {
            email: SafeEmail().fake(),
            name: "A".to_string(),
            password: "Password1!".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_login_requires_password() {
        let dto = LoginRequestDto {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
