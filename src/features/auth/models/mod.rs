use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Verified identity attached to a request by the auth middleware after the
/// token signature checked out and the user row was re-fetched and confirmed
/// active.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// JWT claim set. Tokens are stateless; validity is purely a function of the
/// signature and `exp` at verification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stringified UUID
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
