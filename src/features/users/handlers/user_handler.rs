use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedUser;
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Deactivate the caller's account
#[utoipa::path(
    delete,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Account deactivated"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn deactivate_me(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
) -> Result<Json<ApiResponse<()>>> {
    service.deactivate(user.user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Account deactivated".to_string()),
        None,
    )))
}
