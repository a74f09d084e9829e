use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::action_items::dtos::{
    ActionItemListQuery, ActionItemResponseDto, CreateActionItemDto, UpdateActionItemDto,
};
use crate::features::action_items::services::ActionItemService;
use crate::features::auth::models::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// List the caller's action items
#[utoipa::path(
    get,
    path = "/api/action-items",
    params(ActionItemListQuery),
    responses(
        (status = 200, description = "List of caller's action items", body = ApiResponse<Vec<ActionItemResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "action-items"
)]
pub async fn list_action_items(
    user: AuthenticatedUser,
    State(service): State<Arc<ActionItemService>>,
    Query(query): Query<ActionItemListQuery>,
) -> Result<Json<ApiResponse<Vec<ActionItemResponseDto>>>> {
    let (items, total) = service
        .list_by_user(user.user_id, query.meeting_id, &query.pagination())
        .await?;
    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// Get an action item by ID
#[utoipa::path(
    get,
    path = "/api/action-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Action item ID")
    ),
    responses(
        (status = 200, description = "Action item found", body = ApiResponse<ActionItemResponseDto>),
        (status = 404, description = "Action item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "action-items"
)]
pub async fn get_action_item(
    user: AuthenticatedUser,
    State(service): State<Arc<ActionItemService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ActionItemResponseDto>>> {
    let item = service.get_by_id(id, user.user_id).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Create an action item under one of the caller's meetings
#[utoipa::path(
    post,
    path = "/api/action-items",
    request_body = CreateActionItemDto,
    responses(
        (status = 201, description = "Action item created", body = ApiResponse<ActionItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "action-items"
)]
pub async fn create_action_item(
    user: AuthenticatedUser,
    State(service): State<Arc<ActionItemService>>,
    AppJson(dto): AppJson<CreateActionItemDto>,
) -> Result<(StatusCode, Json<ApiResponse<ActionItemResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.create(user.user_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(item), None, None)),
    ))
}

/// Partially update an action item
#[utoipa::path(
    patch,
    path = "/api/action-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Action item ID")
    ),
    request_body = UpdateActionItemDto,
    responses(
        (status = 200, description = "Action item updated", body = ApiResponse<ActionItemResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Action item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "action-items"
)]
pub async fn update_action_item(
    user: AuthenticatedUser,
    State(service): State<Arc<ActionItemService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateActionItemDto>,
) -> Result<Json<ApiResponse<ActionItemResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let item = service.update(id, user.user_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(item), None, None)))
}

/// Delete an action item
#[utoipa::path(
    delete,
    path = "/api/action-items/{id}",
    params(
        ("id" = Uuid, Path, description = "Action item ID")
    ),
    responses(
        (status = 200, description = "Action item deleted"),
        (status = 404, description = "Action item not found")
    ),
    security(("bearer_auth" = [])),
    tag = "action-items"
)]
pub async fn delete_action_item(
    user: AuthenticatedUser,
    State(service): State<Arc<ActionItemService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Action item deleted".to_string()),
        None,
    )))
}
