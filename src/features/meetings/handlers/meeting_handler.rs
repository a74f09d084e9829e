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
use crate::features::auth::models::AuthenticatedUser;
use crate::features::meetings::dtos::{CreateMeetingDto, MeetingResponseDto, UpdateMeetingDto};
use crate::features::meetings::services::MeetingService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List the caller's meetings
#[utoipa::path(
    get,
    path = "/api/meetings",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of caller's meetings", body = ApiResponse<Vec<MeetingResponseDto>>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "meetings"
)]
pub async fn list_meetings(
    user: AuthenticatedUser,
    State(service): State<Arc<MeetingService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MeetingResponseDto>>>> {
    let (meetings, total) = service.list_by_user(user.user_id, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(meetings),
        None,
        Some(Meta { total }),
    )))
}

/// Get a meeting by ID
#[utoipa::path(
    get,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID")
    ),
    responses(
        (status = 200, description = "Meeting found", body = ApiResponse<MeetingResponseDto>),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "meetings"
)]
pub async fn get_meeting(
    user: AuthenticatedUser,
    State(service): State<Arc<MeetingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MeetingResponseDto>>> {
    let meeting = service.get_by_id(id, user.user_id).await?;
    Ok(Json(ApiResponse::success(Some(meeting), None, None)))
}

/// Create a meeting
#[utoipa::path(
    post,
    path = "/api/meetings",
    request_body = CreateMeetingDto,
    responses(
        (status = 201, description = "Meeting created", body = ApiResponse<MeetingResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = [])),
    tag = "meetings"
)]
pub async fn create_meeting(
    user: AuthenticatedUser,
    State(service): State<Arc<MeetingService>>,
    AppJson(dto): AppJson<CreateMeetingDto>,
) -> Result<(StatusCode, Json<ApiResponse<MeetingResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let meeting = service.create(user.user_id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(meeting), None, None)),
    ))
}

/// Partially update a meeting
#[utoipa::path(
    patch,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID")
    ),
    request_body = UpdateMeetingDto,
    responses(
        (status = 200, description = "Meeting updated", body = ApiResponse<MeetingResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "meetings"
)]
pub async fn update_meeting(
    user: AuthenticatedUser,
    State(service): State<Arc<MeetingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMeetingDto>,
) -> Result<Json<ApiResponse<MeetingResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let meeting = service.update(id, user.user_id, dto).await?;
    Ok(Json(ApiResponse::success(Some(meeting), None, None)))
}

/// Delete a meeting
#[utoipa::path(
    delete,
    path = "/api/meetings/{id}",
    params(
        ("id" = Uuid, Path, description = "Meeting ID")
    ),
    responses(
        (status = 200, description = "Meeting deleted"),
        (status = 404, description = "Meeting not found")
    ),
    security(("bearer_auth" = [])),
    tag = "meetings"
)]
pub async fn delete_meeting(
    user: AuthenticatedUser,
    State(service): State<Arc<MeetingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id, user.user_id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Meeting deleted".to_string()),
        None,
    )))
}
