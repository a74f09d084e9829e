use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::meetings::dtos::{CreateMeetingDto, MeetingResponseDto, UpdateMeetingDto};
use crate::features::meetings::models::{Meeting, MeetingStatus};
use crate::shared::types::PaginationQuery;

const MEETING_COLUMNS: &str = "id, user_id, title, description, status, participants, \
     duration_seconds, storage_path, created_at, updated_at";

/// Service for meeting operations. Every query predicate includes
/// `user_id = $owner`; an id that matches someone else's row falls through
/// the same `NotFound` path as a missing one.
pub struct MeetingService {
    pool: PgPool,
}

impl MeetingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: Uuid, dto: CreateMeetingDto) -> Result<MeetingResponseDto> {
        let meeting = sqlx::query_as::<_, Meeting>(&format!(
            r#"
            INSERT INTO meetings (user_id, title, description, status, participants, duration_seconds, storage_path)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {MEETING_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(dto.title.trim())
        .bind(dto.description)
        .bind(dto.status.unwrap_or(MeetingStatus::Uploading))
        .bind(dto.participants.unwrap_or_default())
        .bind(dto.duration_seconds)
        .bind(dto.storage_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create meeting: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Meeting created: id={}, user={}", meeting.id, user_id);

        Ok(meeting.into())
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<MeetingResponseDto> {
        let meeting = sqlx::query_as::<_, Meeting>(&format!(
            r#"
            SELECT {MEETING_COLUMNS}
            FROM meetings
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get meeting by id: {:?}", e);
            AppError::Database(e)
        })?;

        meeting
            .map(|m| m.into())
            .ok_or_else(|| AppError::NotFound(format!("Meeting '{}' not found", id)))
    }

    /// List the user's meetings, newest first. Returns the page plus the
    /// total row count for pagination metadata.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<MeetingResponseDto>, i64)> {
        let meetings = sqlx::query_as::<_, Meeting>(&format!(
            r#"
            SELECT {MEETING_COLUMNS}
            FROM meetings
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list meetings: {:?}", e);
            AppError::Database(e)
        })?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM meetings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count meetings: {:?}", e);
                AppError::Database(e)
            })?;

        Ok((meetings.into_iter().map(|m| m.into()).collect(), total))
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: UpdateMeetingDto,
    ) -> Result<MeetingResponseDto> {
        let meeting = sqlx::query_as::<_, Meeting>(&format!(
            r#"
            UPDATE meetings SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                participants = COALESCE($6, participants),
                duration_seconds = COALESCE($7, duration_seconds),
                storage_path = COALESCE($8, storage_path),
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING {MEETING_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.status)
        .bind(dto.participants)
        .bind(dto.duration_seconds)
        .bind(dto.storage_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update meeting: {:?}", e);
            AppError::Database(e)
        })?;

        meeting
            .map(|m| m.into())
            .ok_or_else(|| AppError::NotFound(format!("Meeting '{}' not found", id)))
    }

    /// Delete an owned meeting. Attached action items go with it via the
    /// foreign key cascade.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete meeting: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Meeting '{}' not found", id)));
        }

        tracing::info!("Meeting deleted: id={}, user={}", id, user_id);

        Ok(())
    }
}
