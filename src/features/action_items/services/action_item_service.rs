use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::action_items::dtos::{
    ActionItemResponseDto, CreateActionItemDto, UpdateActionItemDto,
};
use crate::features::action_items::models::{ActionItem, ActionItemPriority, ActionItemStatus};
use crate::shared::types::PaginationQuery;

const ACTION_ITEM_COLUMNS: &str = "id, meeting_id, user_id, title, description, assignee, \
     due_date, priority, status, completed_at, created_at, updated_at";

/// Service for action item operations. Items are owned directly by the
/// user in addition to being attached to a meeting, so every query is
/// scoped by `user_id` just like the meeting queries.
pub struct ActionItemService {
    pool: PgPool,
}

impl ActionItemService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        dto: CreateActionItemDto,
    ) -> Result<ActionItemResponseDto> {
        // The target meeting must be the caller's own. A foreign meeting id
        // is indistinguishable from a nonexistent one.
        let meeting_exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM meetings WHERE id = $1 AND user_id = $2")
                .bind(dto.meeting_id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to check meeting ownership: {:?}", e);
                    AppError::Database(e)
                })?;

        if meeting_exists.is_none() {
            return Err(AppError::NotFound(format!(
                "Meeting '{}' not found",
                dto.meeting_id
            )));
        }

        let item = sqlx::query_as::<_, ActionItem>(&format!(
            r#"
            INSERT INTO action_items (meeting_id, user_id, title, description, assignee, due_date, priority)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ACTION_ITEM_COLUMNS}
            "#
        ))
        .bind(dto.meeting_id)
        .bind(user_id)
        .bind(dto.title.trim())
        .bind(dto.description)
        .bind(dto.assignee)
        .bind(dto.due_date)
        .bind(dto.priority.unwrap_or(ActionItemPriority::Medium))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create action item: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Action item created: id={}, meeting={}, user={}",
            item.id,
            item.meeting_id,
            user_id
        );

        Ok(item.into())
    }

    pub async fn get_by_id(&self, id: Uuid, user_id: Uuid) -> Result<ActionItemResponseDto> {
        let item = sqlx::query_as::<_, ActionItem>(&format!(
            r#"
            SELECT {ACTION_ITEM_COLUMNS}
            FROM action_items
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get action item by id: {:?}", e);
            AppError::Database(e)
        })?;

        item.map(|i| i.into())
            .ok_or_else(|| AppError::NotFound(format!("Action item '{}' not found", id)))
    }

    /// List the user's action items, optionally narrowed to one meeting.
    /// A `meeting_id` the user does not own simply matches nothing.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        meeting_id: Option<Uuid>,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<ActionItemResponseDto>, i64)> {
        let items = sqlx::query_as::<_, ActionItem>(&format!(
            r#"
            SELECT {ACTION_ITEM_COLUMNS}
            FROM action_items
            WHERE user_id = $1 AND ($2::uuid IS NULL OR meeting_id = $2::uuid)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(user_id)
        .bind(meeting_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list action items: {:?}", e);
            AppError::Database(e)
        })?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM action_items
            WHERE user_id = $1 AND ($2::uuid IS NULL OR meeting_id = $2::uuid)
            "#,
        )
        .bind(user_id)
        .bind(meeting_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count action items: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((items.into_iter().map(|i| i.into()).collect(), total))
    }

    /// Partial update. The current row is read first (ownership-scoped) so
    /// the `completed_at` decision goes through `resolve_completed_at`.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: UpdateActionItemDto,
    ) -> Result<ActionItemResponseDto> {
        let current = sqlx::query_as::<_, ActionItem>(&format!(
            r#"
            SELECT {ACTION_ITEM_COLUMNS}
            FROM action_items
            WHERE id = $1 AND user_id = $2
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load action item for update: {:?}", e);
            AppError::Database(e)
        })?
        .ok_or_else(|| AppError::NotFound(format!("Action item '{}' not found", id)))?;

        let status_after = dto.status.unwrap_or(current.status);
        let completed_at = resolve_completed_at(current.completed_at, status_after, Utc::now());

        let item = sqlx::query_as::<_, ActionItem>(&format!(
            r#"
            UPDATE action_items SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                assignee = COALESCE($5, assignee),
                due_date = COALESCE($6, due_date),
                priority = COALESCE($7, priority),
                status = $8,
                completed_at = $9,
                updated_at = now()
            WHERE id = $1 AND user_id = $2
            RETURNING {ACTION_ITEM_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(dto.title)
        .bind(dto.description)
        .bind(dto.assignee)
        .bind(dto.due_date)
        .bind(dto.priority)
        .bind(status_after)
        .bind(completed_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update action item: {:?}", e);
            AppError::Database(e)
        })?;

        item.map(|i| i.into())
            .ok_or_else(|| AppError::NotFound(format!("Action item '{}' not found", id)))
    }

    /// Delete an owned action item.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM action_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete action item: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Action item '{}' not found",
                id
            )));
        }

        tracing::info!("Action item deleted: id={}, user={}", id, user_id);

        Ok(())
    }
}

/// Decide the stored `completed_at` after an update. The timestamp is set on
/// the first transition to `completed` and never changes afterwards, even if
/// the item is cancelled, reopened, or completed again.
fn resolve_completed_at(
    existing: Option<DateTime<Utc>>,
    status_after: ActionItemStatus,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if existing.is_some() {
        return existing;
    }

    if status_after == ActionItemStatus::Completed {
        return Some(now);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_first_completion_stamps_timestamp() {
        let stamped = resolve_completed_at(None, ActionItemStatus::Completed, at(100));
        assert_eq!(stamped, Some(at(100)));
    }

    #[test]
    fn test_recompletion_preserves_original_timestamp() {
        let stamped = resolve_completed_at(Some(at(100)), ActionItemStatus::Completed, at(500));
        assert_eq!(stamped, Some(at(100)));
    }

    #[test]
    fn test_cancel_after_completion_preserves_timestamp() {
        let stamped = resolve_completed_at(Some(at(100)), ActionItemStatus::Cancelled, at(500));
        assert_eq!(stamped, Some(at(100)));

        let stamped = resolve_completed_at(Some(at(100)), ActionItemStatus::Pending, at(500));
        assert_eq!(stamped, Some(at(100)));
    }

    #[test]
    fn test_non_completed_statuses_leave_timestamp_unset() {
        for status in [
            ActionItemStatus::Pending,
            ActionItemStatus::InProgress,
            ActionItemStatus::Cancelled,
        ] {
            assert_eq!(resolve_completed_at(None, status, at(100)), None);
        }
    }
}
