use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::action_items::models::{ActionItem, ActionItemPriority, ActionItemStatus};
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

/// Request DTO for creating an action item. The target meeting must belong
/// to the caller; the item's owner is stamped from the verified identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActionItemDto {
    pub meeting_id: Uuid,

    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = crate::shared::validation::not_blank)
    )]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Assignee must not exceed 255 characters"))]
    pub assignee: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    /// Defaults to `medium`
    pub priority: Option<ActionItemPriority>,
}

/// Request DTO for partially updating an action item
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActionItemDto {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = crate::shared::validation::not_blank)
    )]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Assignee must not exceed 255 characters"))]
    pub assignee: Option<String>,

    pub due_date: Option<DateTime<Utc>>,

    pub priority: Option<ActionItemPriority>,

    pub status: Option<ActionItemStatus>,
}

/// Query parameters for listing action items
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ActionItemListQuery {
    /// Restrict to a single meeting
    pub meeting_id: Option<Uuid>,

    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ActionItemListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Response DTO for an action item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionItemResponseDto {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: ActionItemPriority,
    pub status: ActionItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ActionItem> for ActionItemResponseDto {
    fn from(a: ActionItem) -> Self {
        Self {
            id: a.id,
            meeting_id: a.meeting_id,
            title: a.title,
            description: a.description,
            assignee: a.assignee,
            due_date: a.due_date,
            priority: a.priority,
            status: a.status,
            completed_at: a.completed_at,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_title() {
        let dto = CreateActionItemDto {
            meeting_id: Uuid::new_v4(),
            title: String::new(),
            description: None,
            assignee: None,
            due_date: None,
            priority: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_whitespace_only_title() {
        let dto = CreateActionItemDto {
            meeting_id: Uuid::new_v4(),
            title: "   ".to_string(),
            description: None,
            assignee: None,
            due_date: None,
            priority: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&ActionItemStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_list_query_defaults() {
        let q: ActionItemListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
        assert!(q.meeting_id.is_none());
    }
}
