use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Action item priority matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "action_item_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionItemPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Action item status matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "action_item_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActionItemStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl std::fmt::Display for ActionItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionItemStatus::Pending => write!(f, "pending"),
            ActionItemStatus::InProgress => write!(f, "in_progress"),
            ActionItemStatus::Completed => write!(f, "completed"),
            ActionItemStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Database model for an action item
#[derive(Debug, Clone, FromRow)]
pub struct ActionItem {
    pub id: Uuid,
    pub meeting_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assignee: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: ActionItemPriority,
    pub status: ActionItemStatus,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
