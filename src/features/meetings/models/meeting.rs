use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Meeting lifecycle status matching the database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "meeting_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Uploading,
    Processing,
    Transcribing,
    Analyzing,
    Completed,
    Failed,
}

impl std::fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeetingStatus::Uploading => write!(f, "uploading"),
            MeetingStatus::Processing => write!(f, "processing"),
            MeetingStatus::Transcribing => write!(f, "transcribing"),
            MeetingStatus::Analyzing => write!(f, "analyzing"),
            MeetingStatus::Completed => write!(f, "completed"),
            MeetingStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Database model for a meeting
#[derive(Debug, Clone, FromRow)]
pub struct Meeting {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: MeetingStatus,
    pub participants: Vec<String>,
    pub duration_seconds: Option<i32>,
    pub storage_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
