use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::meetings::models::{Meeting, MeetingStatus};

/// Request DTO for creating a meeting.
///
/// No owner field exists here: the owner is always stamped from the verified
/// identity, never from request body content.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingDto {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = crate::shared::validation::not_blank)
    )]
    pub title: String,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    /// Initial status (defaults to `uploading`)
    pub status: Option<MeetingStatus>,

    pub participants: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration_seconds: Option<i32>,

    #[validate(length(max = 1024, message = "Storage path must not exceed 1024 characters"))]
    pub storage_path: Option<String>,
}

/// Request DTO for partially updating a meeting. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingDto {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = crate::shared::validation::not_blank)
    )]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description must not exceed 5000 characters"))]
    pub description: Option<String>,

    pub status: Option<MeetingStatus>,

    pub participants: Option<Vec<String>>,

    #[validate(range(min = 0, message = "Duration must not be negative"))]
    pub duration_seconds: Option<i32>,

    #[validate(length(max = 1024, message = "Storage path must not exceed 1024 characters"))]
    pub storage_path: Option<String>,
}

/// Response DTO for a meeting
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResponseDto {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: MeetingStatus,
    pub participants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Meeting> for MeetingResponseDto {
    fn from(m: Meeting) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            status: m.status,
            participants: m.participants,
            duration_seconds: m.duration_seconds,
            storage_path: m.storage_path,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_title() {
        let dto = CreateMeetingDto {
            title: String::new(),
            description: None,
            status: None,
            participants: None,
            duration_seconds: None,
            storage_path: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_whitespace_only_title() {
        let dto = CreateMeetingDto {
            title: "   ".to_string(),
            description: None,
            status: None,
            participants: None,
            duration_seconds: None,
            storage_path: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_update_rejects_whitespace_only_title() {
        let dto = UpdateMeetingDto {
            title: Some("  \t".to_string()),
            description: None,
            status: None,
            participants: None,
            duration_seconds: None,
            storage_path: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_rejects_negative_duration() {
        let dto = CreateMeetingDto {
            title: "Weekly sync".to_string(),
            description: None,
            status: None,
            participants: None,
            duration_seconds: Some(-1),
            storage_path: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&MeetingStatus::Transcribing).unwrap();
        assert_eq!(json, "\"transcribing\"");
    }
}
