use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::action_items::{
    dtos as action_items_dtos, handlers as action_items_handlers, models as action_items_models,
};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::meetings::{
    dtos as meetings_dtos, handlers as meetings_handlers, models as meetings_models,
};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::get_me,
        // Users
        users_handlers::deactivate_me,
        // Meetings
        meetings_handlers::list_meetings,
        meetings_handlers::get_meeting,
        meetings_handlers::create_meeting,
        meetings_handlers::update_meeting,
        meetings_handlers::delete_meeting,
        // Action items
        action_items_handlers::list_action_items,
        action_items_handlers::get_action_item,
        action_items_handlers::create_action_item,
        action_items_handlers::update_action_item,
        action_items_handlers::delete_action_item,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            // Users
            users_dtos::UserResponseDto,
            ApiResponse<users_dtos::UserResponseDto>,
            // Meetings
            meetings_models::MeetingStatus,
            meetings_dtos::CreateMeetingDto,
            meetings_dtos::UpdateMeetingDto,
            meetings_dtos::MeetingResponseDto,
            ApiResponse<Vec<meetings_dtos::MeetingResponseDto>>,
            ApiResponse<meetings_dtos::MeetingResponseDto>,
            // Action items
            action_items_models::ActionItemPriority,
            action_items_models::ActionItemStatus,
            action_items_dtos::CreateActionItemDto,
            action_items_dtos::UpdateActionItemDto,
            action_items_dtos::ActionItemResponseDto,
            ApiResponse<Vec<action_items_dtos::ActionItemResponseDto>>,
            ApiResponse<action_items_dtos::ActionItemResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login, and current-user lookup"),
        (name = "users", description = "Account management"),
        (name = "meetings", description = "Meeting records owned by the caller"),
        (name = "action-items", description = "Action items extracted from meetings"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "MeetScribe API",
        version = "0.1.0",
        description = "API documentation for MeetScribe",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
