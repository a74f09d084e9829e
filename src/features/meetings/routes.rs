use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::meetings::handlers;
use crate::features::meetings::services::MeetingService;

/// Create routes for the meetings feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<MeetingService>) -> Router {
    Router::new()
        .route(
            "/api/meetings",
            get(handlers::list_meetings).post(handlers::create_meeting),
        )
        .route(
            "/api/meetings/{id}",
            get(handlers::get_meeting)
                .patch(handlers::update_meeting)
                .delete(handlers::delete_meeting),
        )
        .with_state(service)
}
