use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::action_items::handlers;
use crate::features::action_items::services::ActionItemService;

/// Create routes for the action items feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<ActionItemService>) -> Router {
    Router::new()
        .route(
            "/api/action-items",
            get(handlers::list_action_items).post(handlers::create_action_item),
        )
        .route(
            "/api/action-items/{id}",
            get(handlers::get_action_item)
                .patch(handlers::update_action_item)
                .delete(handlers::delete_action_item),
        )
        .with_state(service)
}
