use std::sync::Arc;

use axum::{routing::delete, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
///
/// Note: This feature requires authentication
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/me", delete(handlers::deactivate_me))
        .with_state(service)
}
