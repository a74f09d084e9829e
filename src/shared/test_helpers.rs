use axum::{extract::Request, middleware::Next, response::Response, Router};
use uuid::Uuid;

use crate::features::auth::models::AuthenticatedUser;

pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: Uuid::nil(),
        email: "test@meetscribe.dev".to_string(),
    }
}

async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Wrap a router so every request carries a pre-verified identity, bypassing
/// token verification in handler tests.
pub fn with_test_user(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}
