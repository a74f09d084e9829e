use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::auth::models::AuthenticatedUser;

/// Custom JSON extractor that provides consistent error responses.
/// Malformed bodies are rejected with a 400 before they reach business logic.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// The auth middleware inserts the verified identity into request extensions;
/// handlers receive it through this extractor. Reaching a protected handler
/// without it is a routing mistake and is rejected as unauthenticated.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Auth("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::with_test_user;
    use axum::{http::StatusCode, routing::get, routing::post, Router};
    use axum_test::TestServer;
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct EchoDto {
        value: String,
    }

    async fn echo(AppJson(_dto): AppJson<EchoDto>) -> StatusCode {
        StatusCode::OK
    }

    async fn whoami(user: AuthenticatedUser) -> String {
        user.email
    }

    #[tokio::test]
    async fn test_malformed_json_rejected_with_400() {
        let app = Router::new().route("/echo", post(echo));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/echo")
            .add_header("content-type", "application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_shape_rejected_with_400() {
        let app = Router::new().route("/echo", post(echo));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/echo")
            .json(&serde_json::json!({"unexpected": 1}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_identity_rejected_with_401() {
        let app = Router::new().route("/whoami", get(whoami));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_injected_identity_resolves() {
        let app = with_test_user(Router::new().route("/whoami", get(whoami)));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/whoami").await;

        response.assert_status_ok();
        assert_eq!(response.text(), "test@meetscribe.dev");
    }
}
