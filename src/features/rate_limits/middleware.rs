use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::core::error::AppError;
use crate::features::rate_limits::limiter::{RateDecision, RateLimiter};

/// Reject requests over the caller's per-IP budget with 429 and a
/// `Retry-After` header. Requires the app to be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    match limiter.check(addr.ip()) {
        RateDecision::Allowed => next.run(request).await,
        RateDecision::Limited { retry_after } => {
            tracing::warn!(
                "Rate limit exceeded: ip={}, path={}",
                addr.ip(),
                request.uri().path()
            );

            let mut response =
                AppError::RateLimitExceeded("Too many requests, please try again later".to_string())
                    .into_response();
            if let Ok(value) = HeaderValue::from_str(&retry_after.as_secs().max(1).to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
    }
}
