//! In-memory, per-client-IP request throttling.
//!
//! Two limiter instances are mounted in the router: a strict one in front
//! of the credential endpoints and a looser one over the rest of the API.
//! Counting is a fixed window; the first request from an address opens the
//! window and the counter resets when it expires.

pub mod limiter;
pub mod middleware;

pub use limiter::{RateDecision, RateLimiter};
pub use middleware::rate_limit_middleware;
