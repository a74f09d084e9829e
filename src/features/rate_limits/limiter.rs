use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::core::config::RateLimitConfig;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    /// Over the limit; `retry_after` is the time left in the window.
    Limited { retry_after: Duration },
}

#[derive(Debug)]
struct WindowEntry {
    window_start: Instant,
    count: u32,
}

/// Fixed-window per-IP rate limiter. Cloning shares the underlying state,
/// so a limiter can be both a router layer state and held elsewhere.
#[derive(Clone)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    state: Arc<Mutex<HashMap<IpAddr, WindowEntry>>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Strict limiter for credential endpoints.
    pub fn for_auth(config: &RateLimitConfig) -> Self {
        Self::new(config.auth_max_requests, config.window)
    }

    /// General limiter for the rest of the API.
    pub fn for_api(config: &RateLimitConfig) -> Self {
        Self::new(config.api_max_requests, config.window)
    }

    pub fn check(&self, ip: IpAddr) -> RateDecision {
        self.check_at(ip, Instant::now())
    }

    /// Count a request against the address's current window. Exactly
    /// `max_requests` calls pass per window; the next one is limited.
    pub fn check_at(&self, ip: IpAddr, now: Instant) -> RateDecision {
        let mut state = self.state.lock();

        let entry = state.entry(ip).or_insert(WindowEntry {
            window_start: now,
            count: 0,
        });

        if now.duration_since(entry.window_start) >= self.window {
            entry.window_start = now;
            entry.count = 0;
        }

        if entry.count >= self.max_requests {
            let elapsed = now.duration_since(entry.window_start);
            return RateDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            };
        }

        entry.count += 1;
        RateDecision::Allowed
    }

    /// Drop entries whose window has fully elapsed. Called opportunistically;
    /// correctness does not depend on it.
    pub fn sweep(&self, now: Instant) {
        let mut state = self.state.lock();
        state.retain(|_, entry| now.duration_since(entry.window_start) < self.window);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([10, 0, 0, last])
    }

    #[test]
    fn test_allows_up_to_limit_then_rejects() {
        let limiter = RateLimiter::new(5, Duration::from_secs(900));
        let now = Instant::now();

        for _ in 0..5 {
            assert_eq!(limiter.check_at(ip(1), now), RateDecision::Allowed);
        }

        match limiter.check_at(ip(1), now) {
            RateDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(900));
            }
            RateDecision::Allowed => panic!("sixth request should be limited"),
        }
    }

    #[test]
    fn test_addresses_are_counted_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let now = Instant::now();

        assert_eq!(limiter.check_at(ip(1), now), RateDecision::Allowed);
        assert_eq!(limiter.check_at(ip(2), now), RateDecision::Allowed);
        assert!(matches!(
            limiter.check_at(ip(1), now),
            RateDecision::Limited { .. }
        ));
    }

    #[test]
    fn test_window_expiry_resets_count() {
        let limiter = RateLimiter::new(2, Duration::from_secs(900));
        let start = Instant::now();

        assert_eq!(limiter.check_at(ip(1), start), RateDecision::Allowed);
        assert_eq!(limiter.check_at(ip(1), start), RateDecision::Allowed);
        assert!(matches!(
            limiter.check_at(ip(1), start),
            RateDecision::Limited { .. }
        ));

        let later = start + Duration::from_secs(901);
        assert_eq!(limiter.check_at(ip(1), later), RateDecision::Allowed);
    }

    #[test]
    fn test_retry_after_shrinks_as_window_ages() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let start = Instant::now();

        assert_eq!(limiter.check_at(ip(1), start), RateDecision::Allowed);

        let mid = start + Duration::from_secs(300);
        match limiter.check_at(ip(1), mid) {
            RateDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(600));
            }
            RateDecision::Allowed => panic!("request inside window should be limited"),
        }
    }

    #[test]
    fn test_sweep_drops_expired_entries() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let start = Instant::now();

        assert_eq!(limiter.check_at(ip(1), start), RateDecision::Allowed);
        limiter.sweep(start + Duration::from_secs(901));

        // A fresh window opens after the sweep.
        assert_eq!(
            limiter.check_at(ip(1), start + Duration::from_secs(902)),
            RateDecision::Allowed
        );
    }
}
