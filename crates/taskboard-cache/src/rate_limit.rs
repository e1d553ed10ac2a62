//! Fixed-window rate limiter backed by the cache store.

use crate::keys;
use crate::store::CacheStore;
use serde::Serialize;
use std::sync::Arc;
use taskboard_config::RateLimitConfig;
use taskboard_core::UserId;
use tracing::{debug, warn};

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimitDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Requests left in the current window, floored at zero.
    pub remaining: u32,
}

/// Fixed-window counter per (user, endpoint).
///
/// The window is anchored to the first request in it, not to wall-clock
/// boundaries: the counter's expiry is set when INCR creates the key.
/// Enforcement is **fail-open**: backend failure admits the request with a
/// full window rather than rejecting traffic during a cache outage.
pub struct FixedWindowLimiter {
    store: Arc<dyn CacheStore>,
    config: RateLimitConfig,
}

impl FixedWindowLimiter {
    /// Creates a limiter with the given window tuning.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, config: RateLimitConfig) -> Self {
        Self { store, config }
    }

    /// Counts a request against `(user_id, endpoint)` and decides whether
    /// it may proceed under `max_requests` per window.
    pub async fn check(&self, user_id: UserId, endpoint: &str, max_requests: u32) -> RateLimitDecision {
        let open = RateLimitDecision {
            allowed: true,
            remaining: max_requests,
        };

        if !self.store.is_enabled() {
            return open;
        }

        let key = keys::rate_limit(user_id, endpoint);
        let count = match self.store.incr(&key).await {
            Ok(count) => count,
            Err(e) => {
                warn!("Rate-limit check for '{}' failed open: {}", key, e);
                return open;
            }
        };

        // A post-increment value of 1 means INCR just created the key;
        // that first request anchors the window.
        if count == 1 {
            if let Err(e) = self.store.expire(&key, self.config.window()).await {
                warn!("Failed to anchor rate-limit window for '{}': {}", key, e);
            }
        }

        let allowed = count <= i64::from(max_requests);
        let remaining = u32::try_from((i64::from(max_requests) - count).max(0)).unwrap_or(0);

        if !allowed {
            debug!("Rate limit exceeded for '{}' ({} > {})", key, count, max_requests);
        }

        RateLimitDecision { allowed, remaining }
    }

    /// [`check`](Self::check) with the configured default maximum.
    pub async fn check_default(&self, user_id: UserId, endpoint: &str) -> RateLimitDecision {
        self.check(user_id, endpoint, self.config.max_requests).await
    }
}
