//! Cache key generators for consistent key naming.
//!
//! All keys are composed as `{namespace}:{id}` or `{namespace}:{id}:{subid}`
//! from a fixed set of namespaces. Handlers and middleware never build keys
//! by hand; everything goes through these composers.

use taskboard_core::{TaskId, TokenId, UserId};

/// Namespace for whole-user projections.
pub const NS_USER: &str = "user";

/// Namespace for per-user task lists.
pub const NS_TASK_LIST: &str = "tasks";

/// Namespace for individually cached tasks.
pub const NS_TASK: &str = "task";

/// Namespace for issued-session markers.
pub const NS_SESSION: &str = "session";

/// Namespace for rate-limit counters.
pub const NS_RATE_LIMIT: &str = "ratelimit";

/// Key for a cached user projection.
#[must_use]
pub fn user(id: UserId) -> String {
    format!("{}:{}", NS_USER, id)
}

/// Key for a user's ordered task list.
#[must_use]
pub fn task_list(user_id: UserId) -> String {
    format!("{}:{}", NS_TASK_LIST, user_id)
}

/// Key for an individually cached task.
#[must_use]
pub fn task(id: TaskId) -> String {
    format!("{}:{}", NS_TASK, id)
}

/// Key for an issued-session marker.
#[must_use]
pub fn session(user_id: UserId, token_id: TokenId) -> String {
    format!("{}:{}:{}", NS_SESSION, user_id, token_id)
}

/// Pattern matching every session key of one user, for bulk revocation.
#[must_use]
pub fn session_pattern(user_id: UserId) -> String {
    format!("{}:{}:*", NS_SESSION, user_id)
}

/// Key for a fixed-window rate-limit counter.
#[must_use]
pub fn rate_limit(user_id: UserId, endpoint: &str) -> String {
    format!("{}:{}:{}", NS_RATE_LIMIT, user_id, endpoint)
}
