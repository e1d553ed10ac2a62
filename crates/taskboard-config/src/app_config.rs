//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Redis configuration.
    #[serde(default)]
    pub redis: RedisConfig,

    /// Cache TTL tuning.
    #[serde(default)]
    pub cache: CacheTtlConfig,

    /// Rate limiting configuration.
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "taskboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Redis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL.
    pub url: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Enable Redis (can be disabled for local development).
    pub enabled: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            enabled: true,
        }
    }
}

/// Per-entity cache TTLs, in seconds.
///
/// Defaults reflect how often each projection changes relative to how often
/// it is read: user rows barely change (1 h), task lists change on every
/// create/delete (5 min), individual tasks sit between (10 min), and
/// sessions live exactly as long as the tokens they track (7 days).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheTtlConfig {
    /// TTL for cached user projections.
    pub user_ttl_secs: u64,
    /// TTL for cached per-user task lists.
    pub task_list_ttl_secs: u64,
    /// TTL for individually cached tasks.
    pub task_ttl_secs: u64,
    /// TTL for session records; must match token validity.
    pub session_ttl_secs: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            user_ttl_secs: 3600,
            task_list_ttl_secs: 300,
            task_ttl_secs: 600,
            session_ttl_secs: 7 * 86_400,
        }
    }
}

impl CacheTtlConfig {
    /// TTL for cached user projections.
    #[must_use]
    pub const fn user_ttl(&self) -> Duration {
        Duration::from_secs(self.user_ttl_secs)
    }

    /// TTL for cached per-user task lists.
    #[must_use]
    pub const fn task_list_ttl(&self) -> Duration {
        Duration::from_secs(self.task_list_ttl_secs)
    }

    /// TTL for individually cached tasks.
    #[must_use]
    pub const fn task_ttl(&self) -> Duration {
        Duration::from_secs(self.task_ttl_secs)
    }

    /// Session horizon.
    #[must_use]
    pub const fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length in seconds. The window is anchored to the first
    /// request, not to wall-clock boundaries.
    pub window_secs: u64,
    /// Default maximum requests per window.
    pub max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: 60,
            max_requests: 100,
        }
    }
}

impl RateLimitConfig {
    /// Window length.
    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "taskboard_cache=debug").
    pub log_level: String,
    /// Emit logs as JSON.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
