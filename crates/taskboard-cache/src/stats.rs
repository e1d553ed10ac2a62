//! Operational introspection over the cache backend.

use crate::store::CacheStore;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Read-only snapshot of cache backend connectivity and size.
///
/// Surfaced verbatim as JSON by the admin-only introspection endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    /// Whether the backend is currently reachable.
    pub connected: bool,
    /// Number of keys in the backing store, when reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_size: Option<u64>,
    /// Opaque backend server information, when reachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Why the backend is unreachable, when it is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cache backend health, for the system health endpoint.
///
/// Advisory only: the cache being unhealthy never marks the overall
/// service degraded; only the primary data store can do that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreHealth {
    Healthy,
    Unhealthy,
}

impl fmt::Display for StoreHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Unhealthy => write!(f, "unhealthy"),
        }
    }
}

/// Read-only monitor over the cache store. Never mutates.
pub struct CacheMonitor {
    store: Arc<dyn CacheStore>,
}

impl CacheMonitor {
    /// Creates a monitor over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    /// Gathers a connectivity/size snapshot. Reports unreachable state
    /// explicitly instead of erroring.
    pub async fn stats(&self) -> CacheStats {
        if !self.store.is_enabled() {
            return CacheStats {
                connected: false,
                db_size: None,
                info: None,
                error: Some("cache is disabled".to_string()),
            };
        }

        if !self.store.ensure_connection().await {
            return CacheStats {
                connected: false,
                db_size: None,
                info: None,
                error: Some("cache backend unreachable".to_string()),
            };
        }

        // Size and info are best-effort even on a live connection.
        let db_size = self.store.db_size().await.ok();
        let info = self.store.server_info().await.ok();

        CacheStats {
            connected: true,
            db_size,
            info,
            error: None,
        }
    }

    /// Reports backend reachability for the health endpoint.
    pub async fn health(&self) -> StoreHealth {
        if self.store.is_enabled() && self.store.ensure_connection().await {
            StoreHealth::Healthy
        } else {
            StoreHealth::Unhealthy
        }
    }
}
